// ABOUTME: Assessment horizon (now vs +30 minutes) and advisory message locale
// ABOUTME: Keys for the message catalog, with parsing for configuration values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which point in time an assessment describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Horizon {
    /// The current instant
    Now,
    /// Thirty minutes after the current instant
    Forecast30m,
}

/// Language of rendered advisory messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Korean
    #[default]
    Ko,
    /// English
    En,
}

impl Locale {
    /// Language tag of the locale
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ko => "ko",
            Self::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ko" | "ko-kr" | "kr" => Ok(Self::Ko),
            "en" | "en-us" | "en-gb" => Ok(Self::En),
            other => Err(format!("unsupported locale: {other}")),
        }
    }
}
