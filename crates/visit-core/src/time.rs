// ABOUTME: Korea Standard Time helpers and the injectable Clock abstraction
// ABOUTME: Lets request handlers read wall time while tests pin it to a fixed instant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::constants::time::KST_OFFSET_SECONDS;
use chrono::{DateTime, FixedOffset, Offset, Utc};

/// The UTC+9 offset used for every timestamp the service reports
#[must_use]
pub fn kst() -> FixedOffset {
    FixedOffset::east_opt(KST_OFFSET_SECONDS).unwrap_or_else(|| Utc.fix())
}

/// Current wall-clock time in KST
#[must_use]
pub fn now_kst() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&kst())
}

/// Source of the current instant
pub trait Clock: Send + Sync {
    /// Read the current time
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Reads the system wall clock, expressed in KST
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        now_kst()
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}
