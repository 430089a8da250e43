// ABOUTME: Fixed advisory templates keyed by level, horizon, and locale
// ABOUTME: Renders the user-facing message and the synthetic data disclosure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use visit_core::models::{Horizon, Level, Locale};

/// Lookup table of advisory messages
///
/// There is no free-form generation: each `(level, horizon, locale)` triple
/// maps to one template, and only the area name is substituted.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageCatalog;

impl MessageCatalog {
    /// Render the advisory for an assessment
    #[must_use]
    pub fn render(level: Level, horizon: Horizon, locale: Locale, area_name: &str) -> String {
        let prefix = Self::prefix(horizon, locale);
        match locale {
            Locale::Ko => match level {
                Level::Easy => {
                    format!("{prefix}{area_name}은(는) 여유롭습니다. 방문하기 좋은 시간입니다! 🟢")
                }
                Level::Moderate => format!(
                    "{prefix}{area_name}은(는) 적당히 붐빕니다. 주차 공간을 미리 확인하세요. 🟡"
                ),
                Level::Hard => {
                    format!("{prefix}{area_name}이(가) 혼잡합니다. 대중교통 이용을 권장합니다. 🟠")
                }
                Level::VeryHard => format!(
                    "{prefix}{area_name}이(가) 매우 혼잡합니다. 방문 시간 조정을 권장합니다. 🔴"
                ),
            },
            Locale::En => match level {
                Level::Easy => {
                    format!("{prefix}{area_name} is relaxed. A great time to visit! 🟢")
                }
                Level::Moderate => format!(
                    "{prefix}{area_name} is moderately busy. Check parking availability before you go. 🟡"
                ),
                Level::Hard => format!(
                    "{prefix}{area_name} is congested. Public transport is recommended. 🟠"
                ),
                Level::VeryHard => format!(
                    "{prefix}{area_name} is very congested. Consider visiting at another time. 🔴"
                ),
            },
        }
    }

    const fn prefix(horizon: Horizon, locale: Locale) -> &'static str {
        match (locale, horizon) {
            (Locale::Ko, Horizon::Now) => "현재 ",
            (Locale::Ko, Horizon::Forecast30m) => "30분 뒤 ",
            (Locale::En, Horizon::Now) => "Right now, ",
            (Locale::En, Horizon::Forecast30m) => "In 30 minutes, ",
        }
    }
}

/// Disclosure that the signals are synthetic
#[must_use]
pub const fn synthetic_data_notice(locale: Locale) -> &'static str {
    match locale {
        Locale::Ko => {
            "현재 더미(룰 기반) 데이터로 동작 중입니다. 추후 실시간 교통/주차 API 연동 예정."
        }
        Locale::En => {
            "Running on synthetic (rule-based) data. Live traffic and parking feeds are planned."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_korean_now_message() {
        let message = MessageCatalog::render(Level::Hard, Horizon::Now, Locale::Ko, "한옥마을");
        assert_eq!(
            message,
            "현재 한옥마을이(가) 혼잡합니다. 대중교통 이용을 권장합니다. 🟠"
        );
    }

    #[test]
    fn test_english_forecast_message() {
        let message = MessageCatalog::render(
            Level::Easy,
            Horizon::Forecast30m,
            Locale::En,
            "Jeonju Hanok Village",
        );
        assert_eq!(
            message,
            "In 30 minutes, Jeonju Hanok Village is relaxed. A great time to visit! 🟢"
        );
    }

    #[test]
    fn test_every_key_has_a_distinct_template() {
        let mut seen = HashSet::new();
        for locale in [Locale::Ko, Locale::En] {
            for horizon in [Horizon::Now, Horizon::Forecast30m] {
                for level in Level::ALL {
                    let message = MessageCatalog::render(level, horizon, locale, "X");
                    assert!(message.contains('X'));
                    assert!(seen.insert(message));
                }
            }
        }
        assert_eq!(seen.len(), 16);
    }

    #[test]
    fn test_notice_is_localized() {
        assert!(synthetic_data_notice(Locale::Ko).contains("더미"));
        assert!(synthetic_data_notice(Locale::En).contains("synthetic"));
    }
}
