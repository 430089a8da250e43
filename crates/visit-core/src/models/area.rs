// ABOUTME: Static catalog of supported tourist areas in Jeonju and the wider Jeonbuk region
// ABOUTME: Provides lookup by id and free-text search over names, region, and category
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use serde::Serialize;

/// A tourist area the service can report on
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Area {
    /// Stable slug identifier
    pub id: &'static str,
    /// English display name
    pub name: &'static str,
    /// Korean display name
    pub name_kr: &'static str,
    /// Administrative region (Korean)
    pub region: &'static str,
    /// Attraction category (Korean)
    pub category: &'static str,
    /// Relative popularity in `[0, 1]` scaling the synthetic traffic baseline
    pub base_popularity: f64,
    /// Icon shown by the dashboard
    pub emoji: &'static str,
}

/// Every supported area
pub static AREAS: &[Area] = &[
    Area {
        id: "jeonju-hanok",
        name: "Jeonju Hanok Village",
        name_kr: "전주 한옥마을",
        region: "전주시",
        category: "전통마을",
        base_popularity: 0.85,
        emoji: "🏘️",
    },
    Area {
        id: "jeonju-nambu",
        name: "Jeonju Nambu Market",
        name_kr: "남부시장",
        region: "전주시",
        category: "전통시장",
        base_popularity: 0.7,
        emoji: "🏪",
    },
    Area {
        id: "jeonju-gaeksa",
        name: "Jeonju Gaeksa",
        name_kr: "전주객사",
        region: "전주시",
        category: "문화유적",
        base_popularity: 0.5,
        emoji: "🏛️",
    },
    Area {
        id: "jeonju-omokdae",
        name: "Omokdae Pavilion",
        name_kr: "오목대",
        region: "전주시",
        category: "전망대",
        base_popularity: 0.6,
        emoji: "🏯",
    },
    Area {
        id: "jeonju-gyeonggijeon",
        name: "Gyeonggijeon Shrine",
        name_kr: "경기전",
        region: "전주시",
        category: "문화유적",
        base_popularity: 0.75,
        emoji: "⛩️",
    },
    Area {
        id: "jeonju-pungnammun",
        name: "Pungnammun Gate",
        name_kr: "풍남문",
        region: "전주시",
        category: "문화유적",
        base_popularity: 0.55,
        emoji: "🚪",
    },
    Area {
        id: "jeonju-deokjin",
        name: "Deokjin Park",
        name_kr: "덕진공원",
        region: "전주시",
        category: "공원",
        base_popularity: 0.6,
        emoji: "🌳",
    },
    Area {
        id: "jeonbuk-maisan",
        name: "Maisan Mountain",
        name_kr: "마이산",
        region: "진안군",
        category: "자연경관",
        base_popularity: 0.7,
        emoji: "⛰️",
    },
    Area {
        id: "jeonbuk-naejangsan",
        name: "Naejangsan National Park",
        name_kr: "내장산",
        region: "정읍시",
        category: "국립공원",
        base_popularity: 0.75,
        emoji: "🍁",
    },
    Area {
        id: "jeonbuk-byeonsan",
        name: "Byeonsanbando National Park",
        name_kr: "변산반도",
        region: "부안군",
        category: "국립공원",
        base_popularity: 0.65,
        emoji: "🏖️",
    },
    Area {
        id: "jeonbuk-gunsan",
        name: "Gunsan Modern History Museum",
        name_kr: "군산 근대역사박물관",
        region: "군산시",
        category: "박물관",
        base_popularity: 0.6,
        emoji: "🏛️",
    },
    Area {
        id: "jeonbuk-imsil",
        name: "Imsil Cheese Village",
        name_kr: "임실치즈마을",
        region: "임실군",
        category: "체험마을",
        base_popularity: 0.55,
        emoji: "🧀",
    },
    Area {
        id: "jeonbuk-gochang",
        name: "Gochang Dolmen Site",
        name_kr: "고창 고인돌",
        region: "고창군",
        category: "세계유산",
        base_popularity: 0.5,
        emoji: "🪨",
    },
    Area {
        id: "jeonbuk-sunchang",
        name: "Sunchang Gochujang Village",
        name_kr: "순창 고추장마을",
        region: "순창군",
        category: "체험마을",
        base_popularity: 0.45,
        emoji: "🌶️",
    },
];

/// Look up an area by its slug
#[must_use]
pub fn find_area(id: &str) -> Option<&'static Area> {
    AREAS.iter().find(|area| area.id == id)
}

/// Filter the catalog by a free-text query
///
/// Matches case-insensitively against the English name, and as a substring
/// against the Korean name, region and category. A blank query returns the
/// whole catalog.
#[must_use]
pub fn search_areas(query: Option<&str>) -> Vec<&'static Area> {
    let needle = query.map(str::trim).filter(|q| !q.is_empty());
    let Some(needle) = needle else {
        return AREAS.iter().collect();
    };
    let needle_lower = needle.to_lowercase();

    AREAS
        .iter()
        .filter(|area| {
            area.name.to_lowercase().contains(&needle_lower)
                || area.name_kr.contains(needle)
                || area.region.contains(needle)
                || area.category.contains(needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_are_unique() {
        let ids: HashSet<_> = AREAS.iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), AREAS.len());
        assert_eq!(AREAS.len(), 14);
    }

    #[test]
    fn test_popularity_in_unit_interval() {
        assert!(AREAS
            .iter()
            .all(|a| (0.0..=1.0).contains(&a.base_popularity)));
    }

    #[test]
    fn test_find_area() {
        let hanok = find_area("jeonju-hanok").unwrap();
        assert_eq!(hanok.name_kr, "전주 한옥마을");
        assert!(find_area("seoul-tower").is_none());
    }

    #[test]
    fn test_search_by_english_name_ignores_case() {
        let hits = search_areas(Some("NATIONAL PARK"));
        let ids: Vec<_> = hits.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["jeonbuk-naejangsan", "jeonbuk-byeonsan"]);
    }

    #[test]
    fn test_search_by_region_and_category() {
        assert_eq!(search_areas(Some("전주시")).len(), 7);
        assert_eq!(search_areas(Some("체험마을")).len(), 2);
    }

    #[test]
    fn test_blank_search_returns_everything() {
        assert_eq!(search_areas(None).len(), AREAS.len());
        assert_eq!(search_areas(Some("   ")).len(), AREAS.len());
    }
}
