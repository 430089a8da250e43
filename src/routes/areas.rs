// ABOUTME: Area catalog route handler listing supported tourist areas
// ABOUTME: Supports an optional free-text search over names, region, and category
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use axum::{extract::Query, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use visit_core::models::{search_areas, Area};

/// Query parameters for the area listing
#[derive(Debug, Deserialize)]
struct AreaSearchQuery {
    #[serde(default)]
    search: Option<String>,
}

/// Area listing body
#[derive(Debug, Serialize)]
pub struct AreaListResponse {
    /// Number of matching areas
    pub total: usize,
    /// Matching areas in catalog order
    pub areas: Vec<&'static Area>,
}

/// Area catalog routes
pub struct AreaRoutes;

impl AreaRoutes {
    /// Create the area catalog route
    pub fn routes() -> Router {
        Router::new().route("/api/areas", get(Self::handle_list))
    }

    async fn handle_list(Query(params): Query<AreaSearchQuery>) -> Json<AreaListResponse> {
        let areas = search_areas(params.search.as_deref());
        Json(AreaListResponse {
            total: areas.len(),
            areas,
        })
    }
}
