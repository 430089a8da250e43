// ABOUTME: Centralized resource container for dependency injection into route handlers
// ABOUTME: Wires configuration, signal provider, scoring engine, and clock into the status service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Server Resources
//!
//! Everything a request needs is built once at startup and shared behind an
//! `Arc`. The provider and the clock are trait objects so tests can swap in a
//! failing provider or a pinned clock without touching the handlers.

use crate::config::ServerConfig;
use crate::services::StatusService;
use anyhow::{anyhow, Result};
use std::sync::Arc;
use tracing::info;
use visit_core::errors::AppError;
use visit_core::time::{Clock, SystemClock};
use visit_intelligence::{LevelBands, ScoringEngine};
use visit_providers::{SignalProvider, SyntheticSignalProvider};

/// Shared server state
pub struct ServerResources {
    /// Configuration the server was started with
    pub config: Arc<ServerConfig>,
    /// Status report assembly
    pub status: StatusService,
}

impl ServerResources {
    /// Create a new builder for `ServerResources`
    #[must_use]
    pub fn builder() -> ServerResourcesBuilder {
        ServerResourcesBuilder::new()
    }

    /// Build resources from configuration with the default provider and clock
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is rejected.
    pub fn from_config(config: ServerConfig) -> Result<Arc<Self>> {
        Self::builder().with_config(config).build_arc()
    }
}

/// Builder for [`ServerResources`]
#[derive(Default)]
pub struct ServerResourcesBuilder {
    config: Option<ServerConfig>,
    provider: Option<Arc<dyn SignalProvider>>,
    clock: Option<Arc<dyn Clock>>,
}

impl ServerResourcesBuilder {
    /// Create an empty builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the server configuration
    #[must_use]
    pub fn with_config(mut self, config: ServerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Replace the signal provider
    #[must_use]
    pub fn with_provider(mut self, provider: Arc<dyn SignalProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Replace the clock
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the resources
    ///
    /// The scoring engine is constructed through its validating constructor,
    /// so a broken band table or weight pair stops startup here.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is missing or invalid.
    pub fn build(self) -> Result<ServerResources> {
        let config = self
            .config
            .ok_or_else(|| anyhow!("Server config is required"))?;
        config.validate()?;

        let area = config.area()?;
        let engine = ScoringEngine::new(config.scoring_policy()?, LevelBands::standard())
            .map_err(AppError::from)?;

        let provider = match self.provider {
            Some(provider) => provider,
            None => default_provider(&config)?,
        };
        let clock = self
            .clock
            .unwrap_or_else(|| Arc::new(SystemClock) as Arc<dyn Clock>);

        info!(
            area = area.id,
            provider = provider.name(),
            locale = %config.visit.locale,
            "Status service ready"
        );

        let status = StatusService::new(provider, engine, area, config.visit.locale, clock);
        Ok(ServerResources {
            config: Arc::new(config),
            status,
        })
    }

    /// Build the resources wrapped in an `Arc`
    ///
    /// # Errors
    ///
    /// Same as [`Self::build`].
    pub fn build_arc(self) -> Result<Arc<ServerResources>> {
        Ok(Arc::new(self.build()?))
    }
}

fn default_provider(config: &ServerConfig) -> Result<Arc<dyn SignalProvider>> {
    Ok(Arc::new(SyntheticSignalProvider::for_area(
        config.area()?,
        config.signal_config()?,
    )))
}
