// ABOUTME: Signal provider test doubles for integration tests
// ABOUTME: A provider that always fails and one that returns fixed readings

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use std::sync::atomic::{AtomicUsize, Ordering};
use visit_core::models::SignalReading;
use visit_providers::{ProviderError, SignalProvider};

/// Provider whose upstream is always down
#[allow(dead_code)]
pub struct FailingSignalProvider;

#[async_trait]
impl SignalProvider for FailingSignalProvider {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn current(&self, _at: DateTime<FixedOffset>) -> Result<SignalReading, ProviderError> {
        Err(ProviderError::unavailable("failing", "upstream feed is down"))
    }

    async fn forecast(&self, _at: DateTime<FixedOffset>) -> Result<SignalReading, ProviderError> {
        Err(ProviderError::unavailable("failing", "upstream feed is down"))
    }
}

/// Provider returning fixed readings and counting calls
#[allow(dead_code)]
pub struct FixedSignalProvider {
    now: SignalReading,
    forecast: SignalReading,
    calls: AtomicUsize,
}

impl FixedSignalProvider {
    /// Create a provider with the given readings
    #[allow(dead_code)]
    pub const fn new(now: SignalReading, forecast: SignalReading) -> Self {
        Self {
            now,
            forecast,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of provider calls served
    #[allow(dead_code)]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SignalProvider for FixedSignalProvider {
    fn name(&self) -> &'static str {
        "fixed"
    }

    async fn current(&self, _at: DateTime<FixedOffset>) -> Result<SignalReading, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.now)
    }

    async fn forecast(&self, _at: DateTime<FixedOffset>) -> Result<SignalReading, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.forecast)
    }
}
