// ABOUTME: Core signal provider trait shared by every congestion data source
// ABOUTME: Answers current and thirty-minute-ahead readings for one area

//! # Signal Provider Interface
//!
//! A provider is bound to one area when it is built and answers two
//! questions about it:
//!
//! - [`SignalProvider::current`]: traffic and parking at an instant
//! - [`SignalProvider::forecast`]: the reading expected thirty minutes later
//!
//! Both take the instant explicitly instead of reading a clock, so callers
//! decide what "now" means and tests can pin it.
//!
//! ```rust
//! use async_trait::async_trait;
//! use chrono::{DateTime, FixedOffset};
//! use visit_core::models::SignalReading;
//! use visit_providers::{ProviderError, SignalProvider};
//!
//! struct Constant;
//!
//! #[async_trait]
//! impl SignalProvider for Constant {
//!     fn name(&self) -> &'static str {
//!         "constant"
//!     }
//!
//!     async fn current(&self, _at: DateTime<FixedOffset>) -> Result<SignalReading, ProviderError> {
//!         Ok(SignalReading::new(0.5, 0.5))
//!     }
//!
//!     async fn forecast(&self, _at: DateTime<FixedOffset>) -> Result<SignalReading, ProviderError> {
//!         Ok(SignalReading::new(0.5, 0.5))
//!     }
//! }
//! ```

use crate::errors::ProviderError;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use visit_core::models::SignalReading;

/// Source of traffic and parking signals for one area
///
/// Implementations must return indices already clamped into `[0, 1]`.
#[async_trait]
pub trait SignalProvider: Send + Sync {
    /// Short identifier used in logs and error messages
    fn name(&self) -> &'static str;

    /// Signals at `at`
    async fn current(&self, at: DateTime<FixedOffset>) -> Result<SignalReading, ProviderError>;

    /// Signals expected thirty minutes after `at`
    async fn forecast(&self, at: DateTime<FixedOffset>) -> Result<SignalReading, ProviderError>;
}
