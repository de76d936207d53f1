//! Delay adapter
//!
//! The pause happens once, when a function is wrapped. Calls through the
//! returned wrapper are never delayed.

use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::args::Args;
use crate::callable::Callable;
use crate::error::{Error, Result};
use crate::value::Value;

/// Delay configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayConfig {
    /// Time to sleep when a function is wrapped
    pub wait: Duration,
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self {
            wait: Duration::from_secs(1),
        }
    }
}

impl DelayConfig {
    /// Create a config from a duration
    pub fn new(wait: Duration) -> Self {
        Self { wait }
    }

    /// Create a config from fractional seconds
    ///
    /// # Returns
    /// * `Error::InvalidWait` for negative, NaN or infinite values
    pub fn from_secs_f64(secs: f64) -> Result<Self> {
        Duration::try_from_secs_f64(secs)
            .map(Self::new)
            .map_err(|_| Error::InvalidWait(secs))
    }
}

/// Configured delay adapter; see [`Delayer::wrap`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Delayer {
    config: DelayConfig,
}

impl Delayer {
    /// Create an adapter from its config
    pub fn new(config: DelayConfig) -> Self {
        Self { config }
    }

    /// Configured wait
    pub fn wait(&self) -> Duration {
        self.config.wait
    }

    /// Sleep for the configured wait, then return the pass-through wrapper
    ///
    /// Every call to `wrap` sleeps again.
    pub fn wrap<F: Callable>(&self, inner: F) -> Delayed<F> {
        debug!("Delaying {} by {:?}", inner.name(), self.config.wait);
        thread::sleep(self.config.wait);
        Delayed { inner }
    }
}

/// Shorthand for [`Delayer::new`]
pub fn delayer(config: DelayConfig) -> Delayer {
    Delayer::new(config)
}

/// Pass-through wrapper produced by [`Delayer::wrap`]
#[derive(Debug)]
pub struct Delayed<F> {
    inner: F,
}

impl<F> Delayed<F> {
    /// The wrapped function
    pub fn inner(&self) -> &F {
        &self.inner
    }
}

impl<F: Callable> Callable for Delayed<F> {
    type Error = F::Error;

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn call(&self, args: &Args) -> std::result::Result<Value, F::Error> {
        self.inner.call(args)
    }
}
