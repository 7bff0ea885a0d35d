//! The client loop driven by a resolved configuration.
//!
//! [`Client::start_loop`] runs iterations until `loop_lapse` has elapsed,
//! pausing `loop_period` between them. What happens in an iteration is up to
//! the [`Exchange`] the client was built with; talking to the server is not
//! part of this crate, and the default exchange only logs.

use std::thread;
use std::time::{Duration, Instant};

use crate::config::ClientConfig;
use crate::error::Result;

/// One round of work performed by the client per loop iteration.
pub trait Exchange {
    /// Perform iteration `iteration` (1-based).
    ///
    /// # Errors
    ///
    /// Any error stops the loop and is returned from
    /// [`Client::start_loop`].
    fn exchange(&mut self, config: &ClientConfig, iteration: u64) -> Result<()>;
}

/// Exchange that only records each iteration in the log.
#[derive(Debug, Default)]
pub struct LogExchange;

impl Exchange for LogExchange {
    fn exchange(&mut self, config: &ClientConfig, iteration: u64) -> Result<()> {
        log::info!(
            "[CLIENT {}] iteration {iteration} against {}",
            config.id,
            config.server_address
        );
        Ok(())
    }
}

/// Outcome of a completed loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopSummary {
    /// Number of iterations that ran.
    pub iterations: u64,
    /// Wall time spent in the loop.
    pub elapsed: Duration,
}

/// A client bound to a resolved configuration.
///
/// # Examples
///
/// ```
/// use clientconf::client::Client;
/// use clientconf::config::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig {
///     server_address: "server:12345".to_string(),
///     id: "1".to_string(),
///     loop_lapse: Duration::ZERO,
///     loop_period: Duration::from_secs(10),
/// };
/// let summary = Client::new(config).start_loop().unwrap();
/// assert_eq!(summary.iterations, 0);
/// ```
pub struct Client {
    config: ClientConfig,
    exchange: Box<dyn Exchange>,
}

impl Client {
    /// A client using [`LogExchange`].
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self::with_exchange(config, Box::new(LogExchange))
    }

    /// A client performing `exchange` on every iteration.
    #[must_use]
    pub fn with_exchange(config: ClientConfig, exchange: Box<dyn Exchange>) -> Self {
        Self { config, exchange }
    }

    /// The configuration this client runs with.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Run the loop until `loop_lapse` elapses. Blocks the calling thread.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by the exchange.
    pub fn start_loop(&mut self) -> Result<LoopSummary> {
        let start = Instant::now();
        // None when the lapse is too large to represent: run until stopped.
        let deadline = start.checked_add(self.config.loop_lapse);
        let mut iterations = 0;

        while deadline.map_or(true, |d| Instant::now() < d) {
            iterations += 1;
            self.exchange.exchange(&self.config, iterations)?;

            let pause = match deadline {
                Some(d) => self
                    .config
                    .loop_period
                    .min(d.saturating_duration_since(Instant::now())),
                None => self.config.loop_period,
            };
            thread::sleep(pause);
        }

        let elapsed = start.elapsed();
        log::info!(
            "[CLIENT {}] main loop finished after {iterations} iterations",
            self.config.id
        );

        Ok(LoopSummary {
            iterations,
            elapsed,
        })
    }
}
