//! Background worker for periodic sweeping

use logsweep_domain::ProcessIdentity;
use tokio::time::{interval, Duration};

use crate::{SweepConfig, SweepError, SweepMetrics, Sweeper};

/// Background worker that runs the sweeper on a schedule
///
/// The surrounding logging facility usually invokes the sweeper after each
/// flush; deployments without such a hook can run this worker instead, which
/// performs a pass at the configured interval until shutdown.
///
/// # Examples
///
/// ```no_run
/// use logsweep_domain::ProcessIdentity;
/// use logsweep_sweeper::{SweepConfig, SweepWorker};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = SweepConfig::new(Some(64 * 1024 * 1024), vec!["/var/log/myapp".into()]);
///     let mut worker = SweepWorker::new(config, ProcessIdentity::from_env())?;
///
///     // Run until Ctrl+C
///     worker.run().await?;
///     Ok(())
/// }
/// ```
pub struct SweepWorker {
    sweeper: Sweeper,
    interval: Duration,
}

impl SweepWorker {
    /// Create a new background worker
    ///
    /// # Errors
    ///
    /// Returns [`SweepError::Pattern`] if the identity cannot be compiled
    /// into a match pattern.
    pub fn new(config: SweepConfig, identity: ProcessIdentity) -> Result<Self, SweepError> {
        let interval = config.sweep_interval();
        Ok(Self {
            sweeper: Sweeper::new(config, identity)?,
            interval,
        })
    }

    /// Run the worker until a shutdown signal (Ctrl+C) is received
    ///
    /// Each tick performs one full sweep pass. Sweep passes cannot fail;
    /// filesystem trouble is absorbed and surfaced through the metrics.
    pub async fn run(&mut self) -> Result<(), SweepError> {
        let mut ticker = interval(self.interval);

        tracing::info!("Sweep worker started (interval: {:?})", self.interval);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    tracing::debug!("Starting sweep pass");
                    let metrics = self.sweeper.sweep();
                    tracing::info!(
                        "Sweep pass completed: {} deleted, {} bytes freed",
                        metrics.total_deleted(),
                        metrics.bytes_freed
                    );
                }
                res = tokio::signal::ctrl_c() => {
                    res.map_err(|e| SweepError::Worker(e.to_string()))?;
                    tracing::info!("Shutdown signal received, stopping sweep worker");
                    break;
                }
            }
        }

        let metrics = self.sweeper.metrics();
        tracing::info!("Sweep worker stopped. Final metrics:\n{}", metrics.summary());

        Ok(())
    }

    /// Run for a specific number of passes (useful for testing)
    pub async fn run_cycles(&mut self, cycles: usize) -> Result<SweepMetrics, SweepError> {
        let mut ticker = interval(self.interval);

        tracing::info!(
            "Sweep worker started for {} cycles (interval: {:?})",
            cycles,
            self.interval
        );

        for cycle in 0..cycles {
            ticker.tick().await;
            tracing::debug!("Starting sweep pass {}/{}", cycle + 1, cycles);
            self.sweeper.sweep();
        }

        Ok(self.sweeper.metrics().clone())
    }

    /// Get a reference to the sweeper's current metrics
    pub fn metrics(&self) -> &SweepMetrics {
        self.sweeper.metrics()
    }

    /// Reset the sweeper's metrics counters
    pub fn reset_metrics(&mut self) {
        self.sweeper.reset_metrics();
    }
}
