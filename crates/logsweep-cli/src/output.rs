//! Output formatting for sweep results.

use logsweep_domain::Severity;
use logsweep_sweeper::SweepMetrics;
use serde_json::json;

use crate::cli::CliFormat;
use crate::Result;

/// Renders sweep metrics in the selected output format.
pub struct Formatter {
    format: CliFormat,
}

impl Formatter {
    /// Create a formatter for the given format.
    pub fn new(format: CliFormat) -> Self {
        Self { format }
    }

    /// Render a metrics snapshot.
    pub fn render(&self, metrics: &SweepMetrics) -> Result<String> {
        match self.format {
            CliFormat::Text => Ok(metrics.summary()),
            CliFormat::Json => {
                let deleted: serde_json::Map<String, serde_json::Value> = Severity::ALL
                    .iter()
                    .filter_map(|s| {
                        metrics
                            .deleted
                            .get(s)
                            .map(|count| (s.as_str().to_string(), json!(count)))
                    })
                    .collect();

                let value = json!({
                    "sweep_count": metrics.sweep_count,
                    "deleted": deleted,
                    "total_deleted": metrics.total_deleted(),
                    "bytes_freed": metrics.bytes_freed,
                    "delete_failures": metrics.delete_failures,
                    "dirs_skipped": metrics.dirs_skipped,
                    "protected_skips": metrics.protected_skips,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
        }
    }
}
