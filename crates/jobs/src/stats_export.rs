use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use dns_pulse_application::ports::{FlowStatsSource, StatsExporter};

const DEFAULT_EXPORT_INTERVAL_SECS: u64 = 30;

/// Periodically drains accumulated flow stats and hands each batch to the
/// export pipeline. An exporter failure loses that interval's batch; the
/// job itself keeps running.
pub struct StatsExportJob {
    source: Arc<dyn FlowStatsSource>,
    exporter: Arc<dyn StatsExporter>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl StatsExportJob {
    pub fn new(source: Arc<dyn FlowStatsSource>, exporter: Arc<dyn StatsExporter>) -> Self {
        Self {
            source,
            exporter,
            interval_secs: DEFAULT_EXPORT_INTERVAL_SECS,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, secs: u64) -> Self {
        self.interval_secs = secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(interval_secs = self.interval_secs, "Starting stats export job");

        let job = Arc::clone(&self);
        let shutdown = self.shutdown.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(job.interval_secs));
            loop {
                tokio::select! {
                    _ = shutdown.cancelled() => {
                        info!("StatsExportJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        job.run_export_cycle().await;
                    }
                }
            }
        });
    }

    async fn run_export_cycle(&self) {
        let stats = self.source.drain_stats();
        if stats.is_empty() {
            return;
        }

        let flows = stats.len();
        let responses: u64 = stats.values().map(|s| u64::from(s.responses())).sum();
        let timeouts: u64 = stats.values().map(|s| u64::from(s.timeouts)).sum();

        match self.exporter.export(stats).await {
            Ok(()) => {
                info!(flows, responses, timeouts, "Flow stats exported");
            }
            Err(e) => {
                error!(error = %e, flows, "Stats export failed, batch lost");
            }
        }
    }
}
