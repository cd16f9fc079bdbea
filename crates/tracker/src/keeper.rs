use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, trace};

use dns_pulse_application::ports::{FlowStatsMap, FlowStatsSource, PacketSink};
use dns_pulse_domain::{PacketEvent, PacketKind, PendingKey, TrackerConfig};

use crate::pending::PendingTable;

/// The two maps mutated together under the keeper's single lock. Removing a
/// pending entry and updating the matching flow's stats is one critical
/// section, never observable half-applied.
struct KeeperState {
    pending: PendingTable,
    stats: FlowStatsMap,
}

impl KeeperState {
    fn remove_expired(&mut self, cutoff: Instant) -> usize {
        let expired = self.pending.expire_older_than(cutoff);
        let evicted = expired.len();
        for key in expired {
            self.stats.entry(key.flow).or_default().timeouts += 1;
        }
        self.pending.maybe_compact();
        evicted
    }
}

/// Correlates DNS queries with their responses and accumulates per-flow
/// latency statistics.
///
/// Construction spawns the background expiration sweeper, so a keeper must
/// be created inside a Tokio runtime and torn down with [`close`] when no
/// longer needed.
///
/// [`close`]: StatKeeper::close
pub struct StatKeeper {
    state: Arc<Mutex<KeeperState>>,
    expiration: Duration,
    shutdown: CancellationToken,
    sweeper: tokio::sync::Mutex<Option<JoinHandle<()>>>,
}

impl StatKeeper {
    pub fn new(config: &TrackerConfig) -> Self {
        info!(
            expiration_ms = config.expiration_ms,
            max_pending = config.max_pending,
            compaction_threshold = config.compaction_threshold,
            "Initializing DNS stat keeper"
        );

        let state = Arc::new(Mutex::new(KeeperState {
            pending: PendingTable::new(config.max_pending, config.compaction_threshold),
            stats: FlowStatsMap::default(),
        }));
        let expiration = config.expiration();
        let shutdown = CancellationToken::new();

        let sweeper = tokio::spawn(sweep_loop(
            Arc::clone(&state),
            expiration,
            shutdown.clone(),
        ));

        Self {
            state,
            expiration,
            shutdown,
            sweeper: tokio::sync::Mutex::new(Some(sweeper)),
        }
    }

    /// Ingests one observed packet, stamped with its capture time.
    pub fn process_packet(&self, event: PacketEvent, at: Instant) {
        let PacketEvent {
            transaction_id,
            key,
            kind,
        } = event;

        let mut guard = self.state.lock();
        let state = &mut *guard;

        if kind == PacketKind::Query {
            let accepted = state.pending.observe_query(
                PendingKey {
                    flow: key,
                    transaction_id,
                },
                at,
            );
            if !accepted {
                drop(guard);
                trace!(transaction_id, "Pending store at capacity, query dropped");
            }
            return;
        }

        // A response with no corresponding pending query carries no
        // correlatable information.
        let pending_key = PendingKey {
            flow: key,
            transaction_id,
        };
        let Some(started) = state.pending.take(&pending_key) else {
            return;
        };

        let latency = at.saturating_duration_since(started);
        let stats = state.stats.entry(pending_key.flow).or_default();
        if latency > self.expiration {
            // A response past the expiration window is a timeout, never a
            // success or failure.
            stats.timeouts += 1;
        } else {
            let latency_us = latency.as_micros() as u64;
            if kind == PacketKind::SuccessfulResponse {
                stats.successful_responses += 1;
                stats.success_latency_us += latency_us;
            } else {
                stats.failed_responses += 1;
                stats.failure_latency_us += latency_us;
            }
        }
    }

    /// Atomically swaps out and returns all accumulated flow stats.
    pub fn drain_stats(&self) -> FlowStatsMap {
        std::mem::take(&mut self.state.lock().stats)
    }

    /// Evicts pending queries older than the expiration window as of `now`,
    /// tallying one timeout per evicted flow entry. Normally driven by the
    /// background sweeper once per window.
    pub fn expire_pending(&self, now: Instant) {
        let Some(cutoff) = now.checked_sub(self.expiration) else {
            return;
        };
        let evicted = self.state.lock().remove_expired(cutoff);
        if evicted > 0 {
            debug!(evicted, "Swept expired pending queries");
        }
    }

    /// Number of queries currently awaiting a response.
    pub fn pending_len(&self) -> usize {
        self.state.lock().pending.len()
    }

    /// Stops the background sweeper and waits for it to exit. Safe to call
    /// more than once; ingestion calls already past the signal complete
    /// normally.
    pub async fn close(&self) {
        self.shutdown.cancel();
        let handle = self.sweeper.lock().await.take();
        if let Some(handle) = handle {
            if handle.await.is_err() {
                error!("Expiration sweeper task failed before shutdown");
            }
        }
    }
}

impl Drop for StatKeeper {
    fn drop(&mut self) {
        // A keeper dropped without close() must not leave the sweeper task
        // holding the state alive.
        self.shutdown.cancel();
    }
}

impl PacketSink for StatKeeper {
    fn process_packet(&self, event: PacketEvent, at: Instant) {
        StatKeeper::process_packet(self, event, at);
    }
}

impl FlowStatsSource for StatKeeper {
    fn drain_stats(&self) -> FlowStatsMap {
        StatKeeper::drain_stats(self)
    }
}

async fn sweep_loop(
    state: Arc<Mutex<KeeperState>>,
    expiration: Duration,
    shutdown: CancellationToken,
) {
    let mut interval = tokio::time::interval(expiration);
    loop {
        tokio::select! {
            _ = shutdown.cancelled() => {
                debug!("Expiration sweeper: shutting down");
                break;
            }
            _ = interval.tick() => {
                let Some(cutoff) = Instant::now().checked_sub(expiration) else {
                    continue;
                };
                let evicted = state.lock().remove_expired(cutoff);
                if evicted > 0 {
                    debug!(evicted, "Swept expired pending queries");
                }
            }
        }
    }
}
