#![allow(dead_code)]

use async_trait::async_trait;
use dns_pulse_application::ports::{FlowStatsMap, FlowStatsSource, StatsExporter};
use dns_pulse_domain::{DomainError, FlowKey, FlowStats, Transport};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;

pub fn sample_flow() -> FlowKey {
    FlowKey {
        server: "10.0.0.53".parse().unwrap(),
        client: "192.168.1.20".parse().unwrap(),
        client_port: 51053,
        transport: Transport::Udp,
    }
}

pub fn sample_batch() -> FlowStatsMap {
    let mut batch = FlowStatsMap::default();
    batch.insert(
        sample_flow(),
        FlowStats {
            successful_responses: 3,
            failed_responses: 1,
            success_latency_us: 4_500,
            failure_latency_us: 900,
            timeouts: 2,
        },
    );
    batch
}

pub struct MockStatsSource {
    batches: Mutex<Vec<FlowStatsMap>>,
    drain_count: AtomicU64,
}

impl MockStatsSource {
    pub fn new() -> Self {
        Self {
            batches: Mutex::new(Vec::new()),
            drain_count: AtomicU64::new(0),
        }
    }

    pub fn with_batches(batches: Vec<FlowStatsMap>) -> Self {
        Self {
            batches: Mutex::new(batches),
            drain_count: AtomicU64::new(0),
        }
    }

    pub fn drain_count(&self) -> u64 {
        self.drain_count.load(Ordering::Relaxed)
    }
}

impl FlowStatsSource for MockStatsSource {
    fn drain_stats(&self) -> FlowStatsMap {
        self.drain_count.fetch_add(1, Ordering::Relaxed);
        let mut batches = self.batches.lock().unwrap();
        if batches.is_empty() {
            FlowStatsMap::default()
        } else {
            batches.remove(0)
        }
    }
}

pub struct MockExporter {
    exports: Mutex<Vec<FlowStatsMap>>,
    should_fail: AtomicBool,
    call_count: AtomicU64,
}

impl MockExporter {
    pub fn new() -> Self {
        Self {
            exports: Mutex::new(Vec::new()),
            should_fail: AtomicBool::new(false),
            call_count: AtomicU64::new(0),
        }
    }

    pub fn failing() -> Self {
        let exporter = Self::new();
        exporter.should_fail.store(true, Ordering::Relaxed);
        exporter
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub fn exports(&self) -> Vec<FlowStatsMap> {
        self.exports.lock().unwrap().clone()
    }
}

#[async_trait]
impl StatsExporter for MockExporter {
    async fn export(&self, stats: FlowStatsMap) -> Result<(), DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if self.should_fail.load(Ordering::Relaxed) {
            return Err(DomainError::ExportFailed(
                "mock exporter offline".to_string(),
            ));
        }
        self.exports.lock().unwrap().push(stats);
        Ok(())
    }
}
