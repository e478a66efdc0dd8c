use crate::prober::{self, ChannelOpener, ProbeError, ProbeSettings};
use crate::probes::{Probe, ProbeRegistry, ProbeTable};
use crate::report::now_rfc3339;
use crate::types::{PortResult, ScanReport, ScanStatistics, ScanTarget};
use std::net::SocketAddrV4;
use std::time::Duration;
use tokio::time::{self, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Pause after every port, whatever its outcome.
pub const INTER_PROBE_DELAY: Duration = Duration::from_millis(10);

#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub probe: ProbeSettings,
    pub delay: Duration,
    pub probe_table: ProbeTable,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            probe: ProbeSettings::default(),
            delay: INTER_PROBE_DELAY,
            probe_table: ProbeTable::default(),
        }
    }
}

/// Probe every port of `target` in order, one at a time.
///
/// - Each result is handed to `on_result` as soon as it is classified, then
///   folded into the statistics.
/// - Ports whose probe aborts (socket setup or send failure) are logged and
///   counted as skipped; they produce no result.
/// - `cancel` is honoured between ports only; a probe in flight always
///   finishes.
pub async fn scan_range<O, F>(
    target: &ScanTarget,
    config: &ScanConfig,
    opener: &O,
    cancel: &CancellationToken,
    mut on_result: F,
) -> ScanReport
where
    O: ChannelOpener,
    F: FnMut(&PortResult),
{
    let registry = ProbeRegistry::new(config.probe_table);
    let started = Instant::now();
    let mut statistics = ScanStatistics::new(now_rfc3339());
    let mut results = Vec::with_capacity(target.port_count().min(4096) as usize);
    let mut cancelled = false;

    info!(
        host = %target.host,
        start = target.start_port,
        end = target.end_port,
        table = %config.probe_table,
        probed_services = registry.port_count(),
        icmp = opener.icmp_enabled(),
        "scan started"
    );

    for port in target.ports() {
        if cancel.is_cancelled() {
            cancelled = true;
            break;
        }

        let addr = SocketAddrV4::new(target.host, port);
        match probe_one(opener, addr, registry.lookup(port), &config.probe).await {
            Ok(result) => {
                on_result(&result);
                statistics.record(&result);
                results.push(result);
            }
            Err(e) => {
                warn!(port, error = %e, "skipping port");
                statistics.record_skip();
            }
        }

        tokio::select! {
            _ = cancel.cancelled() => {}
            _ = time::sleep(config.delay) => {}
        }
    }

    statistics.finish(now_rfc3339(), started.elapsed().as_secs_f64());
    info!(
        total = statistics.total,
        open = statistics.open,
        skipped = statistics.skipped,
        cancelled,
        "scan finished"
    );

    ScanReport {
        target: *target,
        probe_table: config.probe_table.to_string(),
        icmp_enabled: opener.icmp_enabled(),
        cancelled,
        results,
        statistics,
    }
}

/// Open a fresh channel for `addr` and run the prober on it. The channel's
/// sockets close when it drops at the end of this call.
async fn probe_one<O: ChannelOpener>(
    opener: &O,
    addr: SocketAddrV4,
    probe: Option<&Probe>,
    settings: &ProbeSettings,
) -> Result<PortResult, ProbeError> {
    let mut channel = opener.open(addr).await?;
    prober::probe_port(&mut channel, addr, probe, settings).await
}
