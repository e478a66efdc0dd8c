use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use udp_probe_rs::net::{self, SocketOpener};
use udp_probe_rs::prober::ProbeSettings;
use udp_probe_rs::probes::ProbeTable;
use udp_probe_rs::report;
use udp_probe_rs::scanner::{self, ScanConfig};
use udp_probe_rs::types::ScanTarget;

const EXAMPLES: &str = "\
Examples:
  udp-probe-rs 192.168.1.1 1 1000     # Scan ports 1-1000
  udp-probe-rs 10.0.0.1 53 53         # Scan DNS port
  udp-probe-rs 192.168.1.1 1 65535    # Full port scan

Note: ICMP detection needs root/sudo (CAP_NET_RAW). Without it closed
ports cannot be told apart and report as OPEN|FILTERED.";

/// udp-probe-rs: UDP port scanner with protocol-specific probes.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "udp-probe-rs",
    version,
    about = "UDP port scanner with protocol-specific probes and ICMP-based state detection.",
    long_about = None,
    after_help = EXAMPLES
)]
struct Cli {
    /// Target IPv4 address.
    target_ip: String,

    /// First port to scan (1-65535).
    start_port: u32,

    /// Last port to scan, inclusive (1-65535).
    end_port: u32,

    /// Wait per attempt in milliseconds.
    #[arg(long = "timeout-ms", default_value_t = 2000)]
    timeout_ms: u64,

    /// Sends per port when nothing answers.
    #[arg(long, default_value_t = 2)]
    retries: u32,

    /// Pause between ports in milliseconds.
    #[arg(long = "delay-ms", default_value_t = 10)]
    delay_ms: u64,

    /// Probe payload table: base or extended.
    #[arg(long, default_value_t = ProbeTable::Extended)]
    probes: ProbeTable,

    /// Write the full report as pretty JSON to this path.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Do not open raw ICMP sockets, even when privileged.
    #[arg(long = "no-icmp", default_value_t = false)]
    no_icmp: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::try_parse().unwrap_or_else(|e| usage_error(e));

    let target = match ScanTarget::parse(&cli.target_ip, cli.start_port, cli.end_port) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let icmp = !cli.no_icmp && icmp_capable();
    let config = ScanConfig {
        probe: ProbeSettings {
            timeout: Duration::from_millis(cli.timeout_ms),
            max_retries: cli.retries,
        },
        delay: Duration::from_millis(cli.delay_ms),
        probe_table: cli.probes,
    };

    println!("Starting UDP scan on {}", target.host);
    println!("Scanning ports {}-{}", target.start_port, target.end_port);
    println!(
        "Using {} protocol-specific probes ({} table)\n",
        cli.probes.entries().len(),
        cli.probes
    );

    let cancel = CancellationToken::new();
    let cancel_ctrlc = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel_ctrlc.cancel();
        }
    });

    let opener = SocketOpener { icmp };
    let scan = scanner::scan_range(&target, &config, &opener, &cancel, |result| {
        println!("{}", report::format_result(result));
    })
    .await;

    if scan.cancelled {
        println!(
            "\nScan interrupted after {} of {} ports",
            scan.statistics.total + scan.statistics.skipped,
            target.port_count()
        );
    }
    println!("\n{}", report::format_statistics(&scan.statistics));

    if let Some(path) = cli.output.as_deref() {
        if let Err(e) = report::write_report_json(path, &scan) {
            eprintln!("Failed to write JSON to {}: {:#}", path.display(), e);
        } else {
            println!("Wrote JSON report to {}", path.display());
        }
    }

    Ok(())
}

/// Help and version exit 0; every other argument problem exits 1.
fn usage_error(e: clap::Error) -> ! {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => {
            let _ = e.print();
            std::process::exit(1);
        }
    }
}

fn icmp_capable() -> bool {
    match net::icmp_available() {
        Ok(()) => true,
        Err(e) => {
            debug!(error = %e, "raw icmp socket unavailable");
            eprintln!("Warning: Not running with raw socket privilege. ICMP detection will fail.");
            eprintln!("Run with sudo for accurate results.\n");
            false
        }
    }
}
