use std::fmt::Write as _;
use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use ::time::{format_description::well_known, OffsetDateTime};

use crate::icmp::{ICMP_DEST_UNREACHABLE, ICMP_PORT_UNREACHABLE};
use crate::types::{Detail, PortResult, ScanReport, ScanStatistics};

/// One line per port: `[STATE] Port <n>/udp <service> (<detail>)`.
pub fn format_result(result: &PortResult) -> String {
    let service = result
        .service_name
        .as_deref()
        .map(|s| format!(" {s}"))
        .unwrap_or_default();

    let mut detail = match result.detail {
        Detail::Response { bytes } => format!("service responded: {bytes} bytes"),
        Detail::Icmp { icmp_type, code }
            if icmp_type == ICMP_DEST_UNREACHABLE && code == ICMP_PORT_UNREACHABLE =>
        {
            "ICMP port unreachable".to_string()
        }
        Detail::Icmp { icmp_type, code } => {
            format!("ICMP unreachable type {icmp_type}, code {code}")
        }
        Detail::NoResponse => "no response".to_string(),
    };
    if let Some(reference) = &result.reference {
        let _ = write!(detail, "; {reference}");
    }

    format!(
        "[{}] Port {}/udp{} ({})",
        result.state, result.port, service, detail
    )
}

pub fn format_statistics(stats: &ScanStatistics) -> String {
    let mut out = String::from("=== Scan Statistics ===\n");
    let _ = writeln!(out, "Total ports scanned: {}", stats.total);
    let _ = writeln!(out, "Open ports: {}", stats.open);
    let _ = writeln!(out, "Closed ports: {}", stats.closed);
    let _ = writeln!(out, "Filtered/Open|Filtered: {}", stats.filtered);
    if stats.skipped > 0 {
        let _ = writeln!(out, "Skipped ports: {}", stats.skipped);
    }
    let _ = writeln!(out, "Scan duration: {:.2} seconds", stats.duration_secs);
    let _ = write!(out, "Scan rate: {:.2} ports/sec", stats.rate());
    out
}

pub fn write_report_json(path: &Path, report: &ScanReport) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create report file: {}", path.display()))?;
    serde_json::to_writer_pretty(file, report)?;
    Ok(())
}

pub fn now_rfc3339() -> String {
    let now = OffsetDateTime::now_utc();
    now.format(&well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("1970-01-01T00:00:00Z"))
}
