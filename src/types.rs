use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::ops::RangeInclusive;
use thiserror::Error;

/// Reasons a scan target is rejected before any packet is sent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetError {
    #[error("invalid target host: {0} (expected an IPv4 address)")]
    InvalidHost(String),

    #[error("port out of range: {0} (must be 1-65535)")]
    PortOutOfRange(u32),

    #[error("invalid port range {start}-{end} (start > end)")]
    InvertedRange { start: u16, end: u16 },
}

/// Host plus inclusive port range. Validated once, immutable for the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanTarget {
    pub host: Ipv4Addr,
    pub start_port: u16,
    pub end_port: u16,
}

impl ScanTarget {
    pub fn new(host: Ipv4Addr, start_port: u32, end_port: u32) -> Result<Self, TargetError> {
        let start = checked_port(start_port)?;
        let end = checked_port(end_port)?;
        if start > end {
            return Err(TargetError::InvertedRange { start, end });
        }
        Ok(Self {
            host,
            start_port: start,
            end_port: end,
        })
    }

    /// Parse the host from text. Only dotted-quad IPv4 is accepted.
    pub fn parse(host: &str, start_port: u32, end_port: u32) -> Result<Self, TargetError> {
        let host: Ipv4Addr = host
            .trim()
            .parse()
            .map_err(|_| TargetError::InvalidHost(host.to_string()))?;
        Self::new(host, start_port, end_port)
    }

    pub fn ports(&self) -> RangeInclusive<u16> {
        self.start_port..=self.end_port
    }

    pub fn port_count(&self) -> u64 {
        u64::from(self.end_port - self.start_port) + 1
    }
}

fn checked_port(val: u32) -> Result<u16, TargetError> {
    if val == 0 || val > 65535 {
        return Err(TargetError::PortOutOfRange(val));
    }
    Ok(val as u16)
}

/// Classified state of one UDP port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortState {
    #[serde(rename = "open")]
    Open,
    #[serde(rename = "closed")]
    Closed,
    #[serde(rename = "filtered")]
    Filtered,
    #[serde(rename = "open|filtered")]
    OpenOrFiltered,
}

impl PortState {
    pub fn label(&self) -> &'static str {
        match self {
            PortState::Open => "OPEN",
            PortState::Closed => "CLOSED",
            PortState::Filtered => "FILTERED",
            PortState::OpenOrFiltered => "OPEN|FILTERED",
        }
    }
}

impl fmt::Display for PortState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The observation that produced a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Detail {
    /// A datagram of this many bytes came back from the port.
    Response { bytes: usize },
    /// An ICMP error was attributed to the probe.
    Icmp { icmp_type: u8, code: u8 },
    /// Nothing arrived before the last attempt's deadline.
    NoResponse,
}

/// One result per scanned port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortResult {
    pub port: u16,
    pub state: PortState,
    pub detail: Detail,
    pub service_name: Option<String>,
    /// Protocol reference of the probe used (e.g. `RFC 1035`), if the table carries one.
    pub reference: Option<String>,
    /// Number of probes sent for this port.
    pub attempts: u32,
}

/// Outcome counters for a scan. `OpenOrFiltered` counts as filtered.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ScanStatistics {
    pub total: u64,
    pub open: u64,
    pub closed: u64,
    pub filtered: u64,
    /// Ports whose probe was aborted (setup or send failure). Not part of `total`.
    pub skipped: u64,
    pub start_time: String,
    pub end_time: Option<String>,
    pub duration_secs: f64,
}

impl ScanStatistics {
    pub fn new(start_time: String) -> Self {
        Self {
            start_time,
            ..Self::default()
        }
    }

    pub fn record(&mut self, result: &PortResult) {
        self.total += 1;
        match result.state {
            PortState::Open => self.open += 1,
            PortState::Closed => self.closed += 1,
            PortState::Filtered | PortState::OpenOrFiltered => self.filtered += 1,
        }
    }

    pub fn record_skip(&mut self) {
        self.skipped += 1;
    }

    pub fn finish(&mut self, end_time: String, duration_secs: f64) {
        self.end_time = Some(end_time);
        self.duration_secs = duration_secs;
    }

    /// Ports per second; zero when no time has elapsed.
    pub fn rate(&self) -> f64 {
        if self.duration_secs > 0.0 {
            self.total as f64 / self.duration_secs
        } else {
            0.0
        }
    }
}

/// Everything a finished (or cancelled) scan produced.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ScanReport {
    pub target: ScanTarget,
    pub probe_table: String,
    pub icmp_enabled: bool,
    pub cancelled: bool,
    pub results: Vec<PortResult>,
    pub statistics: ScanStatistics,
}
