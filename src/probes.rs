use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::payloads::{BASE_TABLE, EXTENDED_TABLE};

/// A protocol-specific payload meant to elicit a reply from a UDP service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    pub port: u16,
    pub service_name: &'static str,
    pub payload: &'static [u8],
    /// RFC or vendor document the payload follows.
    pub reference: Option<&'static str>,
}

impl Probe {
    pub const fn new(port: u16, service_name: &'static str, payload: &'static [u8]) -> Self {
        Self {
            port,
            service_name,
            payload,
            reference: None,
        }
    }

    pub const fn with_reference(
        port: u16,
        service_name: &'static str,
        payload: &'static [u8],
        reference: &'static str,
    ) -> Self {
        Self {
            port,
            service_name,
            payload,
            reference: Some(reference),
        }
    }
}

/// Which built-in payload table to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProbeTable {
    Base,
    #[default]
    Extended,
}

impl ProbeTable {
    pub fn entries(&self) -> &'static [Probe] {
        match self {
            ProbeTable::Base => BASE_TABLE,
            ProbeTable::Extended => EXTENDED_TABLE,
        }
    }
}

impl fmt::Display for ProbeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeTable::Base => f.write_str("base"),
            ProbeTable::Extended => f.write_str("extended"),
        }
    }
}

impl FromStr for ProbeTable {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "base" => Ok(ProbeTable::Base),
            "extended" => Ok(ProbeTable::Extended),
            other => Err(format!("unknown probe table: {other} (expected base or extended)")),
        }
    }
}

/// Port -> ordered candidate probes.
///
/// Lookups are first-match-wins: when a table lists several probes for the
/// same port (the extended table has two for DNS), `lookup` returns the one
/// listed first and the rest are only reachable through `candidates`.
/// The registry is read-only after construction.
#[derive(Debug, Clone)]
pub struct ProbeRegistry {
    by_port: BTreeMap<u16, Vec<Probe>>,
}

impl ProbeRegistry {
    pub fn new(table: ProbeTable) -> Self {
        Self::from_probes(table.entries().iter().copied())
    }

    /// Build from an arbitrary ordered list; insertion order is preserved per port.
    pub fn from_probes(probes: impl IntoIterator<Item = Probe>) -> Self {
        let mut by_port: BTreeMap<u16, Vec<Probe>> = BTreeMap::new();
        for probe in probes {
            by_port.entry(probe.port).or_default().push(probe);
        }
        Self { by_port }
    }

    pub fn lookup(&self, port: u16) -> Option<&Probe> {
        self.candidates(port).first()
    }

    pub fn candidates(&self, port: u16) -> &[Probe] {
        self.by_port.get(&port).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct ports with at least one probe.
    pub fn port_count(&self) -> usize {
        self.by_port.len()
    }
}
