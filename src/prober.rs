//! Per-port UDP probe and state classification.
//!
//! One port is probed by sending its payload, then waiting on both the UDP
//! reply path and the ICMP error path until a deadline. A reply means
//! `Open`, an ICMP port-unreachable means `Closed`, any other
//! destination-unreachable code means `Filtered`. Silence is ambiguous
//! (`OpenOrFiltered`) and is the only outcome that triggers a resend.

use std::io;
use std::net::SocketAddrV4;
use std::time::Duration;

use thiserror::Error;
use tokio::time::{self, Instant};
use tracing::debug;

use crate::icmp::{self, IcmpMessage, Unreachable, ICMP_DEST_UNREACHABLE};
use crate::probes::Probe;
use crate::types::{Detail, PortResult, PortState};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);
pub const MAX_RETRIES: u32 = 2;

/// Timing and retry budget for a single port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeSettings {
    /// How long each attempt waits for a reply, measured from its send.
    pub timeout: Duration,
    /// Total number of sends allowed when nothing comes back. At least one
    /// send always happens.
    pub max_retries: u32,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            max_retries: MAX_RETRIES,
        }
    }
}

/// Something that arrived on one of the two receive paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelEvent {
    /// A UDP datagram of `len` bytes from the probed service.
    Datagram { len: usize },
    /// A raw packet from the ICMP listener, outer IPv4 header included.
    Icmp(Vec<u8>),
}

/// Send path plus the merged UDP/ICMP receive paths for one probed port.
#[allow(async_fn_in_trait)]
pub trait ProbeChannel {
    async fn send(&mut self, payload: &[u8]) -> io::Result<()>;

    /// Source port probes leave from; ICMP errors quoting any other source
    /// port belong to some other socket.
    fn local_port(&self) -> u16;

    /// Resolve with whichever receive path becomes ready first. Never
    /// resolves if nothing arrives; the caller bounds it with a deadline.
    async fn recv_event(&mut self) -> io::Result<ChannelEvent>;
}

/// Creates a fresh channel for each probed port.
#[allow(async_fn_in_trait)]
pub trait ChannelOpener {
    type Channel: ProbeChannel;

    async fn open(&self, target: SocketAddrV4) -> Result<Self::Channel, ProbeError>;

    /// Whether opened channels listen for ICMP errors.
    fn icmp_enabled(&self) -> bool;
}

/// Why a port produced no result.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("failed to open {channel} socket: {source}")]
    Setup {
        channel: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("failed to send probe to port {port}: {source}")]
    Send {
        port: u16,
        #[source]
        source: io::Error,
    },
}

/// What one attempt's wait window observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Observation {
    Reply(usize),
    Unreachable(Unreachable),
    Silence,
}

/// Probe `target` until a conclusive answer arrives or the retry budget is
/// spent. Exactly one `PortResult` comes back on success; send failures
/// abort immediately without a result.
pub async fn probe_port<C: ProbeChannel>(
    channel: &mut C,
    target: SocketAddrV4,
    probe: Option<&Probe>,
    settings: &ProbeSettings,
) -> Result<PortResult, ProbeError> {
    let port = target.port();
    let payload = probe.map(|p| p.payload).unwrap_or(&[]);
    let budget = settings.max_retries.max(1);
    let mut attempts = 0u32;

    let (state, detail) = loop {
        attempts += 1;
        debug!(port, attempt = attempts, bytes = payload.len(), "sending probe");
        channel
            .send(payload)
            .await
            .map_err(|source| ProbeError::Send { port, source })?;

        let deadline = Instant::now() + settings.timeout;
        match await_observation(channel, target, deadline).await {
            Observation::Reply(bytes) => break (PortState::Open, Detail::Response { bytes }),
            Observation::Unreachable(error) => {
                let state = if error.is_port_unreachable() {
                    PortState::Closed
                } else {
                    PortState::Filtered
                };
                debug!(port, code = error.code, reporter = %error.reporter, "icmp unreachable");
                break (
                    state,
                    Detail::Icmp {
                        icmp_type: ICMP_DEST_UNREACHABLE,
                        code: error.code,
                    },
                );
            }
            Observation::Silence if attempts >= budget => {
                break (PortState::OpenOrFiltered, Detail::NoResponse)
            }
            Observation::Silence => {
                debug!(port, attempt = attempts, "no response, retrying");
            }
        }
    };

    Ok(PortResult {
        port,
        state,
        detail,
        service_name: probe.map(|p| p.service_name.to_string()),
        reference: probe.and_then(|p| p.reference).map(str::to_string),
        attempts,
    })
}

/// Wait until something classifies the port or `deadline` passes. Events
/// that say nothing about this probe are dropped and the wait resumes with
/// the same deadline.
async fn await_observation<C: ProbeChannel>(
    channel: &mut C,
    target: SocketAddrV4,
    deadline: Instant,
) -> Observation {
    loop {
        let event = match time::timeout_at(deadline, channel.recv_event()).await {
            Err(_) => return Observation::Silence,
            Ok(Err(e)) => {
                debug!(port = target.port(), error = %e, "receive failed, waiting out attempt");
                time::sleep_until(deadline).await;
                return Observation::Silence;
            }
            Ok(Ok(event)) => event,
        };
        if let Some(observation) = classify(&event, target, channel.local_port()) {
            return observation;
        }
    }
}

fn classify(event: &ChannelEvent, target: SocketAddrV4, local_port: u16) -> Option<Observation> {
    match event {
        ChannelEvent::Datagram { len: 0 } => {
            debug!(port = target.port(), "ignoring empty datagram");
            None
        }
        ChannelEvent::Datagram { len } => Some(Observation::Reply(*len)),
        ChannelEvent::Icmp(packet) => match icmp::parse_packet(packet) {
            Ok(IcmpMessage::Unreachable(u)) if u.concerns(target, local_port) => {
                Some(Observation::Unreachable(u))
            }
            Ok(IcmpMessage::Unreachable(u)) => {
                debug!(
                    port = target.port(),
                    quoted = %u.quoted_destination,
                    quoted_source = u.quoted_source_port,
                    "unreachable for another datagram"
                );
                None
            }
            Ok(IcmpMessage::Other { icmp_type, code }) => {
                debug!(port = target.port(), icmp_type, code, "ignoring icmp message");
                None
            }
            Err(e) => {
                debug!(port = target.port(), error = %e, "malformed icmp packet");
                None
            }
        },
    }
}
