#![allow(dead_code)]

use std::collections::{HashMap, HashSet, VecDeque};
use std::io;
use std::net::{Ipv4Addr, SocketAddrV4};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::{self, Instant};
use pnet::packet::icmp::{checksum, IcmpPacket, MutableIcmpPacket};
use udp_probe_rs::prober::{ChannelEvent, ChannelOpener, ProbeChannel, ProbeError};

/// Source port every scripted channel claims to send from.
pub const LOCAL_PORT: u16 = 51000;

/// Events one attempt will see, each delayed from that attempt's send.
pub type Attempt = Vec<(Duration, ChannelEvent)>;

pub fn reply(after_ms: u64, len: usize) -> (Duration, ChannelEvent) {
    (Duration::from_millis(after_ms), ChannelEvent::Datagram { len })
}

pub fn icmp(after_ms: u64, packet: Vec<u8>) -> (Duration, ChannelEvent) {
    (Duration::from_millis(after_ms), ChannelEvent::Icmp(packet))
}

fn ipv4_header(protocol: u8, src: Ipv4Addr, dst: Ipv4Addr, payload_len: usize) -> Vec<u8> {
    let total = (20 + payload_len) as u16;
    let mut h = vec![0x45, 0x00];
    h.extend_from_slice(&total.to_be_bytes());
    h.extend_from_slice(&[0, 0, 0x40, 0, 64, protocol, 0, 0]);
    h.extend_from_slice(&src.octets());
    h.extend_from_slice(&dst.octets());
    h
}

fn seal(msg: &mut [u8]) {
    let sum = checksum(&IcmpPacket::new(&*msg).unwrap());
    MutableIcmpPacket::new(msg).unwrap().set_checksum(sum);
}

/// Destination-unreachable with `code`, quoting a UDP datagram sent to `quoted`.
pub fn unreachable(quoted: SocketAddrV4, code: u8) -> Vec<u8> {
    unreachable_from(LOCAL_PORT, quoted, code)
}

/// Like `unreachable`, but the quoted datagram left from `source_port`.
pub fn unreachable_from(source_port: u16, quoted: SocketAddrV4, code: u8) -> Vec<u8> {
    let local = Ipv4Addr::new(10, 0, 0, 2);
    let mut udp = Vec::new();
    udp.extend_from_slice(&source_port.to_be_bytes());
    udp.extend_from_slice(&quoted.port().to_be_bytes());
    udp.extend_from_slice(&[0, 8, 0, 0]);
    let mut inner = ipv4_header(17, local, *quoted.ip(), udp.len());
    inner.extend_from_slice(&udp);

    let mut msg = vec![3, code, 0, 0, 0, 0, 0, 0];
    msg.extend_from_slice(&inner);
    seal(&mut msg);

    let mut pkt = ipv4_header(1, *quoted.ip(), local, msg.len());
    pkt.extend_from_slice(&msg);
    pkt
}

pub fn port_unreachable(quoted: SocketAddrV4) -> Vec<u8> {
    unreachable(quoted, 3)
}

pub fn echo_reply(from: Ipv4Addr) -> Vec<u8> {
    let mut msg = vec![0, 0, 0, 0, 0x00, 0x2a, 0x00, 0x01, b'p', b'i', b'n', b'g'];
    seal(&mut msg);
    let mut pkt = ipv4_header(1, from, Ipv4Addr::new(10, 0, 0, 2), msg.len());
    pkt.extend_from_slice(&msg);
    pkt
}

/// In-memory channel that replays one scripted attempt per send.
#[derive(Debug, Default)]
pub struct ScriptedChannel {
    attempts: VecDeque<Attempt>,
    pending: VecDeque<(Instant, ChannelEvent)>,
    local_port: u16,
    pub sent: Vec<Vec<u8>>,
    pub fail_send: bool,
}

impl ScriptedChannel {
    pub fn new(attempts: Vec<Attempt>) -> Self {
        Self {
            attempts: attempts.into(),
            local_port: LOCAL_PORT,
            ..Self::default()
        }
    }

    /// Nothing ever arrives.
    pub fn silent() -> Self {
        Self::new(Vec::new())
    }
}

impl ProbeChannel for ScriptedChannel {
    async fn send(&mut self, payload: &[u8]) -> io::Result<()> {
        if self.fail_send {
            return Err(io::Error::new(io::ErrorKind::Other, "network unreachable"));
        }
        self.sent.push(payload.to_vec());
        let now = Instant::now();
        let mut events = self.attempts.pop_front().unwrap_or_default();
        events.sort_by_key(|(after, _)| *after);
        self.pending = events
            .into_iter()
            .map(|(after, event)| (now + after, event))
            .collect();
        Ok(())
    }

    fn local_port(&self) -> u16 {
        self.local_port
    }

    async fn recv_event(&mut self) -> io::Result<ChannelEvent> {
        let Some(at) = self.pending.front().map(|(at, _)| *at) else {
            return std::future::pending().await;
        };
        time::sleep_until(at).await;
        match self.pending.pop_front() {
            Some((_, event)) => Ok(event),
            None => std::future::pending().await,
        }
    }
}

/// Hands out scripted channels per port and records every payload sent.
#[derive(Debug, Default, Clone)]
pub struct ScriptedOpener {
    pub scripts: HashMap<u16, Vec<Attempt>>,
    pub fail_open: HashSet<u16>,
    pub fail_send: HashSet<u16>,
    pub sends: Arc<Mutex<Vec<(u16, Vec<u8>)>>>,
    pub icmp: bool,
}

impl ScriptedOpener {
    pub fn script(mut self, port: u16, attempts: Vec<Attempt>) -> Self {
        self.scripts.insert(port, attempts);
        self
    }

    pub fn sends_to(&self, port: u16) -> Vec<Vec<u8>> {
        self.sends
            .lock()
            .unwrap()
            .iter()
            .filter(|(p, _)| *p == port)
            .map(|(_, payload)| payload.clone())
            .collect()
    }
}

pub struct RecordingChannel {
    port: u16,
    inner: ScriptedChannel,
    sends: Arc<Mutex<Vec<(u16, Vec<u8>)>>>,
}

impl ProbeChannel for RecordingChannel {
    async fn send(&mut self, payload: &[u8]) -> io::Result<()> {
        self.inner.send(payload).await?;
        self.sends.lock().unwrap().push((self.port, payload.to_vec()));
        Ok(())
    }

    fn local_port(&self) -> u16 {
        self.inner.local_port()
    }

    async fn recv_event(&mut self) -> io::Result<ChannelEvent> {
        self.inner.recv_event().await
    }
}

impl ChannelOpener for ScriptedOpener {
    type Channel = RecordingChannel;

    async fn open(&self, target: SocketAddrV4) -> Result<RecordingChannel, ProbeError> {
        let port = target.port();
        if self.fail_open.contains(&port) {
            return Err(ProbeError::Setup {
                channel: "raw icmp",
                source: io::Error::new(io::ErrorKind::PermissionDenied, "operation not permitted"),
            });
        }
        let mut inner = ScriptedChannel::new(self.scripts.get(&port).cloned().unwrap_or_default());
        inner.fail_send = self.fail_send.contains(&port);
        Ok(RecordingChannel {
            port,
            inner,
            sends: Arc::clone(&self.sends),
        })
    }

    fn icmp_enabled(&self) -> bool {
        self.icmp
    }
}
