//! Real sockets behind the prober: one UDP socket per probed port and, when
//! the process may open it, a raw ICMPv4 socket for the error path.

use std::io;
use std::net::{Ipv4Addr, SocketAddrV4};

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::UdpSocket;

use crate::prober::{ChannelEvent, ChannelOpener, ProbeChannel, ProbeError};

const MAX_PACKET_SIZE: usize = 65536;

/// Open a raw ICMPv4 socket registered with the tokio reactor.
///
/// Raw sockets are datagram-oriented, so the std `UdpSocket` wrapper is only
/// used for its `recv_from`; it never sends. Needs root or `CAP_NET_RAW`.
pub fn open_icmp_socket() -> io::Result<UdpSocket> {
    let socket = Socket::new(Domain::IPV4, Type::RAW, Some(Protocol::ICMPV4))?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    UdpSocket::from_std(std_socket)
}

/// Startup capability check: can this process receive raw ICMP at all?
pub fn icmp_available() -> io::Result<()> {
    Socket::new(Domain::IPV4, Type::RAW, Some(Protocol::ICMPV4)).map(drop)
}

/// A UDP socket aimed at one port, plus an optional ICMP listener.
pub struct SocketChannel {
    target: SocketAddrV4,
    local_port: u16,
    udp: UdpSocket,
    icmp: Option<UdpSocket>,
    udp_buf: Vec<u8>,
    icmp_buf: Vec<u8>,
}

impl SocketChannel {
    pub async fn open(target: SocketAddrV4, with_icmp: bool) -> Result<Self, ProbeError> {
        let udp = UdpSocket::bind(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 0))
            .await
            .map_err(|source| ProbeError::Setup {
                channel: "udp",
                source,
            })?;
        let local_port = udp
            .local_addr()
            .map_err(|source| ProbeError::Setup {
                channel: "udp",
                source,
            })?
            .port();
        let icmp = if with_icmp {
            let sock = open_icmp_socket().map_err(|source| ProbeError::Setup {
                channel: "raw icmp",
                source,
            })?;
            Some(sock)
        } else {
            None
        };
        Ok(Self {
            target,
            local_port,
            udp,
            icmp,
            udp_buf: vec![0u8; MAX_PACKET_SIZE],
            icmp_buf: if with_icmp { vec![0u8; MAX_PACKET_SIZE] } else { Vec::new() },
        })
    }
}

impl ProbeChannel for SocketChannel {
    async fn send(&mut self, payload: &[u8]) -> io::Result<()> {
        self.udp.send_to(payload, self.target).await.map(|_| ())
    }

    fn local_port(&self) -> u16 {
        self.local_port
    }

    async fn recv_event(&mut self) -> io::Result<ChannelEvent> {
        let Self {
            udp,
            icmp,
            udp_buf,
            icmp_buf,
            ..
        } = self;

        let Some(icmp) = icmp else {
            let (len, _) = udp.recv_from(&mut udp_buf[..]).await?;
            return Ok(ChannelEvent::Datagram { len });
        };

        // A service reply outranks an ICMP error that became ready in the same poll.
        tokio::select! {
            biased;
            res = udp.recv_from(&mut udp_buf[..]) => {
                let (len, _) = res?;
                Ok(ChannelEvent::Datagram { len })
            }
            res = icmp.recv_from(&mut icmp_buf[..]) => {
                let (len, _) = res?;
                Ok(ChannelEvent::Icmp(icmp_buf[..len].to_vec()))
            }
        }
    }
}

/// Opens real sockets for every port.
#[derive(Debug, Clone, Copy)]
pub struct SocketOpener {
    pub icmp: bool,
}

impl ChannelOpener for SocketOpener {
    type Channel = SocketChannel;

    async fn open(&self, target: SocketAddrV4) -> Result<SocketChannel, ProbeError> {
        SocketChannel::open(target, self.icmp).await
    }

    fn icmp_enabled(&self) -> bool {
        self.icmp
    }
}
