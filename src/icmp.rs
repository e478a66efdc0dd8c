//! Parsing of packets read from a raw `IPPROTO_ICMP` socket.
//!
//! On Linux an IPv4 raw socket hands back the full IP datagram, so every
//! buffer starts with the outer IPv4 header. Destination-unreachable errors
//! quote the original IPv4 header plus the first 8 bytes of the datagram
//! that triggered them (RFC 792); for a UDP probe that is the UDP header,
//! which is what lets a reply be tied to the port that was probed.

use std::net::{Ipv4Addr, SocketAddrV4};

use pnet::packet::icmp::destination_unreachable::{DestinationUnreachablePacket, IcmpCodes};
use pnet::packet::icmp::{checksum, IcmpPacket, IcmpTypes};
use pnet::packet::ip::IpNextHeaderProtocols;
use pnet::packet::ipv4::Ipv4Packet;
use pnet::packet::udp::UdpPacket;
use pnet::packet::Packet;
use thiserror::Error;

pub const ICMP_DEST_UNREACHABLE: u8 = IcmpTypes::DestinationUnreachable.0;
pub const ICMP_PORT_UNREACHABLE: u8 = IcmpCodes::DestinationPortUnreachable.0;

const IPV4_MIN_HEADER: usize = 20;
const ICMP_HEADER: usize = 8;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IcmpParseError {
    #[error("packet truncated: {0} bytes")]
    Truncated(usize),

    #[error("not an IPv4 packet (version {0})")]
    NotIpv4(u8),

    #[error("IPv4 payload is not ICMP (protocol {0})")]
    NotIcmp(u8),

    #[error("ICMP checksum mismatch")]
    BadChecksum,
}

/// A Destination-Unreachable error and the datagram it quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unreachable {
    pub code: u8,
    /// Router or host that generated the error.
    pub reporter: Ipv4Addr,
    pub quoted_protocol: u8,
    pub quoted_destination: SocketAddrV4,
    pub quoted_source_port: u16,
}

impl Unreachable {
    pub fn is_port_unreachable(&self) -> bool {
        self.code == ICMP_PORT_UNREACHABLE
    }

    /// True when the quoted datagram is a UDP packet sent from `local_port`
    /// to `target`.
    pub fn concerns(&self, target: SocketAddrV4, local_port: u16) -> bool {
        self.quoted_protocol == IpNextHeaderProtocols::Udp.0
            && self.quoted_destination == target
            && self.quoted_source_port == local_port
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IcmpMessage {
    Unreachable(Unreachable),
    /// Any other ICMP traffic (echo replies, time exceeded, ...).
    Other { icmp_type: u8, code: u8 },
}

/// Parse one datagram received on a raw ICMP socket.
pub fn parse_packet(buf: &[u8]) -> Result<IcmpMessage, IcmpParseError> {
    let (outer, body) = split_ipv4(buf)?;
    let protocol = outer.get_next_level_protocol();
    if protocol != IpNextHeaderProtocols::Icmp {
        return Err(IcmpParseError::NotIcmp(protocol.0));
    }
    if body.len() < ICMP_HEADER {
        return Err(IcmpParseError::Truncated(buf.len()));
    }
    let icmp = IcmpPacket::new(body).ok_or(IcmpParseError::Truncated(buf.len()))?;
    if checksum(&icmp) != icmp.get_checksum() {
        return Err(IcmpParseError::BadChecksum);
    }

    let (icmp_type, code) = (icmp.get_icmp_type(), icmp.get_icmp_code());
    if icmp_type != IcmpTypes::DestinationUnreachable {
        return Ok(IcmpMessage::Other {
            icmp_type: icmp_type.0,
            code: code.0,
        });
    }

    let error = DestinationUnreachablePacket::new(body).ok_or(IcmpParseError::Truncated(buf.len()))?;
    let (inner, transport) = split_ipv4(error.payload())?;
    // Only the first 8 bytes of the original datagram are guaranteed to be quoted.
    let udp = UdpPacket::new(transport).ok_or(IcmpParseError::Truncated(buf.len()))?;

    Ok(IcmpMessage::Unreachable(Unreachable {
        code: code.0,
        reporter: outer.get_source(),
        quoted_protocol: inner.get_next_level_protocol().0,
        quoted_destination: SocketAddrV4::new(inner.get_destination(), udp.get_destination()),
        quoted_source_port: udp.get_source(),
    }))
}

/// Split an IPv4 datagram into its header view and payload. The payload is
/// cut at the header length rather than the total-length field, which is
/// wrong in quoted headers.
fn split_ipv4(buf: &[u8]) -> Result<(Ipv4Packet<'_>, &[u8]), IcmpParseError> {
    let packet = Ipv4Packet::new(buf).ok_or(IcmpParseError::Truncated(buf.len()))?;
    let version = packet.get_version();
    if version != 4 {
        return Err(IcmpParseError::NotIpv4(version));
    }
    let header_len = usize::from(packet.get_header_length()) * 4;
    if header_len < IPV4_MIN_HEADER || buf.len() < header_len {
        return Err(IcmpParseError::Truncated(buf.len()));
    }
    Ok((packet, &buf[header_len..]))
}
