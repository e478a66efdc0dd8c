//! Static probe payload tables.
//!
//! Byte content is kept exactly as real services expect it; treat every
//! constant here as a wire fixture.

use crate::probes::Probe;

const EMPTY: &[u8] = &[];

// CHAOS-class TXT query for version.bind
const DNS_VERSION_BIND: &[u8] = &[
    0x00, 0x00, 0x01, 0x00, 0x00, 0x01, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x07, 0x76, 0x65, 0x72,
    0x73, 0x69, 0x6f, 0x6e, 0x04, 0x62, 0x69, 0x6e,
    0x64, 0x00, 0x00, 0x10, 0x00, 0x03,
];

// LI=0, VN=3, mode 3 (client)
const NTP_CLIENT_V3: &[u8] = &[
    0x1b, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

const SNMP_V1_GET_PUBLIC: &[u8] = &[
    0x30, 0x26, 0x02, 0x01, 0x00, 0x04, 0x06, 0x70,
    0x75, 0x62, 0x6c, 0x69, 0x63, 0xa0, 0x19, 0x02,
    0x04, 0x00, 0x00, 0x00, 0x01, 0x02, 0x01, 0x00,
    0x02, 0x01, 0x00, 0x30, 0x0b, 0x30, 0x09, 0x06,
    0x05, 0x2b, 0x06, 0x01, 0x02, 0x01, 0x05, 0x00,
];

// BOOTREQUEST with magic cookie and a single DHCPDISCOVER option
const DHCP_BOOT_REQUEST: &[u8] = &[
    0x01, 0x01, 0x06, 0x00, 0x00, 0x00, 0x00, 0x01,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x63, 0x82, 0x53, 0x63,
    0x35, 0x01, 0x01, 0xff,
];

const NETBIOS_NAME_QUERY: &[u8] = &[
    0x00, 0x00, 0x00, 0x10, 0x00, 0x01, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x20, 0x43, 0x4b, 0x41,
    0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41,
    0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41,
    0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41,
    0x41, 0x41, 0x41, 0x41, 0x00, 0x00, 0x21, 0x00,
    0x01,
];

// RFC 3261 OPTIONS ping
const SIP_OPTIONS: &[u8] = b"\
    OPTIONS sip:nm SIP/2.0\r\n\
    Via: SIP/2.0/UDP nm;branch=foo\r\n\
    From: <sip:nm@nm>;tag=root\r\n\
    To: <sip:nm2@nm2>\r\n\
    Call-ID: 50000\r\n\
    CSeq: 42 OPTIONS\r\n\
    Max-Forwards: 70\r\n\
    Content-Length: 0\r\n\
    \r\n\
    ";

const ECHO: &[u8] = b"\r\n\r\n";

// Header-only query with opcode STATUS
const DNS_STATUS: &[u8] = &[
    0x00, 0x00, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
];

const DHCP_DISCOVER: &[u8] = &[
    0x01, 0x01, 0x06, 0x00, 0x01, 0x23, 0x45, 0x67,
    0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x0e, 0x35, 0xd4,
    0xd8, 0x51, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x63, 0x82, 0x53, 0x63, 0x35, 0x01, 0x08, 0xff,
];

const TFTP_READ: &[u8] = b"\x00\x01netascii\x00octet\x00";

const RPC_PORTMAP_NULL: &[u8] = &[
    0x72, 0xfe, 0x1d, 0x13, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x02, 0x00, 0x01, 0x86, 0xa0,
    0x00, 0x01, 0x97, 0x7c, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

// Client request carrying a transmit timestamp
const NTP_CLIENT_V4: &[u8] = &[
    0xe3, 0x00, 0x04, 0xfa, 0x00, 0x01, 0x00, 0x00,
    0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xc5, 0x4f, 0x23, 0x4b, 0x71, 0xb1, 0x52, 0xf3,
];

const DCERPC_BIND: &[u8] = &[
    0x05, 0x00, 0x0b, 0x03, 0x10, 0x00, 0x00, 0x00,
    0x48, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00,
    0xb8, 0x10, 0xb8, 0x10, 0x00, 0x00, 0x00, 0x00,
    0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00,
    0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef,
    0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef,
    0xe7, 0x03, 0x00, 0x00, 0xfe, 0xdc, 0xba, 0x98,
    0x76, 0x54, 0x32, 0x10, 0x01, 0x23, 0x45, 0x67,
    0x89, 0xab, 0xcd, 0xef, 0xe7, 0x03, 0x00, 0x00,
];

const NETBIOS_NBSTAT: &[u8] = &[
    0x80, 0xf0, 0x00, 0x10, 0x00, 0x01, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x20, 0x43, 0x4b, 0x41,
    0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41,
    0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41,
    0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41,
    0x41, 0x41, 0x41, 0x41, 0x41, 0x00, 0x00, 0x21,
    0x00, 0x01,
];

const XDMCP_QUERY: &[u8] = &[
    0x00, 0x01, 0x00, 0x02, 0x00, 0x01, 0x00,
];

const CLDAP_SEARCH: &[u8] = &[
    0x30, 0x84, 0x00, 0x00, 0x00, 0x2d, 0x02, 0x01,
    0x07, 0x63, 0x84, 0x00, 0x00, 0x00, 0x24, 0x04,
    0x00, 0x0a, 0x01, 0x00, 0x0a, 0x01, 0x00, 0x02,
    0x01, 0x00, 0x02, 0x01, 0x64, 0x01, 0x01, 0x00,
    0x87, 0x0b, 0x6f, 0x62, 0x6a, 0x65, 0x63, 0x74,
    0x43, 0x6c, 0x61, 0x73, 0x73, 0x30, 0x84, 0x00,
    0x00, 0x00, 0x00,
];

const SLP_SERVICE_REQUEST: &[u8] = &[
    0x02, 0x01, 0x00, 0x00, 0x36, 0x20, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x01, 0x00, 0x02, 0x65, 0x6e,
    0x00, 0x00, 0x00, 0x15, 0x73, 0x65, 0x72, 0x76,
    0x69, 0x63, 0x65, 0x3a, 0x73, 0x65, 0x72, 0x76,
    0x69, 0x63, 0x65, 0x2d, 0x61, 0x67, 0x65, 0x6e,
    0x74, 0x00, 0x07, 0x64, 0x65, 0x66, 0x61, 0x75,
    0x6c, 0x74, 0x00, 0x00, 0x00, 0x00,
];

const DTLS_CLIENT_HELLO: &[u8] = &[
    0x16, 0xfe, 0xff, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x36, 0x01, 0x00, 0x00,
    0x2a, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x2a, 0xfe, 0xfd, 0x00, 0x00, 0x00, 0x00, 0x7c,
    0x77, 0x40, 0x1e, 0x8a, 0xc8, 0x22, 0xa0, 0xa0,
    0x18, 0xff, 0x93, 0x08, 0xca, 0xac, 0x0a, 0x64,
    0x2f, 0xc9, 0x22, 0x64, 0xbc, 0x08, 0xa8, 0x16,
    0x89, 0x19, 0x3f, 0x00, 0x00, 0x00, 0x02, 0x00,
    0x2f, 0x01, 0x00,
];

const IKE_MAIN_MODE: &[u8] = &[
    0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x01, 0x10, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0xc0, 0x00, 0x00, 0x00, 0xa4,
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01,
    0x00, 0x00, 0x00, 0x98, 0x01, 0x01, 0x00, 0x04,
    0x03, 0x00, 0x00, 0x24, 0x01, 0x01, 0x00, 0x00,
    0x80, 0x01, 0x00, 0x05, 0x80, 0x02, 0x00, 0x02,
    0x80, 0x03, 0x00, 0x01, 0x80, 0x04, 0x00, 0x02,
    0x80, 0x0b, 0x00, 0x01, 0x00, 0x0c, 0x00, 0x04,
    0x00, 0x00, 0x0e, 0x10,
];

const RIP_REQUEST: &[u8] = &[
    0x01, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10,
];

// ASF presence ping over RMCP
const RMCP_PRESENCE_PING: &[u8] = &[
    0x06, 0x00, 0xff, 0x06, 0x00, 0x00, 0x11, 0xbe,
    0x80, 0x00, 0x00, 0x00,
];

const OPENVPN_RESET: &[u8] = &[
    0x38, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07,
    0x08, 0x00, 0x00, 0x00, 0x00,
];

const CITRIX_ICA: &[u8] = &[
    0x1e, 0x00, 0x01, 0x30, 0x02, 0xfd, 0xa8, 0xe3,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

const RADIUS_ACCESS_REQUEST: &[u8] = &[
    0x01, 0x00, 0x00, 0x14, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
];

const L2TP_SCCRQ: &[u8] = &[
    0xc8, 0x02, 0x00, 0x3c, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x80, 0x08, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x01, 0x80, 0x08, 0x00, 0x00,
    0x00, 0x02, 0x01, 0x00, 0x80, 0x0e, 0x00, 0x00,
    0x00, 0x07, 0x6e, 0x78, 0x70, 0x2d, 0x73, 0x63,
    0x61, 0x6e, 0x80, 0x0a, 0x00, 0x00, 0x00, 0x03,
    0x00, 0x00, 0x00, 0x03, 0x80, 0x08, 0x00, 0x00,
    0x00, 0x09, 0x00, 0x00,
];

const SSDP_MSEARCH: &[u8] = b"\
    M-SEARCH * HTTP/1.1\r\n\
    Host: 239.255.255.250:1900\r\n\
    Man: \"ssdp:discover\"\r\n\
    MX: 5\r\n\
    ST: ssdp:all\r\n\
    \r\n\
    ";

const NFS_NULL: &[u8] = &[
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x02, 0x00, 0x01, 0x86, 0xa3,
    0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

const GTP_ECHO: &[u8] = &[
    0x32, 0x01, 0x00, 0x04, 0x00, 0x00, 0x42, 0x00,
    0x13, 0x37, 0x00, 0x00,
];

// Binding request, magic cookie 0x2112A442, zero transaction id
const STUN_BINDING: &[u8] = &[
    0x00, 0x01, 0x00, 0x00, 0x21, 0x12, 0xa4, 0x42,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
];

const KADEMLIA_PING: &[u8] = &[
    0xe4, 0x60,
];

const NATPMP_EXTERNAL_ADDR: &[u8] = &[
    0x00, 0x00,
];

const MDNS_SERVICES: &[u8] = b"\x00\x00\x00\x00\x00\x01\x00\x00\x00\x00\x00\x00\x09_services\x07_dns-sd\x04_udp\x05local\x00\x00\x0c\x00\x01";

const COAP_WELL_KNOWN: &[u8] = b"@\x01\x01\xce\xbb.well-known\x04core";

const MEMCACHED_VERSION: &[u8] = b"\x00\x01\x00\x00\x00\x01\x00\x00version\r\n";

const VXWORKS_WDB: &[u8] = &[
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x02, 0x55, 0x55, 0x55, 0x55,
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xff, 0xff, 0x55, 0x13, 0x00, 0x00, 0x00, 0x30,
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x02,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

// Out-of-band packets start with four 0xff bytes
const QUAKE3_GETSTATUS: &[u8] = b"\xff\xff\xff\xffgetstatus";

const SOURCE_ENGINE_QUERY: &[u8] = b"\xff\xff\xff\xffTSource Engine Query\x00";

/// The small table: common services only, no protocol references.
pub(crate) const BASE_TABLE: &[Probe] = &[
    Probe::new(53, "DNS", DNS_VERSION_BIND),
    Probe::new(123, "NTP", NTP_CLIENT_V3),
    Probe::new(161, "SNMP", SNMP_V1_GET_PUBLIC),
    Probe::new(67, "DHCP", DHCP_BOOT_REQUEST),
    Probe::new(68, "DHCP", DHCP_BOOT_REQUEST),
    Probe::new(137, "NetBIOS", NETBIOS_NAME_QUERY),
    Probe::new(138, "NetBIOS", NETBIOS_NAME_QUERY),
    Probe::new(5060, "SIP", SIP_OPTIONS),
    Probe::new(69, "TFTP", EMPTY),
    Probe::new(514, "Syslog", EMPTY),
    Probe::new(520, "RIP", EMPTY),
    Probe::new(1900, "SSDP", EMPTY),
];

/// The full table, ordered by port. Port 53 appears twice; lookups only
/// ever see the first (status request) entry.
pub(crate) const EXTENDED_TABLE: &[Probe] = &[
    Probe::with_reference(7, "Echo", ECHO, "RFC 862"),
    Probe::with_reference(53, "DNS", DNS_STATUS, "RFC 1035"),
    Probe::with_reference(53, "DNS", DNS_VERSION_BIND, "RFC 1035"),
    Probe::with_reference(67, "DHCP Server", DHCP_DISCOVER, "RFC 2131"),
    Probe::with_reference(68, "DHCP Client", DHCP_DISCOVER, "RFC 2131"),
    Probe::with_reference(69, "TFTP", TFTP_READ, "RFC 1350"),
    Probe::with_reference(111, "RPC/Portmap", RPC_PORTMAP_NULL, "RFC 1831"),
    Probe::with_reference(123, "NTP", NTP_CLIENT_V4, "RFC 5905"),
    Probe::with_reference(135, "MS-RPC", DCERPC_BIND, "MS-RPC"),
    Probe::with_reference(137, "NetBIOS-NS", NETBIOS_NBSTAT, "RFC 1002"),
    Probe::with_reference(138, "NetBIOS-DGM", NETBIOS_NBSTAT, "RFC 1002"),
    Probe::with_reference(161, "SNMP", SNMP_V1_GET_PUBLIC, "RFC 1157"),
    Probe::with_reference(162, "SNMP Trap", SNMP_V1_GET_PUBLIC, "RFC 1157"),
    Probe::with_reference(177, "XDMCP", XDMCP_QUERY, "X11"),
    Probe::with_reference(389, "CLDAP", CLDAP_SEARCH, "RFC 1798"),
    Probe::with_reference(427, "SLP", SLP_SERVICE_REQUEST, "RFC 2608"),
    Probe::with_reference(443, "DTLS", DTLS_CLIENT_HELLO, "RFC 6347"),
    Probe::with_reference(500, "IKE/IPSec", IKE_MAIN_MODE, "RFC 2409"),
    Probe::with_reference(514, "Syslog", EMPTY, "RFC 5424"),
    Probe::with_reference(520, "RIP", RIP_REQUEST, "RFC 2453"),
    Probe::with_reference(623, "IPMI", RMCP_PRESENCE_PING, "IPMI"),
    Probe::with_reference(1194, "OpenVPN", OPENVPN_RESET, "OpenVPN"),
    Probe::with_reference(1604, "Citrix", CITRIX_ICA, "Citrix ICA"),
    Probe::with_reference(1645, "RADIUS", RADIUS_ACCESS_REQUEST, "RFC 2865"),
    Probe::with_reference(1701, "L2TP", L2TP_SCCRQ, "RFC 2661"),
    Probe::with_reference(1812, "RADIUS", RADIUS_ACCESS_REQUEST, "RFC 2865"),
    Probe::with_reference(1900, "SSDP/UPnP", SSDP_MSEARCH, "UPnP"),
    Probe::with_reference(2049, "NFS", NFS_NULL, "RFC 1094"),
    Probe::with_reference(2123, "GTP-C", GTP_ECHO, "3GPP"),
    Probe::with_reference(2152, "GTP-U", GTP_ECHO, "3GPP"),
    Probe::with_reference(3478, "STUN", STUN_BINDING, "RFC 5389"),
    Probe::with_reference(3784, "Ventrilo", EMPTY, "Ventrilo"),
    Probe::with_reference(4500, "IPSec NAT-T", IKE_MAIN_MODE, "RFC 3947"),
    Probe::with_reference(4665, "eDonkey", KADEMLIA_PING, "Kademlia"),
    Probe::with_reference(5060, "SIP", SIP_OPTIONS, "RFC 3261"),
    Probe::with_reference(5351, "NAT-PMP", NATPMP_EXTERNAL_ADDR, "NAT-PMP"),
    Probe::with_reference(5353, "mDNS", MDNS_SERVICES, "RFC 6762"),
    Probe::with_reference(5683, "CoAP", COAP_WELL_KNOWN, "RFC 7252"),
    Probe::with_reference(6481, "STDiscovery", EMPTY, "Sun ST"),
    Probe::with_reference(8767, "TeamSpeak2", EMPTY, "TeamSpeak"),
    Probe::with_reference(9987, "TeamSpeak3", EMPTY, "TeamSpeak"),
    Probe::with_reference(10080, "Amanda", EMPTY, "Amanda"),
    Probe::with_reference(11211, "Memcached", MEMCACHED_VERSION, "Memcached"),
    Probe::with_reference(17185, "VxWorks", VXWORKS_WDB, "VxWorks"),
    Probe::with_reference(26000, "Quake3", QUAKE3_GETSTATUS, "Quake"),
    Probe::with_reference(27015, "Steam", SOURCE_ENGINE_QUERY, "Source"),
    Probe::with_reference(27960, "Quake3", QUAKE3_GETSTATUS, "Quake"),
    Probe::with_reference(64738, "Mumble", EMPTY, "Mumble"),
];
