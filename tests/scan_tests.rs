mod common;

use std::net::{Ipv4Addr, SocketAddrV4};
use std::time::Duration;

use common::{port_unreachable, reply, ScriptedOpener};
use tokio::net::UdpSocket;
use tokio_util::sync::CancellationToken;
use udp_probe_rs::net::SocketOpener;
use udp_probe_rs::prober::ProbeSettings;
use udp_probe_rs::probes::ProbeTable;
use udp_probe_rs::report::format_result;
use udp_probe_rs::scanner::{scan_range, ScanConfig};
use udp_probe_rs::types::{PortState, ScanTarget};

fn localhost(start: u32, end: u32) -> ScanTarget {
    ScanTarget::new(Ipv4Addr::LOCALHOST, start, end).unwrap()
}

fn base_config() -> ScanConfig {
    ScanConfig {
        probe_table: ProbeTable::Base,
        ..ScanConfig::default()
    }
}

#[tokio::test(start_paused = true)]
async fn dns_reply_reports_open() {
    let opener = ScriptedOpener::default().script(53, vec![vec![reply(100, 45)]]);
    let mut lines = Vec::new();

    let report = scan_range(
        &localhost(53, 53),
        &base_config(),
        &opener,
        &CancellationToken::new(),
        |r| lines.push(format_result(r)),
    )
    .await;

    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("[OPEN] Port 53/udp DNS"), "{}", lines[0]);
    assert_eq!(report.statistics.total, 1);
    assert_eq!(report.statistics.open, 1);
    assert!(report.statistics.end_time.is_some());
    assert!(!report.cancelled);
}

#[tokio::test(start_paused = true)]
async fn port_unreachable_reports_closed() {
    let quoted = SocketAddrV4::new(Ipv4Addr::LOCALHOST, 9999);
    let opener = ScriptedOpener {
        icmp: true,
        ..ScriptedOpener::default()
    }
    .script(9999, vec![vec![common::icmp(2, port_unreachable(quoted))]]);
    let mut lines = Vec::new();

    let report = scan_range(
        &localhost(9999, 9999),
        &base_config(),
        &opener,
        &CancellationToken::new(),
        |r| lines.push(format_result(r)),
    )
    .await;

    assert!(lines[0].starts_with("[CLOSED] Port 9999/udp"), "{}", lines[0]);
    assert_eq!(report.statistics.closed, 1);
    assert!(report.icmp_enabled);
}

#[tokio::test(start_paused = true)]
async fn one_result_per_port_in_order() {
    let opener = ScriptedOpener::default()
        .script(123, vec![vec![reply(10, 48)]])
        .script(125, vec![vec![], vec![reply(10, 4)]]);
    let config = ScanConfig {
        probe: ProbeSettings {
            timeout: Duration::from_millis(200),
            max_retries: 3,
        },
        ..base_config()
    };

    let report = scan_range(
        &localhost(120, 129),
        &config,
        &opener,
        &CancellationToken::new(),
        |_| {},
    )
    .await;

    let ports: Vec<u16> = report.results.iter().map(|r| r.port).collect();
    assert_eq!(ports, (120..=129).collect::<Vec<_>>());
    let stats = &report.statistics;
    assert_eq!(stats.total, 10);
    assert_eq!(stats.open, 2);
    assert_eq!(stats.filtered, 8);
    assert_eq!(stats.total, stats.open + stats.closed + stats.filtered);
    assert_eq!(opener.sends_to(121).len(), 3);
    assert_eq!(opener.sends_to(125).len(), 2);
}

#[tokio::test(start_paused = true)]
async fn failed_ports_are_skipped_not_counted() {
    let mut opener = ScriptedOpener::default().script(3, vec![vec![reply(5, 9)]]);
    opener.fail_open.insert(1);
    opener.fail_send.insert(2);

    let report = scan_range(
        &localhost(1, 3),
        &base_config(),
        &opener,
        &CancellationToken::new(),
        |_| {},
    )
    .await;

    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].port, 3);
    assert_eq!(report.statistics.total, 1);
    assert_eq!(report.statistics.skipped, 2);
}

#[tokio::test(start_paused = true)]
async fn unregistered_port_gets_empty_payload() {
    let opener = ScriptedOpener::default();

    scan_range(
        &localhost(54, 54),
        &base_config(),
        &opener,
        &CancellationToken::new(),
        |_| {},
    )
    .await;

    let sends = opener.sends_to(54);
    assert_eq!(sends.len(), 2);
    assert!(sends.iter().all(Vec::is_empty));
}

#[tokio::test(start_paused = true)]
async fn extended_table_sends_first_registered_dns_probe() {
    let opener = ScriptedOpener::default().script(53, vec![vec![reply(1, 30)]]);

    let report = scan_range(
        &localhost(53, 53),
        &ScanConfig::default(),
        &opener,
        &CancellationToken::new(),
        |_| {},
    )
    .await;

    assert_eq!(opener.sends_to(53)[0].len(), 12);
    assert_eq!(report.probe_table, "extended");
    assert_eq!(report.results[0].reference.as_deref(), Some("RFC 1035"));
}

#[tokio::test(start_paused = true)]
async fn cancelled_before_start_probes_nothing() {
    let opener = ScriptedOpener::default();
    let cancel = CancellationToken::new();
    cancel.cancel();

    let report = scan_range(&localhost(1, 100), &base_config(), &opener, &cancel, |_| {}).await;

    assert!(report.cancelled);
    assert!(report.results.is_empty());
    assert_eq!(report.statistics.total, 0);
    assert!(opener.sends.lock().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn cancel_mid_scan_finishes_current_port() {
    let opener = ScriptedOpener::default();
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    let mut seen = 0;

    let report = scan_range(&localhost(1, 50), &base_config(), &opener, &cancel, |_| {
        seen += 1;
        if seen == 3 {
            trigger.cancel();
        }
    })
    .await;

    assert!(report.cancelled);
    assert_eq!(report.results.len(), 3);
    assert_eq!(report.statistics.total, 3);
}

#[tokio::test]
async fn loopback_service_is_open_without_icmp() {
    let server = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let port = server.local_addr().unwrap().port();
    tokio::spawn(async move {
        let mut buf = [0u8; 1500];
        loop {
            let Ok((n, peer)) = server.recv_from(&mut buf).await else {
                break;
            };
            let _ = server.send_to(&buf[..n.max(1)], peer).await;
        }
    });

    let config = ScanConfig {
        probe: ProbeSettings {
            timeout: Duration::from_millis(500),
            max_retries: 1,
        },
        delay: Duration::ZERO,
        probe_table: ProbeTable::Base,
    };
    let report = scan_range(
        &localhost(port.into(), port.into()),
        &config,
        &SocketOpener { icmp: false },
        &CancellationToken::new(),
        |_| {},
    )
    .await;

    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].state, PortState::Open);
    assert!(!report.icmp_enabled);
}

#[tokio::test]
#[ignore = "needs CAP_NET_RAW"]
async fn closed_loopback_port_reports_closed_with_raw_icmp() {
    // Bind then drop to find a port nothing listens on.
    let port = {
        let probe = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        probe.local_addr().unwrap().port()
    };
    let config = ScanConfig {
        probe: ProbeSettings {
            timeout: Duration::from_millis(500),
            max_retries: 1,
        },
        delay: Duration::ZERO,
        probe_table: ProbeTable::Base,
    };

    let report = scan_range(
        &localhost(port.into(), port.into()),
        &config,
        &SocketOpener { icmp: true },
        &CancellationToken::new(),
        |_| {},
    )
    .await;

    assert_eq!(report.results[0].state, PortState::Closed);
}
