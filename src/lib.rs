//! Library crate for udp-probe-rs exposing the probe registry, the port
//! prober and the sequential scan loop.
pub mod icmp;
pub mod net;
mod payloads;
pub mod prober;
pub mod probes;
pub mod report;
pub mod scanner;
pub mod types;
