//! Multiaddress syntax validation.

use std::net::{Ipv4Addr, Ipv6Addr};

use crate::ports::MultiaddrValidator;

/// Checks `/protocol/value` segments for the protocols a validator
/// multiaddress uses: ip4, ip6, dns, dns4, dns6, tcp, udp, quic, quic-v1, p2p.
///
/// The address must start with a network-layer protocol.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicMultiaddrValidator;

impl BasicMultiaddrValidator {
    pub fn new() -> Self {
        Self
    }
}

impl MultiaddrValidator for BasicMultiaddrValidator {
    fn validate(&self, multiaddr: &str) -> Result<(), String> {
        let Some(rest) = multiaddr.strip_prefix('/') else {
            return Err("multiaddress must start with '/'".to_string());
        };

        let mut segments = rest.split('/');
        let mut first = true;

        while let Some(protocol) = segments.next() {
            let mut value = || {
                segments
                    .next()
                    .filter(|v| !v.is_empty())
                    .ok_or_else(|| format!("missing value for /{protocol}"))
            };

            match protocol {
                "ip4" => {
                    let v = value()?;
                    v.parse::<Ipv4Addr>()
                        .map_err(|e| format!("invalid ip4 address '{v}': {e}"))?;
                }
                "ip6" => {
                    let v = value()?;
                    v.parse::<Ipv6Addr>()
                        .map_err(|e| format!("invalid ip6 address '{v}': {e}"))?;
                }
                "dns" | "dns4" | "dns6" => {
                    value()?;
                }
                _ if first => {
                    return Err(format!(
                        "multiaddress must start with /ip4, /ip6 or /dns, got /{protocol}"
                    ));
                }
                "tcp" | "udp" => {
                    let v = value()?;
                    v.parse::<u16>()
                        .map_err(|e| format!("invalid {protocol} port '{v}': {e}"))?;
                }
                "quic" | "quic-v1" => {}
                "p2p" => {
                    let v = value()?;
                    if !v.chars().all(|c| c.is_ascii_alphanumeric()) {
                        return Err(format!("invalid peer id '{v}'"));
                    }
                }
                "" => return Err("empty protocol segment".to_string()),
                other => return Err(format!("unsupported protocol /{other}")),
            }

            first = false;
        }

        if first {
            return Err("empty multiaddress".to_string());
        }

        Ok(())
    }
}
