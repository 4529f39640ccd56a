//! Client IP and country extraction from the request context.
//!
//! Click logs must record network-level facts the client cannot spoof
//! through its telemetry payload, so both values come from the request:
//! the peer socket address (or trusted proxy headers) for the IP, and the
//! CDN/edge geo header for the country.

use axum::http::HeaderMap;
use std::net::IpAddr;

/// Sentinel recorded when a fact cannot be derived from the request.
pub const UNKNOWN: &str = "unknown";

/// Extracts the client IP address.
///
/// With `behind_proxy` set, `X-Forwarded-For` (first hop) and `X-Real-IP`
/// are consulted before falling back to the socket address. Enable only
/// behind a trusted reverse proxy; otherwise the headers are
/// client-controlled.
pub fn client_ip(headers: &HeaderMap, socket_ip: Option<IpAddr>, behind_proxy: bool) -> String {
    if behind_proxy {
        if let Some(ip) = forwarded_for_ip(headers) {
            return ip.to_string();
        }
        if let Some(ip) = real_ip(headers) {
            return ip.to_string();
        }
    }

    socket_ip
        .map(|ip| ip.to_string())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Extracts the client country from edge-stamped geo headers.
///
/// Checks `X-Country` (generic edge convention) then `CF-IPCountry`
/// (Cloudflare). Returns `"unknown"` when neither is present.
pub fn client_country(headers: &HeaderMap) -> String {
    for name in ["x-country", "cf-ipcountry"] {
        if let Some(value) = headers.get(name).and_then(|v| v.to_str().ok()) {
            let value = value.trim();
            if !value.is_empty() {
                return value.to_string();
            }
        }
    }

    UNKNOWN.to_string()
}

/// First entry of `X-Forwarded-For`; the originating client when every
/// hop in front of us is trusted.
fn forwarded_for_ip(headers: &HeaderMap) -> Option<IpAddr> {
    headers
        .get("x-forwarded-for")?
        .to_str()
        .ok()?
        .split(',')
        .next()?
        .trim()
        .parse()
        .ok()
}

fn real_ip(headers: &HeaderMap) -> Option<IpAddr> {
    headers
        .get("x-real-ip")?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}
