use std::net::IpAddr;

use http::HeaderMap;

/// Determines the client address of a possibly proxied request.
///
/// Precedence: the last entry of `X-Forwarded-For` when it parses as an IP,
/// then `X-Real-Ip` when valid, then the host half of `remote_addr`. The
/// remote address is only recognized when it is exactly `host:port`; a bare
/// IPv6 literal carries more than one colon and yields an empty fallback,
/// a known limitation.
pub fn real_addr(headers: &HeaderMap, remote_addr: &str) -> String {
    let mut remote_ip = remote_host(remote_addr).unwrap_or_default();

    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim_matches(','))
        .unwrap_or("");
    if !forwarded.is_empty() {
        if let Some(ip) = forwarded
            .rsplit(',')
            .next()
            .and_then(|last| last.trim().parse::<IpAddr>().ok())
        {
            remote_ip = ip.to_string();
        }
    } else if let Some(ip) = headers
        .get("x-real-ip")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<IpAddr>().ok())
    {
        remote_ip = ip.to_string();
    }
    remote_ip
}

fn remote_host(remote_addr: &str) -> Option<String> {
    let mut parts = remote_addr.split(':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(host), Some(_port), None) => Some(host.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use http::HeaderValue;

    use super::*;

    fn headers(pairs: &[(&'static str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_str(value).unwrap());
        }
        map
    }

    #[test]
    fn forwarded_for_takes_last_entry() {
        let headers = headers(&[("x-forwarded-for", "1.1.1.1, 2.2.2.2")]);
        assert_eq!(real_addr(&headers, "10.0.0.1:8080"), "2.2.2.2");
    }

    #[test]
    fn forwarded_for_single_entry() {
        let headers = headers(&[("x-forwarded-for", "203.0.113.9")]);
        assert_eq!(real_addr(&headers, "10.0.0.1:8080"), "203.0.113.9");
    }

    #[test]
    fn invalid_forwarded_for_falls_back_to_remote() {
        let headers = headers(&[("x-forwarded-for", "1.1.1.1, not-an-ip")]);
        assert_eq!(real_addr(&headers, "10.0.0.1:8080"), "10.0.0.1");
    }

    #[test]
    fn real_ip_used_when_no_forwarded_for() {
        let headers = headers(&[("x-real-ip", "198.51.100.7")]);
        assert_eq!(real_addr(&headers, "10.0.0.1:8080"), "198.51.100.7");
    }

    #[test]
    fn forwarded_for_wins_over_real_ip() {
        let headers = headers(&[
            ("x-forwarded-for", "2.2.2.2"),
            ("x-real-ip", "198.51.100.7"),
        ]);
        assert_eq!(real_addr(&headers, "10.0.0.1:8080"), "2.2.2.2");
    }

    #[test]
    fn no_headers_strips_port_from_remote() {
        assert_eq!(real_addr(&HeaderMap::new(), "10.0.0.1:8080"), "10.0.0.1");
    }

    #[test]
    fn ipv6_remote_is_not_split() {
        // more than one colon, so the host:port rule does not apply
        assert_eq!(real_addr(&HeaderMap::new(), "[::1]:8080"), "");
        assert_eq!(real_addr(&HeaderMap::new(), "2001:db8::1"), "");
    }

    #[test]
    fn forwarded_for_ipv6_entry_parses() {
        let headers = headers(&[("x-forwarded-for", "1.1.1.1, 2001:db8::1")]);
        assert_eq!(real_addr(&headers, "10.0.0.1:8080"), "2001:db8::1");
    }
}
