/// Implementation of unstable IpAddr::to_canonical
/// https://github.com/rust-lang/rust/issues/27709
use std::net::IpAddr;

pub trait CanonicalIpAddr {
    /// IPv4-mapped addresses (`::ffff:a.b.c.d`) become IPv4, everything else is unchanged
    fn to_canonical_ip(&self) -> Self;
}

impl CanonicalIpAddr for IpAddr {
    fn to_canonical_ip(&self) -> Self {
        match self {
            IpAddr::V4(v4) => IpAddr::V4(*v4),
            IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
                Some(v4) => IpAddr::V4(v4),
                None => IpAddr::V6(*v6),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical(s: &str) -> IpAddr {
        s.parse::<IpAddr>().unwrap().to_canonical_ip()
    }

    #[test]
    fn mapped_becomes_v4() {
        assert_eq!(canonical("::ffff:1.2.3.4"), canonical("1.2.3.4"));
        assert!(canonical("1.2.3.4").is_ipv4());
    }

    #[test]
    fn compatible_stays_v6() {
        assert!(canonical("::1.2.3.4").is_ipv6());
        assert!(canonical("::1").is_ipv6());
        assert!(canonical("2001:db8::1").is_ipv6());
    }
}
