//! Packed little-endian IPv4 addresses.

use std::net::Ipv4Addr;

/// Unpack an address whose first octet is the least significant byte.
pub fn ipv4_from_packed(packed: u32) -> Ipv4Addr {
    Ipv4Addr::from(packed.to_le_bytes())
}

/// Inverse of [`ipv4_from_packed`].
pub fn packed_from_ipv4(addr: Ipv4Addr) -> u32 {
    u32::from_le_bytes(addr.octets())
}

/// Dotted-quad string for a packed little-endian IPv4 address.
///
/// `0x01020304` formats as `"4.3.2.1"`.
#[deprecated(note = "use the `Display` impl of `std::net::IpAddr`, which also covers IPv6")]
pub fn format_ip_address(packed: u32) -> String {
    ipv4_from_packed(packed).to_string()
}

#[cfg(test)]
#[allow(deprecated)]
mod tests {
    use super::*;

    #[test]
    fn first_octet_is_least_significant_byte() {
        assert_eq!(format_ip_address(0x0102_0304), "4.3.2.1");
    }

    #[test]
    fn composed_from_little_endian_bytes() {
        let packed = u32::from_le_bytes([4, 3, 2, 1]);
        assert_eq!(format_ip_address(packed), "4.3.2.1");
    }

    #[test]
    fn extremes() {
        assert_eq!(format_ip_address(0), "0.0.0.0");
        assert_eq!(format_ip_address(u32::MAX), "255.255.255.255");
    }

    #[test]
    fn loopback() {
        let packed = packed_from_ipv4(Ipv4Addr::LOCALHOST);
        assert_eq!(packed, 0x0100_007f);
        assert_eq!(format_ip_address(packed), "127.0.0.1");
    }

    #[test]
    fn pack_and_unpack_agree() {
        let addr = Ipv4Addr::new(192, 168, 1, 20);
        assert_eq!(ipv4_from_packed(packed_from_ipv4(addr)), addr);
    }
}
