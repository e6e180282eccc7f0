//! API key generation

use rand::rngs::OsRng;
use rand::RngCore;

/// Literal prefix every issued key starts with
pub const API_KEY_PREFIX: &str = "KEY-";

/// Number of random bytes behind each key (128 bits)
const KEY_BYTES: usize = 16;

/// Hex characters per hyphen-separated group
const GROUP_LEN: usize = 8;

/// Generate a new API key:
/// `KEY-XXXXXXXX-XXXXXXXX-XXXXXXXX-XXXXXXXX`
///
/// The four groups are the uppercase hex encoding of 16 bytes drawn from
/// the operating system's CSPRNG. Uniqueness is by construction only; the
/// database column is UNIQUE in case of the astronomically unlikely clash.
pub fn generate_api_key() -> String {
    let mut bytes = [0u8; KEY_BYTES];
    OsRng.fill_bytes(&mut bytes);
    format_api_key(&bytes)
}

fn format_api_key(bytes: &[u8; KEY_BYTES]) -> String {
    let hex = hex::encode_upper(bytes);
    let groups: Vec<&str> = hex
        .as_bytes()
        .chunks(GROUP_LEN)
        .filter_map(|chunk| std::str::from_utf8(chunk).ok())
        .collect();
    format!("{}{}", API_KEY_PREFIX, groups.join("-"))
}

/// Check if a string has the shape of a generated key
pub fn is_api_key_format(s: &str) -> bool {
    let Some(rest) = s.strip_prefix(API_KEY_PREFIX) else {
        return false;
    };
    let groups: Vec<&str> = rest.split('-').collect();
    groups.len() == KEY_BYTES * 2 / GROUP_LEN
        && groups.iter().all(|g| {
            g.len() == GROUP_LEN
                && g.chars()
                    .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_api_key() {
        let key = generate_api_key();

        assert!(key.starts_with(API_KEY_PREFIX));
        assert_eq!(key.len(), API_KEY_PREFIX.len() + 32 + 3);
        assert!(is_api_key_format(&key));
    }

    #[test]
    fn formats_bytes_as_uppercase_groups() {
        let bytes = [
            0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd,
            0xee, 0xff,
        ];
        assert_eq!(
            format_api_key(&bytes),
            "KEY-00112233-44556677-8899AABB-CCDDEEFF"
        );
    }

    #[test]
    fn consecutive_keys_differ() {
        let keys: HashSet<String> = (0..64).map(|_| generate_api_key()).collect();
        assert_eq!(keys.len(), 64);
    }

    #[test]
    fn rejects_malformed_keys() {
        assert!(!is_api_key_format("KEY-00112233-44556677-8899AABB"));
        assert!(!is_api_key_format("KEY-00112233-44556677-8899aabb-CCDDEEFF"));
        assert!(!is_api_key_format("TOKEN-00112233-44556677-8899AABB-CCDDEEFF"));
        assert!(!is_api_key_format("KEY-0011223-344556677-8899AABB-CCDDEEFF"));
        assert!(!is_api_key_format("KEY-00112233-44556677-8899AABB-CCDDEEFG"));
    }
}
