//! # Identifier Formats
//!
//! Two identifier schemes coexist in the system:
//!
//! - **Object ids** - opaque 24-character lowercase-hex strings used for
//!   every document and cross-document reference. Layout is 4 bytes of
//!   epoch-seconds followed by 8 random bytes, so ids sort roughly by
//!   creation time and remain unguessable enough for opaque handles.
//!   External input claiming to be an id is format-validated, never
//!   existence-checked (the caller-facing layer decides what a dangling
//!   reference means).
//! - **Order codes** - short human-readable codes shown to customers and
//!   restaurant staff: 6 random uppercase alphanumerics followed by the
//!   creation time in epoch milliseconds. No uniqueness check is performed;
//!   the timestamp suffix makes collisions practically impossible at the
//!   expected load.

use chrono::Utc;
use rand::Rng;

const OBJECT_ID_LEN: usize = 24;
const ORDER_CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const ORDER_CODE_RANDOM_LEN: usize = 6;

/// A syntactically invalid identifier supplied by a caller.
#[derive(Debug, thiserror::Error)]
#[error("malformed identifier: {0:?}")]
pub struct IdError(pub String);

/// Mint a fresh 24-hex-char object id.
pub fn object_id() -> String {
    let mut rng = rand::rng();
    let mut id = String::with_capacity(OBJECT_ID_LEN);
    id.push_str(&format!("{:08x}", Utc::now().timestamp() as u32));
    for _ in 0..8 {
        id.push_str(&format!("{:02x}", rng.random::<u8>()));
    }
    id
}

/// Whether `raw` is a well-formed object id.
pub fn is_object_id(raw: &str) -> bool {
    raw.len() == OBJECT_ID_LEN
        && raw
            .bytes()
            .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// Mint a human-readable order code: 6 random `A-Z0-9` characters plus the
/// epoch-millisecond timestamp as a decimal suffix.
pub fn order_code() -> String {
    let mut rng = rand::rng();
    let mut code = String::with_capacity(ORDER_CODE_RANDOM_LEN + 13);
    for _ in 0..ORDER_CODE_RANDOM_LEN {
        let idx = rng.random_range(0..ORDER_CODE_CHARSET.len());
        code.push(ORDER_CODE_CHARSET[idx] as char);
    }
    code.push_str(&Utc::now().timestamp_millis().to_string());
    code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minted_object_ids_are_well_formed() {
        for _ in 0..100 {
            let id = object_id();
            assert!(is_object_id(&id), "bad id: {id}");
        }
    }

    #[test]
    fn object_id_format_rejects_bad_input() {
        assert!(!is_object_id(""));
        assert!(!is_object_id("123"));
        assert!(!is_object_id("g00000000000000000000000")); // non-hex
        assert!(!is_object_id("ABCDEF012345678901234567")); // uppercase
        assert!(!is_object_id("0123456789abcdef0123456789abcdef")); // too long
        assert!(is_object_id("0123456789abcdef01234567"));
    }

    #[test]
    fn order_code_shape() {
        let code = order_code();
        let (random, suffix) = code.split_at(ORDER_CODE_RANDOM_LEN);
        assert!(random
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()));
        assert!(suffix.bytes().all(|b| b.is_ascii_digit()));
        // Epoch-millisecond suffix: 13 digits until the year 2286.
        assert_eq!(suffix.len(), 13);
    }
}
