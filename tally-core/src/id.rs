use std::collections::HashSet;

use time::OffsetDateTime;

/// 53-bit string hash (cyrb53).
///
/// Hashes the UTF-16 code units of `text`, so ids minted here match ids
/// minted by any other cyrb53 implementation working on JavaScript strings.
/// The result always fits in `[0, 2^53)`.
pub fn cyrb53(text: &str, seed: u32) -> u64 {
    let mut h1: u32 = 0xdead_beef ^ seed;
    let mut h2: u32 = 0x41c6_ce57 ^ seed;

    for unit in text.encode_utf16() {
        let ch = u32::from(unit);
        h1 = (h1 ^ ch).wrapping_mul(2_654_435_761);
        h2 = (h2 ^ ch).wrapping_mul(1_597_334_677);
    }

    h1 = (h1 ^ (h1 >> 16)).wrapping_mul(2_246_822_507);
    h1 ^= (h2 ^ (h2 >> 13)).wrapping_mul(3_266_489_909);
    h2 = (h2 ^ (h2 >> 16)).wrapping_mul(2_246_822_507);
    h2 ^= (h1 ^ (h1 >> 13)).wrapping_mul(3_266_489_909);

    (u64::from(h2 & 0x1f_ffff) << 32) | u64::from(h1)
}

/// Mints session-unique identifiers from descriptive text.
///
/// The text is salted with the current timestamp and a per-minter counter
/// before hashing, so two entities created with identical content in the
/// same instant still get different ids. Every issued id is remembered and
/// a colliding hash is retried with the next seed.
#[derive(Debug, Default)]
pub struct IdMinter {
    issued: HashSet<u64>,
    counter: u64,
}

impl IdMinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an externally assigned id (e.g. from seed data) as taken.
    ///
    /// Returns `false` if the id was already issued.
    pub fn reserve(&mut self, id: u64) -> bool {
        self.issued.insert(id)
    }

    pub fn mint(&mut self, text: &str) -> u64 {
        self.counter += 1;
        let salted = format!(
            "{}{}#{}",
            text,
            OffsetDateTime::now_utc().unix_timestamp_nanos(),
            self.counter
        );

        let mut seed = 0u32;
        loop {
            let id = cyrb53(&salted, seed);
            if self.issued.insert(id) {
                return id;
            }
            tracing::debug!(id, seed, "id collision, rehashing");
            seed = seed.wrapping_add(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_reference_values() {
        assert_eq!(cyrb53("a", 0), 7_929_297_801_672_961);
        assert_eq!(cyrb53("", 0), 3_338_908_027_751_811);
        assert_eq!(cyrb53("Project Alpha", 0), 711_375_735_274_722);
    }

    #[test]
    fn seed_changes_the_hash() {
        assert_eq!(cyrb53("Project Alpha", 1), 5_943_307_010_348_596);
        // A JavaScript seed of -1 is 0xffffffff once coerced to 32 bits.
        assert_eq!(cyrb53("a", u32::MAX), 73_693_522_129_417);
    }

    #[test]
    fn hashes_utf16_code_units() {
        assert_eq!(cyrb53("héllo 🦀", 0), 8_455_430_295_848_073);
    }

    #[test]
    fn stays_within_53_bits() {
        for text in ["", "x", "Internal - R&D", "a much longer piece of text 2025-06-20"] {
            assert!(cyrb53(text, 0) < 1 << 53);
        }
    }

    #[test]
    fn minter_never_repeats_for_identical_text() {
        let mut minter = IdMinter::new();
        let ids: HashSet<u64> = (0..500).map(|_| minter.mint("same text")).collect();
        assert_eq!(ids.len(), 500);
    }

    #[test]
    fn reserved_ids_are_not_minted() {
        let mut minter = IdMinter::new();
        assert!(minter.reserve(101));
        assert!(!minter.reserve(101));
        assert_ne!(minter.mint("entry"), 101);
    }
}
