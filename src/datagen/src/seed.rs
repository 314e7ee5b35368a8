use std::hash::Hasher;

use common::SalesKind;
use fnv::FnvHasher;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// 64-bit FNV-1a of the key bytes. Unlike `DefaultHasher` the result is stable
/// across processes, builds and platforms.
pub fn derive_seed(key: &str) -> u64 {
    let mut hasher = FnvHasher::default();
    hasher.write(key.as_bytes());
    hasher.finish()
}

pub fn fact_key(kind: SalesKind, partner: &str, month: u32) -> String {
    format!("{kind}_{partner}_{month}")
}

pub fn rng_for(key: &str) -> StdRng {
    StdRng::seed_from_u64(derive_seed(key))
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    #[test]
    fn test_fnv1a_reference_values() {
        // offset basis for the empty input
        assert_eq!(derive_seed(""), 0xcbf29ce484222325);
        assert_eq!(derive_seed("a"), 0xaf63dc4c8601ec8c);
    }

    #[test]
    fn test_keys() {
        assert_eq!(
            fact_key(SalesKind::Ticket, "DreamWorld_Parks", 7),
            "ticket_DreamWorld_Parks_7"
        );
        assert_ne!(
            derive_seed(&fact_key(SalesKind::Fnb, "DreamWorld_Parks", 7)),
            derive_seed(&fact_key(SalesKind::Retail, "DreamWorld_Parks", 7))
        );
    }

    #[test]
    fn test_same_key_same_stream() {
        let a: Vec<u32> = rng_for("k").sample_iter(rand::distributions::Standard).take(8).collect();
        let b: Vec<u32> = rng_for("k").sample_iter(rand::distributions::Standard).take(8).collect();
        assert_eq!(a, b);
    }
}
