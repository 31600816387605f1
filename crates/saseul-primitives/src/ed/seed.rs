//! Fresh seed generation.
//!
//! A seed is 24 bytes of OS entropy followed by an 8-byte big-endian
//! nanosecond timestamp. Only the random prefix carries secrecy; the suffix
//! keeps seeds produced in quick succession distinct.

use std::sync::OnceLock;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use rand::rngs::OsRng;
use rand::RngCore;

/// Total seed length in bytes.
pub const SEED_LEN: usize = 32;

/// Number of leading seed bytes drawn from the OS random number generator.
pub const ENTROPY_LEN: usize = 24;

/// Generate a new 32-byte seed.
///
/// The hex encoding of the result is the 48-char entropy hex followed by the
/// timestamp as 16 zero-padded hex chars.
pub fn generate_seed() -> [u8; SEED_LEN] {
    let mut seed = [0u8; SEED_LEN];
    OsRng.fill_bytes(&mut seed[..ENTROPY_LEN]);
    seed[ENTROPY_LEN..].copy_from_slice(&timestamp_nanos().to_be_bytes());
    seed
}

/// Wall-clock anchor taken on first use, paired with a monotonic instant.
static CLOCK_ANCHOR: OnceLock<(u64, Instant)> = OnceLock::new();

/// Monotonic nanoseconds, offset to the UNIX epoch at first use.
///
/// Never goes backwards within a process even if the system clock does.
fn timestamp_nanos() -> u64 {
    let (base, start) = CLOCK_ANCHOR.get_or_init(|| {
        let wall = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        (wall, Instant::now())
    });
    base.wrapping_add(start.elapsed().as_nanos() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_32_bytes_of_hex() {
        let seed = hex::encode(generate_seed());
        assert_eq!(seed.len(), 64);
    }

    #[test]
    fn test_rapid_seeds_differ() {
        let a = generate_seed();
        let b = generate_seed();
        assert_ne!(a, b);
        assert_ne!(a[..ENTROPY_LEN], b[..ENTROPY_LEN]);
    }

    #[test]
    fn test_suffix_is_timestamp() {
        let before = timestamp_nanos();
        let seed = generate_seed();
        let after = timestamp_nanos();

        let mut suffix = [0u8; 8];
        suffix.copy_from_slice(&seed[ENTROPY_LEN..]);
        let stamp = u64::from_be_bytes(suffix);
        assert!(stamp >= before && stamp <= after);

        // Same text as the zero-padded 16 hex char rendering.
        assert_eq!(hex::encode(suffix), format!("{:016x}", stamp));
    }

    #[test]
    fn test_suffix_never_decreases() {
        let mut last = 0u64;
        for _ in 0..1000 {
            let seed = generate_seed();
            let mut suffix = [0u8; 8];
            suffix.copy_from_slice(&seed[ENTROPY_LEN..]);
            let stamp = u64::from_be_bytes(suffix);
            assert!(stamp >= last);
            last = stamp;
        }
    }

    #[test]
    fn test_suffix_anchored_to_wall_clock() {
        let wall = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos() as u64;
        let stamp = timestamp_nanos();
        // Within an hour of the system clock.
        assert!(stamp.abs_diff(wall) < 3_600_000_000_000);
    }
}
