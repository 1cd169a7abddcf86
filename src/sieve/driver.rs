//! Orchestrates the base and segmented sieves into the single entry point the
//! CLI (and anyone embedding this crate) actually calls.

use tracing::{debug, info};

use super::base::{base_sieve, isqrt};
use super::segment::segmented_sieve;

/// Below this bound the base sieve alone already covers `sqrt(hi)` for any
/// `hi` it can produce directly, so the segmented sieve never needs to run:
/// `961 = 31^2` is the smallest composite whose smallest factor exceeds the
/// wheel's first eight primes.
const BASE_SIEVE_ONLY_LIMIT: u64 = 961;

/// Which of the two external entry points a [`compute`] call represents.
///
/// A closed enum makes an invalid mode a compile-time impossibility instead
/// of a runtime error case callers have to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SieveMode {
    /// Every prime `<= hi`.
    All { hi: u64 },
    /// Every prime in `[lo, hi]`.
    Range { lo: u64, hi: u64 },
}

impl SieveMode {
    fn bounds(self) -> (u64, u64) {
        match self {
            SieveMode::All { hi } => (0, hi),
            SieveMode::Range { lo, hi } => (lo, hi),
        }
    }
}

/// Upper bound on the number of primes `<= n`, from the standard
/// `pi(x) < 1.25506 * x / ln(x)` bound (valid for `x >= 17`), used to
/// pre-reserve the result `Vec` so pushing primes never reallocates.
pub fn prime_count_upper_bound(n: u64) -> usize {
    if n < 17 {
        return 6; // covers {2, 3, 5, 7, 11, 13} outright
    }
    let x = n as f64;
    (1.25506 * x / x.ln()).ceil() as usize + 1
}

/// Compute every prime described by `mode`.
///
/// Dispatches to the base sieve alone when `hi <= 961`; otherwise bootstraps
/// sieving primes up to `sqrt(hi)` with the base sieve and hands the rest of
/// the range to the segmented sieve.
pub fn compute(mode: SieveMode) -> Vec<u64> {
    let (lo, hi) = mode.bounds();
    info!(lo, hi, mode = ?mode, "computing primes");

    if hi < 2 || lo > hi {
        return Vec::new();
    }

    if hi <= BASE_SIEVE_ONLY_LIMIT {
        let all = base_sieve(hi);
        return if lo <= 2 {
            all
        } else {
            all.into_iter().filter(|&p| p >= lo).collect()
        };
    }

    let sqrt_hi = isqrt(hi);
    let base_primes = base_sieve(sqrt_hi);
    debug!(count = base_primes.len(), sqrt_hi, "base sieve bootstrapped");

    if lo <= 2 {
        // The segmented sieve only handles residues coprime to 30 (p >= 7);
        // 2, 3, 5 and the sieving primes themselves must come from the base
        // pass, and anything beyond sqrt(hi) but still <= the base sieve's
        // own reach is already in `base_primes`.
        let mut primes = Vec::with_capacity(prime_count_upper_bound(hi));
        primes.extend(base_primes.iter().copied());
        let tail_lo = sqrt_hi + 1;
        primes.extend(segmented_sieve(tail_lo.max(7), hi, &base_primes));
        primes
    } else if lo <= sqrt_hi {
        let mut primes: Vec<u64> = base_primes.iter().copied().filter(|&p| p >= lo).collect();
        let tail_lo = sqrt_hi + 1;
        primes.extend(segmented_sieve(tail_lo.max(7), hi, &base_primes));
        primes
    } else {
        segmented_sieve(lo, hi, &base_primes)
    }
}
