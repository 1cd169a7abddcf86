//! The segmented sieve: given the sieving primes up to `sqrt(hi)`, strikes
//! composites in successive cache-sized windows rather than one array sized
//! to the whole range `[lo, hi]`.
//!
//! Each window reuses the same packed byte array. A prime's eight
//! per-revolution byte offsets (`wheel::strike_plan`) don't depend on which
//! window is being struck — only the *starting* revolution does, and a
//! revolution that began in an earlier window can still strike bytes that
//! fall inside this one. That's the head-fixup below.

use tracing::debug;

use super::base::decode;
use super::driver::prime_count_upper_bound;
use super::wheel::{strike_plan, RESIDUE_CLASS};

/// Target window width in bytes. At one byte per 30 integers this keeps a
/// segment's working set (array plus the handful of registers the strike
/// loop touches) resident in a typical 256 KiB L2 cache.
pub const SEGMENT_BYTES: usize = 256 * 1024;

/// Sieve `[lo, hi]` given every prime `<= sqrt(hi)` (ascending, as produced by
/// `base::base_sieve`), in cache-sized windows. `lo` and `hi` must both be
/// `>= 7`; callers are expected to have already special-cased 2, 3, 5 and any
/// part of the range below the base sieve's reach.
pub fn segmented_sieve(lo: u64, hi: u64, base_primes: &[u64]) -> Vec<u64> {
    if lo > hi {
        return Vec::new();
    }

    let window_width = (SEGMENT_BYTES as u64) * 30;
    let mut primes = Vec::with_capacity(prime_count_upper_bound(hi));

    let mut seg_lo = lo - (lo % 30);
    while seg_lo <= hi {
        let seg_hi_value = (seg_lo + window_width - 1).min(hi);
        let byte_count = ((seg_hi_value - seg_lo) / 30 + 1) as usize;
        let base_byte = seg_lo / 30;

        let mut bytes = vec![0xFFu8; byte_count];
        strike_segment(&mut bytes, base_byte, byte_count, base_primes);

        let decoded = decode(&bytes, seg_lo, hi, byte_count * 2);
        let mut survivors = 0usize;
        for p in decoded {
            if p >= lo {
                primes.push(p);
                survivors += 1;
            }
        }
        debug!(seg_lo, seg_hi_value, survivors, "segment sieved");

        seg_lo += window_width;
    }

    primes
}

/// Strike every composite in one window's byte array. `base_byte` is the
/// window's starting byte index in the *global* base-sieve numbering
/// (`seg_lo / 30`); `byte_count` is the window's length.
fn strike_segment(bytes: &mut [u8], base_byte: u64, byte_count: usize, base_primes: &[u64]) {
    let base_byte = base_byte as i64;
    let limit = base_byte + byte_count as i64;

    for &p in base_primes {
        if p < 7 {
            continue; // 2, 3, 5 have no wheel representation
        }
        let r = match RESIDUE_CLASS[(p % 30) as usize] {
            Some(r) => r as usize,
            None => continue,
        };
        // The r = 7 ("31") row represents primes =1 (mod 30) as 30(m-1)+31,
        // so the m fed to strike_plan is one less than floor(p/30) there.
        let m = if r == 7 { p / 30 - 1 } else { p / 30 };
        let (off, mask) = strike_plan(r, m);

        let idx0 = ((p * p) / 30) as i64;
        let p_i = p as i64;

        // Largest revolution start `<= base_byte` (or `idx0` itself, if the
        // prime's square hasn't been reached yet). Done in i64 throughout so
        // a window that starts before `idx0` never underflows.
        let prev_rev = if base_byte > idx0 {
            idx0 + p_i * ((base_byte - idx0) / p_i)
        } else {
            idx0
        };

        // Head: the revolution starting at `prev_rev` may have begun before
        // this window but still strike bytes inside it.
        for s in 0..8 {
            let target = prev_rev + off[s] as i64;
            if target >= base_byte && target < limit {
                bytes[(target - base_byte) as usize] &= mask[s];
            }
        }

        let mut idx = prev_rev + p_i;
        let max_off = off[7] as i64;
        while idx + max_off < limit {
            for s in 0..8 {
                let target = (idx + off[s] as i64 - base_byte) as usize;
                bytes[target] &= mask[s];
            }
            idx += p_i;
        }
        while idx < limit {
            for s in 0..8 {
                let target = idx + off[s] as i64;
                if target >= base_byte && target < limit {
                    bytes[(target - base_byte) as usize] &= mask[s];
                }
            }
            idx += p_i;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::base::base_sieve;
    use super::*;

    fn is_prime_trial(n: u64) -> bool {
        if n < 2 {
            return false;
        }
        let mut d = 2u64;
        while d * d <= n {
            if n % d == 0 {
                return false;
            }
            d += 1;
        }
        true
    }

    #[test]
    fn segmented_sieve_matches_trial_division_small_range() {
        let lo = 1_000u64;
        let hi = 5_000u64;
        let base_primes = base_sieve(super::super::base::isqrt(hi));
        let got = segmented_sieve(lo, hi, &base_primes);
        let want: Vec<u64> = (lo..=hi).filter(|&n| is_prime_trial(n)).collect();
        assert_eq!(got, want);
    }

    #[test]
    fn segmented_sieve_spans_multiple_windows() {
        // Exercises the head-fixup across many window boundaries regardless
        // of the real (256 KiB) window size, since the range itself is wide.
        let hi = 200_000u64;
        let base_primes = base_sieve(super::super::base::isqrt(hi));
        let got = segmented_sieve(7, hi, &base_primes);
        let want: Vec<u64> = (7..=hi).filter(|&n| is_prime_trial(n)).collect();
        assert_eq!(got.len(), want.len());
        assert_eq!(got, want);
    }

    #[test]
    fn segmented_sieve_empty_when_lo_above_hi() {
        assert_eq!(segmented_sieve(100, 50, &[2, 3, 5]), Vec::<u64>::new());
    }

    #[test]
    fn segmented_sieve_single_window_matches_base_sieve_tail() {
        let hi = 10_000u64;
        let base_primes = base_sieve(super::super::base::isqrt(hi));
        let got = segmented_sieve(9_900, hi, &base_primes);
        let want: Vec<u64> = base_sieve(hi)
            .into_iter()
            .filter(|&p| p >= 9_900)
            .collect();
        assert_eq!(got, want);
    }
}
