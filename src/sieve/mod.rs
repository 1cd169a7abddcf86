//! A cache-conscious wheel-30 sieve of Eratosthenes for 64-bit ranges.
//!
//! | Module | Responsibility |
//! |---|---|
//! | [`wheel`] | Wheel-30 residue tables and the precomputed cross-product tables. |
//! | [`base`] | The base sieve: every prime up to a bound, in one packed array. |
//! | [`segment`] | The segmented sieve: the base sieve's strike logic, replayed window by window over a range too wide to fit one array. |
//! | [`driver`] | Chooses between the two and stitches their output into one call. |
//!
//! Everything here represents integers coprime to 30 as one bit each, eight
//! per byte, which is why none of these modules deal with 2, 3, or 5
//! directly — those three are folded in at the edges ([`base::decode`] and
//! [`driver::compute`]) instead of carried through the wheel machinery.

pub mod base;
pub mod driver;
pub mod segment;
pub mod wheel;

pub use base::{base_sieve, isqrt};
pub use driver::{compute, prime_count_upper_bound, SieveMode};
pub use segment::segmented_sieve;
