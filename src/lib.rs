//! # Sieve — Core Library
//!
//! A cache-conscious wheel-30 sieve of Eratosthenes over 64-bit ranges.
//!
//! ## Module Organization
//!
//! - [`sieve::wheel`] — wheel-30 residue tables and the precomputed
//!   cross-product tables that drive branch-free striking.
//! - [`sieve::base`] — the base sieve: every prime up to a bound, in one
//!   packed byte array.
//! - [`sieve::segment`] — the segmented sieve: the same striking logic,
//!   replayed window by window over a range too wide for one array.
//! - [`sieve::driver`] — [`SieveMode`] and [`compute`], the single entry
//!   point that picks between the base and segmented sieves.
//!
//! ## Design Philosophy
//!
//! One bit per integer coprime to 30, eight per byte. The base sieve and the
//! segmented sieve strike those bits with the same precomputed offsets; the
//! only thing that changes between them is how much of the range is resident
//! in memory at once.

pub mod sieve;

pub use sieve::{base_sieve, compute, isqrt, prime_count_upper_bound, segmented_sieve, SieveMode};
