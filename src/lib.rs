//! Threshold splitting and recovery of dual-field key pairs using
//! [Shamir's Secret Sharing](https://en.wikipedia.org/wiki/Shamir%27s_Secret_Sharing).
//!
//! A wallet key pair consists of a *spending* secret in the secp256k1 scalar
//! field and a *viewing* secret in the BN254 scalar field. [`split`] hides
//! each behind its own random degree t−1 polynomial and hands out n
//! evaluations; any t of them reconstruct both secrets exactly via [`recover`],
//! while fewer than t reveal nothing.
//!
//! # Usage
//! ## (std)
//!
//! ```
//! # #[cfg(feature = "std")]
//! # {
//! use recoverykit::{recover, split};
//!
//! // Split a key pair into 5 shares, any 3 of which recover it
//! let shares = split(3, 5, "2a", "1b").unwrap();
//! // Hand one share to each guardian... later, collect 3 of them back
//! let keys = recover(3, &shares[1..4]).unwrap();
//! assert_eq!(keys.spending, "2a");
//! assert_eq!(keys.viewing, "1b");
//! # }
//! ```
//!
//! ## (no std)
//!
//! ```
//! use recoverykit::{recover, split_with_rng};
//! use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
//!
//! let mut rng = ChaCha8Rng::from_seed([0x90; 32]);
//! let shares = split_with_rng(3, 5, "2a", "1b", &mut rng).unwrap();
//! let keys = recover(3, &shares[0..3]).unwrap();
//! assert_eq!(keys.spending, "2a");
//! ```
//!
//! # Share format
//!
//! A [`Share`] is three scalar strings: the evaluation `point` (the same
//! integer interpreted in both fields) and one polynomial evaluation per
//! field. Every scalar uses a single canonical encoding — minimal lowercase
//! hex, no `0x` prefix — enforced again at every decode boundary; see
//! [`field`].
//!
//! # Tamper detection
//!
//! [`recover`] rejects share sets with colliding points before touching any
//! key material. When it is given *more* than t shares it interpolates twice,
//! over the first and last t points, and refuses to return anything if the
//! two results disagree.
//!
//! Recovery from *exactly* t shares has no redundancy to cross-check, so a
//! corrupted share yields a well-formed but wrong key pair. Callers who want
//! authenticated recovery should collect at least t + 1 shares. This is a
//! deliberate, documented limitation rather than an error.
//!
//! # Feature flags
//!
//! - `std` — enables [`split`] (uses `rand::thread_rng`). Without `std`, use
//!   [`split_with_rng`].
//! - `zeroize_memory` — wipes share strings, recovered keys and polynomial
//!   coefficients on drop.
//! - `fuzzing` — `Arbitrary` on [`Share`] for the fuzz targets.
#![cfg_attr(not(feature = "std"), no_std)]

mod error;
pub mod field;
mod math;
mod share;

extern crate alloc;

use alloc::vec::Vec;
use hashbrown::HashSet;

use field::{SpendingScalar, ViewingScalar};
use math::SecretPolynomial;
use share::Point;

pub use error::Error;
pub use share::{SecretPair, Share};

/// Splits a key pair into `share_count` shares, any `threshold` of which
/// recover it. This method is useful when `std` is not available, or when a
/// deterministic RNG is wanted in tests; for typical usage see [`split`].
///
/// Both secrets must be canonically encoded scalars of their respective
/// fields. Evaluation points are assigned as 1..=n, so they are non-zero and
/// pairwise distinct by construction.
///
/// Example:
/// ```
/// # use recoverykit::split_with_rng;
/// # use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
/// let mut rng = ChaCha8Rng::from_seed([0x90; 32]);
/// let shares = split_with_rng(2, 3, "2a", "1b", &mut rng).unwrap();
/// assert_eq!(shares.len(), 3);
/// assert_eq!(shares[2].point, "3");
/// ```
pub fn split_with_rng<R: rand::Rng + ?Sized>(
    threshold: usize,
    share_count: usize,
    spending_key: &str,
    viewing_key: &str,
    rng: &mut R,
) -> Result<Vec<Share>, Error> {
    if threshold == 0 || threshold > share_count {
        return Err(Error::InvalidParameters {
            threshold,
            share_count,
        });
    }

    let spending = field::decode::<SpendingScalar>(spending_key)?;
    let viewing = field::decode::<ViewingScalar>(viewing_key)?;

    let spending_poly = SecretPolynomial::random(spending, threshold, rng);
    let viewing_poly = SecretPolynomial::random(viewing, threshold, rng);

    Ok((1..=share_count as u64)
        .map(|i| Share {
            point: field::encode(&SpendingScalar::from(i)),
            spending_eval: field::encode(&spending_poly.evaluate(SpendingScalar::from(i))),
            viewing_eval: field::encode(&viewing_poly.evaluate(ViewingScalar::from(i))),
        })
        .collect())
}

/// Splits a key pair into `share_count` shares using the thread-local secure
/// RNG. See [`split_with_rng`] for the full contract.
#[cfg(feature = "std")]
pub fn split(
    threshold: usize,
    share_count: usize,
    spending_key: &str,
    viewing_key: &str,
) -> Result<Vec<Share>, Error> {
    let mut rng = rand::thread_rng();
    split_with_rng(threshold, share_count, spending_key, viewing_key, &mut rng)
}

/// Recovers the key pair from at least `threshold` shares.
///
/// The share set is validated first: `threshold` must be met and all points
/// must be pairwise distinct (shares that passed through untrusted hands may
/// collide, which would corrupt interpolation silently). Every share is then
/// decoded; a single malformed scalar aborts the whole call — a partial pair
/// is never returned.
///
/// Given exactly `threshold` shares, one interpolation per field yields the
/// result. Given more, the first and last `threshold` points are
/// interpolated independently and compared; disagreement returns
/// [`Error::TamperDetected`] and discards both candidates, since either may
/// be attacker-influenced.
pub fn recover(threshold: usize, shares: &[Share]) -> Result<SecretPair, Error> {
    validate(threshold, shares)?;

    let points = shares
        .iter()
        .map(Point::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    let recovered = interpolate(&points[..threshold]);

    if points.len() > threshold {
        let check = interpolate(&points[points.len() - threshold..]);
        if recovered != check {
            return Err(Error::TamperDetected);
        }
    }

    let (spending, viewing) = recovered;
    Ok(SecretPair {
        spending: field::encode(&spending),
        viewing: field::encode(&viewing),
    })
}

/// Share-count and point-uniqueness checks, run before any decoding.
fn validate(threshold: usize, shares: &[Share]) -> Result<(), Error> {
    if threshold == 0 {
        return Err(Error::InvalidParameters {
            threshold,
            share_count: shares.len(),
        });
    }
    if shares.len() < threshold {
        return Err(Error::SharesBelowThreshold {
            have: shares.len(),
            need: threshold,
        });
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(shares.len());
    for (index, share) in shares.iter().enumerate() {
        if !seen.insert(share.point.as_str()) {
            return Err(Error::DuplicatePointInShares {
                point: share.point.clone(),
                index,
            });
        }
    }
    Ok(())
}

/// Interpolates both secrets at x = 0 over the given points.
fn interpolate(points: &[Point]) -> (SpendingScalar, ViewingScalar) {
    let spending: Vec<_> = points.iter().map(|p| (p.x_spending, p.y_spending)).collect();
    let viewing: Vec<_> = points.iter().map(|p| (p.x_viewing, p.y_viewing)).collect();
    (
        math::interpolate_at_zero(&spending),
        math::interpolate_at_zero(&viewing),
    )
}
