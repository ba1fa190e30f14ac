//! Share and recovered-key data model.
//!
//! A [`Share`] is the only artifact that leaves this crate: three canonically
//! encoded scalar strings handed to one guardian. [`Point`] is its decoded
//! form, alive only while recovery interpolates.

use alloc::string::String;
use core::fmt;

#[cfg(feature = "fuzzing")]
use arbitrary::Arbitrary;

#[cfg(feature = "zeroize_memory")]
use zeroize::Zeroize;

use crate::error::Error;
use crate::field::{self, SpendingScalar, ViewingScalar};

/// Data given to a guardian.
///
/// All fields are minimal lowercase hex without a leading `0x`. The `point`
/// is the same integer interpreted in both scalar fields; the two
/// evaluations are the spending and viewing polynomials at that point.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "fuzzing", derive(Arbitrary))]
#[cfg_attr(feature = "zeroize_memory", derive(Zeroize))]
#[cfg_attr(feature = "zeroize_memory", zeroize(drop))]
pub struct Share {
    /// Point of evaluation. Public information (which guardian this is).
    #[cfg_attr(feature = "zeroize_memory", zeroize(skip))]
    pub point: String,
    /// Spending polynomial evaluated at `point`.
    pub spending_eval: String,
    /// Viewing polynomial evaluated at `point`.
    pub viewing_eval: String,
}

impl fmt::Debug for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Share")
            .field("point", &self.point)
            .field("spending_eval", &"<redacted>")
            .field("viewing_eval", &"<redacted>")
            .finish()
    }
}

/// The recovered spending and viewing secrets, canonically encoded.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "zeroize_memory", derive(Zeroize))]
#[cfg_attr(feature = "zeroize_memory", zeroize(drop))]
pub struct SecretPair {
    /// The spending secret (secp256k1 scalar).
    pub spending: String,
    /// The viewing secret (BN254 scalar).
    pub viewing: String,
}

impl fmt::Debug for SecretPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretPair")
            .field("spending", &"<redacted>")
            .field("viewing", &"<redacted>")
            .finish()
    }
}

/// Decoded form of a share, used only inside interpolation.
///
/// The point is decoded twice, once per field, because the two secrets live
/// in different fields.
pub(crate) struct Point {
    pub(crate) x_spending: SpendingScalar,
    pub(crate) x_viewing: ViewingScalar,
    pub(crate) y_spending: SpendingScalar,
    pub(crate) y_viewing: ViewingScalar,
}

impl TryFrom<&Share> for Point {
    type Error = Error;

    fn try_from(share: &Share) -> Result<Self, Error> {
        Ok(Self {
            x_spending: field::decode(&share.point)?,
            x_viewing: field::decode(&share.point)?,
            y_spending: field::decode(&share.spending_eval)?,
            y_viewing: field::decode(&share.viewing_eval)?,
        })
    }
}
