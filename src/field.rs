//! Scalar-field collaborators and their canonical string codec.
//!
//! The spending secret lives in the secp256k1 scalar field and the viewing
//! secret in the BN254 scalar field; both are aliased here so the rest of the
//! crate never names a curve crate directly. All arithmetic comes from
//! [`ark_ff::PrimeField`].
//!
//! The canonical encoding is minimal lowercase hexadecimal: no `0x` prefix,
//! no leading zeros, `"0"` for the zero element. [`decode`] rejects every
//! other form, including values at or above the field modulus.

use alloc::string::String;

use ark_ff::PrimeField;
use num_bigint::BigUint;

use crate::error::Error;

/// Scalar field of secp256k1; spending secrets and their shares live here.
pub type SpendingScalar = ark_secp256k1::Fr;

/// Scalar field of BN254; viewing secrets and their shares live here.
pub type ViewingScalar = ark_bn254::Fr;

/// Encodes a field element in the canonical form.
///
/// ```
/// use recoverykit::field::{encode, SpendingScalar};
///
/// assert_eq!(encode(&SpendingScalar::from(0u64)), "0");
/// assert_eq!(encode(&SpendingScalar::from(0x2af0u64)), "2af0");
/// ```
pub fn encode<F: PrimeField>(element: &F) -> String {
    let value: BigUint = element.into_bigint().into();
    alloc::format!("{value:x}")
}

/// Decodes a canonically encoded field element.
///
/// Fails with [`Error::Decode`] on empty input, uppercase digits, a `0x`
/// prefix, leading zeros, non-hex bytes, or a value that does not reduce
/// canonically into the field (>= modulus).
pub fn decode<F: PrimeField>(encoded: &str) -> Result<F, Error> {
    if !is_canonical(encoded) {
        return Err(Error::Decode(encoded.into()));
    }
    // The charset is pre-validated, so parsing only fails on values too wide
    // for the field's limb count; both paths are the same malformed-input error.
    let value = BigUint::parse_bytes(encoded.as_bytes(), 16)
        .ok_or_else(|| Error::Decode(encoded.into()))?;
    let repr = F::BigInt::try_from(value).map_err(|_| Error::Decode(encoded.into()))?;
    F::from_bigint(repr).ok_or_else(|| Error::Decode(encoded.into()))
}

fn is_canonical(encoded: &str) -> bool {
    !encoded.is_empty()
        && encoded
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
        && (encoded == "0" || !encoded.starts_with('0'))
}

#[cfg(test)]
mod tests {
    use super::{decode, encode, SpendingScalar, ViewingScalar};
    use crate::error::Error;
    use alloc::string::String;
    use ark_ff::{PrimeField, UniformRand};
    use ark_std::One;
    use num_bigint::BigUint;
    use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

    #[test]
    fn round_trip_boundary_elements() {
        let minus_one = -SpendingScalar::one();
        for e in [
            SpendingScalar::from(0u64),
            SpendingScalar::from(1u64),
            SpendingScalar::from(u64::MAX),
            minus_one,
        ] {
            assert_eq!(decode::<SpendingScalar>(&encode(&e)).unwrap(), e);
        }
    }

    #[test]
    fn round_trip_random_elements() {
        let mut rng = ChaCha8Rng::from_seed([0x90; 32]);
        for _ in 0..32 {
            let s = SpendingScalar::rand(&mut rng);
            let v = ViewingScalar::rand(&mut rng);
            assert_eq!(decode::<SpendingScalar>(&encode(&s)).unwrap(), s);
            assert_eq!(decode::<ViewingScalar>(&encode(&v)).unwrap(), v);
        }
    }

    #[test]
    fn zero_encodes_minimally() {
        assert_eq!(encode(&ViewingScalar::from(0u64)), "0");
        assert_eq!(decode::<ViewingScalar>("0").unwrap(), ViewingScalar::from(0u64));
    }

    #[test]
    fn rejects_non_canonical_forms() {
        for bad in ["", "0x2a", "2A", "02a", "00", "zz", " 2a", "2a\n", "-2a", "+2a"] {
            assert_eq!(
                decode::<SpendingScalar>(bad),
                Err(Error::Decode(String::from(bad))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_values_at_or_above_modulus() {
        let modulus: BigUint = SpendingScalar::MODULUS.into();
        let hex = modulus.to_str_radix(16);
        assert!(decode::<SpendingScalar>(&hex).is_err());

        let above = modulus + BigUint::from(7u8);
        assert!(decode::<SpendingScalar>(&above.to_str_radix(16)).is_err());
    }

    #[test]
    fn rejects_oversized_input() {
        let wide: String = core::iter::repeat('f').take(200).collect();
        assert!(decode::<ViewingScalar>(&wide).is_err());
    }

    #[test]
    fn spending_range_value_can_exceed_viewing_range() {
        // 2^254 is below the secp256k1 group order but above the BN254 one.
        let mut hex = String::from("4");
        hex.push_str(&"0".repeat(63));
        assert!(decode::<SpendingScalar>(&hex).is_ok());
        assert!(decode::<ViewingScalar>(&hex).is_err());
    }
}
