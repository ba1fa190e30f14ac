// Polynomial generation, evaluation and Lagrange interpolation, generic over
// the scalar field so both secrets flow through one code path.

use alloc::vec::Vec;

use ark_ff::{PrimeField, UniformRand};
use ark_std::{One, Zero};

#[cfg(feature = "zeroize_memory")]
use zeroize::Zeroize;

/// A degree t-1 polynomial whose constant term is a secret.
///
/// Created inside split, used only to evaluate share points, never persisted.
pub(crate) struct SecretPolynomial<F: PrimeField> {
    coeffs: Vec<F>,
}

impl<F: PrimeField> SecretPolynomial<F> {
    /// Builds a length-`threshold` coefficient vector: index 0 is the secret,
    /// the rest are drawn uniformly from the field.
    pub(crate) fn random<R: rand::Rng + ?Sized>(secret: F, threshold: usize, rng: &mut R) -> Self {
        let mut coeffs = Vec::with_capacity(threshold);
        coeffs.push(secret);
        for _ in 1..threshold {
            coeffs.push(F::rand(rng));
        }
        Self { coeffs }
    }

    /// Evaluates the polynomial at `x` by Horner's scheme.
    pub(crate) fn evaluate(&self, x: F) -> F {
        self.coeffs
            .iter()
            .rev()
            .fold(F::zero(), |result, coeff| result * x + *coeff)
    }

    #[cfg(test)]
    pub(crate) fn coefficients(&self) -> &[F] {
        &self.coeffs
    }
}

#[cfg(feature = "zeroize_memory")]
impl<F: PrimeField> Zeroize for SecretPolynomial<F> {
    fn zeroize(&mut self) {
        // Field elements carry no Zeroize impl of their own; overwriting with
        // the additive identity wipes the secret and the random coefficients.
        for coeff in self.coeffs.iter_mut() {
            *coeff = F::zero();
        }
    }
}

#[cfg(feature = "zeroize_memory")]
impl<F: PrimeField> Drop for SecretPolynomial<F> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

/// Lagrange interpolation at x = 0:
///
/// ```text
/// secret = Σ_i  y_i · Π_{j≠i} ( x_j / (x_j − x_i) )
/// ```
///
/// The denominator product is accumulated across all j ≠ i before a single
/// modular-inverse division per term.
///
/// The x-coordinates must be pairwise distinct; recovery validates this
/// before any point is decoded.
pub(crate) fn interpolate_at_zero<F: PrimeField>(points: &[(F, F)]) -> F {
    let mut secret = F::zero();

    for (i, (x_i, y_i)) in points.iter().enumerate() {
        let mut term = *y_i;
        let mut denominator = F::one();

        for (j, (x_j, _)) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            term *= *x_j;
            denominator *= *x_j - *x_i;
        }

        let inverse = denominator
            .inverse()
            .expect("evaluation points are pairwise distinct");
        secret += term * inverse;
    }

    secret
}

#[cfg(test)]
mod tests {
    use super::{interpolate_at_zero, SecretPolynomial};
    use crate::field::ViewingScalar;
    use alloc::vec::Vec;
    use ark_std::One;
    use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

    fn fe(n: u64) -> ViewingScalar {
        ViewingScalar::from(n)
    }

    #[test]
    fn random_polynomial_keeps_secret_as_constant_term() {
        let mut rng = ChaCha8Rng::from_seed([0x90; 32]);
        let poly = SecretPolynomial::random(fe(185), 10, &mut rng);
        assert_eq!(poly.coefficients().len(), 10);
        assert_eq!(poly.coefficients()[0], fe(185));
    }

    #[test]
    fn evaluate_matches_hand_computation() {
        // f(x) = 3 + 2x + 5x^2
        let poly = SecretPolynomial {
            coeffs: alloc::vec![fe(3), fe(2), fe(5)],
        };
        assert_eq!(poly.evaluate(fe(0)), fe(3));
        assert_eq!(poly.evaluate(fe(1)), fe(10));
        assert_eq!(poly.evaluate(fe(2)), fe(27));
    }

    #[test]
    fn constant_polynomial_evaluates_to_secret_everywhere() {
        let mut rng = ChaCha8Rng::from_seed([0x13; 32]);
        let poly = SecretPolynomial::random(fe(42), 1, &mut rng);
        assert_eq!(poly.evaluate(fe(1)), fe(42));
        assert_eq!(poly.evaluate(fe(99)), fe(42));
    }

    #[test]
    fn interpolation_recovers_constant_term() {
        let mut rng = ChaCha8Rng::from_seed([0x90; 32]);
        let poly = SecretPolynomial::random(fe(185), 10, &mut rng);

        let points: Vec<_> = (1..=10u64).map(|x| (fe(x), poly.evaluate(fe(x)))).collect();
        assert_eq!(interpolate_at_zero(&points), fe(185));

        // Any other selection of distinct points works as well.
        let shifted: Vec<_> = (5..=14u64).map(|x| (fe(x), poly.evaluate(fe(x)))).collect();
        assert_eq!(interpolate_at_zero(&shifted), fe(185));
    }

    #[test]
    fn single_point_interpolation_is_identity() {
        let points = [(ViewingScalar::one(), fe(7))];
        assert_eq!(interpolate_at_zero(&points), fe(7));
    }
}
