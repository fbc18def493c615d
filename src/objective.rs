//! The Rastrigin benchmark objective.
//!
//! ```text
//! f(x) = 10·D + Σ (x_i² − 10·cos(2π·x_i))
//! ```
//!
//! Highly multimodal, with a regular lattice of local minima and a single
//! global minimum `f(0) = 0` at the origin.

use std::f64::consts::PI;

/// Lower bound of each coordinate of a freshly initialized solution.
pub const DOMAIN_MIN: f64 = -5.12;

/// Upper bound of each coordinate of a freshly initialized solution.
pub const DOMAIN_MAX: f64 = 5.12;

const AMPLITUDE: f64 = 10.0;

/// Evaluates the Rastrigin function on `x`.
///
/// The dimension is taken from `x.len()`. The function is defined on all of
/// `R^D`; callers are not required to stay inside
/// [`DOMAIN_MIN`]..[`DOMAIN_MAX`].
///
/// # Examples
///
/// ```
/// use u_anneal::objective::rastrigin;
///
/// assert_eq!(rastrigin(&[0.0, 0.0, 0.0]), 0.0);
/// assert!(rastrigin(&[1.0, -2.5]) > 0.0);
/// ```
pub fn rastrigin(x: &[f64]) -> f64 {
    let base = AMPLITUDE * x.len() as f64;
    x.iter().fold(base, |acc, &xi| {
        acc + (xi * xi - AMPLITUDE * (2.0 * PI * xi).cos())
    })
}

/// Rastrigin objective bound to a fixed dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rastrigin {
    /// Number of coordinates per solution.
    pub dimensions: usize,
}

impl Rastrigin {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// Energy of `solution`. Lower is better.
    pub fn energy(&self, solution: &[f64]) -> f64 {
        debug_assert_eq!(solution.len(), self.dimensions);
        rastrigin(solution)
    }

    /// The global minimizer: the all-zero vector.
    pub fn optimum(&self) -> Vec<f64> {
        vec![0.0; self.dimensions]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_origin_is_exact_zero() {
        for d in 1..=16 {
            assert_eq!(rastrigin(&vec![0.0; d]), 0.0, "dimension {d}");
        }
    }

    #[test]
    fn test_integer_lattice_points() {
        // cos(2πk) = 1 at integers, so f reduces to Σ x_i².
        let x = [1.0, -2.0, 3.0];
        assert!((rastrigin(&x) - 14.0).abs() < 1e-9);
    }

    #[test]
    fn test_half_integer_is_local_maximum_of_cosine_term() {
        // cos(π) = -1, so each coordinate contributes 0.25 + 20.
        let x = [0.5];
        assert!((rastrigin(&x) - 20.25).abs() < 1e-9);
    }

    #[test]
    fn test_empty_vector() {
        assert_eq!(rastrigin(&[]), 0.0);
    }

    #[test]
    fn test_struct_matches_free_function() {
        let f = Rastrigin::new(2);
        assert_eq!(f.energy(&[0.3, -1.7]), rastrigin(&[0.3, -1.7]));
        assert_eq!(f.energy(&f.optimum()), 0.0);
    }

    proptest! {
        #[test]
        fn prop_non_negative(x in prop::collection::vec(-50.0f64..50.0, 1..12)) {
            prop_assert!(rastrigin(&x) >= -1e-9);
        }

        #[test]
        fn prop_symmetric_under_negation(x in prop::collection::vec(DOMAIN_MIN..DOMAIN_MAX, 1..8)) {
            let neg: Vec<f64> = x.iter().map(|v| -v).collect();
            prop_assert!((rastrigin(&x) - rastrigin(&neg)).abs() < 1e-9);
        }
    }
}
