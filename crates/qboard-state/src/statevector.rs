//! Per-step state vectors returned by the simulator.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::{StateError, StateResult};

/// A state vector: 2^n complex amplitudes indexed by computational basis state.
///
/// Basis index bit `k` belongs to qubit line `k`: line 0 is the least
/// significant bit, so a label printed most-significant-bit first lists the
/// lines bottom to top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Complex64>", into = "Vec<Complex64>")]
pub struct StateVector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl StateVector {
    /// Wrap raw amplitudes. The length must be a non-zero power of two.
    pub fn new(amplitudes: Vec<Complex64>) -> StateResult<Self> {
        let len = amplitudes.len();
        if !len.is_power_of_two() {
            return Err(StateError::LengthMismatch {
                expected: len.checked_next_power_of_two().unwrap_or(usize::MAX),
                got: len,
            });
        }
        Ok(Self {
            num_qubits: len.trailing_zeros() as usize,
            amplitudes,
        })
    }

    /// Wrap raw amplitudes for a register of exactly `num_qubits` lines.
    pub fn with_qubits(num_qubits: usize, amplitudes: Vec<Complex64>) -> StateResult<Self> {
        let expected = dimension(num_qubits);
        if amplitudes.len() != expected {
            return Err(StateError::LengthMismatch {
                expected,
                got: amplitudes.len(),
            });
        }
        Ok(Self {
            amplitudes,
            num_qubits,
        })
    }

    /// The computational basis state `|index⟩` on `num_qubits` lines.
    pub fn basis_state(num_qubits: usize, index: usize) -> StateResult<Self> {
        let size = dimension(num_qubits);
        if index >= size || size == usize::MAX {
            return Err(StateError::InvalidIndex {
                index,
                width: num_qubits,
            });
        }
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[index] = Complex64::new(1.0, 0.0);
        Ok(Self {
            amplitudes,
            num_qubits,
        })
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of amplitudes.
    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    /// Always false; a state vector holds at least one amplitude.
    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }

    /// The amplitudes in basis-index order.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Amplitude of one basis state.
    pub fn amplitude(&self, index: usize) -> Option<Complex64> {
        self.amplitudes.get(index).copied()
    }

    /// Get probability of measuring each basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(Complex64::norm_sqr).collect()
    }

    /// Euclidean norm; 1 for a physical state.
    pub fn norm(&self) -> f64 {
        self.amplitudes
            .iter()
            .map(Complex64::norm_sqr)
            .sum::<f64>()
            .sqrt()
    }
}

/// `2^num_qubits`, saturating at `usize::MAX`.
fn dimension(num_qubits: usize) -> usize {
    u32::try_from(num_qubits)
        .ok()
        .and_then(|n| 1usize.checked_shl(n))
        .unwrap_or(usize::MAX)
}

impl TryFrom<Vec<Complex64>> for StateVector {
    type Error = StateError;

    fn try_from(amplitudes: Vec<Complex64>) -> Result<Self, Self::Error> {
        Self::new(amplitudes)
    }
}

impl From<StateVector> for Vec<Complex64> {
    fn from(state: StateVector) -> Self {
        state.amplitudes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-10
    }

    #[test]
    fn test_basis_state() {
        let sv = StateVector::basis_state(3, 5).unwrap();
        assert_eq!(sv.len(), 8);
        assert_eq!(sv.num_qubits(), 3);
        assert_eq!(sv.amplitude(5), Some(Complex64::new(1.0, 0.0)));
        assert!(approx_eq(sv.norm(), 1.0));
        assert!(StateVector::basis_state(2, 4).is_err());
    }

    #[test]
    fn test_length_must_be_power_of_two() {
        let err = StateVector::new(vec![Complex64::new(1.0, 0.0); 6]).unwrap_err();
        assert_eq!(err, StateError::LengthMismatch { expected: 8, got: 6 });
        assert!(StateVector::new(vec![]).is_err());
        assert_eq!(StateVector::new(vec![Complex64::new(1.0, 0.0)]).unwrap().num_qubits(), 0);
    }

    #[test]
    fn test_with_qubits_checks_length() {
        let amps = vec![Complex64::new(0.5, 0.0); 4];
        assert!(StateVector::with_qubits(2, amps.clone()).is_ok());
        assert_eq!(
            StateVector::with_qubits(6, amps).unwrap_err(),
            StateError::LengthMismatch { expected: 64, got: 4 }
        );
    }

    #[test]
    fn test_probabilities_use_both_components() {
        let h = std::f64::consts::FRAC_1_SQRT_2;
        let sv = StateVector::new(vec![Complex64::new(h, 0.0), Complex64::new(0.0, -h)]).unwrap();
        let probs = sv.probabilities();
        assert!(approx_eq(probs[0], 0.5));
        assert!(approx_eq(probs[1], 0.5));
    }
}
