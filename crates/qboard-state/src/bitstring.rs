//! Basis-state labels and display rounding.

use crate::error::{StateError, StateResult};

/// Label a basis index as a fixed-width binary string, most significant bit first.
///
/// Fails if `index` needs more than `width` bits.
pub fn bitstring(index: usize, width: usize) -> StateResult<String> {
    let fits = width >= usize::BITS as usize || index < (1usize << width);
    if !fits {
        return Err(StateError::InvalidIndex { index, width });
    }
    Ok(format!("{index:0width$b}"))
}

/// Round to six decimal places, halves away from zero.
#[inline]
pub fn round6(x: f64) -> f64 {
    (x * 1e6).round() / 1e6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitstring_width_six() {
        assert_eq!(bitstring(0, 6).unwrap(), "000000");
        assert_eq!(bitstring(5, 6).unwrap(), "000101");
        assert_eq!(bitstring(63, 6).unwrap(), "111111");
        for i in 0..64 {
            assert_eq!(bitstring(i, 6).unwrap().len(), 6);
        }
    }

    #[test]
    fn test_bitstring_out_of_range() {
        assert_eq!(
            bitstring(64, 6).unwrap_err(),
            StateError::InvalidIndex { index: 64, width: 6 }
        );
        assert!(bitstring(1, 0).is_err());
        assert_eq!(bitstring(0, 0).unwrap(), "");
    }

    #[test]
    fn test_bitstrings_increase() {
        let labels: Vec<_> = (0..64).map(|i| bitstring(i, 6).unwrap()).collect();
        assert!(labels.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_round6() {
        assert_eq!(round6(0.499_999_95), 0.5);
        assert_eq!(round6(0.123_456_4), 0.123_456);
        assert_eq!(round6(1.0), 1.0);
        assert_eq!(round6(0.0), 0.0);
        assert_eq!(round6(std::f64::consts::FRAC_1_SQRT_2), 0.707_107);
    }
}
