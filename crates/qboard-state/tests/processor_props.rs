//! Property-based tests for the state vector processor.

use proptest::prelude::*;
use qboard_state::{Complex64, DisplayMode, StateVector, bitstring, process, select_step};

/// Generate a random normalized six-qubit state.
fn arb_normalized_state() -> impl Strategy<Value = StateVector> {
    prop::collection::vec((-1.0f64..1.0, -1.0f64..1.0), 64).prop_filter_map(
        "zero vector",
        |pairs| {
            let norm = pairs
                .iter()
                .map(|(re, im)| re * re + im * im)
                .sum::<f64>()
                .sqrt();
            (norm > 1e-6).then(|| {
                let amps = pairs
                    .into_iter()
                    .map(|(re, im)| Complex64::new(re / norm, im / norm))
                    .collect();
                StateVector::new(amps).unwrap()
            })
        },
    )
}

proptest! {
    #[test]
    fn prop_process_keeps_length_and_order(state in arb_normalized_state()) {
        for mode in [DisplayMode::Probability, DisplayMode::Amplitude] {
            let records = process(&state, mode).unwrap();
            prop_assert_eq!(records.len(), 64);
            for (i, record) in records.iter().enumerate() {
                prop_assert_eq!(&record.bitstring, &bitstring(i, 6).unwrap());
                prop_assert!((0.0..=1.0).contains(&record.value));
            }
        }
    }

    #[test]
    fn prop_probabilities_sum_to_one(state in arb_normalized_state()) {
        let records = process(&state, DisplayMode::Probability).unwrap();
        let total: f64 = records.iter().map(|r| r.value).sum();
        // 64 values, each off by at most 5e-7.
        prop_assert!((total - 1.0).abs() < 64.0 * 5e-7 + 1e-9);
    }

    #[test]
    fn prop_values_have_six_decimals(state in arb_normalized_state()) {
        for record in process(&state, DisplayMode::Amplitude).unwrap() {
            let scaled = record.value * 1e6;
            prop_assert!((scaled - scaled.round()).abs() < 1e-6);
        }
    }

    #[test]
    fn prop_select_step_bounds(len in 1usize..30) {
        let steps: Vec<usize> = (0..len).collect();
        prop_assert_eq!(*select_step(&steps, len - 1).unwrap(), len - 1);
        prop_assert!(select_step(&steps, len).is_err());
    }

    #[test]
    fn prop_bitstring_parses_back(index in 0usize..64) {
        let label = bitstring(index, 6).unwrap();
        prop_assert_eq!(usize::from_str_radix(&label, 2).unwrap(), index);
    }
}
