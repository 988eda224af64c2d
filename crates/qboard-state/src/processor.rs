//! Turn a state vector into chart-ready records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::bitstring::{bitstring, round6};
use crate::error::StateResult;
use crate::statevector::StateVector;

/// Which quantity the chart shows per basis state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// `|a|²`, in `[0, 1]` for a normalized state.
    #[default]
    Probability,
    /// `|a|`, the amplitude magnitude.
    Amplitude,
}

impl DisplayMode {
    /// The value shown for one amplitude, before rounding.
    #[inline]
    pub fn extract(self, amplitude: num_complex::Complex64) -> f64 {
        match self {
            DisplayMode::Probability => amplitude.norm_sqr(),
            DisplayMode::Amplitude => amplitude.norm(),
        }
    }

    /// Lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Probability => "probability",
            DisplayMode::Amplitude => "amplitude",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "probability" | "prob" | "p" => Ok(DisplayMode::Probability),
            "amplitude" | "amp" | "a" => Ok(DisplayMode::Amplitude),
            other => Err(format!(
                "unknown display mode '{other}', expected 'probability' or 'amplitude'"
            )),
        }
    }
}

/// One bar of the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizationRecord {
    /// Basis state label, most significant bit first.
    pub bitstring: String,
    /// Rounded probability or amplitude magnitude.
    pub value: f64,
}

/// Convert one state vector into records, in basis-index order.
///
/// Labels are `num_qubits` bits wide and values are rounded with
/// [`round6`]. The output always has one record per amplitude.
#[instrument(level = "debug", skip(state), fields(len = state.len()))]
pub fn process(state: &StateVector, mode: DisplayMode) -> StateResult<Vec<VisualizationRecord>> {
    let width = state.num_qubits();
    state
        .amplitudes()
        .iter()
        .enumerate()
        .map(|(index, &amp)| {
            Ok(VisualizationRecord {
                bitstring: bitstring(index, width)?,
                value: round6(mode.extract(amp)),
            })
        })
        .collect()
}

/// The records for one simulated step, tagged with how they were produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Step the records describe.
    pub step: usize,
    /// Quantity shown.
    pub mode: DisplayMode,
    /// One record per basis state.
    pub records: Vec<VisualizationRecord>,
}

impl Dataset {
    /// Process `state` as the dataset for `step`.
    pub fn from_state(step: usize, state: &StateVector, mode: DisplayMode) -> StateResult<Self> {
        Ok(Self {
            step,
            mode,
            records: process(state, mode)?,
        })
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The record with the largest value. Ties go to the lowest index.
    pub fn most_likely(&self) -> Option<&VisualizationRecord> {
        self.records
            .iter()
            .reduce(|best, r| if r.value > best.value { r } else { best })
    }

    /// Records whose rounded value is not zero.
    pub fn nonzero(&self) -> impl Iterator<Item = &VisualizationRecord> {
        self.records.iter().filter(|r| r.value != 0.0)
    }
}
