//! Gate tokens: the symbols that occupy board cells and wire payloads.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::IrError;

/// The symbol occupying one cell of the editor board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum GateToken {
    // Absence of a gate
    /// Identity (empty cell).
    #[default]
    Identity,

    // Single-qubit gates
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// Hadamard gate.
    H,
    /// S gate (sqrt(Z)).
    S,
    /// T gate (fourth root of Z).
    T,

    // Multi-line markers
    /// Control marker; controls the gate on the line directly below.
    Control,
    /// One half of a swap between two vertically adjacent lines.
    Swap,
}

impl GateToken {
    /// All single-qubit gates offered by the editor toolbar.
    pub const SINGLE_QUBIT: [GateToken; 6] = [
        GateToken::X,
        GateToken::Y,
        GateToken::Z,
        GateToken::H,
        GateToken::S,
        GateToken::T,
    ];

    /// Every token, Identity first.
    pub const ALL: [GateToken; 9] = [
        GateToken::Identity,
        GateToken::X,
        GateToken::Y,
        GateToken::Z,
        GateToken::H,
        GateToken::S,
        GateToken::T,
        GateToken::Control,
        GateToken::Swap,
    ];

    /// The identifier the editor and presets use for this token.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            GateToken::Identity => "I",
            GateToken::X => "X",
            GateToken::Y => "Y",
            GateToken::Z => "Z",
            GateToken::H => "H",
            GateToken::S => "S",
            GateToken::T => "T",
            GateToken::Control => "C_down",
            GateToken::Swap => "Swap",
        }
    }

    /// Check if this is the empty cell.
    #[inline]
    pub fn is_identity(&self) -> bool {
        matches!(self, GateToken::Identity)
    }

    /// Check if this is a plain single-qubit gate.
    #[inline]
    pub fn is_single_qubit(&self) -> bool {
        Self::SINGLE_QUBIT.contains(self)
    }

    /// Check if a control marker may sit directly above this token.
    ///
    /// Only single-qubit gates qualify: the wire pair written for a control
    /// replaces the target cell, so a multi-line marker there would be lost.
    #[inline]
    pub fn is_controllable(&self) -> bool {
        self.is_single_qubit()
    }
}

impl fmt::Display for GateToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GateToken {
    type Err = IrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "I" | "" => Ok(GateToken::Identity),
            "X" => Ok(GateToken::X),
            "Y" => Ok(GateToken::Y),
            "Z" => Ok(GateToken::Z),
            "H" => Ok(GateToken::H),
            "S" => Ok(GateToken::S),
            "T" => Ok(GateToken::T),
            "C_down" | "C" => Ok(GateToken::Control),
            "Swap" | "SWAP" | "W" => Ok(GateToken::Swap),
            other => Err(IrError::UnknownToken(other.to_string())),
        }
    }
}

impl TryFrom<String> for GateToken {
    type Error = IrError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<GateToken> for String {
    fn from(token: GateToken) -> Self {
        token.as_str().to_string()
    }
}

/// A token as sent to the simulation service.
///
/// The service has no notion of a free-standing control marker; a control is
/// expressed as a linked `CNOT-1` / `CNOT-2` pair on adjacent lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WireToken {
    /// A token that passes through unchanged. Never [`GateToken::Control`].
    Gate(GateToken),
    /// Control half of a controlled-X pair (`"CNOT-1"`).
    CnotControl,
    /// Target half of a controlled-X pair, controlled from the line above (`"CNOT-2"`).
    CnotTarget,
}

impl WireToken {
    /// The wire identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            WireToken::Gate(token) => token.as_str(),
            WireToken::CnotControl => "CNOT-1",
            WireToken::CnotTarget => "CNOT-2",
        }
    }

    /// Check if this is the identity token.
    #[inline]
    pub fn is_identity(&self) -> bool {
        matches!(self, WireToken::Gate(GateToken::Identity))
    }
}

impl Default for WireToken {
    fn default() -> Self {
        WireToken::Gate(GateToken::Identity)
    }
}

impl fmt::Display for WireToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WireToken {
    type Err = IrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CNOT-1" => Ok(WireToken::CnotControl),
            "CNOT-2" => Ok(WireToken::CnotTarget),
            other => match other.parse::<GateToken>()? {
                GateToken::Control => Err(IrError::UnknownToken(other.to_string())),
                token => Ok(WireToken::Gate(token)),
            },
        }
    }
}

impl TryFrom<String> for WireToken {
    type Error = IrError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WireToken> for String {
    fn from(token: WireToken) -> Self {
        token.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_properties() {
        assert!(GateToken::Identity.is_identity());
        assert!(GateToken::default().is_identity());
        assert!(GateToken::H.is_single_qubit());
        assert!(!GateToken::Control.is_single_qubit());
        assert!(!GateToken::Swap.is_controllable());
        let gates: Vec<_> = GateToken::ALL
            .into_iter()
            .filter(GateToken::is_single_qubit)
            .collect();
        assert_eq!(gates, GateToken::SINGLE_QUBIT);
    }

    #[test]
    fn test_token_parse() {
        for token in GateToken::ALL {
            assert_eq!(token.as_str().parse::<GateToken>().unwrap(), token);
        }
        assert_eq!("W".parse::<GateToken>().unwrap(), GateToken::Swap);
        assert!(matches!(
            "CNOT-1".parse::<GateToken>(),
            Err(IrError::UnknownToken(s)) if s == "CNOT-1"
        ));
    }

    #[test]
    fn test_token_serde() {
        let json = serde_json::to_string(&GateToken::Control).unwrap();
        assert_eq!(json, r#""C_down""#);
        let back: GateToken = serde_json::from_str(r#""Swap""#).unwrap();
        assert_eq!(back, GateToken::Swap);
        assert!(serde_json::from_str::<GateToken>(r#""Q""#).is_err());
    }

    #[test]
    fn test_wire_token_strings() {
        assert_eq!(WireToken::CnotControl.to_string(), "CNOT-1");
        assert_eq!(WireToken::CnotTarget.to_string(), "CNOT-2");
        assert_eq!(WireToken::Gate(GateToken::Swap).to_string(), "Swap");
        assert_eq!("I".parse::<WireToken>().unwrap(), WireToken::default());
        // A bare control marker never appears on the wire.
        assert!("C_down".parse::<WireToken>().is_err());
    }
}
