//! JSON request/response structures for witness computation
//!
//! # Value Formats
//!
//! The `value` field of an input signal can be provided in multiple
//! formats:
//!
//! ## Decimal (default)
//! ```json
//! { "value": "42" }
//! ```
//!
//! ## Hexadecimal (Ethereum addresses, hashes)
//! ```json
//! { "value": "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb", "encoding": "hex" }
//! ```
//!
//! ## Base58 (Solana/Bitcoin keys)
//! ```json
//! { "value": "9aE476sH92Vc7DMCzKNgWUiQ6UdC2DXf9v", "encoding": "base58" }
//! ```
//!
//! If `encoding` is omitted the format is auto-detected.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::encoding::ValueEncoding;
use crate::field::FieldElement;
use crate::graph::CircuitError;

/// One top-level input value in the specified encoding format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputSignal {
    /// Value in the specified encoding format
    pub value: String,

    /// Encoding format (default: auto-detect)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<ValueEncoding>,
}

impl InputSignal {
    pub fn decimal(value: &str) -> InputSignal {
        InputSignal {
            value: value.to_string(),
            encoding: Some(ValueEncoding::Decimal),
        }
    }

    /// Decode and range-check the value, naming the signal in any error.
    pub fn to_field(&self, name: &str) -> Result<FieldElement, CircuitError> {
        let bytes = match self.encoding {
            Some(encoding) => crate::encoding::parse_value(&self.value, encoding),
            None => crate::encoding::parse_value_auto(&self.value),
        }
        .map_err(|source| CircuitError::InputEncoding {
            name: name.to_string(),
            source,
        })?;
        FieldElement::from_bytes_be(&bytes).map_err(|source| CircuitError::InvalidInputValue {
            name: name.to_string(),
            source,
        })
    }
}

/// Request to compute a witness: a mapping from declared top-level
/// input-signal names to values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WitnessRequest {
    pub inputs: IndexMap<String, InputSignal>,
}

/// Response from witness computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WitnessResponse {
    /// The complete witness: one decimal field element per signal, in the
    /// fixed global numbering (entry 0 is the constant one).
    pub witness: Vec<String>,

    /// Public signals of the main component in decimal: outputs first, then
    /// public inputs, the order a proving collaborator expects.
    pub public_signals: IndexMap<String, String>,

    /// Output signals of the main component in decimal.
    pub outputs: IndexMap<String, String>,
}
