//! Value encoding and decoding utilities
//!
//! Top-level input signals arrive as strings and may use several formats:
//! - Decimal strings: "12345" (arbitrary precision using BigUint)
//! - Hexadecimal: "0x1a2b" or "1a2b" (Ethereum addresses, hashes)
//! - Base58: "5HpH..." (Solana/Bitcoin addresses - 32 bytes)
//! - Base64: "SGVsbG8=" (universal encoding)
//!
//! Decoding produces big-endian bytes; the field layer rejects any decoded
//! value that does not fit in [0, P).

use base64::{engine::general_purpose, Engine as _};
use num_bigint::BigUint;
use num_traits::Num;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueEncodingError {
    #[error("invalid decimal number: {0}")]
    InvalidDecimal(String),

    #[error("invalid hexadecimal: {0}")]
    InvalidHex(String),

    #[error("invalid base58: {0}")]
    InvalidBase58(String),

    #[error("invalid base64: {0}")]
    InvalidBase64(String),

    #[error("unknown encoding format: {0}")]
    UnknownFormat(String),
}

/// Value encoding format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueEncoding {
    /// Decimal string: "12345"
    Decimal,

    /// Hexadecimal with or without 0x prefix: "0x1a2b" or "1a2b"
    Hex,

    /// Base58 encoding (Bitcoin/Solana): "5HpH..."
    Base58,

    /// Base64 encoding: "SGVsbG8="
    Base64,
}

impl Default for ValueEncoding {
    fn default() -> Self {
        ValueEncoding::Decimal
    }
}

/// Parse a value string according to the specified encoding, producing
/// big-endian bytes.
pub fn parse_value(value: &str, encoding: ValueEncoding) -> Result<Vec<u8>, ValueEncodingError> {
    match encoding {
        ValueEncoding::Decimal => parse_decimal(value),
        ValueEncoding::Hex => parse_hex(value),
        ValueEncoding::Base58 => parse_base58(value),
        ValueEncoding::Base64 => parse_base64(value),
    }
}

/// Auto-detect encoding format and parse value
///
/// Detection rules:
/// - Starts with "0x" -> Hex
/// - All digits -> Decimal
/// - Contains base64 chars (+/=) -> Base64
/// - Contains only base58 chars -> Base58
pub fn parse_value_auto(value: &str) -> Result<Vec<u8>, ValueEncodingError> {
    // Try hex first (most specific)
    if value.starts_with("0x") || value.starts_with("0X") {
        return parse_hex(value);
    }

    // Try decimal (simple and common)
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
        return parse_decimal(value);
    }

    // Try base64 (contains +, /, =)
    if value.contains('+') || value.contains('/') || value.contains('=') {
        if let Ok(result) = parse_base64(value) {
            return Ok(result);
        }
    }

    // Try base58 (no 0, O, I, l characters)
    if value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() && c != '0' && c != 'O' && c != 'I' && c != 'l')
    {
        if let Ok(result) = parse_base58(value) {
            return Ok(result);
        }
    }

    Err(ValueEncodingError::UnknownFormat(value.to_string()))
}

fn parse_decimal(value: &str) -> Result<Vec<u8>, ValueEncodingError> {
    if value.is_empty() {
        return Err(ValueEncodingError::InvalidDecimal("empty string".to_string()));
    }

    let num = BigUint::from_str_radix(value, 10)
        .map_err(|_| ValueEncodingError::InvalidDecimal(value.to_string()))?;

    let bytes = num.to_bytes_be();

    // Return at least 1 byte (even for 0)
    if bytes.is_empty() {
        Ok(vec![0])
    } else {
        Ok(bytes)
    }
}

fn parse_hex(value: &str) -> Result<Vec<u8>, ValueEncodingError> {
    let hex_str = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);

    hex::decode(hex_str).map_err(|_| ValueEncodingError::InvalidHex(value.to_string()))
}

fn parse_base58(value: &str) -> Result<Vec<u8>, ValueEncodingError> {
    bs58::decode(value)
        .into_vec()
        .map_err(|_| ValueEncodingError::InvalidBase58(value.to_string()))
}

fn parse_base64(value: &str) -> Result<Vec<u8>, ValueEncodingError> {
    general_purpose::STANDARD
        .decode(value)
        .map_err(|_| ValueEncodingError::InvalidBase64(value.to_string()))
}

/// Convert bytes to decimal string representation
pub fn bytes_to_decimal(bytes: &[u8]) -> String {
    BigUint::from_bytes_be(bytes).to_string()
}

/// Convert bytes to hex string (with 0x prefix)
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}
