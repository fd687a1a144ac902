//! Field arithmetic over the BN254 scalar field
//!
//! Every signal value in a circuit is an element of the prime field with
//! modulus
//!
//! ```text
//! P = 21888242871839275222246405745257275088548364400416034343698204186575808495617
//! ```
//!
//! [`FieldElement`] keeps its value reduced at all times, so `add`, `sub` and
//! `mul` are total: there are no error conditions and subtraction wraps
//! modularly instead of ever producing a negative representation.
//!
//! The frequently used constants 0 and 1 are available as `&'static`
//! references ([`FieldElement::zero`], [`FieldElement::one`]) so procedures
//! can reference them without fresh allocation, like the constant pool of a
//! generated witness calculator.

use std::fmt;
use std::sync::LazyLock;

use num_bigint::BigUint;
use num_traits::{Num, One, Zero};
use thiserror::Error;

/// Decimal expansion of the field modulus P (BN254 scalar field order).
pub const MODULUS_DECIMAL: &str =
    "21888242871839275222246405745257275088548364400416034343698204186575808495617";

static MODULUS: LazyLock<BigUint> = LazyLock::new(|| {
    BigUint::from_str_radix(MODULUS_DECIMAL, 10).expect("modulus literal is valid decimal")
});

/// Constant table: index 0 is the field zero, index 1 the field one.
static CONSTANTS: LazyLock<[FieldElement; 2]> = LazyLock::new(|| {
    [
        FieldElement(BigUint::zero()),
        FieldElement(BigUint::one()),
    ]
});

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("invalid decimal number: {0}")]
    InvalidDecimal(String),

    #[error("value {0} is outside the field range [0, P)")]
    OutOfRange(String),
}

/// An element of the field, always reduced to [0, P).
///
/// Equality and ordering are defined only within this range; two elements
/// compare equal iff their reduced representations are identical.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldElement(BigUint);

impl FieldElement {
    /// The field modulus P.
    pub fn modulus() -> &'static BigUint {
        &MODULUS
    }

    /// The additive identity, without allocation.
    pub fn zero() -> &'static FieldElement {
        &CONSTANTS[0]
    }

    /// The multiplicative identity, without allocation.
    pub fn one() -> &'static FieldElement {
        &CONSTANTS[1]
    }

    /// Look up an entry of the constant table.
    pub fn constant(index: usize) -> Option<&'static FieldElement> {
        CONSTANTS.get(index)
    }

    /// The maximum representable element, P - 1.
    pub fn max_value() -> FieldElement {
        FieldElement(Self::modulus() - 1u32)
    }

    /// Build an element from a machine integer. Always in range since
    /// u64::MAX is far below P.
    pub fn from_u64(value: u64) -> FieldElement {
        FieldElement(BigUint::from(value))
    }

    /// Parse a decimal string, rejecting values outside [0, P).
    pub fn from_decimal(value: &str) -> Result<FieldElement, FieldError> {
        let num = BigUint::from_str_radix(value, 10)
            .map_err(|_| FieldError::InvalidDecimal(value.to_string()))?;
        Self::from_biguint(num)
    }

    /// Interpret big-endian bytes as an integer, rejecting values outside
    /// [0, P). This is the bridge from the value-encoding layer.
    pub fn from_bytes_be(bytes: &[u8]) -> Result<FieldElement, FieldError> {
        Self::from_biguint(BigUint::from_bytes_be(bytes))
    }

    fn from_biguint(num: BigUint) -> Result<FieldElement, FieldError> {
        if &num >= Self::modulus() {
            return Err(FieldError::OutOfRange(num.to_string()));
        }
        Ok(FieldElement(num))
    }

    /// Modular addition: (a + b) mod P.
    pub fn add(&self, other: &FieldElement) -> FieldElement {
        FieldElement((&self.0 + &other.0) % Self::modulus())
    }

    /// Modular subtraction: (a - b) mod P, wrapping through P instead of
    /// going negative.
    pub fn sub(&self, other: &FieldElement) -> FieldElement {
        FieldElement((&self.0 + Self::modulus() - &other.0) % Self::modulus())
    }

    /// Modular multiplication: (a * b) mod P.
    pub fn mul(&self, other: &FieldElement) -> FieldElement {
        FieldElement((&self.0 * &other.0) % Self::modulus())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Decimal string form, the representation used in witness output.
    pub fn to_decimal(&self) -> String {
        self.0.to_string()
    }

    /// Hex string form with 0x prefix.
    pub fn to_hex(&self) -> String {
        format!("0x{}", self.0.to_str_radix(16))
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_sub_roundtrip() {
        // sub(add(a, b), b) == a for arbitrary elements
        let a = FieldElement::from_decimal("123456789123456789123456789").unwrap();
        let b = FieldElement::max_value();
        assert_eq!(a.add(&b).sub(&b), a);
    }

    #[test]
    fn test_mul_identities() {
        let a = FieldElement::from_u64(987654321);
        assert_eq!(a.mul(FieldElement::one()), a);
        assert_eq!(a.mul(FieldElement::zero()), *FieldElement::zero());
    }

    #[test]
    fn test_sub_wraps_through_modulus() {
        // 0 - 1 == P - 1, never a negative representation
        let wrapped = FieldElement::zero().sub(FieldElement::one());
        assert_eq!(wrapped, FieldElement::max_value());
    }

    #[test]
    fn test_add_reduces_at_modulus() {
        // (P - 1) + 1 == 0
        let sum = FieldElement::max_value().add(FieldElement::one());
        assert!(sum.is_zero());
    }

    #[test]
    fn test_from_decimal_rejects_modulus() {
        let err = FieldElement::from_decimal(MODULUS_DECIMAL).unwrap_err();
        assert!(matches!(err, FieldError::OutOfRange(_)));
    }

    #[test]
    fn test_from_decimal_accepts_max() {
        let max = FieldElement::max_value();
        assert_eq!(FieldElement::from_decimal(&max.to_decimal()).unwrap(), max);
    }

    #[test]
    fn test_from_bytes_be() {
        let elem = FieldElement::from_bytes_be(&[0x01, 0x00]).unwrap();
        assert_eq!(elem, FieldElement::from_u64(256));
    }

    #[test]
    fn test_constant_table() {
        assert_eq!(FieldElement::constant(0), Some(FieldElement::zero()));
        assert_eq!(FieldElement::constant(1), Some(FieldElement::one()));
        assert_eq!(FieldElement::constant(2), None);
    }

    #[test]
    fn test_decimal_rendering() {
        assert_eq!(FieldElement::from_u64(42).to_decimal(), "42");
        assert_eq!(FieldElement::from_u64(255).to_hex(), "0xff");
    }
}
