//! Input value encoding and decoding

mod value;

pub use value::{
    bytes_to_decimal, bytes_to_hex, parse_value, parse_value_auto, ValueEncoding,
    ValueEncodingError,
};
