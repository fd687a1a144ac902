//! WASM bindings for in-browser witness computation

mod bindings;

pub use bindings::*;
