//! WASM API bindings
//!
//! This module provides JavaScript-accessible functions for computing
//! witnesses for the built-in voter-eligibility circuit, so a browser can
//! run the same engine the CLI uses.
//!
//! # Example Usage (JavaScript)
//!
//! ```javascript
//! import init, { compute_witness } from './witgen_core.js';
//!
//! await init();
//!
//! const request = {
//!   inputs: {
//!     regionHash:   { value: "11" },
//!     electionId:   { value: "1" },
//!     voterAddress: { value: "0x2a", encoding: "hex" },
//!     region:       { value: "3" },
//!     isRegistered: { value: "1" },
//!     isEligible:   { value: "1" }
//!   }
//! };
//!
//! const response = JSON.parse(compute_witness(JSON.stringify(request)));
//! console.log("valid:", response.outputs.valid);
//! ```

use wasm_bindgen::prelude::*;

use crate::api::{self, WitnessRequest};

/// Version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize WASM module
///
/// Call this function once before using any other functions.
/// It sets up panic hooks for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn wasm_init() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

/// Get the version of witgen-core
#[wasm_bindgen]
pub fn version() -> String {
    VERSION.to_string()
}

/// Compute a witness for the built-in voter-eligibility circuit
///
/// Takes a JSON string representing a WitnessRequest and returns a JSON
/// string representing a WitnessResponse.
///
/// # Arguments
///
/// * `request_json` - JSON string with the top-level input signals
///
/// # Returns
///
/// JSON string with the full witness vector, public signals, and outputs
#[wasm_bindgen]
pub fn compute_witness(request_json: &str) -> Result<String, JsValue> {
    let request: WitnessRequest = serde_json::from_str(request_json).map_err(|e| {
        let msg = format!("Invalid request JSON: {}", e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })?;

    let response = api::compute_voter_eligibility(&request).map_err(|e| {
        log_error(&format!("Witness computation failed: {}", e));
        JsValue::from_str(&e)
    })?;

    serde_json::to_string(&response).map_err(|e| {
        let msg = format!("Failed to serialize response: {}", e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

/// Report an error to the browser console alongside the returned JsValue.
fn log_error(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    log::error!("{}", msg);
}
