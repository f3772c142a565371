//! WebAssembly exports for box-shadow edge widths.
//!
//! These functions are exposed to JavaScript via wasm-bindgen.
//!
//! Widths are returned as flat `Float64Array`s in CSS shorthand order
//! (top, right, bottom, left). The batch export runs single-threaded since
//! the rayon pool is not available in WASM environments.

use wasm_bindgen::prelude::*;

use crate::shadow::box_shadow_widths;

/// Compute shadow widths for one `box-shadow` value.
///
/// # Arguments
/// * `shadow` - Raw CSS `box-shadow` value
///
/// # Returns
/// `[top, right, bottom, left]`, or `undefined` when the value lists
/// multiple shadow layers
#[wasm_bindgen]
pub fn box_shadow_widths_wasm(shadow: &str) -> Option<Vec<f64>> {
    box_shadow_widths(shadow).map(|widths| widths.as_array().to_vec())
}

/// Compute shadow widths for many `box-shadow` values.
///
/// # Arguments
/// * `shadows` - Raw CSS `box-shadow` values
///
/// # Returns
/// Flat array of length `shadows.length * 4`; unsupported values produce
/// four NaN entries
#[wasm_bindgen]
pub fn box_shadow_widths_batch_wasm(shadows: Vec<String>) -> Vec<f64> {
    shadows
        .iter()
        .flat_map(|shadow| match box_shadow_widths(shadow) {
            Some(widths) => widths.as_array(),
            None => [f64::NAN; 4],
        })
        .collect()
}
