//! Box-Shadow Edge Widths
//!
//! Approximates how far a CSS `box-shadow` reaches past each edge of its
//! box, with Python bindings via PyO3 and WASM bindings for JavaScript.
//!
//! ## Model
//! A single shadow layer is reduced to four lengths:
//! - **offset-x / offset-y**: shift the shadow right / down
//! - **blur**: extends the solid edge by half its radius on every side
//! - **spread**: grows the shadow box uniformly
//!
//! All lengths are treated as pixels. Widths may be negative where the
//! shadow recedes behind the box.
//!
//! ## Multiple Layers
//! Values with more than one color token (`rgb...` or `#...`) are assumed
//! to list several layers and are reported as unsupported.

pub mod shadow;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use shadow::{
    box_shadow_widths, box_shadow_widths_batch, edge_widths_array, parse_box_shadow,
    EdgeWidths, ShadowError, ShadowGeometry, ShadowResult,
};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use std::collections::HashMap;

    use numpy::{IntoPyArray, PyArray2};
    use pyo3::prelude::*;

    use crate::shadow::{box_shadow_widths as widths_impl, edge_widths_array};

    // ========================================================================
    // Single Declaration
    // ========================================================================

    /// Compute approximate shadow widths past each edge of the box.
    ///
    /// # Arguments
    /// * `shadow` - CSS box-shadow value, e.g. "2px 4px 6px 1px rgba(0,0,0,0.5)"
    ///
    /// # Returns
    /// Dict with keys top, right, bottom, left; None when the value
    /// lists multiple shadow layers
    #[pyfunction]
    pub fn box_shadow_widths(shadow: &str) -> Option<HashMap<&'static str, f64>> {
        widths_impl(shadow).map(|widths| {
            HashMap::from([
                ("top", widths.top),
                ("right", widths.right),
                ("bottom", widths.bottom),
                ("left", widths.left),
            ])
        })
    }

    // ========================================================================
    // Batch
    // ========================================================================

    /// Compute shadow widths for many declarations.
    ///
    /// Runs in parallel with the GIL released.
    ///
    /// # Returns
    /// float64 array of shape (N, 4): top, right, bottom, left.
    /// Unsupported declarations yield a row of NaN.
    #[pyfunction]
    pub fn box_shadow_widths_batch<'py>(
        py: Python<'py>,
        shadows: Vec<String>,
    ) -> Bound<'py, PyArray2<f64>> {
        let result = py.allow_threads(|| edge_widths_array(&shadows));
        result.into_pyarray(py)
    }

    /// Box-shadow widths extension module
    #[pymodule]
    pub fn box_shadow_widths_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(box_shadow_widths, m)?)?;
        m.add_function(wrap_pyfunction!(box_shadow_widths_batch, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::box_shadow_widths_rust;
