//! Edge widths for many declarations at once.
//!
//! Each declaration is independent, so work is spread across the rayon
//! thread pool. Output order always matches input order.

use ndarray::Array2;
use rayon::prelude::*;

use super::box_shadow_widths;
use super::geometry::EdgeWidths;

/// Compute edge widths for every declaration in parallel.
///
/// # Arguments
/// * `shadows` - Raw `box-shadow` values
///
/// # Returns
/// One entry per input, `None` where the declaration is unsupported
pub fn box_shadow_widths_batch<S>(shadows: &[S]) -> Vec<Option<EdgeWidths>>
where
    S: AsRef<str> + Sync,
{
    shadows
        .par_iter()
        .map(|shadow| box_shadow_widths(shadow.as_ref()))
        .collect()
}

/// Compute edge widths into an (N, 4) array.
///
/// Columns are top, right, bottom, left. Rows for unsupported declarations
/// are filled with NaN.
pub fn edge_widths_array<S>(shadows: &[S]) -> Array2<f64>
where
    S: AsRef<str> + Sync,
{
    let widths = box_shadow_widths_batch(shadows);
    let mut output = Array2::<f64>::from_elem((widths.len(), 4), f64::NAN);

    for (mut row, edges) in output.outer_iter_mut().zip(&widths) {
        if let Some(edges) = edges {
            for (cell, value) in row.iter_mut().zip(edges.as_array()) {
                *cell = value;
            }
        }
    }

    output
}
