//! Box-shadow edge width calculation.
//!
//! Turns a CSS `box-shadow` value into the approximate width the shadow
//! occupies past each edge of the box.
//!
//! ## Pipeline
//!
//! 1. **Layer check** - more than one `rgb` / `#` color token means several
//!    layers, which are rejected
//! 2. **Extraction** - numeric lengths followed by `px` or whitespace, in order
//! 3. **Assignment** - first four values become offset-x, offset-y, blur,
//!    spread; missing values are `0`
//! 4. **Widths** - offsets, spread and half the blur radius per edge
//!
//! The layer check is a textual heuristic. A single shadow with a named color
//! never trips it, and two `rgb` substrings always do.
//!
//! ## Example
//!
//! ```
//! use box_shadow_widths_rust::box_shadow_widths;
//!
//! let widths = box_shadow_widths("2px 4px 6px 1px rgba(0,0,0,0.5)").unwrap();
//! assert_eq!(widths.as_array(), [0.0, 6.0, 8.0, 2.0]);
//!
//! assert!(box_shadow_widths("1px 1px #000, 2px 2px #fff").is_none());
//! ```

pub mod batch;
pub mod error;
pub mod geometry;
pub mod tokens;

pub use batch::{box_shadow_widths_batch, edge_widths_array};
pub use error::{ShadowError, ShadowResult};
pub use geometry::{EdgeWidths, ShadowGeometry, BLUR_EXTENT_FACTOR};
pub use tokens::{count_color_indicators, extract_numeric_tokens};

/// Reduce a `box-shadow` value to its single-layer geometry.
///
/// # Errors
/// `ShadowError::MultipleShadows` when more than one color token is present.
pub fn parse_box_shadow(shadow: &str) -> ShadowResult<ShadowGeometry> {
    let color_indicators = count_color_indicators(shadow);
    if color_indicators > 1 {
        tracing::debug!(
            "Rejecting box-shadow '{}': {} color tokens",
            shadow,
            color_indicators
        );
        return Err(ShadowError::MultipleShadows { color_indicators });
    }

    let values = extract_numeric_tokens(shadow);
    let geometry = ShadowGeometry::from_values(&values);
    tracing::trace!(shadow, ?geometry, "Parsed box-shadow");

    Ok(geometry)
}

/// Approximate shadow width past each edge of the box.
///
/// Returns `None` for declarations that appear to list multiple shadow
/// layers. Every other input, including an empty string, yields widths.
pub fn box_shadow_widths(shadow: &str) -> Option<EdgeWidths> {
    parse_box_shadow(shadow).ok().map(|geometry| geometry.edge_widths())
}
