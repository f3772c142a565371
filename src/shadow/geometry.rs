//! Shadow geometry and the per-edge width model.
//!
//! A blur of radius `b` is treated as a Gaussian with standard deviation
//! `b / 2`, which visually pushes the solid shadow edge out by half the
//! radius on every side. Spread grows the box uniformly, offsets move it:
//!
//! ```text
//! top    = spread - offset_y + 0.5 * blur
//! right  = spread + offset_x + 0.5 * blur
//! bottom = spread + offset_y + 0.5 * blur
//! left   = spread - offset_x + 0.5 * blur
//! ```

use std::fmt;

/// Fraction of the blur radius that extends past the shadow edge
pub const BLUR_EXTENT_FACTOR: f64 = 0.5;

/// The four positional lengths of a single `box-shadow` layer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShadowGeometry {
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur: f64,
    pub spread: f64,
}

impl ShadowGeometry {
    /// Assign leading values to (offset_x, offset_y, blur, spread).
    ///
    /// Values past the fourth are ignored; missing ones default to `0`.
    pub fn from_values(values: &[f64]) -> Self {
        let at = |i: usize| values.get(i).copied().unwrap_or(0.0);
        Self {
            offset_x: at(0),
            offset_y: at(1),
            blur: at(2),
            spread: at(3),
        }
    }

    /// Approximate visual extent of the shadow beyond each box edge.
    pub fn edge_widths(&self) -> EdgeWidths {
        let blur_extent = BLUR_EXTENT_FACTOR * self.blur;
        EdgeWidths {
            top: self.spread - self.offset_y + blur_extent,
            right: self.spread + self.offset_x + blur_extent,
            bottom: self.spread + self.offset_y + blur_extent,
            left: self.spread - self.offset_x + blur_extent,
        }
    }
}

/// Shadow extent on each side of the box.
///
/// Widths may be negative: the shadow recedes from that edge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeWidths {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl EdgeWidths {
    /// Widths in CSS shorthand order: top, right, bottom, left.
    pub fn as_array(&self) -> [f64; 4] {
        [self.top, self.right, self.bottom, self.left]
    }

    /// Widths with receding edges clamped to zero.
    ///
    /// This is the space a shadow actually occupies outside the box.
    pub fn outset(&self) -> Self {
        Self {
            top: self.top.max(0.0),
            right: self.right.max(0.0),
            bottom: self.bottom.max(0.0),
            left: self.left.max(0.0),
        }
    }

    /// Largest extent over all four edges.
    pub fn max_extent(&self) -> f64 {
        self.as_array().into_iter().fold(f64::NEG_INFINITY, f64::max)
    }
}

impl From<EdgeWidths> for [f64; 4] {
    fn from(widths: EdgeWidths) -> Self {
        widths.as_array()
    }
}

impl fmt::Display for EdgeWidths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px {}px {}px {}px", self.top, self.right, self.bottom, self.left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values_defaults_missing_to_zero() {
        let geometry = ShadowGeometry::from_values(&[3.0, 5.0]);
        assert_eq!(
            geometry,
            ShadowGeometry { offset_x: 3.0, offset_y: 5.0, blur: 0.0, spread: 0.0 }
        );
    }

    #[test]
    fn test_from_values_ignores_extra() {
        let geometry = ShadowGeometry::from_values(&[1.0, 2.0, 3.0, 4.0, 99.0]);
        assert_eq!(geometry.spread, 4.0);
    }

    #[test]
    fn test_edge_widths_blur_and_spread() {
        let geometry = ShadowGeometry { offset_x: 2.0, offset_y: 4.0, blur: 6.0, spread: 1.0 };
        let widths = geometry.edge_widths();
        assert_eq!(widths.as_array(), [0.0, 6.0, 8.0, 2.0]);
    }

    #[test]
    fn test_edge_widths_pure_offset() {
        let geometry = ShadowGeometry::from_values(&[3.0, 5.0, 0.0, 0.0]);
        assert_eq!(geometry.edge_widths().as_array(), [-5.0, 3.0, 5.0, -3.0]);
    }

    #[test]
    fn test_outset_clamps_negative() {
        let widths = EdgeWidths { top: -5.0, right: 3.0, bottom: 5.0, left: -3.0 };
        assert_eq!(widths.outset().as_array(), [0.0, 3.0, 5.0, 0.0]);
    }

    #[test]
    fn test_max_extent() {
        let widths = EdgeWidths { top: 0.0, right: 6.0, bottom: 8.0, left: 2.0 };
        assert_eq!(widths.max_extent(), 8.0);
    }

    #[test]
    fn test_display_shorthand_order() {
        let widths = EdgeWidths { top: 0.0, right: 6.0, bottom: 8.0, left: 2.5 };
        assert_eq!(widths.to_string(), "0px 6px 8px 2.5px");
    }
}
