// MwIcons - core/params.rs
//
// Geometry derived from a single pixel size.
// Pure integer arithmetic with truncating division; no I/O.

use crate::util::constants::{MIN_STROKE_WIDTH, OUTER_RING_MARGIN};
use crate::util::error::{IconError, Result};

/// Layout of one icon, computed from its pixel size alone.
///
/// All coordinates are in user units with the origin at the top-left corner
/// of a `size` x `size` canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconParams {
    /// Width and height of the document.
    pub size: u32,
    /// X and Y of both circles and the text anchor.
    pub center: u32,
    /// Outer circle radius.
    pub radius: u32,
    /// Inner circle radius.
    pub inner_radius: u32,
    pub check_x1: u32,
    pub check_y1: u32,
    pub check_x2: u32,
    pub check_y2: u32,
    pub check_x3: u32,
    pub check_y3: u32,
    /// Checkmark stroke width, never below 1.
    pub stroke_width: u32,
    pub font_size: u32,
    /// Text baseline.
    pub text_y: u32,
}

/// Derive the icon layout for `size`.
///
/// Returns `IconError::InvalidSize` for `0`. Sizes below 4 have no room for
/// the outer ring margin; their outer radius is clamped to 0, which SVG
/// renders as "no circle".
pub fn derive_parameters(size: u32) -> Result<IconParams> {
    if size == 0 {
        return Err(IconError::InvalidSize { size });
    }

    let center = size / 2;
    let radius = match center.checked_sub(OUTER_RING_MARGIN) {
        Some(r) => r,
        None => {
            tracing::warn!(size, "Icon size too small for the outer ring; radius clamped to 0");
            0
        }
    };
    let font_size = size / 4;

    let params = IconParams {
        size,
        center,
        radius,
        inner_radius: size / 3,
        check_x1: size / 4,
        check_y1: center,
        check_x2: center - size / 8,
        check_y2: center + size / 6,
        check_x3: size - size / 4,
        check_y3: center - size / 6,
        stroke_width: (size / 16).max(MIN_STROKE_WIDTH),
        font_size,
        text_y: center + font_size / 3,
    };

    tracing::trace!(?params, "Derived icon parameters");
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::constants::MIN_RINGED_SIZE;

    #[test]
    fn test_size_16_matches_reference_layout() {
        let p = derive_parameters(16).unwrap();
        assert_eq!(p.center, 8);
        assert_eq!(p.radius, 6);
        assert_eq!(p.inner_radius, 5);
        assert_eq!(p.stroke_width, 1);
        assert_eq!(p.font_size, 4);
        assert_eq!(p.text_y, 9);
        assert_eq!((p.check_x1, p.check_y1), (4, 8));
        assert_eq!((p.check_x2, p.check_y2), (6, 10));
        assert_eq!((p.check_x3, p.check_y3), (12, 6));
    }

    #[test]
    fn test_size_128_layout() {
        let p = derive_parameters(128).unwrap();
        assert_eq!(p.center, 64);
        assert_eq!(p.radius, 62);
        assert_eq!(p.inner_radius, 42);
        assert_eq!(p.stroke_width, 8);
        assert_eq!(p.font_size, 32);
        assert_eq!(p.text_y, 74);
        assert_eq!((p.check_x2, p.check_y2), (48, 85));
        assert_eq!((p.check_x3, p.check_y3), (96, 43));
    }

    #[test]
    fn test_inner_radius_below_outer_from_ringed_size() {
        for size in MIN_RINGED_SIZE..=1024 {
            let p = derive_parameters(size).unwrap();
            assert!(
                p.inner_radius < p.radius,
                "size {size}: inner {} >= outer {}",
                p.inner_radius,
                p.radius
            );
        }
    }

    #[test]
    fn test_stroke_width_never_below_one() {
        for size in 1..=1024 {
            assert!(derive_parameters(size).unwrap().stroke_width >= 1, "size {size}");
        }
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(
            derive_parameters(0),
            Err(IconError::InvalidSize { size: 0 })
        ));
    }

    #[test]
    fn test_tiny_sizes_clamp_outer_radius() {
        for size in 1..4 {
            assert_eq!(derive_parameters(size).unwrap().radius, 0, "size {size}");
        }
        assert_eq!(derive_parameters(4).unwrap().radius, 0);
        assert_eq!(derive_parameters(6).unwrap().radius, 1);
    }

    #[test]
    fn test_same_size_same_params() {
        assert_eq!(derive_parameters(48).unwrap(), derive_parameters(48).unwrap());
    }
}
