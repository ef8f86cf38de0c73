use std::fmt;

/// A face rectangle in pixel space, `(start_x, start_y)` to `(end_x, end_y)`.
///
/// Coordinates are signed so that boxes extending past the top-left edge can
/// be represented before clamping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    pub start_x: i32,
    pub start_y: i32,
    pub end_x: i32,
    pub end_y: i32,
}

impl BoundingBox {
    pub fn new(start_x: i32, start_y: i32, end_x: i32, end_y: i32) -> Self {
        Self {
            start_x,
            start_y,
            end_x,
            end_y,
        }
    }

    /// Scales a box given in `[0, 1]` image-relative coordinates to pixels.
    ///
    /// Fractional pixels are truncated toward zero.
    pub fn from_normalized(coords: [f32; 4], width: u32, height: u32) -> Self {
        let (w, h) = (width as f64, height as f64);
        Self {
            start_x: (coords[0] as f64 * w) as i32,
            start_y: (coords[1] as f64 * h) as i32,
            end_x: (coords[2] as f64 * w) as i32,
            end_y: (coords[3] as f64 * h) as i32,
        }
    }

    /// Clamps the start corner to `>= 0` and the end corner to the last
    /// valid pixel row/column.
    pub fn clamp_to(&self, width: u32, height: u32) -> Self {
        Self {
            start_x: self.start_x.max(0),
            start_y: self.start_y.max(0),
            end_x: self.end_x.min(width as i32 - 1),
            end_y: self.end_y.min(height as i32 - 1),
        }
    }

    pub fn width(&self) -> i32 {
        self.end_x - self.start_x
    }

    pub fn height(&self) -> i32 {
        self.end_y - self.start_y
    }

    pub fn is_degenerate(&self) -> bool {
        self.start_x >= self.end_x || self.start_y >= self.end_y
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {})-({}, {})",
            self.start_x, self.start_y, self.end_x, self.end_y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_from_normalized_scales_by_dimensions() {
        let b = BoundingBox::from_normalized([0.1, 0.2, 0.5, 0.6], 200, 100);
        assert_eq!(b, BoundingBox::new(20, 20, 100, 60));
    }

    #[test]
    fn test_from_normalized_truncates_toward_zero() {
        // 0.333 * 100 = 33.3, -0.015 * 100 = -1.5
        let b = BoundingBox::from_normalized([0.333, -0.015, 0.999, 0.5], 100, 100);
        assert_eq!(b.start_x, 33);
        assert_eq!(b.start_y, -1);
        assert_eq!(b.end_x, 99);
    }

    #[test]
    fn test_clamp_limits_end_to_last_pixel() {
        let b = BoundingBox::new(-5, -3, 150, 90).clamp_to(100, 80);
        assert_eq!(b, BoundingBox::new(0, 0, 99, 79));
    }

    #[test]
    fn test_clamp_leaves_inner_box_untouched() {
        let b = BoundingBox::new(10, 10, 50, 50);
        assert_eq!(b.clamp_to(100, 100), b);
    }

    #[test]
    fn test_width_and_height() {
        let b = BoundingBox::new(10, 20, 40, 70);
        assert_eq!(b.width(), 30);
        assert_eq!(b.height(), 50);
    }

    #[rstest]
    #[case::zero_width(BoundingBox::new(10, 0, 10, 20), true)]
    #[case::zero_height(BoundingBox::new(0, 10, 20, 10), true)]
    #[case::inverted(BoundingBox::new(30, 0, 20, 20), true)]
    #[case::regular(BoundingBox::new(0, 0, 1, 1), false)]
    fn test_is_degenerate(#[case] b: BoundingBox, #[case] expected: bool) {
        assert_eq!(b.is_degenerate(), expected);
    }

    #[test]
    fn test_display() {
        assert_eq!(BoundingBox::new(1, 2, 3, 4).to_string(), "(1, 2)-(3, 4)");
    }
}
