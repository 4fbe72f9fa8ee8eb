use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A raw two-corner bounding box as reported by recognition backends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BoundingBox {
    /// X coordinate of the top-left corner
    pub x_min: f64,
    /// Y coordinate of the top-left corner
    pub y_min: f64,
    /// X coordinate of the bottom-right corner
    pub x_max: f64,
    /// Y coordinate of the bottom-right corner
    pub y_max: f64,
}

impl BoundingBox {
    /// Create a new bounding box from two corners.
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Box width; zero when the corners are inverted.
    pub fn width(&self) -> f64 {
        (self.x_max - self.x_min).max(0.0)
    }

    /// Box height; zero when the corners are inverted.
    pub fn height(&self) -> f64 {
        (self.y_max - self.y_min).max(0.0)
    }

    /// Covered area in square pixels.
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Check if the corners are ordered (x_max >= x_min, y_max >= y_min).
    pub fn is_valid(&self) -> bool {
        self.x_max >= self.x_min && self.y_max >= self.y_min
    }
}

/// The canonical box form consumed by downstream aggregation, regardless of
/// which detector adapter produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FaceBox {
    /// Distance from the top edge of the frame
    pub top: f64,
    /// Distance from the left edge of the frame
    pub left: f64,
    /// Box width (never negative)
    pub width: f64,
    /// Box height (never negative)
    pub height: f64,
}

impl From<BoundingBox> for FaceBox {
    fn from(raw: BoundingBox) -> Self {
        Self {
            top: raw.y_min,
            left: raw.x_min,
            width: raw.width(),
            height: raw.height(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area() {
        let raw = BoundingBox::new(0.0, 0.0, 50.0, 50.0);
        assert_eq!(raw.area(), 2500.0);
    }

    #[test]
    fn test_conversion_round_trips() {
        let raw = BoundingBox::new(10.0, 20.0, 110.0, 70.0);
        let canonical = FaceBox::from(raw);

        assert_eq!(canonical.top, 20.0);
        assert_eq!(canonical.left, 10.0);
        assert_eq!(canonical.width, 100.0);
        assert_eq!(canonical.height, 50.0);

        // Bijective for valid boxes: the corners are recoverable.
        assert_eq!(canonical.left + canonical.width, raw.x_max);
        assert_eq!(canonical.top + canonical.height, raw.y_max);
    }

    #[test]
    fn test_inverted_corners_clamp_to_zero() {
        let raw = BoundingBox::new(50.0, 50.0, 10.0, 10.0);
        assert!(!raw.is_valid());
        assert_eq!(raw.area(), 0.0);

        let canonical = FaceBox::from(raw);
        assert_eq!(canonical.width, 0.0);
        assert_eq!(canonical.height, 0.0);
    }
}
