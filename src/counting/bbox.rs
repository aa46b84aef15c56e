use serde::{Deserialize, Serialize};

/// Integer pixel coordinate, used for box centers and trail points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Bounding box in pixel coordinates, TLBR format.
///
/// The upstream tracker reports boxes as `(x1, y1, x2, y2)`; nothing here
/// enforces ordering, see [`BBox::is_well_formed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BBox {
    /// Top-left x coordinate
    pub x1: i32,
    /// Top-left y coordinate
    pub y1: i32,
    /// Bottom-right x coordinate
    pub x2: i32,
    /// Bottom-right y coordinate
    pub y2: i32,
}

impl BBox {
    /// Create a box from TLBR coordinates.
    #[inline]
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Create a box from TLWH format (top-left x, top-left y, width, height).
    #[inline]
    pub fn from_tlwh(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x.saturating_add(width),
            y2: y.saturating_add(height),
        }
    }

    /// Create a box from float TLBR coordinates, truncating each toward zero.
    #[inline]
    pub fn from_tlbr_f32(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x1: x1 as i32,
            y1: y1 as i32,
            x2: x2 as i32,
            y2: y2 as i32,
        }
    }

    /// Convert to TLBR format: (x1, y1, x2, y2).
    #[inline]
    pub fn to_tlbr(&self) -> [i32; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    #[inline]
    pub fn width(&self) -> i64 {
        self.x2 as i64 - self.x1 as i64
    }

    #[inline]
    pub fn height(&self) -> i64 {
        self.y2 as i64 - self.y1 as i64
    }

    /// Get the area of the bounding box. Zero for inverted boxes.
    #[inline]
    pub fn area(&self) -> i64 {
        self.width().max(0) * self.height().max(0)
    }

    /// `x2 >= x1` and `y2 >= y1`. Degenerate (zero-size) boxes are accepted.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.x2 >= self.x1 && self.y2 >= self.y1
    }

    /// Center of the box, rounded toward negative infinity.
    #[inline]
    pub fn center(&self) -> Point {
        Point {
            x: floor_mid(self.x1, self.x2),
            y: floor_mid(self.y1, self.y2),
        }
    }
}

// The midpoint of two i32 values always fits back into i32.
#[inline]
fn floor_mid(a: i32, b: i32) -> i32 {
    (a as i64 + b as i64).div_euclid(2) as i32
}
