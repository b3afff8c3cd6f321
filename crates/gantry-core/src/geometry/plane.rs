//! Planar (2D) geometric primitives.

use serde::{Deserialize, Serialize};

/// A 2D point representing a position in arrangement coordinate space.
///
/// Points use `f32` coordinates and provide the small amount of vector math
/// the arrangement operations need. [`Point2::mix`] is the linear-blend
/// primitive shared by eased and instant movement.
///
/// # Examples
///
/// ```
/// # use gantry_core::geometry::plane::Point2;
/// let p1 = Point2::new(10.0, 20.0);
/// let p2 = Point2::new(5.0, 5.0);
///
/// // Vector addition
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
///
/// // Half-way blend
/// let mid = p1.mix(p2, 0.5);
/// assert_eq!(mid.x(), 7.5);
/// assert_eq!(mid.y(), 12.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    x: f32,
    y: f32,
}

impl Point2 {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Creates a new point with the specified x-coordinate
    pub fn with_x(mut self, x: f32) -> Self {
        self.x = x;
        self
    }

    /// Creates a new point with the specified y-coordinate
    pub fn with_y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }

    /// Checks if both x and y coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point2) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point2) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point2) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Multiplies both coordinates by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Returns a new point with absolute values of both coordinates
    pub fn abs(self) -> Self {
        Self {
            x: self.x.abs(),
            y: self.y.abs(),
        }
    }

    /// Blends this point toward another by a factor.
    ///
    /// Computes `self + t * (other - self)` per coordinate: `t = 0` returns
    /// this point, `t = 1` returns `other`, intermediate values ease
    /// between them. The factor is not clamped.
    pub fn mix(self, other: Point2, t: f32) -> Self {
        Self {
            x: self.x + t * (other.x - self.x),
            y: self.y + t * (other.y - self.y),
        }
    }

    /// Converts a point and size into a bounds rectangle
    ///
    /// The point is treated as the center of the bounds, and the size
    /// is distributed equally in all directions around that center.
    pub fn to_bounds(self, size: Size2) -> Bounds2 {
        Bounds2::new_from_center(self, size)
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size2 {
    width: f32,
    height: f32,
}

impl Size2 {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns a new Size with the maximum width and height between this size and another
    pub fn max(self, other: Size2) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// Multiplies both dimensions by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }

    /// Returns a new Size with absolute values of both dimensions
    pub fn abs(self) -> Self {
        Self {
            width: self.width.abs(),
            height: self.height.abs(),
        }
    }

    /// Returns true if both width and height are zero
    pub fn is_zero(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates.
///
/// Gantry never validates that `min <= max` on each axis; callers own that
/// invariant. [`Bounds2::extent`] is unsigned, so an inverted bounds still
/// reports a positive size and arrangement degrades to a mirrored layout
/// rather than failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds2 {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds2 {
    /// Creates a new bounds from minimum and maximum corner points
    pub fn new(min: Point2, max: Point2) -> Self {
        Self {
            min_x: min.x,
            min_y: min.y,
            max_x: max.x,
            max_y: max.y,
        }
    }

    /// Creates a new bounds from a center point and a size
    pub fn new_from_center(center: Point2, size: Size2) -> Self {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;
        Self {
            min_x: center.x - half_width,
            min_y: center.y - half_height,
            max_x: center.x + half_width,
            max_y: center.y + half_height,
        }
    }

    /// Creates a new bounds from a minimum corner point and a size
    pub fn new_from_min(min: Point2, size: Size2) -> Self {
        Self {
            min_x: min.x,
            min_y: min.y,
            max_x: min.x + size.width,
            max_y: min.y + size.height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the minimum corner as a Point
    pub fn min_point(self) -> Point2 {
        Point2 {
            x: self.min_x,
            y: self.min_y,
        }
    }

    /// Returns the maximum corner as a Point
    pub fn max_point(self) -> Point2 {
        Point2 {
            x: self.max_x,
            y: self.max_y,
        }
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point2 {
        Point2::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the unsigned per-axis size of the bounds.
    ///
    /// The extent is taken component-wise as `|max - min|`, so bounds with
    /// inverted extrema still yield a sensible positive size.
    pub fn extent(self) -> Size2 {
        Size2 {
            width: (self.max_x - self.min_x).abs(),
            height: (self.max_y - self.min_y).abs(),
        }
    }

    /// Merges two bounds to create a larger bounds that contains both
    ///
    /// The resulting bounds will have the minimum values of both bounds for
    /// min_x and min_y, and the maximum values for max_x and max_y.
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Moves the bounds by the specified offset
    ///
    /// This translates both the minimum and maximum coordinates by the given amount.
    pub fn translate(&self, offset: Point2) -> Self {
        Self {
            min_x: self.min_x + offset.x,
            min_y: self.min_y + offset.y,
            max_x: self.max_x + offset.x,
            max_y: self.max_y + offset.y,
        }
    }
}
