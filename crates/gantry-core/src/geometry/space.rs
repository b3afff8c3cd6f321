//! Spatial (3D) geometric primitives.

use serde::{Deserialize, Serialize};

/// A 3D point representing a position in arrangement coordinate space.
///
/// The spatial counterpart of [`Point2`](super::plane::Point2), extended by
/// a z-coordinate. [`Point3::mix`] is the linear-blend primitive shared by
/// eased and instant movement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    x: f32,
    y: f32,
    z: f32,
}

impl Point3 {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Returns the z-coordinate of the point
    pub fn z(self) -> f32 {
        self.z
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

    /// Creates a new point with the specified z-coordinate
    pub fn with_z(mut self, z: f32) -> Self {
        self.z = z;
        self
    }

    /// Checks if all three coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point3) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point3) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point3) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
            z: (self.z + other.z) / 2.0,
        }
    }

    /// Multiplies all three coordinates by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
            z: self.z * factor,
        }
    }

    /// Returns a new point with absolute values of all three coordinates
    pub fn abs(self) -> Self {
        Self {
            x: self.x.abs(),
            y: self.y.abs(),
            z: self.z.abs(),
        }
    }

    /// Blends this point toward another by a factor.
    ///
    /// Computes `self + t * (other - self)` per coordinate: `t = 0` returns
    /// this point, `t = 1` returns `other`, intermediate values ease
    /// between them. The factor is not clamped.
    pub fn mix(self, other: Point3, t: f32) -> Self {
        Self {
            x: self.x + t * (other.x - self.x),
            y: self.y + t * (other.y - self.y),
            z: self.z + t * (other.z - self.z),
        }
    }

    /// Converts a point and size into a bounds volume
    ///
    /// The point is treated as the center of the bounds, and the size
    /// is distributed equally in all directions around that center.
    pub fn to_bounds(self, size: Size3) -> Bounds3 {
        Bounds3::new_from_center(self, size)
    }
}

/// Represents the dimensions of an element with width, height and depth
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size3 {
    width: f32,
    height: f32,
    depth: f32,
}

impl Size3 {
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns the depth dimension of this size
    pub fn depth(self) -> f32 {
        self.depth
    }

    /// Returns a new Size with the maximum of each dimension between this size and another
    pub fn max(self, other: Size3) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
            depth: self.depth.max(other.depth),
        }
    }

    /// Multiplies all three dimensions by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
            depth: self.depth * factor,
        }
    }

    /// Returns a new Size with absolute values of all three dimensions
    pub fn abs(self) -> Self {
        Self {
            width: self.width.abs(),
            height: self.height.abs(),
            depth: self.depth.abs(),
        }
    }

    /// Returns true if all three dimensions are zero
    pub fn is_zero(self) -> bool {
        self.width == 0.0 && self.height == 0.0 && self.depth == 0.0
    }
}

/// Represents an axis-aligned bounding volume with minimum and maximum coordinates.
///
/// Gantry never validates that `min <= max` on each axis; callers own that
/// invariant. [`Bounds3::extent`] is unsigned, so an inverted bounds still
/// reports a positive size and arrangement degrades to a mirrored layout
/// rather than failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds3 {
    min_x: f32,
    min_y: f32,
    min_z: f32,
    max_x: f32,
    max_y: f32,
    max_z: f32,
}

impl Bounds3 {
    /// Creates a new bounds from minimum and maximum corner points
    pub fn new(min: Point3, max: Point3) -> Self {
        Self {
            min_x: min.x,
            min_y: min.y,
            min_z: min.z,
            max_x: max.x,
            max_y: max.y,
            max_z: max.z,
        }
    }

    /// Creates a new bounds from a center point and a size
    pub fn new_from_center(center: Point3, size: Size3) -> Self {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;
        let half_depth = size.depth / 2.0;
        Self {
            min_x: center.x - half_width,
            min_y: center.y - half_height,
            min_z: center.z - half_depth,
            max_x: center.x + half_width,
            max_y: center.y + half_height,
            max_z: center.z + half_depth,
        }
    }

    /// Creates a new bounds from a minimum corner point and a size
    pub fn new_from_min(min: Point3, size: Size3) -> Self {
        Self {
            min_x: min.x,
            min_y: min.y,
            min_z: min.z,
            max_x: min.x + size.width,
            max_y: min.y + size.height,
            max_z: min.z + size.depth,
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

    /// Returns the minimum z-coordinate of the bounds
    pub fn min_z(self) -> f32 {
        self.min_z
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the maximum z-coordinate of the bounds
    pub fn max_z(self) -> f32 {
        self.max_z
    }

    /// Returns the minimum corner as a Point
    pub fn min_point(self) -> Point3 {
        Point3 {
            x: self.min_x,
            y: self.min_y,
            z: self.min_z,
        }
    }

    /// Returns the maximum corner as a Point
    pub fn max_point(self) -> Point3 {
        Point3 {
            x: self.max_x,
            y: self.max_y,
            z: self.max_z,
        }
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point3 {
        Point3::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
            (self.min_z + self.max_z) / 2.0,
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

    /// Returns the depth of the bounds
    pub fn depth(self) -> f32 {
        self.max_z - self.min_z
    }

    /// Returns the unsigned per-axis size of the bounds.
    ///
    /// The extent is taken component-wise as `|max - min|`, so bounds with
    /// inverted extrema still yield a sensible positive size.
    pub fn extent(self) -> Size3 {
        Size3 {
            width: (self.max_x - self.min_x).abs(),
            height: (self.max_y - self.min_y).abs(),
            depth: (self.max_z - self.min_z).abs(),
        }
    }

    /// Merges two bounds to create a larger bounds that contains both
    ///
    /// The resulting bounds will have the minimum values of both bounds for
    /// each minimum coordinate, and the maximum values for each maximum.
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            min_z: self.min_z.min(other.min_z),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
            max_z: self.max_z.max(other.max_z),
        }
    }

    /// Moves the bounds by the specified offset
    ///
    /// This translates both the minimum and maximum coordinates by the given amount.
    pub fn translate(&self, offset: Point3) -> Self {
        Self {
            min_x: self.min_x + offset.x,
            min_y: self.min_y + offset.y,
            min_z: self.min_z + offset.z,
            max_x: self.max_x + offset.x,
            max_y: self.max_y + offset.y,
            max_z: self.max_z + offset.z,
        }
    }
}
