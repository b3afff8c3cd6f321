//! Capability traits for entities that can be arranged, plus ready-made
//! entity types.
//!
//! Arrangement operations never own entities; they borrow a mutable slice
//! for the duration of one call and mutate locations through the narrow
//! capability defined here. Any type that can report an anchor location,
//! measure its own bounds, and blend its location toward a target can be
//! arranged — there is no inheritance hierarchy to opt into.

use serde::{Deserialize, Serialize};

use crate::geometry::{
    plane::{Bounds2, Point2, Size2},
    space::{Bounds3, Point3, Size3},
};

/// Capability for entities arrangeable in the plane.
pub trait Spatial2 {
    /// Current anchor location of this entity.
    ///
    /// The anchor is a logical reference point; it need not coincide with
    /// the center of the entity's bounds.
    fn location(&self) -> Point2;

    /// Axis-aligned bounds of this entity, in the same coordinate space as
    /// the container it is arranged within.
    fn calc_bounds(&self) -> Bounds2;

    /// Blends the entity's location toward `target` by `factor`.
    ///
    /// `factor = 0` leaves the location unchanged, `factor = 1` snaps to
    /// the target, intermediate values ease toward it. The factor is not
    /// clamped. The updated location must be observable through
    /// [`location`](Spatial2::location).
    fn move_toward(&mut self, target: Point2, factor: f32);
}

/// Capability for entities arrangeable in space.
pub trait Spatial3 {
    /// Current anchor location of this entity.
    ///
    /// The anchor is a logical reference point; it need not coincide with
    /// the center of the entity's bounds.
    fn location(&self) -> Point3;

    /// Axis-aligned bounds of this entity, in the same coordinate space as
    /// the container it is arranged within.
    fn calc_bounds(&self) -> Bounds3;

    /// Blends the entity's location toward `target` by `factor`.
    ///
    /// `factor = 0` leaves the location unchanged, `factor = 1` snaps to
    /// the target, intermediate values ease toward it. The factor is not
    /// clamped. The updated location must be observable through
    /// [`location`](Spatial3::location).
    fn move_toward(&mut self, target: Point3, factor: f32);
}

/// A planar entity described by a center position and a size.
///
/// The simplest useful [`Spatial2`] implementation: the position doubles as
/// the bounds center, so `calc_bounds` is `position.to_bounds(size)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Placed2 {
    position: Point2,
    size: Size2,
}

impl Placed2 {
    /// Construct a new placed entity from a center position and a size
    pub fn new(position: Point2, size: Size2) -> Self {
        Self { position, size }
    }

    /// Returns the current position of this entity
    pub fn position(self) -> Point2 {
        self.position
    }

    /// Returns the size of this entity
    pub fn size(self) -> Size2 {
        self.size
    }
}

impl Spatial2 for Placed2 {
    fn location(&self) -> Point2 {
        self.position
    }

    fn calc_bounds(&self) -> Bounds2 {
        self.position.to_bounds(self.size)
    }

    fn move_toward(&mut self, target: Point2, factor: f32) {
        self.position = self.position.mix(target, factor);
    }
}

/// A spatial entity described by a center position and a size.
///
/// The simplest useful [`Spatial3`] implementation: the position doubles as
/// the bounds center, so `calc_bounds` is `position.to_bounds(size)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Placed3 {
    position: Point3,
    size: Size3,
}

impl Placed3 {
    /// Construct a new placed entity from a center position and a size
    pub fn new(position: Point3, size: Size3) -> Self {
        Self { position, size }
    }

    /// Returns the current position of this entity
    pub fn position(self) -> Point3 {
        self.position
    }

    /// Returns the size of this entity
    pub fn size(self) -> Size3 {
        self.size
    }
}

impl Spatial3 for Placed3 {
    fn location(&self) -> Point3 {
        self.position
    }

    fn calc_bounds(&self) -> Bounds3 {
        self.position.to_bounds(self.size)
    }

    fn move_toward(&mut self, target: Point3, factor: f32) {
        self.position = self.position.mix(target, factor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placed2_bounds_centered_on_position() {
        let placed = Placed2::new(Point2::new(10.0, 20.0), Size2::new(4.0, 6.0));
        let bounds = placed.calc_bounds();

        assert_eq!(bounds.min_x(), 8.0);
        assert_eq!(bounds.min_y(), 17.0);
        assert_eq!(bounds.max_x(), 12.0);
        assert_eq!(bounds.max_y(), 23.0);
        assert_eq!(bounds.center(), placed.location());
    }

    #[test]
    fn test_placed2_move_toward_snaps_with_full_factor() {
        let mut placed = Placed2::new(Point2::new(0.0, 0.0), Size2::new(2.0, 2.0));
        placed.move_toward(Point2::new(10.0, -4.0), 1.0);
        assert_eq!(placed.location(), Point2::new(10.0, -4.0));
    }

    #[test]
    fn test_placed2_move_toward_zero_factor_is_noop() {
        let mut placed = Placed2::new(Point2::new(3.0, 4.0), Size2::new(2.0, 2.0));
        placed.move_toward(Point2::new(10.0, -4.0), 0.0);
        assert_eq!(placed.location(), Point2::new(3.0, 4.0));
    }

    #[test]
    fn test_placed3_bounds_centered_on_position() {
        let placed = Placed3::new(Point3::new(10.0, 20.0, 30.0), Size3::new(4.0, 6.0, 8.0));
        let bounds = placed.calc_bounds();

        assert_eq!(bounds.min_point(), Point3::new(8.0, 17.0, 26.0));
        assert_eq!(bounds.max_point(), Point3::new(12.0, 23.0, 34.0));
        assert_eq!(bounds.center(), placed.location());
    }

    #[test]
    fn test_placed3_move_toward_eases_by_factor() {
        let mut placed = Placed3::new(Point3::new(0.0, 0.0, 0.0), Size3::new(2.0, 2.0, 2.0));
        placed.move_toward(Point3::new(10.0, 20.0, -10.0), 0.5);
        assert_eq!(placed.location(), Point3::new(5.0, 10.0, -5.0));

        // A second half-step closes half the remaining distance
        placed.move_toward(Point3::new(10.0, 20.0, -10.0), 0.5);
        assert_eq!(placed.location(), Point3::new(7.5, 15.0, -7.5));
    }

    #[test]
    fn test_placed3_zero_size_bounds_degenerate_at_position() {
        let placed = Placed3::new(Point3::new(5.0, 1.0, 5.0), Size3::default());
        let bounds = placed.calc_bounds();

        assert!(bounds.extent().is_zero());
        assert_eq!(bounds.min_point(), placed.location());
        assert_eq!(bounds.max_point(), placed.location());
    }
}
