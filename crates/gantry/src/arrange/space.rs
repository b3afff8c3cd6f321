//! Spatial (3D) arrangement operations.
//!
//! Axis vocabulary follows the original arrangement conventions: left and
//! right reference the x minimum and maximum, back and fore the y minimum
//! and maximum, top and bottom the z minimum and maximum. The center
//! alignments are `align_horizontal` (x), `align_depth` (y), and
//! `align_vertical` (z).

use log::debug;

use gantry_core::geometry::space::Bounds3;
use gantry_core::spatial::Spatial3;

use super::{distribution_params, half_sign};

/// Aligns each entity's x-coordinate against a reference edge.
///
/// `direction` is +1 for min-referenced edges and -1 for max-referenced
/// ones, which keeps `sign = 1` meaning "pull inward" on both sides.
fn align_x<E: Spatial3>(items: &mut [E], edge: f32, direction: f32, sign: i32, factor: f32) {
    let bias = direction * half_sign(sign);
    for item in items.iter_mut() {
        let extent = item.calc_bounds().extent();
        let target = item.location().with_x(edge + extent.width() * bias);
        item.move_toward(target, factor);
    }
}

fn align_y<E: Spatial3>(items: &mut [E], edge: f32, direction: f32, sign: i32, factor: f32) {
    let bias = direction * half_sign(sign);
    for item in items.iter_mut() {
        let extent = item.calc_bounds().extent();
        let target = item.location().with_y(edge + extent.height() * bias);
        item.move_toward(target, factor);
    }
}

fn align_z<E: Spatial3>(items: &mut [E], edge: f32, direction: f32, sign: i32, factor: f32) {
    let bias = direction * half_sign(sign);
    for item in items.iter_mut() {
        let extent = item.calc_bounds().extent();
        let target = item.location().with_z(edge + extent.depth() * bias);
        item.move_toward(target, factor);
    }
}

/// Sorts an index permutation of `items` by the coordinate `key` reports,
/// ascending and stable, so ties keep their input order and the caller's
/// slice order is never disturbed.
fn sorted_order<E: Spatial3>(items: &[E], key: impl Fn(&E) -> f32) -> Vec<usize> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| key(&items[a]).total_cmp(&key(&items[b])));
    order
}

/// Aligns all entities to the left edge (x minimum) of the bounds.
pub fn align_left<E: Spatial3>(b: &Bounds3, items: &mut [E]) {
    align_left_with(b, items, 1, 1.0);
}

/// Aligns all entities to the left edge (x minimum) of the bounds.
///
/// The sign indicates whether to align inside the edge (1), on the edge
/// (0) or outside the edge (-1).
pub fn align_left_with<E: Spatial3>(b: &Bounds3, items: &mut [E], sign: i32, factor: f32) {
    align_x(items, b.min_x(), 1.0, sign, factor);
}

/// Aligns all entities to the right edge (x maximum) of the bounds.
pub fn align_right<E: Spatial3>(b: &Bounds3, items: &mut [E]) {
    align_right_with(b, items, 1, 1.0);
}

/// Aligns all entities to the right edge (x maximum) of the bounds.
///
/// The sign indicates whether to align inside the edge (1), on the edge
/// (0) or outside the edge (-1).
pub fn align_right_with<E: Spatial3>(b: &Bounds3, items: &mut [E], sign: i32, factor: f32) {
    align_x(items, b.max_x(), -1.0, sign, factor);
}

/// Aligns all entities to the back edge (y minimum) of the bounds.
pub fn align_back<E: Spatial3>(b: &Bounds3, items: &mut [E]) {
    align_back_with(b, items, 1, 1.0);
}

/// Aligns all entities to the back edge (y minimum) of the bounds.
///
/// The sign indicates whether to align inside the edge (1), on the edge
/// (0) or outside the edge (-1).
pub fn align_back_with<E: Spatial3>(b: &Bounds3, items: &mut [E], sign: i32, factor: f32) {
    align_y(items, b.min_y(), 1.0, sign, factor);
}

/// Aligns all entities to the fore edge (y maximum) of the bounds.
pub fn align_fore<E: Spatial3>(b: &Bounds3, items: &mut [E]) {
    align_fore_with(b, items, 1, 1.0);
}

/// Aligns all entities to the fore edge (y maximum) of the bounds.
///
/// The sign indicates whether to align inside the edge (1), on the edge
/// (0) or outside the edge (-1).
pub fn align_fore_with<E: Spatial3>(b: &Bounds3, items: &mut [E], sign: i32, factor: f32) {
    align_y(items, b.max_y(), -1.0, sign, factor);
}

/// Aligns all entities to the top edge (z minimum) of the bounds.
pub fn align_top<E: Spatial3>(b: &Bounds3, items: &mut [E]) {
    align_top_with(b, items, 1, 1.0);
}

/// Aligns all entities to the top edge (z minimum) of the bounds.
///
/// The sign indicates whether to align inside the edge (1), on the edge
/// (0) or outside the edge (-1).
pub fn align_top_with<E: Spatial3>(b: &Bounds3, items: &mut [E], sign: i32, factor: f32) {
    align_z(items, b.min_z(), 1.0, sign, factor);
}

/// Aligns all entities to the bottom edge (z maximum) of the bounds.
pub fn align_bottom<E: Spatial3>(b: &Bounds3, items: &mut [E]) {
    align_bottom_with(b, items, 1, 1.0);
}

/// Aligns all entities to the bottom edge (z maximum) of the bounds.
///
/// The sign indicates whether to align inside the edge (1), on the edge
/// (0) or outside the edge (-1).
pub fn align_bottom_with<E: Spatial3>(b: &Bounds3, items: &mut [E], sign: i32, factor: f32) {
    align_z(items, b.max_z(), -1.0, sign, factor);
}

/// Aligns all entities to the horizontal center (x midpoint) of the bounds.
pub fn align_horizontal<E: Spatial3>(b: &Bounds3, items: &mut [E]) {
    align_horizontal_with(b, items, 0, 1.0);
}

/// Aligns all entities to the horizontal center (x midpoint) of the bounds.
///
/// The sign indicates whether to align right of the center line (1), on it
/// (0) or left of it (-1).
pub fn align_horizontal_with<E: Spatial3>(b: &Bounds3, items: &mut [E], sign: i32, factor: f32) {
    align_x(items, b.center().x(), 1.0, sign, factor);
}

/// Aligns all entities to the depth center (y midpoint) of the bounds.
pub fn align_depth<E: Spatial3>(b: &Bounds3, items: &mut [E]) {
    align_depth_with(b, items, 0, 1.0);
}

/// Aligns all entities to the depth center (y midpoint) of the bounds.
///
/// The sign indicates whether to align fore of the center plane (1), on it
/// (0) or back of it (-1).
pub fn align_depth_with<E: Spatial3>(b: &Bounds3, items: &mut [E], sign: i32, factor: f32) {
    align_y(items, b.center().y(), 1.0, sign, factor);
}

/// Aligns all entities to the vertical center (z midpoint) of the bounds.
pub fn align_vertical<E: Spatial3>(b: &Bounds3, items: &mut [E]) {
    align_vertical_with(b, items, 0, 1.0);
}

/// Aligns all entities to the vertical center (z midpoint) of the bounds.
///
/// The sign indicates whether to align below the center plane (1), on it
/// (0) or above it (-1).
pub fn align_vertical_with<E: Spatial3>(b: &Bounds3, items: &mut [E], sign: i32, factor: f32) {
    align_z(items, b.center().z(), 1.0, sign, factor);
}

/// Distributes all entities horizontally (along x) within the bounds.
pub fn distribute_horizontal<E: Spatial3>(b: &Bounds3, items: &mut [E]) {
    distribute_horizontal_with(b, items, 1, 1.0);
}

/// Distributes all entities horizontally (along x) within the bounds.
///
/// Entities are spaced evenly between the x extremes in ascending order of
/// their current x-coordinate; the slice's own order is left unchanged.
/// The sign biases the two ends of the sequence: inside the edges (1), on
/// them (0), or overflowing outward (-1).
pub fn distribute_horizontal_with<E: Spatial3>(b: &Bounds3, items: &mut [E], sign: i32, factor: f32) {
    debug!(count = items.len(); "Distributing entities along the x axis");

    let order = sorted_order(items, |item| item.location().x());
    let (step, start) = distribution_params(items.len());
    let bias = half_sign(sign);
    let (min, max) = (b.min_x(), b.max_x());

    for (rank, &i) in order.iter().enumerate() {
        let t = rank as f32 * step + start;
        let u = 1.0 - t;
        let spread = u * min + t * max;
        let edge_bias = u * bias - t * bias;
        let item = &mut items[i];
        let extent = item.calc_bounds().extent();
        let target = item.location().with_x(spread + extent.width() * edge_bias);
        item.move_toward(target, factor);
    }
}

/// Distributes all entities along the depth axis (y) within the bounds.
pub fn distribute_depth<E: Spatial3>(b: &Bounds3, items: &mut [E]) {
    distribute_depth_with(b, items, 1, 1.0);
}

/// Distributes all entities along the depth axis (y) within the bounds.
///
/// Entities are spaced evenly between the y extremes in ascending order of
/// their current y-coordinate; the slice's own order is left unchanged.
/// The sign biases the two ends of the sequence: inside the edges (1), on
/// them (0), or overflowing outward (-1).
pub fn distribute_depth_with<E: Spatial3>(b: &Bounds3, items: &mut [E], sign: i32, factor: f32) {
    debug!(count = items.len(); "Distributing entities along the y axis");

    let order = sorted_order(items, |item| item.location().y());
    let (step, start) = distribution_params(items.len());
    let bias = half_sign(sign);
    let (min, max) = (b.min_y(), b.max_y());

    for (rank, &i) in order.iter().enumerate() {
        let t = rank as f32 * step + start;
        let u = 1.0 - t;
        let spread = u * min + t * max;
        let edge_bias = u * bias - t * bias;
        let item = &mut items[i];
        let extent = item.calc_bounds().extent();
        let target = item.location().with_y(spread + extent.height() * edge_bias);
        item.move_toward(target, factor);
    }
}

/// Distributes all entities vertically (along z) within the bounds.
pub fn distribute_vertical<E: Spatial3>(b: &Bounds3, items: &mut [E]) {
    distribute_vertical_with(b, items, 1, 1.0);
}

/// Distributes all entities vertically (along z) within the bounds.
///
/// Entities are spaced evenly between the z extremes in ascending order of
/// their current z-coordinate; the slice's own order is left unchanged.
/// The sign biases the two ends of the sequence: inside the edges (1), on
/// them (0), or overflowing outward (-1).
pub fn distribute_vertical_with<E: Spatial3>(b: &Bounds3, items: &mut [E], sign: i32, factor: f32) {
    debug!(count = items.len(); "Distributing entities along the z axis");

    let order = sorted_order(items, |item| item.location().z());
    let (step, start) = distribution_params(items.len());
    let bias = half_sign(sign);
    let (min, max) = (b.min_z(), b.max_z());

    for (rank, &i) in order.iter().enumerate() {
        let t = rank as f32 * step + start;
        let u = 1.0 - t;
        let spread = u * min + t * max;
        let edge_bias = u * bias - t * bias;
        let item = &mut items[i];
        let extent = item.calc_bounds().extent();
        let target = item.location().with_z(spread + extent.depth() * edge_bias);
        item.move_toward(target, factor);
    }
}

/// Arranges entities into a row along the x axis.
pub fn to_row<E: Spatial3>(b: &Bounds3, items: &mut [E]) {
    to_row_with(b, items, 1, 1.0);
}

/// Arranges entities into a row along the x axis.
///
/// Distributes along x and centers on the other two axes; the sign applies
/// to the distribution only.
pub fn to_row_with<E: Spatial3>(b: &Bounds3, items: &mut [E], sign: i32, factor: f32) {
    debug!(count = items.len(), sign; "Arranging entities into a row");

    distribute_horizontal_with(b, items, sign, factor);
    align_depth_with(b, items, 0, factor);
    align_vertical_with(b, items, 0, factor);
}

/// Arranges entities into a column along the y axis.
pub fn to_column<E: Spatial3>(b: &Bounds3, items: &mut [E]) {
    to_column_with(b, items, 1, 1.0);
}

/// Arranges entities into a column along the y axis.
///
/// Distributes along y and centers on the other two axes; the sign applies
/// to the distribution only.
pub fn to_column_with<E: Spatial3>(b: &Bounds3, items: &mut [E], sign: i32, factor: f32) {
    debug!(count = items.len(), sign; "Arranging entities into a column");

    align_horizontal_with(b, items, 0, factor);
    distribute_depth_with(b, items, sign, factor);
    align_vertical_with(b, items, 0, factor);
}

/// Arranges entities into a layer along the z axis.
pub fn to_layer<E: Spatial3>(b: &Bounds3, items: &mut [E]) {
    to_layer_with(b, items, 1, 1.0);
}

/// Arranges entities into a layer along the z axis.
///
/// Distributes along z and centers on the other two axes; the sign applies
/// to the distribution only.
pub fn to_layer_with<E: Spatial3>(b: &Bounds3, items: &mut [E], sign: i32, factor: f32) {
    debug!(count = items.len(), sign; "Arranging entities into a layer");

    align_horizontal_with(b, items, 0, factor);
    align_depth_with(b, items, 0, factor);
    distribute_vertical_with(b, items, sign, factor);
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use gantry_core::geometry::space::{Point3, Size3};
    use gantry_core::spatial::{Placed3, Spatial3};

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn placed_strategy() -> impl Strategy<Value = Placed3> {
        (
            (-100.0f32..100.0, -100.0f32..100.0, -100.0f32..100.0),
            (0.0f32..10.0, 0.0f32..10.0, 0.0f32..10.0),
        )
            .prop_map(|((x, y, z), (w, h, d))| {
                Placed3::new(Point3::new(x, y, z), Size3::new(w, h, d))
            })
    }

    fn scene_strategy() -> impl Strategy<Value = Vec<Placed3>> {
        prop::collection::vec(placed_strategy(), 0..12)
    }

    fn container_strategy() -> impl Strategy<Value = Bounds3> {
        (
            (-100.0f32..100.0, -100.0f32..100.0, -100.0f32..100.0),
            (1.0f32..200.0, 1.0f32..200.0, 1.0f32..200.0),
        )
            .prop_map(|((x, y, z), (w, h, d))| {
                Bounds3::new_from_min(Point3::new(x, y, z), Size3::new(w, h, d))
            })
    }

    fn sign_strategy() -> impl Strategy<Value = i32> {
        -5i32..5
    }

    // ===================
    // Property Test Functions
    // ===================

    /// A zero factor must leave every location untouched, for any operation.
    fn check_factor_zero_moves_nothing(
        b: Bounds3,
        mut items: Vec<Placed3>,
        sign: i32,
    ) -> Result<(), TestCaseError> {
        let before: Vec<Point3> = items.iter().map(|i| i.location()).collect();

        align_left_with(&b, &mut items, sign, 0.0);
        align_vertical_with(&b, &mut items, sign, 0.0);
        distribute_depth_with(&b, &mut items, sign, 0.0);
        to_row_with(&b, &mut items, sign, 0.0);

        let after: Vec<Point3> = items.iter().map(|i| i.location()).collect();
        prop_assert_eq!(before, after);
        Ok(())
    }

    /// Distribution with sign 0 assigns non-decreasing coordinates in the
    /// order of the original sorted positions.
    fn check_distribution_preserves_order(
        b: Bounds3,
        mut items: Vec<Placed3>,
    ) -> Result<(), TestCaseError> {
        let mut expected: Vec<usize> = (0..items.len()).collect();
        expected.sort_by(|&i, &j| {
            items[i]
                .location()
                .x()
                .total_cmp(&items[j].location().x())
        });

        distribute_horizontal_with(&b, &mut items, 0, 1.0);

        for pair in expected.windows(2) {
            prop_assert!(items[pair[0]].location().x() <= items[pair[1]].location().x());
        }
        Ok(())
    }

    /// Alignment only ever touches the target axis.
    fn check_alignment_leaves_other_axes(
        b: Bounds3,
        mut items: Vec<Placed3>,
        sign: i32,
    ) -> Result<(), TestCaseError> {
        let before: Vec<Point3> = items.iter().map(|i| i.location()).collect();

        align_horizontal_with(&b, &mut items, sign, 1.0);

        for (item, original) in items.iter().zip(&before) {
            prop_assert_eq!(item.location().y(), original.y());
            prop_assert_eq!(item.location().z(), original.z());
        }
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn factor_zero_moves_nothing(
            b in container_strategy(),
            items in scene_strategy(),
            sign in sign_strategy(),
        ) {
            check_factor_zero_moves_nothing(b, items, sign)?;
        }

        #[test]
        fn distribution_preserves_order(b in container_strategy(), items in scene_strategy()) {
            check_distribution_preserves_order(b, items)?;
        }

        #[test]
        fn alignment_leaves_other_axes(
            b in container_strategy(),
            items in scene_strategy(),
            sign in sign_strategy(),
        ) {
            check_alignment_leaves_other_axes(b, items, sign)?;
        }
    }
}
