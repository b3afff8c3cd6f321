//! Planar (2D) arrangement operations.
//!
//! Axis vocabulary: left and right reference the x minimum and maximum,
//! bottom and top the y minimum and maximum. The center alignments are
//! `align_horizontal` (x) and `align_vertical` (y).

use log::debug;

use gantry_core::geometry::plane::Bounds2;
use gantry_core::spatial::Spatial2;

use super::{distribution_params, half_sign};

/// Aligns each entity's x-coordinate against a reference edge.
///
/// `direction` is +1 for min-referenced edges and -1 for max-referenced
/// ones, which keeps `sign = 1` meaning "pull inward" on both sides.
fn align_x<E: Spatial2>(items: &mut [E], edge: f32, direction: f32, sign: i32, factor: f32) {
    let bias = direction * half_sign(sign);
    for item in items.iter_mut() {
        let extent = item.calc_bounds().extent();
        let target = item.location().with_x(edge + extent.width() * bias);
        item.move_toward(target, factor);
    }
}

fn align_y<E: Spatial2>(items: &mut [E], edge: f32, direction: f32, sign: i32, factor: f32) {
    let bias = direction * half_sign(sign);
    for item in items.iter_mut() {
        let extent = item.calc_bounds().extent();
        let target = item.location().with_y(edge + extent.height() * bias);
        item.move_toward(target, factor);
    }
}

fn sorted_order<E: Spatial2>(items: &[E], key: impl Fn(&E) -> f32) -> Vec<usize> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| key(&items[a]).total_cmp(&key(&items[b])));
    order
}

/// Aligns all entities to the left edge (x minimum) of the bounds.
pub fn align_left<E: Spatial2>(b: &Bounds2, items: &mut [E]) {
    align_left_with(b, items, 1, 1.0);
}

/// Aligns all entities to the left edge (x minimum) of the bounds.
///
/// The sign indicates whether to align inside the edge (1), on the edge
/// (0) or outside the edge (-1).
pub fn align_left_with<E: Spatial2>(b: &Bounds2, items: &mut [E], sign: i32, factor: f32) {
    align_x(items, b.min_x(), 1.0, sign, factor);
}

/// Aligns all entities to the right edge (x maximum) of the bounds.
pub fn align_right<E: Spatial2>(b: &Bounds2, items: &mut [E]) {
    align_right_with(b, items, 1, 1.0);
}

/// Aligns all entities to the right edge (x maximum) of the bounds.
///
/// The sign indicates whether to align inside the edge (1), on the edge
/// (0) or outside the edge (-1).
pub fn align_right_with<E: Spatial2>(b: &Bounds2, items: &mut [E], sign: i32, factor: f32) {
    align_x(items, b.max_x(), -1.0, sign, factor);
}

/// Aligns all entities to the bottom edge (y minimum) of the bounds.
pub fn align_bottom<E: Spatial2>(b: &Bounds2, items: &mut [E]) {
    align_bottom_with(b, items, 1, 1.0);
}

/// Aligns all entities to the bottom edge (y minimum) of the bounds.
///
/// The sign indicates whether to align inside the edge (1), on the edge
/// (0) or outside the edge (-1).
pub fn align_bottom_with<E: Spatial2>(b: &Bounds2, items: &mut [E], sign: i32, factor: f32) {
    align_y(items, b.min_y(), 1.0, sign, factor);
}

/// Aligns all entities to the top edge (y maximum) of the bounds.
pub fn align_top<E: Spatial2>(b: &Bounds2, items: &mut [E]) {
    align_top_with(b, items, 1, 1.0);
}

/// Aligns all entities to the top edge (y maximum) of the bounds.
///
/// The sign indicates whether to align inside the edge (1), on the edge
/// (0) or outside the edge (-1).
pub fn align_top_with<E: Spatial2>(b: &Bounds2, items: &mut [E], sign: i32, factor: f32) {
    align_y(items, b.max_y(), -1.0, sign, factor);
}

/// Aligns all entities to the horizontal center (x midpoint) of the bounds.
pub fn align_horizontal<E: Spatial2>(b: &Bounds2, items: &mut [E]) {
    align_horizontal_with(b, items, 0, 1.0);
}

/// Aligns all entities to the horizontal center (x midpoint) of the bounds.
///
/// The sign indicates whether to align right of the center line (1), on it
/// (0) or left of it (-1).
pub fn align_horizontal_with<E: Spatial2>(b: &Bounds2, items: &mut [E], sign: i32, factor: f32) {
    align_x(items, b.center().x(), 1.0, sign, factor);
}

/// Aligns all entities to the vertical center (y midpoint) of the bounds.
pub fn align_vertical<E: Spatial2>(b: &Bounds2, items: &mut [E]) {
    align_vertical_with(b, items, 0, 1.0);
}

/// Aligns all entities to the vertical center (y midpoint) of the bounds.
///
/// The sign indicates whether to align above the center line (1), on it
/// (0) or below it (-1).
pub fn align_vertical_with<E: Spatial2>(b: &Bounds2, items: &mut [E], sign: i32, factor: f32) {
    align_y(items, b.center().y(), 1.0, sign, factor);
}

/// Distributes all entities horizontally (along x) within the bounds.
pub fn distribute_horizontal<E: Spatial2>(b: &Bounds2, items: &mut [E]) {
    distribute_horizontal_with(b, items, 1, 1.0);
}

/// Distributes all entities horizontally (along x) within the bounds.
///
/// Entities are spaced evenly between the x extremes in ascending order of
/// their current x-coordinate; the slice's own order is left unchanged.
/// The sign biases the two ends of the sequence: inside the edges (1), on
/// them (0), or overflowing outward (-1).
pub fn distribute_horizontal_with<E: Spatial2>(b: &Bounds2, items: &mut [E], sign: i32, factor: f32) {
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

/// Distributes all entities vertically (along y) within the bounds.
pub fn distribute_vertical<E: Spatial2>(b: &Bounds2, items: &mut [E]) {
    distribute_vertical_with(b, items, 1, 1.0);
}

/// Distributes all entities vertically (along y) within the bounds.
///
/// Entities are spaced evenly between the y extremes in ascending order of
/// their current y-coordinate; the slice's own order is left unchanged.
/// The sign biases the two ends of the sequence: inside the edges (1), on
/// them (0), or overflowing outward (-1).
pub fn distribute_vertical_with<E: Spatial2>(b: &Bounds2, items: &mut [E], sign: i32, factor: f32) {
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

/// Arranges entities into a row along the x axis.
pub fn to_row<E: Spatial2>(b: &Bounds2, items: &mut [E]) {
    to_row_with(b, items, 1, 1.0);
}

/// Arranges entities into a row along the x axis.
///
/// Centers vertically and distributes along x; the sign applies to the
/// distribution only.
pub fn to_row_with<E: Spatial2>(b: &Bounds2, items: &mut [E], sign: i32, factor: f32) {
    debug!(count = items.len(), sign; "Arranging entities into a row");

    align_vertical_with(b, items, 0, factor);
    distribute_horizontal_with(b, items, sign, factor);
}

/// Arranges entities into a column along the y axis.
pub fn to_column<E: Spatial2>(b: &Bounds2, items: &mut [E]) {
    to_column_with(b, items, 1, 1.0);
}

/// Arranges entities into a column along the y axis.
///
/// Centers horizontally and distributes along y; the sign applies to the
/// distribution only.
pub fn to_column_with<E: Spatial2>(b: &Bounds2, items: &mut [E], sign: i32, factor: f32) {
    debug!(count = items.len(), sign; "Arranging entities into a column");

    align_horizontal_with(b, items, 0, factor);
    distribute_vertical_with(b, items, sign, factor);
}
