//! Arrangement operations over bounded collections of entities.
//!
//! Two submodules carry the operation sets:
//!
//! - [`plane`] - alignment, distribution, and composition in 2D
//! - [`space`] - alignment, distribution, and composition in 3D
//!
//! # Sign and factor
//!
//! Every operation takes the same pair of parameters, with per-operation
//! defaults:
//!
//! - `sign` selects the edge bias. Only its three-way signum is used, so
//!   any magnitude collapses to -1, 0, or 1: `1` pulls entities inward
//!   (edges flush inside the container edge), `0` centers entities on the
//!   reference line, `-1` mirrors them outside it. For distribution the
//!   bias is interpolated across the sorted sequence, so `1` tucks both
//!   ends inside the container and `-1` overflows both ends outward.
//! - `factor` is the blend weight of the move: `0.0` leaves locations
//!   untouched, `1.0` snaps to the computed target, intermediate values
//!   ease toward it. It is deliberately not clamped, so a caller animating
//!   an arrangement and a caller snapping it share one code path.
//!
//! Each operation also comes in a default-parameter form without the pair:
//! edge alignments default to `(1, 1.0)`, center alignments to `(0, 1.0)`,
//! distributions and compositions to `(1, 1.0)`.
//!
//! No operation can fail: empty collections are no-ops, a single entity
//! distributes to the axis midpoint, and inverted containers mirror the
//! layout instead of erroring.

pub mod plane;
pub mod space;

/// Maps a sign of any magnitude to half its three-way signum.
///
/// This is the per-entity edge bias: half, because an entity's edge sits
/// half an extent away from its anchor.
pub(crate) fn half_sign(sign: i32) -> f32 {
    0.5 * sign.signum() as f32
}

/// Sequence interpolants for distributing `len` entities along an axis.
///
/// Returns `(step, offset)` such that the i-th sorted entity's parameter is
/// `i * step + offset`: an even spread over [0, 1] when `len > 1`, and the
/// centering constant 0.5 otherwise (which also guards the `len - 1`
/// divisor).
pub(crate) fn distribution_params(len: usize) -> (f32, f32) {
    if len > 1 {
        (1.0 / (len as f32 - 1.0), 0.0)
    } else {
        (0.0, 0.5)
    }
}
