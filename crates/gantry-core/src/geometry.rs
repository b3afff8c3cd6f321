//! Geometric primitives for arrangement and positioning.
//!
//! This module provides the fundamental geometric types used throughout
//! Gantry for measuring extents and computing target positions:
//!
//! - [`plane`] - Planar (2D) points, sizes, and bounds
//! - [`space`] - Spatial (3D) points, sizes, and bounds
//!
//! # Coordinate System
//!
//! Gantry is agnostic to handedness and screen conventions. The only
//! assumption is that each axis grows from a bounds' minimum toward its
//! maximum. Operation names (left/right, back/fore, top/bottom) describe
//! which extremum is referenced, not where it appears on screen.

pub mod plane;
pub mod space;
