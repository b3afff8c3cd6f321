//! Gantry Core Types and Definitions
//!
//! This crate provides the foundational types for the Gantry arrangement
//! engine. It includes:
//!
//! - **Geometry**: Points, sizes, and axis-aligned bounds in two and three
//!   dimensions ([`geometry`] module)
//! - **Spatial**: Capability traits for entities that can be arranged, plus
//!   ready-made entity types ([`spatial`] module)

pub mod geometry;
pub mod spatial;
