//! Gantry - batch alignment and distribution of spatial entities.
//!
//! Arrangement of entity collections relative to an axis-aligned bounding
//! volume: aligning each entity to an edge or center plane of the volume,
//! distributing entities evenly along an axis, or composing both into
//! row/column/layer arrangements. This is the primitive a scene graph or
//! document-layout tool reaches for instead of hand-setting coordinates.
//!
//! Every operation mutates the borrowed entity collection in place through
//! the [`spatial`] capability traits and holds no state across calls.
//!
//! # Examples
//!
//! ```
//! use gantry::arrange::space;
//! use gantry::geometry::space::{Bounds3, Point3, Size3};
//! use gantry::spatial::{Placed3, Spatial3};
//!
//! let container = Bounds3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 10.0, 10.0));
//! let mut items = vec![
//!     Placed3::new(Point3::new(5.0, 1.0, 5.0), Size3::default()),
//!     Placed3::new(Point3::new(5.0, 9.0, 5.0), Size3::default()),
//!     Placed3::new(Point3::new(5.0, 5.0, 5.0), Size3::default()),
//! ];
//!
//! // Space the items evenly between the container's y extremes.
//! space::distribute_depth(&container, &mut items);
//! assert_eq!(items[0].location().y(), 0.0);
//! assert_eq!(items[1].location().y(), 10.0);
//! assert_eq!(items[2].location().y(), 5.0);
//! ```

pub mod arrange;

pub use gantry_core::{geometry, spatial};
