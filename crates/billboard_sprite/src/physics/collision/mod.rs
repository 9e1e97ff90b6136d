//! Collision shapes
//!
//! Shapes are stored in model space, centered on the entity origin.
//! The host physics backend places them using the entity transform.
//!
//! - [`shape`] - Shape descriptors handed to the collision sink

pub mod shape;

pub use shape::{BoxShape, CollisionShape};
