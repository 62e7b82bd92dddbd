//! # ShapeKit Core
//!
//! Core types and utilities shared by the ShapeKit crates.
//! Provides 2D geometry primitives, the synchronous observer list used for
//! model change notifications, and the common error taxonomy.

pub mod error;
pub mod geometry;
pub mod observer;

pub use error::{CoreError, Result};
pub use geometry::{Point, Rect, Size, Vector};
pub use observer::{ObserverList, SubscriptionId};
