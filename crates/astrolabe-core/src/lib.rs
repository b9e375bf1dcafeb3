//! Astrolabe Core Types
//!
//! This crate provides the foundational types for the Astrolabe diagram
//! layout engine. It includes:
//!
//! - **Geometry**: Rectangle set algebra, orthogonal connectors and the
//!   non-linear order axis ([`geometry`] module)
//! - **Small sets**: A fixed-capacity set with strict duplicate/capacity
//!   contracts ([`small_set::SmallSet`])
//! - **Text**: Text-measurement abstractions used to size labels
//!   ([`text`] module)

pub mod geometry;
pub mod small_set;
pub mod text;
