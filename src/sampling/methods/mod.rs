//! Sampling methods
//!
//! This module contains concrete implementations of the
//! [`Sampler`](crate::sampling::Sampler) trait.
//!
//! # Available Methods
//!
//! - **[`LinearSampler`]**: evenly spaced energies, endpoints included.
//!   This is the grid the Ω(E) and Γ(E) plots are drawn on.

pub mod linear;

pub use linear::LinearSampler;
