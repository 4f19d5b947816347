//! General-purpose collection types.
//!
//! At the moment this only holds the [`linked`] module, but collections are kept behind their own
//! Cargo features so more can be added without pulling each other in.

#[cfg(feature = "linked")]
pub mod linked;
