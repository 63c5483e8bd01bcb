//! Core trait abstractions for the pipeline.
//!
//! These traits define the seams between the three stages so each can
//! be swapped independently: where records come from, how they are
//! reshaped, and where they go.

pub mod source;
pub mod store;
pub mod transform;
