//! Source implementations.
//!
//! - `RiotSource` - the GreyNoise API (production)
//! - [`MockSource`](crate::testing::MockSource) - canned responses, in
//!   the testing module

mod riot;

pub use riot::RiotSource;

// Re-export from traits for convenience
pub use crate::traits::source::Source;
