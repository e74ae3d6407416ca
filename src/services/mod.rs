//! Services — pure domain logic behind the route handlers.
//!
//! Nothing here performs I/O or holds mutable state. Handlers call into
//! these modules and shape the results for the wire.

pub mod builds;
pub mod catalog;
pub mod games;
pub mod search;
