//! Route handlers.

pub mod scan;
