//! Shared data types for the client/server boundary.

pub mod types;
