//! Common utilities for the Quill selector engine.
//!
//! This crate provides shared infrastructure used by the engine and its front ends:
//! - **Warning System** - deduplicated, colored terminal notices for selector
//!   features the engine only models approximately

pub mod warning;
