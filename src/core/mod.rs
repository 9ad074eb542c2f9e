// BuildDigest - core/mod.rs
//
// Core business logic layer.
// Dependencies: regex, tracing.
// Must NOT depend on: platform, app, or touch the filesystem.

pub mod report;
pub mod segment;
