// BuildDigest - app/mod.rs
//
// Application layer: orchestration of a single digest run.
// Dependencies: core and platform layers.

pub mod digest;
