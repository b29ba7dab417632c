//! Property tests for agentgen.
//!
//! Properties use randomized input generation to explore edge cases and
//! protect invariants like "never panics" and "round-trips".
//!
//! Run with: `cargo test --test properties`

mod common;

#[path = "properties/record_naming.rs"]
mod record_naming;

#[path = "properties/payload_round_trip.rs"]
mod payload_round_trip;

#[path = "properties/multidoc.rs"]
mod multidoc;
