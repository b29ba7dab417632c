//! Common test utilities for agentgen property and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated asset directory backed by a temp dir
//! - Fakes: port implementations with canned behavior
//! - Fixtures: Reusable input file content

#![allow(dead_code)]

pub mod env;
pub mod fakes;
pub mod fixtures;

pub use env::*;
pub use fakes::*;
pub use fixtures::*;
