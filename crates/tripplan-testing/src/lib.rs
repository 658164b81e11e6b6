//! Testing infrastructure for tripplan integration tests.
//!
//! This crate provides:
//! - `MockPlanningService`: a local HTTP stand-in for the planning service that
//!   records every request it receives
//! - `TestWorld`: isolated environment for running the `tripplan` binary

pub mod mock_service;
pub mod world;

pub use mock_service::{MockPlanningService, MockReply, RecordedRequest, unreachable_base_url};
pub use world::{CliResult, TestWorld};
