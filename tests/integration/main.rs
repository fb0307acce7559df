//! Integration tests for the adash binary and the agent_dash library

mod cli_test;
mod engine_test;
mod helpers;
