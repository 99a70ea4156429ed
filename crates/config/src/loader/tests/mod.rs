//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test builder methods and base URL normalization.
//! - Test environment variable handling and precedence.
//! - Test dotenv gating.
//!
//! Invariants:
//! - Tests that touch process-global state (env, cwd) are `#[serial]`.
