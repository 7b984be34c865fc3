//! Architectural Enforcement Integration Tests
//!
//! This package contains integration tests that enforce architectural principles
//! of the emotion decision core:
//! - No I/O, clocks or randomness on the decision path
//! - No global mutable state
//! - Strategy rule tables stay free of logging
//!
//! The checks live under `tests/` and scan source text with `walkdir`.
