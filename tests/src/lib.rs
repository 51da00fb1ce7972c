//! # Blade Test Suite
//!
//! Unified test crate for behavior that spans the validator, planner and
//! assembler together.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── scenarios.rs   # Operator scenarios end to end
//!     └── properties.rs  # proptest invariants over generated inputs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p blade-tests
//! cargo test -p blade-tests integration::properties::
//! ```

pub mod integration;
