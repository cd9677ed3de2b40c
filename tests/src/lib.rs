//! # Channel Bootstrap Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── fixtures.rs      # MSP directories and profiles on disk
//!     ├── genesis_flow.rs  # Profile → verifier → sections → genesis block
//!     └── properties.rs    # Determinism, omission, policies, reuse, conflicts
//!
//! tests/benches/
//! └── composition_benchmarks.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p cb-tests
//!
//! # By category
//! cargo test -p cb-tests integration::genesis_flow
//! cargo test -p cb-tests integration::properties
//!
//! # Benchmarks
//! cargo bench -p cb-tests
//! ```

pub mod integration;
