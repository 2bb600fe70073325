//! # Tablekit Testkit
//!
//! Testing utilities for Tablekit.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known name, symbol, and row encodings
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: One deployment of each contract variant on a shared backend
//!
//! ## Golden Vectors
//!
//! ```rust
//! use tablekit_testkit::vectors::verify_all_vectors;
//!
//! for (name, passed, actual) in verify_all_vectors() {
//!     assert!(passed, "{name}: {actual}");
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use tablekit_testkit::generators::name;
//!
//! proptest! {
//!     #[test]
//!     fn name_projection_is_deterministic(n in name()) {
//!         prop_assert_eq!(n.value(), tablekit_core::Name::new(&n.to_string()).unwrap().value());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use tablekit_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new();
//! assert_eq!(fixture.int64.account().to_string(), "intcontract");
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{multi_party_contracts, TestFixture};
pub use generators::SaveParams;
pub use vectors::{name_vectors, row_vectors, symbol_vectors, verify_all_vectors};
