//! # Scriba Testkit
//!
//! Testing utilities for the Scriba notes engine.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: ready-made repository and settings gateways over an
//!   in-memory store, plus seeded working sets
//! - **Fault injection**: [`FlakyStore`], a store wrapper whose writes
//!   can be made to fail on demand
//! - **Generators**: proptest strategies for drafts, records, searches,
//!   and whole mutation scripts
//!
//! ## Fixtures
//!
//! ```rust,ignore
//! use scriba_testkit::TestFixture;
//!
//! let fixture = TestFixture::seeded(3).await;
//! assert_eq!(fixture.repo.count().await.unwrap(), 3);
//! ```
//!
//! ## Fault injection
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use scriba::Repository;
//! use scriba_store::MemoryStore;
//! use scriba_testkit::FlakyStore;
//!
//! let store = Arc::new(FlakyStore::new(MemoryStore::new()));
//! let repo = Repository::open(Arc::clone(&store)).await.unwrap();
//! store.fail_writes(true);
//! assert!(repo.add_note("lost", "").await.is_err());
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use scriba_testkit::generators;
//!
//! proptest! {
//!     #[test]
//!     fn drafts_are_storable(draft in generators::draft()) {
//!         prop_assert!(draft.title.len() <= 24);
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::{grocery_notes, FlakyStore, TestFixture};
