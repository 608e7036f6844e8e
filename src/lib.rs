//! Core infrastructure for a county-level case-data query service.
//!
//! `caseload-core` provides canonical content hashing, one-shot construction
//! of an immutable indexed data store from raw CSV rows, and a content-keyed
//! memoization cache. All operations are deterministic — identical inputs
//! always produce identical identifiers and orderings, within and across
//! process runs.
//!
//! The query surface (schema layer, HTTP server) lives outside this crate and
//! consumes only the store's and cache's public contracts.

pub mod cache;
pub mod hashing;
pub mod ingest;
pub mod store;
pub mod types;
