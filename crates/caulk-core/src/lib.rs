//! Core data model, hashing, and configuration for caulk.
//!
//! This crate provides the foundational data structures used across all caulk crates:
//! - [`types`] — The declaration tree (classes, members, attributes) and structural error types
//! - [`facts`] — [`ClassFacts`](facts::ClassFacts), the per-check derived view of a class
//! - [`hash`] — Deterministic content hashing (base62 of xxhash64)
//! - [`config`] — Configuration loading from `.caulk/caulk.json`

pub mod config;
pub mod facts;
pub mod hash;
pub mod types;
