//! Ledgerline Core - Shared types library.
//!
//! This crate provides common types used across all Ledgerline components:
//! - `client` - Headless client SDK for the sales/investor console API
//! - `cli` - Command-line console built on top of the client
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no HTTP clients.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, role/status enums, the
//!   id-or-record [`types::Ref`] union, and pagination envelopes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
