//! Core types shared across scopeflag facilities
//!
//! This crate provides foundational types used by the flag registry and
//! its logging/error facilities:
//!
//! - **Flag names**: canonical name derivation and case-insensitive matching
//! - **Schema constants**: canonical field keys and event names for
//!   structured logging

pub mod name;
pub mod schema;

pub use name::FlagName;
