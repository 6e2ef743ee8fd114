//! # sym-core
//!
//! Core types and error types for symcheck.
//!
//! This crate provides the foundational types shared across all symcheck crates:
//! - Entity structs for the reference data (conditions, symptoms, mappings, rules)
//!   and the session/audit log (symptom sessions, external API calls)
//! - Tag enums (emergency level, rule type, urgency)
//! - Cross-cutting error types
//! - HTTP response types
//! - The stub analysis computation and its static condition catalog

pub mod analysis;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
