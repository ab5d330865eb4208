//! Domain model for portfolio entries and contact inquiries.
//!
//! # Responsibility
//! - Define the canonical record shapes persisted by the repositories.
//! - Keep wire-field naming stable across the persisted JSON blobs.
//!
//! # Invariants
//! - Every `Project` carries a unique, immutable `id`.
//! - `ContactMessage` records are append-only once written.

pub mod contact;
pub mod project;
