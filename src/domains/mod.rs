//! Domains module containing business logic organized by bounded contexts.
//!
//! The server currently exposes a single domain, `tools`: read-only file
//! inspection plus two demonstration tools.

pub mod tools;
