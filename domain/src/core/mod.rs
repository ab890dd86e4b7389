//! Core domain primitives

pub mod error;
pub mod query_text;
