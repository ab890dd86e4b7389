//! Use cases

pub mod controller;
pub mod submit_query;
