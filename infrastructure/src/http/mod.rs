//! HTTP adapter for the document question-answering backend

mod client;
mod protocol;

pub use client::HttpBackend;
