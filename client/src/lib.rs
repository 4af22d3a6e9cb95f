//! Terminal client for the zk-creds backend.
//!
//! Wires the `controller` crate to HTTP (reqwest) and an async event loop (tokio).

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod render;
pub mod runtime;
pub mod shell;
