//! Shared test utilities

#![allow(dead_code)]

pub mod server;
pub mod source;

pub use server::{serve, serve_nothing};
pub use source::StaticSource;
