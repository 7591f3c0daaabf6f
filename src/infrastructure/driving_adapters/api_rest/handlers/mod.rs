//! HTTP Handlers

pub mod catalog;

pub use catalog::RestResource;
