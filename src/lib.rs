//! Back-office Catalog API
//!
//! Merchants, stores, modules, views and their type catalogs, served by one
//! generic CRUD core and organized along Clean/Hexagonal Architecture lines.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
