//! Common test utilities for spacebio integration tests
//!
//! Shared fixture catalogs, API constructors and HTTP response helpers.

#![allow(dead_code)]

pub mod fixtures;
pub mod http;

pub use fixtures::{fixture_catalog, sample_api, write_data_file};
pub use http::{get, get_json, post_json};
