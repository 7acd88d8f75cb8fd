pub mod error;
pub mod net;
pub mod query;
pub mod response;
pub mod scan;
pub mod text;

use std::collections::HashMap;

pub use crate::error::Error;
pub use crate::response::{collect_bodies, BatchEntity, Collected, ErrorPayload, FailedResponse};

pub type Result<T> = std::result::Result<T, Error>;

pub fn has_duplicate_keys(text: &str) -> bool {
    scan::has_duplicate_keys(text)
}

pub fn parse_params(query: &str) -> Result<HashMap<String, String>> {
    query::parse_params(query)
}

pub fn is_valid_host(input: &str) -> bool {
    net::is_valid_host(input)
}
