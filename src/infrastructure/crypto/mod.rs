//! Key generation and credential hashing

pub mod api_key;
pub mod password;
