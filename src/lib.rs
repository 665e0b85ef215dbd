pub mod config;
pub mod digest;
pub mod error;
pub mod global;
pub mod http;
pub mod sources;
pub mod types;
pub mod worker;
