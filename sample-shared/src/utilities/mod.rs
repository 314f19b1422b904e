pub mod config;
pub mod cors;
pub mod logging;
pub mod requests;
pub mod responses;
