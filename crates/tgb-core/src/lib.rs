//! Typed binding for the Telegram Bot API.
//!
//! This crate is transport-agnostic: it holds the schema types, request
//! encoding, response-envelope decoding and the error type. The HTTP client
//! lives behind the [`port::BotApi`] trait, implemented in `tgb-http`.

pub mod config;
pub mod errors;
pub mod logging;
pub mod port;
pub mod requests;
pub mod response;
pub mod types;

pub use config::BotConfig;
pub use errors::{Error, Provenance, Result};
