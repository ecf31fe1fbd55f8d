// thousandeyes-api: Async Rust client for the ThousandEyes v6 REST API

pub mod client;
pub mod codec;
mod endpoints;
pub mod error;
pub mod models;
pub mod normalize;
pub mod transport;

pub use client::{Client, ClientConfig, DEFAULT_API_ENDPOINT, RawResponse};
pub use codec::{FieldSpec, IntBoolRecord};
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};
