#![doc = include_str!("../README.md")]

pub mod client;
pub mod error;
pub mod request;
pub mod transport;
pub mod types;

mod form;
mod response;

// Re-export core public API at crate root.
pub use client::{Client, ClientBuilder, init_logger};
pub use error::{Error, Result};
pub use request::{Payload, RESERVED_KEYS, Request};
pub use transport::{HttpOptions, HttpTransport, Transport};
pub use types::{Action, BASE_URL, MessageType, Method};
