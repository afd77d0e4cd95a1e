pub mod client;
pub mod error;
mod http;

pub use client::ApiClient;
pub use error::ApiError;
