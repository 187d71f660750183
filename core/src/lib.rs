//! Blocking client for the remote to-do list REST API.
//!
//! # Overview
//! Authenticates with HTTP Basic credentials, issues GET/POST/PUT/DELETE
//! requests, and maps JSON payloads onto `Todo` and `TodoCollection`.
//!
//! # Design
//! - `TodoClient` builds `HttpRequest` values and parses `HttpResponse`
//!   values without touching the network.
//! - `HttpTransport` executes them with a `ureq` agent and attaches the
//!   credentials. Anything outside 200–299 becomes `ApiError::HttpError`.
//! - `TodoApi` composes the two. Its plain methods log failures and return
//!   `None`/`false`; the `try_*` twins return the error.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use api::TodoApi;
pub use client::TodoClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{Credentials, HttpMethod, HttpRequest, HttpResponse, CONTENT_TYPE_JSON};
pub use transport::HttpTransport;
pub use types::{Todo, TodoCollection};
