//! A chainable HTTP request builder over pluggable request executors.
//!
//! ## Overview
//!
//! `fluentreq` does not speak HTTP itself. A [`Client`] accumulates a base URL, transport
//! options, headers and cookies through chained setters, composes a request for every verb
//! call and hands it to a [`Backend`]. Whatever the backend returns is wrapped in a
//! [`Response`] accessor.
//!
//! Redirects, TLS, timeouts, body encoding and the like are entirely the backend's business.
//! The options a client carries (`timeout`, `redirection`, `sslverify`, ...) are passed through
//! for the backend to interpret.
//!
//! ### Backends
//!
//! Either hand a backend to [`ClientBuilder::backend`], or register one process-wide with
//! [`register_backend`] at the beginning of your program. The `fluentreq-backend-reqwest`
//! crate provides one built on `reqwest`.
//!
//! ## Usage
//!
//! ```no_run
//! # fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use fluentreq::{Client, RequestOptions};
//!
//! let mut client = Client::new("https://httpbin.org")?;
//! client.set_header("Accept", "application/json").set_cookie("session", "abc");
//!
//! let res = client.get("get", None)?;
//! println!("{}", res.status());
//!
//! // Options given to a single call are kept for the calls after it.
//! let res = client.post("post", RequestOptions::new().header("X-Trace", "1").body("hi"))?;
//! println!("{res}");
//! # Ok(())
//! # }
//! ```
//!
//! For a single request without any persisted configuration, use the functions at the crate
//! root, such as [`get`] or [`request`].

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(missing_docs)]

pub mod client;
mod error;
mod request;
mod response;
mod shortcut;
mod status;

#[doc(inline)]
pub use client::{Client, ClientBuilder, ClientConfig};
pub use error::{Error, Result};
pub use fluentreq_interface::{
    backend_fn, register_backend, Backend, ConfigMap, Method, RawResponse, Request, Value,
};
pub use request::RequestOptions;
pub use response::Response;
pub use shortcut::{delete, get, head, options, patch, post, put, request};
pub use status::StatusCode;
