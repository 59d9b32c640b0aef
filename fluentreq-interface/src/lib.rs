//! Interface definitions for fluentreq request executors.
//!
//! This crate provides the contract between the `fluentreq` facade and whatever actually
//! performs HTTP requests. The facade never touches the network itself: every request is
//! handed to a [`Backend`] as a fully composed [`Request`], and the backend answers with a
//! [`RawResponse`] snapshot.
//!
//! ## Backend Registration
//!
//! Backend implementations may register themselves globally using [`register_backend`]. Clients
//! built without an explicit backend, as well as the static dispatch shortcuts of the facade,
//! pick up the registered one.
//!
//! ## Configuration values
//!
//! Options, headers and cookies are all carried as [`ConfigMap`]s of scalar [`Value`]s. Only
//! strings, booleans and numbers are representable; anything else fails to convert and is
//! dropped by the facade.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

pub mod backend;
mod error;
pub mod register;
mod request;
mod response;
pub mod value;

pub use backend::{backend_fn, Backend, FnBackend};
pub use error::{Error, Result};
pub use register::{register_backend, registered_backend};
pub use request::{Method, Request};
pub use response::RawResponse;
pub use value::{ConfigMap, InvalidValue, Value};
