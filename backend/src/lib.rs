//! Roster backend: a REST user directory over a MongoDB collection.
//!
//! Layout follows ports and adapters: [`domain`] holds the records, ports, and
//! directory service; [`inbound`] exposes them over HTTP; [`outbound`] stores
//! them; [`server`] wires everything into an Actix application.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
