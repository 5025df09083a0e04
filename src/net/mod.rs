//! Networking modules for the library REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gateway` is the single choke point for outbound requests: it attaches
//! and rotates the bearer credential and raises the unauthorized signal.
//! `transport` is the browser HTTP backend behind it. `envelope` and
//! `dashboard` normalize wire shapes, `types` defines the domain DTOs, and
//! `api` exposes one typed operation per endpoint.

pub mod api;
pub mod dashboard;
pub mod envelope;
pub mod error;
pub mod gateway;
#[cfg(test)]
pub(crate) mod test_support;
pub mod transport;
pub mod types;
