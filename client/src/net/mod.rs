//! Networking modules for the prediction service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls and `types` defines the wire schema.

pub mod api;
pub mod types;
