//! Shared wire and domain types for the inventory service.
//!
//! The server and the agent both depend on this crate, so the JSON field
//! names the deployed fleet sends (`sistema_operacional`, `memoria_gb`, ...)
//! are defined in exactly one place.

pub mod types;
