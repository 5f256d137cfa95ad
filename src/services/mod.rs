//! # External Services
//!
//! Narrow interfaces to the two collaborators the handler talks to.
//!
//! ## Available Services
//!
//! - **Secret Store** (`secret_store`) - Credential lookup, backed by Secrets Manager or a local payload
//! - **Database** (`database`) - Single-use PostgreSQL connections

pub mod database;
pub mod secret_store;
