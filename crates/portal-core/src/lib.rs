//! # portal-core
//!
//! Core types shared across the portal client crates.
//!
//! This crate provides:
//! - Entity structs for the backend's domain objects (courses, modules)
//! - The authenticated [`Identity`] and its [`Role`]
//! - The uniform response [`Envelope`] every endpoint returns
//! - The static [`Route`] table
//! - Cross-cutting error types

pub mod entities;
pub mod envelope;
pub mod errors;
pub mod identity;
pub mod routes;

pub use entities::{Course, Module, ModuleContent};
pub use envelope::{Envelope, SUCCESS_STATUS};
pub use errors::CoreError;
pub use identity::{Identity, Role};
pub use routes::Route;
