//! # Folio Core
//!
//! The domain layer of the Folio service.
//! This crate contains the user/post business rules with zero infrastructure
//! dependencies: storage is reached only through the traits in [`ports`].

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::{DomainError, DomainResult, RepoError};
pub use services::{PostCatalog, UserDirectory};
