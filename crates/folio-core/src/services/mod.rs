//! Use-case services over users and posts.
//!
//! Every public operation is one read-check-write sequence against the
//! repositories it holds. The services take no locks of their own: the check
//! (email uniqueness, owner existence) and the write that follows must run
//! inside a single transaction of the persistence collaborator, otherwise
//! concurrent callers can slip a duplicate email or a dangling owner reference
//! between the two steps.
//!
//! Plain lookups of an unknown id answer `None` / `false`. Only the
//! cross-entity checks of [`PostCatalog`] fail with `DomainError::NotFound`.

mod post_catalog;
mod user_directory;

pub use post_catalog::PostCatalog;
pub use user_directory::UserDirectory;

#[cfg(test)]
pub(crate) mod mocks;
