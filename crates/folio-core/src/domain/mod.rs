//! Domain entities - the core business objects.

mod post;
mod user;

pub use post::{Post, validate_post_fields};
pub use user::{User, mask_email, validate_user_fields};

use crate::error::DomainError;

/// Storage-assigned user identifier.
pub type UserId = i64;

/// Storage-assigned post identifier.
pub type PostId = i64;

/// Ids are issued by storage starting at 1, so anything lower is an id the
/// caller never set.
pub const fn id_is_set(id: i64) -> bool {
    id > 0
}

/// Reject an unset identifier with `InvalidArgument`.
pub(crate) fn require_id(id: i64, entity_type: &str) -> Result<i64, DomainError> {
    if id_is_set(id) {
        Ok(id)
    } else {
        Err(DomainError::InvalidArgument(format!(
            "{entity_type} ID must be set"
        )))
    }
}
