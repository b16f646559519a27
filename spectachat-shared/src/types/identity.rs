use serde::{Deserialize, Serialize};

use crate::types::UserId;

/// Represents a resolved, authenticated user.
///
/// Produced by an identity provider; an unauthenticated viewer has no
/// `Identity` at all rather than an empty one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    pub user_id: UserId,
    pub email: String,
    pub username: String,
}
