//! Session service: the UI's view of who is signed in.
use std::sync::Arc;

use spectachat_repository::IdentityProvider;
use spectachat_shared::types::Identity;

use crate::errors::ServiceError;

/// Resolves the active viewer for the header and route guards.
pub struct AuthSession {
    identity: Arc<dyn IdentityProvider>,
}

impl AuthSession {
    pub fn new(identity: Arc<dyn IdentityProvider>) -> Self {
        Self { identity }
    }

    /// The signed-in user, or `None` for an anonymous viewer.
    pub async fn current_user(&self) -> Result<Option<Identity>, ServiceError> {
        Ok(self.identity.current_identity().await?)
    }

    /// Whether a user is signed in at all.
    pub async fn is_authenticated(&self) -> Result<bool, ServiceError> {
        Ok(self.current_user().await?.is_some())
    }
}
