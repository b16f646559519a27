//! This module defines the `IdentityProvider` trait, the seam through which
//! the service layer resolves the active user.
use spectachat_shared::types::Identity;

use crate::errors::RepositoryError;

/// A trait that resolves the currently authenticated user.
///
/// `Ok(None)` means the viewer is anonymous; it is not an error. Errors are
/// reserved for failures talking to the session store itself.
#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolves the active user, or `None` if unauthenticated.
    async fn current_identity(&self) -> Result<Option<Identity>, RepositoryError>;
}
