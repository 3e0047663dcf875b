use async_trait::async_trait;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::EmailAddress;

/// Persistence operations for the credential store.
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Persist a new account with an already-hashed password.
    ///
    /// The uniqueness check and the insert are one atomic operation at the
    /// storage layer; two concurrent registrations of the same email cannot
    /// both succeed.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - an account with this email exists
    /// * `DatabaseError` - storage operation failed
    async fn create(
        &self,
        email: &EmailAddress,
        password_hash: &str,
    ) -> Result<Account, AccountError>;

    /// Retrieve an account by email, exact match.
    ///
    /// A miss is `Ok(None)`, a normal outcome rather than a fault.
    ///
    /// # Errors
    /// * `DatabaseError` - storage operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError>;
}
