use std::sync::Arc;

use auth::PasswordHasher;
use auth::TokenService;
use chrono::Duration;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::RegisterCommand;
use crate::domain::account::ports::AccountRepository;

/// Authentication facade.
///
/// Orchestrates the credential store, the password hasher, and the token
/// service. Stateless across requests; all shared mutable state lives
/// behind the repository.
pub struct AccountService<R>
where
    R: AccountRepository,
{
    repository: Arc<R>,
    password_hasher: PasswordHasher,
    tokens: TokenService,
    token_ttl: Duration,
}

impl<R> AccountService<R>
where
    R: AccountRepository,
{
    /// Create the facade with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential store implementation
    /// * `tokens` - Token service configured with the shared signing secret
    /// * `token_ttl_minutes` - Lifetime of issued tokens
    pub fn new(repository: Arc<R>, tokens: TokenService, token_ttl_minutes: i64) -> Self {
        Self {
            repository,
            password_hasher: PasswordHasher::new(),
            tokens,
            token_ttl: Duration::minutes(token_ttl_minutes),
        }
    }

    /// Register a new account.
    ///
    /// The password is hashed before it reaches the store; the plaintext is
    /// never persisted. Duplicate emails surface as `EmailAlreadyExists`,
    /// enforced atomically by the store itself.
    pub async fn register(&self, command: RegisterCommand) -> Result<Account, AccountError> {
        let password_hash = self.password_hasher.hash(&command.password)?;

        let account = self
            .repository
            .create(&command.email, &password_hash)
            .await?;

        tracing::info!(account_id = %account.id, "Account registered");

        Ok(account)
    }

    /// Exchange credentials for a bearer token.
    ///
    /// An unknown email and a wrong password both return the single
    /// `InvalidCredentials`; the caller cannot tell which one happened.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AccountError> {
        let account = match self.repository.find_by_email(email).await? {
            Some(account) => account,
            None => return Err(AccountError::InvalidCredentials),
        };

        let password_matches = self
            .password_hasher
            .verify(password, &account.password_hash)?;
        if !password_matches {
            return Err(AccountError::InvalidCredentials);
        }

        let token = self.tokens.issue(account.email.as_str(), self.token_ttl)?;

        Ok(token)
    }

    /// Resolve a bearer token to the account it was issued for.
    ///
    /// Malformed and expired tokens, and subjects that no longer map to a
    /// stored account, all collapse to `Unauthenticated`; the token failure
    /// detail is only logged.
    pub async fn identify(&self, token: &str) -> Result<Account, AccountError> {
        let claims = self.tokens.verify(token).map_err(|e| {
            tracing::warn!(error = %e, "Token rejected");
            AccountError::Unauthenticated
        })?;

        self.repository
            .find_by_email(&claims.sub)
            .await?
            .ok_or(AccountError::Unauthenticated)
    }
}
