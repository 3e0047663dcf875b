//! Authentication primitives shared by the auth service.
//!
//! Two independent pieces:
//! - Password hashing (Argon2id, PHC string format)
//! - Signed bearer tokens (JWT, HS256) with a fixed subject/expiry claim set
//!
//! Both are pure and synchronous; the service layer decides how they are
//! wired to storage and HTTP.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use auth::TokenService;
//! use chrono::Duration;
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!");
//! let token = tokens.issue("alice@example.com", Duration::minutes(60)).unwrap();
//! let claims = tokens.verify(&token).unwrap();
//! assert_eq!(claims.sub, "alice@example.com");
//! ```

pub mod password;
pub mod token;

pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenService;
pub use token::DEFAULT_TTL_MINUTES;
