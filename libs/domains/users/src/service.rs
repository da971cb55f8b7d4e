use database::{DocumentStore, Filter, Patch};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{AuthenticatedUser, CreateUser, UpdateUser, User, fields};
use crate::password::{hash_password, verify_password};
use crate::token::TokenIssuer;

/// Service layer for User business logic
pub struct UserService<S: DocumentStore<User>, T: TokenIssuer> {
    store: Arc<S>,
    tokens: Arc<T>,
}

impl<S: DocumentStore<User>, T: TokenIssuer> Clone for UserService<S, T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            tokens: Arc::clone(&self.tokens),
        }
    }
}

impl<S: DocumentStore<User>, T: TokenIssuer> UserService<S, T> {
    pub fn new(store: S, tokens: T) -> Self {
        Self {
            store: Arc::new(store),
            tokens: Arc::new(tokens),
        }
    }

    /// Create a user, storing only the password hash
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        input
            .validate()
            .map_err(|e| UserError::Validation(e.to_string()))?;

        let password_hash = hash_password(&input.password)?;
        let user = User::new(input.username, input.email, password_hash);

        let user = self.store.insert(user).await?;
        info!(user_id = ?user.id, "User created");
        Ok(user)
    }

    #[instrument(skip(self))]
    pub async fn get_user(&self, id: &str) -> UserResult<User> {
        Ok(self.store.find_by_id(id).await?)
    }

    /// Set username and email, re-hash the password only when one is given,
    /// then return the stored state.
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn update_user(&self, id: &str, input: UpdateUser) -> UserResult<User> {
        input
            .validate()
            .map_err(|e| UserError::Validation(e.to_string()))?;

        let mut patch = Patch::new()
            .set(fields::USERNAME, input.username)
            .set(fields::EMAIL, input.email);
        if !input.password.is_empty() {
            patch = patch.set(fields::PASSWORD_HASH, hash_password(&input.password)?);
        }

        self.store.update_fields(id, patch).await?;
        Ok(self.store.find_by_id(id).await?)
    }

    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: &str) -> UserResult<()> {
        self.store.delete(id).await?;
        info!(user_id = %id, "User deleted");
        Ok(())
    }

    /// Look up by email and verify the password.
    ///
    /// Unknown email and wrong password fail identically.
    #[instrument(skip(self, password))]
    pub async fn authenticate(&self, email: &str, password: &str) -> UserResult<AuthenticatedUser> {
        let Some(user) = self
            .store
            .find_one(Filter::new().eq(fields::EMAIL, email))
            .await?
        else {
            warn!("login for unknown email");
            return Err(UserError::InvalidCredentials);
        };

        if !verify_password(password, &user.password_hash)? {
            warn!(user_id = ?user.id, "login with wrong password");
            return Err(UserError::InvalidCredentials);
        }

        let user_id = user.id.map(|id| id.to_hex()).unwrap_or_default();
        let token = self.tokens.issue(&user_id, &user.email)?;

        info!(user_id = %user_id, "User authenticated");
        Ok(AuthenticatedUser { token, user })
    }
}
