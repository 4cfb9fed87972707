//! User service: email lookup and sign-up with the uniqueness invariant.

use std::sync::Arc;

use tracing::debug;

use quicknotes_core::{CreateUserRequest, Error, Result, User, UserRepository};

/// Service for user accounts.
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    /// Create a new UserService over the given repository.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Look up a user by email, case-insensitively.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        self.users.find_by_email(email).await
    }

    /// Create a new user.
    ///
    /// Fails with `BadRequest` when a user with that email already exists,
    /// matched case-insensitively. The pre-check gives the deterministic
    /// message; the store's unique index on `lower(email)` closes the
    /// window against a concurrent identical sign-up.
    pub async fn create_user(&self, cmd: CreateUserRequest) -> Result<User> {
        if self.users.exists_by_email(&cmd.email).await? {
            return Err(Error::BadRequest(
                "User with email already exists".to_string(),
            ));
        }

        let user = self.users.insert(cmd).await?;

        debug!(
            subsystem = "service",
            component = "user_service",
            op = "create_user",
            user_id = %user.id,
            "Created user"
        );

        Ok(user)
    }
}
