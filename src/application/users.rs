//! User registration and lookup.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::application::repos::{NewUser, RepoError, UsersRepo};
use crate::domain::entities::UserRecord;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("email is required")]
    MissingEmail,
    #[error("email `{email}` is already registered")]
    DuplicateEmail { email: String },
    #[error(transparent)]
    Repo(RepoError),
}

#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub name: Option<String>,
    pub email: String,
    pub password: Option<String>,
    pub google_id: Option<String>,
}

pub struct UserService {
    users: Arc<dyn UsersRepo>,
}

impl UserService {
    pub fn new(users: Arc<dyn UsersRepo>) -> Self {
        Self { users }
    }

    pub async fn register(&self, command: RegisterUserCommand) -> Result<UserRecord, UserError> {
        let email = command.email.trim().to_string();
        if email.is_empty() {
            return Err(UserError::MissingEmail);
        }

        let existing = self
            .users
            .find_user_by_email(&email)
            .await
            .map_err(UserError::Repo)?;
        if existing.is_some() {
            return Err(UserError::DuplicateEmail { email });
        }

        let user = NewUser {
            name: command.name,
            email: email.clone(),
            password: command.password,
            google_id: command.google_id,
        };

        match self.users.insert_user(user).await {
            Ok(record) => {
                info!(
                    target = "attimo::users",
                    id = %record.id,
                    "registered user"
                );
                Ok(record)
            }
            // The lookup above can race with a concurrent registration; the
            // unique index reports it the same way.
            Err(RepoError::Duplicate { .. }) => Err(UserError::DuplicateEmail { email }),
            Err(err) => Err(UserError::Repo(err)),
        }
    }

    pub async fn find(&self, id: Uuid) -> Result<Option<UserRecord>, RepoError> {
        self.users.find_user(id).await
    }
}
