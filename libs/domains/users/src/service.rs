use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::error::{UserError, UserResult};
use crate::hasher::PasswordHasher;
use crate::models::{RegisterRequest, RegistrationOutcome, Rejection, User};
use crate::repository::UserRepository;

/// Service layer for registration and login
pub struct UserService<R: UserRepository, H: PasswordHasher> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R: UserRepository, H: PasswordHasher> Clone for UserService<R, H> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            hasher: Arc::clone(&self.hasher),
        }
    }
}

impl<R: UserRepository, H: PasswordHasher> UserService<R, H> {
    pub fn new(repository: R, hasher: H) -> Self {
        Self {
            repository: Arc::new(repository),
            hasher: Arc::new(hasher),
        }
    }

    /// Validate, check email uniqueness, hash, then store a new user.
    ///
    /// Invalid input and a taken email come back as `Rejected`; only store
    /// or hasher faults are `Err`. Nothing is written unless every step passes.
    #[instrument(skip_all, fields(email = %input.email))]
    pub async fn register(&self, input: RegisterRequest) -> UserResult<RegistrationOutcome> {
        if let Err(errors) = input.validate() {
            tracing::debug!(fields = %invalid_fields(&errors), "Registration input rejected");
            return Ok(RegistrationOutcome::Rejected(Rejection::InvalidData));
        }

        if self.repository.get_by_email(&input.email).await?.is_some() {
            return Ok(RegistrationOutcome::Rejected(Rejection::EmailInUse));
        }

        let password_hash = self.hasher.hash(&input.password).await?;

        let RegisterRequest {
            email, username, ..
        } = input;

        match self
            .repository
            .create(User::new(email, username, password_hash))
            .await
        {
            Ok(user) => Ok(RegistrationOutcome::Registered(user)),
            // Lost a race with a concurrent registration for the same email
            Err(UserError::DuplicateEmail(_)) => {
                Ok(RegistrationOutcome::Rejected(Rejection::EmailInUse))
            }
            Err(e) => Err(e),
        }
    }

    /// Look up by email and verify the password.
    ///
    /// Unknown email and wrong password both yield `InvalidCredentials`.
    #[instrument(skip(self, password))]
    pub async fn authenticate(&self, email: &str, password: &str) -> UserResult<User> {
        let user = self
            .repository
            .get_by_email(email)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        if !self.hasher.verify(password, &user.password_hash).await? {
            return Err(UserError::InvalidCredentials);
        }

        Ok(user)
    }

    /// Get a user by ID
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: Uuid) -> UserResult<User> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }
}

/// Sorted names of the fields that failed validation, without their values.
fn invalid_fields(errors: &ValidationErrors) -> String {
    let mut fields: Vec<&str> = errors.errors().keys().map(|field| field.as_ref()).collect();
    fields.sort_unstable();
    fields.join(",")
}
