use axum_login::{AuthUser, AuthnBackend, UserId as AxumUserId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use atelier_application::error::AppError;
use atelier_application::infrastructure_config::AuthConfig;
use atelier_application::ports::outgoing::password_hasher::DynPasswordHasherPort;

/// The single admin account. There is no user table; the identity
/// comes entirely from configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    pub email: String,
    password_hash: String,
}

impl AuthUser for AdminUser {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.email.clone()
    }

    /// Tied to the configured password hash so rotating the admin
    /// password invalidates every live session.
    fn session_auth_hash(&self) -> &[u8] {
        self.password_hash.as_bytes()
    }
}

#[derive(Clone)]
pub struct AuthBackend {
    auth_config: Arc<AuthConfig>,
    password_hasher: DynPasswordHasherPort,
}

impl AuthBackend {
    pub fn new(auth_config: Arc<AuthConfig>, password_hasher: DynPasswordHasherPort) -> Self {
        Self {
            auth_config,
            password_hasher,
        }
    }

    fn admin_user(&self) -> AdminUser {
        AdminUser {
            email: self.auth_config.admin_email.clone(),
            password_hash: self.auth_config.admin_password_hash.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl AuthnBackend for AuthBackend {
    type User = AdminUser;
    type Credentials = Credentials;
    type Error = AppError;

    async fn authenticate(
        &self,
        creds: Self::Credentials,
    ) -> Result<Option<Self::User>, Self::Error> {
        if !creds
            .email
            .eq_ignore_ascii_case(&self.auth_config.admin_email)
        {
            return Ok(None);
        }

        let password_valid = self
            .password_hasher
            .verify(&creds.password, &self.auth_config.admin_password_hash)
            .map_err(|_| AppError::InternalServerError)?;

        if password_valid {
            Ok(Some(self.admin_user()))
        } else {
            Ok(None)
        }
    }

    async fn get_user(
        &self,
        user_id: &AxumUserId<Self>,
    ) -> Result<Option<Self::User>, Self::Error> {
        if user_id.eq_ignore_ascii_case(&self.auth_config.admin_email) {
            Ok(Some(self.admin_user()))
        } else {
            Ok(None)
        }
    }
}
