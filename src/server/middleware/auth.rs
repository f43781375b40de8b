//! Request guards resolving the session user.
//!
//! `AuthGuard` enforces that a logged in user with the required permissions is
//! present. `ActorGuard` never fails for anonymous callers; it resolves the
//! context token used when issuing identifiers on behalf of the caller.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::{identifier::ContextToken, user::User},
};

pub enum Permission {
    Admin,
    /// Teacher or admin.
    Staff,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the session user and checks every permission in `permissions`.
    ///
    /// # Returns
    /// - `Ok(User)` - Logged in user holding all permissions
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session refers to a deleted user
    /// - `Err(AuthError::AccessDenied)` - A permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.admin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted an admin-only action without admin permissions"
                                .to_string(),
                        )
                        .into());
                    }
                }
                Permission::Staff => {
                    if !user.is_staff() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted a staff-only action without teacher or admin permissions"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}

pub struct ActorGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> ActorGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Context token of the caller.
    ///
    /// Falls back to `ContextToken::AnonymousFallback` when nobody is logged in,
    /// the session user no longer exists, or the user has no employee code.
    pub async fn context_token(&self) -> Result<ContextToken, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Ok(ContextToken::AnonymousFallback);
        };

        let user = UserRepository::new(self.db).find_by_id(user_id).await?;

        Ok(user
            .map(|user| user.context_token())
            .unwrap_or(ContextToken::AnonymousFallback))
    }
}
