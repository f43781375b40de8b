use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{ActorGuard, AuthGuard, Permission},
        session::AuthSession,
    },
    model::identifier::ContextToken,
};
use test_utils::{builder::TestBuilder, factory};

mod context_token;
