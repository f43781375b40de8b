use super::*;

/// Tests an anonymous caller resolves to the fallback token.
///
/// Expected: Ok(ContextToken::AnonymousFallback)
#[tokio::test]
async fn anonymous_caller_uses_fallback() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let token = ActorGuard::new(db, session).context_token().await?;

    assert_eq!(token, ContextToken::AnonymousFallback);

    Ok(())
}

/// Tests a logged in user with an employee code resolves to that code.
///
/// Expected: Ok(ContextToken::AuthenticatedActor("EMP042"))
#[tokio::test]
async fn employee_code_becomes_actor_token() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .employee_id("EMP042")
        .build()
        .await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let token = ActorGuard::new(db, session).context_token().await?;

    assert_eq!(token, ContextToken::AuthenticatedActor("EMP042".to_string()));

    Ok(())
}

/// Tests a logged in user without an employee code falls back.
///
/// Expected: Ok(ContextToken::AnonymousFallback)
#[tokio::test]
async fn user_without_code_uses_fallback() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db).build().await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let token = ActorGuard::new(db, session).context_token().await?;

    assert_eq!(token, ContextToken::AnonymousFallback);

    Ok(())
}
