use std::sync::Arc;

use anyhow::Result;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tower::ServiceExt;

use user_directory::{
    api::rest::dto::{LoginReq, RegisterReq, RegisterResp, UserDto},
    contract::{
        client::UserDirectoryApi,
        model::{Credentials, NewUser},
    },
    domain::{error::DomainError, service::Service},
    gateways::local::UserDirectoryLocalClient,
    infra::storage::{migrations::Migrator, sea_orm_repo::SeaOrmUsersRepository},
};

/// Create a fresh test database for each test
async fn create_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Create a test domain service
async fn create_test_service() -> Arc<Service> {
    let db = create_test_db().await;
    let repo = Arc::new(SeaOrmUsersRepository::new(db));
    Arc::new(Service::new(repo))
}

/// Create a test HTTP router
async fn create_test_router() -> Router {
    let service = create_test_service().await;
    user_directory::api::rest::routes::router(service)
}

fn new_user(first: &str, last: &str, email: &str) -> NewUser {
    NewUser {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
        password: "secret".to_string(),
    }
}

#[tokio::test]
async fn register_assigns_increasing_ids() -> Result<()> {
    let service = create_test_service().await;

    let alice = service
        .register(new_user("Alice", "Adams", "alice@example.com"))
        .await?;
    let bob = service
        .register(new_user("Bob", "Brown", "bob@example.com"))
        .await?;

    assert!(bob.id > alice.id);

    let users = service.list_users().await?;
    assert_eq!(users.len(), 2);
    // id ascending, insertion order
    assert_eq!(users[0].email, "alice@example.com");
    assert_eq!(users[1].email, "bob@example.com");

    Ok(())
}

#[tokio::test]
async fn duplicate_email_rejected_first_user_survives() -> Result<()> {
    let service = create_test_service().await;

    let first = service
        .register(new_user("Alice", "Adams", "alice@example.com"))
        .await?;

    let result = service
        .register(new_user("Alicia", "Anders", "alice@example.com"))
        .await;
    assert!(matches!(result, Err(DomainError::DuplicateEmail { .. })));

    // First registration remains queryable
    let found = service.get_user(first.id).await?;
    assert_eq!(found.first_name, "Alice");

    Ok(())
}

#[tokio::test]
async fn registration_validates_required_fields() -> Result<()> {
    let service = create_test_service().await;

    let result = service.register(new_user("", "Adams", "alice@example.com")).await;
    assert!(matches!(result, Err(DomainError::MissingField { .. })));

    let result = service
        .register(new_user("Alice", "Adams", "not-an-email"))
        .await;
    assert!(matches!(result, Err(DomainError::InvalidEmail { .. })));

    Ok(())
}

#[tokio::test]
async fn authenticate_does_not_reveal_which_part_failed() -> Result<()> {
    let service = create_test_service().await;

    service
        .register(new_user("Alice", "Adams", "alice@example.com"))
        .await?;

    let wrong_password = service
        .authenticate(Credentials {
            email: "alice@example.com".to_string(),
            password: "wrong".to_string(),
        })
        .await;
    let unknown_email = service
        .authenticate(Credentials {
            email: "nobody@example.com".to_string(),
            password: "secret".to_string(),
        })
        .await;

    assert!(matches!(wrong_password, Err(DomainError::AuthFailure)));
    assert!(matches!(unknown_email, Err(DomainError::AuthFailure)));

    let ok = service
        .authenticate(Credentials {
            email: "alice@example.com".to_string(),
            password: "secret".to_string(),
        })
        .await?;
    assert_eq!(ok.email, "alice@example.com");

    Ok(())
}

#[tokio::test]
async fn local_client_exposes_reads() -> Result<()> {
    let service = create_test_service().await;
    let alice = service
        .register(new_user("Alice", "Adams", "alice@example.com"))
        .await?;

    let client: Arc<dyn UserDirectoryApi> =
        Arc::new(UserDirectoryLocalClient::new(service.clone()));

    let fetched = client.get_user(alice.id).await?;
    assert_eq!(fetched, alice);

    let listed = client.list_users().await?;
    assert_eq!(listed, vec![alice]);

    let missing = client.get_user(9999).await;
    assert!(missing.is_err());

    Ok(())
}

// --- REST surface ---

fn json_post(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn rest_register_created() -> Result<()> {
    let router = create_test_router().await;

    let req = RegisterReq {
        first_name: "Alice".to_string(),
        last_name: "Adams".to_string(),
        email: "alice@example.com".to_string(),
        password: "secret".to_string(),
    };

    let response = router
        .oneshot(json_post("/register", serde_json::to_string(&req)?))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let resp: RegisterResp = serde_json::from_slice(&body)?;
    assert_eq!(resp.message, "User registered");
    assert!(resp.id > 0);

    Ok(())
}

#[tokio::test]
async fn rest_register_duplicate_email_is_400() -> Result<()> {
    let router = create_test_router().await;

    let req = RegisterReq {
        first_name: "Alice".to_string(),
        last_name: "Adams".to_string(),
        email: "alice@example.com".to_string(),
        password: "secret".to_string(),
    };
    let body = serde_json::to_string(&req)?;

    let first = router
        .clone()
        .oneshot(json_post("/register", body.clone()))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = router.oneshot(json_post("/register", body)).await.unwrap();
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);

    let bytes = axum::body::to_bytes(second.into_body(), usize::MAX).await?;
    let problem: serde_json::Value = serde_json::from_slice(&bytes)?;
    assert_eq!(problem["code"], "DUPLICATE_EMAIL");

    Ok(())
}

#[tokio::test]
async fn rest_login_401_body_is_identical_for_both_failures() -> Result<()> {
    let router = create_test_router().await;

    let register = RegisterReq {
        first_name: "Alice".to_string(),
        last_name: "Adams".to_string(),
        email: "alice@example.com".to_string(),
        password: "secret".to_string(),
    };
    let resp = router
        .clone()
        .oneshot(json_post("/register", serde_json::to_string(&register)?))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let wrong_password = LoginReq {
        email: "alice@example.com".to_string(),
        password: "wrong".to_string(),
    };
    let unknown_email = LoginReq {
        email: "nobody@example.com".to_string(),
        password: "secret".to_string(),
    };

    let r1 = router
        .clone()
        .oneshot(json_post("/login", serde_json::to_string(&wrong_password)?))
        .await
        .unwrap();
    let r2 = router
        .oneshot(json_post("/login", serde_json::to_string(&unknown_email)?))
        .await
        .unwrap();

    assert_eq!(r1.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(r2.status(), StatusCode::UNAUTHORIZED);

    let b1 = axum::body::to_bytes(r1.into_body(), usize::MAX).await?;
    let b2 = axum::body::to_bytes(r2.into_body(), usize::MAX).await?;
    assert_eq!(b1, b2, "401 bodies must not leak whether the email exists");

    Ok(())
}

#[tokio::test]
async fn rest_list_and_get_users() -> Result<()> {
    let router = create_test_router().await;

    let register = RegisterReq {
        first_name: "Alice".to_string(),
        last_name: "Adams".to_string(),
        email: "alice@example.com".to_string(),
        password: "secret".to_string(),
    };
    let resp = router
        .clone()
        .oneshot(json_post("/register", serde_json::to_string(&register)?))
        .await
        .unwrap();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let created: RegisterResp = serde_json::from_slice(&bytes)?;

    let list = router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/users")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(list.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(list.into_body(), usize::MAX).await?;
    let users: Vec<UserDto> = serde_json::from_slice(&bytes)?;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email, "alice@example.com");
    // Password never appears in the wire format
    let raw: serde_json::Value = serde_json::from_slice(&bytes)?;
    assert!(raw[0].get("password").is_none());

    let get = router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(format!("/users/{}", created.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(get.status(), StatusCode::OK);

    let missing = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/users/9999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    Ok(())
}
