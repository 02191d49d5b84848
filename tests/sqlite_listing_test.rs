use std::sync::Arc;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use uisyllabi::listing::FETCH_FAILED_MESSAGE;
use uisyllabi::routes::router;
use uisyllabi::state::AppState;
use uisyllabi::store::SqliteStoreFactory;

async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

async fn get_courses(pool: SqlitePool, table: &str) -> (StatusCode, String) {
    let app = router(AppState::new(Arc::new(SqliteStoreFactory::new(pool)), table));
    let response = app
        .oneshot(Request::builder().uri("/courses").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_empty_courses_table() {
    let pool = setup_test_db().await;
    let (status, html) = get_courses(pool, "courses").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<pre>[]</pre>"));
}

#[tokio::test]
async fn test_single_course_row() {
    let pool = setup_test_db().await;
    sqlx::query(
        r#"
        INSERT INTO courses (id, code, name, department, "lastUpdated")
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind("chem-1110")
    .bind("CHEM:1110")
    .bind("Principles of Chemistry I")
    .bind("Chemistry")
    .bind("2025-04-15")
    .execute(&pool)
    .await
    .expect("Failed to insert course");

    let (status, html) = get_courses(pool, "courses").await;
    assert_eq!(status, StatusCode::OK);

    let start = html.find("<pre>").expect("no <pre>") + "<pre>".len();
    let end = html.find("</pre>").expect("no </pre>");
    let body = html[start..end].replace("&quot;", "\"");
    let expected = r#"[
  {
    "code": "CHEM:1110",
    "department": "Chemistry",
    "id": "chem-1110",
    "lastUpdated": "2025-04-15",
    "name": "Principles of Chemistry I"
  }
]"#;
    assert_eq!(body, expected);
}

#[tokio::test]
async fn test_missing_table_renders_error_state() {
    let pool = setup_test_db().await;
    let (status, html) = get_courses(pool, "syllabi").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(html.contains(FETCH_FAILED_MESSAGE));
}
