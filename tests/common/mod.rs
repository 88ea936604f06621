use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::util::ServiceExt; // for `oneshot`

use trivia_api::db::{
    self,
    queries::{categories::create_category, questions::create_question},
    NewQuestion,
};
use trivia_api::server::app::{router, AppState};

pub async fn memory_pool() -> SqlitePool {
    let pool = db::establish_connection(db::IN_MEMORY).await.unwrap();
    db::run_migrations(&pool).await.unwrap();
    pool
}

/// Categories Science(1) and Art(2); three Science questions and one Art question.
pub async fn seeded_app() -> (Router, SqlitePool) {
    let pool = memory_pool().await;
    create_category(&pool, Some(1), "Science").await.unwrap();
    create_category(&pool, Some(2), "Art").await.unwrap();
    let fixture = [
        ("What is the title of the periodic table's inventor's book?", "Principles of Chemistry", 1),
        ("What is the heaviest organ in the human body?", "The Liver", 1),
        ("Who discovered penicillin?", "Alexander Fleming", 1),
        ("Which Dutch graphic artist drew Relativity?", "Escher", 2),
    ];
    for (question, answer, category) in fixture {
        create_question(
            &pool,
            &NewQuestion {
                question: question.to_owned(),
                answer: answer.to_owned(),
                category,
                difficulty: 2,
            },
        )
        .await
        .unwrap();
    }
    (router(AppState::new(pool.clone())), pool)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

pub fn assert_envelope(json: &Value, code: u16, message: &str) {
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], code);
    assert_eq!(json["message"], message);
}
