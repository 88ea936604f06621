use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    db::Question,
    server::{app::AppState, extract::JsonBody},
    service::{resolve_quiz_category, TriviaService},
};

use super::ApiResponse;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct QuizBody {
    #[serde(default)]
    previous_questions: Option<Vec<i64>>,
    // kept loose so a malformed selector still reaches the quiz rules
    #[serde(default)]
    quiz_category: Option<Value>,
}

#[derive(Serialize)]
struct QuizQuestionBody {
    question: Option<Question>,
}

async fn next_question(
    State(service): State<TriviaService>,
    JsonBody(body): JsonBody<QuizBody>,
) -> ApiResponse<QuizQuestionBody> {
    let category = resolve_quiz_category(body.quiz_category.as_ref())?;
    let previous = body.previous_questions.unwrap_or_default();
    let question = service.draw_quiz_question(&previous, category).await?;
    Ok(Json(QuizQuestionBody { question }))
}

pub fn quizzes_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(next_question))
        .with_state(state)
}
