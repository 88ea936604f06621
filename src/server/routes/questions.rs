use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_option_number_from_string;

use crate::{
    db::Question,
    server::{
        app::AppState,
        deserializers::deserialize_lenient_page,
        extract::{JsonBody, PathParam, QueryParams},
    },
    service::{CategoryMap, QuestionDraft, TriviaService},
};

use super::{Acknowledgement, ApiResponse};

#[derive(Deserialize)]
struct Pagination {
    #[serde(default = "first_page", deserialize_with = "deserialize_lenient_page")]
    page: i64,
}

fn first_page() -> i64 {
    1
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct NewQuestionBody {
    question: Option<String>,
    answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    category: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    difficulty: Option<i64>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SearchBody {
    #[serde(rename = "searchTerm")]
    search_term: Option<String>,
}

#[derive(Serialize)]
struct QuestionPageBody {
    questions: Vec<Question>,
    total_questions: usize,
    categories: CategoryMap,
    #[serde(rename = "currentCategory")]
    current_category: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchResultBody {
    questions: Vec<Question>,
    total_questions: usize,
    current_category: Option<String>,
}

async fn get_questions(
    State(service): State<TriviaService>,
    QueryParams(pagination): QueryParams<Pagination>,
) -> ApiResponse<QuestionPageBody> {
    let page = service.list(pagination.page).await?;
    Ok(Json(QuestionPageBody {
        // size of the returned page, not of the whole collection
        total_questions: page.questions.len(),
        questions: page.questions,
        categories: page.categories,
        current_category: None,
    }))
}

async fn create_question(
    State(service): State<TriviaService>,
    JsonBody(body): JsonBody<NewQuestionBody>,
) -> ApiResponse<Acknowledgement> {
    service
        .create(QuestionDraft {
            question: body.question,
            answer: body.answer,
            category: body.category,
            difficulty: body.difficulty,
        })
        .await?;
    Ok(Json(Acknowledgement::new("Create question successfully!")))
}

async fn delete_question(
    State(service): State<TriviaService>,
    PathParam(id): PathParam<i64>,
) -> ApiResponse<Acknowledgement> {
    service.delete(id).await?;
    Ok(Json(Acknowledgement::new("Question deleted successfully!")))
}

async fn search_questions(
    State(service): State<TriviaService>,
    JsonBody(body): JsonBody<SearchBody>,
) -> ApiResponse<SearchResultBody> {
    let questions = service.search(body.search_term.as_deref()).await?;
    Ok(Json(SearchResultBody {
        total_questions: questions.len(),
        questions,
        current_category: None,
    }))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(get_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/{id}", delete(delete_question))
        .with_state(state)
}
