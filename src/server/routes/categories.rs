use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::{
    db::Question,
    server::{app::AppState, extract::PathParam},
    service::{CategoryMap, TriviaService},
};

use super::ApiResponse;

#[derive(Serialize)]
struct CategoriesBody {
    categories: CategoryMap,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CategoryQuestionsBody {
    questions: Vec<Question>,
    total_questions: usize,
    current_category: String,
}

async fn get_categories(State(service): State<TriviaService>) -> ApiResponse<CategoriesBody> {
    let categories = service.categories().await?;
    Ok(Json(CategoriesBody { categories }))
}

async fn get_category_questions(
    State(service): State<TriviaService>,
    PathParam(id): PathParam<i64>,
) -> ApiResponse<CategoryQuestionsBody> {
    let listing = service.list_by_category(id).await?;
    Ok(Json(CategoryQuestionsBody {
        total_questions: listing.questions.len(),
        questions: listing.questions,
        current_category: listing.current_category,
    }))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/categories/{id}/questions", get(get_category_questions))
        .with_state(state)
}
