//! Business rules behind the trivia endpoints: pagination, search, per-category
//! listing, question creation/removal and the quiz draw.

use std::collections::{BTreeMap, HashSet};

use rand::seq::SliceRandom;
use serde_json::Value;
use sqlx::SqlitePool;

use crate::db::queries::{categories, questions};
use crate::db::{NewQuestion, Question};
use crate::error::{TriviaError, TriviaResult};

pub const QUESTIONS_PER_PAGE: usize = 10;

/// Category id to its label.
pub type CategoryMap = BTreeMap<i64, String>;

#[derive(Debug)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub categories: CategoryMap,
}

#[derive(Debug)]
pub struct CategoryQuestions {
    pub questions: Vec<Question>,
    pub current_category: String,
}

/// Unvalidated fields of a question to be created.
#[derive(Debug, Default)]
pub struct QuestionDraft {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i64>,
    pub difficulty: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCategory {
    All,
    Only(i64),
    /// Questions without a category. Every stored question has one, so this pool is empty.
    Uncategorized,
}

#[derive(Clone)]
pub struct TriviaService {
    pool: SqlitePool,
}

impl TriviaService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(skip(self))]
    pub async fn categories(&self) -> TriviaResult<CategoryMap> {
        let categories = self.category_map().await?;
        if categories.is_empty() {
            return Err(TriviaError::NotFound);
        }
        Ok(categories)
    }

    /// `page` is 1-indexed. A page without questions is an error, not an empty result.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self, page: i64) -> TriviaResult<QuestionPage> {
        let page = usize::try_from(page)
            .ok()
            .filter(|page| *page >= 1)
            .ok_or(TriviaError::NotFound)?;
        let start = (page - 1).saturating_mul(QUESTIONS_PER_PAGE);

        let questions: Vec<Question> = questions::get_all_questions(&self.pool)
            .await?
            .into_iter()
            .skip(start)
            .take(QUESTIONS_PER_PAGE)
            .collect();
        if questions.is_empty() {
            return Err(TriviaError::NotFound);
        }

        Ok(QuestionPage {
            questions,
            categories: self.category_map().await?,
        })
    }

    #[tracing::instrument(skip(self))]
    pub async fn search(&self, term: Option<&str>) -> TriviaResult<Vec<Question>> {
        let term = term.ok_or(TriviaError::NotFound)?;
        let found = questions::search_questions(&self.pool, term).await?;
        if found.is_empty() {
            return Err(TriviaError::NotFound);
        }
        Ok(found)
    }

    /// Unlike [`TriviaService::search`], a category without questions is a valid answer.
    #[tracing::instrument(skip(self))]
    pub async fn list_by_category(&self, category_id: i64) -> TriviaResult<CategoryQuestions> {
        let category = categories::get_category(&self.pool, category_id)
            .await?
            .ok_or(TriviaError::NotFound)?;
        let questions = questions::get_questions_for_category(&self.pool, category.id).await?;
        Ok(CategoryQuestions {
            questions,
            current_category: category.kind,
        })
    }

    #[tracing::instrument(skip(self))]
    pub async fn create(&self, draft: QuestionDraft) -> TriviaResult<i64> {
        let new_question = validate_draft(draft)?;
        if categories::get_category(&self.pool, new_question.category)
            .await?
            .is_none()
        {
            return Err(TriviaError::NotFound);
        }
        let id = questions::create_question(&self.pool, &new_question).await?;
        tracing::info!("Created question {}", id);
        Ok(id)
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, question_id: i64) -> TriviaResult<()> {
        if questions::get_question_by_id(&self.pool, question_id)
            .await?
            .is_none()
        {
            return Err(TriviaError::NotFound);
        }
        // a concurrent delete may have won the race
        if questions::delete_question(&self.pool, question_id).await? == 0 {
            return Err(TriviaError::NotFound);
        }
        tracing::info!("Deleted question {}", question_id);
        Ok(())
    }

    /// Picks a random question outside of `previous`. `None` means the quiz is exhausted.
    #[tracing::instrument(skip(self, previous), fields(previous = previous.len()))]
    pub async fn draw_quiz_question(
        &self,
        previous: &[i64],
        category: QuizCategory,
    ) -> TriviaResult<Option<Question>> {
        let seen: HashSet<i64> = previous.iter().copied().collect();
        let pool = match category {
            QuizCategory::All => questions::get_all_questions(&self.pool).await?,
            QuizCategory::Only(id) => questions::get_questions_for_category(&self.pool, id).await?,
            QuizCategory::Uncategorized => vec![],
        };
        let candidates: Vec<Question> = pool
            .into_iter()
            .filter(|question| !seen.contains(&question.id))
            .collect();

        Ok(candidates.choose(&mut rand::thread_rng()).cloned())
    }

    async fn category_map(&self) -> TriviaResult<CategoryMap> {
        Ok(categories::get_all_categories(&self.pool)
            .await?
            .into_iter()
            .map(|category| (category.id, category.kind))
            .collect())
    }
}

fn validate_draft(draft: QuestionDraft) -> TriviaResult<NewQuestion> {
    let non_blank = |text: Option<String>| text.filter(|text| !text.trim().is_empty());
    match (
        non_blank(draft.question),
        non_blank(draft.answer),
        draft.category,
        draft.difficulty,
    ) {
        (Some(question), Some(answer), Some(category), Some(difficulty)) => Ok(NewQuestion {
            question,
            answer,
            category,
            difficulty,
        }),
        _ => Err(TriviaError::Unprocessable),
    }
}

/// Interprets the `quiz_category` selector sent by quiz clients.
///
/// Empty selectors (absent, `null`, `false`, `0`, `""`, `[]`, `{}`) select every
/// category, as does an `id` of 0. An object carrying an integer (or numeric
/// string) `id` selects that category, and an object with a `null` id selects
/// questions without a category. Any other non-empty value is an internal error,
/// which is what existing clients expect to see.
pub fn resolve_quiz_category(selector: Option<&Value>) -> TriviaResult<QuizCategory> {
    let object = match selector {
        None => return Ok(QuizCategory::All),
        Some(value) if is_empty_selector(value) => return Ok(QuizCategory::All),
        Some(Value::Object(object)) => object,
        Some(other) => {
            tracing::warn!("Malformed quiz category {}", other);
            return Err(TriviaError::Internal);
        }
    };
    let id = match object.get("id") {
        Some(Value::Null) => return Ok(QuizCategory::Uncategorized),
        Some(Value::Number(number)) => number.as_i64(),
        Some(Value::String(text)) => text.trim().parse::<i64>().ok(),
        _ => None,
    };
    match id {
        Some(0) => Ok(QuizCategory::All),
        Some(id) => Ok(QuizCategory::Only(id)),
        None => {
            tracing::warn!("Quiz category without usable id {:?}", object);
            Err(TriviaError::Internal)
        }
    }
}

fn is_empty_selector(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(object) => object.is_empty(),
    }
}
