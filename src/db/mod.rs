pub mod queries;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

pub use queries::categories::Category;
pub use queries::questions::{NewQuestion, Question};

use sqlx::Error;

pub const IN_MEMORY: &str = ":memory:";

/// Opens the database file at `path`, creating it when missing. [`IN_MEMORY`]
/// gives an empty database that lives as long as the returned pool.
pub async fn establish_connection(path: &str) -> Result<SqlitePool, Error> {
    if path == IN_MEMORY {
        return establish_memory_connection().await;
    }
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    SqlitePool::connect_with(options).await
}

// every connection to `sqlite::memory:` is its own database, so keep exactly one alive
async fn establish_memory_connection() -> Result<SqlitePool, Error> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), Error> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use sqlx::SqlitePool;

    use super::queries::{categories, questions};
    use super::NewQuestion;

    pub async fn memory_pool() -> SqlitePool {
        let pool = super::establish_connection(super::IN_MEMORY).await.unwrap();
        super::run_migrations(&pool).await.unwrap();
        pool
    }

    pub async fn seeded_pool() -> SqlitePool {
        let pool = memory_pool().await;
        categories::create_category(&pool, Some(1), "Science")
            .await
            .unwrap();
        categories::create_category(&pool, Some(2), "Art")
            .await
            .unwrap();
        categories::create_category(&pool, Some(3), "Geography")
            .await
            .unwrap();
        let fixture = [
            ("What is the heaviest organ in the human body?", "The Liver", 1, 4),
            ("Who discovered penicillin?", "Alexander Fleming", 1, 3),
            ("Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
            ("Which Dutch graphic artist drew Relativity?", "Escher", 2, 1),
            ("La Giaconda is better known as what?", "Mona Lisa", 2, 3),
            ("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
            ("The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
        ];
        for (question, answer, category, difficulty) in fixture {
            questions::create_question(
                &pool,
                &NewQuestion {
                    question: question.to_owned(),
                    answer: answer.to_owned(),
                    category,
                    difficulty,
                },
            )
            .await
            .unwrap();
        }
        pool
    }

    #[tokio::test]
    async fn in_memory_database_is_shared_across_queries() {
        let pool = memory_pool().await;
        categories::create_category(&pool, Some(1), "Science")
            .await
            .unwrap();
        let all = categories::get_all_categories(&pool).await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn migrations_are_idempotent() {
        let pool = memory_pool().await;
        super::run_migrations(&pool).await.unwrap();
        assert!(categories::get_all_categories(&pool)
            .await
            .unwrap()
            .is_empty());
    }
}
