use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

pub async fn get_all_categories(pool: &SqlitePool) -> sqlx::Result<Vec<Category>> {
    sqlx::query_as::<_, Category>(
        r#"
        SELECT id, "type" FROM categories ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_category(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Category>> {
    sqlx::query_as::<_, Category>(
        r#"
        SELECT id, "type" FROM categories WHERE categories.id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Inserts a category, letting SQLite pick the id when none is given.
pub async fn create_category(pool: &SqlitePool, id: Option<i64>, kind: &str) -> sqlx::Result<i64> {
    let id = sqlx::query(
        r#"
        INSERT INTO categories (id, "type") VALUES (?1, ?2)
        "#,
    )
    .bind(id)
    .bind(kind)
    .execute(pool)
    .await?
    .last_insert_rowid();

    Ok(id)
}

pub async fn import_categories(pool: &SqlitePool, categories: Vec<Category>) -> sqlx::Result<()> {
    let mut tx = pool.begin().await?;
    for category in categories {
        sqlx::query(
            r#"
            INSERT INTO categories (id, "type") VALUES (?1, ?2)
            ON CONFLICT(id) DO UPDATE SET "type" = excluded."type"
            "#,
        )
        .bind(category.id)
        .bind(category.kind)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::tests::memory_pool;

    #[tokio::test]
    async fn create_and_fetch() {
        let pool = memory_pool().await;
        let id = create_category(&pool, None, "History").await.unwrap();

        let category = get_category(&pool, id).await.unwrap().unwrap();
        assert_eq!(category.kind, "History");
        assert!(get_category(&pool, id + 1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn import_overwrites_existing_labels() {
        let pool = memory_pool().await;
        create_category(&pool, Some(1), "Sciense").await.unwrap();

        import_categories(
            &pool,
            vec![
                Category {
                    id: 1,
                    kind: "Science".to_owned(),
                },
                Category {
                    id: 5,
                    kind: "Sports".to_owned(),
                },
            ],
        )
        .await
        .unwrap();

        let labels: Vec<String> = get_all_categories(&pool)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.kind)
            .collect();
        assert_eq!(labels, vec!["Science", "Sports"]);
    }
}
