use sqlx::{Pool, Postgres};
use tracing::debug;

use crate::question::models::{NewQuestion, Question};

pub async fn list_questions(pool: &Pool<Postgres>) -> Result<Vec<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty
        FROM "questions"
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_question_page(
    pool: &Pool<Postgres>,
    offset: i64,
    limit: i64,
) -> Result<Vec<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty
        FROM "questions"
        ORDER BY id
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}

pub async fn count_questions(pool: &Pool<Postgres>) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM "questions""#)
        .fetch_one(pool)
        .await
}

pub async fn list_questions_by_category(
    pool: &Pool<Postgres>,
    category_id: i32,
) -> Result<Vec<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty
        FROM "questions"
        WHERE category = $1
        ORDER BY id
        "#,
    )
    .bind(category_id)
    .fetch_all(pool)
    .await
}

pub async fn search_questions(
    pool: &Pool<Postgres>,
    term: &str,
) -> Result<Vec<Question>, sqlx::Error> {
    let pattern = format!("%{}%", escape_like(term));
    debug!("Searching questions with pattern: {}", pattern);

    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty
        FROM "questions"
        WHERE question ILIKE $1 ESCAPE '\'
        ORDER BY id
        "#,
    )
    .bind(pattern)
    .fetch_all(pool)
    .await
}

pub async fn get_question_by_id(
    pool: &Pool<Postgres>,
    question_id: i32,
) -> Result<Option<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty
        FROM "questions"
        WHERE id = $1
        "#,
    )
    .bind(question_id)
    .fetch_optional(pool)
    .await
}

pub async fn create_question(
    pool: &Pool<Postgres>,
    question: &NewQuestion,
) -> Result<i32, sqlx::Error> {
    sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO "questions" (question, answer, category, difficulty)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(&question.question)
    .bind(&question.answer)
    .bind(question.category)
    .bind(question.difficulty)
    .fetch_one(pool)
    .await
}

pub async fn delete_question_by_id(
    pool: &Pool<Postgres>,
    question_id: i32,
) -> Result<bool, sqlx::Error> {
    let row = sqlx::query(
        r#"
        DELETE FROM "questions"
        WHERE id = $1
        "#,
    )
    .bind(question_id)
    .execute(pool)
    .await?;

    Ok(row.rows_affected() != 0)
}

/// Escapes LIKE wildcards so the term is matched literally.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
