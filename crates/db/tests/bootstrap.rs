use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify seed data.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    trivia_db::health_check(&pool).await.unwrap();

    let categories: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(categories.0, 6, "expected six seeded categories");

    let questions: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert!(questions.0 >= 10, "expected a seeded question set, got {}", questions.0);
}

/// The seeded sequences must continue past the explicit seed ids.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_sequences_advance_past_seed_ids(pool: PgPool) {
    let max_id: (i64,) = sqlx::query_as("SELECT MAX(id) FROM questions")
        .fetch_one(&pool)
        .await
        .unwrap();

    let inserted: (i64,) = sqlx::query_as(
        "INSERT INTO questions (question, answer, category, difficulty)
         VALUES ('Seq check?', 'Yes', 1, 1) RETURNING id",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    assert!(inserted.0 > max_id.0);
}

/// A question referencing a missing category must violate the FK.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dangling_category_is_rejected(pool: PgPool) {
    let result = sqlx::query(
        "INSERT INTO questions (question, answer, category, difficulty)
         VALUES ('Orphan?', 'No', 999, 1)",
    )
    .execute(&pool)
    .await;

    let err = result.unwrap_err();
    let db_err = err.as_database_error().expect("expected a database error");
    assert_eq!(db_err.code().as_deref(), Some("23503"));
}
