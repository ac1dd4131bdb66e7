//! Repository-level tests for question queries against the seeded schema.

use sqlx::PgPool;
use trivia_db::repositories::{CategoryRepo, QuestionRepo};

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_page_is_limited_and_ordered(pool: PgPool) {
    let page = QuestionRepo::list_page(&pool, 10, 0).await.unwrap();

    assert_eq!(page.len(), 10);
    let ids: Vec<_> = page.iter().map(|q| q.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted, "page must be ordered by ascending id");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_page_past_the_end_is_empty(pool: PgPool) {
    let total = QuestionRepo::count(&pool).await.unwrap();
    let page = QuestionRepo::list_page(&pool, 10, total + 100).await.unwrap();
    assert!(page.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_is_case_insensitive_substring(pool: PgPool) {
    let matches = QuestionRepo::search(&pool, "NAME").await.unwrap();
    assert!(!matches.is_empty());
    for question in &matches {
        assert!(question.question.to_lowercase().contains("name"));
    }

    let none = QuestionRepo::search(&pool, "zzzzz_no_match").await.unwrap();
    assert!(none.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_treats_wildcards_literally(pool: PgPool) {
    // '%' would match everything if passed through unescaped.
    let matches = QuestionRepo::search(&pool, "%").await.unwrap();
    assert!(matches.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn candidates_respect_category_and_exclusions(pool: PgPool) {
    let sports = QuestionRepo::list_by_category(&pool, 6).await.unwrap();
    assert!(!sports.is_empty());

    let first = sports[0].id;
    let candidates = QuestionRepo::list_candidates(&pool, Some(6), &[first])
        .await
        .unwrap();

    assert_eq!(candidates.len(), sports.len() - 1);
    assert!(candidates.iter().all(|q| q.category == 6 && q.id != first));

    // Excluding every id empties the pool.
    let all_ids: Vec<_> = sports.iter().map(|q| q.id).collect();
    let drained = QuestionRepo::list_candidates(&pool, Some(6), &all_ids)
        .await
        .unwrap();
    assert!(drained.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn candidates_without_category_span_all_categories(pool: PgPool) {
    let total = QuestionRepo::count(&pool).await.unwrap();
    let candidates = QuestionRepo::list_candidates(&pool, None, &[]).await.unwrap();
    assert_eq!(candidates.len() as i64, total);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_then_find_then_delete(pool: PgPool) {
    let created = QuestionRepo::create(&pool, "What is your name?", "Ada Lovelace", 4, 2)
        .await
        .unwrap();

    let found = QuestionRepo::find_by_id(&pool, created.id).await.unwrap();
    assert_eq!(found, Some(created.clone()));

    assert!(QuestionRepo::delete(&pool, created.id).await.unwrap());
    assert!(!QuestionRepo::delete(&pool, created.id).await.unwrap());
    assert_eq!(QuestionRepo::find_by_id(&pool, created.id).await.unwrap(), None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn categories_are_seeded_and_readable(pool: PgPool) {
    let categories = CategoryRepo::list_all(&pool).await.unwrap();
    assert_eq!(categories.len(), 6);
    assert_eq!(categories[0].kind, "Science");

    let sports = CategoryRepo::find_by_id(&pool, 6).await.unwrap().unwrap();
    assert_eq!(sports.kind, "Sports");

    assert!(CategoryRepo::find_by_id(&pool, 1000).await.unwrap().is_none());
}
