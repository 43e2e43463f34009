//! Integration tests for the MySQL-backed officer repository.
//!
//! These tests run against a real MySQL database using testcontainers.
//! Requires Docker; run with `cargo test -- --ignored`.

mod common;

use common::{scenarios, TestDatabase};

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_save_assigns_unique_ids() {
    let db = TestDatabase::new().await;
    scenarios::save_assigns_unique_ids(db.repository().as_ref()).await;
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_by_id_missing_is_none() {
    let db = TestDatabase::new().await;
    scenarios::find_by_id_missing_is_none(db.repository().as_ref()).await;
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_all_returns_fixture_in_id_order() {
    let db = TestDatabase::new().await;
    scenarios::find_all_returns_fixture_in_id_order(db.repository().as_ref()).await;
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_count_matches_fixture() {
    let db = TestDatabase::new().await;
    scenarios::count_matches_fixture(db.repository().as_ref()).await;
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_deleting_everyone_empties_the_store() {
    let db = TestDatabase::new().await;
    scenarios::deleting_everyone_empties_the_store(db.repository().as_ref()).await;
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_exists_by_id() {
    let db = TestDatabase::new().await;
    scenarios::exists_by_id(db.repository().as_ref()).await;
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_by_last_is_exact() {
    let db = TestDatabase::new().await;
    scenarios::find_by_last_is_exact(db.repository().as_ref()).await;
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_rank_and_surname_pattern() {
    let db = TestDatabase::new().await;
    scenarios::rank_and_surname_pattern(db.repository().as_ref()).await;
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_pattern_matching_is_case_sensitive() {
    let db = TestDatabase::new().await;
    scenarios::pattern_matching_is_case_sensitive(db.repository().as_ref()).await;
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_escaped_wildcards_match_literally() {
    let db = TestDatabase::new().await;
    scenarios::escaped_wildcards_match_literally(db.repository().as_ref()).await;
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_malformed_pattern_is_rejected() {
    let db = TestDatabase::new().await;
    scenarios::malformed_pattern_is_rejected(db.repository().as_ref()).await;
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_delete_twice_is_not_found() {
    let db = TestDatabase::new().await;
    scenarios::delete_twice_is_not_found(db.repository().as_ref()).await;
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_ids_are_not_reused() {
    let db = TestDatabase::new().await;
    scenarios::ids_are_not_reused(db.repository().as_ref()).await;
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_keeps_id() {
    let db = TestDatabase::new().await;
    scenarios::update_keeps_id(db.repository().as_ref()).await;
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_save_with_unknown_id_is_not_found() {
    let db = TestDatabase::new().await;
    scenarios::save_with_unknown_id_is_not_found(db.repository().as_ref()).await;
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_blank_names_are_rejected() {
    let db = TestDatabase::new().await;
    scenarios::blank_names_are_rejected(db.repository().as_ref()).await;
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_by_rank() {
    let db = TestDatabase::new().await;
    scenarios::find_by_rank(db.repository().as_ref()).await;
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_paging() {
    let db = TestDatabase::new().await;
    scenarios::paging(db.repository().as_ref()).await;
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_page_far_beyond_end_is_empty() {
    let db = TestDatabase::new().await;
    scenarios::page_far_beyond_end_is_empty(db.repository().as_ref()).await;
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_delete_all_reports_removed_rows() {
    let db = TestDatabase::new().await;
    scenarios::delete_all_reports_removed_rows(db.repository().as_ref()).await;
}
