//! Backend-independent repository scenarios.
//!
//! Each function expects an empty store and seeds the fixture itself.

use super::{seed, surnames};
use starbase_core::{Officer, OfficerId, PageRequest, Rank};
use starbase_repository::OfficerRepository;
use std::collections::HashSet;

pub async fn save_assigns_unique_ids(repo: &dyn OfficerRepository) {
    let saved = seed(repo).await;

    let ids: HashSet<OfficerId> = saved.iter().map(|o| o.id.expect("id assigned")).collect();
    assert_eq!(ids.len(), 5);

    for officer in &saved {
        let id = officer.require_id().unwrap();
        let found = repo.find_by_id(id).await.unwrap().expect("saved officer is found");
        assert_eq!(found.id, Some(id));
        assert_eq!(found.first, officer.first);
        assert_eq!(found.last, officer.last);
        assert_eq!(found.rank, officer.rank);
    }
}

pub async fn find_by_id_missing_is_none(repo: &dyn OfficerRepository) {
    seed(repo).await;
    assert!(repo.find_by_id(OfficerId::new(999)).await.unwrap().is_none());
}

pub async fn find_all_returns_fixture_in_id_order(repo: &dyn OfficerRepository) {
    let saved = seed(repo).await;
    let all = repo.find_all().await.unwrap();

    assert_eq!(all, saved);
    assert_eq!(surnames(&all), ["Archer", "Janeway", "Kirk", "Picard", "Sisko"]);
    assert!(all.windows(2).all(|w| w[0].id < w[1].id));
}

pub async fn count_matches_fixture(repo: &dyn OfficerRepository) {
    assert_eq!(repo.count().await.unwrap(), 0);
    seed(repo).await;
    assert_eq!(repo.count().await.unwrap(), 5);
}

pub async fn deleting_everyone_empties_the_store(repo: &dyn OfficerRepository) {
    seed(repo).await;
    for officer in repo.find_all().await.unwrap() {
        repo.delete(&officer).await.unwrap();
    }
    assert_eq!(repo.count().await.unwrap(), 0);
}

pub async fn exists_by_id(repo: &dyn OfficerRepository) {
    for officer in seed(repo).await {
        assert!(repo.exists_by_id(officer.require_id().unwrap()).await.unwrap());
    }
    assert!(!repo.exists_by_id(OfficerId::new(999)).await.unwrap());
}

pub async fn find_by_last_is_exact(repo: &dyn OfficerRepository) {
    seed(repo).await;

    let found = repo.find_by_last("Kirk").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].last, "Kirk");

    assert!(repo.find_by_last("kirk").await.unwrap().is_empty());
    assert!(repo.find_by_last("Kir").await.unwrap().is_empty());
}

pub async fn rank_and_surname_pattern(repo: &dyn OfficerRepository) {
    seed(repo).await;

    let found = repo
        .find_all_by_rank_and_last_like(Rank::Captain, "%i%")
        .await
        .unwrap();
    assert_eq!(surnames(&found), ["Kirk", "Picard", "Sisko"]);

    let found = repo
        .find_all_by_rank_and_last_like(Rank::Captain, "K_rk")
        .await
        .unwrap();
    assert_eq!(surnames(&found), ["Kirk"]);

    let found = repo
        .find_all_by_rank_and_last_like(Rank::Admiral, "%a%")
        .await
        .unwrap();
    assert_eq!(surnames(&found), ["Janeway"]);
}

pub async fn pattern_matching_is_case_sensitive(repo: &dyn OfficerRepository) {
    seed(repo).await;

    let found = repo
        .find_all_by_rank_and_last_like(Rank::Captain, "%I%")
        .await
        .unwrap();
    assert!(found.is_empty());

    let found = repo
        .find_all_by_rank_and_last_like(Rank::Captain, "p%")
        .await
        .unwrap();
    assert!(found.is_empty());
}

pub async fn escaped_wildcards_match_literally(repo: &dyn OfficerRepository) {
    repo.save(&Officer::new(Rank::Lieutenant, "Miles", "O_Brien")).await.unwrap();
    repo.save(&Officer::new(Rank::Lieutenant, "Test", "OxBrien")).await.unwrap();

    let found = repo
        .find_all_by_rank_and_last_like(Rank::Lieutenant, "O\\_%")
        .await
        .unwrap();
    assert_eq!(surnames(&found), ["O_Brien"]);

    let found = repo
        .find_all_by_rank_and_last_like(Rank::Lieutenant, "O_%")
        .await
        .unwrap();
    assert_eq!(surnames(&found), ["O_Brien", "OxBrien"]);
}

pub async fn malformed_pattern_is_rejected(repo: &dyn OfficerRepository) {
    seed(repo).await;
    let err = repo
        .find_all_by_rank_and_last_like(Rank::Captain, "Kirk\\")
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "INVALID_ARGUMENT");
}

pub async fn delete_twice_is_not_found(repo: &dyn OfficerRepository) {
    let saved = seed(repo).await;
    repo.delete(&saved[0]).await.unwrap();

    let err = repo.delete(&saved[0]).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(repo.count().await.unwrap(), 4);
}

pub async fn ids_are_not_reused(repo: &dyn OfficerRepository) {
    let saved = seed(repo).await;
    let last_id = saved[4].require_id().unwrap();
    repo.delete_by_id(last_id).await.unwrap();

    let again = repo
        .save(&Officer::new(Rank::Captain, "Jonathan", "Archer"))
        .await
        .unwrap();
    assert!(again.require_id().unwrap() > last_id);
}

pub async fn update_keeps_id(repo: &dyn OfficerRepository) {
    let saved = seed(repo).await;
    let mut kirk = saved[0].clone();
    kirk.change_rank(Rank::Admiral);

    let updated = repo.save(&kirk).await.unwrap();
    assert_eq!(updated.id, saved[0].id);
    assert_eq!(repo.count().await.unwrap(), 5);

    let found = repo.find_by_id(kirk.require_id().unwrap()).await.unwrap().unwrap();
    assert_eq!(found.rank, Rank::Admiral);

    // Saving an unchanged row is still a successful update.
    repo.save(&found).await.unwrap();
}

pub async fn save_with_unknown_id_is_not_found(repo: &dyn OfficerRepository) {
    let ghost = Officer::new(Rank::Ensign, "Ghost", "Ship").with_id(OfficerId::new(999));
    let err = repo.save(&ghost).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(repo.count().await.unwrap(), 0);
}

pub async fn blank_names_are_rejected(repo: &dyn OfficerRepository) {
    let err = repo
        .save(&Officer::new(Rank::Captain, "Christopher", " "))
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "CONSTRAINT_VIOLATION");
    assert_eq!(repo.count().await.unwrap(), 0);
}

pub async fn find_by_rank(repo: &dyn OfficerRepository) {
    seed(repo).await;
    assert_eq!(surnames(&repo.find_by_rank(Rank::Admiral).await.unwrap()), ["Janeway"]);
    assert_eq!(repo.find_by_rank(Rank::Captain).await.unwrap().len(), 4);
    assert!(repo.find_by_rank(Rank::Ensign).await.unwrap().is_empty());
}

pub async fn paging(repo: &dyn OfficerRepository) {
    let saved = seed(repo).await;

    let first = repo.find_page(PageRequest::new(0, 2)).await.unwrap();
    assert_eq!(first.content, saved[..2]);
    assert_eq!(first.total_elements, 5);
    assert_eq!(first.total_pages(), 3);
    assert!(first.has_next());

    let last = repo.find_page(PageRequest::new(2, 2)).await.unwrap();
    assert_eq!(last.content, saved[4..]);
    assert!(!last.has_next());

    let beyond = repo.find_page(PageRequest::new(9, 2)).await.unwrap();
    assert!(beyond.is_empty());
    assert_eq!(beyond.total_elements, 5);
}

pub async fn page_far_beyond_end_is_empty(repo: &dyn OfficerRepository) {
    seed(repo).await;
    let page = repo.find_page(PageRequest::new(usize::MAX / 2, 100)).await.unwrap();
    assert!(page.is_empty());
    assert_eq!(page.total_elements, 5);
    assert!(!page.has_next());
}

pub async fn delete_all_reports_removed_rows(repo: &dyn OfficerRepository) {
    seed(repo).await;
    assert_eq!(repo.delete_all().await.unwrap(), 5);
    assert_eq!(repo.delete_all().await.unwrap(), 0);
    assert_eq!(repo.count().await.unwrap(), 0);
}
