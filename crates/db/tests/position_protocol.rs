//! Integration tests for the shared position protocol.
//!
//! Exercises append, move and delete against FAQs (the protocol is generic,
//! so one collection covers the mechanics) plus a few checks that the other
//! ordered collections are wired to the same protocol:
//! - Creates append at `MAX(position) + 1`
//! - Moves swap exactly two rows and leave everything else alone
//! - Boundary moves are no-ops
//! - Delete keeps or compacts gaps depending on the policy
//! - `renumber` repairs gaps and duplicates
//! - Concurrent moves queue behind each other and never break density

use assert_matches::assert_matches;
use contentdesk_core::error::CoreError;
use contentdesk_core::ordering::{is_dense, Direction, GapPolicy, MoveOutcome};
use contentdesk_db::error::RepoError;
use contentdesk_db::models::faq::FaqInput;
use contentdesk_db::models::review::ReviewInput;
use contentdesk_db::repositories::position::{self, list_positions};
use contentdesk_db::repositories::{FaqRepo, ReviewRepo};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn faq(question: &str) -> FaqInput {
    FaqInput {
        question: question.to_string(),
        answer: format!("Answer to {question}"),
    }
}

async fn setup(pool: &SqlitePool) {
    contentdesk_db::bootstrap(pool).await.unwrap();
}

/// Create FAQs named `q0..qN` and return their ids in creation order.
async fn seed_faqs(pool: &SqlitePool, count: usize) -> Vec<i64> {
    let mut ids = Vec::with_capacity(count);
    for i in 0..count {
        let created = FaqRepo::create(pool, &faq(&format!("q{i}"))).await.unwrap();
        ids.push(created.id);
    }
    ids
}

async fn faq_ids_in_order(pool: &SqlitePool) -> Vec<i64> {
    FaqRepo::list(pool)
        .await
        .unwrap()
        .into_iter()
        .map(|f| f.id)
        .collect()
}

async fn faq_positions(pool: &SqlitePool) -> Vec<i64> {
    list_positions::<FaqRepo>(pool)
        .await
        .unwrap()
        .into_iter()
        .map(|(_, p)| p)
        .collect()
}

// ---------------------------------------------------------------------------
// Append
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn create_appends_at_end(pool: SqlitePool) {
    setup(&pool).await;

    let first = FaqRepo::create(&pool, &faq("first")).await.unwrap();
    let second = FaqRepo::create(&pool, &faq("second")).await.unwrap();
    let third = FaqRepo::create(&pool, &faq("third")).await.unwrap();

    assert_eq!(first.position, 0);
    assert_eq!(second.position, 1);
    assert_eq!(third.position, 2);
    assert_eq!(faq_ids_in_order(&pool).await, vec![first.id, second.id, third.id]);
}

#[sqlx::test(migrations = false)]
async fn create_after_gap_uses_max_plus_one(pool: SqlitePool) {
    setup(&pool).await;
    let ids = seed_faqs(&pool, 3).await;

    FaqRepo::delete(&pool, ids[1], GapPolicy::Keep).await.unwrap();
    let next = FaqRepo::create(&pool, &faq("after gap")).await.unwrap();

    assert_eq!(next.position, 3);
}

#[sqlx::test(migrations = false)]
async fn concurrent_creates_get_distinct_positions(pool: SqlitePool) {
    setup(&pool).await;

    let mut handles = Vec::new();
    for i in 0..8 {
        let pool = pool.clone();
        handles.push(tokio::spawn(async move {
            FaqRepo::create(&pool, &faq(&format!("parallel {i}"))).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let positions = faq_positions(&pool).await;
    assert_eq!(positions.len(), 8);
    assert!(is_dense(&positions), "positions not dense: {positions:?}");
}

// ---------------------------------------------------------------------------
// Move
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn move_up_swaps_with_previous(pool: SqlitePool) {
    setup(&pool).await;
    let ids = seed_faqs(&pool, 3).await;

    let outcome = FaqRepo::move_position(&pool, ids[2], Direction::Up)
        .await
        .unwrap();

    assert_eq!(
        outcome,
        MoveOutcome::Swapped {
            id: ids[2],
            displaced_id: ids[1],
            from: 2,
            to: 1,
        }
    );
    assert_eq!(faq_ids_in_order(&pool).await, vec![ids[0], ids[2], ids[1]]);
    assert!(is_dense(&faq_positions(&pool).await));
}

#[sqlx::test(migrations = false)]
async fn move_down_swaps_with_next(pool: SqlitePool) {
    setup(&pool).await;
    let ids = seed_faqs(&pool, 3).await;

    FaqRepo::move_position(&pool, ids[0], Direction::Down)
        .await
        .unwrap();

    assert_eq!(faq_ids_in_order(&pool).await, vec![ids[1], ids[0], ids[2]]);
}

#[sqlx::test(migrations = false)]
async fn move_then_reverse_restores_order(pool: SqlitePool) {
    setup(&pool).await;
    let ids = seed_faqs(&pool, 4).await;

    FaqRepo::move_position(&pool, ids[1], Direction::Down)
        .await
        .unwrap();
    FaqRepo::move_position(&pool, ids[1], Direction::Up)
        .await
        .unwrap();

    assert_eq!(faq_ids_in_order(&pool).await, ids);
}

#[sqlx::test(migrations = false)]
async fn move_first_up_is_noop(pool: SqlitePool) {
    setup(&pool).await;
    let ids = seed_faqs(&pool, 2).await;

    let outcome = FaqRepo::move_position(&pool, ids[0], Direction::Up)
        .await
        .unwrap();

    assert_eq!(
        outcome,
        MoveOutcome::AtBoundary {
            id: ids[0],
            position: 0,
        }
    );
    assert_eq!(faq_positions(&pool).await, vec![0, 1]);
}

#[sqlx::test(migrations = false)]
async fn move_last_down_is_noop(pool: SqlitePool) {
    setup(&pool).await;
    let ids = seed_faqs(&pool, 3).await;

    let outcome = FaqRepo::move_position(&pool, ids[2], Direction::Down)
        .await
        .unwrap();

    assert!(outcome.is_noop());
    assert_eq!(faq_ids_in_order(&pool).await, ids);
}

#[sqlx::test(migrations = false)]
async fn move_missing_row_is_not_found(pool: SqlitePool) {
    setup(&pool).await;
    seed_faqs(&pool, 1).await;

    let err = FaqRepo::move_position(&pool, 999, Direction::Up)
        .await
        .unwrap_err();

    assert_matches!(
        err,
        RepoError::Core(CoreError::NotFound { entity: "FAQ", id: 999 })
    );
    assert_eq!(err.to_string(), "No FAQ found with ID: 999");
}

#[sqlx::test(migrations = false)]
async fn move_across_gap_is_noop_under_keep(pool: SqlitePool) {
    setup(&pool).await;
    let ids = seed_faqs(&pool, 3).await;
    FaqRepo::delete(&pool, ids[1], GapPolicy::Keep).await.unwrap();

    // Positions are now {0, 2}; nothing occupies position 1.
    let outcome = FaqRepo::move_position(&pool, ids[2], Direction::Up)
        .await
        .unwrap();

    assert!(outcome.is_noop());
    assert_eq!(faq_positions(&pool).await, vec![0, 2]);
}

#[sqlx::test(migrations = false)]
async fn move_with_duplicate_positions_picks_lowest_id(pool: SqlitePool) {
    setup(&pool).await;
    let ids = seed_faqs(&pool, 3).await;
    sqlx::query("UPDATE faqs SET position = 1 WHERE id = ?")
        .bind(ids[2])
        .execute(&pool)
        .await
        .unwrap();

    let outcome = FaqRepo::move_position(&pool, ids[0], Direction::Down)
        .await
        .unwrap();

    assert_matches!(outcome, MoveOutcome::Swapped { displaced_id, .. } if displaced_id == ids[1]);
}

#[sqlx::test(migrations = false)]
async fn move_does_not_touch_other_collections(pool: SqlitePool) {
    setup(&pool).await;
    let faq_ids = seed_faqs(&pool, 2).await;
    let review = ReviewRepo::create(
        &pool,
        &ReviewInput {
            name: "Ana".to_string(),
            review: "Great".to_string(),
            rating: 5,
            date: "2024-01-01".to_string(),
        },
    )
    .await
    .unwrap();

    FaqRepo::move_position(&pool, faq_ids[1], Direction::Up)
        .await
        .unwrap();

    let reloaded = ReviewRepo::find_by_id(&pool, review.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.position, 0);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn delete_keep_leaves_gap(pool: SqlitePool) {
    setup(&pool).await;
    let ids = seed_faqs(&pool, 3).await;

    FaqRepo::delete(&pool, ids[1], GapPolicy::Keep).await.unwrap();

    assert_eq!(faq_positions(&pool).await, vec![0, 2]);
    assert_eq!(faq_ids_in_order(&pool).await, vec![ids[0], ids[2]]);
}

#[sqlx::test(migrations = false)]
async fn delete_compact_shifts_later_rows(pool: SqlitePool) {
    setup(&pool).await;
    let ids = seed_faqs(&pool, 4).await;

    FaqRepo::delete(&pool, ids[1], GapPolicy::Compact)
        .await
        .unwrap();

    assert_eq!(faq_positions(&pool).await, vec![0, 1, 2]);
    assert_eq!(faq_ids_in_order(&pool).await, vec![ids[0], ids[2], ids[3]]);
}

#[sqlx::test(migrations = false)]
async fn delete_missing_row_is_not_found(pool: SqlitePool) {
    setup(&pool).await;

    for policy in [GapPolicy::Keep, GapPolicy::Compact] {
        let err = FaqRepo::delete(&pool, 42, policy).await.unwrap_err();
        assert_matches!(err, RepoError::Core(CoreError::NotFound { id: 42, .. }));
    }
}

// ---------------------------------------------------------------------------
// Renumber
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn renumber_repairs_gaps_and_duplicates(pool: SqlitePool) {
    setup(&pool).await;
    let ids = seed_faqs(&pool, 4).await;
    FaqRepo::delete(&pool, ids[0], GapPolicy::Keep).await.unwrap();
    sqlx::query("UPDATE faqs SET position = 7 WHERE id = ?")
        .bind(ids[3])
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("UPDATE faqs SET position = 2 WHERE id = ?")
        .bind(ids[1])
        .execute(&pool)
        .await
        .unwrap();

    // Positions: ids[1]=2, ids[2]=2, ids[3]=7
    let changed = position::renumber::<FaqRepo>(&pool).await.unwrap();

    assert_eq!(changed, 3);
    assert_eq!(faq_positions(&pool).await, vec![0, 1, 2]);
    assert_eq!(faq_ids_in_order(&pool).await, vec![ids[1], ids[2], ids[3]]);
}

#[sqlx::test(migrations = false)]
async fn renumber_dense_collection_changes_nothing(pool: SqlitePool) {
    setup(&pool).await;
    seed_faqs(&pool, 3).await;

    let changed = position::renumber::<FaqRepo>(&pool).await.unwrap();

    assert_eq!(changed, 0);
}

// ---------------------------------------------------------------------------
// Concurrency and long sequences
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn concurrent_moves_all_succeed_and_stay_dense(pool: SqlitePool) {
    setup(&pool).await;
    let ids = seed_faqs(&pool, 6).await;

    let mut handles = Vec::new();
    for i in 0..40 {
        let pool = pool.clone();
        let id = ids[i % ids.len()];
        let direction = if i % 2 == 0 { Direction::Up } else { Direction::Down };
        handles.push(tokio::spawn(async move {
            FaqRepo::move_position(&pool, id, direction).await
        }));
    }
    for handle in handles {
        let result = handle.await.unwrap();
        assert!(result.is_ok(), "move failed: {result:?}");
    }

    let positions = faq_positions(&pool).await;
    assert_eq!(positions, vec![0, 1, 2, 3, 4, 5]);

    let mut listed = faq_ids_in_order(&pool).await;
    listed.sort_unstable();
    assert_eq!(listed, ids);
}

#[sqlx::test(migrations = false)]
async fn concurrent_renumber_and_moves_do_not_fail(pool: SqlitePool) {
    setup(&pool).await;
    let ids = seed_faqs(&pool, 4).await;

    let mut moves = Vec::new();
    for &id in &ids {
        let pool = pool.clone();
        moves.push(tokio::spawn(async move {
            FaqRepo::move_position(&pool, id, Direction::Down).await
        }));
    }
    let renumbers: Vec<_> = (0..4)
        .map(|_| {
            let pool = pool.clone();
            tokio::spawn(async move { position::renumber::<FaqRepo>(&pool).await })
        })
        .collect();

    for handle in moves {
        handle.await.unwrap().unwrap();
    }
    for handle in renumbers {
        handle.await.unwrap().unwrap();
    }

    assert!(is_dense(&faq_positions(&pool).await));
}

#[sqlx::test(migrations = false)]
async fn random_create_and_move_sequence_stays_dense(pool: SqlitePool) {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    setup(&pool).await;
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut ids: Vec<i64> = Vec::new();

    for step in 0..200 {
        if ids.is_empty() || rng.random_bool(0.3) {
            let created = FaqRepo::create(&pool, &faq(&format!("step {step}")))
                .await
                .unwrap();
            ids.push(created.id);
        } else {
            let id = ids[rng.random_range(0..ids.len())];
            let direction = if rng.random_bool(0.5) {
                Direction::Up
            } else {
                Direction::Down
            };
            FaqRepo::move_position(&pool, id, direction).await.unwrap();
        }

        let positions = faq_positions(&pool).await;
        assert_eq!(positions.len(), ids.len());
        assert!(is_dense(&positions), "step {step}: {positions:?}");
    }

    // Delete roughly half of the rows, in random order, compacting each time.
    let mut survivors = ids.clone();
    while survivors.len() > ids.len() / 2 {
        let victim = survivors.swap_remove(rng.random_range(0..survivors.len()));
        FaqRepo::delete(&pool, victim, GapPolicy::Compact)
            .await
            .unwrap();

        let positions = faq_positions(&pool).await;
        assert_eq!(positions.len(), survivors.len());
        assert!(is_dense(&positions), "after deleting {victim}: {positions:?}");
    }
}
