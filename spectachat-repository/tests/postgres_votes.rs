//! Integration tests for the PostgreSQL vote repository.
//!
//! These tests need a live PostgreSQL database reachable through
//! `DATABASE_URL` and are ignored by default.
//!
//! Run with: `cargo test --test postgres_votes -- --ignored`

use chrono::Utc;
use uuid::Uuid;

use spectachat_repository::{PostgresVoteRepository, VoteRepository};
use spectachat_shared::types::{TargetType, VoteKey, VoteRecord, VoteState};

async fn connect() -> sqlx::PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = sqlx::PgPool::connect(&url).await.expect("connect failed");
    sqlx::migrate!("src/postgres/migrations")
        .run(&pool)
        .await
        .expect("migrations failed");
    pool
}

async fn make_profile(pool: &sqlx::PgPool) -> Uuid {
    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO profiles (id, email, username) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(format!("{id}@example.com"))
        .bind(id.to_string())
        .execute(pool)
        .await
        .expect("profile insert failed");
    id
}

fn make_key(user_id: Uuid) -> VoteKey {
    VoteKey {
        user_id,
        target_id: Uuid::new_v4(),
        target_type: TargetType::Question,
    }
}

#[tokio::test]
#[ignore]
async fn insert_then_find_returns_the_row() {
    let pool = connect().await;
    let repository = PostgresVoteRepository::new(pool.clone()).await.unwrap();
    let key = make_key(make_profile(&pool).await);

    let record = VoteRecord {
        key,
        state: VoteState::Up,
        voted_at: Utc::now(),
    };
    repository.insert_vote(&record).await.unwrap();

    let found = repository.find_vote(&key).await.unwrap().unwrap();
    assert_eq!(found.key, key);
    assert_eq!(found.state, VoteState::Up);
}

#[tokio::test]
#[ignore]
async fn update_flips_the_row_in_place() {
    let pool = connect().await;
    let repository = PostgresVoteRepository::new(pool.clone()).await.unwrap();
    let key = make_key(make_profile(&pool).await);

    repository
        .insert_vote(&VoteRecord {
            key,
            state: VoteState::Down,
            voted_at: Utc::now(),
        })
        .await
        .unwrap();
    repository.update_vote(&key, VoteState::Up).await.unwrap();

    let found = repository.find_vote(&key).await.unwrap().unwrap();
    assert_eq!(found.state, VoteState::Up);
}

#[tokio::test]
#[ignore]
async fn delete_leaves_no_row_behind() {
    let pool = connect().await;
    let repository = PostgresVoteRepository::new(pool.clone()).await.unwrap();
    let key = make_key(make_profile(&pool).await);

    repository
        .insert_vote(&VoteRecord {
            key,
            state: VoteState::Up,
            voted_at: Utc::now(),
        })
        .await
        .unwrap();
    repository.delete_vote(&key).await.unwrap();

    assert!(repository.find_vote(&key).await.unwrap().is_none());
}

#[tokio::test]
#[ignore]
async fn sum_votes_nets_up_and_down() {
    let pool = connect().await;
    let repository = PostgresVoteRepository::new(pool.clone()).await.unwrap();
    let target_id = Uuid::new_v4();

    for state in [VoteState::Up, VoteState::Up, VoteState::Down] {
        let key = VoteKey {
            user_id: make_profile(&pool).await,
            target_id,
            target_type: TargetType::Answer,
        };
        repository
            .insert_vote(&VoteRecord {
                key,
                state,
                voted_at: Utc::now(),
            })
            .await
            .unwrap();
    }

    let tally = repository
        .sum_votes(target_id, TargetType::Answer)
        .await
        .unwrap();
    assert_eq!(tally, 1);
}
