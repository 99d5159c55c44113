mod common;

use assert_matches::assert_matches;
use common::{exchange, test_pool, user};
use skillswap_core::error::CoreError;
use skillswap_core::status::PointReason;
use skillswap_db::models::point::CreatePointTransaction;
use skillswap_db::repositories::{LedgerError, PointRepo};

fn entry(user_id: i64, amount: i64) -> CreatePointTransaction {
    CreatePointTransaction {
        user_id,
        amount,
        reason: PointReason::ManualAdjustment,
        exchange_id: None,
    }
}

#[tokio::test]
async fn balance_defaults_to_zero() {
    let pool = test_pool().await;
    let a = user(&pool, "a@example.com").await;
    assert_eq!(PointRepo::balance(&pool, a.id).await.unwrap(), 0);
    assert!(PointRepo::list_transactions(&pool, a.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn credit_then_debit() {
    let pool = test_pool().await;
    let a = user(&pool, "a@example.com").await;

    PointRepo::record_transaction(&pool, &entry(a.id, 10)).await.unwrap();
    PointRepo::record_transaction(&pool, &entry(a.id, -4)).await.unwrap();

    assert_eq!(PointRepo::balance(&pool, a.id).await.unwrap(), 6);
    let history = PointRepo::list_transactions(&pool, a.id).await.unwrap();
    let amounts: Vec<_> = history.iter().map(|t| t.amount).collect();
    assert_eq!(amounts, vec![-4, 10]);
}

#[tokio::test]
async fn overdraw_is_rejected_without_writing() {
    let pool = test_pool().await;
    let a = user(&pool, "a@example.com").await;
    PointRepo::record_transaction(&pool, &entry(a.id, 3)).await.unwrap();

    let err = PointRepo::record_transaction(&pool, &entry(a.id, -5))
        .await
        .unwrap_err();
    assert_matches!(err, LedgerError::InsufficientBalance { balance: 3, amount: -5 });
    assert_matches!(CoreError::from(err), CoreError::Conflict(_));

    assert_eq!(PointRepo::balance(&pool, a.id).await.unwrap(), 3);
    assert_eq!(PointRepo::list_transactions(&pool, a.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn balance_never_negative_over_any_sequence() {
    let pool = test_pool().await;
    let a = user(&pool, "a@example.com").await;
    let amounts = [5, -3, -4, 10, -8, -1, -1, 7, -9];

    let mut accepted = Vec::new();
    for amount in amounts {
        if PointRepo::record_transaction(&pool, &entry(a.id, amount)).await.is_ok() {
            accepted.push(amount);
        }
        assert!(PointRepo::balance(&pool, a.id).await.unwrap() >= 0);
    }

    let (expected, _) = skillswap_core::points::replay(&amounts);
    assert_eq!(PointRepo::balance(&pool, a.id).await.unwrap(), expected);
    assert_eq!(accepted.iter().sum::<i64>(), expected);
}

#[tokio::test]
async fn ledger_entry_survives_exchange_deletion() {
    let pool = test_pool().await;
    let a = user(&pool, "a@example.com").await;
    let b = user(&pool, "b@example.com").await;
    let ex = exchange(&pool, a.id, b.id).await;

    PointRepo::record_transaction(
        &pool,
        &CreatePointTransaction {
            user_id: a.id,
            amount: 2,
            reason: PointReason::Training,
            exchange_id: Some(ex.id),
        },
    )
    .await
    .unwrap();

    sqlx::query("DELETE FROM exchanges WHERE id = ?")
        .bind(ex.id)
        .execute(&pool)
        .await
        .unwrap();

    let history = PointRepo::list_transactions(&pool, a.id).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].exchange_id, None);
    assert_eq!(history[0].reason, PointReason::Training);
}
