//! Service functions against the mocked repository traits.

use chrono::NaiveDate;
use glowcast_admin::domain::ledger::TradeKind;
use glowcast_admin::domain::payout::PayoutStatus;
use glowcast_admin::domain::relation::RelationKind;
use glowcast_admin::domain::types::{DateRange, ObjectId};
use glowcast_admin::domain::user::UserStatus;
use glowcast_admin::repository::Pagination;
use glowcast_admin::repository::errors::RepositoryError;
use glowcast_admin::repository::mock::MockGateway;
use glowcast_admin::services::ledger::LedgerListParams;
use glowcast_admin::services::users::UserListParams;
use glowcast_admin::services::{ServiceError, agency, ledger, payouts, relations, users};

fn page(page: usize) -> Pagination {
    Pagination { page, per_page: 10 }
}

#[tokio::test]
async fn user_search_is_trimmed_and_filters_forwarded() {
    let mut repo = MockGateway::new();
    repo.expect_list_users()
        .withf(|q| {
            q.search.as_deref() == Some("ada")
                && q.status == Some(UserStatus::Blocked)
                && q.pagination.map(|p| (p.page, p.per_page)) == Some((2, 10))
        })
        .returning(|_| Ok((0, vec![])));

    let params = UserListParams {
        search: Some("  ada  ".to_string()),
        status: Some(UserStatus::Blocked),
        date_range: DateRange::All,
    };
    let (total, items) = users::list_users(&repo, &params, page(2)).await.unwrap();
    assert_eq!(total, 0);
    assert!(items.is_empty());
}

#[tokio::test]
async fn blank_user_search_is_dropped() {
    let mut repo = MockGateway::new();
    repo.expect_list_users()
        .withf(|q| q.search.is_none())
        .returning(|_| Ok((0, vec![])));

    let params = UserListParams {
        search: Some("   ".to_string()),
        ..Default::default()
    };
    users::list_users(&repo, &params, page(1)).await.unwrap();
}

#[tokio::test]
async fn relation_query_carries_profile_and_tab() {
    let mut repo = MockGateway::new();
    repo.expect_list_relations()
        .withf(|q| {
            q.user_id.as_str() == "u1"
                && q.kind == RelationKind::Visitors
                && q.pagination.map(|p| p.page) == Some(3)
        })
        .returning(|_| Ok((0, vec![])));

    let user_id = ObjectId::new("u1").unwrap();
    relations::list_relations(&repo, &user_id, RelationKind::Visitors, page(3))
        .await
        .unwrap();
}

#[tokio::test]
async fn trade_kind_filter_is_optional_but_forwarded() {
    let mut repo = MockGateway::new();
    repo.expect_list_trades()
        .withf(|q| q.trader_id.as_str() == "t9" && q.kind == Some(TradeKind::Sell))
        .returning(|_| Ok((0, vec![])));

    let mut params = LedgerListParams::new(ObjectId::new("t9").unwrap());
    params.kind = Some(TradeKind::Sell);
    ledger::list_trades(&repo, &params, page(1)).await.unwrap();
}

#[tokio::test]
async fn commission_query_is_scoped_to_the_agency_and_range() {
    let range = DateRange::between(
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
    )
    .unwrap();

    let mut repo = MockGateway::new();
    repo.expect_list_commissions()
        .withf(move |q| q.agency_id.as_str() == "ag7" && q.date_range == range)
        .returning(|_| Ok((0, vec![])));

    let agency_id = ObjectId::new("ag7").unwrap();
    agency::list_commissions(&repo, &agency_id, range, page(1))
        .await
        .unwrap();
}

#[tokio::test]
async fn payout_rejection_surfaces_the_server_message() {
    let mut repo = MockGateway::new();
    repo.expect_list_payouts()
        .returning(|_| Err(RepositoryError::Rejected("ledger offline".to_string())));

    let err = payouts::list_payouts(&repo, Some(PayoutStatus::Pending), DateRange::All, page(1))
        .await
        .unwrap_err();
    match err {
        ServiceError::Repository(RepositoryError::Rejected(message)) => {
            assert_eq!(message, "ledger offline");
        }
        other => panic!("expected a rejection, got {other:?}"),
    }
}
