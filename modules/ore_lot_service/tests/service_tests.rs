//! Integration tests for the ore lot domain service over a mock repository

mod common;

use chrono::Utc;
use common::{fixed_production_date, sample_new_lot, sample_update, MockOreLotRepo};
use ore_lot_service::api::native::NativeClient;
use ore_lot_service::contract::{LotStatus, OreLotApi, OreLotError};
use ore_lot_service::domain::Service;
use rust_decimal::Decimal;
use std::sync::Arc;

fn service(repo: Arc<MockOreLotRepo>) -> Service {
    Service::new(repo)
}

#[tokio::test]
async fn create_assigns_id_and_defaults_production_date() {
    let repo = MockOreLotRepo::new();
    let svc = service(repo.clone());

    let before = Utc::now();
    let lot = svc.create_lot(sample_new_lot("MNA-2026-000123")).await.unwrap();
    let after = Utc::now();

    assert!(lot.id > 0);
    assert_eq!(lot.lot_code, "MNA-2026-000123");
    assert_eq!(lot.origin_mine, "Carajas N4E");
    assert_eq!(lot.iron_grade, Decimal::new(652, 1));
    assert_eq!(lot.moisture, Decimal::new(71, 1));
    assert_eq!(lot.silica, Some(Decimal::new(43, 1)));
    assert_eq!(lot.phosphorus, Some(Decimal::new(38, 3)));
    assert_eq!(lot.tonnage, Decimal::from(12_500));
    assert_eq!(lot.status, LotStatus::InStock);
    assert_eq!(lot.current_location, "Patio Carajas");
    // omitted production date defaults to "now"
    assert!(lot.production_date >= before && lot.production_date <= after);
}

#[tokio::test]
async fn create_preserves_supplied_production_date() {
    let repo = MockOreLotRepo::new();
    let svc = service(repo);

    let mut input = sample_new_lot("MNA-2026-000124");
    input.production_date = Some(fixed_production_date());

    let lot = svc.create_lot(input).await.unwrap();
    assert_eq!(lot.production_date, fixed_production_date());
}

#[tokio::test]
async fn duplicate_lot_code_is_a_conflict() {
    let repo = MockOreLotRepo::new();
    let svc = service(repo.clone());

    svc.create_lot(sample_new_lot("A-1")).await.unwrap();
    let err = svc.create_lot(sample_new_lot("A-1")).await.unwrap_err();

    match err {
        OreLotError::Conflict { reason } => assert!(reason.contains("'A-1'")),
        other => panic!("expected conflict, got {:?}", other),
    }
    assert_eq!(repo.count(), 1);
}

#[tokio::test]
async fn create_race_losing_to_the_unique_index_is_a_conflict() {
    let repo = MockOreLotRepo::new();
    let svc = service(repo.clone());

    svc.create_lot(sample_new_lot("A-1")).await.unwrap();

    // Slip past the pre-check; the emulated unique index rejects the insert
    // and the service must surface the same conflict, not Internal.
    repo.open_race_window();
    let err = svc.create_lot(sample_new_lot("A-1")).await.unwrap_err();

    assert!(matches!(err, OreLotError::Conflict { .. }));
    assert_eq!(repo.count(), 1);
}

#[tokio::test]
async fn validation_failures_persist_nothing() {
    let repo = MockOreLotRepo::new();
    let svc = service(repo.clone());

    let blank_code = sample_new_lot("  ");

    let mut bad_grade = sample_new_lot("B-1");
    bad_grade.iron_grade = Decimal::from(101);

    let mut bad_moisture = sample_new_lot("B-2");
    bad_moisture.moisture = Decimal::from(-1);

    let mut bad_tonnage = sample_new_lot("B-3");
    bad_tonnage.tonnage = Decimal::ZERO;

    let mut bad_status = sample_new_lot("B-4");
    bad_status.status = 7;

    for input in [blank_code, bad_grade, bad_moisture, bad_tonnage, bad_status] {
        let err = svc.create_lot(input).await.unwrap_err();
        assert!(matches!(err, OreLotError::Validation { .. }));
    }
    assert_eq!(repo.count(), 0);
}

#[tokio::test]
async fn get_missing_lot_is_not_found() {
    let svc = service(MockOreLotRepo::new());
    assert_eq!(
        svc.get_lot(42).await.unwrap_err(),
        OreLotError::NotFound { id: 42 }
    );
}

#[tokio::test]
async fn get_returns_the_stored_lot() {
    let svc = service(MockOreLotRepo::new());
    let created = svc.create_lot(sample_new_lot("C-1")).await.unwrap();

    let fetched = svc.get_lot(created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn list_returns_every_lot_in_storage_order() {
    let svc = service(MockOreLotRepo::new());
    for code in ["L-1", "L-2", "L-3"] {
        svc.create_lot(sample_new_lot(code)).await.unwrap();
    }

    let lots = svc.list_lots().await.unwrap();
    let codes: Vec<&str> = lots.iter().map(|l| l.lot_code.as_str()).collect();
    assert_eq!(codes, ["L-1", "L-2", "L-3"]);
}

#[tokio::test]
async fn update_missing_lot_is_not_found() {
    let svc = service(MockOreLotRepo::new());
    assert_eq!(
        svc.update_lot(9, sample_update()).await.unwrap_err(),
        OreLotError::NotFound { id: 9 }
    );
}

#[tokio::test]
async fn update_overwrites_everything_but_id_and_lot_code() {
    let svc = service(MockOreLotRepo::new());
    let created = svc.create_lot(sample_new_lot("U-1")).await.unwrap();

    svc.update_lot(created.id, sample_update()).await.unwrap();

    let updated = svc.get_lot(created.id).await.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.lot_code, "U-1");
    assert_eq!(updated.origin_mine, "Serra Norte");
    assert_eq!(updated.iron_grade, Decimal::new(641, 1));
    assert_eq!(updated.moisture, Decimal::new(80, 1));
    assert_eq!(updated.silica, None);
    assert_eq!(updated.phosphorus, Some(Decimal::new(41, 3)));
    assert_eq!(updated.tonnage, Decimal::from(11_980));
    assert_eq!(updated.status, LotStatus::InTransit);
    assert_eq!(updated.current_location, "EFC - Train 208");
}

#[tokio::test]
async fn update_without_production_date_retains_stored_value() {
    let svc = service(MockOreLotRepo::new());

    let mut input = sample_new_lot("U-2");
    input.production_date = Some(fixed_production_date());
    let created = svc.create_lot(input).await.unwrap();

    let changes = sample_update(); // production_date: None
    svc.update_lot(created.id, changes).await.unwrap();

    let updated = svc.get_lot(created.id).await.unwrap();
    assert_eq!(updated.production_date, fixed_production_date());
}

#[tokio::test]
async fn update_with_production_date_overwrites_stored_value() {
    let svc = service(MockOreLotRepo::new());
    let created = svc.create_lot(sample_new_lot("U-3")).await.unwrap();

    let mut changes = sample_update();
    changes.production_date = Some(fixed_production_date());
    svc.update_lot(created.id, changes).await.unwrap();

    let updated = svc.get_lot(created.id).await.unwrap();
    assert_eq!(updated.production_date, fixed_production_date());
}

#[tokio::test]
async fn update_rejects_invalid_input_before_touching_storage() {
    let svc = service(MockOreLotRepo::new());
    let created = svc.create_lot(sample_new_lot("U-4")).await.unwrap();

    let mut changes = sample_update();
    changes.status = 3;
    let err = svc.update_lot(created.id, changes).await.unwrap_err();
    assert!(matches!(err, OreLotError::Validation { .. }));

    // stored row unchanged
    let stored = svc.get_lot(created.id).await.unwrap();
    assert_eq!(stored.origin_mine, "Carajas N4E");
}

#[tokio::test]
async fn delete_missing_lot_is_not_found() {
    let svc = service(MockOreLotRepo::new());
    assert_eq!(
        svc.delete_lot(5).await.unwrap_err(),
        OreLotError::NotFound { id: 5 }
    );
}

#[tokio::test]
async fn delete_removes_the_lot() {
    let svc = service(MockOreLotRepo::new());
    let created = svc.create_lot(sample_new_lot("D-1")).await.unwrap();

    svc.delete_lot(created.id).await.unwrap();

    assert_eq!(
        svc.get_lot(created.id).await.unwrap_err(),
        OreLotError::NotFound { id: created.id }
    );
}

#[tokio::test]
async fn delete_of_a_referenced_lot_is_a_conflict() {
    let repo = MockOreLotRepo::new();
    let svc = service(repo.clone());
    let created = svc.create_lot(sample_new_lot("D-2")).await.unwrap();

    repo.mark_referenced(created.id);

    let err = svc.delete_lot(created.id).await.unwrap_err();
    assert!(matches!(err, OreLotError::Conflict { .. }));
    assert_eq!(repo.count(), 1);
}

#[tokio::test]
async fn native_client_exposes_the_full_contract() {
    let svc = Arc::new(service(MockOreLotRepo::new()));
    let client: Arc<dyn OreLotApi> = Arc::new(NativeClient::new(svc));

    let created = client.create_lot(sample_new_lot("N-1")).await.unwrap();
    assert_eq!(client.get_lot(created.id).await.unwrap(), created);
    assert_eq!(client.list_lots().await.unwrap().len(), 1);

    client.update_lot(created.id, sample_update()).await.unwrap();
    assert_eq!(
        client.get_lot(created.id).await.unwrap().status,
        LotStatus::InTransit
    );

    client.delete_lot(created.id).await.unwrap();
    assert!(client.list_lots().await.unwrap().is_empty());
}
