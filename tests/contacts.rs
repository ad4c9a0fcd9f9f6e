mod common;

use axum::http::StatusCode;
use common::{account, contact, TestDb};
use serde_json::json;

#[tokio::test]
async fn duplicate_email_conflicts_and_inserts_nothing() {
    let Some(db) = TestDb::provision().await else { return };

    let account_id = db.create("/accounts/", account("Test Company")).await;
    db.create("/contacts/", contact(account_id, "john.doe@test.com")).await;
    assert_eq!(db.count("contacts").await, 1);

    let (status, body) = db.post("/contacts/", contact(account_id, "john.doe@test.com")).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "unique_violation");
    assert_eq!(db.count("contacts").await, 1);

    db.teardown().await;
}

#[tokio::test]
async fn update_into_taken_email_conflicts() {
    let Some(db) = TestDb::provision().await else { return };

    let account_id = db.create("/accounts/", account("Test Company")).await;
    db.create("/contacts/", contact(account_id, "a@test.com")).await;
    let second = db.create("/contacts/", contact(account_id, "b@test.com")).await;

    let (status, _) = db
        .put(&format!("/contacts/{}", second), contact(account_id, "a@test.com"))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    let (_, row) = db.get(&format!("/contacts/{}", second)).await;
    assert_eq!(row["email"], "b@test.com");

    db.teardown().await;
}

#[tokio::test]
async fn unknown_account_is_a_foreign_key_violation() {
    let Some(db) = TestDb::provision().await else { return };

    let (status, body) = db.post("/contacts/", contact(999, "orphan@test.com")).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "foreign_key_violation");
    assert_eq!(db.count("contacts").await, 0);

    db.teardown().await;
}

#[tokio::test]
async fn update_replaces_every_field() {
    let Some(db) = TestDb::provision().await else { return };

    let account_id = db.create("/accounts/", account("Test Company")).await;
    let other_account = db.create("/accounts/", account("Other Company")).await;
    let id = db.create("/contacts/", contact(account_id, "john.doe@test.com")).await;

    let (status, body) = db
        .put(
            &format!("/contacts/{}", id),
            json!({
                "account_id": other_account,
                "first_name": "Jane",
                "last_name": "Roe",
                "email": "jane.roe@test.com"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["account_id"], other_account);
    assert_eq!(body["first_name"], "Jane");
    assert!(body["phone"].is_null());
    assert!(body["title"].is_null());

    let (status, _) = db.put("/contacts/4242", contact(account_id, "x@test.com")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    db.teardown().await;
}

#[tokio::test]
async fn delete_contact_reports_label() {
    let Some(db) = TestDb::provision().await else { return };

    let account_id = db.create("/accounts/", account("Test Company")).await;
    let id = db.create("/contacts/", contact(account_id, "john.doe@test.com")).await;

    let (status, body) = db.delete(&format!("/contacts/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Contact deleted successfully");
    let (status, _) = db.delete(&format!("/contacts/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    db.teardown().await;
}
