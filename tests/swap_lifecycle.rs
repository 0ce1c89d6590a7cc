// =====================================================
// Swap request lifecycle integration tests
// =====================================================

mod common;
use common::*;

use std::collections::HashSet;

use bookswap_api::domains::swap::models::SwapFilter;
use bookswap_api::domains::swap::services::SwapService;
use bookswap_api::shared::errors::SwapError;

/// create() then find_by_users_and_book() with the same triple returns the
/// record, fields equal to the inputs, requester book unset.
#[tokio::test]
#[ignore = "requires a running PostgreSQL (TEST_DATABASE_URL)"]
async fn test_create_then_lookup_returns_matching_record() {
    let db = setup_test().await;
    let service = SwapService::new(db);

    let created = service
        .create_initial_request(REQUESTER_ID, HOLDER_ID, HOLDER_BOOK_ID)
        .await
        .expect("Failed to create swap request");
    assert_eq!(created.requester_id, REQUESTER_ID);
    assert_eq!(created.holder_id, HOLDER_ID);
    assert_eq!(created.holder_book_id, HOLDER_BOOK_ID);
    assert!(created.requester_book_id.is_none());

    let found = service
        .find_by_users_and_book(REQUESTER_ID, HOLDER_ID, HOLDER_BOOK_ID)
        .await
        .expect("Lookup failed")
        .expect("Expected a matching swap request");
    assert_eq!(found.id, created.id);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (TEST_DATABASE_URL)"]
async fn test_lookup_miss_returns_none() {
    let db = setup_test().await;
    let service = SwapService::new(db);

    let found = service
        .find_by_users_and_book(REQUESTER_ID, HOLDER_ID, HOLDER_BOOK_ID)
        .await
        .expect("Lookup failed");
    assert!(found.is_none());
}

/// SENT ∪ RECEIVED equals ALL as id sets, and no id is in both for the same
/// user.
#[tokio::test]
#[ignore = "requires a running PostgreSQL (TEST_DATABASE_URL)"]
async fn test_sent_received_union_equals_all() {
    let db = setup_test().await;
    let service = SwapService::new(db);

    // One request in each direction between the two users
    service
        .create_initial_request(REQUESTER_ID, HOLDER_ID, HOLDER_BOOK_ID)
        .await
        .expect("Failed to create sent request");
    service
        .create_initial_request(HOLDER_ID, REQUESTER_ID, REQUESTER_BOOK_ID)
        .await
        .expect("Failed to create received request");

    let ids = |details: Vec<bookswap_api::domains::swap::models::SwapRequestDetails>| {
        details.into_iter().map(|d| d.id).collect::<HashSet<_>>()
    };

    let sent = ids(service
        .list_by_user(REQUESTER_ID, SwapFilter::Sent)
        .await
        .expect("SENT listing failed"));
    let received = ids(service
        .list_by_user(REQUESTER_ID, SwapFilter::Received)
        .await
        .expect("RECEIVED listing failed"));
    let all = ids(service
        .list_by_user(REQUESTER_ID, SwapFilter::All)
        .await
        .expect("ALL listing failed"));

    assert_eq!(sent.len(), 1);
    assert_eq!(received.len(), 1);
    assert!(sent.is_disjoint(&received));
    let union: HashSet<_> = sent.union(&received).cloned().collect();
    assert_eq!(union, all);
}

/// Listing results carry the expanded requester, holder and holder book.
#[tokio::test]
#[ignore = "requires a running PostgreSQL (TEST_DATABASE_URL)"]
async fn test_listing_expands_relations() {
    let db = setup_test().await;
    let service = SwapService::new(db);

    service
        .create_initial_request(REQUESTER_ID, HOLDER_ID, HOLDER_BOOK_ID)
        .await
        .expect("Failed to create swap request");

    let results = service
        .list_by_user(REQUESTER_ID, SwapFilter::All)
        .await
        .expect("ALL listing failed");
    assert_eq!(results.len(), 1);

    let details = &results[0];
    assert_eq!(details.requester.id, REQUESTER_ID);
    assert_eq!(details.holder.id, HOLDER_ID);
    assert_eq!(details.holder_book.id, HOLDER_BOOK_ID);
    assert!(details.requester_book.is_none());
}

/// confirm(valid book) then find_by_id shows the attached requester book.
#[tokio::test]
#[ignore = "requires a running PostgreSQL (TEST_DATABASE_URL)"]
async fn test_confirm_attaches_requester_book() {
    let db = setup_test().await;
    let service = SwapService::new(db);

    let created = service
        .create_initial_request(REQUESTER_ID, HOLDER_ID, HOLDER_BOOK_ID)
        .await
        .expect("Failed to create swap request");

    service
        .confirm(&created.id, REQUESTER_BOOK_ID)
        .await
        .expect("Confirmation failed");

    let details = service
        .find_by_id(&created.id)
        .await
        .expect("Lookup failed")
        .expect("Expected the confirmed request");
    assert_eq!(details.requester_book_id.as_deref(), Some(REQUESTER_BOOK_ID));
    let requester_book = details.requester_book.expect("Expected expanded requester book");
    assert_eq!(requester_book.id, REQUESTER_BOOK_ID);
}

/// Re-confirming an already-confirmed request is allowed and overwrites the
/// previously attached book (last-write-wins).
#[tokio::test]
#[ignore = "requires a running PostgreSQL (TEST_DATABASE_URL)"]
async fn test_reconfirm_overwrites_previous_book() {
    let db = setup_test().await;

    // A second book the requester can counter-offer with
    let other_book_id = "book-requester-other";
    sqlx::query(
        "INSERT INTO books (id, owner_id, title, author) VALUES ($1, $2, 'Another Book', 'Test Author')",
    )
    .bind(other_book_id)
    .bind(REQUESTER_ID)
    .execute(db.pool())
    .await
    .expect("Failed to seed extra book");

    let service = SwapService::new(db);
    let created = service
        .create_initial_request(REQUESTER_ID, HOLDER_ID, HOLDER_BOOK_ID)
        .await
        .expect("Failed to create swap request");

    service
        .confirm(&created.id, REQUESTER_BOOK_ID)
        .await
        .expect("First confirmation failed");
    service
        .confirm(&created.id, other_book_id)
        .await
        .expect("Re-confirmation failed");

    let details = service
        .find_by_id(&created.id)
        .await
        .expect("Lookup failed")
        .expect("Expected the confirmed request");
    assert_eq!(details.requester_book_id.as_deref(), Some(other_book_id));
    let requester_book = details.requester_book.expect("Expected expanded requester book");
    assert_eq!(requester_book.id, other_book_id);
}

/// Confirming with a nonexistent book fails loudly and leaves the request
/// untouched.
#[tokio::test]
#[ignore = "requires a running PostgreSQL (TEST_DATABASE_URL)"]
async fn test_confirm_with_missing_book_fails_and_leaves_request_unchanged() {
    let db = setup_test().await;
    let service = SwapService::new(db);

    let created = service
        .create_initial_request(REQUESTER_ID, HOLDER_ID, HOLDER_BOOK_ID)
        .await
        .expect("Failed to create swap request");

    let err = service
        .confirm(&created.id, "no-such-book")
        .await
        .unwrap_err();
    assert!(matches!(err, SwapError::BookNotFound { .. }));

    let details = service
        .find_by_id(&created.id)
        .await
        .expect("Lookup failed")
        .expect("Expected the request to still exist");
    assert!(details.requester_book_id.is_none());
}

/// Confirming a nonexistent request fails with not-found.
#[tokio::test]
#[ignore = "requires a running PostgreSQL (TEST_DATABASE_URL)"]
async fn test_confirm_missing_request_fails() {
    let db = setup_test().await;
    let service = SwapService::new(db);

    let err = service
        .confirm("no-such-swap", REQUESTER_BOOK_ID)
        .await
        .unwrap_err();
    assert!(matches!(err, SwapError::SwapRequestNotFound { .. }));
}

/// find_by_id on a nonexistent id returns None, never an error.
#[tokio::test]
#[ignore = "requires a running PostgreSQL (TEST_DATABASE_URL)"]
async fn test_find_by_id_miss_returns_none() {
    let db = setup_test().await;
    let service = SwapService::new(db);

    let found = service
        .find_by_id("no-such-swap")
        .await
        .expect("Lookup failed");
    assert!(found.is_none());
}

/// create() referencing an unknown user surfaces as a referential-integrity
/// store error, not a success and not a panic.
#[tokio::test]
#[ignore = "requires a running PostgreSQL (TEST_DATABASE_URL)"]
async fn test_create_with_unknown_user_is_referential_integrity_error() {
    let db = setup_test().await;
    let service = SwapService::new(db);

    let err = service
        .create_initial_request("no-such-user", HOLDER_ID, HOLDER_BOOK_ID)
        .await
        .unwrap_err();
    assert!(matches!(err, SwapError::ReferentialIntegrity(_)));
}

/// Empty identifiers are rejected before any store access, on every
/// operation.
#[tokio::test]
#[ignore = "requires a running PostgreSQL (TEST_DATABASE_URL)"]
async fn test_empty_identifiers_rejected() {
    let db = setup_test().await;
    let service = SwapService::new(db);

    let err = service
        .create_initial_request("", HOLDER_ID, HOLDER_BOOK_ID)
        .await
        .unwrap_err();
    assert!(matches!(err, SwapError::Validation { field: "requester_id", .. }));

    let err = service
        .find_by_users_and_book(REQUESTER_ID, "", HOLDER_BOOK_ID)
        .await
        .unwrap_err();
    assert!(matches!(err, SwapError::Validation { field: "holder_id", .. }));

    let err = service
        .find_by_users_and_book(REQUESTER_ID, HOLDER_ID, "  ")
        .await
        .unwrap_err();
    assert!(matches!(err, SwapError::Validation { field: "holder_book_id", .. }));

    let err = service
        .list_by_user("", SwapFilter::All)
        .await
        .unwrap_err();
    assert!(matches!(err, SwapError::Validation { field: "user_id", .. }));

    let err = service.find_by_id("   ").await.unwrap_err();
    assert!(matches!(err, SwapError::Validation { field: "id", .. }));

    let err = service.confirm("", REQUESTER_BOOK_ID).await.unwrap_err();
    assert!(matches!(err, SwapError::Validation { field: "swap_id", .. }));

    let err = service.confirm("some-swap-id", "").await.unwrap_err();
    assert!(matches!(err, SwapError::Validation { field: "requester_book_id", .. }));
}
