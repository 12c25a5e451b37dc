use crate::{PendingUpload, SessionState, SessionStore};

use gd_core::{DescriptionMode, Operation};
use googletest::assert_that;
use googletest::prelude::eq;

fn refresh_demo() -> PendingUpload {
    PendingUpload::Refresh {
        name: "demo".to_string(),
        mode: DescriptionMode::Templated,
    }
}

#[tokio::test]
async fn given_new_store_when_queried_then_idle() {
    let store = SessionStore::new();

    assert_that!(store.state(1).await, eq(&SessionState::Idle));
}

#[tokio::test]
async fn given_armed_session_when_queried_then_awaiting_archive() {
    let store = SessionStore::new();
    store.arm(1, refresh_demo()).await;

    assert_that!(
        store.state(1).await,
        eq(&SessionState::AwaitingArchive(refresh_demo()))
    );
    assert_that!(store.state(2).await, eq(&SessionState::Idle));
}

#[tokio::test]
async fn given_armed_session_when_taken_then_returned_once() {
    let store = SessionStore::new();
    store.arm(1, refresh_demo()).await;

    assert_that!(
        store.take(1).await,
        eq(&SessionState::AwaitingArchive(refresh_demo()))
    );
    assert_that!(store.take(1).await, eq(&SessionState::Idle));
}

#[tokio::test]
async fn given_armed_session_when_rearmed_then_replaced() {
    let store = SessionStore::new();
    store.arm(1, refresh_demo()).await;
    store
        .arm(
            1,
            PendingUpload::Create {
                mode: DescriptionMode::Plain,
            },
        )
        .await;

    let SessionState::AwaitingArchive(pending) = store.state(1).await else {
        panic!("session should be armed");
    };
    assert_that!(pending.operation(), eq(Operation::Create));
    assert_that!(pending.mode(), eq(DescriptionMode::Plain));
}

#[tokio::test]
async fn given_armed_session_when_cleared_then_idle() {
    let store = SessionStore::new();
    store.arm(1, refresh_demo()).await;
    store.clear(1).await;

    assert_that!(store.state(1).await, eq(&SessionState::Idle));
}

#[test]
fn given_refresh_when_inspected_then_refresh_operation() {
    assert_that!(refresh_demo().operation(), eq(Operation::Refresh));
    assert_that!(refresh_demo().mode(), eq(DescriptionMode::Templated));
}
