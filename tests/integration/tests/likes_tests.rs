//! Like integration tests
//!
//! Every test spins up its own stub of the like endpoints on a loopback port.
//!
//! Run with: cargo test -p integration-tests --test likes_tests

use std::sync::Arc;
use std::time::Duration;

use integration_tests::{controller_for, StubMode, TestPage, TestServer};
use starlike_controller::ClickOutcome;
use starlike_core::{ClickEvent, DomainError, IconState, LikesBackend, MessageId};
use starlike_http::HttpLikesBackend;

fn click_on(page: &TestPage, id: i64) -> ClickEvent {
    ClickEvent::new(Arc::new(page.icon(id)))
}

// ============================================================================
// HTTP Backend Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_user_likes() {
    let server = TestServer::start(&[5, 7]).await.unwrap();
    let backend = server.backend().unwrap();

    let likes = backend.fetch_user_likes().await.unwrap();

    assert_eq!(likes.len(), 2);
    assert!(likes.contains(&MessageId::from(5_i64)));
    assert!(likes.contains(&MessageId::parse("7").unwrap()));
    assert_eq!(server.state.requests(), vec!["GET /user-likes"]);
}

#[tokio::test]
async fn test_submit_like_posts_to_message_path() {
    let server = TestServer::start(&[]).await.unwrap();
    let backend = server.backend().unwrap();

    backend.submit_like(&MessageId::from(3_i64)).await.unwrap();

    assert_eq!(server.state.requests(), vec!["POST /messages/3/like"]);
    assert_eq!(server.state.likes(), vec![3]);
}

#[tokio::test]
async fn test_fetch_failure_is_unexpected_status() {
    let server = TestServer::start(&[1]).await.unwrap();
    server.state.set_mode(StubMode::FailUserLikes);
    let backend = server.backend().unwrap();

    let err = backend.fetch_user_likes().await.unwrap_err();

    assert!(matches!(
        err,
        DomainError::UnexpectedStatus { status: 500, ref path } if path == "/user-likes"
    ));
}

#[tokio::test]
async fn test_login_redirect_is_not_followed() {
    let server = TestServer::start(&[]).await.unwrap();
    server.state.set_mode(StubMode::Unauthorized);
    let backend = server.backend().unwrap();

    let err = backend
        .submit_like(&MessageId::from(9_i64))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::UnexpectedStatus { status: 302, .. }));
    assert_eq!(server.state.requests(), vec!["POST /messages/9/like"]);
    assert!(server.state.likes().is_empty());
}

#[tokio::test]
async fn test_slow_backend_times_out() {
    let server = TestServer::start(&[]).await.unwrap();
    server.state.set_mode(StubMode::Slow(Duration::from_secs(5)));

    let mut config = server.backend_config();
    config.request_timeout_ms = 200;
    let backend = HttpLikesBackend::from_config(&config).unwrap();

    let err = backend.fetch_user_likes().await.unwrap_err();
    assert!(matches!(err, DomainError::Timeout));
}

#[tokio::test]
async fn test_non_numeric_id_is_rejected_by_the_site() {
    let server = TestServer::start(&[]).await.unwrap();
    let backend = server.backend().unwrap();

    let err = backend
        .submit_like(&MessageId::parse("not-a-number").unwrap())
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::UnexpectedStatus { status: 400, .. }));
}

#[tokio::test]
async fn test_session_cookie_is_sent() {
    let server = TestServer::start(&[]).await.unwrap();
    let mut config = server.backend_config();
    config.session_cookie = Some("session=abc123".to_string());
    let backend = HttpLikesBackend::from_config(&config).unwrap();

    backend.fetch_user_likes().await.unwrap();
    backend.submit_like(&MessageId::from(1_i64)).await.unwrap();

    assert_eq!(
        server.state.cookies(),
        vec!["session=abc123", "session=abc123"]
    );
}

// ============================================================================
// Controller Scenarios
// ============================================================================

#[tokio::test]
async fn test_click_liked_message_shows_outline() {
    let server = TestServer::start(&[5, 7]).await.unwrap();
    let page = TestPage::render(&[5, 7], &[5, 7]);
    let controller = controller_for(server.backend().unwrap());

    let state = controller.handle_click(&click_on(&page, 5)).await.unwrap();

    assert_eq!(state, IconState::Unliked);
    assert_eq!(page.state(5), Some(IconState::Unliked));
    assert_eq!(page.state(7), Some(IconState::Liked));
    assert_eq!(
        server.state.requests(),
        vec!["GET /user-likes", "POST /messages/5/like"]
    );
}

#[tokio::test]
async fn test_click_unliked_message_shows_filled() {
    let server = TestServer::start(&[]).await.unwrap();
    let page = TestPage::render(&[3], &[]);
    let controller = controller_for(server.backend().unwrap());

    let state = controller.handle_click(&click_on(&page, 3)).await.unwrap();

    assert_eq!(state, IconState::Liked);
    assert_eq!(page.state(3), Some(IconState::Liked));
    assert_eq!(
        server.state.requests(),
        vec!["GET /user-likes", "POST /messages/3/like"]
    );
    assert_eq!(server.state.likes(), vec![3]);
}

#[tokio::test]
async fn test_failed_fetch_leaves_icon_and_skips_submission() {
    let server = TestServer::start(&[5]).await.unwrap();
    server.state.set_mode(StubMode::FailUserLikes);
    let page = TestPage::render(&[5], &[5]);
    let controller = controller_for(server.backend().unwrap());

    let outcome = controller.on_click(&click_on(&page, 5)).await;

    assert!(matches!(outcome, ClickOutcome::Failed(ref e) if e.is_network()));
    assert_eq!(page.state(5), Some(IconState::Liked));
    assert_eq!(server.state.requests(), vec!["GET /user-likes"]);
}

#[tokio::test]
async fn test_unauthorized_like_leaves_icon() {
    let server = TestServer::start(&[]).await.unwrap();
    server.state.set_mode(StubMode::Unauthorized);
    let page = TestPage::render(&[2], &[]);
    let controller = controller_for(server.backend().unwrap());

    let outcome = controller.on_click(&click_on(&page, 2)).await;

    assert!(matches!(outcome, ClickOutcome::Failed(_)));
    assert_eq!(page.state(2), Some(IconState::Unliked));
}

#[tokio::test]
async fn test_click_outside_message_makes_no_requests() {
    let server = TestServer::start(&[]).await.unwrap();
    let page = TestPage::render(&[], &[]);
    let stray = page.doc.create_element("i");
    stray.add_class("bi");
    stray.add_class("bi-star");
    page.doc.body().append_child(&stray).unwrap();
    let controller = controller_for(server.backend().unwrap());

    let outcome = controller
        .on_click(&ClickEvent::new(Arc::new(stray.clone())))
        .await;

    assert!(matches!(outcome, ClickOutcome::Ignored));
    assert_eq!(stray.classes(), vec!["bi", "bi-star"]);
    assert!(server.state.requests().is_empty());
}

#[tokio::test]
async fn test_click_on_like_button_flips_its_star() {
    let server = TestServer::start(&[]).await.unwrap();
    let page = TestPage::render(&[3], &[]);
    let controller = controller_for(server.backend().unwrap());

    let listener = tokio::spawn(Arc::clone(&controller).listen(page.doc.subscribe_clicks()));
    page.doc.click(&page.button(3));
    page.doc.close_clicks();

    let outcomes = listener.await.unwrap();

    assert!(matches!(
        outcomes.as_slice(),
        [ClickOutcome::Toggled { state: IconState::Liked, .. }]
    ));
    assert_eq!(page.state(3), Some(IconState::Liked));
    assert_eq!(page.button(3).classes(), vec!["btn", "btn-like"]);
    assert_eq!(server.state.likes(), vec![3]);
}

#[tokio::test]
async fn test_page_listener_round_trip() {
    let server = TestServer::start(&[5, 7]).await.unwrap();
    let page = TestPage::render(&[3, 5, 7], &[5, 7]);
    let controller = controller_for(server.backend().unwrap());

    let listener = tokio::spawn(Arc::clone(&controller).listen(page.doc.subscribe_clicks()));

    let event = page.doc.click(&page.icon(3));
    page.doc.click(&page.icon(7));
    page.doc.close_clicks();

    let outcomes = listener.await.unwrap();

    assert_eq!(outcomes.len(), 2);
    assert!(outcomes.iter().all(ClickOutcome::is_toggled));
    assert!(event.is_default_prevented());
    assert_eq!(page.state(3), Some(IconState::Liked));
    assert_eq!(page.state(5), Some(IconState::Liked));
    assert_eq!(page.state(7), Some(IconState::Unliked));
    assert_eq!(server.state.likes(), vec![3, 5]);
}
