//! Behaviour of the in-memory lock server used by the other test suites

use mysql_lock_core::lock::{LockBackend, LockError, LockRequest, LockSession};
use mysql_lock_testkit::MemoryLockServer;
use std::time::Duration;

fn probe(name: &str) -> LockRequest {
    LockRequest::new(name, Duration::ZERO).unwrap()
}

#[tokio::test]
async fn test_second_session_is_denied_while_held() {
    let server = MemoryLockServer::new();
    let mut first = server.connect().await.unwrap();
    let mut second = server.connect().await.unwrap();

    assert!(first.try_acquire(&probe("job")).await.unwrap());
    assert!(!second.try_acquire(&probe("job")).await.unwrap());
    assert!(server.is_held("job"));
}

#[tokio::test]
async fn test_independent_names_do_not_contend() {
    let server = MemoryLockServer::new();
    let mut first = server.connect().await.unwrap();
    let mut second = server.connect().await.unwrap();

    assert!(first.try_acquire(&probe("a")).await.unwrap());
    assert!(second.try_acquire(&probe("b")).await.unwrap());
}

#[tokio::test]
async fn test_same_session_may_ask_again() {
    let server = MemoryLockServer::new();
    let mut session = server.connect().await.unwrap();

    assert!(session.try_acquire(&probe("job")).await.unwrap());
    assert!(session.try_acquire(&probe("job")).await.unwrap());
}

#[tokio::test]
async fn test_close_releases() {
    let server = MemoryLockServer::new();
    let mut first = server.connect().await.unwrap();
    assert!(first.try_acquire(&probe("job")).await.unwrap());

    first.close().await.unwrap();
    assert!(!server.is_held("job"));

    let mut second = server.connect().await.unwrap();
    assert!(second.try_acquire(&probe("job")).await.unwrap());
}

#[tokio::test]
async fn test_drop_releases() {
    let server = MemoryLockServer::new();
    {
        let mut session = server.connect().await.unwrap();
        assert!(session.try_acquire(&probe("job")).await.unwrap());
    }
    assert!(!server.is_held("job"));
}

#[tokio::test]
async fn test_closed_session_rejects_requests() {
    let server = MemoryLockServer::new();
    let mut session = server.connect().await.unwrap();
    session.close().await.unwrap();

    let err = session.try_acquire(&probe("job")).await.unwrap_err();
    assert!(matches!(err, LockError::SessionClosed));
}

#[tokio::test]
async fn test_waiter_gets_lock_after_release() {
    let server = MemoryLockServer::new();
    let mut holder = server.connect().await.unwrap();
    assert!(holder.try_acquire(&probe("job")).await.unwrap());

    let waiter_server = server.clone();
    let waiter = tokio::spawn(async move {
        let mut session = waiter_server.connect().await.unwrap();
        let request = LockRequest::new("job", Duration::from_secs(5)).unwrap();
        let granted = session.try_acquire(&request).await.unwrap();
        (granted, session)
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    holder.close().await.unwrap();

    let (granted, _session) = waiter.await.unwrap();
    assert!(granted, "Waiter should get the lock once the holder closes");
}

#[tokio::test]
async fn test_waiter_times_out() {
    let server = MemoryLockServer::new();
    let mut holder = server.connect().await.unwrap();
    assert!(holder.try_acquire(&probe("job")).await.unwrap());

    let mut waiter = server.connect().await.unwrap();
    let request = LockRequest::new("job", Duration::from_millis(100)).unwrap();

    let start = std::time::Instant::now();
    assert!(!waiter.try_acquire(&request).await.unwrap());
    assert!(start.elapsed() >= Duration::from_millis(100));
}

#[tokio::test]
async fn test_faults() {
    let server = MemoryLockServer::new();
    server.refuse_connections();
    assert!(matches!(
        server.connect().await.unwrap_err(),
        LockError::Connect { .. }
    ));
    assert_eq!(server.connections(), 1);

    let server = MemoryLockServer::new();
    let mut session = server.connect().await.unwrap();
    server.fail_queries();
    assert!(matches!(
        session.try_acquire(&probe("job")).await.unwrap_err(),
        LockError::Query { .. }
    ));

    let server = MemoryLockServer::new();
    let mut session = server.connect().await.unwrap();
    server.answer_indeterminate();
    assert!(!session.try_acquire(&probe("job")).await.unwrap());
    assert!(!server.is_held("job"));
}
