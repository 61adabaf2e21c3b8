// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: MIT OR Apache-2.0

use futures::FutureExt;
use pulsewave_core::CancellationToken;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[test]
fn test_new_token_not_cancelled() {
    let token = CancellationToken::new();
    assert!(!token.is_cancelled());
}

#[test]
fn test_cancel_is_idempotent() {
    let token = CancellationToken::new();
    token.cancel();
    token.cancel();
    assert!(token.is_cancelled());
}

#[test]
fn test_clone_shares_state() {
    let token1 = CancellationToken::new();
    let token2 = token1.clone();

    token2.cancel();

    assert!(token1.is_cancelled());
    assert!(token2.is_cancelled());
}

#[test]
fn test_cancel_before_first_poll() {
    use std::future::Future;
    use std::task::{Context, Poll};

    let token = CancellationToken::new();
    token.cancel();

    let mut future = Box::pin(token.cancelled());
    let waker = futures::task::noop_waker();
    let mut cx = Context::from_waker(&waker);

    match future.as_mut().poll(&mut cx) {
        Poll::Ready(()) => {}
        Poll::Pending => panic!("Expected Ready, got Pending"),
    }
}

#[tokio::test]
async fn test_cancelled_wakes_pending_waiter() {
    let token = CancellationToken::new();
    let token_worker = token.clone();

    let worker = tokio::spawn(async move {
        futures::select! {
            _ = token_worker.cancelled().fuse() => "cancelled",
            _ = tokio::time::sleep(Duration::from_secs(10)).fuse() => "timeout",
        }
    });

    tokio::time::sleep(Duration::from_millis(10)).await;
    token.cancel();

    assert_eq!(worker.await.unwrap(), "cancelled");
}

#[tokio::test]
async fn test_cancellation_propagates_to_all_clones() {
    let token = CancellationToken::new();
    let count = Arc::new(AtomicUsize::new(0));

    let mut handles = vec![];
    for _ in 0..10 {
        let token_clone = token.clone();
        let count_clone = count.clone();
        handles.push(tokio::spawn(async move {
            token_clone.cancelled().await;
            count_clone.fetch_add(1, Ordering::SeqCst);
        }));
    }

    token.cancel();

    for handle in handles {
        let result = tokio::time::timeout(Duration::from_millis(500), handle).await;
        assert!(result.is_ok());
    }
    assert_eq!(count.load(Ordering::SeqCst), 10);
}
