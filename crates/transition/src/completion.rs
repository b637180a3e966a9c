//! Awaitable side of a completion callback.
//!
//! [`Completion::new`] returns a callback and a future. Hand the callback to a
//! transition and await the future: it resolves to `true` once the callback
//! runs, or `false` if the callback is dropped unfired (the transition was
//! superseded or halted).
//!
//! The future only resolves when something samples the animation. Pair it
//! with [`settle`](crate::settle) or an embedder's frame loop.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::channel::oneshot;

use crate::transitionable::Callback;

#[derive(Debug)]
#[must_use = "a Completion does nothing unless awaited or polled"]
pub struct Completion {
    receiver: oneshot::Receiver<()>,
}

impl Completion {
    pub fn new() -> (Callback, Completion) {
        let (sender, receiver) = oneshot::channel();
        let callback: Callback = Box::new(move || {
            let _ = sender.send(());
        });
        (callback, Completion { receiver })
    }

    /// Non-blocking check.
    ///
    /// `None` while the transition is still pending, `Some(true)` once it
    /// completed and `Some(false)` if it was cancelled.
    pub fn poll_settled(&mut self) -> Option<bool> {
        match self.receiver.try_recv() {
            Ok(Some(())) => Some(true),
            Ok(None) => None,
            Err(oneshot::Canceled) => Some(false),
        }
    }
}

impl Future for Completion {
    type Output = bool;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<bool> {
        Pin::new(&mut self.receiver)
            .poll(cx)
            .map(|result| result.is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_until_fired() {
        let (callback, mut completion) = Completion::new();
        assert_eq!(completion.poll_settled(), None);
        callback();
        assert_eq!(completion.poll_settled(), Some(true));
    }

    #[test]
    fn test_dropped_callback_cancels() {
        let (callback, mut completion) = Completion::new();
        drop(callback);
        assert_eq!(completion.poll_settled(), Some(false));
    }

    #[tokio::test]
    async fn test_await_resolves() {
        let (callback, completion) = Completion::new();
        callback();
        assert!(completion.await);

        let (callback, completion) = Completion::new();
        drop(callback);
        assert!(!completion.await);
    }
}
