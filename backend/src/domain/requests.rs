//! Cancellable in-flight generation requests.
//!
//! A [`RequestSlot`] holds the abort handle of at most one request. Starting a
//! new request through the slot aborts the one before it, and dropping the slot
//! aborts whatever is still running. An aborted future resolves to
//! `Err(Aborted)` without polling the inner future again, so its result never
//! reaches application state.

use std::future::Future;

use futures::future::{AbortHandle, Abortable};
use log::debug;

#[derive(Debug)]
pub struct RequestSlot {
    label: &'static str,
    current: Option<AbortHandle>,
}

impl RequestSlot {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            current: None,
        }
    }

    /// Wrap `future` so that it can be cancelled through this slot,
    /// superseding any request already in flight
    pub fn begin<F: Future>(&mut self, future: F) -> Abortable<F> {
        self.cancel();
        let (handle, registration) = AbortHandle::new_pair();
        self.current = Some(handle);
        Abortable::new(future, registration)
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.current.take() {
            if !handle.is_aborted() {
                debug!("Cancelling {} request", self.label);
                handle.abort();
            }
        }
    }

    /// Whether the slot holds a request that has not been cancelled. A
    /// request that already finished on its own still counts.
    pub fn is_armed(&self) -> bool {
        self.current.as_ref().is_some_and(|h| !h.is_aborted())
    }
}

impl Drop for RequestSlot {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::future::{self, Aborted};

    #[tokio::test]
    async fn test_request_completes_when_left_alone() {
        let mut slot = RequestSlot::new("plan");
        let request = slot.begin(future::ready(7));

        assert!(slot.is_armed());
        assert_eq!(request.await, Ok(7));
        assert!(slot.is_armed());
    }

    #[tokio::test]
    async fn test_cancel_aborts_pending_request() {
        let mut slot = RequestSlot::new("exam");
        let request = slot.begin(future::pending::<u32>());

        slot.cancel();
        assert!(!slot.is_armed());
        assert_eq!(request.await, Err(Aborted));
    }

    #[tokio::test]
    async fn test_new_request_supersedes_previous() {
        let mut slot = RequestSlot::new("plan");
        let first = slot.begin(future::pending::<&str>());
        let second = slot.begin(future::ready("fresh"));

        assert_eq!(first.await, Err(Aborted));
        assert_eq!(second.await, Ok("fresh"));
    }

    #[tokio::test]
    async fn test_drop_aborts_request() {
        let mut slot = RequestSlot::new("chat");
        let request = slot.begin(future::pending::<()>());

        drop(slot);
        assert_eq!(request.await, Err(Aborted));
    }
}
