//! Session-ended notification channel.
//!
//! DESIGN
//! ======
//! An explicit, injectable handle rather than a process-global event: the
//! refresh layer can force a logout without being coupled to UI state.
//! There is exactly one event kind. Subscriptions are scoped — dropping
//! the guard deterministically unsubscribes, so a consumer's teardown can
//! never leak a listener.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use futures::StreamExt;
use futures::channel::mpsc;

#[derive(Default)]
struct Registry {
    next_id: u64,
    senders: Vec<(u64, mpsc::UnboundedSender<()>)>,
}

/// Cloneable handle to the session-ended channel.
#[derive(Clone, Default)]
pub struct SessionEvents {
    registry: Rc<RefCell<Registry>>,
}

impl SessionEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber. Delivery stops when the returned guard
    /// is dropped.
    pub fn subscribe(&self) -> SessionEndedSubscription {
        let (tx, rx) = mpsc::unbounded();
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.senders.push((id, tx));
        SessionEndedSubscription {
            id,
            rx,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Fan the session-ended event out to every live subscriber.
    pub fn notify_session_ended(&self) {
        self.registry
            .borrow_mut()
            .senders
            .retain(|(_, tx)| tx.unbounded_send(()).is_ok());
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().senders.len()
    }
}

/// Subscription guard for session-ended events.
pub struct SessionEndedSubscription {
    id: u64,
    rx: mpsc::UnboundedReceiver<()>,
    registry: Weak<RefCell<Registry>>,
}

impl SessionEndedSubscription {
    /// Wait for the next session-ended event.
    ///
    /// Returns `false` once the events handle has been dropped and no
    /// further events can arrive.
    pub async fn session_ended(&mut self) -> bool {
        self.rx.next().await.is_some()
    }

    /// Drain any already-delivered events without waiting.
    pub fn pending_events(&mut self) -> usize {
        let mut count = 0;
        while let Ok(Some(())) = self.rx.try_next() {
            count += 1;
        }
        count
    }
}

impl Drop for SessionEndedSubscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().senders.retain(|(id, _)| *id != self.id);
        }
    }
}
