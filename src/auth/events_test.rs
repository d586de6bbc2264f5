use futures::executor::block_on;

use super::*;

#[test]
fn notify_with_no_subscribers_is_a_noop() {
    let events = SessionEvents::new();
    events.notify_session_ended();
    assert_eq!(events.subscriber_count(), 0);
}

#[test]
fn subscriber_receives_the_event() {
    let events = SessionEvents::new();
    let mut sub = events.subscribe();
    events.notify_session_ended();
    assert!(block_on(sub.session_ended()));
}

#[test]
fn every_live_subscriber_receives_the_event() {
    let events = SessionEvents::new();
    let mut first = events.subscribe();
    let mut second = events.subscribe();
    events.notify_session_ended();
    assert_eq!(first.pending_events(), 1);
    assert_eq!(second.pending_events(), 1);
}

#[test]
fn dropping_the_guard_unsubscribes() {
    let events = SessionEvents::new();
    let first = events.subscribe();
    let mut second = events.subscribe();
    assert_eq!(events.subscriber_count(), 2);

    drop(first);
    assert_eq!(events.subscriber_count(), 1);

    events.notify_session_ended();
    assert_eq!(second.pending_events(), 1);
}

#[test]
fn events_before_subscribing_are_not_replayed() {
    let events = SessionEvents::new();
    events.notify_session_ended();
    let mut sub = events.subscribe();
    assert_eq!(sub.pending_events(), 0);
}

#[test]
fn each_notify_delivers_one_event() {
    let events = SessionEvents::new();
    let mut sub = events.subscribe();
    events.notify_session_ended();
    events.notify_session_ended();
    assert_eq!(sub.pending_events(), 2);
}

#[test]
fn wait_resolves_false_after_events_handle_drops() {
    let events = SessionEvents::new();
    let mut sub = events.subscribe();
    drop(events);
    assert!(!block_on(sub.session_ended()));
}
