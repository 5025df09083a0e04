use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

fn counter() -> (Arc<AtomicUsize>, impl Fn() + Send + Sync + 'static) {
    let count = Arc::new(AtomicUsize::new(0));
    let hits = count.clone();
    (count, move || {
        hits.fetch_add(1, Ordering::SeqCst);
    })
}

#[test]
fn notify_without_registration_is_noop() {
    let hub = UnauthorizedHub::new();
    assert!(!hub.is_registered());
    hub.notify();
}

#[test]
fn notify_invokes_registered_callback_once_per_call() {
    let hub = UnauthorizedHub::new();
    let (count, callback) = counter();
    hub.register(callback);
    hub.notify();
    assert_eq!(count.load(Ordering::SeqCst), 1);
    hub.notify();
    assert_eq!(count.load(Ordering::SeqCst), 2);
}

#[test]
fn register_replaces_previous_callback() {
    let hub = UnauthorizedHub::new();
    let (first, first_cb) = counter();
    let (second, second_cb) = counter();
    hub.register(first_cb);
    hub.register(second_cb);
    hub.notify();
    assert_eq!(first.load(Ordering::SeqCst), 0);
    assert_eq!(second.load(Ordering::SeqCst), 1);
}

#[test]
fn clones_share_the_slot() {
    let hub = UnauthorizedHub::new();
    let wired = hub.clone();
    let (count, callback) = counter();
    hub.register(callback);
    wired.on_unauthorized();
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn callback_may_reregister_during_notify() {
    let hub = UnauthorizedHub::new();
    let inner = hub.clone();
    let (count, callback) = counter();
    let callback = Arc::new(callback);
    hub.register(move || {
        let callback = callback.clone();
        inner.register(move || callback());
    });
    hub.notify();
    hub.notify();
    assert_eq!(count.load(Ordering::SeqCst), 1);
}
