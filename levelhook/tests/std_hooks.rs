//! Standard hooks wired through a registry.

use levelhook::{
    Level, LevelHooks, SharedLevelHooks,
    hooks::{FnHook, WriterHook},
    testing::{FailingHook, RecordingHook},
};
use std::sync::{Arc, Mutex};

mod common;
use common::TestEntry;

#[test]
fn test_fn_hook_alongside_writer_hook() {
    let mirrored = Arc::new(Mutex::new(Vec::<String>::new()));
    let mirror = mirrored.clone();

    let mut hooks = LevelHooks::new();
    hooks.add(WriterHook::new(Vec::<u8>::new(), [Level::Error]));
    hooks.add(FnHook::new("mirror", [Level::Error], move |entry: &TestEntry| {
        mirror.lock().unwrap().push(entry.to_string());
        Ok(())
    }));
    assert_eq!(hooks.len_for(Level::Error), 2);

    hooks
        .fire(Level::Error, &TestEntry::new(Level::Error, "db down"))
        .unwrap();
    hooks
        .fire(Level::Warn, &TestEntry::new(Level::Warn, "not mirrored"))
        .unwrap();

    assert_eq!(*mirrored.lock().unwrap(), vec!["[error] db down"]);
}

#[test]
fn test_recording_and_failing_hooks_together() {
    let recorder = RecordingHook::new([Level::Warn]);
    let failing = FailingHook::new("pager", [Level::Warn], "pager unreachable");

    let hooks = SharedLevelHooks::new();
    hooks.add(recorder.clone());
    hooks.add(failing.clone());
    hooks.add(recorder.clone());

    let entry = TestEntry::new(Level::Warn, "slow query");
    let failures = hooks.fire(Level::Warn, &entry).unwrap_err();

    assert_eq!(recorder.entries(), vec![entry.clone(), entry]);
    assert_eq!(failing.calls(), 1);
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].hook.name(), "pager");
}

#[cfg(feature = "tracing")]
#[test]
fn test_tracing_hook_accepts_every_level() {
    use levelhook::hooks::TracingHook;

    let mut hooks = LevelHooks::new();
    hooks.add(TracingHook::new("shipper"));
    for level in Level::ALL {
        hooks.fire(level, &TestEntry::new(level, "shipped")).unwrap();
    }
}

#[cfg(feature = "tokio")]
#[tokio::test]
async fn test_queue_hook_offloads_to_worker() {
    use levelhook::hooks::QueueHook;

    let (hook, mut rx) = QueueHook::new("queue", [Level::Error]);
    let mut hooks = LevelHooks::new();
    hooks.add(hook);

    hooks
        .fire(Level::Error, &TestEntry::new(Level::Error, "queued"))
        .unwrap();

    let received = rx.recv().await.unwrap();
    assert_eq!(received.message, "queued");
}
