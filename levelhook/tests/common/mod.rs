#![allow(dead_code)]

use levelhook::{BoxError, Hook, Level, Leveled};
use std::{
    fmt,
    sync::{Arc, Mutex},
};

// ============================================================================
// Test Entry
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct TestEntry {
    pub level: Level,
    pub message: String,
}

impl TestEntry {
    pub fn new(level: Level, message: &str) -> Self {
        Self {
            level,
            message: message.to_string(),
        }
    }
}

impl Leveled for TestEntry {
    fn level(&self) -> Level {
        self.level
    }
}

impl fmt::Display for TestEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level, self.message)
    }
}

// ============================================================================
// Test Hooks
// ============================================================================

/// Pushes its id into a shared log on every fire, optionally failing.
pub struct OrderRecordingHook {
    pub id: &'static str,
    pub levels: Vec<Level>,
    pub order: Arc<Mutex<Vec<&'static str>>>,
    pub fail_with: Option<&'static str>,
}

impl OrderRecordingHook {
    pub fn new(
        id: &'static str,
        levels: &[Level],
        order: &Arc<Mutex<Vec<&'static str>>>,
    ) -> Self {
        Self {
            id,
            levels: levels.to_vec(),
            order: order.clone(),
            fail_with: None,
        }
    }

    pub fn failing(mut self, message: &'static str) -> Self {
        self.fail_with = Some(message);
        self
    }
}

impl Hook<TestEntry> for OrderRecordingHook {
    fn name(&self) -> &str {
        self.id
    }

    fn levels(&self) -> &[Level] {
        &self.levels
    }

    fn fire(&self, _entry: &TestEntry) -> Result<(), BoxError> {
        self.order.lock().unwrap().push(self.id);
        match self.fail_with {
            Some(message) => Err(message.into()),
            None => Ok(()),
        }
    }
}
