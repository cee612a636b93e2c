//! Parser warnings with colored terminal output.
//!
//! Provides deduplication so a document full of the same oddity (say, a
//! hundred elements with empty tag names) reports it once.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    // A panic while holding the lock cannot leave the set half-updated.
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about a suspicious but accepted construct (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("HTML", "element with an empty tag name");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let should_print = warned()
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if should_print {
        eprintln!("{}", format!("[Wren {component}] ⚠ {message}").yellow());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorded(component: &str, message: &str) -> bool {
        warned()
            .as_ref()
            .is_some_and(|set| set.contains(&key(component, message)))
    }

    #[test]
    fn warn_once_records_each_message_once() {
        warn_once("test", "duplicate attribute 'a'");
        assert!(recorded("test", "duplicate attribute 'a'"));
        assert!(!recorded("other", "duplicate attribute 'a'"));

        // Second call is a no-op but must not disturb the record.
        warn_once("test", "duplicate attribute 'a'");
        assert!(recorded("test", "duplicate attribute 'a'"));
    }
}
