//! Engine warnings with colored terminal output.
//!
//! Provides deduplication so that a query loop over thousands of selector
//! pairs reports each approximation once.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about an approximated feature (prints once per unique message).
///
/// # Example
/// ```ignore
/// warn_once("Selector", "no subsumption rule for :has(); comparing structurally");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if first_report(warning_key(component, message)) {
        eprintln!("{}", format!("[Quill {component}] ⚠ {message}").yellow());
    }
}

fn warning_key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Record `key`, returning whether it had not been seen before.
fn first_report(key: String) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key)
}
