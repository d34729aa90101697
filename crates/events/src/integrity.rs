//! Referential integrity between the event list and the parameter specs.

use std::collections::HashSet;

use crate::error::{IntegrityError, Result};
use crate::{EVENT_PARAMS, EVENTS};

/// Splits a `"a, b, c"` parameter spec into its names.
///
/// Entries are trimmed; empty entries are kept so callers can reject them.
pub fn split_param_spec(spec: &str) -> impl Iterator<Item = &str> {
	spec.split(',').map(str::trim)
}

/// Whether `name` can be used as a handler parameter or method name.
pub fn is_identifier(name: &str) -> bool {
	let mut chars = name.chars();
	matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
		&& chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Checks an event list and its parameter specs against each other.
///
/// Rejects duplicate event names, duplicate or dangling spec keys, and specs
/// whose entries are empty or not identifiers. The first defect found is
/// returned.
pub fn check_integrity(events: &[&str], params: &[(&str, &str)]) -> Result<()> {
	let mut known = HashSet::with_capacity(events.len());
	for &event in events {
		if !known.insert(event) {
			return Err(IntegrityError::DuplicateEvent(event.to_string()));
		}
	}

	let mut seen = HashSet::with_capacity(params.len());
	for &(event, spec) in params {
		if !seen.insert(event) {
			return Err(IntegrityError::DuplicateParamKey(event.to_string()));
		}
		if !known.contains(event) {
			return Err(IntegrityError::DanglingParamKey(event.to_string()));
		}
		if spec.trim().is_empty() {
			return Err(IntegrityError::EmptyParamSpec(event.to_string()));
		}
		if let Some(param) = split_param_spec(spec).find(|p| !is_identifier(p)) {
			return Err(IntegrityError::InvalidParamName {
				event: event.to_string(),
				param: param.to_string(),
			});
		}
	}

	Ok(())
}

/// Runs [`check_integrity`] over the built-in registry.
pub fn verify_registry() -> Result<()> {
	check_integrity(&EVENTS, EVENT_PARAMS)
}
