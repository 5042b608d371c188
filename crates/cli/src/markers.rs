// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Marker substring scanning.

use aho_corasick::AhoCorasick;

/// Return the first marker (in the given order) that does not occur in
/// `content`. Matching is exact and case-sensitive.
pub fn first_missing<'m, S: AsRef<str>>(content: &str, markers: &'m [S]) -> Option<&'m str> {
    let found = found_markers(content, markers);
    markers
        .iter()
        .zip(found)
        .find(|(_, present)| !present)
        .map(|(marker, _)| marker.as_ref())
}

/// Return every marker that does not occur in `content`, in order.
pub fn all_missing<'m, S: AsRef<str>>(content: &str, markers: &'m [S]) -> Vec<&'m str> {
    let found = found_markers(content, markers);
    markers
        .iter()
        .zip(found)
        .filter(|(_, present)| !present)
        .map(|(marker, _)| marker.as_ref())
        .collect()
}

/// One pass over `content`; `result[i]` is true if `markers[i]` occurs.
fn found_markers<S: AsRef<str>>(content: &str, markers: &[S]) -> Vec<bool> {
    let mut found = vec![false; markers.len()];
    if markers.is_empty() {
        return found;
    }

    // Empty markers trivially match; the automaton handles the rest.
    for (i, marker) in markers.iter().enumerate() {
        if marker.as_ref().is_empty() {
            found[i] = true;
        }
    }

    let Ok(automaton) = AhoCorasick::new(markers.iter().map(AsRef::as_ref)) else {
        // Only fails on pathological pattern sizes; fall back to a plain scan.
        for (i, marker) in markers.iter().enumerate() {
            found[i] = content.contains(marker.as_ref());
        }
        return found;
    };

    for m in automaton.find_overlapping_iter(content) {
        found[m.pattern().as_usize()] = true;
    }
    found
}

#[cfg(test)]
#[path = "markers_tests.rs"]
mod tests;
