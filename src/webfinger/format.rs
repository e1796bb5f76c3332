/// Human-readable rendering of a JRD.
///
/// Layout:
///
/// ```text
/// subject: acct:alice@example.com
///
/// aliases:
/// - https://example.com/@alice
///
/// properties:
/// - http://example.com/ns/role: admin
///
/// links:
/// - rel: self
///   href: https://example.com/users/alice
///   type: application/activity+json
///   titles:
///   - en: Alice
/// ```
///
/// Aliases and links keep response order; map entries are key-sorted.
use std::collections::BTreeMap;
use std::fmt::Write;

use icu_collator::{Collator, CollatorOptions};

use crate::types::Jrd;

/// Render `jrd` as text. Pure and deterministic.
#[must_use]
pub fn format_jrd(jrd: &Jrd) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "subject: {}", jrd.subject);

    if let Some(aliases) = jrd.aliases.as_ref().filter(|a| !a.is_empty()) {
        out.push_str("\naliases:\n");
        for alias in aliases {
            let _ = writeln!(out, "- {alias}");
        }
    }

    if let Some(properties) = jrd.properties.as_ref().filter(|p| !p.is_empty()) {
        out.push_str("\nproperties:\n");
        out.push_str(&format_entries(properties, 0));
    }

    if let Some(links) = jrd.links.as_ref().filter(|l| !l.is_empty()) {
        out.push_str("\nlinks:\n");
        for link in links {
            let _ = writeln!(out, "- rel: {}", link.rel);
            if let Some(href) = link.href.as_deref().filter(|h| !h.is_empty()) {
                let _ = writeln!(out, "  href: {href}");
            }
            if let Some(media_type) = link.media_type.as_deref().filter(|t| !t.is_empty()) {
                let _ = writeln!(out, "  type: {media_type}");
            }
            if let Some(titles) = &link.titles {
                out.push_str("  titles:\n");
                out.push_str(&format_entries(titles, 1));
            }
            // Unlike the top-level block, an empty map still gets its header.
            if let Some(properties) = &link.properties {
                out.push_str("  properties:\n");
                out.push_str(&format_entries(properties, 1));
            }
        }
    }

    out
}

/// Render `- key: value` lines sorted by key.
///
/// Keys use the CLDR root collation (punctuation before digits before
/// letters, lowercase before uppercase). Level 0 has no leading
/// indentation; each further level adds two spaces.
#[must_use]
pub fn format_entries(entries: &BTreeMap<String, String>, level: usize) -> String {
    let indent = "  ".repeat(level);
    let mut sorted: Vec<(&String, &String)> = entries.iter().collect();
    // Root collation data is compiled in, so construction only fails on a
    // broken build; the map is already in code point order in that case.
    if let Ok(collator) = Collator::try_new(&Default::default(), CollatorOptions::new()) {
        sorted.sort_by(|a, b| collator.compare(a.0, b.0));
    }

    let mut out = String::new();
    for (key, value) in sorted {
        let _ = writeln!(out, "{indent}- {key}: {value}");
    }
    out
}
