//! Merging badges into a README.
//!
//! Reconciliation is idempotent: once every badge is present, running it
//! again returns the input unchanged with nothing inserted or replaced.

use regex::Regex;
use std::sync::LazyLock;

use super::badge::Badge;

/// A line containing an image link.
static BADGE_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!\[.*?\]\(.*?\)").unwrap());

/// One badge: an image, optionally wrapped in a link.
static BADGE_MARKUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[!\[[^\]]*\]\([^)\s]*\)\]\([^)\s]*\)|!\[[^\]]*\]\([^)\s]*\)").unwrap()
});

/// How aggressively to update existing badges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileOptions {
    /// Rewrite badges whose identity matches but whose URL is stale.
    pub refresh: bool,
}

/// Outcome of [`reconcile`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// The resulting document.
    pub text: String,
    /// Badges added as new lines.
    pub inserted: usize,
    /// Existing badges rewritten in place.
    pub replaced: usize,
}

impl Reconciliation {
    /// Whether the document needs to be written back.
    pub fn changed(&self) -> bool {
        self.inserted + self.replaced > 0
    }
}

/// Merge `badges` into `readme`.
///
/// Badges already present (by identity) are left alone. Missing ones are
/// appended after the first run of badge lines, or after the first
/// paragraph when the document has no badges yet.
///
/// # Example
///
/// ```
/// use upkeep::badges::{reconcile, Badge, BadgeCategory, ReconcileOptions};
///
/// let badge = Badge::new(BadgeCategory::Docs, "Docs", "https://img/docs.svg", None);
/// let result = reconcile("# Title\n\nIntro.\n", &[badge], ReconcileOptions::default());
///
/// assert_eq!(result.inserted, 1);
/// assert_eq!(result.text, "# Title\n\nIntro.\n\n![Docs](https://img/docs.svg)\n");
/// ```
pub fn reconcile(readme: &str, badges: &[Badge], options: ReconcileOptions) -> Reconciliation {
    let mut lines: Vec<String> = readme.lines().map(String::from).collect();
    let mut replaced = 0;
    let mut missing = Vec::new();

    for badge in badges {
        let text = lines.join("\n");

        if badge.is_present_in(&text) {
            if options.refresh
                && !badge.is_current_in(&text)
                && replace_markup(&mut lines, badge.identity(), badge)
            {
                tracing::debug!(category = %badge.category, "Refreshed stale badge");
                replaced += 1;
            }
            continue;
        }

        if badge
            .supersedes()
            .iter()
            .any(|marker| replace_markup(&mut lines, marker, badge))
        {
            tracing::debug!(category = %badge.category, "Replaced superseded badge");
            replaced += 1;
            continue;
        }

        tracing::debug!(category = %badge.category, "Badge missing");
        missing.push(badge.markdown.clone());
    }

    let inserted = missing.len();
    if inserted == 0 && replaced == 0 {
        return Reconciliation {
            text: readme.to_string(),
            inserted,
            replaced,
        };
    }

    if inserted > 0 {
        insert_block(&mut lines, missing);
    }

    let mut text = lines.join("\n");
    text.push('\n');

    Reconciliation {
        text,
        inserted,
        replaced,
    }
}

/// Rewrite the first badge whose markup contains `marker`.
fn replace_markup(lines: &mut [String], marker: &str, badge: &Badge) -> bool {
    for line in lines.iter_mut() {
        let found = BADGE_MARKUP
            .find_iter(line)
            .find(|m| m.as_str().contains(marker))
            .map(|m| m.range());

        if let Some(range) = found {
            line.replace_range(range, &badge.markdown);
            return true;
        }
    }
    false
}

/// Index of the last line in the first contiguous run of badge lines.
fn badge_block_end(lines: &[String]) -> Option<usize> {
    let start = lines.iter().position(|l| BADGE_LINE.is_match(l))?;
    let run = lines[start..]
        .iter()
        .take_while(|l| BADGE_LINE.is_match(l))
        .count();
    Some(start + run - 1)
}

/// Index of the line after the first paragraph, skipping headings and blanks.
fn first_paragraph_end(lines: &[String]) -> usize {
    let mut i = 0;
    while i < lines.len() && (lines[i].starts_with('#') || lines[i].trim().is_empty()) {
        i += 1;
    }
    while i < lines.len() && !lines[i].trim().is_empty() {
        i += 1;
    }
    i
}

fn insert_block(lines: &mut Vec<String>, block: Vec<String>) {
    if let Some(end) = badge_block_end(lines) {
        lines.splice(end + 1..end + 1, block);
        return;
    }

    // `at` is either the end of the document or the blank line that already
    // separates the block from what follows.
    let mut at = first_paragraph_end(lines);
    if at == lines.len() {
        while at > 0 && lines[at - 1].trim().is_empty() {
            at -= 1;
        }
        lines.truncate(at);
    }
    let mut insertion = Vec::with_capacity(block.len() + 1);
    if at > 0 {
        insertion.push(String::new());
    }
    insertion.extend(block);
    lines.splice(at..at, insertion);
}
