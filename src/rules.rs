//! Heading rules - the fixed table mapping heading text to anchor ids
//!
//! A rule pairs a literal heading line prefix with the id to emit in the
//! injected `<a id="..."></a>` element. The set is validated once, ordered
//! so that longer patterns always win over shorter ones, and compiled into
//! a single alternation regex of escaped literals.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use thiserror::Error;

/// Built-in rule table: heading text -> anchor id.
///
/// Covers the documented API headings of the merge-insertion library
/// (the type alias, the comparator callback and the two public functions).
const DEFAULT_TABLE: &[(&str, &str)] = &[
    ("### merge_insertion.T", "merge_insertion.T"),
    ("### merge_insertion.Comparator", "merge_insertion.Comparator"),
    (
        "### merge_insertion.merge_insertion_sort",
        "merge_insertion.merge_insertion_sort",
    ),
    (
        "### merge_insertion.merge_insertion_max_comparisons",
        "merge_insertion.merge_insertion_max_comparisons",
    ),
];

static DEFAULTS: Lazy<RuleSet> = Lazy::new(|| {
    RuleSet::new(
        DEFAULT_TABLE
            .iter()
            .map(|(pattern, id)| HeadingRule::new(pattern, id)),
    )
    .expect("built-in rule table is valid")
});

/// A single heading rule: literal heading text and the anchor id to inject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingRule {
    /// Literal heading text to look for (no wildcards).
    pub pattern: String,

    /// Value for the `id` attribute of the injected anchor.
    pub anchor_id: String,
}

impl HeadingRule {
    pub fn new(pattern: &str, anchor_id: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            anchor_id: anchor_id.to_string(),
        }
    }
}

/// Errors raised while validating a rule table.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("duplicate heading pattern: {0:?}")]
    DuplicatePattern(String),

    #[error("heading pattern must not be empty")]
    EmptyPattern,

    #[error("failed to compile heading matcher: {0}")]
    Compile(#[from] regex::Error),
}

/// An immutable, validated set of heading rules with a compiled matcher.
///
/// Rules are sorted by descending pattern length, ties broken by ascending
/// lexicographic order. The combined regex is an alternation of escaped
/// literals in that order; the regex crate tries alternation branches
/// left to right, so the sort order is the match precedence.
#[derive(Debug)]
pub struct RuleSet {
    rules: Vec<HeadingRule>,
    matcher: Regex,
    anchors: HashMap<String, String>,
}

impl RuleSet {
    /// Build a rule set, rejecting empty and duplicate patterns.
    pub fn new<I>(rules: I) -> Result<Self, RuleError>
    where
        I: IntoIterator<Item = HeadingRule>,
    {
        let mut rules: Vec<HeadingRule> = rules.into_iter().collect();

        let mut anchors = HashMap::new();
        for rule in &rules {
            if rule.pattern.is_empty() {
                return Err(RuleError::EmptyPattern);
            }
            if anchors
                .insert(rule.pattern.clone(), rule.anchor_id.clone())
                .is_some()
            {
                return Err(RuleError::DuplicatePattern(rule.pattern.clone()));
            }
        }

        // Longest pattern first so a more specific heading is never
        // shadowed by a shorter one matching its prefix; lexicographic
        // tie-break keeps the order deterministic.
        rules.sort_by(|a, b| {
            b.pattern
                .len()
                .cmp(&a.pattern.len())
                .then_with(|| a.pattern.cmp(&b.pattern))
        });

        // An empty alternation would match the empty string at every
        // position; an empty set must match nothing instead.
        let alternation = if rules.is_empty() {
            r"[^\s\S]".to_string()
        } else {
            rules
                .iter()
                .map(|r| regex::escape(&r.pattern))
                .collect::<Vec<_>>()
                .join("|")
        };
        let matcher = Regex::new(&alternation)?;

        Ok(Self {
            rules,
            matcher,
            anchors,
        })
    }

    /// The built-in rule set, compiled once per process.
    pub fn defaults() -> &'static RuleSet {
        &DEFAULTS
    }

    /// Combined matcher over all patterns, in precedence order.
    pub fn matcher(&self) -> &Regex {
        &self.matcher
    }

    /// Anchor id for a matched pattern, if the pattern is in the set.
    pub fn anchor_id(&self, pattern: &str) -> Option<&str> {
        self.anchors.get(pattern).map(|s| s.as_str())
    }

    /// Rules in precedence order (longest first, then lexicographic).
    pub fn rules(&self) -> &[HeadingRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
