//! Anchor injection - rewrite content by inserting anchors before headings
//!
//! For every occurrence of a rule pattern the injector inserts
//! `<a id="..."></a>` plus a blank line immediately before the matched
//! text. Everything else, including the matched text itself, is preserved
//! verbatim.

use crate::rules::RuleSet;

/// Insert anchors before every rule match in `content`.
///
/// Returns the rewritten content and the number of anchors inserted.
/// Content without matches comes back byte-identical.
pub fn inject_anchors(content: &str, rules: &RuleSet) -> (String, usize) {
    let mut inserted = 0usize;

    let rewritten = rules
        .matcher()
        .replace_all(content, |caps: &regex::Captures| {
            let matched = &caps[0];
            // Patterns are literals, so the matched text is the pattern.
            let id = rules
                .anchor_id(matched)
                .expect("matched text corresponds to a rule pattern");
            inserted += 1;
            format!("<a id=\"{}\"></a>\n\n{}", id, matched)
        });

    (rewritten.into_owned(), inserted)
}
