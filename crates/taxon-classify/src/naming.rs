//! Topic name derived from the paper title.

use taxon_core::PaperMetadata;

/// Titles longer than this are cut back to their first clause.
const CLAUSE_SPLIT_THRESHOLD: usize = 70;
/// A first clause shorter than this is too thin to stand in for the title.
const MIN_CLAUSE_LEN: usize = 15;
const MAX_NAME_LEN: usize = 80;
const TRUNCATED_LEN: usize = 77;
const ELLIPSIS: &str = "...";

/// Concise subtopic name, at most 80 characters.
///
/// Lossy: long titles keep only their first clause, and whatever is still too
/// long is cut at 77 characters with `...` appended.
#[must_use]
pub fn generate_subtopic_name(meta: &PaperMetadata) -> String {
    let mut name = meta.title.split_whitespace().collect::<Vec<_>>().join(" ");

    if name.chars().count() > CLAUSE_SPLIT_THRESHOLD
        && let Some(first) = name.split(['.', ':', ';']).next().map(str::trim)
        && first.chars().count() > MIN_CLAUSE_LEN
    {
        name = first.to_string();
    }

    if name.chars().count() > MAX_NAME_LEN {
        name = name.chars().take(TRUNCATED_LEN).collect::<String>() + ELLIPSIS;
    }

    name
}
