//! Substring matching and additive relevance scoring over catalog documents.

use crate::models::document::Document;
use crate::models::search::{ResultSource, ScoredDocument};
use crate::search::query::contains;

const TITLE_WEIGHT: u32 = 10;
const EXACT_TITLE_BONUS: u32 = 5;
const DESCRIPTION_WEIGHT: u32 = 5;
const CATEGORY_WEIGHT: u32 = 3;
const EXAMPLE_WEIGHT: u32 = 2;
const COMMAND_WEIGHT: u32 = 1;

/// Which fields of one document matched one query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchReport {
    pub title: bool,
    pub exact_title: bool,
    pub description: bool,
    pub categories: u32,
    pub commands: u32,
    pub examples: u32,
}

impl MatchReport {
    /// Evaluate every rule for `doc`. `query` must already be normalized.
    pub fn evaluate(doc: &Document, query: &str) -> Self {
        let count = |n: usize| u32::try_from(n).unwrap_or(u32::MAX);

        Self {
            title: contains(&doc.title, query),
            exact_title: doc.title.trim().to_lowercase() == query,
            description: contains(&doc.description, query),
            categories: count(
                doc.categories
                    .iter()
                    .filter(|c| contains(&c.name, query))
                    .count(),
            ),
            commands: count(
                doc.all_commands()
                    .filter(|c| contains(&c.syntax, query) || contains(&c.description, query))
                    .count(),
            ),
            examples: count(
                doc.examples
                    .iter()
                    .filter(|e| contains(&e.title, query) || contains(&e.code, query))
                    .count(),
            ),
        }
    }

    pub fn is_match(&self) -> bool {
        self.title
            || self.description
            || self.categories > 0
            || self.commands > 0
            || self.examples > 0
    }

    pub fn score(&self) -> u32 {
        let mut score = 0u32;
        if self.title {
            score += TITLE_WEIGHT;
        }
        if self.exact_title {
            score += EXACT_TITLE_BONUS;
        }
        if self.description {
            score += DESCRIPTION_WEIGHT;
        }
        score = score.saturating_add(self.categories.saturating_mul(CATEGORY_WEIGHT));
        score = score.saturating_add(self.commands.saturating_mul(COMMAND_WEIGHT));
        score.saturating_add(self.examples.saturating_mul(EXAMPLE_WEIGHT))
    }
}

/// Whether `doc` matches the normalized query on any field.
pub fn matches(doc: &Document, query: &str) -> bool {
    !query.is_empty() && MatchReport::evaluate(doc, query).is_match()
}

/// Relevance score of `doc` for the normalized query (0 when it does not match).
pub fn score(doc: &Document, query: &str) -> u32 {
    if query.is_empty() {
        return 0;
    }
    MatchReport::evaluate(doc, query).score()
}

/// Filter and rank `documents`. Higher scores first; equal scores keep input order.
pub fn rank(documents: &[Document], query: &str) -> Vec<ScoredDocument> {
    if query.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<ScoredDocument> = documents
        .iter()
        .filter_map(|doc| {
            let report = MatchReport::evaluate(doc, query);
            report.is_match().then(|| ScoredDocument {
                document: doc.clone(),
                score: report.score(),
                source: ResultSource::Catalog,
            })
        })
        .collect();

    // `sort_by` is stable, which preserves collection order on ties.
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results
}
