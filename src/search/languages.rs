use std::collections::BTreeMap;

use crate::db::models::LanguageEntry;
use crate::models::search::{LanguageMatch, LanguageSearchResponse};
use crate::search::query::{contains, normalize};

/// Filter the language reference by a raw query.
///
/// A language whose name matches is returned whole. Otherwise only its
/// matching commands are kept, and the language is returned when at least
/// one command or its documentation matched.
pub fn search_languages(entries: &[LanguageEntry], raw: &str) -> LanguageSearchResponse {
    let query = normalize(raw);
    let mut languages = BTreeMap::new();

    if query.is_empty() {
        return LanguageSearchResponse { languages };
    }

    for entry in entries {
        if contains(&entry.name, &query) {
            languages.insert(
                entry.name.clone(),
                LanguageMatch {
                    commands: entry.commands.clone(),
                    documentation: entry.documentation.clone(),
                },
            );
            continue;
        }

        let commands: Vec<_> = entry
            .commands
            .iter()
            .filter(|c| contains(&c.syntax, &query) || contains(&c.description, &query))
            .cloned()
            .collect();

        if !commands.is_empty() || contains(&entry.documentation, &query) {
            languages.insert(
                entry.name.clone(),
                LanguageMatch {
                    commands,
                    documentation: entry.documentation.clone(),
                },
            );
        }
    }

    LanguageSearchResponse { languages }
}
