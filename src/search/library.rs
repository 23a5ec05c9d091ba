use crate::catalog::Catalog;
use crate::models::document::{Category, Command, Document, Example, Library, Resource};
use crate::models::search::{ResultSource, ScoredDocument};

const DEFAULT_LIBRARY_ICON: &str = "📦";
const LIBRARY_COLOR_CLASS: &str = "library";

/// Resolve a `library:<id>` lookup into at most one synthesized result.
pub fn lookup(catalog: &Catalog, id: &str) -> Vec<ScoredDocument> {
    match catalog.find_library(id) {
        Some(library) => vec![ScoredDocument {
            document: to_document(library),
            score: 0,
            source: ResultSource::Library,
        }],
        None => {
            tracing::debug!(library = id, "library lookup found nothing");
            Vec::new()
        }
    }
}

/// Present a registered library as a catalog document: one "Installation"
/// category holding the install snippets and one usage example.
pub fn to_document(library: &Library) -> Document {
    let install_commands = library
        .install
        .iter()
        .map(|snippet| Command {
            syntax: snippet.command.clone(),
            description: format!("Install with {}", snippet.manager),
        })
        .collect();

    let mut resources = Vec::new();
    if let Some(url) = &library.docs_url {
        resources.push(Resource {
            title: format!("{} documentation", library.name),
            url: url.clone(),
        });
    }
    if let Some(url) = &library.repository {
        resources.push(Resource {
            title: "Source repository".to_string(),
            url: url.clone(),
        });
    }

    Document {
        id: library.id.clone(),
        title: library.name.clone(),
        description: library.description.clone(),
        icon: if library.icon.is_empty() {
            DEFAULT_LIBRARY_ICON.to_string()
        } else {
            library.icon.clone()
        },
        color_class: LIBRARY_COLOR_CLASS.to_string(),
        categories: vec![Category {
            name: "Installation".to_string(),
            commands: install_commands,
        }],
        commands: vec![],
        examples: vec![Example {
            title: "Basic usage".to_string(),
            code: library.usage.clone(),
        }],
        resources,
    }
}
