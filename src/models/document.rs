use serde::{Deserialize, Serialize};

/// One searchable catalog entry (a language, tool, or library).
///
/// Every optional field defaults at deserialization time, so the matching
/// and scoring code can iterate without existence checks. Documents written
/// in the legacy shape carry their commands in `commands` instead of
/// `categories`; both are kept and walked through [`Document::all_commands`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color_class: String,
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Legacy flat command list.
    #[serde(default)]
    pub commands: Vec<Command>,
    #[serde(default)]
    pub examples: Vec<Example>,
    #[serde(default)]
    pub resources: Vec<Resource>,
}

/// Named grouping of commands within a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub commands: Vec<Command>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    #[serde(default)]
    pub syntax: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
}

/// Lightweight listing entry for the catalog index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub color_class: String,
    pub command_count: usize,
}

impl Document {
    /// Every command of the document: categorized ones first, then legacy flat ones.
    pub fn all_commands(&self) -> impl Iterator<Item = &Command> {
        self.categories
            .iter()
            .flat_map(|c| c.commands.iter())
            .chain(self.commands.iter())
    }

    pub fn summary(&self) -> DocumentSummary {
        DocumentSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            icon: self.icon.clone(),
            color_class: self.color_class.clone(),
            command_count: self.all_commands().count(),
        }
    }
}

/// Entry of the "named command" source used by the suggestions endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedCommand {
    pub name: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub syntax: String,
    #[serde(default)]
    pub description: String,
}

/// A library registered for `library:<id>` lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Library {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub install: Vec<InstallSnippet>,
    #[serde(default)]
    pub usage: String,
    #[serde(default)]
    pub docs_url: Option<String>,
    #[serde(default)]
    pub repository: Option<String>,
}

/// How to install a library with one package manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallSnippet {
    pub manager: String,
    pub command: String,
}
