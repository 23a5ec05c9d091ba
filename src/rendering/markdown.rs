use pulldown_cmark::{html, Options, Parser};

/// Render a raw Markdown string to sanitized HTML.
///
/// Supports GitHub Flavored Markdown (GFM) features: tables,
/// footnotes, strikethrough, task lists, and smart punctuation.
/// The output is passed through `ammonia`, so raw HTML embedded in
/// articles cannot inject scripts or event handlers.
pub fn render_markdown(raw: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_SMART_PUNCTUATION;

    let parser = Parser::new_ext(raw, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    ammonia::clean(&html_output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_paragraph() {
        let result = render_markdown("Hello, world!");
        assert_eq!(result.trim(), "<p>Hello, world!</p>");
    }

    #[test]
    fn test_heading() {
        let result = render_markdown("# Title");
        assert_eq!(result.trim(), "<h1>Title</h1>");
    }

    #[test]
    fn test_code_block() {
        let input = "```rust\nfn main() {}\n```";
        let result = render_markdown(input);
        assert!(result.contains("<code"));
        assert!(result.contains("fn main()"));
    }

    #[test]
    fn test_table() {
        let input = "| A | B |\n|---|---|\n| 1 | 2 |";
        let result = render_markdown(input);
        assert!(result.contains("<table>"));
        assert!(result.contains("<td>1</td>"));
    }

    #[test]
    fn test_strikethrough() {
        let result = render_markdown("~~deleted~~");
        assert!(result.contains("<del>deleted</del>"));
    }

    #[test]
    fn test_links_get_rel_attribute() {
        let result = render_markdown("[LibDev](https://example.com)");
        assert!(result.contains("href=\"https://example.com\""));
        assert!(result.contains("rel=\"noopener noreferrer\""));
        assert!(result.contains(">LibDev</a>"));
    }

    #[test]
    fn test_script_is_stripped() {
        let result = render_markdown("Hi <script>alert('x')</script> there");
        assert!(!result.contains("<script"));
        assert!(!result.contains("alert"));
    }

    #[test]
    fn test_event_handler_is_stripped() {
        let result = render_markdown("<img src=\"a.png\" onerror=\"alert(1)\">");
        assert!(!result.contains("onerror"));
    }

    #[test]
    fn test_empty_input() {
        let result = render_markdown("");
        assert_eq!(result, "");
    }

    #[test]
    fn test_multiline_document() {
        let input = r#"# Getting Started

Welcome to **LibDev**.

## Installation

```bash
cargo install libdev
```

- Fast
- Searchable
"#;
        let result = render_markdown(input);
        assert!(result.contains("<h1>Getting Started</h1>"));
        assert!(result.contains("<h2>Installation</h2>"));
        assert!(result.contains("<strong>LibDev</strong>"));
        assert!(result.contains("<li>Fast</li>"));
    }
}
