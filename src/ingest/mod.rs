//! Menu ingestion: file text to [`Menu`].
//!
//! Only text formats are read here. Scanned or PDF menus need an OCR step first and are
//! rejected as [`IngestError::UnsupportedFormat`].

use crate::dialogue::prompts::MENU_EXTRACTION_INSTRUCTIONS;
use crate::model::money::parse_amount;
use crate::model::{Menu, MenuItem};
use crate::reasoning::{ChatMessage, Completion, CompletionRequest, ReasoningBackend, ReasoningError};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, instrument};

const TEXT_EXTENSIONS: [&str; 3] = ["txt", "md", "csv"];

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Failed to read menu {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported menu format: {0}")]
    UnsupportedFormat(String),

    #[error("Menu extraction failed: {0}")]
    Reasoning(#[from] ReasoningError),

    #[error("No menu items found")]
    NoMenuItems,
}

/// Read a text menu. The extension decides support, case-insensitively.
pub async fn read_menu_text(path: &Path) -> Result<String, IngestError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    if !TEXT_EXTENSIONS.contains(&extension.as_str()) {
        let shown = if extension.is_empty() { "(none)".to_string() } else { extension };
        return Err(IngestError::UnsupportedFormat(shown));
    }
    tokio::fs::read_to_string(path).await.map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn is_table_rule(line: &str) -> bool {
    line.chars().all(|c| matches!(c, '-' | '|' | ':' | '+' | '=' | ' '))
}

fn parse_row(line: &str) -> Option<MenuItem> {
    let line = line.trim().trim_matches('|').trim();
    if line.is_empty() || is_table_rule(line) {
        return None;
    }
    let separator = if line.contains('|') {
        "|"
    } else if line.contains('\t') {
        "\t"
    } else {
        ","
    };
    let fields: Vec<&str> = line.split(separator).map(str::trim).collect();
    let name = fields.first().copied().filter(|n| !n.is_empty())?;

    // The first column after the name that reads as an amount is the price; header rows
    // have none and drop out here.
    let (price_idx, price) = fields
        .iter()
        .enumerate()
        .skip(1)
        .find_map(|(idx, field)| parse_amount(field).map(|price| (idx, price)))?;

    let joiner = if separator == "," { ", " } else { " " };
    let description = fields[1..price_idx].join(joiner);
    let allergens = fields[price_idx + 1..].join(", ");
    Some(MenuItem::new(name, description.trim(), price, allergens.trim()))
}

/// Delimited rows (`name | description | price | allergens`) to menu items.
///
/// Pipe, tab and comma separators are accepted. Lines without a price are skipped.
pub fn parse_menu_rows(text: &str) -> Vec<MenuItem> {
    text.lines().filter_map(parse_row).collect()
}

/// Ask the reasoning collaborator to rewrite free-form menu text into rows, then parse them.
#[instrument(skip(backend, text), fields(chars = text.len()))]
pub async fn extract_menu(backend: &dyn ReasoningBackend, text: &str) -> Result<Menu, IngestError> {
    let request = CompletionRequest::new(vec![
        ChatMessage::system(MENU_EXTRACTION_INSTRUCTIONS),
        ChatMessage::user(text),
    ])
    .with_temperature(Some(0.0));

    let rows = match backend.complete(request).await? {
        Completion::Text(rows) => rows,
        Completion::ToolCalls(_) => {
            return Err(ReasoningError::MalformedResponse("Menu extraction asked for tools".into()).into())
        }
    };
    let menu = Menu::new(parse_menu_rows(&rows));
    if menu.is_empty() {
        return Err(IngestError::NoMenuItems);
    }
    Ok(menu)
}

/// Load a menu file, parsing locally first and falling back to the collaborator.
#[instrument(skip(backend))]
pub async fn load_menu(path: &Path, backend: &dyn ReasoningBackend) -> Result<Menu, IngestError> {
    let text = read_menu_text(path).await?;
    let rows = parse_menu_rows(&text);
    let menu = if rows.is_empty() {
        debug!("No delimited rows, asking the model");
        extract_menu(backend, &text).await?
    } else {
        Menu::new(rows)
    };
    info!(items = menu.len(), "Menu loaded");
    Ok(menu)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reasoning::ScriptedBackend;
    use rust_decimal::Decimal;

    #[test]
    fn test_pipe_table_with_header() {
        let text = "| Item | Description | Price | Allergens |\n\
                    |------|-------------|-------|-----------|\n\
                    | Latte | Espresso and steamed milk | $4.50 | milk |\n\
                    | Scone | Buttery | 3 | gluten, egg |";
        let items = parse_menu_rows(text);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], MenuItem::new("Latte", "Espresso and steamed milk", Decimal::new(450, 2), "milk"));
        assert_eq!(items[1].allergens, "gluten, egg");
        assert_eq!(items[1].price, Decimal::from(3));
    }

    #[test]
    fn test_tab_and_comma_rows() {
        let items = parse_menu_rows("Mocha\tChocolate espresso\t5.25\tmilk\nTea, Black tea, hot, 2.00\nFree water");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Mocha");
        assert_eq!(items[0].price, Decimal::new(525, 2));
        assert_eq!(items[1].description, "Black tea, hot");
        assert_eq!(items[1].allergens, "");
    }

    #[tokio::test]
    async fn test_unsupported_formats() {
        for name in ["menu.pdf", "menu.PNG", "menu"] {
            let err = read_menu_text(Path::new(name)).await.unwrap_err();
            assert!(matches!(err, IngestError::UnsupportedFormat(_)), "{name}");
        }
    }

    #[tokio::test]
    async fn test_load_menu_parses_locally() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.TXT");
        std::fs::write(&path, "Latte | Espresso and milk | 4.50 | milk\n").unwrap();

        let backend = ScriptedBackend::new();
        let menu = load_menu(&path, &backend).await.unwrap();
        assert_eq!(menu.len(), 1);
        assert!(backend.requests().await.is_empty());
    }

    #[tokio::test]
    async fn test_load_menu_falls_back_to_model() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.md");
        std::fs::write(&path, "# Drinks\nOur famous latte, four fifty. Contains milk.").unwrap();

        let backend = ScriptedBackend::new().with_text("Latte | Our famous latte | 4.50 | milk");
        let menu = load_menu(&path, &backend).await.unwrap();
        assert_eq!(menu.find("latte").unwrap().price, Decimal::new(450, 2));
        assert_eq!(backend.requests().await[0].messages[0].content, MENU_EXTRACTION_INSTRUCTIONS);
    }

    #[tokio::test]
    async fn test_extract_menu_with_nothing_usable() {
        let backend = ScriptedBackend::new().with_text("Sorry, I can't read that.");
        let err = extract_menu(&backend, "???").await.unwrap_err();
        assert!(matches!(err, IngestError::NoMenuItems));
    }
}
