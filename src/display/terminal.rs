//! Terminal surface: cards on stdout, the error line on stderr

use colored::Colorize;
use console::Term;
use serde::Serialize;
use tabled::Tabled;

use super::{Card, CardStyle, Surface};
use crate::cli::OutputFormat;
use crate::output::{json, table};

/// Card row for table output
#[derive(Debug, Tabled, Serialize)]
struct CardRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "BREED")]
    breed: String,
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "IMAGE")]
    image: String,
}

impl From<&Card> for CardRow {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id,
            name: card.name.clone(),
            breed: card.breed.clone(),
            status: card.status.clone(),
            image: card.image_src.clone(),
        }
    }
}

/// Draw one card as a boxed block
fn pretty_card(card: &Card) -> String {
    let tag = match card.style {
        CardStyle::OnField => card.style.class_name().green(),
        CardStyle::Benched => card.style.class_name().yellow(),
    };
    let [name, breed, id, _] = card.lines();
    let status = match card.style {
        CardStyle::OnField => card.status.green(),
        CardStyle::Benched => card.status.yellow(),
    };

    let mut out = String::new();
    out.push_str(&format!("╭─ {} [{}]\n", card.name.bold(), tag));
    out.push_str(&format!("│ {}\n", name));
    out.push_str(&format!("│ {}\n", breed));
    out.push_str(&format!("│ {}\n", id));
    out.push_str(&format!("│ Status: {}\n", status));
    out.push_str(&format!(
        "│ Image: {} (alt: {})\n",
        card.image_src.dimmed(),
        card.image_alt
    ));
    out.push('╰');
    out.push_str(&"─".repeat(24));
    out
}

/// Render a full mounting point in the given format.
///
/// An empty card set renders as nothing in the text formats and as an empty
/// `data` array in JSON.
pub fn render_cards(cards: &[Card], format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => json::format_json(cards),
        _ if cards.is_empty() => Ok(String::new()),
        OutputFormat::Table => {
            let rows: Vec<CardRow> = cards.iter().map(CardRow::from).collect();
            Ok(table::format_table(&rows))
        }
        OutputFormat::Pretty => Ok(cards
            .iter()
            .map(pretty_card)
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

/// Surface writing to the terminal
#[derive(Debug)]
pub struct TerminalSurface {
    format: OutputFormat,
    last_error: Option<String>,
    clear_on_mount: bool,
}

impl TerminalSurface {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            last_error: None,
            clear_on_mount: false,
        }
    }

    /// Surface for interactive sessions: every mount clears the screen first,
    /// so only the latest render is visible.
    pub fn interactive(format: OutputFormat) -> Self {
        Self {
            clear_on_mount: true,
            ..Self::new(format)
        }
    }

    /// Whether the error line has been written since creation
    pub fn has_error(&self) -> bool {
        self.last_error.is_some()
    }

    /// Latest message on the error line
    #[cfg(test)]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn clear_screen(&self) {
        let term = Term::stdout();
        if !term.is_term() {
            return;
        }
        if let Err(e) = term.clear_screen() {
            log::debug!("Failed to clear screen: {}", e);
        }
    }
}

impl Surface for TerminalSurface {
    fn mount(&mut self, cards: &[Card]) {
        if self.clear_on_mount {
            self.clear_screen();
        }
        match render_cards(cards, self.format) {
            Ok(output) if output.is_empty() => {}
            Ok(output) => println!("{}", output),
            Err(e) => log::error!("Failed to render cards: {}", e),
        }
    }

    fn show_error(&mut self, message: &str) {
        eprintln!("{} {}", "Error:".red().bold(), message);
        self.last_error = Some(message.to_string());
    }
}
