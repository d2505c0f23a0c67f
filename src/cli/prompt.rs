//! Interactive prompts standing in for the page's form and dialogs

use dialoguer::{Input, Select, theme::ColorfulTheme};
use log::debug;

use crate::cli::AddArgs;
use crate::client::PlayerStatus;
use crate::error::Result;
use crate::roster::{IdPrompt, PlayerForm, StatusFilter};

const STATUS_ITEMS: [&str; 2] = ["bench", "field"];
const FILTER_ITEMS: [&str; 3] = ["all", "field", "bench"];

/// Asks for a player id on the terminal
pub struct TerminalIdPrompt;

impl IdPrompt for TerminalIdPrompt {
    fn ask_player_id(&self) -> Option<String> {
        let answer = Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter the ID of the player you want to remove")
            .allow_empty(true)
            .interact_text();

        match answer {
            Ok(id) => Some(id),
            Err(e) => {
                debug!("Remove prompt closed: {}", e);
                None
            }
        }
    }
}

/// An id given on the command line, prompting only when it was omitted
pub struct IdArgument(pub Option<String>);

impl IdPrompt for IdArgument {
    fn ask_player_id(&self) -> Option<String> {
        self.0
            .clone()
            .or_else(|| TerminalIdPrompt.ask_player_id())
    }
}

fn status_index(status: &PlayerStatus) -> usize {
    if status.is_field() { 1 } else { 0 }
}

fn status_at(index: usize) -> PlayerStatus {
    if index == 1 {
        PlayerStatus::Field
    } else {
        PlayerStatus::Bench
    }
}

fn filter_at(index: usize) -> StatusFilter {
    match index {
        1 => StatusFilter::Field,
        2 => StatusFilter::Bench,
        _ => StatusFilter::All,
    }
}

fn ask_text(
    theme: &ColorfulTheme,
    prompt: &str,
    initial: &str,
    allow_empty: bool,
) -> Result<String> {
    let value = Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(allow_empty)
        .interact_text()?;
    Ok(value)
}

/// Edit every form field in place, starting from the current values
pub fn edit_form(form: &mut PlayerForm) -> Result<()> {
    let theme = ColorfulTheme::default();

    form.name = ask_text(&theme, "Name", &form.name, false)?;
    form.breed = ask_text(&theme, "Breed", &form.breed, true)?;

    let status = Select::with_theme(&theme)
        .with_prompt("Status")
        .items(&STATUS_ITEMS)
        .default(status_index(&form.status))
        .interact()?;
    form.status = status_at(status);

    form.image_url = ask_text(&theme, "Image URL", &form.image_url, true)?;

    Ok(())
}

/// Build a form from `add` flags, prompting for whatever was left out
pub fn complete_form(args: AddArgs) -> Result<PlayerForm> {
    let theme = ColorfulTheme::default();

    let name = match args.name {
        Some(name) => name,
        None => ask_text(&theme, "Name", "", false)?,
    };
    let breed = match args.breed {
        Some(breed) => breed,
        None => ask_text(&theme, "Breed", "", true)?,
    };
    let status = match args.status {
        Some(choice) => choice.into(),
        None => {
            let index = Select::with_theme(&theme)
                .with_prompt("Status")
                .items(&STATUS_ITEMS)
                .default(0)
                .interact()?;
            status_at(index)
        }
    };
    let image_url = match args.image_url {
        Some(url) => url,
        None => ask_text(&theme, "Image URL", "", true)?,
    };

    Ok(PlayerForm {
        name,
        breed,
        status,
        image_url,
    })
}

/// Pick a roster filter
pub fn select_filter() -> Result<StatusFilter> {
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Show which players?")
        .items(&FILTER_ITEMS)
        .default(0)
        .interact()?;
    Ok(filter_at(index))
}
