//! Interactive roster browser
//!
//! Loads the full roster once, then offers the page's buttons as a menu until
//! the user quits. The add form persists across failed submissions.

use colored::Colorize;
use dialoguer::{Select, theme::ColorfulTheme};

use crate::cli::prompt::{self, TerminalIdPrompt};
use crate::cli::{CommandContext, GlobalOptions};
use crate::error::Result;
use crate::roster::PlayerForm;

/// Menu entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Random,
    Add,
    Remove,
    ViewRoster,
    Reload,
    Quit,
}

impl Action {
    const ALL: [Action; 6] = [
        Action::Random,
        Action::Add,
        Action::Remove,
        Action::ViewRoster,
        Action::Reload,
        Action::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            Action::Random => "Show a random player",
            Action::Add => "Add a player",
            Action::Remove => "Remove a player",
            Action::ViewRoster => "View roster by status",
            Action::Reload => "Reload full roster",
            Action::Quit => "Quit",
        }
    }
}

/// Run the play command
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let mut ctx = CommandContext::interactive(opts)?;

    println!("{}", "Puppy Bowl".bold().green());
    println!("Roster: {}\n", ctx.config.players_url().cyan());

    ctx.controller.load_roster().await;

    let labels: Vec<&str> = Action::ALL.iter().map(|a| a.label()).collect();
    let mut form = PlayerForm::default();

    loop {
        println!();
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("What next?")
            .items(&labels)
            .default(0)
            .interact_opt()?;

        let action = match choice {
            Some(index) => Action::ALL[index],
            None => Action::Quit,
        };

        match action {
            Action::Random => ctx.controller.show_random().await,
            Action::Add => {
                prompt::edit_form(&mut form)?;
                ctx.controller.add_player(&mut form).await;
            }
            Action::Remove => ctx.controller.remove_player(&TerminalIdPrompt).await,
            Action::ViewRoster => {
                let filter = prompt::select_filter()?;
                ctx.controller.show_filtered(filter).await;
            }
            Action::Reload => ctx.controller.load_roster().await,
            Action::Quit => break,
        }
    }

    Ok(())
}
