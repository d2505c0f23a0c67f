//! Roster command implementations
//!
//! Each command runs one controller operation. The exit code reflects whether
//! the error line was written, so a failed `list` (which only logs) still
//! exits cleanly.

use std::process::ExitCode;

use log::debug;

use crate::cli::prompt::{self, IdArgument};
use crate::cli::{AddArgs, CommandContext, GlobalOptions};
use crate::error::Result;
use crate::roster::StatusFilter;

/// Run the list command
pub async fn list(opts: &GlobalOptions) -> Result<ExitCode> {
    let mut ctx = CommandContext::new(opts)?;
    ctx.controller.load_roster().await;
    Ok(ctx.exit_code())
}

/// Run the random command
pub async fn random(opts: &GlobalOptions) -> Result<ExitCode> {
    let mut ctx = CommandContext::new(opts)?;
    ctx.controller.show_random().await;
    Ok(ctx.exit_code())
}

/// Run the roster command
pub async fn filtered(opts: &GlobalOptions, status: StatusFilter) -> Result<ExitCode> {
    let mut ctx = CommandContext::new(opts)?;
    debug!("Filtering roster by {:?}", status);
    ctx.controller.show_filtered(status).await;
    Ok(ctx.exit_code())
}

/// Run the add command
pub async fn add(opts: &GlobalOptions, args: AddArgs) -> Result<ExitCode> {
    let mut ctx = CommandContext::new(opts)?;
    let mut form = prompt::complete_form(args)?;
    ctx.controller.add_player(&mut form).await;
    Ok(ctx.exit_code())
}

/// Run the remove command
pub async fn remove(opts: &GlobalOptions, id: Option<String>) -> Result<ExitCode> {
    let mut ctx = CommandContext::new(opts)?;
    ctx.controller.remove_player(&IdArgument(id)).await;
    Ok(ctx.exit_code())
}
