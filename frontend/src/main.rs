//! `roster-console`: drive the user list view from standard input.
//!
//! Commands, one per line:
//!
//! ```text
//! add <name>     create <name>@mail.com, aged 25
//! delete <id>    remove a user
//! edit <id>      open the edit modal
//! name <text>    set the edit modal's name field
//! save           send the edited name
//! cancel         close the modal
//! reload         fetch the list again
//! quit           exit
//! ```
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::io;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use roster_frontend::{API_BASE, ClientError, HttpUsersApi, UserListView, UsersApi};

/// `roster-console` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "roster-console",
    about = "Interactive text client for the roster user directory",
    version
)]
struct CliArgs {
    /// API base address.
    #[arg(long = "api-base", value_name = "url", default_value = API_BASE)]
    api_base: String,
}

/// One parsed input line.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Add(&'a str),
    Delete(&'a str),
    Edit(&'a str),
    Name(&'a str),
    Save,
    Cancel,
    Reload,
    Quit,
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        let (verb, rest) = trimmed.split_once(' ').unwrap_or((trimmed, ""));
        let arg = rest.trim();
        Some(match verb {
            "add" => Self::Add(arg),
            "delete" => Self::Delete(arg),
            "edit" => Self::Edit(arg),
            "name" => Self::Name(arg),
            "save" => Self::Save,
            "cancel" => Self::Cancel,
            "reload" => Self::Reload,
            "quit" | "exit" => Self::Quit,
            _ => Self::Unknown(verb),
        })
    }
}

/// Apply `command`; returns `false` once the session should end.
async fn apply<A: UsersApi>(
    view: &mut UserListView<A>,
    command: Command<'_>,
) -> Result<bool, ClientError> {
    match command {
        Command::Add(name) => {
            view.set_new_name(name);
            let created = view.add().await?;
            info!(id = %created.id, "user added");
        }
        Command::Delete(id) => view.delete(id).await?,
        Command::Edit(id) => {
            if !view.open_editor(id) {
                warn!(id, "no listed user with that id");
            }
        }
        Command::Name(name) => view.set_edit_name(name),
        Command::Save => match view.confirm_edit().await? {
            Some(saved) => info!(id = %saved.id, "user saved"),
            None => warn!("nothing to save; open a user with `edit <id>` first"),
        },
        Command::Cancel => view.cancel_edit(),
        Command::Reload => view.load().await?,
        Command::Quit => return Ok(false),
        Command::Unknown(verb) => warn!(verb, "unknown command"),
    }
    Ok(true)
}

#[tokio::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .compact()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = CliArgs::parse();
    let api = HttpUsersApi::new(&args.api_base).map_err(io::Error::other)?;
    let mut view = UserListView::new(api);
    if let Err(error) = view.load().await {
        warn!(%error, base = %args.api_base, "initial load failed; use `reload` to retry");
    }

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    stdout.write_all(view.render().as_bytes()).await?;
    stdout.flush().await?;

    while let Some(line) = lines.next_line().await? {
        let Some(command) = Command::parse(&line) else {
            continue;
        };
        match apply(&mut view, command).await {
            Ok(true) => {}
            Ok(false) => break,
            Err(error) => warn!(%error, "command failed"),
        }
        stdout.write_all(view.render().as_bytes()).await?;
        stdout.flush().await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("add Ann", Some(Command::Add("Ann")))]
    #[case("  delete   a1 ", Some(Command::Delete("a1")))]
    #[case("edit a1", Some(Command::Edit("a1")))]
    #[case("name Ann Marie", Some(Command::Name("Ann Marie")))]
    #[case("save", Some(Command::Save))]
    #[case("cancel", Some(Command::Cancel))]
    #[case("reload", Some(Command::Reload))]
    #[case("exit", Some(Command::Quit))]
    #[case("frobnicate x", Some(Command::Unknown("frobnicate")))]
    #[case("   ", None)]
    fn parses_console_commands(#[case] line: &str, #[case] expected: Option<Command<'static>>) {
        assert_eq!(Command::parse(line), expected);
    }
}
