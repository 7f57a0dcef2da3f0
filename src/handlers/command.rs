//! Command Line Handler
//!
//! Parses one line of user input into a [`Command`] and runs it against a
//! [`Session`]. Parsing is pure; execution writes its output to any
//! `io::Write` so it can be checked in tests.

use std::io::Write;

use anyhow::{bail, Context, Result};
use tracing::debug;

use crate::app::CatalogSelector;
use crate::error::BrowseError;
use crate::logic::path::display_path;
use crate::model::{ChannelRole, OpenOutcome, Row};

pub const HELP: &str = "\
url <text>            edit and commit the catalog url
connect               connect to the committed url
open <key|#n>         enter a container or select an array
up                    go to the parent container
crumb <i>             jump to breadcrumb i (0 = root)
next | prev           move one page
first | last          jump to the first or last page
rows <n>              change rows per page
info <key|#n>         describe a child
channels <key|#n>     load the channels of a container
check <x|y|m> <row>   check a channel
uncheck <x|y|m> <row> uncheck a channel
add                   print the selection for a plot window
help                  show this help
quit                  exit";

/// A child addressed by key or by its position in the listing
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    Key(String),
    Position(usize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Url(String),
    Connect,
    Open(Target),
    Up,
    Crumb(usize),
    Next,
    Prev,
    First,
    Last,
    Rows(usize),
    Info(Target),
    Channels(Target),
    Check {
        role: ChannelRole,
        row: usize,
        checked: bool,
    },
    Add,
    Help,
    Quit,
}

fn parse_target(arg: &str) -> Result<Target> {
    match arg.strip_prefix('#') {
        Some(n) => {
            let position = n
                .parse()
                .with_context(|| format!("Invalid position: {}", arg))?;
            Ok(Target::Position(position))
        }
        None => Ok(Target::Key(arg.to_string())),
    }
}

fn parse_number(arg: &str, what: &str) -> Result<usize> {
    arg.parse()
        .with_context(|| format!("Invalid {}: {}", what, arg))
}

/// Parse one input line (`None` for a blank line)
///
/// # Examples
/// ```
/// use tiledbrowse::handlers::command::{parse_command, Command, Target};
///
/// assert_eq!(parse_command("next").unwrap(), Some(Command::Next));
/// assert_eq!(
///     parse_command("open scan 1").unwrap(),
///     Some(Command::Open(Target::Key("scan 1".to_string())))
/// );
/// assert_eq!(parse_command("   ").unwrap(), None);
/// ```
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let needs_arg = |name: &str| -> Result<()> {
        if rest.is_empty() {
            bail!("{} needs an argument", name);
        }
        Ok(())
    };

    let command = match word.to_lowercase().as_str() {
        "url" => Command::Url(rest.to_string()),
        "connect" => Command::Connect,
        "open" => {
            needs_arg("open")?;
            Command::Open(parse_target(rest)?)
        }
        "up" => Command::Up,
        "crumb" => {
            needs_arg("crumb")?;
            Command::Crumb(parse_number(rest, "breadcrumb index")?)
        }
        "next" => Command::Next,
        "prev" => Command::Prev,
        "first" => Command::First,
        "last" => Command::Last,
        "rows" => {
            needs_arg("rows")?;
            Command::Rows(parse_number(rest, "page size")?)
        }
        "info" => {
            needs_arg("info")?;
            Command::Info(parse_target(rest)?)
        }
        "channels" => {
            needs_arg("channels")?;
            Command::Channels(parse_target(rest)?)
        }
        name @ ("check" | "uncheck") => {
            let mut args = rest.split_whitespace();
            let (Some(role), Some(row), None) = (args.next(), args.next(), args.next()) else {
                bail!("usage: {} <x|y|m> <row>", name);
            };
            let role = ChannelRole::parse(role)
                .with_context(|| format!("Unknown channel column: {}", role))?;
            Command::Check {
                role,
                row: parse_number(row, "channel row")?,
                checked: name == "check",
            }
        }
        "add" => Command::Add,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => bail!("Unknown command: {} (try 'help')", other),
    };
    Ok(Some(command))
}

/// A selector plus front end settings
pub struct Session {
    pub selector: CatalogSelector,
    /// Page sizes offered to the user (empty = any positive size)
    pub rows_per_page_choices: Vec<usize>,
}

impl Session {
    pub fn new(selector: CatalogSelector, rows_per_page_choices: Vec<usize>) -> Self {
        Self {
            selector,
            rows_per_page_choices,
        }
    }

    fn resolve(&self, target: &Target) -> Result<String> {
        match target {
            Target::Key(key) => Ok(key.clone()),
            Target::Position(position) => self
                .selector
                .page_rows()?
                .into_iter()
                .find_map(|row| match row {
                    Row::Child { key, position: p, .. } if p == *position => Some(key),
                    _ => None,
                })
                .ok_or_else(|| BrowseError::NotFound(format!("#{}", position)).into()),
        }
    }

    /// Run `command`; returns false when the session should end
    pub fn execute(&mut self, command: &Command, out: &mut dyn Write) -> Result<bool> {
        debug!("execute: {:?}", command);
        let selector = &mut self.selector;
        match command {
            Command::Url(text) => {
                selector.set_url_draft(text);
                selector.commit_url_edit();
            }
            Command::Connect => {
                selector.connect();
            }
            Command::Open(target) => {
                let key = self.resolve(target)?;
                if let OpenOutcome::DataSelected(data) = self.selector.open_node(&key)? {
                    writeln!(out, "Selected {} {}", display_path(&data.path), data.uri)?;
                    if let Some(shape) = data.item.shape() {
                        writeln!(out, "shape: {:?}", shape)?;
                    }
                }
            }
            Command::Up => selector.exit_node()?,
            Command::Crumb(index) => selector.on_breadcrumb_clicked(*index)?,
            Command::Next => {
                selector.on_next_page_clicked()?;
            }
            Command::Prev => {
                selector.on_prev_page_clicked()?;
            }
            Command::First => {
                selector.on_first_page_clicked()?;
            }
            Command::Last => {
                selector.on_last_page_clicked()?;
            }
            Command::Rows(n) => {
                if !self.rows_per_page_choices.is_empty() && !self.rows_per_page_choices.contains(n) {
                    bail!("Rows per page must be one of {:?}", self.rows_per_page_choices);
                }
                selector.on_rows_per_page_changed(*n)?;
            }
            Command::Info(target) => {
                let key = self.resolve(target)?;
                let info = self.selector.describe_child(&key)?;
                writeln!(out, "{}", info.summary())?;
                return Ok(true);
            }
            Command::Channels(target) => {
                let key = self.resolve(target)?;
                self.selector.load_channels(&key)?;
                write_channels(&self.selector, out)?;
                return Ok(true);
            }
            Command::Check { role, row, checked } => {
                selector.toggle_channel(*row, *role, *checked)?;
                write_channels(selector, out)?;
                return Ok(true);
            }
            Command::Add => {
                match selector.add_selection() {
                    Some(selection) => writeln!(out, "{}", serde_json::to_string_pretty(&selection)?)?,
                    None => writeln!(out, "Nothing to add: load channels and check a y channel")?,
                }
                return Ok(true);
            }
            Command::Help => {
                writeln!(out, "{}", HELP)?;
                return Ok(true);
            }
            Command::Quit => return Ok(false),
        }

        write_view(&self.selector, out)?;
        Ok(true)
    }
}

/// Breadcrumbs, the rows of the current page and the location label
pub fn write_view(selector: &CatalogSelector, out: &mut dyn Write) -> Result<()> {
    let crumbs: Vec<String> = selector
        .breadcrumbs()
        .iter()
        .map(|crumb| format!("[{}] {}", crumb.index, crumb.label))
        .collect();
    writeln!(out, "{}", crumbs.join(" / "))?;

    if !selector.is_connected() {
        writeln!(out, "(not connected: {})", selector.url())?;
        return Ok(());
    }

    for row in selector.page_rows()? {
        let family = row.family().map(|f| f.to_string()).unwrap_or_default();
        writeln!(out, "{:>4}  {:<24} {}", row.header(), row.label(), family)?;
    }
    writeln!(out, "{}", selector.location_label()?)?;
    Ok(())
}

fn write_channels(selector: &CatalogSelector, out: &mut dyn Write) -> Result<()> {
    let table = selector.channel_table();
    writeln!(out, "row  x y m  channel")?;
    for (row, name) in table.channels().iter().enumerate() {
        let mark = |role| if table.is_checked(row, role) { "*" } else { "." };
        writeln!(
            out,
            "{:>3}  {} {} {}  {}",
            row,
            mark(ChannelRole::X),
            mark(ChannelRole::Y),
            mark(ChannelRole::Monitor),
            name
        )?;
    }
    Ok(())
}
