//! Command-line entry point.
//!
//! A thin shell over the library: it parses arguments, loads configuration,
//! turns flags or stdin lines into [`Event`]s, executes the resulting
//! [`Action`]s, and prints the current page.
//!
//! # Usage
//!
//! ```bash
//! # One page, rendered as text
//! storefront-console orders --query jane --facet status=pending
//!
//! # View model as JSON
//! storefront-console --json products --facet category=Electronics
//!
//! # Line-driven session
//! printf 'facet role admin\nopen\nquit\n' | storefront-console browse users
//! ```

use clap::{Args, Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use storefront_console::app::parse_command;
use storefront_console::observability::init_tracing;
use storefront_console::ui::render_viewmodel;
use storefront_console::{handle_event, initialize, Action, AppState, Config, ConsoleError, Event, Page, Result};

#[derive(Parser)]
#[command(name = "storefront-console")]
#[command(version)]
#[command(about = "Store management console with faceted search over orders, products and users")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// TOML configuration file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Fixture document to load instead of the built-in data
    #[arg(long, global = true)]
    fixtures: Option<PathBuf>,

    /// Print the page view model as JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Overview with headline stats, recent orders and top products
    Dashboard,

    /// Order list
    Orders(ListArgs),

    /// Product catalogue
    Products(ListArgs),

    /// User accounts
    Users(ListArgs),

    /// Store settings
    Settings,

    /// Read commands from stdin and print the page after each change
    Browse {
        /// Starting page (defaults to the configured page)
        page: Option<Page>,
    },
}

#[derive(Args)]
struct ListArgs {
    /// Case-insensitive search text
    #[arg(long, short)]
    query: Option<String>,

    /// Facet selection, repeatable (e.g. `status=pending`)
    #[arg(long = "facet", short, value_name = "NAME=VALUE", value_parser = parse_facet)]
    facets: Vec<(String, String)>,
}

impl ListArgs {
    fn events(&self) -> Vec<Event> {
        let query = self.query.iter().map(|q| Event::QueryChanged(q.clone()));
        let facets = self.facets.iter().map(|(facet, value)| Event::FacetSelected {
            facet: facet.clone(),
            value: value.clone(),
        });
        query.chain(facets).collect()
    }
}

fn parse_facet(s: &str) -> std::result::Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got '{s}'")),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = cli.config.as_ref().map(Config::from_file).transpose()?.unwrap_or_default();
    if let Some(fixtures) = cli.fixtures {
        config.fixtures_path = Some(fixtures);
    }

    init_tracing(&config);

    let (page, events) = match &cli.command {
        None => (config.default_page, vec![]),
        Some(Commands::Dashboard) => (Page::Dashboard, vec![]),
        Some(Commands::Orders(args)) => (Page::Orders, args.events()),
        Some(Commands::Products(args)) => (Page::Products, args.events()),
        Some(Commands::Users(args)) => (Page::Users, args.events()),
        Some(Commands::Settings) => (Page::Settings, vec![]),
        Some(Commands::Browse { page }) => (page.unwrap_or(config.default_page), vec![]),
    };

    config.default_page = page;
    let mut state = initialize(&config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(Commands::Browse { .. }) = cli.command {
        return browse(&mut state, io::stdin().lock(), &mut out, cli.json);
    }

    for event in &events {
        let (_, actions) = handle_event(&mut state, event)?;
        execute_actions(&state, actions, &mut out)?;
    }

    print_page(&state, &mut out, cli.json)
}

/// Runs the line-driven session until `quit` or end of input.
///
/// Bad lines are reported and skipped; only I/O failures end the session.
fn browse(state: &mut AppState, input: impl BufRead, out: &mut impl Write, json: bool) -> Result<()> {
    let _span = tracing::info_span!("browse", page = %state.page).entered();
    print_page(state, out, json)?;

    for line in input.lines() {
        let line = line?;
        let events = match parse_command(&line) {
            Ok(events) => events,
            Err(e) => {
                writeln!(out, "error: {e}")?;
                continue;
            }
        };

        let mut needs_render = false;
        for event in &events {
            match handle_event(state, event) {
                Ok((render, actions)) => {
                    needs_render |= render;
                    if execute_actions(state, actions, out)? {
                        return Ok(());
                    }
                }
                Err(e) => writeln!(out, "error: {e}")?,
            }
        }

        if needs_render {
            print_page(state, out, json)?;
        }
    }

    tracing::debug!("input closed");
    Ok(())
}

/// Executes actions in order. Returns `true` once `Quit` is reached.
fn execute_actions(state: &AppState, actions: Vec<Action>, out: &mut impl Write) -> Result<bool> {
    for action in actions {
        match action {
            Action::OpenRecord { page, id } => {
                let Some(record) = state.list(page).and_then(|list| list.find_record(&id)) else {
                    tracing::warn!(page = %page, record_id = %id, "selected record not found");
                    continue;
                };
                writeln!(out, "{} {id}", page.title())?;
                serde_json::to_writer_pretty(&mut *out, &record).map_err(io::Error::from)?;
                writeln!(out)?;
            }
            Action::SaveSettings(settings) => {
                tracing::info!(?settings, "settings save requested");
                writeln!(out, "Settings saved for {}", settings.store_name)?;
            }
            Action::Quit => return Ok(true),
        }
    }
    Ok(false)
}

fn print_page(state: &AppState, out: &mut impl Write, json: bool) -> Result<()> {
    let vm = state.compute_viewmodel();
    if json {
        serde_json::to_writer_pretty(&mut *out, &vm).map_err(io::Error::from)?;
        writeln!(out)?;
    } else {
        render_viewmodel(&vm, out)?;
    }
    out.flush().map_err(ConsoleError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facet_flag_parses_name_value() {
        assert_eq!(
            parse_facet("status=pending"),
            Ok((String::from("status"), String::from("pending")))
        );
        assert_eq!(
            parse_facet("category=Health & Wellness"),
            Ok((String::from("category"), String::from("Health & Wellness")))
        );
        assert!(parse_facet("status").is_err());
        assert!(parse_facet("=pending").is_err());
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn browse_quits_and_opens_records() {
        let mut state = initialize(&Config {
            default_page: Page::Orders,
            ..Config::default()
        })
        .unwrap();
        let input = "facet status pending\nopen\nquit\nquery never reached\n";
        let mut out = Vec::new();

        browse(&mut state, input.as_bytes(), &mut out, false).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Showing 1 of 5 orders"));
        assert!(text.contains("\"status\": \"pending\""));
        assert_eq!(state.orders.filter_state().query(), "");
    }
}
