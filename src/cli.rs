//! Line-oriented demo driver
//!
//! Each stdin line is one user action: plain text replaces the input as if
//! typed, `:enter` submits, `:esc` clears, `:select N` picks a suggestion and
//! `:dismiss` hides the error message. After every line the engine settles and
//! the resulting searches, navigations and suggestion groups are printed.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};

use clap::Parser;
use thiserror::Error;
use url::Url;

use crate::config::{Config, EngineConfig, OpenBehavior, QueryPathBehavior};
use crate::engine::{Command, Engine};
use crate::enhancement::HttpEnhancer;
use crate::error::EngineError;
use crate::navigation::NavigationError;
use crate::provider::{ProviderSet, StaticProvider, SuggestionProvider};
use crate::sink::SearchQuery;
use crate::suggestion::GroupedSuggestions;

/// Command-line arguments accepted by the `searchbox` binary
#[derive(Parser, Debug, Default)]
#[command(
    name = "searchbox",
    version,
    about = "Drive a search suggestion engine from stdin"
)]
pub struct Args {
    /// Config file to use instead of ~/.config/searchbox/config.toml
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Navigate to a search page instead of reporting local searches
    #[arg(long)]
    pub new_page: bool,

    /// Search page URL used with --new-page
    #[arg(long, value_name = "URL")]
    pub page_url: Option<String>,

    /// Put the query in the URL fragment instead of a query parameter
    #[arg(long)]
    pub fragment: bool,

    /// Open search pages in a new tab
    #[arg(long)]
    pub new_tab: bool,

    /// Disable query suggestions
    #[arg(long)]
    pub no_suggestions: bool,
}

impl Args {
    /// Apply flag overrides on top of the loaded configuration
    pub fn apply(&self, config: &mut EngineConfig) {
        if self.new_page {
            config.search_in_new_page = true;
        }
        if let Some(page_url) = &self.page_url {
            config.page_url = Some(page_url.clone());
        }
        if self.fragment {
            config.query_path_behavior = QueryPathBehavior::UrlFragment;
        }
        if self.new_tab {
            config.open_behavior = OpenBehavior::NewTab;
        }
        if self.no_suggestions {
            config.enable_suggestions = false;
        }
    }
}

/// Errors that end a driver session
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// A parsed driver input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Type(String),
    Enter,
    Escape,
    Select(usize),
    Dismiss,
}

impl Action {
    pub fn into_command(self) -> Command {
        match self {
            Action::Type(text) => Command::InputChanged(text),
            Action::Enter => Command::Submit,
            Action::Escape => Command::Reset,
            Action::Select(index) => Command::SelectSuggestion(index),
            Action::Dismiss => Command::DismissError,
        }
    }
}

/// Parse one input line
///
/// Lines starting with `:` are directives; anything else is typed text.
pub fn parse_line(line: &str) -> Result<Action, String> {
    let Some(directive) = line.strip_prefix(':') else {
        return Ok(Action::Type(line.to_string()));
    };

    let mut parts = directive.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("enter"), None) => Ok(Action::Enter),
        (Some("esc"), None) => Ok(Action::Escape),
        (Some("dismiss"), None) => Ok(Action::Dismiss),
        (Some("select"), Some(index)) => index
            .parse()
            .map(Action::Select)
            .map_err(|_| format!("invalid suggestion index '{}'", index)),
        _ => Err(format!("unknown directive ':{}'", directive)),
    }
}

/// Build the provider set from `[[providers]]` tables
pub fn providers_from_config(config: &Config) -> ProviderSet {
    config
        .providers
        .iter()
        .map(|p| Arc::new(StaticProvider::from(p)) as Arc<dyn SuggestionProvider>)
        .collect()
}

/// Engine whose sink and navigator report into a channel of output lines
pub fn build_engine(config: Config) -> Result<(Engine, Receiver<String>), EngineError> {
    let (tx, rx) = mpsc::channel();
    let searches = tx.clone();
    let opens = tx;

    let mut builder = Engine::builder(config.search.clone())
        .providers(providers_from_config(&config))
        .on_search(move |query: SearchQuery| {
            let _ = searches.send(format!(
                "search raw={} enhanced={}",
                query.raw, query.enhanced
            ));
        })
        .navigator(
            move |url: &Url, behavior: OpenBehavior| -> Result<(), NavigationError> {
                let _ = opens.send(format!("open {} {}", behavior.target(), url));
                Ok(())
            },
        );

    if config.enhancement.endpoint.is_some() {
        match HttpEnhancer::from_config(&config.enhancement) {
            Ok(enhancer) => builder = builder.enhancer(Arc::new(enhancer)),
            Err(e) => log::warn!("Query enhancement unavailable: {}", e),
        }
    }

    Ok((builder.build()?, rx))
}

/// Render grouped suggestions, one heading per group
pub fn render_groups(grouped: &GroupedSuggestions) -> String {
    let mut out = String::new();
    for group in &grouped.groups {
        out.push_str(&format!("[{}]\n", group.name));
        for (index, suggestion) in &group.items {
            out.push_str(&format!("  {}. {}", index, suggestion.plain_text()));
            if let Some(secondary) = suggestion.secondary_text() {
                out.push_str(&format!(" ({})", secondary));
            }
            if let Some(url) = &suggestion.target_url {
                out.push_str(&format!(" -> {}", url));
            }
            out.push('\n');
        }
    }
    out
}

/// Run a driver session until the input ends
pub async fn drive<R: BufRead, W: Write>(
    engine: &mut Engine,
    transcript: &Receiver<String>,
    input: R,
    output: &mut W,
) -> Result<(), CliError> {
    engine.mount();
    engine.settle().await;
    report(engine, transcript, output)?;

    for line in input.lines() {
        let line = line?;
        match parse_line(&line) {
            Ok(action) => {
                if let Err(e) = engine.handle(action.into_command()).await {
                    writeln!(output, "error: {}", e)?;
                }
            }
            Err(message) => {
                writeln!(output, "error: {}", message)?;
                continue;
            }
        }
        engine.settle().await;
        report(engine, transcript, output)?;
    }

    Ok(())
}

fn report<W: Write>(
    engine: &Engine,
    transcript: &Receiver<String>,
    output: &mut W,
) -> Result<(), CliError> {
    for line in transcript.try_iter() {
        writeln!(output, "{}", line)?;
    }

    let state = engine.state();
    if let Some(message) = &state.error_message {
        writeln!(output, "! {}", message)?;
    }
    write!(output, "{}", render_groups(&state.grouped()))?;
    output.flush()?;
    Ok(())
}

/// Load the engine from configuration and drive it from stdin
pub async fn run(args: &Args, mut config: Config) -> Result<(), CliError> {
    args.apply(&mut config.search);
    let (mut engine, transcript) = build_engine(config)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    drive(&mut engine, &transcript, stdin.lock(), &mut stdout).await
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
