use clap::{Parser, Subcommand};
use dialoguer::{Input, Select};
use show_finder::{
    DEFAULT_BASE_URL, DEFAULT_PLACEHOLDER_IMAGE, DirectoryConfig, EpisodeLoad, Frontend,
    ShowDirectory, ShowEntry, ShowId, TvMazeDirectory, format_episode,
};
use std::fs;
use std::path::PathBuf;
use std::process;
use tracing::Level;

/// Search the TVMaze directory for tv series and browse their episodes
#[derive(Parser)]
#[command(name = "show-finder", version, about)]
struct Cli {
    /// Base URL of the directory service
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Image URL used for shows without artwork
    #[arg(long, global = true, default_value = DEFAULT_PLACEHOLDER_IMAGE)]
    placeholder_image: String,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for shows matching a term
    Search {
        term: String,

        /// Print the shows as JSON
        #[arg(long)]
        json: bool,

        /// Also write the rendered search page to this file
        #[arg(long, value_name = "FILE")]
        html: Option<PathBuf>,
    },

    /// List the episodes of a show by its id
    Episodes {
        show_id: u64,

        /// Print the episodes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactively search and pick shows to list their episodes
    Browse { term: Option<String> },
}

/// Errors reported by the CLI itself
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    ShowFinder(#[from] show_finder::ShowFinderError),

    #[error(transparent)]
    Directory(#[from] show_finder::DirectoryError),

    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Prints a numbered show entry with a plain text summary
fn print_entry(position: usize, entry: &ShowEntry) {
    let show = &entry.show;
    println!("{:>3}. {} [id {}]", position + 1, show.name, show.id);

    let summary = nanohtml2text::html2text(&show.summary);
    let summary = summary.trim();
    if !summary.is_empty() {
        println!("     {}", summary.replace('\n', "\n     "));
    }
}

fn run_search<D: ShowDirectory>(
    frontend: &Frontend<D>,
    term: &str,
    json: bool,
    html: Option<PathBuf>,
) -> Result<(), CliError> {
    let count = frontend.submit_search(term)?;
    let entries = frontend.entries();

    if json {
        let shows: Vec<_> = entries.iter().map(|entry| &entry.show).collect();
        println!("{}", serde_json::to_string_pretty(&shows)?);
    } else if count == 0 {
        println!("No shows found for '{}'.", term);
    } else {
        for (position, entry) in entries.iter().enumerate() {
            print_entry(position, entry);
        }
    }

    if let Some(path) = html {
        fs::write(&path, frontend.to_html(term))
            .map_err(|source| CliError::WriteFailed { path, source })?;
    }

    Ok(())
}

fn run_episodes<D: ShowDirectory>(directory: &D, show_id: u64, json: bool) -> Result<(), CliError> {
    let episodes = directory.episodes(ShowId(show_id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&episodes)?);
    } else if episodes.is_empty() {
        println!("No episodes listed for show {}.", show_id);
    } else {
        for episode in &episodes {
            println!("{}", format_episode(episode));
        }
    }

    Ok(())
}

fn run_browse<D: ShowDirectory>(
    frontend: &Frontend<D>,
    initial_term: Option<String>,
) -> Result<(), CliError> {
    let mut next_term = initial_term;

    loop {
        let term = match next_term.take() {
            Some(term) => term,
            None => Input::<String>::new()
                .with_prompt("Show title")
                .interact_text()?,
        };

        if let Err(e) = frontend.submit_search(&term) {
            eprintln!("Search failed: {}", e);
            continue;
        }
        let entries = frontend.entries();

        if entries.is_empty() {
            println!("No shows found for '{}'.", term);
            continue;
        }

        loop {
            let mut items: Vec<String> = entries
                .iter()
                .map(|entry| format!("{} [id {}]", entry.show.name, entry.show.id))
                .collect();
            items.push("New search".to_string());
            items.push("Quit".to_string());

            let choice = Select::new()
                .with_prompt("Pick a show to list its episodes")
                .items(&items)
                .default(0)
                .interact()?;

            if choice == entries.len() {
                break;
            }
            if choice > entries.len() {
                return Ok(());
            }

            match frontend.click_episodes(entries[choice].key) {
                Ok(EpisodeLoad::Rendered { show, count }) => {
                    println!("\n{} ({} episodes)", show.name, count);
                    for line in frontend.visible_episodes().unwrap_or_default() {
                        println!("  {}", line);
                    }
                    println!();
                }
                Ok(EpisodeLoad::Superseded { .. }) => {}
                Err(e) => eprintln!("Loading episodes failed: {}", e),
            }
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let directory = TvMazeDirectory::with_config(DirectoryConfig {
        base_url: cli.base_url,
        placeholder_image: cli.placeholder_image,
    });

    let result = match cli.command {
        Commands::Search { term, json, html } => {
            run_search(&Frontend::new(directory), &term, json, html)
        }
        Commands::Episodes { show_id, json } => run_episodes(&directory, show_id, json),
        Commands::Browse { term } => run_browse(&Frontend::new(directory), term),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
