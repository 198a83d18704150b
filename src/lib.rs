//! Pokedex library crate
//!
//! This crate provides the core functionality for the `pokedex` CLI. It is
//! organized into small modules: `api` (response data shapes), `client`
//! (blocking HTTP access to the catalog API), `render` (terminal formatting),
//! and `clipboard` (cross-platform clipboard helper). The binary
//! `src/main.rs` calls `pokedex_lib::run()` to execute the CLI.
//!
//! Public API
//!
//! - `run()` — CLI entrypoint used by the binary.
//!
//! See each module for detailed documentation on functions and behavior.

pub mod api;
pub mod client;
pub mod clipboard;
pub mod render;

use clap::{ArgAction, Parser, Subcommand};

use crate::clipboard::copy_to_clipboard;
use crate::client::DEFAULT_API_BASE;

/// Top-level CLI types and runner. Keep `main.rs` thin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the catalog API
    #[arg(long = "api-base", global = true, default_value = DEFAULT_API_BASE)]
    api_base: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List one page of the catalog
    List {
        /// Entries per page
        #[arg(short = 'l', long = "limit", default_value_t = 20u32)]
        limit: u32,

        /// Starting position in the catalog
        #[arg(short = 'o', long = "offset", default_value_t = 0u32)]
        offset: u32,

        /// Copy the first entry's name to the clipboard
        #[arg(long = "clipboard", action = ArgAction::SetTrue)]
        clipboard: bool,
    },
    /// Show the detail record for one entry
    Show {
        /// Entry name (or numeric id)
        name: String,

        /// Copy the artwork URL to the clipboard
        #[arg(long = "clipboard", action = ArgAction::SetTrue)]
        clipboard: bool,
    },
    /// Copy a string to the clipboard
    Copy {
        /// Text to copy
        text: String,
    },
}

/// Run the Pokedex CLI.
///
/// This function is the high-level entrypoint used by the `pokedex` binary.
/// It parses CLI arguments and dispatches to module functions. Errors are
/// printed to stderr and cause the process to exit with a non-zero code where
/// appropriate.
///
/// Behavior summary:
/// - `list` — fetch and print one page of the catalog, with continuation
///   hints when more pages exist, and optionally copy the first entry's name.
/// - `show` — fetch and print the detail record for a named entry, and
///   optionally copy its artwork URL.
/// - `copy` — place an arbitrary string on the system clipboard.
///
/// Clipboard failures after a successful fetch are warnings, not fatal
/// errors: the fetched data has already been printed.
///
/// Example:
///
/// ```no_run
/// pokedex_lib::run(); // called from src/main.rs
/// ```
pub fn run() {
    let cli = Cli::parse();
    match cli.command {
        Commands::List {
            limit,
            offset,
            clipboard,
        } => {
            let page = client::fetch_page(&cli.api_base, limit, offset).unwrap_or_else(|e| {
                eprintln!("error: {}", e);
                std::process::exit(1);
            });

            print!("{}", render::format_list(&page, offset));

            if clipboard {
                match page.results.first() {
                    Some(first) if copy_to_clipboard(&first.name) => {
                        println!("copied \"{}\" to clipboard", first.name);
                    }
                    Some(_) => eprintln!("warning: failed to copy to clipboard"),
                    None => eprintln!("warning: nothing to copy, page is empty"),
                }
            }
        }
        Commands::Show { name, clipboard } => {
            let detail = client::fetch_detail(&cli.api_base, &name).unwrap_or_else(|e| {
                eprintln!("error: {}", e);
                std::process::exit(1);
            });

            print!("{}", render::format_detail(&detail));

            if clipboard {
                match detail.artwork_url() {
                    Some(url) if copy_to_clipboard(url) => {
                        println!("copied artwork URL to clipboard");
                    }
                    Some(_) => eprintln!("warning: failed to copy to clipboard"),
                    None => eprintln!("warning: no artwork URL to copy"),
                }
            }
        }
        Commands::Copy { text } => {
            if copy_to_clipboard(&text) {
                println!("copied {} bytes to clipboard", text.len());
            } else {
                eprintln!("error: failed to copy to clipboard");
                std::process::exit(1);
            }
        }
    }
}
