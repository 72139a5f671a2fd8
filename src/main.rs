//! Crossword Maker - CLI
//!
//! Pattern search, template listing and puzzle inspection from the command line.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use crossword_maker::{
    commands::{
        FindConfig, SuggestConfig, inspect_puzzle, list_templates, new_template, run_find,
        suggest_words,
    },
    core::Direction,
    output::{print_find_result, print_puzzle_summary, print_suggest_result, print_template_listing},
    wordlists::loader::load_wordlist,
};
use std::fs;
use std::path::Path;

#[derive(Parser)]
#[command(
    name = "crossword_maker",
    about = "Crossword grid design and dictionary pattern search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'short' (default, common words), 'long' (extended list), or path to file
    #[arg(short = 'w', long, global = true, default_value = "short")]
    wordlist: String,

    /// Log debug output (also enabled by CROSSWORD_DEBUG)
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find words matching a pattern (_ any letter, @ vowel, # consonant)
    Find {
        /// The pattern, e.g. cr_ze
        pattern: String,

        /// Only words whose vowels and consonants alternate
        #[arg(short, long)]
        alternating: bool,

        /// Scan the dictionary on all cores
        #[arg(short, long)]
        parallel: bool,

        /// Show at most this many words
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Print a blank template of the given size
    New {
        width: usize,
        height: usize,
    },

    /// Show a stored puzzle: grid, numbering and clues
    Show {
        /// Puzzle file in full form
        file: String,
    },

    /// List the templates in a template file
    Templates {
        /// File of concatenated templates
        file: String,
    },

    /// Suggest words for one slot of a stored puzzle
    Suggest {
        /// Puzzle file in full form
        file: String,

        /// Clue number of the slot
        number: u32,

        /// 'across' or 'down'
        direction: String,

        /// Only words whose vowels and consonants alternate
        #[arg(short, long)]
        alternating: bool,

        /// Show at most this many words
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn read_file(path: &str) -> Result<String> {
    fs::read_to_string(Path::new(path)).with_context(|| format!("Failed to read {path}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    crossword_maker::log::init_logger(cli.debug || crossword_maker::log::debug_requested());

    match cli.command {
        Commands::Find {
            pattern,
            alternating,
            parallel,
            limit,
        } => {
            let dictionary = load_wordlist(&cli.wordlist);
            let config = FindConfig {
                pattern,
                alternating,
                parallel,
                limit,
            };
            print_find_result(&run_find(&dictionary, &config));
            Ok(())
        }
        Commands::New { width, height } => {
            print!("{}", new_template(width, height)?);
            Ok(())
        }
        Commands::Show { file } => {
            let summary = inspect_puzzle(&read_file(&file)?)
                .with_context(|| format!("{file} is not a valid puzzle"))?;
            print_puzzle_summary(&summary);
            Ok(())
        }
        Commands::Templates { file } => {
            let listing = list_templates(&read_file(&file)?);
            print_template_listing(&listing);
            Ok(())
        }
        Commands::Suggest {
            file,
            number,
            direction,
            alternating,
            limit,
        } => {
            let Some(direction) = Direction::from_name(&direction) else {
                bail!("Unknown direction '{direction}' (expected 'across' or 'down')");
            };
            let summary = inspect_puzzle(&read_file(&file)?)
                .with_context(|| format!("{file} is not a valid puzzle"))?;
            let dictionary = load_wordlist(&cli.wordlist);
            let config = SuggestConfig {
                number,
                direction,
                alternating,
                limit,
            };
            let result = suggest_words(&summary.document, &dictionary, &config)?;
            print_suggest_result(&result);
            Ok(())
        }
    }
}
