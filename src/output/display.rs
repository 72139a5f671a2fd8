//! Display functions for command results

use super::formatters::{clue_line, grid_rows, number_rows, percent};
use crate::codec::CodecError;
use crate::commands::{FindResult, PuzzleSummary, SuggestResult, TemplateListing};
use crate::core::{ClueList, Difficulty, Direction};
use colored::{ColoredString, Colorize};

fn difficulty_label(difficulty: Difficulty) -> ColoredString {
    let label = difficulty.to_string();
    match difficulty {
        Difficulty::Easy => label.green(),
        Difficulty::Medium => label.yellow(),
        Difficulty::Hard => label.red(),
    }
}

fn print_heading(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

fn print_words(words: &[String], total: usize) {
    if words.is_empty() {
        println!("   {}", "No matching words".bright_black());
        return;
    }

    for chunk in words.chunks(6) {
        let line: Vec<String> = chunk.iter().map(|w| format!("{w:<14}")).collect();
        println!("   {}", line.join("").trim_end());
    }
    if total > words.len() {
        println!(
            "   {}",
            format!("... and {} more", total - words.len()).bright_black()
        );
    }
}

/// Print the result of a pattern search
pub fn print_find_result(result: &FindResult) {
    print_heading(&format!("PATTERN {}", result.pattern.to_uppercase()));
    println!(
        "\n{} of {} words match\n",
        result.total.to_string().bright_yellow().bold(),
        result.dictionary_size
    );
    print_words(&result.words, result.total);
}

fn print_clues(clues: &ClueList) {
    for direction in [Direction::Across, Direction::Down] {
        println!("\n{}", direction.to_string().bright_cyan().bold());
        for clue in clues.get(direction) {
            let line = clue_line(clue);
            if clue.text.is_empty() {
                println!("{}", line.bright_black());
            } else {
                println!("{line}");
            }
        }
    }
}

/// Print a stored puzzle: grid, numbering and clues
pub fn print_puzzle_summary(summary: &PuzzleSummary) {
    let doc = &summary.document;
    print_heading(doc.name());

    println!(
        "\n{} x {}   blocked {} ({})   letters {}/{} ({:.0}%)",
        doc.width(),
        doc.height(),
        doc.filled_count(),
        difficulty_label(summary.difficulty),
        summary.letters_placed,
        summary.open_cells,
        percent(summary.letters_placed, summary.open_cells)
    );
    println!(
        "clues written {}/{}",
        summary.clues_written,
        doc.clues().len()
    );

    println!();
    for (letters, numbers) in grid_rows(doc.grid()).iter().zip(number_rows(doc.grid())) {
        println!("   {letters:<w$}   {}", numbers.bright_black(), w = doc.width() * 2);
    }

    print_clues(doc.clues());
}

/// Print the templates in a library and any records that were skipped
pub fn print_template_listing(listing: &TemplateListing) {
    print_heading("TEMPLATES");
    println!();

    for (idx, template) in listing.library.iter().enumerate() {
        println!(
            "{:>4}. {:<24} {} blocked, {}",
            idx + 1,
            template.name().bright_white(),
            template.filled_count(),
            difficulty_label(template.difficulty())
        );
    }
    if listing.library.is_empty() {
        println!("   {}", "No templates".bright_black());
    }

    print_skipped(&listing.skipped);
}

fn print_skipped(skipped: &[CodecError]) {
    if skipped.is_empty() {
        return;
    }
    println!(
        "\n{}",
        format!("Skipped {} malformed record(s):", skipped.len())
            .yellow()
            .bold()
    );
    for error in skipped {
        println!("   {error}");
    }
}

/// Print candidate words for one slot
pub fn print_suggest_result(result: &SuggestResult) {
    print_heading(&format!("{} {}", result.number, result.direction.to_string().to_uppercase()));
    println!(
        "\nPattern {}   {} candidate(s)\n",
        result.pattern.bright_yellow().bold(),
        result.total
    );
    print_words(&result.candidates, result.total);
}
