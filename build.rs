//! Build script to embed the dictionaries
//!
//! Reads the dictionary files under `data/` and generates Rust source with const arrays,
//! one entry per non-blank line, in file order.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        "data/short.txt",
        &Path::new(&out_dir).join("short.rs"),
        "SHORT",
        "Common-word dictionary used for everyday slot searches",
    );

    generate_word_list(
        "data/long.txt",
        &Path::new(&out_dir).join("long.rs"),
        "LONG",
        "Extended dictionary with rarer words and crosswordese",
    );

    println!("cargo:rerun-if-changed=data/short.txt");
    println!("cargo:rerun-if-changed=data/long.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    {word:?},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
