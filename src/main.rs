//! wordcount-dfa - generate a C++ program counting a fixed set of words
//!
//! Words come from the command line and an optional word file. Every invalid
//! word is reported before the usage text is shown.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use log::info;

use wordcount_dfa::dfa::emit::ProgramWriter;
use wordcount_dfa::dfa::validate::validate_words;
use wordcount_dfa::dfa::word::read_words;
use wordcount_dfa::dfa::{ForeignLetter, Tree};

#[derive(Parser)]
#[command(name = "wordcount-dfa")]
#[command(about = "Generate a C++ program that counts the given words on standard input")]
#[command(version)]
struct Cli {
    /// Words to count
    words: Vec<String>,

    /// Read more words from a file, one per line ('#' starts a comment)
    #[arg(short = 'f', long)]
    words_file: Option<PathBuf>,

    /// Write the program to this file instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// What the generated scanner does with bytes no word contains (reset or stay)
    #[arg(long, default_value = "reset")]
    foreign: ForeignLetter,

    /// Print the trie to standard error
    #[arg(long)]
    dump_tree: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut sources = vec![(String::from("command line"), cli.words)];
    if let Some(path) = &cli.words_file {
        let from_file = read_words(path)
            .with_context(|| format!("reading words from {}", path.display()))?;
        sources.push((path.display().to_string(), from_file));
    }

    // Positions count from the start of each source.
    let mut valid = true;
    for (source, words) in &sources {
        if let Err(errors) = validate_words(words) {
            valid = false;
            for error in &errors {
                eprintln!("{source}: {error}");
            }
        }
    }
    let words: Vec<String> = sources.into_iter().flat_map(|(_, words)| words).collect();
    if !valid || words.is_empty() {
        print_usage();
        process::exit(2);
    }

    if cli.dump_tree {
        eprintln!("{}", Tree::<char>::from_words(&words).show());
    }

    let tree = Tree::<u8>::from_words(words.iter().map(String::as_bytes));
    info!(
        "{} word(s), {} state(s), {} distinct byte(s)",
        tree.word_list().len(),
        tree.state_count(),
        tree.alphabet_size()
    );
    let writer = ProgramWriter::new(&tree).foreign_letter(cli.foreign);

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating {}", path.display()))?;
            let mut out = BufWriter::new(file);
            writer.write_to(&mut out)?;
            out.flush()?;
        }
        None => {
            let mut out = io::stdout().lock();
            writer.write_to(&mut out)?;
            out.flush()?;
        }
    }
    Ok(())
}

fn print_usage() {
    eprintln!();
    // Help goes to stderr; a failure to print it is not worth reporting.
    let _ = Cli::command().write_help(&mut io::stderr());
}
