//! Example: counting words with a derived automaton.
//!
//! Builds the automaton for a handful of words, prints the trie and the
//! transition table, then counts the words in a sample text.
//!
//! Run with: cargo run --example count

use wordcount_dfa::dfa::{Tree, WordCounter};

fn main() {
    let words = ["he", "she", "his", "hers"];
    let tree = Tree::from_words(words);

    println!("Trie:\n  {}", tree.show());

    // Transition table, one row per state
    let table = tree.derive_table();
    let header: String = tree.alphabet().iter().map(|c| format!("{c:>4}")).collect();
    println!("\nTransitions:\n       {header}");
    for state in tree.states() {
        let prefix: String = state.prefix().iter().collect();
        let cells: String = table
            .row(state.id())
            .iter()
            .map(|dest| format!("{dest:>4}"))
            .collect();
        let mark = if tree.is_completion(state.id()) { '*' } else { ' ' };
        println!("  {:>3}{mark}{cells}   {prefix:?}", state.id());
    }

    // Word counts
    let text = "she sells his shells to ushers; hers are here";
    let counts = WordCounter::new(&tree).count(text.chars());
    println!("\nCounts in {text:?}:");
    for (word, n) in counts.iter() {
        println!("  {}: {n}", word.iter().collect::<String>());
    }
}
