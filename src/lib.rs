//! # wordcount-dfa
//!
//! Builds a deterministic finite automaton that counts occurrences of a small,
//! fixed set of words in a single pass over any letter stream.
//!
//! The words are inserted into a trie whose nodes become the states of the
//! automaton, one per distinct prefix. The trie is then completed into a
//! total transition table: every missing edge is resolved to the state of
//! the longest suffix of `prefix + letter` that is itself a prefix in the
//! trie, or to the start state if there is none. This is the Aho-Corasick
//! failure rule, computed by direct prefix lookup instead of precomputed
//! failure links.
//!
//! ## Features
//!
//! - **Generic over letter type**: works with `char`, `u8`, `u16`, or any type implementing
//!   [`Letter`](dfa::Letter)
//! - **Arena of states**: states live in one vector and refer to each other by
//!   [`StateId`](dfa::StateId)
//! - **Code generation**: [`ProgramWriter`](dfa::emit::ProgramWriter) emits a
//!   standalone C++ counting program for the table
//!
//! ## Quick Start
//!
//! ```
//! use wordcount_dfa::dfa::{StateId, Tree, WordCounter};
//!
//! let tree = Tree::from_words(["ab", "bc"]);
//! assert_eq!(tree.state_count(), 5);
//! assert_eq!(tree.completion_states()[&vec!['b', 'c']], StateId::new(4));
//!
//! let table = tree.derive_table();
//! assert_eq!(table.row(StateId::new(2)), &[1, 3, 4].map(StateId::new));
//!
//! let counts = WordCounter::new(&tree).count("abc".chars());
//! assert_eq!(counts.get("ab"), 1);
//! assert_eq!(counts.get("bc"), 1);
//! ```
//!
//! ## Byte Automata
//!
//! Counting UTF-8 text byte by byte gives the same counts as counting by
//! `char`, which is what the emitted programs do:
//!
//! ```
//! use wordcount_dfa::dfa::{Tree, WordCounter};
//!
//! let tree = Tree::<u8>::from_words(["smörgås".as_bytes()]);
//! let counts = WordCounter::new(&tree).count("smörgåsbord och smörgås".bytes());
//! assert_eq!(counts.get("smörgås".as_bytes()), 2);
//! ```

#![warn(missing_docs)]

/// Automaton construction, table derivation, counting and program emission.
pub mod dfa;
