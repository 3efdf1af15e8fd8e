/// Trait for types that can serve as edge labels.
pub mod letter;
/// Compact sorted storage for a state's outgoing edges.
pub mod children;
/// States and state ids.
pub mod state;
/// The trie and the derivation of its transition table.
pub mod tree;
/// The derived transition table.
pub mod table;
/// Running a derived table over input to count words.
pub mod counter;
/// Word conversions and word list files.
pub mod word;
/// Rejection of words the automaton should not see.
pub mod validate;
pub mod emit;

pub use counter::{ForeignLetter, WordCounter, WordCounts};
pub use letter::Letter;
pub use state::{State, StateId};
pub use table::TransitionTable;
pub use tree::Tree;
pub use word::{IntoWord, Word};
