//! Emits a standalone C++ program that counts a tree's words on standard input.
//!
//! The program is the table-driven scanner of [`WordCounter`](super::WordCounter)
//! written out as source: it reads bytes, maps each to its table column,
//! steps through the transition table and increments the counter of every
//! word completing at the state it enters. Words are emitted as byte
//! strings, so UTF-8 words are matched byte by byte.

use std::collections::BTreeMap;
use std::io::{self, Write};

use itertools::Itertools;
use log::debug;

use super::counter::ForeignLetter;
use super::state::StateId;
use super::tree::Tree;

/// Writes the counting program for a byte-labelled [`Tree`].
///
/// # Examples
///
/// ```
/// use wordcount_dfa::dfa::{emit::ProgramWriter, Tree};
///
/// let tree = Tree::<u8>::from_words([b"ab", b"bc"]);
/// let mut source = Vec::new();
/// ProgramWriter::new(&tree).write_to(&mut source).unwrap();
/// assert!(String::from_utf8(source).unwrap().contains("int main()"));
/// ```
pub struct ProgramWriter<'t> {
    tree: &'t Tree<u8>,
    foreign: ForeignLetter,
}

impl<'t> ProgramWriter<'t> {
    /// Creates a writer for `tree` using the default [`ForeignLetter`] policy.
    pub fn new(tree: &'t Tree<u8>) -> Self {
        ProgramWriter {
            tree,
            foreign: ForeignLetter::default(),
        }
    }

    /// Selects what the emitted scanner does with bytes no word contains.
    pub fn foreign_letter(mut self, policy: ForeignLetter) -> Self {
        self.foreign = policy;
        self
    }

    /// Writes the program source to `out`.
    ///
    /// # Errors
    ///
    /// Returns an [`io::ErrorKind::InvalidInput`] error if the tree has no
    /// words or no letters, since C++ has no zero-sized arrays. Otherwise only
    /// errors from `out` are returned.
    pub fn write_to(&self, mut out: impl Write) -> io::Result<()> {
        let tree = self.tree;
        if tree.completion_states().is_empty() || tree.alphabet_size() == 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "cannot emit a counting program without non-empty words",
            ));
        }

        let table = tree.derive_table();
        debug!(
            "emitting program: {} states, {} letters, {} words",
            table.rows(),
            table.columns(),
            tree.word_list().len()
        );

        writeln!(
            out,
            "// Generated by wordcount-dfa. Counts words read from standard input."
        )?;
        writeln!(out, "#include <cstdio>")?;
        writeln!(out)?;
        writeln!(out, "namespace {{")?;
        writeln!(out)?;
        writeln!(out, "const int kStates = {};", table.rows())?;
        writeln!(out, "const int kLetters = {};", table.columns())?;
        writeln!(out, "const int kWords = {};", tree.word_list().len())?;
        writeln!(out, "const int kRoot = {};", tree.root_id())?;
        writeln!(out)?;

        writeln!(out, "const int kTransitions[kStates][kLetters] = {{")?;
        for row in table.iter_rows() {
            writeln!(out, "    {{{}}},", row.iter().format(", "))?;
        }
        writeln!(out, "}};")?;
        writeln!(out)?;

        writeln!(out, "const char* const kWordNames[kWords] = {{")?;
        for word in tree.word_list() {
            writeln!(out, "    \"{}\",", escape(word))?;
        }
        writeln!(out, "}};")?;
        writeln!(out)?;

        writeln!(out, "int column(int c) {{")?;
        writeln!(out, "    switch (c) {{")?;
        for (column, letter) in tree.alphabet().iter().enumerate() {
            writeln!(out, "    case {letter}: return {column};")?;
        }
        writeln!(out, "    default: return -1;")?;
        writeln!(out, "    }}")?;
        writeln!(out, "}}")?;
        writeln!(out)?;
        writeln!(out, "}}  // namespace")?;
        writeln!(out)?;

        writeln!(out, "int main() {{")?;
        writeln!(out, "    long counts[kWords] = {{0}};")?;
        writeln!(out, "    int state = kRoot;")?;
        writeln!(out, "    int c;")?;
        writeln!(out, "    while ((c = std::getchar()) != EOF) {{")?;
        writeln!(out, "        int letter = column(c);")?;
        writeln!(out, "        if (letter < 0) {{")?;
        if self.foreign == ForeignLetter::Reset {
            writeln!(out, "            state = kRoot;")?;
        }
        writeln!(out, "            continue;")?;
        writeln!(out, "        }}")?;
        writeln!(out, "        state = kTransitions[state][letter];")?;
        writeln!(out, "        switch (state) {{")?;
        for (state, words) in completions_by_state(tree) {
            let increments = words
                .iter()
                .map(|i| format!("++counts[{i}];"))
                .join(" ");
            writeln!(out, "        case {state}: {increments} break;")?;
        }
        writeln!(out, "        default: break;")?;
        writeln!(out, "        }}")?;
        writeln!(out, "    }}")?;
        writeln!(out, "    for (int i = 0; i < kWords; ++i) {{")?;
        writeln!(out, "        std::printf(\"%s: %ld\\n\", kWordNames[i], counts[i]);")?;
        writeln!(out, "    }}")?;
        writeln!(out, "    return 0;")?;
        writeln!(out, "}}")?;
        Ok(())
    }

    /// Returns the program source as a string.
    pub fn to_source(&self) -> io::Result<String> {
        let mut source = Vec::new();
        self.write_to(&mut source)?;
        String::from_utf8(source).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// Groups word indices (in word list order) by the state completing them.
fn completions_by_state(tree: &Tree<u8>) -> BTreeMap<StateId, Vec<usize>> {
    let mut by_state: BTreeMap<StateId, Vec<usize>> = BTreeMap::new();
    for (i, &state) in tree.completion_states().values().enumerate() {
        by_state.entry(state).or_default().push(i);
    }
    by_state
}

/// Renders bytes as the body of a C string literal.
///
/// Printable ASCII is kept as is; quotes, backslashes and `?` (trigraphs) are
/// escaped; everything else becomes a three-digit octal escape.
fn escape(word: &[u8]) -> String {
    let mut s = String::with_capacity(word.len());
    for &b in word {
        match b {
            b'"' | b'\\' | b'?' => {
                s.push('\\');
                s.push(b as char);
            }
            0x20..=0x7e => s.push(b as char),
            _ => s.push_str(&format!("\\{b:03o}")),
        }
    }
    s
}
