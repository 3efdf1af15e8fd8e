use std::fmt::Debug;
use std::hash::Hash;

/// Trait for types that can label an edge of the automaton.
///
/// Automatically implemented for any type satisfying the bounds (`char`,
/// `u8`, `u16`, `u32`, ...).
///
/// - `Copy`: edges and prefixes store letters by value
/// - `Eq + Ord`: the alphabet is an ordered set and fixes the table's column order
/// - `Hash`: prefixes are hashed for the fallback lookup
/// - `Debug`: debug printing of states
pub trait Letter: Copy + Eq + Ord + Hash + Debug {}

impl<T: Copy + Eq + Ord + Hash + Debug> Letter for T {}
