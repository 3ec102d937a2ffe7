//! Column reordering and the encrypt/decrypt engine.
//!
//! Encryption reads the grid column by column in key order. Decryption cuts
//! the ciphertext into key-ordered groups, writes them back into their
//! columns, reads the grid row-major and strips the trailing padding run.
//! The two directions are exact inverses for untruncated input.

use crate::grid::{Grid, PAD};
use crate::key::Key;
use crate::plaintext::Plaintext;

/// Restrict a sequence to the cipher alphabet: uppercase, A–Z only.
///
/// Identity for validated input; anything else is dropped before layout.
fn normalize(sequence: &str) -> String {
    sequence
        .chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(char::is_ascii_uppercase)
        .collect()
}

/// Read grid columns top-to-bottom in key order (encryption direction).
pub fn read_by_key_order(grid: &Grid, key: &Key) -> String {
    let mut out = String::with_capacity(grid.rows() * grid.cols());
    for order in 1..=key.len() {
        let col = key.column_of(order);
        for row in 0..grid.rows() {
            out.push(grid.get(row, col));
        }
    }
    out
}

/// Cut `sequence` into key-ordered groups of up to `rows` characters each.
///
/// Groups only fall short of `rows` when the sequence was truncated outside
/// this engine; ciphertext produced here always divides evenly.
pub fn split_groups(sequence: &str, key: &Key, rows: usize) -> Vec<String> {
    let chars: Vec<char> = sequence.chars().collect();
    let mut groups = Vec::with_capacity(key.len());
    let mut idx = 0;
    for _ in 0..key.len() {
        let take = rows.min(chars.len().saturating_sub(idx));
        groups.push(chars[idx..idx + take].iter().collect());
        idx += take;
    }
    groups
}

/// Write key-ordered groups vertically into their columns (decryption
/// direction). Rows past a short group stay [`PAD`].
pub fn write_by_key_order(sequence: &str, key: &Key, rows: usize) -> Grid {
    let mut grid = Grid::filled(rows, key.len());
    for (i, group) in split_groups(sequence, key, rows).iter().enumerate() {
        let col = key.column_of(i + 1);
        for (row, ch) in group.chars().enumerate() {
            grid.set(row, col, ch);
        }
    }
    grid
}

/// Strip the maximal trailing run of padding from a recovered sequence.
///
/// Trailing 'X' in the original plaintext is indistinguishable from padding
/// and is stripped with it; accepted limitation of the scheme.
pub fn strip_padding(sequence: &str) -> &str {
    sequence.trim_end_matches(PAD)
}

/// Encrypt validated plaintext; output length is always rows × cols.
pub fn encrypt(plaintext: &Plaintext, key: &Key) -> String {
    let pt = normalize(plaintext.as_str());
    let grid = Grid::build(&pt, key.len());
    read_by_key_order(&grid, key)
}

/// Decrypt a ciphertext produced by [`encrypt`] under the same key.
///
/// Total over arbitrary input: non-alphabet characters are dropped and
/// truncated tails fall back to padding.
pub fn decrypt(ciphertext: &str, key: &Key) -> String {
    let ct = normalize(ciphertext);
    let rows = ct.len().div_ceil(key.len());
    let grid = write_by_key_order(&ct, key, rows);
    strip_padding(&grid.row_major()).to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
