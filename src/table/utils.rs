//! Helpers shared by the `PartialEq` and `Debug` implementations of
//! `PieceTable`.

use core::fmt::{self, Write};

use super::iterators::Chunks;

/// Checks equality between the chunks yielded by iterating over a [`Chunks`]
/// and a string slice.
///
/// It's assumed that if we get this far `chunks` and `s` have the same
/// number of bytes.
#[inline]
pub(super) fn chunks_eq_str(chunks: Chunks<'_>, s: &str) -> bool {
    let mut checked = 0;
    for chunk in chunks {
        if chunk.as_bytes() != &s.as_bytes()[checked..checked + chunk.len()] {
            return false;
        }
        checked += chunk.len();
    }
    true
}

/// Checks equality between the chunks yielded by iterating over two
/// [`Chunks`], which are allowed to be cut at different places.
///
/// It's assumed that if we get this far both chunks yield the same number
/// of bytes.
#[inline]
pub(super) fn chunks_eq_chunks(
    mut lhs: Chunks<'_>,
    mut rhs: Chunks<'_>,
) -> bool {
    let mut left = lhs.next().unwrap_or("").as_bytes();
    let mut right = rhs.next().unwrap_or("").as_bytes();

    loop {
        let common = left.len().min(right.len());

        if left[..common] != right[..common] {
            return false;
        }

        left = &left[common..];
        right = &right[common..];

        if left.is_empty() {
            match lhs.next() {
                Some(chunk) => left = chunk.as_bytes(),

                // Both sides yield the same number of bytes, so if one is
                // done then so is the other.
                None => return true,
            }
        }

        if right.is_empty() {
            match rhs.next() {
                Some(chunk) => right = chunk.as_bytes(),
                None => return true,
            }
        }
    }
}

/// Writes the debug output of each chunk to a formatter, without enclosing
/// it in double quotes.
#[inline]
pub(super) fn debug_chunks(
    chunks: Chunks<'_>,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    for chunk in chunks {
        let mut from = 0;
        for (idx, ch) in chunk.char_indices() {
            let esc = ch.escape_debug();
            if esc.len() != 1 {
                f.write_str(&chunk[from..idx])?;
                for c in esc {
                    f.write_char(c)?;
                }
                from = idx + ch.len_utf8();
            }
        }
        f.write_str(&chunk[from..])?;
    }

    Ok(())
}
