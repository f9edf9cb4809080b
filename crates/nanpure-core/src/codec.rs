//! Compact board serialization.
//!
//! The compact form writes the 81 cells in row-major order, with each run of
//! consecutive empty cells collapsed into a single letter (`a` = 1 empty
//! cell through `f` = 6; longer runs use several letters). The format exists
//! for solved boards, where it degenerates to 81 digits, but the decoder
//! accepts runs so that every encoder output round-trips.

use crate::{Board, Cell, Digit};

const MAX_RUN: usize = 6;

/// Encodes a board into its compact form.
///
/// # Examples
///
/// ```
/// use nanpure_core::{Board, codec};
///
/// let board = Board::from_line("12");
/// let encoded = codec::encode(&board);
/// assert!(encoded.starts_with("12"));
/// assert_eq!(codec::decode(&encoded).unwrap(), board);
/// ```
#[must_use]
pub fn encode(board: &Board) -> String {
    let mut out = String::with_capacity(81);
    let mut run = 0usize;
    for cell in Cell::ALL {
        match board.get(cell) {
            Some(digit) => {
                flush_run(&mut out, run);
                run = 0;
                out.push(digit.to_char());
            }
            None => run += 1,
        }
    }
    flush_run(&mut out, run);
    out
}

fn flush_run(out: &mut String, mut run: usize) {
    while run > 0 {
        let chunk = usize::min(run, MAX_RUN);
        #[expect(clippy::cast_possible_truncation)]
        out.push((b'a' + chunk as u8 - 1) as char);
        run -= chunk;
    }
}

/// Error returned when decoding a compact board string.
#[derive(Debug, Clone, Copy, derive_more::Display, derive_more::Error)]
pub enum DecodeError {
    /// The input contains a character outside `1`-`9` and `a`-`f`.
    #[display("invalid symbol {_0:?} in compact board")]
    InvalidSymbol(#[error(not(source))] char),
    /// The decoded cells do not add up to exactly 81.
    #[display("compact board decodes to {_0} cells, expected 81")]
    WrongLength(#[error(not(source))] usize),
}

/// Decodes a board from its compact form.
///
/// # Errors
///
/// Returns [`DecodeError`] if the input contains an unknown symbol or does
/// not decode to exactly 81 cells.
pub fn decode(s: &str) -> Result<Board, DecodeError> {
    let mut board = Board::new();
    let mut index = 0usize;
    for c in s.chars() {
        let advance = match c {
            '1'..='9' => {
                if index < 81 {
                    #[expect(clippy::cast_possible_truncation)]
                    board.set(Cell::from_index(index as u8), Digit::from_char(c));
                }
                1
            }
            'a'..='f' => (c as u8 - b'a') as usize + 1,
            _ => return Err(DecodeError::InvalidSymbol(c)),
        };
        index += advance;
    }
    if index != 81 {
        return Err(DecodeError::WrongLength(index));
    }
    Ok(board)
}
