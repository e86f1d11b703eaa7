use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::catalog::Screen;

/// One letter per row, 'A'..='Z'.
pub const MAX_ROWS: u8 = 26;

/// A single cell of the seat map.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SeatEntry {
    pub code: String,
    pub available: bool,
}

pub fn row_letter(row_index: u8) -> char {
    (b'A' + row_index) as char
}

/// Canonical seat code for a zero-based row index and one-based column,
/// e.g. (0, 1) -> "A1", (2, 12) -> "C12". This exact format is the wire
/// and storage contract for seats.
pub fn seat_code(row_index: u8, column: u16) -> String {
    format!("{}{}", row_letter(row_index), column)
}

/// Parse a seat code back into (row index, column).
///
/// Only the canonical form is accepted: a single uppercase letter followed
/// by a column number without leading zeros. "A01" must not be treated as
/// an alias of "A1", otherwise the same physical seat could be committed
/// under two different spellings.
pub fn parse_seat_code(code: &str) -> Option<(u8, u16)> {
    let mut chars = code.chars();
    let row = chars.next()?;
    if !row.is_ascii_uppercase() {
        return None;
    }
    let digits = chars.as_str();
    if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    let column: u16 = digits.parse().ok()?;
    Some((row as u8 - b'A', column))
}

/// Rows a screen can actually address; the row letter alphabet caps the
/// geometry at 26 regardless of what the catalog claims.
pub fn addressable_rows(screen: &Screen) -> u8 {
    screen.rows.min(MAX_ROWS)
}

/// Whether a parsed seat falls inside the screen's addressable space.
pub fn seat_in_layout(screen: &Screen, row_index: u8, column: u16) -> bool {
    row_index < addressable_rows(screen) && column >= 1 && column <= screen.seats_per_row
}

/// Build the full row-major seat grid for a screen, marking a seat
/// unavailable iff its code appears in `occupied`. Pure function of
/// geometry and occupancy.
pub fn resolve_grid(screen: &Screen, occupied: &HashSet<String>) -> Vec<Vec<SeatEntry>> {
    (0..addressable_rows(screen))
        .map(|row_index| {
            (1..=screen.seats_per_row)
                .map(|column| {
                    let code = seat_code(row_index, column);
                    let available = !occupied.contains(&code);
                    SeatEntry { code, available }
                })
                .collect()
        })
        .collect()
}
