//! Small integer helpers exposed through the bindings.

use std::io::{self, Write};

/// Returns `number + 1`, wrapping at `i32::MAX`
pub fn wind_up(number: i32) -> i32 {
    number.wrapping_add(1)
}

/// Returns `number - 1`, wrapping at `i32::MIN`
pub fn wind_down(number: i32) -> i32 {
    number.wrapping_sub(1)
}

/// Joins `numbers` with `"\n"` when `new_line` is set, otherwise with `","`.
pub fn join_ints(numbers: &[i32], new_line: bool) -> String {
    let separator = if new_line { "\n" } else { "," };
    numbers
        .iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Writes the joined numbers to `out` as one line.
pub fn play_ints<W: Write>(numbers: &[i32], new_line: bool, out: &mut W) -> io::Result<()> {
    tracing::debug!(count = numbers.len(), new_line, "playing ints");
    writeln!(out, "{}", join_ints(numbers, new_line))
}
