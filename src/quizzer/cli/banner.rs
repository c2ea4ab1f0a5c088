//! Block-digit rendering of the final score.

pub const ROWS: usize = 5;

const DIGITS: [[&str; ROWS]; 10] = [
    ["████", "█  █", "█  █", "█  █", "████"],
    ["   █", "   █", "   █", "   █", "   █"],
    ["████", "   █", "████", "█   ", "████"],
    ["████", "   █", "████", "   █", "████"],
    ["█  █", "█  █", "████", "   █", "   █"],
    ["████", "█   ", "████", "   █", "████"],
    ["████", "█   ", "████", "█  █", "████"],
    ["████", "   █", "   █", "   █", "   █"],
    ["████", "█  █", "████", "█  █", "████"],
    ["████", "█  █", "████", "   █", "████"],
];

/// The score as five rows of block glyphs, digits two columns apart.
pub fn banner_lines(score: u32) -> Vec<String> {
    let glyphs: Vec<&[&str; ROWS]> = score
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| &DIGITS[d as usize])
        .collect();

    (0..ROWS)
        .map(|row| {
            glyphs
                .iter()
                .map(|glyph| glyph[row])
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect()
}
