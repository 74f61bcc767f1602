pub const ROWS: usize = 5;
pub const COLS: usize = 3;

/// A 5 row by 3 column bitmap, row 0 at the top.
pub type Glyph = [[bool; COLS]; ROWS];

const X: bool = true;
const O: bool = false;

static DIGITS: [Glyph; 10] = [
    // 0
    [[X, X, X], [X, O, X], [X, O, X], [X, O, X], [X, X, X]],
    // 1
    [[O, X, O], [O, X, O], [O, X, O], [O, X, O], [O, X, O]],
    // 2
    [[X, X, X], [O, O, X], [X, X, X], [X, O, O], [X, X, X]],
    // 3
    [[X, X, X], [O, O, X], [X, X, X], [O, O, X], [X, X, X]],
    // 4
    [[X, O, X], [X, O, X], [X, X, X], [O, O, X], [O, O, X]],
    // 5
    [[X, X, X], [X, O, O], [X, X, X], [O, O, X], [X, X, X]],
    // 6
    [[X, X, X], [X, O, O], [X, X, X], [X, O, X], [X, X, X]],
    // 7
    [[X, X, X], [O, O, X], [O, X, O], [X, O, O], [X, O, O]],
    // 8
    [[X, X, X], [X, O, X], [X, X, X], [X, O, X], [X, X, X]],
    // 9
    [[X, X, X], [X, O, X], [X, X, X], [O, O, X], [X, X, X]],
];

/// Returns the bitmap for an ASCII decimal digit, `None` for anything else.
pub fn lookup(character: char) -> Option<&'static Glyph> {
    let index = character.to_digit(10)?;
    // to_digit(10) accepts only '0'..='9'
    DIGITS.get(index as usize)
}

/// Iterates the `(row, col)` positions that are lit, row by row.
pub fn lit_cells(glyph: &Glyph) -> impl Iterator<Item = (usize, usize)> + '_ {
    glyph.iter().enumerate().flat_map(|(row, cols)| {
        cols.iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(move |(col, _)| (row, col))
    })
}
