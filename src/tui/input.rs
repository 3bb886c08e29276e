//! Keyboard mapping: digit keys and cursor movement.

use crossterm::event::KeyCode;

/// Maps a digit key to a board cell, numpad style: the keyboard's bottom
/// row 1-2-3 lands on the board's bottom row.
pub fn digit_to_cell(c: char) -> Option<usize> {
    match c {
        '1' => Some(6),
        '2' => Some(7),
        '3' => Some(8),
        '4' => Some(3),
        '5' => Some(4),
        '6' => Some(5),
        '7' => Some(0),
        '8' => Some(1),
        '9' => Some(2),
        _ => None,
    }
}

/// Moves the cursor one cell with an arrow key, staying on the board.
pub fn move_cursor(cursor: usize, key: KeyCode) -> usize {
    let (row, col) = (cursor / 3, cursor % 3);
    let (row, col) = match key {
        KeyCode::Up if row > 0 => (row - 1, col),
        KeyCode::Down if row < 2 => (row + 1, col),
        KeyCode::Left if col > 0 => (row, col - 1),
        KeyCode::Right if col < 2 => (row, col + 1),
        _ => (row, col),
    };
    row * 3 + col
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_map_covers_all_nine_keys() {
        let cells: Vec<usize> = ('1'..='9').filter_map(digit_to_cell).collect();
        assert_eq!(cells, vec![6, 7, 8, 3, 4, 5, 0, 1, 2]);
    }

    #[test]
    fn test_other_keys_map_to_nothing() {
        assert_eq!(digit_to_cell('0'), None);
        assert_eq!(digit_to_cell('a'), None);
    }

    #[test]
    fn test_cursor_stays_on_the_board() {
        assert_eq!(move_cursor(0, KeyCode::Up), 0);
        assert_eq!(move_cursor(0, KeyCode::Left), 0);
        assert_eq!(move_cursor(8, KeyCode::Down), 8);
        assert_eq!(move_cursor(8, KeyCode::Right), 8);
    }

    #[test]
    fn test_cursor_moves_by_row_and_column() {
        assert_eq!(move_cursor(4, KeyCode::Up), 1);
        assert_eq!(move_cursor(4, KeyCode::Down), 7);
        assert_eq!(move_cursor(4, KeyCode::Left), 3);
        assert_eq!(move_cursor(4, KeyCode::Right), 5);
    }
}
