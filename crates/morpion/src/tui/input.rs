//! Keyboard and pointer mapping onto board positions.

use crossterm::event::KeyCode;
use morpion_engine::Position;
use ratatui::layout::Rect;

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Right => Position::from_row_col(row, col + 1),
        KeyCode::Left => col.checked_sub(1).and_then(|c| Position::from_row_col(row, c)),
        KeyCode::Down => Position::from_row_col(row + 1, col),
        KeyCode::Up => row.checked_sub(1).and_then(|r| Position::from_row_col(r, col)),
        _ => None,
    };
    target.unwrap_or(cursor)
}

/// Maps the digits 1-9 onto positions, numbered left-to-right,
/// top-to-bottom.
pub fn digit_position(c: char) -> Option<Position> {
    match c.to_digit(10)? {
        0 => None,
        d => Position::from_index(d as usize - 1),
    }
}

/// Finds the cell under a pointer click.
pub fn hit_test(cells: &[Rect; 9], column: u16, row: u16) -> Option<Position> {
    cells
        .iter()
        .position(|r| {
            column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
        })
        .and_then(Position::from_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_cursor_inside_board() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Right), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::MiddleRight, KeyCode::Left), Position::Center);
    }

    #[test]
    fn test_move_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::Center, KeyCode::Enter), Position::Center);
    }

    #[test]
    fn test_digit_position() {
        assert_eq!(digit_position('1'), Some(Position::TopLeft));
        assert_eq!(digit_position('5'), Some(Position::Center));
        assert_eq!(digit_position('9'), Some(Position::BottomRight));
        assert_eq!(digit_position('0'), None);
        assert_eq!(digit_position('a'), None);
    }

    #[test]
    fn test_hit_test() {
        let mut cells = [Rect::default(); 9];
        for (i, cell) in cells.iter_mut().enumerate() {
            let (row, col) = (i as u16 / 3, i as u16 % 3);
            *cell = Rect::new(col * 10, row * 4, 9, 3);
        }
        assert_eq!(hit_test(&cells, 0, 0), Some(Position::TopLeft));
        assert_eq!(hit_test(&cells, 15, 5), Some(Position::Center));
        assert_eq!(hit_test(&cells, 28, 10), Some(Position::BottomRight));
        // Separator column and row between cells.
        assert_eq!(hit_test(&cells, 9, 0), None);
        assert_eq!(hit_test(&cells, 0, 3), None);
    }
}
