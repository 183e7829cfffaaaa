use std::rc::Rc;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Checkbox column followed by one column per header.
pub const COLUMN_WIDTHS: [Constraint; 7] = [
    Constraint::Length(3),
    Constraint::Percentage(24),
    Constraint::Percentage(14),
    Constraint::Percentage(24),
    Constraint::Percentage(18),
    Constraint::Length(10),
    Constraint::Length(10),
];

const POPOVER_WIDTH: u16 = 34;
const POPOVER_HEIGHT: u16 = 6;

/// Table on top, paginator/status line and key help below.
pub fn main_chunks(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area)
}

/// Popover anchored under the table header, shrunk to fit small terminals.
pub fn popover_area(table: Rect) -> Rect {
    let width = POPOVER_WIDTH.min(table.width);
    let height = POPOVER_HEIGHT.min(table.height);
    Rect {
        x: table.x,
        y: table.y + (table.height - height).min(2),
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popover_fits_inside_table() {
        let table = Rect::new(0, 0, 120, 14);
        let area = popover_area(table);
        assert_eq!(area, Rect::new(0, 2, POPOVER_WIDTH, POPOVER_HEIGHT));

        let tiny = Rect::new(0, 0, 20, 4);
        let area = popover_area(tiny);
        assert_eq!(area, Rect::new(0, 0, 20, 4));
    }

    #[test]
    fn status_and_help_take_one_line_each() {
        let chunks = main_chunks(Rect::new(0, 0, 80, 20));
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].height, 18);
        assert_eq!(chunks[1].height, 1);
        assert_eq!(chunks[2].height, 1);
    }
}
