//! Cursor and scroll bookkeeping for the preview card grid.

pub(crate) const CARD_WIDTH: u16 = 30;
pub(crate) const CARD_HEIGHT: u16 = 5;

#[derive(Debug, Clone)]
pub(crate) struct GridState {
    pub(crate) selected: usize,
    pub(crate) scroll_row: usize,
    pub(crate) columns: usize,
}

impl Default for GridState {
    fn default() -> Self {
        Self {
            selected: 0,
            scroll_row: 0,
            columns: 1,
        }
    }
}

impl GridState {
    pub(crate) fn reset(&mut self) {
        self.selected = 0;
        self.scroll_row = 0;
    }

    pub(crate) fn set_columns(&mut self, width: u16) {
        self.columns = usize::from((width / CARD_WIDTH).max(1));
    }

    pub(crate) fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub(crate) fn move_left(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub(crate) fn move_right(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub(crate) fn move_up(&mut self) {
        if self.selected >= self.columns {
            self.selected -= self.columns;
        }
    }

    pub(crate) fn move_down(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let last_row = (len - 1) / self.columns;
        if self.selected / self.columns < last_row {
            self.selected = (self.selected + self.columns).min(len - 1);
        }
    }

    pub(crate) fn row_count(&self, len: usize) -> usize {
        len.div_ceil(self.columns)
    }

    pub(crate) fn ensure_visible(&mut self, visible_rows: usize) {
        let visible_rows = visible_rows.max(1);
        let row = self.selected / self.columns;
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + visible_rows {
            self.scroll_row = row + 1 - visible_rows;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(columns: usize) -> GridState {
        GridState {
            columns,
            ..GridState::default()
        }
    }

    #[test]
    fn columns_follow_width() {
        let mut g = GridState::default();
        g.set_columns(CARD_WIDTH * 3 + 5);
        assert_eq!(g.columns, 3);
        g.set_columns(4);
        assert_eq!(g.columns, 1);
    }

    #[test]
    fn vertical_moves_stay_in_bounds() {
        let mut g = grid(3);
        g.move_down(7);
        assert_eq!(g.selected, 3);
        g.move_down(7);
        assert_eq!(g.selected, 6);
        g.move_down(7);
        assert_eq!(g.selected, 6);
        g.move_up();
        g.move_up();
        g.move_up();
        assert_eq!(g.selected, 0);
    }

    #[test]
    fn down_into_short_last_row_lands_on_last_card() {
        let mut g = grid(3);
        g.selected = 2;
        g.move_down(4);
        assert_eq!(g.selected, 3);
    }

    #[test]
    fn horizontal_moves_stop_at_edges() {
        let mut g = grid(2);
        g.move_left();
        assert_eq!(g.selected, 0);
        g.move_right(2);
        g.move_right(2);
        assert_eq!(g.selected, 1);
    }

    #[test]
    fn scroll_follows_selection() {
        let mut g = grid(2);
        g.selected = 9;
        g.ensure_visible(2);
        assert_eq!(g.scroll_row, 3);
        g.selected = 1;
        g.ensure_visible(2);
        assert_eq!(g.scroll_row, 0);
        assert_eq!(g.row_count(9), 5);
    }
}
