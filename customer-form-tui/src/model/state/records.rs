//! Customer table state

/// Customer table state
///
/// Only the selection lives here; the rows are read from the session on every render.
#[derive(Debug, Default)]
pub struct RecordsState {
    /// Selected row index
    pub selected: usize,
}

impl RecordsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// Keep the selection inside a table of `len` rows
    pub fn clamp(&mut self, len: usize) {
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_stays_in_bounds() {
        let mut state = RecordsState::new();
        state.select_previous();
        assert_eq!(state.selected, 0);

        state.select_next(3);
        state.select_next(3);
        state.select_next(3);
        assert_eq!(state.selected, 2);

        state.select_next(0);
        assert_eq!(state.selected, 2);

        state.select_first();
        assert_eq!(state.selected, 0);
        state.select_last(3);
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn clamp_after_removal() {
        let mut state = RecordsState { selected: 2 };
        state.clamp(2);
        assert_eq!(state.selected, 1);
        state.clamp(0);
        assert_eq!(state.selected, 0);
        state.clamp(5);
        assert_eq!(state.selected, 0);
    }
}
