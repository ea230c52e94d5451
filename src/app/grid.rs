/// Focus and per-card expand/collapse state for the card grid.
///
/// One flag per card, indexed like the Ready list. Toggling a card never
/// touches another card's flag.
#[derive(Debug, Clone, Default)]
pub struct GridState {
    expanded: Vec<bool>,
    pub selected: usize,
    /// Cards per row, as last laid out by the renderer.
    pub columns: usize,
}

impl GridState {
    pub fn for_cards(count: usize) -> Self {
        Self {
            expanded: vec![false; count],
            selected: 0,
            columns: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get(index).copied().unwrap_or(false)
    }

    pub fn toggle(&mut self, index: usize) {
        if let Some(flag) = self.expanded.get_mut(index) {
            *flag = !*flag;
        }
    }

    pub fn toggle_selected(&mut self) {
        self.toggle(self.selected);
    }

    pub fn next(&mut self) {
        if self.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.len();
    }

    pub fn previous(&mut self) {
        if self.is_empty() {
            return;
        }
        if self.selected == 0 {
            self.selected = self.len() - 1;
        } else {
            self.selected -= 1;
        }
    }

    pub fn down(&mut self) {
        let step = self.columns.max(1);
        if self.selected + step < self.len() {
            self.selected += step;
        }
    }

    pub fn up(&mut self) {
        let step = self.columns.max(1);
        if self.selected >= step {
            self.selected -= step;
        }
    }

    pub fn row_of(&self, index: usize) -> usize {
        index / self.columns.max(1)
    }
}

/// Cuts `text` to at most `max_chars` characters on a char boundary,
/// preferring the last word break. Returns the preview and whether anything
/// was cut.
pub fn truncate_description(text: &str, max_chars: usize) -> (String, bool) {
    if text.chars().count() <= max_chars {
        return (text.to_string(), false);
    }

    let cut: String = text.chars().take(max_chars).collect();
    let preview = match cut.rfind(char::is_whitespace) {
        Some(pos) if pos > 0 => cut[..pos].trim_end(),
        _ => cut.as_str(),
    };
    (format!("{preview}…"), true)
}
