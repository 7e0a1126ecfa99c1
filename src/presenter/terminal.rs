use std::fmt;
use std::io::Write;
use tracing::warn;

use super::{GridItem, ResultsView};

/// Renders the grid as numbered text cells.
pub struct TerminalView<W: Write> {
    out: W,
    cells: usize,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self { out, cells: 0 }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, line: fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{}", line).and_then(|_| self.out.flush()) {
            warn!("Failed to write to terminal: {}", e);
        }
    }
}

impl<W: Write> ResultsView for TerminalView<W> {
    fn clear_grid(&mut self) {
        self.cells = 0;
    }

    fn append_item(&mut self, item: &GridItem) {
        self.cells += 1;
        let n = self.cells;
        match &item.price {
            Some(price) => self.emit(format_args!("[{:>2}] {} ({})", n, item.title, price)),
            None => self.emit(format_args!("[{:>2}] {}", n, item.title)),
        }
        self.emit(format_args!("     image: {}", item.image_src));
        if let Some(link) = &item.link {
            self.emit(format_args!("     link:  {}", link));
        }
    }

    fn show_loading(&mut self) {
        self.emit(format_args!("Loading..."));
    }

    fn hide_loading(&mut self) {}

    fn show_error(&mut self, message: &str) {
        self.emit(format_args!("error: {}", message));
    }

    fn hide_error(&mut self) {}
}
