mod position;

use once_cell::sync::OnceCell;

/// Line/column location within a grammar source string.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// Grammar source text with lazily computed line-break offsets, used to
/// translate a byte offset into a [`Position`] for diagnostics.
pub struct Source<'s> {
    pub text: &'s str,
    line_breaks: OnceCell<Vec<usize>>,
}

impl<'s> From<&'s str> for Source<'s> {
    fn from(text: &'s str) -> Self {
        Source::new(text)
    }
}

impl<'s> Source<'s> {
    pub fn new(text: &'s str) -> Self {
        Self {
            text,
            line_breaks: OnceCell::new(),
        }
    }

    fn line_breaks(&self) -> &Vec<usize> {
        self.line_breaks.get_or_init(|| {
            self.text
                .bytes()
                .enumerate()
                .filter_map(|(index, b)| if b == b'\n' { Some(index) } else { None })
                .collect()
        })
    }

    /// Resolve a byte offset into a 1-indexed line/column position.
    pub fn position_at(&self, offset: usize) -> Position {
        let line_breaks = self.line_breaks();
        let index = match line_breaks.binary_search(&offset) {
            Ok(index) | Err(index) => index,
        };
        if index == 0 {
            Position::new(1, offset + 1)
        } else {
            let break_point = line_breaks[index - 1] + 1;
            Position::new(index + 1, offset - break_point + 1)
        }
    }
}
