use crate::parser::base::ParseError;
use crate::parser::ErrorContext;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

// We'll target 95% of the total width, to ensure the renderer doesn't literally use the full space.
const TARGET_TOTAL_FACTOR: f64 = 0.95;

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
pub(crate) const MINIMUM_MIDDLE_WIDTH: usize = 17;

/// Lays out `left  middle  right` rows, wrapping (and if necessary hyphenating) the middle column.
#[derive(Debug)]
pub(crate) struct ColumnRenderer {
    indent: usize,
    padding: usize,
    left: usize,
    middle: usize,
    right: usize,
}

impl ColumnRenderer {
    /// Produce a renderer based off the provided widths.
    /// This renderer will use the total (terminal) width to chose the middle width.
    pub(crate) fn guided(
        indent: usize,
        padding: usize,
        left: usize,
        middle: usize,
        right: usize,
        total_width: usize,
    ) -> Self {
        // We always have a left and a middle (and a padding between them).
        let mut non_middle = indent + left + padding;

        if right > 0 {
            non_middle += padding + right;
        }

        let target_total_width = (total_width as f64 * TARGET_TOTAL_FACTOR) as usize;
        let guided_middle = std::cmp::max(middle, MINIMUM_MIDDLE_WIDTH);

        let middle = if guided_middle + non_middle <= target_total_width {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Columns {non_middle} and middle fit within the target total {target_total_width}.  Selecting middle: {guided_middle}.");
            }

            guided_middle
        } else if non_middle < total_width {
            let calculated_middle = std::cmp::max(total_width - non_middle, MINIMUM_MIDDLE_WIDTH);

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Columns {non_middle} fit within the total {total_width}.  Selecting middle: {calculated_middle}.");
            }

            calculated_middle
        } else {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Columns {non_middle} do not fit within the total {total_width}.  Selecting middle: {MINIMUM_MIDDLE_WIDTH}.");
            }

            MINIMUM_MIDDLE_WIDTH
        };

        Self::new(indent, padding, left, middle, right)
    }

    /// Produce a renderer based off the provided widths.
    pub(crate) fn new(indent: usize, padding: usize, left: usize, middle: usize, right: usize) -> Self {
        // middle must be at least 2 (so we can hyphenate)
        assert!(middle >= 2, "internal error - middle column too narrow");
        Self {
            indent,
            padding,
            left,
            middle,
            right,
        }
    }

    pub(crate) fn render(&self, left: &str, middle: &str, right: Option<&str>) -> Vec<String> {
        assert!(left.chars().count() <= self.left);
        let indent = " ".repeat(self.indent);
        let padding = " ".repeat(self.padding);
        let left_width = self.left;
        let middle_width = self.middle;
        let mut out = Vec::default();

        for (i, part) in chunk(middle, middle_width).iter().enumerate() {
            let left_cell = if i == 0 { left } else { "" };

            match right {
                Some(right) if i == 0 => {
                    assert!(right.chars().count() <= self.right);
                    out.push(format!(
                        "{indent}{left_cell:left_width$}{padding}{part:middle_width$}{padding}{right}"
                    ));
                }
                _ => out.push(format!("{indent}{left_cell:left_width$}{padding}{part}")),
            }
        }

        if out.is_empty() {
            match right {
                Some(right) => out.push(format!(
                    "{indent}{left:left_width$}{padding}{empty:middle_width$}{padding}{right}",
                    empty = ""
                )),
                None => out.push(format!("{indent}{left}")),
            }
        }

        out
    }
}

fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split_whitespace() {
        if current.is_empty() {
            hyphenate(width, &mut lines, &mut current, word);
        } else if current.chars().count() + word.chars().count() + 1 <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            hyphenate(width, &mut lines, &mut current, word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let characters: Vec<char> = word.chars().collect();
    let increment = width - 1;
    let mut start = 0;

    while characters.len() - start > width {
        let piece: String = characters[start..start + increment].iter().collect();
        lines.push(format!("{piece}-"));
        start += increment;
    }

    current.extend(&characters[start..]);
}

pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_error(&self, error: ParseError);
    fn print_error_context(&self, error_context: ErrorContext);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: ParseError) {
        eprintln!("{error}");
    }

    fn print_error_context(&self, error_context: ErrorContext) {
        eprintln!("{error_context}");
    }
}
