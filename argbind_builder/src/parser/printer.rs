use terminal_size::{terminal_size, Width};

use crate::constant::*;
use crate::matcher::{Binding, BindingTable};
use crate::model::BindingKind;
use crate::parser::interface::{ColumnRenderer, UserInterface};

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
const DEFAULT_MIDDLE_WIDTH: usize = 17;
const PADDING_WIDTH: usize = 3;
const MAIN_INDENT: usize = 1;

/// Renders the usage text from the live state of a binding table.
pub(crate) struct Printer {
    program: String,
    about: Option<String>,
    terminal_width: Option<usize>,
}

impl Printer {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::new("program", None, None)
    }

    pub(crate) fn terminal(program: impl Into<String>, about: Option<String>) -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self::new(program, about, terminal_width)
    }

    pub(crate) fn new(
        program: impl Into<String>,
        about: Option<String>,
        terminal_width: Option<usize>,
    ) -> Self {
        Self {
            program: program.into(),
            about,
            terminal_width,
        }
    }

    pub(crate) fn print_usage(
        &self,
        table: &BindingTable<'_>,
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        for line in self.render(table) {
            user_interface.print(line);
        }
    }

    pub(crate) fn render(&self, table: &BindingTable<'_>) -> Vec<String> {
        let positionals: Vec<Row> = table
            .mandatory()
            .iter()
            .chain(table.optional().iter())
            .map(Row::from)
            .collect();
        let options: Vec<Row> = table.named().map(Row::from).collect();

        let mut summary = vec![self.program.clone()];
        summary.extend(positionals.iter().map(|row| row.grammar.clone()));
        summary.extend(options.iter().map(|row| format!("[{}]", row.grammar)));
        let mut lines = vec![format!("{USAGE_PREFIX} {}", summary.join(" "))];

        if let Some(about) = &self.about {
            lines.push("".to_string());
            lines.push(about.clone());
        }

        let rows = positionals.iter().chain(options.iter());
        let left_column_width = rows.clone().map(|r| r.grammar.chars().count()).max();
        let middle_column_width = rows
            .clone()
            .map(|r| r.description.chars().count())
            .max()
            .unwrap_or_default();
        let right_column_width = rows
            .filter_map(|r| r.annotation.as_ref())
            .map(|a| a.chars().count())
            .max()
            .unwrap_or_default();

        let left_column_width = match left_column_width {
            Some(width) => width,
            // Nothing is registered; only the summary line applies.
            None => return lines,
        };

        let column_renderer = match self.terminal_width {
            Some(total_width) => ColumnRenderer::guided(
                MAIN_INDENT,
                PADDING_WIDTH,
                left_column_width,
                middle_column_width,
                right_column_width,
                total_width,
            ),
            None => ColumnRenderer::new(
                MAIN_INDENT,
                PADDING_WIDTH,
                left_column_width,
                middle_column_width.clamp(2, DEFAULT_MIDDLE_WIDTH),
                right_column_width,
            ),
        };

        for (header, section) in [(POSITIONAL_HEADER, &positionals), (OPTIONS_HEADER, &options)] {
            if section.is_empty() {
                continue;
            }

            lines.push("".to_string());
            lines.push(header.to_string());

            for row in section {
                lines.extend(column_renderer.render(
                    &row.grammar,
                    &row.description,
                    row.annotation.as_deref(),
                ));
            }
        }

        lines
    }
}

struct Row {
    grammar: String,
    description: String,
    annotation: Option<String>,
}

impl From<&Binding<'_>> for Row {
    fn from(binding: &Binding<'_>) -> Self {
        let (grammar, annotated) = match binding.kind() {
            BindingKind::NamedValue => (
                format!(
                    "{OPTION_PREFIX}{i} {d}",
                    i = binding.identifier().unwrap_or_default(),
                    d = binding.display_name()
                ),
                true,
            ),
            BindingKind::Switch => (
                format!(
                    "{OPTION_PREFIX}{i}",
                    i = binding.identifier().unwrap_or_default()
                ),
                true,
            ),
            BindingKind::MandatoryPositional => (binding.display_name().to_string(), false),
            BindingKind::OptionalPositional => (format!("[{}]", binding.display_name()), true),
        };

        // A mandatory positional is always overwritten by a successful parse, so its value is noise.
        let annotation = if annotated {
            binding
                .current()
                .filter(|value| !value.is_empty())
                .map(|value| format!("{CURRENT_LABEL} {value}"))
        } else {
            None
        };

        Self {
            grammar,
            description: binding.description().unwrap_or_default().to_string(),
            annotation,
        }
    }
}

/// The tokens of a failed parse, with a caret under the offending character.
///
/// Offsets count characters of the tokens without their separating spaces.
/// An offset beyond the final token points at where the next token would have been.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ErrorContext {
    offset: usize,
    tokens: Vec<String>,
}

impl ErrorContext {
    pub(crate) fn new(offset: usize, tokens: &[&str]) -> Self {
        Self {
            offset,
            tokens: tokens.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let projection = self.tokens.join(" ");
        let mut consumed = 0;
        let mut position = None;

        for (i, token) in self.tokens.iter().enumerate() {
            let width = token.chars().count();

            // An empty token is pointed at by its own (zero width) position.
            if self.offset < consumed + width || (width == 0 && self.offset == consumed) {
                // Each of the `i` preceding tokens contributes one separating space.
                position.replace(self.offset + i);
                break;
            }

            consumed += width;
        }

        let position = position.unwrap_or(if self.tokens.is_empty() {
            0
        } else {
            projection.chars().count() + 1
        });

        write!(f, "{projection}\n{:position$}^", "")
    }
}
