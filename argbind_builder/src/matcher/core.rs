use crate::constant::OPTION_PREFIX;
use crate::matcher::table::*;
use crate::model::BindingKind;
use crate::parser::ParseError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Matches a token sequence against a [`BindingTable`] in a single left to right pass.
///
/// Every token is first tested for the option prefix, so options may appear anywhere (interleaved with positionals).
/// Un-prefixed tokens fill the mandatory positionals in order, then the optional positionals in order.
#[derive(Debug)]
pub(crate) struct ArgumentMatcher<'t, 'a> {
    table: &'t mut BindingTable<'a>,
    mandatory: usize,
    optional: usize,
    fed: usize,
}

impl<'t, 'a> ArgumentMatcher<'t, 'a> {
    pub(crate) fn new(table: &'t mut BindingTable<'a>) -> Self {
        Self {
            table,
            mandatory: 0,
            optional: 0,
            fed: 0,
        }
    }

    /// Consume all of `tokens`, writing matched values into the bound destinations.
    ///
    /// The first error aborts the pass; its offset is the character position (across the concatenated tokens) to point at.
    pub(crate) fn consume(mut self, tokens: &[&str]) -> Result<(), (usize, ParseError)> {
        let mut index = 0;

        while index < tokens.len() {
            let token = tokens[index];
            // 1. An option identifier, such as:
            //  -flag
            //  -key VALUE
            // 2. Otherwise, the next positional.
            let consumed = if let Some(identifier) = token.strip_prefix(OPTION_PREFIX) {
                self.match_option(identifier, tokens.get(index + 1).copied())?
            } else {
                self.match_positional(token)
                    .map_err(|error| (self.fed, error))?;
                1
            };

            for token in &tokens[index..index + consumed] {
                self.fed += token.chars().count();
            }

            index += consumed;
        }

        self.close().map_err(|error| (self.fed, error))
    }

    /// Match the option `identifier` (prefix already stripped), returning the number of tokens consumed.
    fn match_option(
        &mut self,
        identifier: &str,
        value: Option<&str>,
    ) -> Result<usize, (usize, ParseError)> {
        // Counted in characters, like the caret under the error context.
        let value_offset = self.fed + 1 + identifier.chars().count();

        match self.table.named_mut(identifier) {
            Some(binding) => match binding.kind() {
                BindingKind::Switch => {
                    binding.toggle();

                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Toggled switch '{identifier}'.");
                    }

                    Ok(1)
                }
                BindingKind::NamedValue => match value {
                    Some(value) => {
                        binding
                            .capture(value)
                            .map_err(|error| (value_offset, ParseError::from(error)))?;

                        #[cfg(feature = "tracing_debug")]
                        {
                            debug!("Matched option '{identifier}' with '{value}'.");
                        }

                        Ok(2)
                    }
                    None => Err((
                        value_offset,
                        ParseError::MissingOptionValue(identifier.to_string()),
                    )),
                },
                BindingKind::MandatoryPositional | BindingKind::OptionalPositional => {
                    unreachable!("internal error - positional bindings must not be named")
                }
            },
            None => Err((self.fed, ParseError::UnknownOption(identifier.to_string()))),
        }
    }

    fn match_positional(&mut self, token: &str) -> Result<(), ParseError> {
        let binding = if self.mandatory < self.table.mandatory().len() {
            self.mandatory += 1;
            self.table.mandatory_mut(self.mandatory - 1)
        } else if self.optional < self.table.optional().len() {
            self.optional += 1;
            self.table.optional_mut(self.optional - 1)
        } else {
            return Err(ParseError::UnrecognizedParameter(token.to_string()));
        }
        .expect("internal error - positional cursor must be in bounds");

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Matched {kind} '{name}' with '{token}'.",
                kind = binding.kind(),
                name = binding.display_name(),
            );
        }

        binding.capture(token)?;
        Ok(())
    }

    fn close(&self) -> Result<(), ParseError> {
        match self.table.mandatory().get(self.mandatory) {
            Some(binding) => Err(ParseError::MissingMandatoryParameter(
                binding.display_name().to_string(),
            )),
            None => Ok(()),
        }
    }
}
