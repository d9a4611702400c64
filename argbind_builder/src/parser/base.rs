use thiserror::Error;

use crate::api::ConversionError;
use crate::matcher::{ArgumentMatcher, BindingTable};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The reason a parse failed.
///
/// Every variant aborts the parse at the offending token; no later token is matched.
/// Destinations bound to earlier tokens keep the values already written to them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A token could not be fully converted into its destination type.
    #[error("Parse error: {0}")]
    Conversion(#[from] ConversionError),

    /// A named option requiring a value was the final token.
    #[error("Parse error: Option '{0}' requires a value.")]
    MissingOptionValue(String),

    /// A prefixed token names no registered option.
    #[error("Parse error: Option '{0}' does not exist.")]
    UnknownOption(String),

    /// A positional token remains after every positional slot is filled.
    #[error("Parse error: Unrecognized parameter '{0}'; no more positional arguments to match against.")]
    UnrecognizedParameter(String),

    /// The tokens ran out before every mandatory positional was matched.
    #[error("Parse error: Not enough tokens provided; missing mandatory parameter '{0}'.")]
    MissingMandatoryParameter(String),
}

pub(crate) struct Parser<'a> {
    table: BindingTable<'a>,
}

impl<'a> std::fmt::Debug for Parser<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser{..}").finish()
    }
}

impl<'a> Parser<'a> {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::new(BindingTable::default())
    }

    pub(crate) fn new(table: BindingTable<'a>) -> Self {
        Self { table }
    }

    pub(crate) fn table(&self) -> &BindingTable<'a> {
        &self.table
    }

    /// Match the (program name stripped) tokens onto the binding table.
    /// On failure, also reports the character offset into `tokens` of the offending position.
    pub(crate) fn consume(&mut self, tokens: &[&str]) -> Result<(), (usize, ParseError)> {
        // Fresh cursors for every call; nothing of a previous parse carries over.
        let result = ArgumentMatcher::new(&mut self.table).consume(tokens);

        #[cfg(feature = "tracing_debug")]
        {
            match &result {
                Ok(()) => debug!("Parsed {n} tokens.", n = tokens.len()),
                Err((offset, error)) => debug!("Parse failed at offset {offset}: {error}"),
            };
        }

        result
    }
}
