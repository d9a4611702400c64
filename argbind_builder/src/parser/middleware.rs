use std::env;

use crate::parser::base::*;
use crate::parser::interface::UserInterface;
use crate::parser::printer::Printer;
use crate::parser::ErrorContext;

/// The configured command line parser.
/// Built via [`CommandLineParser::build`](./struct.CommandLineParser.html#method.build).
///
/// A `GeneralParser` holds the borrows of every registered destination.
/// Drop it (or let it fall out of scope) before reading the destinations.
pub struct GeneralParser<'a> {
    parser: Parser<'a>,
    printer: Printer,
    user_interface: Box<dyn UserInterface>,
}

impl<'a> GeneralParser<'a> {
    pub(crate) fn new(
        parser: Parser<'a>,
        printer: Printer,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self {
            parser,
            printer,
            user_interface,
        }
    }
}

impl<'a> GeneralParser<'a> {
    /// Run the command line parser against the input tokens, where `tokens[0]` is the program name.
    ///
    /// The program name is skipped; the remaining tokens are processed as by [`GeneralParser::parse_stripped`].
    /// An empty slice is accepted and behaves like an invocation without any arguments.
    ///
    /// ### Example
    /// ```
    /// # use argbind_builder as argbind;
    /// use argbind::{CommandLineParser, Parameter, Scalar};
    ///
    /// let mut value: u32 = 0;
    /// let mut parser = CommandLineParser::new("program")
    ///     .add(Parameter::argument(Scalar::new(&mut value), "VALUE"))
    ///     .build();
    /// parser.parse_tokens(&["program", "5"]).unwrap();
    /// drop(parser);
    /// assert_eq!(value, 5);
    /// ```
    pub fn parse_tokens(&mut self, tokens: &[&str]) -> Result<(), ParseError> {
        self.parse_stripped(tokens.get(1..).unwrap_or_default())
    }

    /// Run the command line parser against an argument vector (ex: [`std::env::args`]).
    /// The first element is the program name and is skipped.
    pub fn parse_args(
        &mut self,
        args: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<(), ParseError> {
        let args: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|arg| arg.as_ref().to_string())
            .collect();
        let tokens: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
        self.parse_stripped(tokens.as_slice())
    }

    /// Run the command line parser against tokens which do not include the program name.
    ///
    /// The tokens are matched in a single left-to-right pass:
    /// * A token starting with `-` names an option (only that one leading `-` is stripped).
    /// A switch toggles its destination; any other option consumes the following token as its value.
    /// * Any other token fills the next mandatory argument, or once those are filled, the next optional argument.
    ///
    /// Each destination is written as soon as its token is matched.
    /// On error the parse stops immediately, so destinations matched before the offending token keep their new values.
    ///
    /// Each call starts matching from the first argument again; nothing of a previous call carries over.
    pub fn parse_stripped(&mut self, tokens: &[&str]) -> Result<(), ParseError> {
        self.parser
            .consume(tokens)
            .map_err(|(_offset, parse_error)| parse_error)
    }

    /// Run the command line parser against the program's own command line arguments.
    ///
    /// If the parse fails, the error, the position where it happened and the usage text are displayed.
    /// The process then exits with error code `1`.
    pub fn parse(&mut self) {
        let command_input: Vec<String> = env::args().skip(1).collect();

        if let Err(exit_code) = self.invoke(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            std::process::exit(exit_code);
        }
    }

    fn invoke(&mut self, tokens: &[&str]) -> Result<(), i32> {
        match self.parser.consume(tokens) {
            Ok(()) => Ok(()),
            Err((offset, parse_error)) => {
                self.user_interface.print_error(parse_error);
                self.user_interface
                    .print_error_context(ErrorContext::new(offset, tokens));
                self.printer
                    .print_usage(self.parser.table(), &*self.user_interface);
                Err(1)
            }
        }
    }

    /// Render the usage text.
    ///
    /// Value annotations (`current: ...`) reflect the destinations as they are right now.
    pub fn usage(&self) -> String {
        self.printer.render(self.parser.table()).join("\n")
    }

    /// Display the usage text.
    pub fn print_usage(&self) {
        self.printer
            .print_usage(self.parser.table(), &*self.user_interface);
    }
}
