use crate::api::{Convertible, Parameter, Scalar, Switch};
use crate::matcher::BindingTable;
use crate::parser::{ConsoleInterface, GeneralParser, Parser, Printer, UserInterface};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The command line parser builder.
///
/// Register options and arguments, then [`build`](#method.build) the parser.
/// Registration never fails: an identifier registered twice silently replaces the earlier option.
///
/// ### Example
/// ```
/// # use argbind_builder as argbind;
/// use argbind::CommandLineParser;
///
/// let mut parser = CommandLineParser::new("program")
///     // Configure with CommandLineParser::add.
///     .build();
/// parser.parse_tokens(&[]).unwrap();
/// ```
pub struct CommandLineParser<'a> {
    program: String,
    about: Option<String>,
    table: BindingTable<'a>,
}

impl<'a> CommandLineParser<'a> {
    /// Create a command line parser.
    ///
    /// ### Example
    /// ```
    /// # use argbind_builder as argbind;
    /// use argbind::CommandLineParser;
    ///
    /// let mut parser = CommandLineParser::new("program")
    ///     .build();
    ///
    /// parser.parse_tokens(vec!["program"].as_slice()).unwrap();
    /// ```
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            about: None,
            table: BindingTable::default(),
        }
    }

    /// Document the about message for this command line parser.
    /// If repeated, only the final message will apply.
    ///
    /// The about message is displayed beneath the usage summary.
    ///
    /// ### Example
    /// ```
    /// # use argbind_builder as argbind;
    /// use argbind::CommandLineParser;
    ///
    /// let parser = CommandLineParser::new("program")
    ///     .about("--this will get discarded--")
    ///     .about("My program that does awesome stuff.  Check it out!")
    ///     .build();
    ///
    /// assert!(parser.usage().contains("Check it out!"));
    /// ```
    pub fn about(mut self, description: impl Into<String>) -> Self {
        self.about.replace(description.into());
        self
    }

    /// Add an argument/option to the command line parser.
    ///
    /// The order of argument parameters corresponds to their positional order during parsing.
    /// The order of option parameters does not affect the command parser semantics.
    ///
    /// ### Example
    /// ```
    /// # use argbind_builder as argbind;
    /// use argbind::{CommandLineParser, Parameter, Scalar};
    ///
    /// let mut a: u32 = 0;
    /// let mut b: u32 = 0;
    /// let mut parser = CommandLineParser::new("program")
    ///     .add(Parameter::argument(Scalar::new(&mut a), "A"))
    ///     .add(Parameter::argument(Scalar::new(&mut b), "B"))
    ///     .build();
    ///
    /// parser.parse_tokens(vec!["program", "1", "2"].as_slice()).unwrap();
    /// drop(parser);
    ///
    /// assert_eq!(a, 1);
    /// assert_eq!(b, 2);
    /// ```
    pub fn add(mut self, parameter: Parameter<'a>) -> Self {
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Adding {kind}: {parameter:?}.", kind = parameter.kind());
        }

        parameter.register(&mut self.table);
        self
    }

    /// Register a named value option (`-IDENTIFIER VALUE`) bound to `variable`.
    ///
    /// ### Example
    /// ```
    /// # use argbind_builder as argbind;
    /// use argbind::CommandLineParser;
    ///
    /// let mut depth: u8 = 1;
    /// let mut parser = CommandLineParser::new("program")
    ///     .register_named("depth", "DEPTH", "How deep to go.", &mut depth)
    ///     .build();
    ///
    /// parser.parse_tokens(vec!["program", "-depth", "3"].as_slice()).unwrap();
    /// drop(parser);
    ///
    /// assert_eq!(depth, 3);
    /// ```
    pub fn register_named<T: Convertible>(
        self,
        identifier: impl Into<String>,
        display_name: impl Into<String>,
        description: impl Into<String>,
        variable: &'a mut T,
    ) -> Self {
        self.add(
            Parameter::option(Scalar::new(variable), identifier)
                .display(display_name)
                .help(description),
        )
    }

    /// Register a switch (`-IDENTIFIER`) which toggles `variable` each time it is matched.
    ///
    /// ### Example
    /// ```
    /// # use argbind_builder as argbind;
    /// use argbind::CommandLineParser;
    ///
    /// let mut verbose = false;
    /// let mut parser = CommandLineParser::new("program")
    ///     .register_switch("v", "Verbose output.", &mut verbose)
    ///     .build();
    ///
    /// parser.parse_tokens(vec!["program", "-v"].as_slice()).unwrap();
    /// drop(parser);
    ///
    /// assert!(verbose);
    /// ```
    pub fn register_switch(
        self,
        identifier: impl Into<String>,
        description: impl Into<String>,
        variable: &'a mut bool,
    ) -> Self {
        self.add(Parameter::option(Switch::new(variable), identifier).help(description))
    }

    /// Register a positional argument bound to `variable`.
    /// A `mandatory` positional must be matched for a parse to succeed.
    ///
    /// ### Example
    /// ```
    /// # use argbind_builder as argbind;
    /// use argbind::CommandLineParser;
    ///
    /// let mut source = String::default();
    /// let mut destination: Option<String> = None;
    /// let mut parser = CommandLineParser::new("program")
    ///     .register_positional("DEST", "Where to copy to.", &mut destination, false)
    ///     .register_positional("SOURCE", "What to copy.", &mut source, true)
    ///     .build();
    ///
    /// parser.parse_tokens(vec!["program", "a.txt"].as_slice()).unwrap();
    /// drop(parser);
    ///
    /// assert_eq!(source, "a.txt");
    /// assert_eq!(destination, None);
    /// ```
    pub fn register_positional<T: Convertible>(
        self,
        display_name: impl Into<String>,
        description: impl Into<String>,
        variable: &'a mut T,
        mandatory: bool,
    ) -> Self {
        let parameter = if mandatory {
            Parameter::argument(Scalar::new(variable), display_name)
        } else {
            Parameter::optional_argument(Scalar::new(variable), display_name)
        };

        self.add(parameter.help(description))
    }

    fn build_with_interface(self, user_interface: Box<dyn UserInterface>) -> GeneralParser<'a> {
        GeneralParser::new(
            Parser::new(self.table),
            Printer::terminal(self.program, self.about),
            user_interface,
        )
    }

    /// Build the command line parser.
    /// This finalizes the configuration; no further parameters may be added.
    pub fn build(self) -> GeneralParser<'a> {
        self.build_with_interface(Box::new(ConsoleInterface::default()))
    }
}
