use crate::api::{Capturable, CliArgument, CliOption};
use crate::constant::OPTION_PREFIX;
use crate::matcher::BindingTable;
use crate::model::BindingKind;

/// A named option or positional argument for the command line parser.
/// Used with [`CommandLineParser::add`](./struct.CommandLineParser.html#method.add).
pub struct Parameter<'a> {
    kind: BindingKind,
    field: Box<dyn Capturable + 'a>,
    identifier: Option<String>,
    display_name: String,
    description: Option<String>,
}

impl<'a> std::fmt::Debug for Parameter<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match &self.identifier {
            Some(identifier) => format!("{OPTION_PREFIX}{identifier}"),
            None => self.display_name.clone(),
        };
        let help = if let Some(d) = &self.description {
            format!(", {d}")
        } else {
            "".to_string()
        };

        write!(f, "{kind}[{name}{help}]", kind = self.kind)
    }
}

impl<'a> Parameter<'a> {
    /// Create a named option parameter, matched by `-IDENTIFIER`.
    ///
    /// A [`Scalar`](./struct.Scalar.html) field makes a value option (`-IDENTIFIER VALUE`).
    /// A [`Switch`](./struct.Switch.html) field makes a flag (`-IDENTIFIER`) that toggles its destination.
    ///
    /// ### Example
    /// ```
    /// # use argbind_builder as argbind;
    /// use argbind::{Parameter, Scalar, Switch};
    ///
    /// let mut verbose: bool = false;
    /// let mut count: u32 = 1;
    /// Parameter::option(Switch::new(&mut verbose), "v");
    /// Parameter::option(Scalar::new(&mut count), "count");
    /// ```
    pub fn option(field: impl Capturable + CliOption + 'a, identifier: impl Into<String>) -> Self {
        let identifier = identifier.into();
        let kind = if field.takes_value() {
            BindingKind::NamedValue
        } else {
            BindingKind::Switch
        };

        Self {
            kind,
            field: Box::new(field),
            display_name: identifier.to_ascii_uppercase().replace('-', "_"),
            identifier: Some(identifier),
            description: None,
        }
    }

    /// Create a mandatory positional argument parameter.
    ///
    /// Mandatory arguments are matched in the order they are added, before any optional argument.
    ///
    /// ### Example
    /// ```
    /// # use argbind_builder as argbind;
    /// use argbind::{Parameter, Scalar};
    ///
    /// let mut source: String = String::default();
    /// Parameter::argument(Scalar::new(&mut source), "SOURCE");
    /// ```
    pub fn argument(
        field: impl Capturable + CliArgument + 'a,
        display_name: impl Into<String>,
    ) -> Self {
        Self::positional(field, display_name, BindingKind::MandatoryPositional)
    }

    /// Create an optional positional argument parameter.
    ///
    /// Optional arguments only receive tokens left over once every mandatory argument is matched.
    ///
    /// ### Example
    /// ```
    /// # use argbind_builder as argbind;
    /// use argbind::{Parameter, Scalar};
    ///
    /// let mut destination: Option<String> = None;
    /// Parameter::optional_argument(Scalar::new(&mut destination), "DESTINATION");
    /// ```
    pub fn optional_argument(
        field: impl Capturable + CliArgument + 'a,
        display_name: impl Into<String>,
    ) -> Self {
        Self::positional(field, display_name, BindingKind::OptionalPositional)
    }

    fn positional(
        field: impl Capturable + CliArgument + 'a,
        display_name: impl Into<String>,
        kind: BindingKind,
    ) -> Self {
        Self {
            kind,
            field: Box::new(field),
            identifier: None,
            display_name: display_name.into(),
            description: None,
        }
    }

    /// Document the help message for this parameter.
    /// If repeated, only the final message will apply to the parameter.
    ///
    /// ### Example
    /// ```
    /// # use argbind_builder as argbind;
    /// use argbind::{Parameter, Scalar};
    ///
    /// let mut verbose: bool = false;
    /// Parameter::argument(Scalar::new(&mut verbose), "verbose")
    ///     .help("--this will get discarded--")
    ///     .help("Make the program output verbose.  Description may include multiple sentences.");
    /// ```
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.description.replace(description.into());
        self
    }

    /// Set the name shown for this parameter's value in the usage text.
    /// If repeated, only the final name will apply to the parameter.
    ///
    /// Named options default to the upper-cased identifier (ex: `-max-depth` displays as `MAX_DEPTH`).
    /// For positional arguments, this overrides the name given at creation.
    /// A switch takes no value, so it is always shown by its identifier alone (ex: `[-v]`) and its display name is ignored.
    ///
    /// ### Example
    /// ```
    /// # use argbind_builder as argbind;
    /// use argbind::{Parameter, Scalar};
    ///
    /// let mut limit: u32 = 10;
    /// Parameter::option(Scalar::new(&mut limit), "n").display("LIMIT");
    /// ```
    pub fn display(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    #[cfg(any(test, feature = "tracing_debug"))]
    pub(crate) fn kind(&self) -> BindingKind {
        self.kind
    }

    pub(crate) fn register(self, table: &mut BindingTable<'a>) {
        let Parameter {
            kind,
            field,
            identifier,
            display_name,
            description,
        } = self;

        match kind {
            BindingKind::NamedValue => table.register_named(
                identifier.expect("internal error - option must have an identifier"),
                display_name,
                description,
                field,
            ),
            BindingKind::Switch => table.register_switch(
                identifier.expect("internal error - option must have an identifier"),
                description,
                field,
            ),
            BindingKind::MandatoryPositional => {
                table.register_positional(display_name, description, field, true)
            }
            BindingKind::OptionalPositional => {
                table.register_positional(display_name, description, field, false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Scalar, Switch};
    use rstest::rstest;

    #[test]
    fn option_kind() {
        let mut variable: u32 = 0;
        let parameter = Parameter::option(Scalar::new(&mut variable), "count");
        assert_eq!(parameter.kind(), BindingKind::NamedValue);

        let mut flag: bool = false;
        let parameter = Parameter::option(Switch::new(&mut flag), "v");
        assert_eq!(parameter.kind(), BindingKind::Switch);
    }

    #[test]
    fn argument_kind() {
        let mut variable: u32 = 0;
        let parameter = Parameter::argument(Scalar::new(&mut variable), "A");
        assert_eq!(parameter.kind(), BindingKind::MandatoryPositional);

        let mut variable: u32 = 0;
        let parameter = Parameter::optional_argument(Scalar::new(&mut variable), "B");
        assert_eq!(parameter.kind(), BindingKind::OptionalPositional);
    }

    #[rstest]
    #[case("count", "COUNT")]
    #[case("max-depth", "MAX_DEPTH")]
    #[case("x", "X")]
    #[case("", "")]
    fn option_display_default(#[case] identifier: &str, #[case] expected: &str) {
        let mut variable: u32 = 0;
        let parameter = Parameter::option(Scalar::new(&mut variable), identifier);
        assert_eq!(parameter.display_name, expected);
    }

    #[test]
    fn repeated_configuration() {
        let mut variable: u32 = 0;
        let parameter = Parameter::option(Scalar::new(&mut variable), "n")
            .display("FIRST")
            .display("LIMIT")
            .help("discarded")
            .help("The limit.");
        assert_eq!(parameter.display_name, "LIMIT");
        assert_eq!(parameter.description, Some("The limit.".to_string()));
    }

    #[test]
    fn debug() {
        let mut variable: u32 = 0;
        let parameter = Parameter::option(Scalar::new(&mut variable), "n").help("The limit.");
        assert_eq!(format!("{parameter:?}"), "NamedValue[-n, The limit.]");

        let mut variable: u32 = 0;
        let parameter = Parameter::argument(Scalar::new(&mut variable), "ITEM");
        assert_eq!(format!("{parameter:?}"), "MandatoryPositional[ITEM]");
    }

    #[test]
    fn register() {
        let mut a: u32 = 0;
        let mut b: u32 = 0;
        let mut flag: bool = false;
        let mut table = BindingTable::default();
        Parameter::option(Scalar::new(&mut a), "a").register(&mut table);
        Parameter::option(Switch::new(&mut flag), "f").register(&mut table);
        Parameter::optional_argument(Scalar::new(&mut b), "B").register(&mut table);

        assert_eq!(
            table.named_mut("a").map(|binding| binding.kind()),
            Some(BindingKind::NamedValue)
        );
        assert_eq!(
            table.named_mut("f").map(|binding| binding.kind()),
            Some(BindingKind::Switch)
        );
        assert!(table.mandatory().is_empty());
        assert_eq!(table.optional().len(), 1);
    }
}
