/// The role a binding plays during matching.
///
/// Named kinds are addressed by a prefixed identifier (ex: `-count`), positional kinds by their order among the un-prefixed tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BindingKind {
    /// `-NAME VALUE`: a named option followed by exactly one value token.
    NamedValue,
    /// `-NAME`: a named option without a value; each occurrence toggles the bound `bool`.
    Switch,
    /// `VALUE`: a positional which must be matched for the parse to succeed.
    MandatoryPositional,
    /// `[VALUE]`: a positional matched only once every mandatory positional is filled.
    OptionalPositional,
}

impl std::fmt::Display for BindingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
