/// The single character that marks a token as an option identifier.
pub(crate) const OPTION_PREFIX: char = '-';

pub(crate) const USAGE_PREFIX: &str = "usage:";
pub(crate) const POSITIONAL_HEADER: &str = "positional arguments:";
pub(crate) const OPTIONS_HEADER: &str = "options:";
pub(crate) const CURRENT_LABEL: &str = "current:";
