use crate::api::ConversionError;

/// Marker trait for capturable types that can formulate an option in the Cli.
pub trait CliOption {}

/// Marker trait for capturable types that can formulate a positional argument in the Cli.
pub trait CliArgument {}

/// Behaviour to capture a token into a caller owned destination, without exposing the destination type.
///
/// We use this at the bottom of the binding table so the compiler can maintain each field's type, while the table works across all of them.
#[doc(hidden)]
pub trait Capturable {
    /// Declare that the parameter has been matched (without a value).
    fn matched(&mut self);

    /// Convert `token` and write it into the destination.
    fn capture(&mut self, token: &str) -> Result<(), ConversionError>;

    /// Whether matching this parameter consumes a value token.
    fn takes_value(&self) -> bool;

    /// Render the live value of the destination, for usage text.
    fn current(&self) -> Option<String>;
}
