use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// A token could not be converted into the destination type.
///
/// Conversion is all-or-nothing: a token is only accepted when it is consumed entirely (ex: `"12abc"` is rejected for `u32`, rather than truncated to `12`).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("'{token}' cannot convert to {type_name}.")]
pub struct ConversionError {
    token: String,
    type_name: &'static str,
}

impl ConversionError {
    /// Describe a failure to convert `token` into `T`.
    pub fn new<T>(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// The offending input token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The name of the destination type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

/// Behaviour to convert a command line token into `Self`, and render `Self` back for usage text.
///
/// Only types implementing `Convertible` may be bound as destinations.
/// Binding any other type is a compile error, rather than a parse time error.
///
/// ### Example
/// ```
/// # use argbind_builder as argbind;
/// use argbind::{from_str_convert, ConversionError, Convertible};
/// use std::str::FromStr;
///
/// #[derive(Debug, PartialEq)]
/// enum Level {
///     Low,
///     High,
/// }
/// # impl FromStr for Level {
/// #     type Err = String;
/// #     fn from_str(value: &str) -> Result<Self, Self::Err> {
/// #         match value {
/// #             "low" => Ok(Level::Low),
/// #             "high" => Ok(Level::High),
/// #             _ => Err(format!("unknown: {value}")),
/// #         }
/// #     }
/// # }
///
/// impl Convertible for Level {
///     fn convert(token: &str) -> Result<Self, ConversionError> {
///         from_str_convert(token)
///     }
///
///     fn render(&self) -> Option<String> {
///         Some(format!("{self:?}").to_lowercase())
///     }
/// }
///
/// assert_eq!(Level::convert("high").unwrap(), Level::High);
/// assert!(Level::convert("medium").is_err());
/// ```
pub trait Convertible: Sized {
    /// Convert the entire `token` into `Self`.
    fn convert(token: &str) -> Result<Self, ConversionError>;

    /// Render the value for usage text.
    /// `None` means there is nothing worth displaying (ex: an unset `Option`).
    fn render(&self) -> Option<String>;
}

/// Convert `token` via [`std::str::FromStr`], mapping any failure onto [`ConversionError`].
///
/// The `FromStr` implementations of the standard library reject trailing or malformed input, so this preserves the exact-consumption guarantee.
pub fn from_str_convert<T: FromStr>(token: &str) -> Result<T, ConversionError> {
    T::from_str(token).map_err(|_| ConversionError::new::<T>(token))
}

macro_rules! convertible_from_str {
    ($($t:ty),* $(,)?) => {
        $(
            impl Convertible for $t {
                fn convert(token: &str) -> Result<Self, ConversionError> {
                    from_str_convert(token)
                }

                fn render(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

convertible_from_str!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

impl Convertible for String {
    fn convert(token: &str) -> Result<Self, ConversionError> {
        Ok(token.to_string())
    }

    fn render(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl Convertible for PathBuf {
    fn convert(token: &str) -> Result<Self, ConversionError> {
        Ok(PathBuf::from(token))
    }

    fn render(&self) -> Option<String> {
        Some(self.display().to_string())
    }
}

impl<T: Convertible> Convertible for Option<T> {
    fn convert(token: &str) -> Result<Self, ConversionError> {
        T::convert(token).map(Some)
    }

    fn render(&self) -> Option<String> {
        self.as_ref().and_then(T::render)
    }
}
