use crate::api::capture::*;
use crate::api::convert::*;

/// A parameter that takes a single value.
/// Usable as both a named option (`-NAME VALUE`) and a positional argument.
///
/// The destination is borrowed, never owned: it is overwritten in place when the parameter is matched.
pub struct Scalar<'a, T> {
    variable: &'a mut T,
}

impl<'a, T> CliOption for Scalar<'a, T> {}
impl<'a, T> CliArgument for Scalar<'a, T> {}

impl<'a, T: Convertible> Scalar<'a, T> {
    /// Create a scalar parameter.
    pub fn new(variable: &'a mut T) -> Self {
        Self { variable }
    }
}

impl<'a, T: Convertible> Capturable for Scalar<'a, T> {
    fn matched(&mut self) {
        // Do nothing.
    }

    fn capture(&mut self, token: &str) -> Result<(), ConversionError> {
        *self.variable = T::convert(token)?;
        Ok(())
    }

    fn takes_value(&self) -> bool {
        true
    }

    fn current(&self) -> Option<String> {
        self.variable.render()
    }
}

/// An option parameter that takes no values (`-NAME`).
///
/// Each match *toggles* the destination, so repeating the switch alternates its value.
/// The initial value is whatever the caller initialized the variable with.
pub struct Switch<'a> {
    variable: &'a mut bool,
}

impl<'a> CliOption for Switch<'a> {}

impl<'a> Switch<'a> {
    /// Create a switch parameter.
    pub fn new(variable: &'a mut bool) -> Self {
        Self { variable }
    }
}

impl<'a> Capturable for Switch<'a> {
    fn matched(&mut self) {
        *self.variable = !*self.variable;
    }

    fn capture(&mut self, _token: &str) -> Result<(), ConversionError> {
        unreachable!("internal error - must not capture on a Switch");
    }

    fn takes_value(&self) -> bool {
        false
    }

    fn current(&self) -> Option<String> {
        self.variable.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_capture() {
        // Integer
        let mut variable: u32 = u32::default();
        let mut scalar = Scalar::new(&mut variable);
        scalar.capture("5").unwrap();
        assert_eq!(variable, 5);

        // Boolean
        let mut variable: bool = false;
        let mut scalar = Scalar::new(&mut variable);
        scalar.capture("true").unwrap();
        assert!(variable);

        // Option<u32>
        let mut variable: Option<u32> = None;
        let mut scalar = Scalar::new(&mut variable);
        scalar.capture("1").unwrap();
        assert_eq!(variable, Some(1));
    }

    #[test]
    fn scalar_capture_invalid() {
        let mut variable: u32 = 3;
        let mut scalar = Scalar::new(&mut variable);
        let error = scalar.capture("5x").unwrap_err();
        assert_eq!(error, ConversionError::new::<u32>("5x"));
        // The destination is untouched on failure.
        assert_eq!(variable, 3);
    }

    #[test]
    fn scalar_capture_overwrites() {
        let mut variable: String = "initial".to_string();
        let mut scalar = Scalar::new(&mut variable);
        scalar.capture("a").unwrap();
        scalar.capture("b").unwrap();
        assert_eq!(variable, "b");
    }

    #[test]
    fn scalar_matched() {
        let mut variable: u32 = u32::default();
        let mut scalar = Scalar::new(&mut variable);
        scalar.matched();
        assert_eq!(variable, 0);
    }

    #[test]
    fn switch_matched() {
        let mut variable: bool = false;
        let mut switch = Switch::new(&mut variable);
        switch.matched();
        assert_eq!(switch.current(), Some("true".to_string()));
        switch.matched();
        assert!(!variable);
    }

    #[test]
    #[should_panic]
    fn switch_capture() {
        let mut variable: bool = false;
        let mut switch = Switch::new(&mut variable);
        match switch.capture("5") {
            Ok(_) => {}
            Err(_) => {}
        };
    }

    #[test]
    fn takes_value() {
        let mut variable: u32 = u32::default();
        assert!(Scalar::new(&mut variable).takes_value());

        let mut variable: bool = false;
        assert!(!Switch::new(&mut variable).takes_value());
    }

    #[test]
    fn current() {
        let mut variable: Option<u32> = None;
        assert_eq!(Scalar::new(&mut variable).current(), None);

        let mut variable: f32 = 1.5;
        assert_eq!(Scalar::new(&mut variable).current(), Some("1.5".to_string()));
    }
}
