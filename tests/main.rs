use argbind::prelude::*;
use argbind::{CommandLineParser, ParseError, Parameter, Scalar, Switch};
use assert_matches::assert_matches;
use rand::Rng;
use rstest::rstest;
use std::path::PathBuf;

#[test]
fn builder_compiles() {
    CommandLineParser::new("organization");
}

#[rstest]
#[case("5", 5)]
#[case("-5", -5)]
#[case("+5", 5)]
#[case("-0", 0)]
fn named_value(#[case] token: &str, #[case] expected: i64) {
    // Setup
    let mut x: i64 = 100;
    let mut parser = CommandLineParser::new("prog")
        .add(Parameter::option(Scalar::new(&mut x), "x"))
        .build();

    // Execute
    let result = parser.parse_tokens(&["prog", "-x", token]);

    // Verify
    assert_eq!(result, Ok(()));
    drop(parser);
    assert_eq!(x, expected);
}

#[test]
fn named_value_random() {
    let mut rng = rand::thread_rng();

    for _ in 0..100 {
        let value: u64 = rng.gen();
        let token = value.to_string();
        let mut x: u64 = 0;
        let mut parser = CommandLineParser::new("prog")
            .register_named("x", "X", "", &mut x)
            .build();

        parser.parse_tokens(&["prog", "-x", token.as_str()]).unwrap();
        drop(parser);
        assert_eq!(x, value);
    }
}

#[test]
fn switch_toggles() {
    let mut rng = rand::thread_rng();

    for _ in 0..10 {
        let initial: bool = rng.gen();

        let mut s = initial;
        let mut parser = CommandLineParser::new("prog")
            .add(Parameter::option(Switch::new(&mut s), "s"))
            .build();
        parser.parse_tokens(&["prog", "-s"]).unwrap();
        drop(parser);
        assert_eq!(s, !initial);

        let mut s = initial;
        let mut parser = CommandLineParser::new("prog")
            .add(Parameter::option(Switch::new(&mut s), "s"))
            .build();
        parser.parse_tokens(&["prog", "-s", "-s"]).unwrap();
        drop(parser);
        assert_eq!(s, initial);
    }
}

#[test]
fn duplicate_identifier_shadows() {
    // Setup
    let mut first: String = "untouched".to_string();
    let mut second: String = String::default();
    let mut parser = CommandLineParser::new("prog")
        .add(Parameter::option(Scalar::new(&mut first), "x"))
        .add(Parameter::option(Scalar::new(&mut second), "x"))
        .build();

    // Execute
    parser.parse_tokens(&["prog", "-x", "value"]).unwrap();

    // Verify
    drop(parser);
    assert_eq!(first, "untouched");
    assert_eq!(second, "value");
}

#[rstest]
#[case(vec!["prog", "1", "2", "3"], Ok(()), (1, 2, Some(3)))]
#[case(vec!["prog", "1", "2"], Ok(()), (1, 2, None))]
#[case(vec!["prog", "1"], Err(ParseError::MissingMandatoryParameter("B".to_string())), (1, 0, None))]
#[case(vec!["prog"], Err(ParseError::MissingMandatoryParameter("A".to_string())), (0, 0, None))]
#[case(vec!["prog", "1", "2", "3", "4"], Err(ParseError::UnrecognizedParameter("4".to_string())), (1, 2, Some(3)))]
fn positionals(
    #[case] tokens: Vec<&str>,
    #[case] expected: Result<(), ParseError>,
    #[case] values: (u8, u8, Option<u8>),
) {
    // Setup
    let mut a: u8 = 0;
    let mut b: u8 = 0;
    let mut c: Option<u8> = None;
    let mut parser = CommandLineParser::new("prog")
        .add(Parameter::argument(Scalar::new(&mut a), "A"))
        .add(Parameter::optional_argument(Scalar::new(&mut c), "C"))
        .add(Parameter::argument(Scalar::new(&mut b), "B"))
        .build();

    // Execute
    let result = parser.parse_tokens(tokens.as_slice());

    // Verify
    assert_eq!(result, expected);
    drop(parser);
    assert_eq!((a, b, c), values);
}

#[rstest]
#[case(vec!["prog", "-zzz"], ParseError::UnknownOption("zzz".to_string()))]
#[case(vec!["prog", "--x", "1"], ParseError::UnknownOption("-x".to_string()))]
#[case(vec!["prog", "-"], ParseError::UnknownOption("".to_string()))]
#[case(vec!["prog", "-x"], ParseError::MissingOptionValue("x".to_string()))]
#[case(vec!["prog", "value"], ParseError::UnrecognizedParameter("value".to_string()))]
fn option_errors(#[case] tokens: Vec<&str>, #[case] expected: ParseError) {
    let mut x: u32 = 0;
    let mut parser = CommandLineParser::new("prog")
        .add(Parameter::option(Scalar::new(&mut x), "x"))
        .build();

    assert_eq!(parser.parse_tokens(tokens.as_slice()), Err(expected));
}

#[rstest]
#[case("12abc")]
#[case(" 12")]
#[case("12 ")]
#[case("")]
#[case("1.5")]
fn conversion_partial(#[case] token: &str) {
    // Setup
    let mut x: u32 = 7;
    let mut parser = CommandLineParser::new("prog")
        .register_named("x", "X", "", &mut x)
        .build();

    // Execute
    let result = parser.parse_tokens(&["prog", "-x", token]);

    // Verify
    assert_matches!(result, Err(ParseError::Conversion(error)) if error.token() == token);
    drop(parser);
    assert_eq!(x, 7);
}

#[test]
fn conversion_direct() {
    assert_eq!(u32::convert("12"), Ok(12));
    assert_matches!(u32::convert("12abc"), Err(error) if error.type_name() == "u32");
    assert_eq!(PathBuf::convert("a/b"), Ok(PathBuf::from("a/b")));
    assert_eq!(Option::<char>::convert("z"), Ok(Some('z')));
}

#[test]
fn failure_keeps_earlier_writes() {
    // Setup
    let mut flag = false;
    let mut a: u32 = 0;
    let mut parser = CommandLineParser::new("prog")
        .register_switch("f", "", &mut flag)
        .register_positional("A", "", &mut a, true)
        .build();

    // Execute
    let result = parser.parse_tokens(&["prog", "-f", "3", "-nope"]);

    // Verify
    assert_eq!(result, Err(ParseError::UnknownOption("nope".to_string())));
    drop(parser);
    assert!(flag);
    assert_eq!(a, 3);
}

#[test]
fn repeated_parses_independent() {
    // Setup
    let mut a: u8 = 0;
    let mut b: u8 = 0;
    let mut c: Option<u8> = None;
    let mut parser = CommandLineParser::new("prog")
        .add(Parameter::argument(Scalar::new(&mut a), "A"))
        .add(Parameter::argument(Scalar::new(&mut b), "B"))
        .add(Parameter::optional_argument(Scalar::new(&mut c), "C"))
        .build();

    // Execute & Verify
    assert_eq!(parser.parse_tokens(&["prog", "1", "2", "3"]), Ok(()));
    assert_eq!(
        parser.parse_tokens(&["prog", "4"]),
        Err(ParseError::MissingMandatoryParameter("B".to_string()))
    );
    assert_eq!(parser.parse_tokens(&["prog", "5", "6"]), Ok(()));
    drop(parser);
    assert_eq!((a, b, c), (5, 6, Some(3)));
}

#[test]
fn parse_forms_agree() {
    let mut x: u16 = 0;
    let mut y: u16 = 0;
    let mut parser = CommandLineParser::new("prog")
        .register_positional("X", "", &mut x, true)
        .register_positional("Y", "", &mut y, false)
        .build();

    assert_eq!(
        parser.parse_args(vec!["prog".to_string(), "1".to_string()]),
        Ok(())
    );
    assert_eq!(parser.parse_stripped(&["2", "3"]), Ok(()));
    assert_eq!(
        parser.parse_tokens(&[]),
        Err(ParseError::MissingMandatoryParameter("X".to_string()))
    );
    drop(parser);
    assert_eq!((x, y), (2, 3));
}

#[test]
fn usage() {
    // Setup
    let mut source = String::default();
    let mut destination: Option<String> = None;
    let mut limit: u32 = 10;
    let mut verbose = false;
    let mut parser = CommandLineParser::new("copy")
        .about("Copies things.")
        .register_positional("SOURCE", "The file to copy.", &mut source, true)
        .register_positional("DEST", "", &mut destination, false)
        .register_switch("v", "Verbose.", &mut verbose)
        .register_named("n", "N", "The limit.", &mut limit)
        .build();

    // Execute
    let before = parser.usage();
    parser.parse_tokens(&["copy", "a", "b", "-n", "3"]).unwrap();
    let after = parser.usage();

    // Verify
    assert!(before.starts_with("usage: copy SOURCE [DEST] [-n N] [-v]\n\nCopies things.\n"));
    assert!(before.contains("positional arguments:"));
    assert!(before.contains("options:"));
    assert!(before.contains("current: 10"));
    assert!(!before.contains("current: a"));
    assert!(after.contains("current: 3"));
    assert!(after.contains("current: b"));
    // Mandatory positionals are never annotated.
    assert!(!after.contains("current: a"));
}
