//! `argbind` is a binding-table command line parser for Rust.
//!
//! Rather than producing a parsed struct, `argbind` writes straight into variables you already own.
//! You register each variable against an identifier (for options) or a position (for arguments), then hand over the command line tokens.
//! `argbind` attempts to prioritize the following design concerns:
//! * *Type safe argument parsing*:
//! The user should not call any `&str -> T` conversion functions directly.
//! The set of destination types is closed: registering a variable of an unsupported type does not compile.
//! * *Defaults are variables*:
//! Whatever value a variable holds before parsing is its default.
//! Parsing only overwrites (or for switches, toggles) what the command line actually mentions.
//! * *Predictable, single pass matching*:
//! Every token is classified once, left to right, with no look-behind and no backtracking.
//! * *Basic UX*:
//! Errors point at the offending token, and the usage text shows the live values of your variables.
//! We do not aim to support rich display configurations, such as colour output, shell completions, etc.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/demo_calculator.rs")]
//! ```
//!
//! ```console
//! $ calculator 3 4
//! 7
//!
//! $ calculator 3 4 -op '*' -v
//! 3 * 4 = 12
//!
//! $ calculator 3
//! Parse error: Not enough tokens provided; missing mandatory parameter 'RIGHT'.
//! 3
//!   ^
//! usage: calculator LEFT RIGHT [-op OP] [-v]
//! <truncated>
//!
//! $ calculator 3 four
//! Parse error: 'four' cannot convert to f64.
//! 3 four
//!   ^
//! <truncated>
//! ```
//!
//! # Builder Api
//! Configure `argbind` by starting with a [`CommandLineParser`] and `add`ing parameters.
//! There are three classes of parameters:
//! * [`Parameter::option`]: matched by a `-IDENTIFIER` token, anywhere on the command line.
//! * [`Parameter::argument`]: a mandatory positional; the parse fails if it isn't matched.
//! * [`Parameter::optional_argument`]: a positional which only receives tokens once every mandatory positional is filled.
//!
//! Each parameter takes a *field* wrapping a mutable borrow of the destination variable:
//! * [`Scalar`]: a single-value parameter (applies to options & arguments).
//! Any type implementing [`Convertible`](./prelude/trait.Convertible.html) may be used: `String`, `char`, `bool`, every integer and float width, `PathBuf`, and `Option<T>` of these.
//! * [`Switch`]: a no-value option over a `bool` (not applicable to arguments).
//!
//! The same can be expressed without building `Parameter`s, via [`CommandLineParser::register_named`], [`CommandLineParser::register_switch`] and [`CommandLineParser::register_positional`].
//!
//! ```no_run
#![doc = include_str!("../demos/demo_copy.rs")]
//! ```
//!
//! ### Borrowing
//! The built [`GeneralParser`] holds the mutable borrows of every registered variable.
//! Read the variables once the parser has been dropped (or has gone out of scope).
//! Since nothing is owned by the parser, the usage text always reflects the current values of the variables.
//!
//! ### Custom Types
//! Implement [`Convertible`](./prelude/trait.Convertible.html) to bind a variable of your own type.
//! [`from_str_convert`] provides the standard conversion for any `std::str::FromStr` type, rejecting partially consumed tokens.
//!
//! # Cli Semantics
//! `argbind` matches the tokens according to the following set of rules.
//!
//! * A token beginning with `-` is always an option identifier; only that single `-` is removed.
//! For example, `--verbose` names the option `-verbose`, and a lone `-` names the option with an empty identifier.
//! A token such as `-5` is therefore also an option identifier, never a negative number argument.
//! * Naming an unregistered option is an error.
//! * A switch toggles its variable each time it appears.
//! For example, `-v -v` leaves `v` at its initial value.
//! * Any other option consumes the next token as its value, verbatim.
//! For example, `-offset -3` sets `offset` to `-3`.
//! * All other tokens fill the mandatory arguments in registration order, then the optional arguments in registration order.
//! Options and arguments may be freely interleaved.
//! * A token that finds no remaining argument is an error, as is running out of tokens before every mandatory argument is filled.
//! * Registering an identifier twice replaces the earlier option.
//!
//! Variables are written as soon as their token is matched.
//! When a parse fails, variables matched before the failure keep their new values.
//!
//! ```no_run
#![doc = include_str!("../demos/demo_toggle.rs")]
//! ```
//!
//! # Features
//! * `tracing_debug`: Emit `tracing` debug events for registration, matching and usage layout.
pub use argbind_builder::*;
