//! `optspec` is a command line option parser for Rust, configured by compact spec strings.
//!
//! Rather than chaining builder calls, each option is declared as a single string such as `"v|verbose+"` or `"S|string-list=s@"`.
//! The spec language follows the style of Perl's `Getopt::Long`:
//! * *Small and fixed*:
//! Every option is described by its aliases, an optional value type, and an optional accumulation marker.
//! The language is not extensible at runtime.
//! * *Two result styles*:
//! Values are either collected into a queryable dictionary ([`Results`]), or written straight into caller-owned variables and callbacks ([`Destination`]).
//! * *Leftovers, not positional parameters*:
//! Tokens which are not options are preserved in order and handed back to the caller.
//! This supports staged parsing, where one parser handles global options and passes the rest along.
//! * *Fallible configuration*:
//! Invalid spec strings are reported as a [`SpecError`] when the parser is constructed, never during parsing.
//!
//! # Usage
//! Dictionary mode:
//! ```no_run
#![doc = include_str!("../demos/dictionary.rs")]
//! ```
//! Direct mode:
//! ```no_run
#![doc = include_str!("../demos/direct.rs")]
//! ```
//!
//! ```console
//! $ dictionary -v --name=x -S A --string-list B -v file.txt
//! I: []
//! S: [A, B]
//! bool: false
//! float: 0
//! int: 0
//! intopt: {}
//! string: x
//! stropt: {}
//! verbose: 2
//! args: ["file.txt"]
//!
//! $ dictionary --int abc
//! Parse error: Option '--int' cannot convert 'abc' to an integer: invalid digit found in string.
//!
//! $ dictionary --bogus
//! Parse error: Option '--bogus' does not exist.
//! ```
//!
//! # Spec Language
//! ```console
//! spec      := aliases [ '=' type ] [ marker ]
//! aliases   := alias ( '|' alias )*
//! type      := 's' | 'i' | 'f'
//! marker    := '+' | '@' | '[]' | '%' | '{}'
//! ```
//!
//! The *result name* of an option is its last alias.
//! Each alias becomes a flag: `-x` for single character aliases, `--alias` otherwise.
//! Flags must be unique across all the specs of a parser ([`SpecError::DuplicateOption`]).
//!
//! ```console
//! Spec          | Takes a value | Repeated occurrences           | Zero value
//! --------------------------------------------------------------------------------
//! b|bool        | no            | true                           | false
//! v|verbose+    | no            | count each one                 | 0
//! n|name=s      | yes           | last one wins                  | ""
//! i|int=i       | yes           | last one wins                  | 0
//! f|float=f     | yes           | last one wins                  | 0.0
//! S|list=s@     | yes           | append, in order (also `[]`)   | []
//! m|map=i%      | yes, KEY=VAL  | insert, last key wins (`{}`)   | {}
//! ```
//!
//! `=i+` is accepted as a counter.
//! A counter may also be given an inline integer (`-v3`, `--verbose=3`), which is checked and then ignored.
//! Any other inline value given to a flag is rejected ([`ParseError::UnexpectedValue`]).
//! A list or map marker without a type is rejected ([`SpecError::MissingType`]).
//!
//! # Tokens
//! * `-x` and `--name` match a flag.
//! A flag which takes a value consumes the following token verbatim (ex: `-i -5`).
//! * `--name=VALUE` and `-xVALUE` carry the value inline.
//! Only the first `=` separates a long flag from its value, so `--map=key=1` inserts `key` → `1`.
//! * `--` ends the options; all following tokens are leftovers.
//! * Any other token is a leftover.
//!
//! [`OptionParser::process_some`] keeps unknown options among the leftovers.
//! [`OptionParser::process_all`] rejects them ([`ParseError::UnknownOption`]), after applying every recognized option.
//! This check covers every leftover, including those following `--`.
//! In both cases, a failing call keeps the effects of the tokens before the failure.
//!
//! # Staged Parsing
//! Repeated calls accumulate into the same results and destinations.
//! Only the leftovers are reset on each call.
//! A typical use is to parse the global options with `process_some`, and then hand [`OptionParser::args`] to a sub-command parser:
//! ```no_run
#![doc = include_str!("../demos/staged.rs")]
//! ```
//!
//! # Features
//! * `tracing_debug`: Emit `tracing` debug events while compiling specs and parsing tokens.
pub use optspec_engine::*;
