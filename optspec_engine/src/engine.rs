use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::api::Results;
use crate::compiler::ActionTable;
use crate::model::{Decoded, Value, ValueKind};

mod decode;
mod dispatch;
mod token;

use token::{split_inline, SEPARATOR};

/// Error for a single parse call.
///
/// Parsing stops at the failing token; tokens processed before it keep their effects.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A token that looks like an option (begins with `-`) matches no declared option.
    /// Only raised by [`crate::OptionParser::process_all`], after the whole token list is processed.
    #[error("Option '{0}' does not exist.")]
    UnknownOption(String),

    /// An option requiring a value was the final token, or was given an empty inline value (`--name=`).
    #[error("Option '{0}' requires a value.")]
    MissingValue(String),

    /// A flag was given an inline value (`--flag=x`, `-bx`).
    #[error("Option '{option}' does not take a value (given '{value}').")]
    UnexpectedValue {
        /// The option flag, as matched.
        option: String,
        /// The inline value.
        value: String,
    },

    /// A map option was given a value without a `key=value` form.
    #[error("Option '{option}' expects 'key=value', found '{value}'.")]
    MalformedEntry {
        /// The option flag, as matched.
        option: String,
        /// The raw value.
        value: String,
    },

    /// A `=i` value is not a base-10 signed 64-bit integer.
    #[error("Option '{option}' cannot convert '{value}' to an integer: {source}.")]
    InvalidInteger {
        /// The option flag, as matched.
        option: String,
        /// The raw value.
        value: String,
        /// The underlying integer parse failure.
        source: ParseIntError,
    },

    /// A `=f` value is not a float.
    #[error("Option '{option}' cannot convert '{value}' to a float: {source}.")]
    InvalidFloat {
        /// The option flag, as matched.
        option: String,
        /// The raw value.
        value: String,
        /// The underlying float parse failure.
        source: ParseFloatError,
    },
}

/// The tokens of the latest parse call which were not consumed as options.
#[derive(Debug, Default)]
pub(crate) struct Leftovers {
    args: Vec<String>,
}

impl Leftovers {
    fn reset(&mut self) {
        self.args.clear();
    }

    fn push(&mut self, token: &str) {
        self.args.push(token.to_string());
    }

    fn extend<S: AsRef<str>>(&mut self, rest: &[S]) {
        self.args
            .extend(rest.iter().map(|token| token.as_ref().to_string()));
    }

    pub(crate) fn args(&self) -> &[String] {
        &self.args
    }

    /// The first leftover which looks like an option, including those following `--`.
    pub(crate) fn unknown(&self) -> Option<&str> {
        self.args
            .iter()
            .map(String::as_str)
            .find(|token| token.starts_with('-'))
    }
}

/// Walks the tokens against the action table, dispatching each matched option.
#[derive(Debug)]
pub(crate) struct Engine<'a> {
    table: ActionTable<'a>,
    // Present in dictionary mode only.
    results: Option<Results>,
}

impl<'a> Engine<'a> {
    pub(crate) fn new(table: ActionTable<'a>, results: Option<Results>) -> Self {
        Self { table, results }
    }

    pub(crate) fn results(&self) -> Option<&Results> {
        self.results.as_ref()
    }

    pub(crate) fn scan<S: AsRef<str>>(
        &mut self,
        tokens: &[S],
        leftovers: &mut Leftovers,
    ) -> Result<(), ParseError> {
        leftovers.reset();
        let mut cursor = 0;

        while let Some(token) = tokens.get(cursor) {
            let token = token.as_ref();

            if token == SEPARATOR {
                leftovers.extend(&tokens[cursor + 1..]);
                break;
            }

            let next = tokens.get(cursor + 1).map(AsRef::as_ref);
            cursor += self.step(token, next, leftovers)?;
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Scanned {n} tokens, leaving {l} over.",
                n = tokens.len(),
                l = leftovers.args().len()
            );
        }

        Ok(())
    }

    // Process the token at the cursor, returning the number of tokens consumed.
    // 1. An exact flag, such as:
    //  -v
    //  --verbose
    //  --name VALUE
    // 2. A flag with an inline value, such as:
    //  --name=VALUE
    //  -nVALUE
    //  -v3 (a counter ignores its value, once decoded)
    // 3. Anything else is left over.
    fn step(
        &mut self,
        token: &str,
        next: Option<&str>,
        leftovers: &mut Leftovers,
    ) -> Result<usize, ParseError> {
        if let Some(index) = self.table.lookup(token) {
            let option = self.table.option(index);

            if option.niladic {
                self.dispatch(index, Decoded::Scalar(Value::Boolean(true)));
                return Ok(1);
            }

            let raw = next.ok_or_else(|| ParseError::MissingValue(token.to_string()))?;
            let decoded = option.decode(token, raw)?;
            self.dispatch(index, decoded);
            return Ok(2);
        }

        let inline = split_inline(token)
            .and_then(|(flag, value)| self.table.lookup(flag).map(|index| (index, flag, value)));

        match inline {
            Some((index, flag, value)) => {
                let option = self.table.option(index);

                if value.is_empty() {
                    return Err(ParseError::MissingValue(flag.to_string()));
                }

                if option.kind == ValueKind::Boolean {
                    return Err(ParseError::UnexpectedValue {
                        option: flag.to_string(),
                        value: value.to_string(),
                    });
                }

                let decoded = option.decode(flag, value)?;
                self.dispatch(index, decoded);
            }
            None => leftovers.push(token),
        };

        Ok(1)
    }

    fn dispatch(&mut self, index: usize, decoded: Decoded) {
        let option = self.table.option_mut(index);

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Dispatching {decoded:?} to '{n}'.", n = option.name);
        }

        match &mut option.destination {
            Some(destination) => destination.0.apply(&option.name, decoded),
            None => self
                .results
                .as_mut()
                .expect("internal error - options without a destination require results")
                .apply(&option.name, option.action, decoded),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ResultValue;
    use rand::{thread_rng, Rng};
    use rstest::rstest;
    use std::collections::HashMap;

    fn engine(specs: Vec<&str>) -> Engine<'static> {
        let table = ActionTable::compile(specs.into_iter().map(|s| (s, None))).unwrap();
        let results = Results::seed(&table);
        Engine::new(table, Some(results))
    }

    fn scan(engine: &mut Engine, tokens: &[&str]) -> (Result<(), ParseError>, Vec<String>) {
        let mut leftovers = Leftovers::default();
        let result = engine.scan(tokens, &mut leftovers);
        (result, leftovers.args().to_vec())
    }

    #[test]
    fn scan_empty() {
        let mut engine = engine(vec!["v|verbose+"]);
        let (result, args) = scan(&mut engine, &[]);
        result.unwrap();
        assert!(args.is_empty());
        assert_eq!(engine.results().unwrap().integer("verbose"), Ok(0));
    }

    #[rstest]
    #[case(vec!["-v"], 1)]
    #[case(vec!["--verbose"], 1)]
    #[case(vec!["-v", "--verbose", "-v"], 3)]
    #[case(vec!["--verbose", "x", "--verbose"], 2)]
    fn scan_increment(#[case] tokens: Vec<&str>, #[case] expected: i64) {
        let mut engine = engine(vec!["v|verbose+"]);
        let (result, _) = scan(&mut engine, &tokens);
        result.unwrap();
        assert_eq!(engine.results().unwrap().integer("verbose"), Ok(expected));
    }

    #[test]
    fn scan_increment_random() {
        for _ in 0..10 {
            let count: usize = thread_rng().gen_range(0..20);
            let tokens: Vec<&str> = (0..count)
                .map(|_| {
                    if thread_rng().gen() {
                        "-v"
                    } else {
                        "--verbose"
                    }
                })
                .collect();
            let mut engine = engine(vec!["v|verbose+"]);
            let (result, args) = scan(&mut engine, &tokens);
            result.unwrap();
            assert!(args.is_empty());
            assert_eq!(
                engine.results().unwrap().integer("verbose"),
                Ok(count as i64)
            );
        }
    }

    #[rstest]
    #[case(vec!["--string", "strval"])]
    #[case(vec!["-s", "strval"])]
    #[case(vec!["--string=strval"])]
    #[case(vec!["-sstrval"])]
    #[case(vec!["-s", "other", "--string", "strval"])]
    fn scan_value_forms(#[case] tokens: Vec<&str>) {
        let mut engine = engine(vec!["s|string=s"]);
        let (result, args) = scan(&mut engine, &tokens);
        result.unwrap();
        assert!(args.is_empty());
        assert_eq!(engine.results().unwrap().string("string"), Ok("strval"));
    }

    #[rstest]
    #[case(vec!["-i", "-5"], -5)]
    #[case(vec!["-i-5"], -5)]
    #[case(vec!["--int=+12"], 12)]
    fn scan_negative_value(#[case] tokens: Vec<&str>, #[case] expected: i64) {
        let mut engine = engine(vec!["i|int=i"]);
        let (result, _) = scan(&mut engine, &tokens);
        result.unwrap();
        assert_eq!(engine.results().unwrap().integer("int"), Ok(expected));
    }

    #[test]
    fn scan_value_consumed_verbatim() {
        let mut engine = engine(vec!["s|string=s", "b|bool"]);
        let (result, args) = scan(&mut engine, &["-s", "--bool", "--", "x"]);
        result.unwrap();
        assert_eq!(args, vec!["x"]);
        assert_eq!(engine.results().unwrap().string("string"), Ok("--bool"));
        assert_eq!(engine.results().unwrap().boolean("bool"), Ok(false));
    }

    #[rstest]
    #[case(vec!["extra"], vec!["extra"])]
    #[case(vec!["-v", "--bogus", "extra"], vec!["--bogus", "extra"])]
    #[case(vec!["a", "-v", "b", "-x", "c"], vec!["a", "b", "-x", "c"])]
    #[case(vec!["--", "-v", "--verbose"], vec!["-v", "--verbose"])]
    #[case(vec!["a", "--", "b", "--"], vec!["a", "b", "--"])]
    #[case(vec!["-", ""], vec!["-", ""])]
    #[case(vec!["--bogus=1", "-xyz"], vec!["--bogus=1", "-xyz"])]
    fn scan_leftovers(#[case] tokens: Vec<&str>, #[case] expected: Vec<&str>) {
        let mut engine = engine(vec!["v|verbose+"]);
        let (result, args) = scan(&mut engine, &tokens);
        result.unwrap();
        assert_eq!(args, expected);
    }

    #[test]
    fn scan_separator_stops_options() {
        let mut engine = engine(vec!["foobar"]);
        let (result, args) = scan(&mut engine, &["--", "--foobar"]);
        result.unwrap();
        assert_eq!(args, vec!["--foobar"]);
        assert_eq!(engine.results().unwrap().boolean("foobar"), Ok(false));
    }

    #[rstest]
    #[case(vec!["--foobar"], "--foobar")]
    #[case(vec!["-f"], "-f")]
    #[case(vec!["--foobar="], "--foobar")]
    #[case(vec!["-v", "--foobar"], "--foobar")]
    fn scan_missing_value(#[case] tokens: Vec<&str>, #[case] option: &str) {
        let mut engine = engine(vec!["f|foobar=i", "v|verbose+"]);
        let (result, _) = scan(&mut engine, &tokens);
        assert_eq!(result.unwrap_err(), ParseError::MissingValue(option.to_string()));
    }

    #[rstest]
    #[case(vec!["--foobar=abc"])]
    #[case(vec!["--foobar", "abc"])]
    #[case(vec!["-fabc"])]
    fn scan_invalid_value(#[case] tokens: Vec<&str>) {
        let mut engine = engine(vec!["f|foobar=i"]);
        let (result, _) = scan(&mut engine, &tokens);
        assert_matches!(result, Err(ParseError::InvalidInteger { value, .. }) if value == "abc");
    }

    #[rstest]
    #[case(vec!["-bb"], "-b", "b")]
    #[case(vec!["--bool=x"], "--bool", "x")]
    #[case(vec!["-b1"], "-b", "1")]
    fn scan_unexpected_value(#[case] tokens: Vec<&str>, #[case] option: &str, #[case] value: &str) {
        let mut engine = engine(vec!["b|bool"]);
        let (result, _) = scan(&mut engine, &tokens);
        assert_eq!(
            result.unwrap_err(),
            ParseError::UnexpectedValue {
                option: option.to_string(),
                value: value.to_string(),
            }
        );
    }

    #[rstest]
    #[case(vec!["--verbose=3"], 1)]
    #[case(vec!["-v5", "-v"], 2)]
    #[case(vec!["--verbose=-1", "--verbose", "-v0"], 3)]
    fn scan_increment_inline(#[case] tokens: Vec<&str>, #[case] expected: i64) {
        let mut engine = engine(vec!["v|verbose+"]);
        let (result, args) = scan(&mut engine, &tokens);
        result.unwrap();
        assert!(args.is_empty());
        assert_eq!(engine.results().unwrap().integer("verbose"), Ok(expected));
    }

    #[rstest]
    #[case(vec!["--verbose="], "--verbose")]
    #[case(vec!["--bool="], "--bool")]
    fn scan_niladic_empty_inline(#[case] tokens: Vec<&str>, #[case] option: &str) {
        let mut engine = engine(vec!["v|verbose+", "b|bool"]);
        let (result, _) = scan(&mut engine, &tokens);
        assert_eq!(result.unwrap_err(), ParseError::MissingValue(option.to_string()));
        assert_eq!(engine.results().unwrap().integer("verbose"), Ok(0));
    }

    #[test]
    fn scan_increment_inline_invalid() {
        let mut engine = engine(vec!["v|verbose+"]);
        let (result, _) = scan(&mut engine, &["-vv"]);
        assert_matches!(result, Err(ParseError::InvalidInteger { option, value, .. }) if option == "-v" && value == "v");
        assert_eq!(engine.results().unwrap().integer("verbose"), Ok(0));
    }

    #[test]
    fn scan_error_keeps_prior_effects() {
        let mut engine = engine(vec!["v|verbose+", "i|int=i"]);
        let (result, args) = scan(&mut engine, &["a", "-v", "-i", "x", "-v", "b"]);
        assert_matches!(result, Err(ParseError::InvalidInteger { .. }));
        assert_eq!(args, vec!["a"]);
        assert_eq!(engine.results().unwrap().integer("verbose"), Ok(1));
    }

    #[test]
    fn scan_accumulates_across_calls() {
        let mut engine = engine(vec!["v|verbose+", "S=s@"]);
        let (result, args) = scan(&mut engine, &["-v", "-S", "A", "x"]);
        result.unwrap();
        assert_eq!(args, vec!["x"]);

        let (result, args) = scan(&mut engine, &["-v", "-S", "B"]);
        result.unwrap();
        assert!(args.is_empty());

        let results = engine.results().unwrap();
        assert_eq!(results.integer("verbose"), Ok(2));
        assert_eq!(
            results.get("S"),
            Some(&ResultValue::StringList(vec!["A".to_string(), "B".to_string()]))
        );
    }

    #[test]
    fn scan_map() {
        let mut engine = engine(vec!["fltopt=f%"]);
        let (result, _) = scan(
            &mut engine,
            &["--fltopt", "abc=123", "--fltopt=key=1.23", "--fltopt", "abc=0.5"],
        );
        result.unwrap();
        assert_eq!(
            engine.results().unwrap().float_map("fltopt"),
            Ok(&HashMap::from([
                ("abc".to_string(), 0.5),
                ("key".to_string(), 1.23)
            ]))
        );
    }

    #[rstest]
    #[case(vec!["-v", "--bogus"], Some("--bogus"))]
    #[case(vec!["extra", "-"], Some("-"))]
    #[case(vec!["extra"], None)]
    #[case(vec!["extra", "--", "value"], None)]
    #[case(vec!["--", "--bogus"], Some("--bogus"))]
    #[case(vec!["a", "--", "-v"], Some("-v"))]
    #[case(vec!["-x", "--", "--bogus"], Some("-x"))]
    fn leftovers_unknown(#[case] tokens: Vec<&str>, #[case] expected: Option<&str>) {
        let mut engine = engine(vec!["v|verbose+"]);
        let mut leftovers = Leftovers::default();
        engine.scan(&tokens, &mut leftovers).unwrap();
        assert_eq!(leftovers.unknown(), expected);
    }
}
