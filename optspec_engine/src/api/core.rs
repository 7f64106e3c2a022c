#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::api::{Destination, Results};
use crate::compiler::{ActionTable, SpecError};
use crate::engine::{Engine, Leftovers, ParseError};

/// The option parser, configured by spec strings.
///
/// Built in one of two modes:
/// * [`OptionParser::new`] (dictionary mode) collects values into [`Results`].
/// * [`OptionParser::direct`] (direct mode) writes values into caller-owned [`Destination`]s.
///
/// Repeated calls to [`OptionParser::process_some`] or [`OptionParser::process_all`] reuse the same results/destinations, so values accumulate across calls.
/// Only the leftover arguments are reset on each call.
///
/// ### Example
/// ```
/// # use optspec_engine as optspec;
/// use optspec::OptionParser;
///
/// let mut parser = OptionParser::new(["v|verbose+", "S|string-list=s@"]).unwrap();
/// parser
///     .process_all(&["-v", "-S", "A", "file.txt", "--string-list", "B", "-v"])
///     .unwrap();
///
/// let results = parser.results().unwrap();
/// assert_eq!(results.integer("verbose"), Ok(2));
/// assert_eq!(results.string_list("string-list"), Ok(&["A".to_string(), "B".to_string()][..]));
/// assert_eq!(parser.args(), &["file.txt"]);
/// ```
#[derive(Debug)]
pub struct OptionParser<'a> {
    engine: Engine<'a>,
    leftovers: Leftovers,
}

impl<'a> OptionParser<'a> {
    /// Create a dictionary mode parser from spec strings.
    /// Every result name starts at its zero value (`0`, `false`, `""`, or empty).
    ///
    /// ### Example
    /// ```
    /// # use optspec_engine as optspec;
    /// use optspec::{OptionParser, SpecError};
    ///
    /// let parser = OptionParser::new(["b|bool", "i|int=i"]).unwrap();
    /// assert_eq!(parser.results().unwrap().boolean("bool"), Ok(false));
    ///
    /// let error = OptionParser::new(["i|inc|increment+", "i|int=i"]).unwrap_err();
    /// assert_eq!(
    ///     error,
    ///     SpecError::DuplicateOption {
    ///         flag: "-i".to_string(),
    ///         spec: "i|int=i".to_string(),
    ///     }
    /// );
    /// ```
    pub fn new<I>(specs: I) -> Result<Self, SpecError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let table = ActionTable::compile(specs.into_iter().map(|spec| (spec, None)))?;
        let results = Results::seed(&table);

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Compiled dictionary parser: {r:?}.", r = results);
        }

        Ok(Self {
            engine: Engine::new(table, Some(results)),
            leftovers: Leftovers::default(),
        })
    }

    /// Create a direct mode parser from `(spec, destination)` bindings, registered in iteration order.
    /// No [`Results`] are kept; see [`Destination`].
    ///
    /// ### Example
    /// ```
    /// # use optspec_engine as optspec;
    /// use optspec::{Destination, OptionParser};
    ///
    /// let mut items: Vec<i64> = Vec::default();
    /// let mut seen: Vec<String> = Vec::default();
    /// let mut parser = OptionParser::direct(vec![
    ///     ("I|item=i@", Destination::list(&mut items)),
    ///     ("tag=s", Destination::named(|name, value| seen.push(format!("{name}:{value}")))),
    /// ])
    /// .unwrap();
    ///
    /// parser.process_all(&["-I", "1", "--tag", "x", "-I2"]).unwrap();
    /// assert!(parser.results().is_none());
    /// drop(parser);
    ///
    /// assert_eq!(items, vec![1, 2]);
    /// assert_eq!(seen, vec!["tag:x"]);
    /// ```
    pub fn direct<I, S>(bindings: I) -> Result<Self, SpecError>
    where
        I: IntoIterator<Item = (S, Destination<'a>)>,
        S: AsRef<str>,
    {
        let table = ActionTable::compile(
            bindings
                .into_iter()
                .map(|(spec, destination)| (spec, Some(destination))),
        )?;

        Ok(Self {
            engine: Engine::new(table, None),
            leftovers: Leftovers::default(),
        })
    }

    /// Process the tokens, leaving unrecognized ones (including unknown options) in [`OptionParser::args`].
    ///
    /// ### Example
    /// ```
    /// # use optspec_engine as optspec;
    /// use optspec::OptionParser;
    ///
    /// let mut parser = OptionParser::new(["v|verbose+"]).unwrap();
    /// parser.process_some(&["-v", "--bogus", "extra"]).unwrap();
    /// assert_eq!(parser.args(), &["--bogus", "extra"]);
    /// ```
    pub fn process_some<S: AsRef<str>>(&mut self, tokens: &[S]) -> Result<(), ParseError> {
        self.engine.scan(tokens, &mut self.leftovers)
    }

    /// Process the tokens, then fail if any leftover looks like an option.
    /// All recognized options are applied before the unknown option is reported.
    /// This includes the tokens following `--`; use [`OptionParser::process_some`] to accept those verbatim.
    ///
    /// ### Example
    /// ```
    /// # use optspec_engine as optspec;
    /// use optspec::{OptionParser, ParseError};
    ///
    /// let mut parser = OptionParser::new(["v|verbose+"]).unwrap();
    /// let error = parser.process_all(&["-v", "--bogus", "extra"]).unwrap_err();
    /// assert_eq!(error, ParseError::UnknownOption("--bogus".to_string()));
    /// assert_eq!(parser.results().unwrap().integer("verbose"), Ok(1));
    /// ```
    pub fn process_all<S: AsRef<str>>(&mut self, tokens: &[S]) -> Result<(), ParseError> {
        self.process_some(tokens)?;

        match self.leftovers.unknown() {
            Some(token) => Err(ParseError::UnknownOption(token.to_string())),
            None => Ok(()),
        }
    }

    /// The leftover arguments of the most recent call, in input order.
    /// Partial when that call failed.
    pub fn args(&self) -> &[String] {
        self.leftovers.args()
    }

    /// The collected values, in dictionary mode.
    /// `None` in direct mode.
    pub fn results(&self) -> Option<&Results> {
        self.engine.results()
    }
}
