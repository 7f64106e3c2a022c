/// Everything following this token is positional.
pub(crate) const SEPARATOR: &str = "--";

/// Split a token carrying an inline value into its flag and value.
///  --name=value   -> ("--name", "value")
///  -xVALUE        -> ("-x", "VALUE")
///
/// Returns `None` for tokens that cannot carry an inline value (no dash, or a long flag without `=`).
pub(crate) fn split_inline(token: &str) -> Option<(&str, &str)> {
    if let Some(body) = token.strip_prefix("--") {
        body.split_once('=').map(|(name, _)| {
            // The 2 comes from the long option specifier '--'.
            let end = name.len() + 2;
            (&token[..end], &token[end + 1..])
        })
    } else if let Some(body) = token.strip_prefix('-') {
        body.chars().next().map(|short| {
            let end = short.len_utf8() + 1;
            (&token[..end], &token[end..])
        })
    } else {
        None
    }
}
