//! Input line parsing.

/// Split a raw input line into a lowercased command token and its
/// positional arguments.
///
/// Tokens are whitespace-separated with no quoting support. Arguments
/// keep their original case; only the command token is lowercased.
/// Blank or whitespace-only input yields `None` (the loop re-prompts
/// without printing anything).
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    let args = tokens.map(str::to_string).collect();
    Some((command, args))
}
