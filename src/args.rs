/// Result of extracting driver flags from a raw argument list.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    pub verbose: bool,
    pub debug: bool,
    /// Everything that was not a recognized flag, in original relative order.
    pub rest: Vec<String>,
}

/// Extract `-v`/`--verbose` and `-d`/`--debug` from a raw argument list.
///
/// Both flags are boolean, repeatable, and recognized anywhere in the list.
/// Every other argument, including unrecognized flags, is kept in `rest`
/// unchanged, so a hook can define its own options without the driver
/// rejecting them.
pub fn parse<I>(raw: I) -> ParsedArgs
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = ParsedArgs::default();
    for arg in raw {
        match arg.as_str() {
            "-v" | "--verbose" => parsed.verbose = true,
            "-d" | "--debug" => parsed.debug = true,
            _ => parsed.rest.push(arg),
        }
    }
    parsed
}
