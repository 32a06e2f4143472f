use winnow::ascii::{Caseless, multispace0};
use winnow::combinator::opt;
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{literal, take_while};

// ---------------------------------------------------------------------------
// Whitespace & comments
// ---------------------------------------------------------------------------

/// Skip whitespace and `-- ...` line comments.
pub fn ws_skip(input: &mut &str) -> ModalResult<()> {
    loop {
        let _ = multispace0.parse_next(input)?;
        if opt(literal("--")).parse_next(input)?.is_some() {
            let _ = take_while(0.., |c: char| c != '\n').parse_next(input)?;
        } else {
            break;
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Keyword matching with word boundary
// ---------------------------------------------------------------------------

/// Match a keyword case-insensitively, ensuring it's not a prefix of a longer
/// identifier (i.e. the next character is not alphanumeric or `_`).
pub fn kw<'a>(keyword: &'static str) -> impl FnMut(&mut &'a str) -> ModalResult<()> {
    move |input: &mut &'a str| {
        let saved = *input;
        literal(Caseless(keyword)).parse_next(input)?;
        if input.starts_with(|c: char| c.is_ascii_alphanumeric() || c == '_') {
            *input = saved;
            return Err(ErrMode::Backtrack(ContextError::new()));
        }
        Ok(())
    }
}

/// Alphabetic word, e.g. a unit keyword.
pub fn word<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    take_while(1.., |c: char| c.is_ascii_alphabetic()).parse_next(input)
}

// ---------------------------------------------------------------------------
// Integers
// ---------------------------------------------------------------------------

/// Parse an unsigned integer literal (digits only, no sign or decimal point).
pub fn unsigned_integer(input: &mut &str) -> ModalResult<u64> {
    let saved = *input;
    let digits = take_while(1.., |c: char| c.is_ascii_digit()).parse_next(input)?;
    // Reject if followed by decimal point (float, not integer)
    if input.starts_with('.') {
        *input = saved;
        return Err(ErrMode::Backtrack(ContextError::new()));
    }
    digits.parse::<u64>().map_err(|_| {
        *input = saved;
        ErrMode::Backtrack(ContextError::new())
    })
}
