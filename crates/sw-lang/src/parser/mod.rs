use winnow::combinator::{alt, cut_err, fail, opt};
use winnow::error::{ContextError, ErrMode, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::literal;

use crate::ast::{NodeLocation, WindowExpression, WindowSpec};
use crate::duration::{DurationValue, TimeUnit};
use crate::parse_utils::{kw, unsigned_integer, word, ws_skip};


// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Parse a single window clause, with or without the leading `WINDOW`
/// keyword. The returned node records where the window kind keyword starts.
pub fn parse_window(input: &str) -> anyhow::Result<WindowExpression> {
    let (remaining, spec) = window_clause
        .parse(input)
        .map_err(|e| anyhow::anyhow!("parse error: {e}"))?;
    let location = NodeLocation::from_offset(input, input.len() - remaining);
    Ok(WindowExpression::new(spec).with_location(location))
}

// ---------------------------------------------------------------------------
// Top-level grammar
// ---------------------------------------------------------------------------

/// Returns the length of the input left at the window kind keyword alongside
/// the parsed spec.
fn window_clause(input: &mut &str) -> ModalResult<(usize, WindowSpec)> {
    ws_skip.parse_next(input)?;
    if opt(kw("WINDOW")).parse_next(input)?.is_some() {
        ws_skip.parse_next(input)?;
    }
    let remaining = input.len();
    let spec = alt((
        tumbling,
        hopping,
        session,
        cut_err(fail).context(StrContext::Expected(StrContextValue::Description(
            "window kind (TUMBLING|HOPPING|SESSION)",
        ))),
    ))
    .parse_next(input)?;
    ws_skip.parse_next(input)?;
    Ok((remaining, spec))
}

// ---------------------------------------------------------------------------
// TUMBLING ( SIZE <n> <UNIT> )
// ---------------------------------------------------------------------------

fn tumbling(input: &mut &str) -> ModalResult<WindowSpec> {
    kw("TUMBLING").parse_next(input)?;
    open_paren(input)?;
    size_keyword(input)?;
    let size = cut_err(duration).parse_next(input)?;
    close_paren(input)?;
    Ok(WindowSpec::tumbling(size))
}

// ---------------------------------------------------------------------------
// HOPPING ( SIZE <n> <UNIT> , ADVANCE BY <n> <UNIT> )
// ---------------------------------------------------------------------------

fn hopping(input: &mut &str) -> ModalResult<WindowSpec> {
    kw("HOPPING").parse_next(input)?;
    open_paren(input)?;
    size_keyword(input)?;
    let size = cut_err(duration).parse_next(input)?;

    ws_skip.parse_next(input)?;
    cut_err(literal(","))
        .context(StrContext::Expected(StrContextValue::Description(
            "',' before ADVANCE BY",
        )))
        .parse_next(input)?;
    ws_skip.parse_next(input)?;
    cut_err((kw("ADVANCE"), ws_skip, kw("BY")))
        .context(StrContext::Expected(StrContextValue::Description(
            "ADVANCE BY",
        )))
        .parse_next(input)?;

    let advance = cut_err(duration).parse_next(input)?;
    close_paren(input)?;
    Ok(WindowSpec::hopping(size, advance))
}

// ---------------------------------------------------------------------------
// SESSION ( <n> <UNIT> )
// ---------------------------------------------------------------------------

fn session(input: &mut &str) -> ModalResult<WindowSpec> {
    kw("SESSION").parse_next(input)?;
    open_paren(input)?;
    let gap = cut_err(duration).parse_next(input)?;
    close_paren(input)?;
    Ok(WindowSpec::session(gap))
}

// ---------------------------------------------------------------------------
// Shared pieces
// ---------------------------------------------------------------------------

fn open_paren(input: &mut &str) -> ModalResult<()> {
    ws_skip.parse_next(input)?;
    cut_err(literal("("))
        .context(StrContext::Expected(StrContextValue::Description("'('")))
        .parse_next(input)?;
    Ok(())
}

fn close_paren(input: &mut &str) -> ModalResult<()> {
    ws_skip.parse_next(input)?;
    cut_err(literal(")"))
        .context(StrContext::Expected(StrContextValue::Description(
            "closing ')'",
        )))
        .parse_next(input)?;
    Ok(())
}

fn size_keyword(input: &mut &str) -> ModalResult<()> {
    ws_skip.parse_next(input)?;
    cut_err(kw("SIZE"))
        .context(StrContext::Expected(StrContextValue::Description("SIZE")))
        .parse_next(input)
}

/// `<n> <UNIT>`
fn duration(input: &mut &str) -> ModalResult<DurationValue> {
    ws_skip.parse_next(input)?;
    let magnitude = cut_err(unsigned_integer)
        .context(StrContext::Expected(StrContextValue::Description(
            "non-negative integer duration",
        )))
        .parse_next(input)?;
    ws_skip.parse_next(input)?;
    let unit = cut_err(time_unit)
        .context(StrContext::Expected(StrContextValue::Description(
            "time unit (MILLISECONDS|SECONDS|MINUTES|HOURS|DAYS)",
        )))
        .parse_next(input)?;
    Ok(DurationValue::new(magnitude, unit))
}

fn time_unit(input: &mut &str) -> ModalResult<TimeUnit> {
    let saved = *input;
    let name = word.parse_next(input)?;
    name.parse::<TimeUnit>().map_err(|_| {
        *input = saved;
        ErrMode::Backtrack(ContextError::new())
    })
}
