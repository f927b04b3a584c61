//! Generic unit scanning.

use crate::gloss::token::Token;

/// Repeatedly recognize units at the front of `tokens`, feeding each one to
/// `apply`, and return the first unrecognized remainder (empty when the run
/// was consumed completely).
///
/// The recognizer consumes a maximal leading unit and returns it with the
/// tokens left after it; `apply` is never invoked for a failed unit, and an
/// error from `apply` stops the scan immediately.
pub fn scan_units<'a, U, E, R, A>(
    tokens: &'a [Token],
    mut recognize: R,
    mut apply: A,
) -> Result<&'a [Token], E>
where
    R: FnMut(&'a [Token]) -> Option<(U, &'a [Token])>,
    A: FnMut(U) -> Result<(), E>,
{
    let mut rest = tokens;
    while !rest.is_empty() {
        match recognize(rest) {
            Some((unit, tail)) => {
                apply(unit)?;
                rest = tail;
            }
            None => break,
        }
    }
    Ok(rest)
}
