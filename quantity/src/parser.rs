/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use nom::{
    self,
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{anychar, char, multispace0, space0},
    combinator::{map_opt, map_res, opt, value},
    error::ErrorKind,
    multi::{fold_many1, many1, separated_list1},
    number::complete::{double, recognize_float},
    sequence::{delimited, preceded, terminated, tuple},
    IResult,
};

use crate::error::QuantityError;
use crate::factor::{Factor, SUPERSCRIPTS};
use crate::interval::Interval;
use crate::number::Number;
use crate::prefix::{PrefixFamily, UnitPrefix, PREFIX_LABELS};
use crate::quantity::Quantity;
use crate::symbol::{canonical_symbol, is_known_alias};
use crate::unit::{DimensionalUnit, DIMENSIONLESS_UNIT};
use crate::validator::IntervalsValidator;

/// Parse a string to a (possibly composite) unit, detecting the
/// prefix family from the expression.
pub fn parse_unit(input: &str) -> Result<DimensionalUnit, QuantityError> {
    parse_unit_impl(input, None)
}

/// Parse a string to a unit, simplifying against the given prefix
/// family.
pub fn parse_unit_with(
    input: &str,
    family: PrefixFamily,
) -> Result<DimensionalUnit, QuantityError> {
    parse_unit_impl(input, Some(family))
}

fn parse_unit_impl(
    input: &str,
    family: Option<PrefixFamily>,
) -> Result<DimensionalUnit, QuantityError> {
    if input.is_empty() {
        return Ok(DIMENSIONLESS_UNIT);
    }

    match composite_factors(input) {
        Ok(("", factors)) => DimensionalUnit::from_factors(factors?, family),
        Ok((r, _)) => Err(QuantityError::InvalidExpression(format!(
            "leftover input: {}",
            r
        ))),
        Err(err) => Err(QuantityError::InvalidExpression(format!("{}", err))),
    }
}

/// Parse a string to a quantity (number and optional unit).
pub fn parse_quantity(input: &str) -> Result<Quantity, QuantityError> {
    match quantity(input) {
        Ok(("", q)) => q,
        Ok((r, _)) => Err(QuantityError::InvalidExpression(format!(
            "leftover input: {}",
            r
        ))),
        Err(_) => Err(QuantityError::NotANumber(input.to_string())),
    }
}

/// Parse a string to a single interval.
pub fn parse_interval(input: &str) -> Result<Interval, QuantityError> {
    match interval(input) {
        Ok(("", i)) => i,
        Ok((r, _)) => Err(QuantityError::InvalidExpression(format!(
            "leftover input: {}",
            r
        ))),
        Err(err) => Err(QuantityError::InvalidExpression(format!("{}", err))),
    }
}

/// Parse a string to an intervals validator: an optional target unit
/// label followed by one or more intervals.
pub fn parse_intervals(
    input: &str,
) -> Result<IntervalsValidator, QuantityError> {
    match validator(input) {
        Ok(("", v)) => v,
        Ok((r, _)) => Err(QuantityError::InvalidExpression(format!(
            "leftover input: {}",
            r
        ))),
        Err(err) => Err(QuantityError::InvalidExpression(format!("{}", err))),
    }
}

/* Unit expressions. */

/// Parser for composite units: numerator terms, optionally followed
/// by a single division and a (possibly parenthesised) denominator
/// list. Multiplication after the division binds into the
/// denominator, so the canonical form re-parses to the same unit.
fn composite_factors(
    input: &str,
) -> IResult<&str, Result<Vec<Factor>, QuantityError>> {
    let (input, (num, denom)) = tuple((
        opt(term_list),
        opt(preceded(
            div_op,
            alt((
                delimited(char('('), term_list, char(')')),
                term_list,
            )),
        )),
    ))(input)?;

    match (num, denom) {
        (None, None) => Err(nom::Err::Error(nom::error::Error {
            input,
            code: ErrorKind::Alt,
        })),
        (Some(Err(e)), _) => Ok((input, Err(e))),
        (_, Some(Err(e))) => Ok((input, Err(e))),
        (num, denom) => {
            let mut factors = match num {
                Some(Ok(n)) => n,
                _ => Vec::new(),
            };
            if let Some(Ok(denom)) = denom {
                factors
                    .extend(denom.into_iter().map(|factor| factor.raise(-1)));
            }
            Ok((input, Ok(factors)))
        }
    }
}

/// Parser for quantities (number and unit).
fn quantity(input: &str) -> IResult<&str, Result<Quantity, QuantityError>> {
    let (input, (num, _, factors)) =
        tuple((double, space0, opt(composite_factors)))(input)?;
    let quantity = match factors {
        Some(Ok(factors)) => DimensionalUnit::from_factors(factors, None)
            .map(|unit| Quantity(num, unit)),
        Some(Err(e)) => Err(e),
        None => Ok(Quantity(num, DIMENSIONLESS_UNIT)),
    };
    Ok((input, quantity))
}

fn term_list(
    input: &str,
) -> IResult<&str, Result<Vec<Factor>, QuantityError>> {
    let (input, terms) = separated_list1(mult_op, factor_term)(input)?;
    Ok((input, terms.into_iter().collect()))
}

/// Parser for a single term: an optional exponent word, the unit
/// label and an optional trailing exponent. Word and trailing
/// exponents are mutually exclusive.
fn factor_term(input: &str) -> IResult<&str, Result<Factor, QuantityError>> {
    let (input, word) = opt(alt((
        value(2, tag("square ")),
        value(3, tag("cubic ")),
    )))(input)?;
    let (input, text) = label(input)?;
    let (input, trailing) =
        opt(alt((value(2, tag(" squared")), superscript_power)))(input)?;

    let factor = match (word, trailing) {
        (Some(_), Some(_)) => Err(QuantityError::InvalidExpression(format!(
            "both a word and a trailing exponent on {}",
            text
        ))),
        (word, trailing) => {
            let (prefix, symbol) = resolve_label(text);
            Ok(Factor::prefixed(
                prefix,
                symbol,
                word.or(trailing).unwrap_or(1),
            ))
        }
    };
    Ok((input, factor))
}

fn label(input: &str) -> IResult<&str, &str> {
    take_while1(is_label_char)(input)
}

/// Resolve a label to a prefix and canonical symbol. Known symbols
/// match first, otherwise "metres" would parse as a milli-prefixed
/// unknown unit "etres". Prefix labels are tried longest first.
fn resolve_label(label: &str) -> (UnitPrefix, String) {
    if is_known_alias(label) {
        return (UnitPrefix::IDENTITY, canonical_symbol(label).to_string());
    }
    for (text, prefix) in &PREFIX_LABELS {
        if let Some(rest) = label.strip_prefix(text) {
            if is_known_alias(rest) {
                return (*prefix, canonical_symbol(rest).to_string());
            }
        }
    }
    for (text, prefix) in &PREFIX_LABELS {
        if let Some(rest) = label.strip_prefix(text) {
            if !rest.is_empty() {
                return (*prefix, rest.to_string());
            }
        }
    }
    (UnitPrefix::IDENTITY, label.to_string())
}

/// Characters allowed in a unit label: anything that is not
/// whitespace, forbidden punctuation, an operator, a bracket or a
/// superscript.
fn is_label_char(c: char) -> bool {
    !matches!(
        c,
        '\t' | '\n'
            | '\u{b}'
            | '\u{c}'
            | '\r'
            | ' '
            | '!'
            | '"'
            | '&'
            | '`'
            | '+'
            | ','
            | '-'
            | '.'
            | ':'
            | ';'
            | '<'
            | '='
            | '>'
            | '?'
            | '@'
            | '['
            | '\\'
            | ']'
            | '^'
            | '\''
            | '{'
            | '|'
            | '}'
            | '~'
            | '('
            | ')'
    ) && !is_mult_op(c)
        && !is_div_op(c)
        && !is_superscript(c)
}

fn is_mult_op(c: char) -> bool {
    matches!(c, '\u{00b7}' | '\u{00a0}' | '\u{00d7}' | '\u{22c5}' | '*')
}

fn is_div_op(c: char) -> bool {
    matches!(c, '/' | '\u{00f7}' | '\u{2044}' | '\u{2215}')
}

fn is_superscript(c: char) -> bool {
    matches!(
        c,
        '⁰' | '¹'
            | '²'
            | '³'
            | '⁴'
            | '⁵'
            | '⁶'
            | '⁷'
            | '⁸'
            | '⁹'
            | '⁻'
            | '⁺'
    )
}

fn mult_op(input: &str) -> IResult<&str, char> {
    alt((
        char('\u{00b7}'),
        char('\u{00a0}'),
        char('\u{00d7}'),
        char('\u{22c5}'),
        char('*'),
    ))(input)
}

fn div_op(input: &str) -> IResult<&str, char> {
    alt((
        char('/'),
        char('\u{00f7}'),
        char('\u{2044}'),
        char('\u{2215}'),
    ))(input)
}

/* Exponents. */

/// Parser for a superscript exponent: an optional superscript sign
/// followed by digits from the table the renderer writes with.
fn superscript_power(input: &str) -> IResult<&str, i32> {
    let (input, sign) =
        opt(alt((value(-1, char('⁻')), value(1, char('⁺')))))(input)?;
    let (input, n) =
        fold_many1(superscript_digit, || 0, |n, d| n * 10 + d)(input)?;
    Ok((input, sign.unwrap_or(1) * n))
}

fn superscript_digit(input: &str) -> IResult<&str, i32> {
    map_opt(anychar, |c| {
        SUPERSCRIPTS.iter().position(|d| *d == c).map(|d| d as i32)
    })(input)
}

/* Intervals. */

/// Parser for an interval in ISO 80000-2 or parenthesis notation.
fn interval(input: &str) -> IResult<&str, Result<Interval, QuantityError>> {
    let (input, (left_open, _, left, _, _, _, right, _, right_open)) =
        tuple((
            bracket_left,
            multispace0,
            endpoint,
            multispace0,
            char(','),
            multispace0,
            endpoint,
            multispace0,
            bracket_right,
        ))(input)?;
    Ok((input, Interval::new(left_open, left, right_open, right)))
}

fn bracket_left(input: &str) -> IResult<&str, bool> {
    alt((
        value(false, char('[')),
        value(true, char(']')),
        value(true, char('(')),
    ))(input)
}

fn bracket_right(input: &str) -> IResult<&str, bool> {
    alt((
        value(false, char(']')),
        value(true, char('[')),
        value(true, char(')')),
    ))(input)
}

fn endpoint(input: &str) -> IResult<&str, Option<Number>> {
    alt((
        value(None, infinity),
        map_res(recognize_float, |s: &str| Number::parse(s).map(Some)),
    ))(input)
}

fn infinity(input: &str) -> IResult<&str, ()> {
    value(
        (),
        tuple((
            opt(alt((char('-'), char('+')))),
            alt((char('\u{221e}'), char('*'))),
        )),
    )(input)
}

/* Validators. */

fn validator(
    input: &str,
) -> IResult<&str, Result<IntervalsValidator, QuantityError>> {
    let (input, unit_label) = opt(terminated(label, char(':')))(input)?;
    let (input, intervals) = many1(preceded(multispace0, interval))(input)?;
    let (input, _) = multispace0(input)?;
    Ok((input, build_validator(unit_label, intervals)))
}

fn build_validator(
    unit_label: Option<&str>,
    intervals: Vec<Result<Interval, QuantityError>>,
) -> Result<IntervalsValidator, QuantityError> {
    let unit = match unit_label {
        Some(text) => {
            let (prefix, symbol) = resolve_label(text);
            DimensionalUnit::from_factors(
                vec![Factor::prefixed(prefix, symbol, 1)],
                None,
            )?
        }
        None => DIMENSIONLESS_UNIT,
    };
    let intervals = intervals
        .into_iter()
        .collect::<Result<Vec<_>, QuantityError>>()?;
    IntervalsValidator::new(unit, intervals)
}
