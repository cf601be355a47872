//! Grammar for type expressions.
//!
//! ```text
//! type       := name ('.' name)* arguments? ('[' ']')*
//! arguments  := '<' argument (',' argument)* '>'
//! argument   := '?' (('extends' | 'super') bounds)? | type
//! parameter  := argument | name ('extends' bounds)?
//! bounds     := type ('&' type)*
//! ```
//!
//! Whitespace is allowed between tokens. Parsing operates on characters
//! directly; there is no separate lexing pass.

use log::{debug, trace};
use winnow::{
    Parser as _,
    ascii::{multispace0, multispace1},
    combinator::{alt, cut_err, delimited, not, opt, peek, preceded, repeat, separated, terminated},
    error::{ContextError, ErrMode, ModalResult},
    stream::{LocatingSlice, Location},
    token::{literal, one_of, take_while},
};

use stencil_core::model::{BoundType, Generic, Type};

use crate::{
    error::{Diagnostic, ErrorCode, ParseError},
    span::Span,
};

/// What the parser expected when it failed, attached to winnow errors via
/// `.context()`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Expected {
    what: &'static str,
    help: Option<&'static str>,
    /// Offset of the `<` that opened the enclosing argument list.
    opened_at: Option<usize>,
}

impl Expected {
    const TYPE_NAME: Self = Self {
        what: "a type name",
        help: None,
        opened_at: None,
    };

    const CLOSING_BRACKET: Self = Self {
        what: "`]`",
        help: Some("array dimensions are written as `[]`"),
        opened_at: None,
    };

    const BOUND: Self = Self {
        what: "a bound type",
        help: Some("bounds are written as `? extends Number` or `T extends A & B`"),
        opened_at: None,
    };

    fn closing_angle(opened_at: usize) -> Self {
        Self {
            what: "`,` or `>`",
            help: Some("close the generic argument list with `>`"),
            opened_at: Some(opened_at),
        }
    }
}

type Input<'a> = LocatingSlice<&'a str>;
type IResult<O> = ModalResult<O, ContextError<Expected>>;

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

fn identifier<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    (
        one_of(is_identifier_start),
        take_while(0.., is_identifier_char),
    )
        .take()
        .parse_next(input)
}

/// `java.util.List`, or a single segment such as `int`.
fn qualified_name<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    separated::<_, _, (), _, _, _, _>(1.., identifier, '.')
        .take()
        .context(Expected::TYPE_NAME)
        .parse_next(input)
}

/// `extends` or `super`, not followed by further identifier characters.
fn bound_keyword(input: &mut Input<'_>) -> IResult<BoundType> {
    terminated(
        alt((
            literal("extends").value(BoundType::Extends),
            literal("super").value(BoundType::Super),
        )),
        peek(not(one_of(is_identifier_char))),
    )
    .parse_next(input)
}

fn extends_keyword(input: &mut Input<'_>) -> IResult<()> {
    bound_keyword
        .verify(|bound: &BoundType| *bound == BoundType::Extends)
        .void()
        .parse_next(input)
}

fn bounds(input: &mut Input<'_>) -> IResult<Vec<Type>> {
    separated(1.., type_expr, (multispace0, '&', multispace0)).parse_next(input)
}

fn array_suffix(input: &mut Input<'_>) -> IResult<()> {
    (
        '[',
        cut_err(preceded(multispace0, ']')).context(Expected::CLOSING_BRACKET),
    )
        .void()
        .parse_next(input)
}

fn generic_arguments(input: &mut Input<'_>) -> IResult<Vec<Generic>> {
    let opened_at = input.current_token_start();
    '<'.parse_next(input)?;

    cut_err(terminated(
        separated(1.., delimited(multispace0, type_argument, multispace0), ','),
        '>'.context(Expected::closing_angle(opened_at)),
    ))
    .parse_next(input)
}

/// A full type reference: name, optional arguments, array dimensions.
fn type_expr(input: &mut Input<'_>) -> IResult<Type> {
    let name = qualified_name.parse_next(input)?;
    let arguments = opt(preceded(multispace0, generic_arguments)).parse_next(input)?;
    let dimension = repeat(0.., preceded(multispace0, array_suffix))
        .map(|dimensions: Vec<()>| dimensions.len())
        .parse_next(input)?;

    let mut ty = Type::of(name).with_array_dimension(dimension);
    for generic in arguments.into_iter().flatten() {
        ty.add_generic(generic);
    }
    Ok(ty)
}

/// `?`, `? extends A & B` or `? super A`.
fn wildcard(input: &mut Input<'_>) -> IResult<Generic> {
    '?'.parse_next(input)?;

    let Some(bound_type) = opt(preceded(multispace1, bound_keyword)).parse_next(input)? else {
        return Ok(Generic::wildcard());
    };

    let upper_bounds = cut_err(preceded(multispace1, bounds))
        .context(Expected::BOUND)
        .parse_next(input)?;

    Ok(upper_bounds.into_iter().fold(
        Generic::wildcard().with_bound_type(bound_type),
        Generic::with_upper_bound,
    ))
}

fn type_argument(input: &mut Input<'_>) -> IResult<Generic> {
    alt((wildcard, type_expr.map(Generic::of_type))).parse_next(input)
}

/// A declared type parameter: `T` or `T extends A & B`.
///
/// Backtracks when the name continues as a type reference (`T.U`, `T<U>`,
/// `T[]`) so the caller can parse it as a type argument instead.
fn named_parameter(input: &mut Input<'_>) -> IResult<Generic> {
    let name = identifier.parse_next(input)?;
    peek(not(preceded(multispace0, one_of(['.', '<', '['])))).parse_next(input)?;

    let generic = Generic::of(name);
    if opt(preceded(multispace1, extends_keyword))
        .parse_next(input)?
        .is_none()
    {
        return Ok(generic);
    }

    let upper_bounds = cut_err(preceded(multispace1, bounds))
        .context(Expected::BOUND)
        .parse_next(input)?;

    Ok(upper_bounds
        .into_iter()
        .fold(generic, Generic::with_upper_bound))
}

fn type_parameter(input: &mut Input<'_>) -> IResult<Generic> {
    alt((wildcard, named_parameter, type_expr.map(Generic::of_type))).parse_next(input)
}

/// Parse a type reference such as `java.util.Map<K, List<? extends V>>[]`.
pub(crate) fn parse_type(source: &str) -> Result<Type, ParseError> {
    trace!(source; "Parsing type expression");
    parse_complete(source, "type expression", type_expr)
}

/// Parse a generic parameter or argument such as `T extends Comparable<T>`.
pub(crate) fn parse_generic(source: &str) -> Result<Generic, ParseError> {
    trace!(source; "Parsing generic expression");
    parse_complete(source, "generic expression", type_parameter)
}

/// Run `parser` over the whole of `source`, allowing surrounding whitespace.
fn parse_complete<O>(
    source: &str,
    what: &'static str,
    parser: impl FnMut(&mut Input<'_>) -> IResult<O>,
) -> Result<O, ParseError> {
    if source.trim().is_empty() {
        return Err(Diagnostic::error(format!("empty {what}"))
            .with_code(ErrorCode::E001)
            .with_label(Span::new(0..source.len()), ErrorCode::E001.description())
            .into());
    }

    let mut input = LocatingSlice::new(source);
    let diagnostic = match delimited(multispace0, parser, multispace0).parse_next(&mut input) {
        Ok(value) => {
            let offset = input.current_token_start();
            if offset >= source.len() {
                return Ok(value);
            }
            Diagnostic::error(format!("unexpected input after {what}"))
                .with_code(ErrorCode::E102)
                .with_label(Span::new(offset..source.len()), "not part of the expression")
                .with_help("remove the trailing input")
        }
        Err(err) => convert_error(err, input.current_token_start(), source),
    };

    debug!(source, code:? = diagnostic.code(); "Rejected {what}");
    Err(diagnostic.into())
}

/// Convert a winnow error at `position` into a diagnostic.
///
/// The innermost context names what was expected; help text and the
/// opening `<` of an unclosed argument list are taken from whichever
/// context carries them.
fn convert_error(err: ErrMode<ContextError<Expected>>, position: usize, source: &str) -> Diagnostic {
    let context = match err {
        ErrMode::Backtrack(ctx) | ErrMode::Cut(ctx) => ctx,
        ErrMode::Incomplete(_) => ContextError::new(),
    };

    let found = source.get(position..).and_then(|rest| rest.chars().next());
    let expected = context.context().next().map(|expected| expected.what);

    let mut diagnostic = match (found, expected) {
        (None, expected) => {
            Diagnostic::error(format!("expected {}", expected.unwrap_or("more input")))
                .with_code(ErrorCode::E101)
                .with_label(Span::new(position..position), "input ends here")
        }
        (Some(c), Some(expected)) => Diagnostic::error(format!("expected {expected}"))
            .with_code(ErrorCode::E100)
            .with_label(
                Span::new(position..position + c.len_utf8()),
                format!("unexpected `{c}`"),
            ),
        (Some(c), None) => Diagnostic::error(format!("unexpected character `{c}`"))
            .with_code(ErrorCode::E002)
            .with_label(
                Span::new(position..position + c.len_utf8()),
                ErrorCode::E002.description(),
            ),
    };

    if let Some(opened_at) = context.context().find_map(|expected| expected.opened_at) {
        diagnostic = diagnostic.with_secondary_label(
            Span::new(opened_at..opened_at + 1),
            "generic argument list opened here",
        );
    }
    if let Some(help) = context.context().find_map(|expected| expected.help) {
        diagnostic = diagnostic.with_help(help);
    }
    diagnostic
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    // =========================================================================
    // Strategies
    // =========================================================================

    fn identifier_strategy() -> impl Strategy<Value = String> {
        "[A-Za-z_$][A-Za-z0-9_$]{0,8}".prop_filter("bound keywords are reserved", |name| {
            name != "extends" && name != "super"
        })
    }

    fn qualified_name_strategy() -> impl Strategy<Value = String> {
        prop::collection::vec(identifier_strategy(), 1..4).prop_map(|segments| segments.join("."))
    }

    fn padding_strategy() -> impl Strategy<Value = String> {
        "[ \t\n]{0,3}"
    }

    // =========================================================================
    // Property checks
    // =========================================================================

    fn check_qualified_names_parse(name: &str) -> Result<(), TestCaseError> {
        let ty = parse_type(name).map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert_eq!(ty.name(), name);
        prop_assert!(ty.generics().is_empty());
        prop_assert_eq!(ty.array_dimension(), 0);
        Ok(())
    }

    fn check_padding_is_ignored(
        name: &str,
        before: &str,
        after: &str,
        dimension: usize,
    ) -> Result<(), TestCaseError> {
        let suffix = "[]".repeat(dimension);
        let padded = format!("{before}{name}<{after}{name}{before}>{suffix}{after}");
        let compact = format!("{name}<{name}>{suffix}");

        let padded = parse_type(&padded).map_err(|err| TestCaseError::fail(err.to_string()))?;
        let compact = parse_type(&compact).map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert_eq!(padded.array_dimension(), dimension);
        prop_assert_eq!(padded, compact);
        Ok(())
    }

    fn check_truncated_arguments_fail(name: &str) -> Result<(), TestCaseError> {
        let source = format!("{name}<{name}");
        let err = parse_type(&source).expect_err("unclosed argument list must not parse");
        prop_assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E101));
        Ok(())
    }

    // =========================================================================
    // Proptest wrappers
    // =========================================================================

    proptest! {
        #[test]
        fn qualified_names_parse(name in qualified_name_strategy()) {
            check_qualified_names_parse(&name)?;
        }

        #[test]
        fn padding_is_ignored(
            name in qualified_name_strategy(),
            before in padding_strategy(),
            after in padding_strategy(),
            dimension in 0usize..3,
        ) {
            check_padding_is_ignored(&name, &before, &after, dimension)?;
        }

        #[test]
        fn truncated_arguments_fail(name in qualified_name_strategy()) {
            check_truncated_arguments_fail(&name)?;
        }
    }
}
