//! CSS syntax parser using the `cssparser` crate.
//!
//! Theme stylesheets use CSS rule syntax with dotted property names:
//!
//! ```css
//! Scale, Scrollbar { Slider.Length: 20px; Slider.Color: #6e6e6e; }
//! Scale#volume:hover { Slider.Color: rgb(140, 140, 140); }
//! ```

use cssparser::{Delimiter, ParseError as CssParseError, ParseErrorKind, Parser, ParserInput, Token};
use trellis_render::Color;

use crate::logging::targets;
use crate::rules::{Declaration, StyleRule};
use crate::selector::{PseudoClass, Selector, TypeSelector};
use crate::value::PropertyValue;
use crate::{Error, Result};

type CssResult<'i, T> = std::result::Result<T, CssParseError<'i, Error>>;

/// Parse a CSS stylesheet string into a list of style rules.
///
/// Rules that fail to parse are skipped with a warning logged, and so are
/// single declarations inside an otherwise valid rule. A selector list such
/// as `A, B { .. }` produces one rule per selector, all sharing the same
/// source order.
///
/// # Example
///
/// ```
/// use trellis_style::parser::parse_css;
///
/// let rules = parse_css("Scale { Slider.Length: 20px; } Label { Color: red; }").unwrap();
/// assert_eq!(rules.len(), 2);
/// ```
pub fn parse_css(css: &str) -> Result<Vec<StyleRule>> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut rules = vec![];
    let mut order = 0u32;

    loop {
        parser.skip_whitespace();

        if parser.is_exhausted() {
            break;
        }

        match parse_rule(&mut parser, order) {
            Ok(parsed) => {
                rules.extend(parsed);
                order += 1;
            }
            Err(e) => {
                tracing::warn!(target: targets::PARSER, "skipping rule: {e}");
                skip_to_next_rule(&mut parser);
            }
        }
    }

    tracing::debug!(target: targets::PARSER, rule_count = rules.len(), "parsed stylesheet");
    Ok(rules)
}

/// Parse a single CSS rule: selector-list { declarations }
fn parse_rule(parser: &mut Parser<'_, '_>, order: u32) -> Result<Vec<StyleRule>> {
    let selectors = parser
        .parse_until_before(Delimiter::CurlyBracketBlock, |p| {
            p.parse_comma_separated(|p| parse_selector(p))
        })
        .map_err(into_error)?;

    let location = parser.current_source_location();
    match parser.next().cloned() {
        Ok(Token::CurlyBracketBlock) => {}
        _ => {
            return Err(Error::parse(
                "expected '{' after selector",
                location.line + 1,
                location.column,
            ));
        }
    }

    let declarations = parser
        .parse_nested_block(|p| parse_declarations(p))
        .map_err(into_error)?;

    Ok(selectors
        .into_iter()
        .map(|selector| StyleRule::new(selector, declarations.clone(), order))
        .collect())
}

/// Parse a compound selector such as `Scale#volume:hover`.
///
/// Whitespace ends the selector, so descendant selectors are rejected by the
/// caller's exhaustion check.
fn parse_selector<'i>(parser: &mut Parser<'i, '_>) -> CssResult<'i, Selector> {
    let mut selector = Selector::default();
    parser.skip_whitespace();

    loop {
        let state = parser.state();
        let token = match parser.next_including_whitespace() {
            Ok(t) => t.clone(),
            Err(_) => break,
        };

        match token {
            Token::Ident(name) if selector.is_empty() => {
                selector.type_selector = Some(TypeSelector::Type(name.to_string()));
            }
            Token::Delim('*') if selector.is_empty() => {
                selector.type_selector = Some(TypeSelector::Universal);
            }
            Token::IDHash(id) if selector.id.is_none() && selector.pseudo_classes.is_empty() => {
                selector.id = Some(id.to_string());
            }
            Token::Colon => {
                let name = parser.expect_ident()?.clone();
                let pseudo = PseudoClass::from_name(&name).ok_or_else(|| {
                    parser.new_custom_error(Error::invalid_selector(
                        format!("{selector}:{name}"),
                        "unknown pseudo-class",
                    ))
                })?;
                selector.pseudo_classes.push(pseudo);
            }
            Token::WhiteSpace(_) => {
                parser.reset(&state);
                break;
            }
            other => {
                return Err(parser.new_custom_error(Error::invalid_selector(
                    selector.to_string(),
                    format!("unexpected token {other:?}"),
                )));
            }
        }
    }

    if selector.is_empty() {
        return Err(parser.new_custom_error(Error::invalid_selector("", "empty selector")));
    }

    Ok(selector)
}

/// Parse the declarations of one rule block.
fn parse_declarations<'i>(parser: &mut Parser<'i, '_>) -> CssResult<'i, Vec<Declaration>> {
    let mut declarations = vec![];

    loop {
        parser.skip_whitespace();

        if parser.is_exhausted() {
            break;
        }

        match parser.try_parse(|p| parse_declaration(p)) {
            Ok(declaration) => declarations.push(declaration),
            Err(e) => {
                tracing::warn!(target: targets::PARSER, "skipping declaration: {}", into_error(e));
                skip_declaration(parser);
            }
        }
    }

    Ok(declarations)
}

/// Parse `Dotted.Name: value;`.
fn parse_declaration<'i>(parser: &mut Parser<'i, '_>) -> CssResult<'i, Declaration> {
    let name = parse_property_name(parser)?;
    parser.expect_colon()?;
    let value = parse_value(parser, &name)?;

    if !parser.is_exhausted() {
        parser.expect_semicolon()?;
    }

    Ok(Declaration::new(name, value))
}

/// Parse a property name made of identifiers joined by `.` with no whitespace.
fn parse_property_name<'i>(parser: &mut Parser<'i, '_>) -> CssResult<'i, String> {
    let mut name = parser.expect_ident()?.to_string();

    loop {
        let state = parser.state();
        match parser.next_including_whitespace().cloned() {
            Ok(Token::Delim('.')) => {}
            _ => {
                parser.reset(&state);
                break;
            }
        }

        match parser.next_including_whitespace().cloned() {
            Ok(Token::Ident(part)) => {
                name.push('.');
                name.push_str(&part);
            }
            _ => {
                return Err(parser.new_custom_error(Error::invalid_value(
                    format!("{name}."),
                    "expected a name after '.'",
                )));
            }
        }
    }

    Ok(name)
}

/// Parse a single property value.
fn parse_value<'i>(parser: &mut Parser<'i, '_>, name: &str) -> CssResult<'i, PropertyValue> {
    let token = parser.next()?.clone();

    match token {
        Token::Number { value, .. } => Ok(PropertyValue::Number(value)),
        Token::Dimension { value, unit, .. } if unit.eq_ignore_ascii_case("px") => {
            Ok(PropertyValue::Number(value))
        }
        Token::Hash(hex) | Token::IDHash(hex) => Color::from_hex(&hex)
            .map(PropertyValue::Color)
            .ok_or_else(|| {
                parser.new_custom_error(Error::invalid_value(name, format!("invalid colour #{hex}")))
            }),
        Token::Function(function)
            if function.eq_ignore_ascii_case("rgb") || function.eq_ignore_ascii_case("rgba") =>
        {
            let (r, g, b, a) = parser.parse_nested_block(|p| {
                let r = parse_color_component(p)?;
                p.expect_comma()?;
                let g = parse_color_component(p)?;
                p.expect_comma()?;
                let b = parse_color_component(p)?;
                let a = if p.try_parse(|p| p.expect_comma()).is_ok() {
                    parse_alpha_component(p)?
                } else {
                    1.0
                };
                Ok::<_, CssParseError<'i, Error>>((r, g, b, a))
            })?;
            Ok(PropertyValue::Color(Color::from_rgba(r, g, b, a)))
        }
        Token::Ident(ident) => Ok(PropertyValue::Ident(ident.to_string())),
        Token::QuotedString(s) => Ok(PropertyValue::Str(s.to_string())),
        other => Err(parser.new_custom_error(Error::invalid_value(
            name,
            format!("unexpected token {other:?}"),
        ))),
    }
}

fn parse_color_component<'i>(parser: &mut Parser<'i, '_>) -> CssResult<'i, f32> {
    match parser.next()?.clone() {
        Token::Number { value, .. } => Ok((value / 255.0).clamp(0.0, 1.0)),
        Token::Percentage { unit_value, .. } => Ok(unit_value.clamp(0.0, 1.0)),
        other => Err(parser.new_unexpected_token_error(other)),
    }
}

fn parse_alpha_component<'i>(parser: &mut Parser<'i, '_>) -> CssResult<'i, f32> {
    match parser.next()?.clone() {
        Token::Number { value, .. } => Ok(value.clamp(0.0, 1.0)),
        Token::Percentage { unit_value, .. } => Ok(unit_value.clamp(0.0, 1.0)),
        other => Err(parser.new_unexpected_token_error(other)),
    }
}

/// Convert a `cssparser` error into the crate error, keeping the location.
fn into_error(err: CssParseError<'_, Error>) -> Error {
    let line = err.location.line + 1;
    let column = err.location.column;
    match err.kind {
        ParseErrorKind::Custom(error) => error,
        ParseErrorKind::Basic(kind) => Error::parse(format!("{kind:?}"), line, column),
    }
}

/// Skip to the next rule (error recovery).
fn skip_to_next_rule(parser: &mut Parser<'_, '_>) {
    loop {
        match parser.next() {
            Ok(Token::CurlyBracketBlock) => {
                // Skip block contents
                let _ = parser.parse_nested_block(|p| {
                    while !p.is_exhausted() {
                        let _ = p.next();
                    }
                    Ok::<_, CssParseError<'_, ()>>(())
                });
                return;
            }
            Ok(Token::CloseCurlyBracket) | Err(_) => return,
            _ => {}
        }
    }
}

/// Skip to the end of the current declaration (error recovery).
fn skip_declaration(parser: &mut Parser<'_, '_>) {
    loop {
        match parser.next() {
            Ok(Token::Semicolon) | Err(_) => return,
            _ => {}
        }
    }
}
