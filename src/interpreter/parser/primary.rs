use std::iter::Peekable;

use crate::{
    ast::{Axis, Node, Terminal, UnaryFunction},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a unary expression.
    ///
    /// Supports prefix negation `-`, which is right-associative: `--x` is
    /// parsed as `-(-x)`. Without a leading operator the function delegates
    /// to [`Self::parse_primary`].
    ///
    /// Grammar:
    /// ```text
    ///     unary := "-" unary
    ///            | primary
    /// ```
    /// # Parameters
    /// - `tokens`: Token iterator providing `(Token, offset)` pairs.
    ///
    /// # Returns
    /// A [`Node::Unary`] or a primary expression.
    pub(in crate::interpreter::parser) fn parse_unary<'a, I>(&self,
                                                             tokens: &mut Peekable<I>)
                                                             -> ParseResult<Node>
        where I: Iterator<Item = &'a (Token, usize)> + Clone
    {
        if let Some((Token::Minus, offset)) = tokens.peek() {
            let offset = *offset;
            tokens.next();
            let operand = self.parse_unary(tokens)?;
            Ok(Node::Unary { func: UnaryFunction::Neg,
                             operand: Box::new(operand),
                             offset })
        } else {
            self.parse_primary(tokens)
        }
    }

    /// Parses a primary (atomic) expression.
    ///
    /// Primary expressions form the base of the grammar and include:
    /// - numeric, boolean and quoted string literals
    /// - parenthesized groups (which may contain nested comma lists)
    /// - function calls `name(args)`
    /// - reserved coordinate and time symbols
    /// - registered custom terminals
    ///
    /// Grammar (simplified):
    /// ```text
    ///     primary := literal
    ///              | "(" list ")"
    ///              | identifier_or_call
    /// ```
    /// # Parameters
    /// - `tokens`: Token iterator positioned at the start of a primary
    ///   expression.
    ///
    /// # Returns
    /// The parsed primary [`Node`] or a `ParseError` on failure.
    pub(in crate::interpreter::parser) fn parse_primary<'a, I>(&self,
                                                               tokens: &mut Peekable<I>)
                                                               -> ParseResult<Node>
        where I: Iterator<Item = &'a (Token, usize)> + Clone
    {
        let peeked = tokens.peek()
                           .ok_or(ParseError::UnexpectedEndOfInput { offset: 0 })?;

        match peeked {
            (Token::Real(..) | Token::Bool(..) | Token::Str(..), _) => parse_literal(tokens),
            (Token::LParen, _) => self.parse_grouping(tokens),
            (Token::Identifier(_), _) => self.parse_identifier_or_call(tokens),
            (tok, offset) => {
                Err(ParseError::UnexpectedToken { token:  format!("{tok:?}"),
                                                  offset: *offset, })
            },
        }
    }

    /// Parses a parenthesized expression or nested list.
    ///
    /// Expected form: `( list )`. The enclosed text may itself contain
    /// commas, producing a nested list node; commas consumed here are no
    /// longer visible at the enclosing depth. Failure to find the closing
    /// parenthesis yields `ParseError::ExpectedClosingParen`.
    ///
    /// Grammar: `grouping := "(" list ")"`
    ///
    /// # Parameters
    /// - `tokens`: Token iterator positioned at `(`.
    ///
    /// # Returns
    /// The inner node as-is (no wrapper node).
    fn parse_grouping<'a, I>(&self, tokens: &mut Peekable<I>) -> ParseResult<Node>
        where I: Iterator<Item = &'a (Token, usize)> + Clone
    {
        let offset = match tokens.next() {
            Some((_, offset)) => *offset,
            None => return Err(ParseError::UnexpectedEndOfInput { offset: 0 }),
        };
        let node = self.parse_list(tokens)?;
        match tokens.next() {
            Some((Token::RParen, _)) => Ok(node),
            _ => Err(ParseError::ExpectedClosingParen { offset }),
        }
    }

    /// Parses an identifier: a function call, a reserved symbol, or a custom
    /// terminal.
    ///
    /// Supported forms:
    ///
    /// - `name(args)`: unary function application; `name` must belong to
    ///   the closed function set, and a multi-item argument list maps the
    ///   function elementwise.
    /// - `x`, `y`, `z`, `t`: reserved coordinate and time symbols.
    /// - `x[0]`, `x[1]`, `x[2]`: indexed coordinate aliases.
    /// - any registered custom-terminal name.
    ///
    /// Classification happens in that order; a bare name that is neither
    /// reserved nor registered fails with `ParseError::UnknownTerminal`.
    ///
    /// # Parameters
    /// - `tokens`: Token iterator positioned at an identifier.
    ///
    /// # Returns
    /// - [`Node::Unary`] if followed by parentheses,
    /// - [`Node::Terminal`] otherwise.
    ///
    /// # Errors
    /// Returns a `ParseError` if:
    /// - a called name is not a known unary function,
    /// - a coordinate index is out of range or malformed,
    /// - a bare name matches no terminal category.
    fn parse_identifier_or_call<'a, I>(&self, tokens: &mut Peekable<I>) -> ParseResult<Node>
        where I: Iterator<Item = &'a (Token, usize)> + Clone
    {
        let (name, offset) = match tokens.next() {
            Some((Token::Identifier(n), offset)) => (n.clone(), *offset),
            Some((tok, offset)) => {
                return Err(ParseError::UnexpectedToken { token:  format!("{tok:?}"),
                                                         offset: *offset, });
            },
            None => {
                return Err(ParseError::UnexpectedEndOfInput { offset: 0 });
            },
        };

        match tokens.peek() {
            Some((Token::LParen, _)) => {
                let Some(func) = UnaryFunction::from_name(&name) else {
                    return Err(ParseError::UnknownFunction { name, offset });
                };
                tokens.next();
                let operand = self.parse_list(tokens)?;
                match tokens.next() {
                    Some((Token::RParen, _)) => Ok(Node::Unary { func,
                                                                 operand: Box::new(operand),
                                                                 offset }),
                    _ => Err(ParseError::ExpectedClosingParen { offset }),
                }
            },

            Some((Token::LBracket, _)) if name == "x" => {
                let axis = parse_coordinate_index(tokens)?;
                Ok(Node::Terminal { terminal: Terminal::Coordinate(axis),
                                    offset })
            },

            _ => {
                let terminal = match name.as_str() {
                    "x" => Terminal::Coordinate(Axis::X),
                    "y" => Terminal::Coordinate(Axis::Y),
                    "z" => Terminal::Coordinate(Axis::Z),
                    "t" => Terminal::Time,
                    _ if self.registry().is_registered(&name) => Terminal::Custom(name),
                    _ => return Err(ParseError::UnknownTerminal { name, offset }),
                };
                Ok(Node::Terminal { terminal, offset })
            },
        }
    }
}

/// Parses an indexed coordinate alias of the form `[n]` after `x`.
///
/// Only the literal indices `0`, `1` and `2` are valid, mapping to the
/// `x`, `y`, and `z` axes respectively.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the index is not an integral literal,
/// - the index is outside `0..=2`,
/// - the closing `]` is missing.
fn parse_coordinate_index<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Axis>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let bracket_offset = match tokens.next() {
        Some((_, offset)) => *offset,
        None => return Err(ParseError::UnexpectedEndOfInput { offset: 0 }),
    };

    let axis = match tokens.next() {
        Some((Token::Real(n), offset)) => {
            if n.fract() != 0.0 || *n < 0.0 {
                return Err(ParseError::UnexpectedToken { token:  n.to_string(),
                                                         offset: *offset, });
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let index = *n as usize;
            match index {
                0 => Axis::X,
                1 => Axis::Y,
                2 => Axis::Z,
                _ => {
                    return Err(ParseError::CoordinateIndexOutOfRange { index,
                                                                       offset: *offset, });
                },
            }
        },
        Some((tok, offset)) => {
            return Err(ParseError::UnexpectedToken { token:  format!("{tok:?}"),
                                                     offset: *offset, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { offset: bracket_offset }),
    };

    match tokens.next() {
        Some((Token::RBracket, _)) => Ok(axis),
        Some((tok, offset)) => {
            Err(ParseError::UnexpectedToken { token:  format!("{tok:?}"),
                                              offset: *offset, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { offset: bracket_offset }),
    }
}

/// Parses a numeric, boolean, or quoted string literal into a terminal node.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Real(n), offset)) => Ok(Node::Terminal { terminal: Terminal::Real(*n),
                                                              offset:   *offset, }),
        Some((Token::Bool(b), offset)) => Ok(Node::Terminal { terminal: Terminal::Bool(*b),
                                                              offset:   *offset, }),
        Some((Token::Str(s), offset)) => {
            Ok(Node::Terminal { terminal: Terminal::Str(s.clone()),
                                offset:   *offset, })
        },
        _ => unreachable!("parse_literal called on a non-literal token"),
    }
}
