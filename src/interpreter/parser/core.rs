use std::iter::Peekable;

use logos::Logos;

use crate::{ast::Node, error::ParseError, interpreter::lexer::Token, registry::TerminalRegistry};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses configuration expressions into immutable trees.
///
/// A parser borrows the terminal registry for its configuration context; any
/// bare name that is neither a literal, a reserved symbol, nor registered is
/// rejected at parse time. The parser itself is stateless across calls, so
/// one instance can parse every entry of a configuration section.
///
/// ## Usage
///
/// ```
/// use fieldexpr::{
///     interpreter::{evaluator::core::Bindings, parser::core::Parser},
///     registry::TerminalRegistry,
/// };
///
/// let registry = TerminalRegistry::new();
/// let tree = Parser::new(&registry).parse("2 + 3 * 4").unwrap();
///
/// let value = tree.evaluate(&Bindings::new()).unwrap();
/// assert_eq!(value.as_real(0).unwrap(), 14.0);
/// ```
pub struct Parser<'r> {
    registry: &'r TerminalRegistry,
}

impl<'r> Parser<'r> {
    /// Creates a parser bound to the given terminal registry.
    #[must_use]
    pub const fn new(registry: &'r TerminalRegistry) -> Self {
        Self { registry }
    }

    /// Returns the terminal registry this parser consults for custom names.
    pub(in crate::interpreter::parser) const fn registry(&self) -> &TerminalRegistry {
        self.registry
    }

    /// Parses one configuration entry into a tree.
    ///
    /// The entry is tokenized and parsed in full: depth-0 commas produce a
    /// `Node::List` of sibling expressions, anything else a single
    /// expression. Leftover tokens after a complete parse are an error, so no
    /// partial tree is ever returned.
    ///
    /// # Errors
    /// Returns a `ParseError` carrying the offending text and its byte offset
    /// for malformed syntax, unknown terminals, or unknown functions.
    ///
    /// ## Example
    /// ```
    /// use fieldexpr::{interpreter::parser::core::Parser, registry::TerminalRegistry};
    ///
    /// let registry = TerminalRegistry::new();
    /// let parser = Parser::new(&registry);
    ///
    /// // Top-level commas split; commas inside calls do not.
    /// assert_eq!(parser.parse("1, 2, 3").unwrap().to_string(), "1, 2, 3");
    /// assert_eq!(parser.parse("1 - 2 - 3").unwrap().to_string(), "((1-2)-3)");
    /// assert!(parser.parse("2 +").is_err());
    /// ```
    pub fn parse(&self, source: &str) -> ParseResult<Node> {
        let tokens = tokenize(source)?;
        let mut tokens = tokens.iter().peekable();

        // Input can only run out at the end of the source, so the exact
        // offset is filled in here rather than at every descent site.
        let node = self.parse_list(&mut tokens).map_err(|err| match err {
                       ParseError::UnexpectedEndOfInput { .. } => {
                           ParseError::UnexpectedEndOfInput { offset: source.len() }
                       },
                       other => other,
                   })?;

        match tokens.next() {
            Some((tok, offset)) => {
                Err(ParseError::UnexpectedTrailingTokens { token:  format!("{tok:?}"),
                                                           offset: *offset, })
            },
            None => Ok(node),
        }
    }

    /// Parses a comma-separated sequence of sibling expressions.
    ///
    /// Commas are only seen here when they occur at the current nesting
    /// depth; commas nested inside parentheses are consumed by the grouping
    /// and call parsers below this level. A single expression without commas
    /// is returned as-is, otherwise the items form a `Node::List`.
    ///
    /// Grammar: `list := expression ("," expression)*`
    ///
    /// # Parameters
    /// - `tokens`: Token iterator providing `(Token, offset)` pairs.
    ///
    /// # Returns
    /// The parsed expression or list node.
    pub(in crate::interpreter::parser) fn parse_list<'a, I>(&self,
                                                            tokens: &mut Peekable<I>)
                                                            -> ParseResult<Node>
        where I: Iterator<Item = &'a (Token, usize)> + Clone
    {
        let first = self.parse_expression(tokens)?;

        if !matches!(tokens.peek(), Some((Token::Comma, _))) {
            return Ok(first);
        }

        let offset = first.offset();
        let mut items = vec![first];

        while let Some((Token::Comma, _)) = tokens.peek() {
            tokens.next();
            items.push(self.parse_expression(tokens)?);
        }

        Ok(Node::List { items, offset })
    }

    /// Parses a full expression.
    ///
    /// This is the entry point for single-expression parsing. It begins at
    /// the lowest-priority level, logical `and`/`or`, and recursively
    /// descends through the priority ladder.
    ///
    /// Grammar: `expression := logical`
    ///
    /// # Parameters
    /// - `tokens`: Token iterator providing `(Token, offset)` pairs.
    ///
    /// # Returns
    /// The parsed expression node.
    pub(in crate::interpreter::parser) fn parse_expression<'a, I>(&self,
                                                                  tokens: &mut Peekable<I>)
                                                                  -> ParseResult<Node>
        where I: Iterator<Item = &'a (Token, usize)> + Clone
    {
        self.parse_logical(tokens)
    }
}

/// Tokenizes a configuration expression into `(Token, offset)` pairs.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` carrying the unrecognized slice and
/// its byte offset.
pub(crate) fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.span().start));
        } else {
            return Err(ParseError::UnexpectedToken { token:  lexer.slice().to_string(),
                                                     offset: lexer.span().start, });
        }
    }

    Ok(tokens)
}
