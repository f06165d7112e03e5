use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Node},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses logical expressions.
    ///
    /// Handles left-associative chains of `and` and `or`, which share the
    /// lowest priority level: `a or b and c` parses as `((a or b) and c)`.
    ///
    /// Grammar: `logical := comparison (("and" | "or") comparison)*`
    ///
    /// # Parameters
    /// - `tokens`: Token iterator providing `(Token, offset)` pairs.
    ///
    /// # Returns
    /// A binary expression tree combining comparison-level nodes.
    pub(in crate::interpreter::parser) fn parse_logical<'a, I>(&self,
                                                               tokens: &mut Peekable<I>)
                                                               -> ParseResult<Node>
        where I: Iterator<Item = &'a (Token, usize)> + Clone
    {
        let mut left = self.parse_comparison(tokens)?;
        loop {
            if let Some((token, offset)) = tokens.peek()
               && let Some(op) = token_to_binary_operator(token)
               && matches!(op, BinaryOperator::And | BinaryOperator::Or)
            {
                let offset = *offset;
                tokens.next();
                let right = self.parse_comparison(tokens)?;
                left = Node::Expression { op,
                                          left: Box::new(left),
                                          right: Box::new(right),
                                          offset };
                continue;
            }
            break;
        }
        Ok(left)
    }

    /// Parses relational and equality expressions.
    ///
    /// Handles all comparison operators: `<`, `>`, `<=`, `>=`, `==`, `!=`.
    /// Same-priority chains fold to the left.
    ///
    /// Grammar: `comparison := additive (("<" | ">" | "<=" | ">=" | "==" |
    /// "!=") additive)*`
    ///
    /// # Parameters
    /// - `tokens`: Token iterator providing `(Token, offset)` pairs.
    ///
    /// # Returns
    /// A binary expression tree combining additive-level nodes.
    pub(in crate::interpreter::parser) fn parse_comparison<'a, I>(&self,
                                                                  tokens: &mut Peekable<I>)
                                                                  -> ParseResult<Node>
        where I: Iterator<Item = &'a (Token, usize)> + Clone
    {
        let mut left = self.parse_additive(tokens)?;
        loop {
            if let Some((token, offset)) = tokens.peek()
               && let Some(op) = token_to_binary_operator(token)
               && is_comparison_op(op)
            {
                let offset = *offset;
                tokens.next();
                let right = self.parse_additive(tokens)?;
                left = Node::Expression { op,
                                          left: Box::new(left),
                                          right: Box::new(right),
                                          offset };
                continue;
            }
            break;
        }
        Ok(left)
    }

    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators `+` and `-`.
    ///
    /// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
    ///
    /// # Parameters
    /// - `tokens`: Token iterator providing `(Token, offset)` pairs.
    ///
    /// # Returns
    /// A binary expression tree combining multiplicative-level nodes.
    pub(in crate::interpreter::parser) fn parse_additive<'a, I>(&self,
                                                                tokens: &mut Peekable<I>)
                                                                -> ParseResult<Node>
        where I: Iterator<Item = &'a (Token, usize)> + Clone
    {
        let mut left = self.parse_multiplicative(tokens)?;
        loop {
            if let Some((token, offset)) = tokens.peek()
               && let Some(op) = token_to_binary_operator(token)
               && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
            {
                let offset = *offset;
                tokens.next();
                let right = self.parse_multiplicative(tokens)?;
                left = Node::Expression { op,
                                          left: Box::new(left),
                                          right: Box::new(right),
                                          offset };
                continue;
            }
            break;
        }
        Ok(left)
    }

    /// Parses multiplication and division expressions.
    ///
    /// Handles the left-associative operators `*` and `/`.
    ///
    /// Grammar: `multiplicative := power (("*" | "/") power)*`
    ///
    /// # Parameters
    /// - `tokens`: Token iterator providing `(Token, offset)` pairs.
    ///
    /// # Returns
    /// A binary expression tree combining power-level nodes.
    pub(in crate::interpreter::parser) fn parse_multiplicative<'a, I>(&self,
                                                                      tokens: &mut Peekable<I>)
                                                                      -> ParseResult<Node>
        where I: Iterator<Item = &'a (Token, usize)> + Clone
    {
        let mut left = self.parse_power(tokens)?;
        loop {
            if let Some((token, offset)) = tokens.peek()
               && let Some(op) = token_to_binary_operator(token)
               && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
            {
                let offset = *offset;
                tokens.next();
                let right = self.parse_power(tokens)?;
                left = Node::Expression { op,
                                          left: Box::new(left),
                                          right: Box::new(right),
                                          offset };
                continue;
            }
            break;
        }
        Ok(left)
    }

    /// Parses exponentiation expressions.
    ///
    /// Chained exponentiation folds to the left, matching the
    /// lowest-priority/rightmost-occurrence split rule of the configuration
    /// grammar: `2^3^2` parses as `(2^3)^2` and evaluates to 64.
    ///
    /// Grammar: `power := unary ("^" unary)*`
    ///
    /// # Parameters
    /// - `tokens`: Token iterator providing `(Token, offset)` pairs.
    ///
    /// # Returns
    /// An exponentiation expression tree.
    pub(in crate::interpreter::parser) fn parse_power<'a, I>(&self,
                                                             tokens: &mut Peekable<I>)
                                                             -> ParseResult<Node>
        where I: Iterator<Item = &'a (Token, usize)> + Clone
    {
        let mut left = self.parse_unary(tokens)?;
        while let Some((token, offset)) = tokens.peek() {
            if let Some(op) = token_to_binary_operator(token)
               && matches!(op, BinaryOperator::Pow)
            {
                let offset = *offset;
                tokens.next();
                let right = self.parse_unary(tokens)?;
                left = Node::Expression { op,
                                          left: Box::new(left),
                                          right: Box::new(right),
                                          offset };
                continue;
            }
            break;
        }
        Ok(left)
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary operator
/// (`+`, `-`, `*`, `/`, `^`, comparison operators, and logical operators).
/// Returns `None` for all other tokens.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token corresponds to a binary operator,
/// otherwise `None`.
///
/// # Example
/// ```
/// use fieldexpr::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::And => Some(BinaryOperator::And),
        Token::Or => Some(BinaryOperator::Or),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}

/// Determines whether a binary operator belongs to the comparison class.
///
/// Supported categories:
/// - Strict relations: `<`, `>`
/// - Non-strict relations: `<=`, `>=`
/// - Equality: `==`, `!=`
///
/// # Example
/// ```
/// use fieldexpr::{ast::BinaryOperator, interpreter::parser::binary::is_comparison_op};
///
/// assert!(is_comparison_op(BinaryOperator::Less));
/// assert!(!is_comparison_op(BinaryOperator::Add));
/// ```
#[must_use]
pub const fn is_comparison_op(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::Less
             | BinaryOperator::Greater
             | BinaryOperator::LessEqual
             | BinaryOperator::GreaterEqual
             | BinaryOperator::Equal
             | BinaryOperator::NotEqual)
}
