//! Parser for textual filter expressions.
//!
//! Turns strings like `color=white AND size=huge` into a specification
//! tree over [`Item`]s.
//!
//! ## Grammar
//! ```text
//! expr      := and_expr ( "OR" and_expr )*
//! and_expr  := primary ( "AND" primary )*
//! primary   := "(" expr ")" | predicate
//! predicate := attribute ( "=" | "==" ) value
//! attribute := "color" | "size" | "name"
//! value     := word | "quoted string"
//! ```
//!
//! Keywords and attribute names are case-insensitive. AND binds tighter
//! than OR and both are left-associative. Every error carries the byte
//! offset of the token that caused it.

use crate::error::{Result, SpecError};
use crate::specs::{
    ColorSpecification, CombinationSpecification, NameSpecification, Operator,
    SizeSpecification,
};
use crate::traits::Specification;
use catalog::{Color, Item, Size};

type ItemSpec = Box<dyn Specification<Item>>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum TokenKind {
    LParen,
    RParen,
    Equals,
    And,
    Or,
    Word(String),
    Quoted(String),
    End,
}

impl TokenKind {
    fn label(&self) -> String {
        match self {
            TokenKind::LParen => "'('".to_string(),
            TokenKind::RParen => "')'".to_string(),
            TokenKind::Equals => "'='".to_string(),
            TokenKind::And => "AND".to_string(),
            TokenKind::Or => "OR".to_string(),
            TokenKind::Word(word) => format!("'{word}'"),
            TokenKind::Quoted(text) => format!("\"{text}\""),
            TokenKind::End => "end of input".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
struct Token {
    kind: TokenKind,
    position: usize,
}

fn parse_error(position: usize, message: impl Into<String>) -> SpecError {
    SpecError::Parse {
        position,
        message: message.into(),
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

/// Split the input into tokens, always ending with `TokenKind::End`.
fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(position, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        let kind = match c {
            '(' => {
                chars.next();
                TokenKind::LParen
            }
            ')' => {
                chars.next();
                TokenKind::RParen
            }
            '=' => {
                chars.next();
                // "==" is accepted as a synonym
                if let Some(&(_, '=')) = chars.peek() {
                    chars.next();
                }
                TokenKind::Equals
            }
            '"' => {
                chars.next();
                let mut text = String::new();
                let mut closed = false;
                while let Some((_, c)) = chars.next() {
                    match c {
                        '"' => {
                            closed = true;
                            break;
                        }
                        '\\' => match chars.next() {
                            Some((_, escaped)) => text.push(escaped),
                            None => break,
                        },
                        other => text.push(other),
                    }
                }
                if !closed {
                    return Err(parse_error(position, "unterminated quoted string"));
                }
                TokenKind::Quoted(text)
            }
            c if is_word_char(c) => {
                let mut word = String::new();
                while let Some(&(_, c)) = chars.peek() {
                    if !is_word_char(c) {
                        break;
                    }
                    word.push(c);
                    chars.next();
                }
                if word.eq_ignore_ascii_case("and") {
                    TokenKind::And
                } else if word.eq_ignore_ascii_case("or") {
                    TokenKind::Or
                } else {
                    TokenKind::Word(word)
                }
            }
            other => {
                return Err(parse_error(
                    position,
                    format!("unexpected character '{other}'"),
                ));
            }
        };
        tokens.push(Token { kind, position });
    }

    tokens.push(Token {
        kind: TokenKind::End,
        position: input.len(),
    });
    Ok(tokens)
}

/// Deepest accepted nesting, counting both parentheses and AND/OR levels.
/// Evaluating, describing and dropping a specification all recurse once
/// per level.
pub const MAX_NESTING: usize = 256;

/// A parsed subtree and the height of its AND/OR tree
type Parsed = (ItemSpec, usize);

struct Parser {
    tokens: Vec<Token>,
    cursor: usize,
    /// Currently open parentheses
    open_parens: usize,
}

impl Parser {
    fn peek(&self) -> &Token {
        // tokenize() guarantees a trailing End token
        &self.tokens[self.cursor.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if token.kind != TokenKind::End {
            self.cursor += 1;
        }
        token
    }

    fn combine(left: Parsed, right: Parsed, operator: Operator, position: usize) -> Result<Parsed> {
        let height = left.1.max(right.1) + 1;
        if height > MAX_NESTING {
            return Err(parse_error(position, "expression nested too deeply"));
        }
        let spec = CombinationSpecification::from_boxed(left.0, right.0, operator);
        Ok((Box::new(spec), height))
    }

    fn parse_or(&mut self) -> Result<Parsed> {
        let mut left = self.parse_and()?;
        while self.peek().kind == TokenKind::Or {
            let position = self.advance().position;
            let right = self.parse_and()?;
            left = Self::combine(left, right, Operator::Or, position)?;
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Parsed> {
        let mut left = self.parse_primary()?;
        while self.peek().kind == TokenKind::And {
            let position = self.advance().position;
            let right = self.parse_primary()?;
            left = Self::combine(left, right, Operator::And, position)?;
        }
        Ok(left)
    }

    fn parse_primary(&mut self) -> Result<Parsed> {
        let token = self.advance();
        match token.kind {
            TokenKind::LParen => {
                if self.open_parens >= MAX_NESTING {
                    return Err(parse_error(token.position, "expression nested too deeply"));
                }
                self.open_parens += 1;
                let inner = self.parse_or()?;
                self.open_parens -= 1;

                let close = self.advance();
                if close.kind != TokenKind::RParen {
                    return Err(parse_error(
                        close.position,
                        format!("expected ')' but found {}", close.kind.label()),
                    ));
                }
                Ok(inner)
            }
            TokenKind::Word(attribute) => {
                let spec = self.parse_predicate(&attribute, token.position)?;
                Ok((spec, 0))
            }
            other => Err(parse_error(
                token.position,
                format!("expected a predicate or '(' but found {}", other.label()),
            )),
        }
    }

    fn parse_predicate(&mut self, attribute: &str, attribute_position: usize) -> Result<ItemSpec> {
        let equals = self.advance();
        if equals.kind != TokenKind::Equals {
            return Err(parse_error(
                equals.position,
                format!("expected '=' after '{attribute}' but found {}", equals.kind.label()),
            ));
        }

        let value_token = self.advance();
        let value = match value_token.kind {
            TokenKind::Word(value) | TokenKind::Quoted(value) => value,
            other => {
                return Err(parse_error(
                    value_token.position,
                    format!("expected a value for '{attribute}' but found {}", other.label()),
                ));
            }
        };
        let invalid_value =
            |err: catalog::CatalogError| parse_error(value_token.position, err.to_string());

        match attribute.to_ascii_lowercase().as_str() {
            "color" => {
                let color: Color = value.parse().map_err(invalid_value)?;
                Ok(Box::new(ColorSpecification::new(color)))
            }
            "size" => {
                let size: Size = value.parse().map_err(invalid_value)?;
                Ok(Box::new(SizeSpecification::new(size)))
            }
            "name" => Ok(Box::new(NameSpecification::new(value))),
            _ => Err(parse_error(
                attribute_position,
                format!("unknown attribute '{attribute}' (expected color, size or name)"),
            )),
        }
    }
}

/// Parse a filter expression into a specification over items.
///
/// # Returns
/// * `Ok(spec)` - The whole input formed one valid expression
/// * `Err(SpecError::Parse)` - Anything else, including empty input
pub fn parse_specification(input: &str) -> Result<Box<dyn Specification<Item>>> {
    let tokens = tokenize(input)?;
    let mut parser = Parser {
        tokens,
        cursor: 0,
        open_parens: 0,
    };

    let (spec, _) = parser.parse_or()?;
    let trailing = parser.peek();
    if trailing.kind != TokenKind::End {
        return Err(parse_error(
            trailing.position,
            format!("unexpected {} after expression", trailing.kind.label()),
        ));
    }
    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::sample_items;

    fn matching_names(expr: &str) -> Vec<String> {
        let spec = parse_specification(expr).unwrap();
        sample_items()
            .into_iter()
            .filter(|item| spec.is_satisfied(item))
            .map(|item| item.name)
            .collect()
    }

    fn error_position(expr: &str) -> usize {
        match parse_specification(expr) {
            Err(SpecError::Parse { position, .. }) => position,
            Err(other) => panic!("unexpected error: {other}"),
            Ok(spec) => panic!("expected failure, parsed {}", spec.describe()),
        }
    }

    #[test]
    fn test_single_predicate() {
        assert_eq!(matching_names("color=green"), ["Apple", "Tree"]);
        assert_eq!(matching_names("size == huge"), ["House", "Truck"]);
        assert_eq!(matching_names("name=Truck"), ["Truck"]);
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        assert_eq!(
            matching_names("COLOR=White and Size=HUGE"),
            ["House", "Truck"]
        );
        assert_eq!(
            matching_names("color=green Or name=House"),
            ["Apple", "Tree", "House"]
        );
    }

    #[test]
    fn test_and_binds_tighter_than_or() {
        // name=Apple OR (color=white AND size=huge)
        assert_eq!(
            matching_names("name=Apple OR color=white AND size=huge"),
            ["Apple", "House", "Truck"]
        );
        // (name=Apple OR color=white) AND size=huge
        assert_eq!(
            matching_names("(name=Apple OR color=white) AND size=huge"),
            ["House", "Truck"]
        );
    }

    #[test]
    fn test_describe_reparses() {
        let spec = parse_specification("name=Apple OR color=white AND size=huge").unwrap();
        assert_eq!(
            spec.describe(),
            "(name=Apple OR (color=white AND size=huge))"
        );

        let reparsed = parse_specification(&spec.describe()).unwrap();
        assert_eq!(reparsed.describe(), spec.describe());
    }

    #[test]
    fn test_quoted_name() {
        let spec = parse_specification(r#"name="Fire \"Red\" Truck""#).unwrap();
        let item = Item::new(r#"Fire "Red" Truck"#, Color::Red, Size::Huge);
        assert!(spec.is_satisfied(&item));
    }

    #[test]
    fn test_error_positions() {
        assert_eq!(error_position(""), 0);
        assert_eq!(error_position("   "), 3);
        assert_eq!(error_position("weight=10"), 0);
        assert_eq!(error_position("color=purple"), 6);
        assert_eq!(error_position("color green"), 6);
        assert_eq!(error_position("color=green AND"), 15);
        assert_eq!(error_position("(color=green"), 12);
        assert_eq!(error_position("color=green)"), 11);
        assert_eq!(error_position("color=green size=huge"), 12);
        assert_eq!(error_position("color=green & size=huge"), 12);
        assert_eq!(error_position(r#"name="open"#), 5);
    }

    fn error_message(expr: &str) -> String {
        match parse_specification(expr) {
            Err(SpecError::Parse { message, .. }) => message,
            Err(other) => panic!("unexpected error: {other}"),
            Ok(spec) => panic!("expected failure, parsed {}", spec.describe()),
        }
    }

    #[test]
    fn test_parentheses_at_limit() {
        let expr = format!("{}color=green{}", "(".repeat(MAX_NESTING), ")".repeat(MAX_NESTING));
        assert_eq!(matching_names(&expr), ["Apple", "Tree"]);
    }

    #[test]
    fn test_deep_parentheses_rejected() {
        let depth = 5000;
        let expr = format!("{}color=green{}", "(".repeat(depth), ")".repeat(depth));

        assert_eq!(error_message(&expr), "expression nested too deeply");
        assert_eq!(error_position(&expr), MAX_NESTING);
    }

    #[test]
    fn test_unbalanced_open_parentheses_rejected() {
        let expr = "(".repeat(20_000);
        assert_eq!(error_message(&expr), "expression nested too deeply");
    }

    #[test]
    fn test_long_chains_rejected() {
        let terms = vec!["color=green"; 10_000];

        let or_chain = terms.join(" OR ");
        assert_eq!(error_message(&or_chain), "expression nested too deeply");

        let and_chain = terms.join(" AND ");
        assert_eq!(error_message(&and_chain), "expression nested too deeply");
    }

    #[test]
    fn test_chain_at_limit() {
        let expr = vec!["size=huge"; MAX_NESTING + 1].join(" or ");
        assert_eq!(matching_names(&expr), ["House", "Truck"]);
    }

    #[test]
    fn test_invalid_value_message() {
        match parse_specification("size=gigantic") {
            Err(SpecError::Parse { message, .. }) => {
                assert_eq!(message, "Invalid value for size: gigantic");
            }
            _ => panic!("expected parse error"),
        }
    }
}
