use crate::error::ParseError;
use crate::lexer::{Lexer, Token, TokenWithPos};
use crate::tree::{Attribute, Element};

// ── Parser ────────────────────────────────────────────────────────────────

pub struct Parser {
    tokens: Vec<TokenWithPos>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<TokenWithPos>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn current_pos(&self) -> (usize, usize) {
        self.tokens
            .get(self.pos)
            .map(|t| (t.line, t.col))
            .or_else(|| self.tokens.last().map(|t| (t.line, t.col)))
            .unwrap_or((1, 1))
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).map(|t| &t.token).unwrap_or(&Token::Eof)
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens.get(self.pos)
            .map(|t| t.token.clone())
            .unwrap_or(Token::Eof);
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn err(&self, msg: impl Into<String>) -> ParseError {
        let (line, col) = self.current_pos();
        ParseError::new(msg, line, col)
    }

    fn expect_name(&mut self) -> Result<String, ParseError> {
        match self.advance() {
            Token::Name(s) => Ok(s),
            tok => Err(self.err(format!("expected a name, got {:?}", tok))),
        }
    }

    fn expect_token(&mut self, expected: &Token) -> Result<(), ParseError> {
        let got = self.advance();
        if &got == expected {
            Ok(())
        } else {
            Err(self.err(format!("expected {:?}, got {:?}", expected, got)))
        }
    }

    // ── Document ──────────────────────────────────────────────────────────

    pub fn parse_document(&mut self) -> Result<Element, ParseError> {
        self.expect_token(&Token::LAngle)?;
        let root = self.parse_element()?;

        if self.peek() != &Token::Eof {
            return Err(self.err("content after the root element"));
        }

        Ok(root)
    }

    // ── Element ───────────────────────────────────────────────────────────

    /// Parse an element whose opening `<` was already consumed.
    fn parse_element(&mut self) -> Result<Element, ParseError> {
        let mut element = Element::new(self.expect_name()?);

        // Attributes: `name="value"` pairs until the tag ends.
        while let Token::Name(_) = self.peek() {
            let name = self.expect_name()?;
            self.expect_token(&Token::Eq)?;
            let value = match self.advance() {
                Token::Str(s) => s,
                tok => return Err(self.err(format!("expected a quoted value, got {:?}", tok))),
            };
            element.attributes.push(Attribute { name, value });
        }

        match self.advance() {
            Token::SlashRAngle => Ok(element),
            Token::RAngle => {
                self.parse_children(&mut element)?;
                Ok(element)
            }
            tok => Err(self.err(format!("expected '>' or '/>', got {:?}", tok))),
        }
    }

    /// Parse child elements up to and including the matching close tag.
    fn parse_children(&mut self, parent: &mut Element) -> Result<(), ParseError> {
        loop {
            match self.advance() {
                Token::LAngle => parent.children.push(self.parse_element()?),
                Token::LAngleSlash => {
                    let close = self.expect_name()?;
                    if close != parent.name {
                        return Err(self.err(format!(
                            "mismatched closing tag </{}>, expected </{}>",
                            close, parent.name
                        )));
                    }
                    self.expect_token(&Token::RAngle)?;
                    return Ok(());
                }
                Token::Eof => return Err(self.err(format!("unclosed element <{}>", parent.name))),
                tok => return Err(self.err(format!("unexpected {:?} in element content", tok))),
            }
        }
    }
}

// ── Public parse entry point ──────────────────────────────────────────────

/// Parse an `.aqua` document string into its root [`Element`].
pub fn parse_str(src: &str) -> Result<Element, ParseError> {
    let tokens = Lexer::new(src).tokenize()?;
    Parser::new(tokens).parse_document()
}
