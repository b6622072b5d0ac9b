use crate::token::{Token, TokenKind};

use super::error::ParseError;

/// Cursor over a scanned token stream.
pub struct Context<'a> {
    items: &'a [Token],
    curr_pos: usize,
}

impl<'a> Context<'a> {
    pub fn new(items: &'a [Token]) -> Self {
        Self { items, curr_pos: 0 }
    }

    pub fn is_at_end(&self) -> bool {
        self.items
            .get(self.curr_pos)
            .map(Token::is_end)
            .unwrap_or(true)
    }

    pub fn advance(&mut self) {
        if !self.is_at_end() {
            self.curr_pos += 1;
        }
    }

    pub fn peek(&self, match_tokens: &'static [TokenKind]) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.items
            .get(self.curr_pos)
            .map(|li| match_tokens.contains(&li.kind))
            .unwrap_or(false)
    }

    /// Consumes the current token if its kind is one of `match_tokens`.
    pub fn match_any(&mut self, match_tokens: &'static [TokenKind]) -> Option<&'a Token> {
        if !self.peek(match_tokens) {
            return None;
        }
        let items = self.items;
        let li = items.get(self.curr_pos);
        self.advance();
        li
    }

    pub fn get_curr(&self) -> Result<&'a Token, ParseError> {
        let items = self.items;
        match items.get(self.curr_pos) {
            Some(li) => Ok(li),
            None => Err(ParseError::Eof(items.last().map(|li| li.line).unwrap_or(1))),
        }
    }

    /// Discards every remaining token up to the end of input.
    pub fn synchronize(&mut self) {
        self.advance();
        while !self.is_at_end() {
            self.advance();
        }
    }
}
