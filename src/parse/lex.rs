use log::{debug, warn};
use phf::phf_map;

use super::error::ParseError;
use crate::report::{Diagnostic, Reporter};
use crate::span::Span;
use crate::token::{Token, TokenKind};

static SINGLE_CHAR_TOKENS: phf::Map<char, TokenKind> = phf_map! {
    '+' => TokenKind::Plus,
    '-' => TokenKind::Minus,
    '*' => TokenKind::Star,
};

/// Scans `input` into tokens ending with exactly one end-of-input token.
///
/// Characters that start no token are reported and skipped, so a single bad
/// character never stops the scan.
pub fn lex(input: &str, reporter: &mut dyn Reporter) -> Vec<Token> {
    let tokens = Scanner::new(input).scan(reporter);
    for token in &tokens {
        debug!("{} - {:?}: {:?}", token.span, token.kind, token.lexeme);
    }
    tokens
}

struct Scanner<'a> {
    input: &'a str,
    chars: Vec<(usize, char)>,
    start: usize,
    current: usize,
    line: usize,
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Scanner {
            input,
            chars: input.char_indices().collect(),
            start: 0,
            current: 0,
            line: 1,
            tokens: vec![],
        }
    }

    fn scan(mut self, reporter: &mut dyn Reporter) -> Vec<Token> {
        loop {
            self.start = self.current;
            let Some(c) = self.advance() else {
                break;
            };
            self.scan_token(c, reporter);
        }

        let end = Token::end_of_input(self.line, self.input.len());
        self.tokens.push(end);
        self.tokens
    }

    fn scan_token(&mut self, c: char, reporter: &mut dyn Reporter) {
        if let Some(kind) = SINGLE_CHAR_TOKENS.get(&c) {
            self.add_token(*kind);
            return;
        }

        match c {
            '/' => {
                if self.match_char('/') {
                    // comment runs up to, not through, the newline
                    while self.peek().map(|c| c != '\n').unwrap_or(false) {
                        self.advance();
                    }
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }
            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,
            c if c.is_ascii_digit() => self.lex_number(reporter),
            c => self.error(
                ParseError::UnexpectedCharacter(c, self.line, self.current_span()),
                reporter,
            ),
        }
    }

    fn lex_number(&mut self, reporter: &mut dyn Reporter) {
        self.skip_digits();

        // a trailing '.' with no digit after it is left for the next token
        if self.peek() == Some('.') && is_digit(self.peek_next()) {
            self.advance();
            self.skip_digits();
        }

        let lexeme = self.lexeme();
        match lexeme.parse::<f64>() {
            Ok(value) if value.is_finite() => {
                let token = Token::number(value, lexeme, self.line, self.current_span());
                self.tokens.push(token);
            }
            // overflowing digit runs parse to infinity; leaves must stay finite
            _ => self.error(
                ParseError::ParseToNumber(self.line, self.current_span()),
                reporter,
            ),
        }
    }

    fn skip_digits(&mut self) {
        while is_digit(self.peek()) {
            self.advance();
        }
    }

    fn error(&self, err: ParseError, reporter: &mut dyn Reporter) {
        warn!("Lex error: {} {:?}", err, self.lexeme());
        reporter.report(Diagnostic::from(&err));
    }

    fn add_token(&mut self, kind: TokenKind) {
        let token = Token::new(kind, self.lexeme(), self.line, self.current_span());
        self.tokens.push(token);
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += 1;
        Some(c)
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() != Some(expected) {
            return false;
        }
        self.current += 1;
        true
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.current).map(|&(_, c)| c)
    }

    fn peek_next(&self) -> Option<char> {
        self.chars.get(self.current + 1).map(|&(_, c)| c)
    }

    fn offset(&self, index: usize) -> usize {
        self.chars
            .get(index)
            .map(|&(offset, _)| offset)
            .unwrap_or(self.input.len())
    }

    fn lexeme(&self) -> &'a str {
        let input = self.input;
        &input[self.offset(self.start)..self.offset(self.current)]
    }

    fn current_span(&self) -> Span {
        Span::new(self.offset(self.start), self.offset(self.current) - 1)
    }
}

fn is_digit(c: Option<char>) -> bool {
    c.map(|c| c.is_ascii_digit()).unwrap_or(false)
}
