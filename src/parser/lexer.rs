//! Lexer (tokenizer) for MiniC source code.
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the
//! parser. Scanning is longest-match throughout: identifiers and numbers
//! take the maximal run, and operators extend greedily while the next
//! character still forms a known operator (maximal munch), so `<=`, `&&`,
//! `<<`, and `->` come out as one token each rather than two.
//!
//! Comments (`//` and `/* */`) are consumed between tokens and never
//! produce one. The stream always ends with a single `Eof` token.

use super::token::{Position, Token, TokenKind, CHAR_ESCAPES, KEYWORDS, OPERATORS};
use thiserror::Error;

/// Lexer error type.
///
/// Every variant is fatal: the lexer produces no usable token stream past
/// the point of failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unexpected character '{0}' at {1}")]
    UnexpectedChar(char, Position),

    #[error("unterminated character literal at {0}")]
    UnterminatedChar(Position),

    #[error("unterminated string literal at {0}")]
    UnterminatedString(Position),

    #[error("unterminated block comment at {0}")]
    UnterminatedBlockComment(Position),

    #[error("unknown escape sequence '\\{0}' at {1}")]
    UnknownEscape(char, Position),
}

/// Tokenize an entire source string.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}

/// Single-cursor scanner over the source text.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the entire input.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace_and_comments()?;

            if self.is_at_end() {
                tokens.push(Token::new(TokenKind::Eof, "", self.current_position()));
                return Ok(tokens);
            }

            tokens.push(self.next_token()?);
        }
    }

    /// Scan one token. Whitespace and comments have already been skipped,
    /// so the cursor sits on the first character of the token.
    fn next_token(&mut self) -> Result<Token, LexError> {
        match self.peek() {
            Some(ch) if ch.is_ascii_alphabetic() || ch == '_' => {
                Ok(self.identifier_or_keyword())
            }
            Some(ch) if ch.is_ascii_digit() => Ok(self.number_literal()),
            Some('\'') => self.char_literal(),
            Some('"') => self.string_literal(),
            _ => self.operator(),
        }
    }

    /// Scan a maximal identifier run and classify it: keyword, boolean
    /// literal (`true`/`false`), or plain identifier.
    fn identifier_or_keyword(&mut self) -> Token {
        let pos = self.current_position();
        let mut ident = String::new();

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let kind = match KEYWORDS.get(ident.as_str()) {
            Some(&keyword) => keyword,
            None if ident == "true" || ident == "false" => TokenKind::BoolLit,
            None => TokenKind::Ident,
        };

        Token::new(kind, ident, pos)
    }

    /// Scan a numeric literal. A digit run followed by `.` continues as a
    /// float (a trailing dot like `123.` still lexes as a float); no
    /// exponents, no hex or octal forms. The text is kept verbatim; the
    /// parser converts it to a value.
    fn number_literal(&mut self) -> Token {
        let pos = self.current_position();
        let mut text = String::new();

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        if self.peek() == Some('.') {
            text.push('.');
            self.advance();
            while let Some(ch) = self.peek() {
                if ch.is_ascii_digit() {
                    text.push(ch);
                    self.advance();
                } else {
                    break;
                }
            }
            return Token::new(TokenKind::FloatLit, text, pos);
        }

        Token::new(TokenKind::IntLit, text, pos)
    }

    /// Scan a character literal: a backslash escape (per the escape table)
    /// or a single literal character, then a required closing quote. The
    /// token text holds the decoded character.
    fn char_literal(&mut self) -> Result<Token, LexError> {
        let pos = self.current_position();
        self.advance(); // opening quote

        let value = match self.advance() {
            None => return Err(LexError::UnterminatedChar(pos)),
            Some('\\') => {
                let escaped = self.advance().ok_or(LexError::UnterminatedChar(pos))?;
                match CHAR_ESCAPES.get(&escaped) {
                    Some(&decoded) => decoded,
                    None => return Err(LexError::UnknownEscape(escaped, pos)),
                }
            }
            Some(ch) => ch,
        };

        if self.advance() != Some('\'') {
            return Err(LexError::UnterminatedChar(pos));
        }

        Ok(Token::new(TokenKind::CharLit, value.to_string(), pos))
    }

    /// Scan a string literal: everything up to the next `"` is taken
    /// verbatim, with no escape processing.
    fn string_literal(&mut self) -> Result<Token, LexError> {
        let pos = self.current_position();
        self.advance(); // opening quote

        let mut text = String::new();
        loop {
            match self.advance() {
                None => return Err(LexError::UnterminatedString(pos)),
                Some('"') => return Ok(Token::new(TokenKind::StrLit, text, pos)),
                Some(ch) => text.push(ch),
            }
        }
    }

    /// Scan an operator or punctuator by maximal munch: grow the candidate
    /// lexeme while the extension is still an operator-table key, then emit
    /// the longest match.
    fn operator(&mut self) -> Result<Token, LexError> {
        let pos = self.current_position();
        let mut lexeme = String::new();
        let mut kind = None;

        // All table keys are ASCII, so lexeme.len() counts characters.
        while let Some(ch) = self.peek_ahead(lexeme.len()) {
            let mut candidate = lexeme.clone();
            candidate.push(ch);
            match OPERATORS.get(candidate.as_str()) {
                Some(&k) => {
                    lexeme = candidate;
                    kind = Some(k);
                }
                None => break,
            }
        }

        match kind {
            Some(kind) => {
                for _ in 0..lexeme.len() {
                    self.advance();
                }
                Ok(Token::new(kind, lexeme, pos))
            }
            None => Err(LexError::UnexpectedChar(self.peek().unwrap_or('\0'), pos)),
        }
    }

    /// Skip whitespace and comments.
    fn skip_whitespace_and_comments(&mut self) -> Result<(), LexError> {
        loop {
            match self.peek() {
                Some(ch) if ch.is_whitespace() => {
                    self.advance();
                }
                Some('/') if self.peek_ahead(1) == Some('/') => self.skip_line_comment(),
                Some('/') if self.peek_ahead(1) == Some('*') => self.skip_block_comment()?,
                _ => return Ok(()),
            }
        }
    }

    /// Skip a line comment (`// ...`) to the end of the line.
    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.peek() {
            self.advance();
            if ch == '\n' {
                break;
            }
        }
    }

    /// Skip a block comment (`/* ... */`) to the matching terminator.
    fn skip_block_comment(&mut self) -> Result<(), LexError> {
        let start = self.current_position();
        self.advance(); // '/'
        self.advance(); // '*'

        while !self.is_at_end() {
            if self.peek() == Some('*') && self.peek_ahead(1) == Some('/') {
                self.advance();
                self.advance();
                return Ok(());
            }
            self.advance();
        }

        Err(LexError::UnterminatedBlockComment(start))
    }

    /// Peek at the current character without consuming.
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Peek ahead n characters.
    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    /// Consume and return the current character, tracking line/column.
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn current_position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_simple_tokens() {
        let tokens = tokenize("int main() { return 0; }").unwrap();

        assert_eq!(tokens[0].kind, TokenKind::KwInt);
        assert_eq!(tokens[1].kind, TokenKind::Ident);
        assert_eq!(tokens[1].text, "main");
        assert_eq!(tokens[2].kind, TokenKind::LParen);
        assert_eq!(tokens[3].kind, TokenKind::RParen);
        assert_eq!(tokens[4].kind, TokenKind::LBrace);
        assert_eq!(tokens[5].kind, TokenKind::KwReturn);
        assert_eq!(tokens[6].kind, TokenKind::IntLit);
        assert_eq!(tokens[6].text, "0");
        assert_eq!(tokens[7].kind, TokenKind::Semicolon);
        assert_eq!(tokens[8].kind, TokenKind::RBrace);
        assert_eq!(tokens[9].kind, TokenKind::Eof);
        assert_eq!(tokens.len(), 10);
    }

    #[test]
    fn test_maximal_munch() {
        // Each of these has a shorter valid prefix; the longest form must win.
        assert_eq!(
            kinds("<= == && || << >> -> ++ -- += !="),
            vec![
                TokenKind::Le,
                TokenKind::Eq,
                TokenKind::AndAnd,
                TokenKind::OrOr,
                TokenKind::Shl,
                TokenKind::Shr,
                TokenKind::Arrow,
                TokenKind::Increment,
                TokenKind::Decrement,
                TokenKind::PlusAssign,
                TokenKind::NotEq,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_adjacent_operators_split_correctly() {
        // '<' then '=' separated by space stay two tokens; fused they are one.
        assert_eq!(
            kinds("< = <="),
            vec![
                TokenKind::Lt,
                TokenKind::Assign,
                TokenKind::Le,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_comments_are_elided() {
        let with = tokenize("int x; // trailing\nint y; /* block\ncomment */ int z;").unwrap();
        let without = tokenize("int x; int y; int z;").unwrap();

        let strip = |tokens: Vec<Token>| {
            tokens
                .into_iter()
                .map(|t| (t.kind, t.text))
                .collect::<Vec<_>>()
        };
        assert_eq!(strip(with), strip(without));
    }

    #[test]
    fn test_division_is_not_a_comment() {
        assert_eq!(
            kinds("a / b /= c"),
            vec![
                TokenKind::Ident,
                TokenKind::Slash,
                TokenKind::Ident,
                TokenKind::SlashAssign,
                TokenKind::Ident,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_unterminated_block_comment() {
        assert!(matches!(
            tokenize("int x; /* never closed"),
            Err(LexError::UnterminatedBlockComment(_))
        ));
    }

    #[test]
    fn test_int_vs_float_classification() {
        let tokens = tokenize("123 123.45 123.").unwrap();

        assert_eq!(tokens[0].kind, TokenKind::IntLit);
        assert_eq!(tokens[0].text, "123");
        assert_eq!(tokens[1].kind, TokenKind::FloatLit);
        assert_eq!(tokens[1].text, "123.45");
        // Trailing dot still classifies as a float.
        assert_eq!(tokens[2].kind, TokenKind::FloatLit);
        assert_eq!(tokens[2].text, "123.");
    }

    #[test]
    fn test_bool_literals_and_identifiers() {
        let tokens = tokenize("true false truth _x x1").unwrap();

        assert_eq!(tokens[0].kind, TokenKind::BoolLit);
        assert_eq!(tokens[1].kind, TokenKind::BoolLit);
        assert_eq!(tokens[2].kind, TokenKind::Ident);
        assert_eq!(tokens[3].kind, TokenKind::Ident);
        assert_eq!(tokens[4].kind, TokenKind::Ident);
    }

    #[test]
    fn test_char_literal_escapes() {
        let tokens = tokenize(r"'a' '\n' '\t' '\\' '\''").unwrap();

        assert_eq!(tokens[0].text, "a");
        assert_eq!(tokens[1].text, "\n");
        assert_eq!(tokens[2].text, "\t");
        assert_eq!(tokens[3].text, "\\");
        assert_eq!(tokens[4].text, "'");
    }

    #[test]
    fn test_unknown_escape_in_char_literal() {
        assert!(matches!(
            tokenize(r"'\z'"),
            Err(LexError::UnknownEscape('z', _))
        ));
    }

    #[test]
    fn test_unterminated_char_literal() {
        assert!(matches!(tokenize("'ab"), Err(LexError::UnterminatedChar(_))));
    }

    #[test]
    fn test_string_literal_is_verbatim() {
        // No escape processing inside strings: backslash-n stays two chars.
        let tokens = tokenize(r#""a\nb""#).unwrap();
        assert_eq!(tokens[0].kind, TokenKind::StrLit);
        assert_eq!(tokens[0].text, "a\\nb");
    }

    #[test]
    fn test_unterminated_string_literal() {
        assert!(matches!(
            tokenize("\"never closed"),
            Err(LexError::UnterminatedString(_))
        ));
    }

    #[test]
    fn test_unknown_character() {
        assert!(matches!(
            tokenize("int x = `;"),
            Err(LexError::UnexpectedChar('`', _))
        ));
    }

    #[test]
    fn test_positions() {
        let tokens = tokenize("int\n  x;").unwrap();

        assert_eq!(tokens[0].pos, Position::new(1, 1));
        assert_eq!(tokens[1].pos, Position::new(2, 3));
        assert_eq!(tokens[2].pos, Position::new(2, 4));
    }
}
