//! Hand-rolled tokenizer for grammar text: one `once_cell`-lazy regex per
//! token class, tried in order at the current offset.

use crate::error::GrammarError;
use crate::util::{Position, Source};
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Ident(String),
    Str(String),
    /// `->`
    Arrow,
    LBrace,
    RBrace,
    LParen,
    RParen,
    Colon,
    Comma,
    Semicolon,
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub offset: usize,
}

static IDENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^[A-Za-z_][A-Za-z0-9_]*"#).unwrap());
static STR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^"([^"\\]|\\.)*""#).unwrap());
static WS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^(\s+|//[^\n]*)+"#).unwrap());

/// Tokenize the whole input, or fail with [`GrammarError::Parse`] carrying
/// the byte offset and resolved line/column of the first unrecognized
/// character.
pub fn tokenize(text: &str) -> Result<Vec<Token>, GrammarError> {
    let source = Source::new(text);
    let mut tokens = Vec::new();
    let mut offset = 0usize;

    while offset < text.len() {
        let rest = &text[offset..];

        if let Some(m) = WS_RE.find(rest) {
            offset += m.end();
            continue;
        }

        if let Some(c) = rest.chars().next() {
            let single = match c {
                '{' => Some(TokenKind::LBrace),
                '}' => Some(TokenKind::RBrace),
                '(' => Some(TokenKind::LParen),
                ')' => Some(TokenKind::RParen),
                ':' => Some(TokenKind::Colon),
                ',' => Some(TokenKind::Comma),
                ';' => Some(TokenKind::Semicolon),
                _ => None,
            };
            if let Some(kind) = single {
                tokens.push(Token { kind, offset });
                offset += c.len_utf8();
                continue;
            }
        }

        if rest.starts_with("->") {
            tokens.push(Token {
                kind: TokenKind::Arrow,
                offset,
            });
            offset += 2;
            continue;
        }

        if let Some(m) = STR_RE.find(rest) {
            let raw = m.as_str();
            let unescaped = raw[1..raw.len() - 1].replace("\\\"", "\"").replace("\\\\", "\\");
            tokens.push(Token {
                kind: TokenKind::Str(unescaped),
                offset,
            });
            offset += m.end();
            continue;
        }

        if let Some(m) = IDENT_RE.find(rest) {
            tokens.push(Token {
                kind: TokenKind::Ident(m.as_str().to_string()),
                offset,
            });
            offset += m.end();
            continue;
        }

        let at = source.position_at(offset);
        return Err(GrammarError::Parse {
            at,
            message: format!("unexpected character '{}'", rest.chars().next().unwrap()),
        });
    }

    Ok(tokens)
}

pub fn position_of(text: &str, offset: usize) -> Position {
    Source::new(text).position_at(offset)
}
