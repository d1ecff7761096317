//! Recursive-descent reader over the token stream produced by
//! [`super::lexer`]. The grammar has no ambiguity, so no backtracking is
//! needed: each statement keyword determines the rest of its own shape.

use super::lexer::{position_of, Token, TokenKind};
use crate::error::GrammarError;

#[derive(Debug, Clone)]
pub struct EnumDecl {
    pub name: String,
    pub domain: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ValueDecl {
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct FuncDecl {
    pub name: String,
    pub ret: String,
    pub args: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ProgramDecl {
    pub name: String,
    pub args: Vec<String>,
    pub ret: String,
}

#[derive(Debug, Default)]
pub struct GrammarAst {
    pub enums: Vec<EnumDecl>,
    pub values: Vec<ValueDecl>,
    pub funcs: Vec<FuncDecl>,
    pub program: Option<ProgramDecl>,
}

struct Parser<'t> {
    text: &'t str,
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> Parser<'t> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn err_tree(&self, offset: usize, message: impl Into<String>) -> GrammarError {
        GrammarError::ParseTree {
            at: position_of(self.text, offset),
            message: message.into(),
        }
    }

    fn eof_offset(&self) -> usize {
        self.tokens.last().map(|t| t.offset + 1).unwrap_or(0)
    }

    fn advance(&mut self) -> Result<&'t Token, GrammarError> {
        let token = self
            .tokens
            .get(self.pos)
            .ok_or_else(|| self.err_tree(self.eof_offset(), "unexpected end of grammar"))?;
        self.pos += 1;
        Ok(token)
    }

    fn expect_ident(&mut self) -> Result<String, GrammarError> {
        let token = self.advance()?;
        match &token.kind {
            TokenKind::Ident(name) => Ok(name.clone()),
            _ => Err(self.err_tree(token.offset, "expected an identifier")),
        }
    }

    fn expect_kind(&mut self, kind: TokenKind, what: &str) -> Result<(), GrammarError> {
        let token = self.advance()?;
        if token.kind == kind {
            Ok(())
        } else {
            Err(self.err_tree(token.offset, format!("expected {what}")))
        }
    }

    fn expect_keyword(&mut self, keyword: &str) -> Result<(), GrammarError> {
        let token = self.advance()?;
        match &token.kind {
            TokenKind::Ident(name) if name == keyword => Ok(()),
            _ => Err(self.err_tree(token.offset, format!("expected keyword `{keyword}`"))),
        }
    }

    fn eat_kind(&mut self, kind: &TokenKind) -> bool {
        if self.peek().map(|t| &t.kind) == Some(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Comma-separated identifier list, with no separator requirement on
    /// emptiness (used for `program(...)`'s arg list and `func ... -> ...`'s
    /// arg list).
    fn ident_list(&mut self, terminator: &TokenKind) -> Result<Vec<String>, GrammarError> {
        let mut items = Vec::new();
        if self.peek().map(|t| &t.kind) == Some(terminator) {
            return Ok(items);
        }
        loop {
            items.push(self.expect_ident()?);
            if self.eat_kind(&TokenKind::Comma) {
                continue;
            }
            break;
        }
        Ok(items)
    }

    fn string_list(&mut self) -> Result<Vec<String>, GrammarError> {
        let mut items = Vec::new();
        loop {
            let token = self.advance()?;
            match &token.kind {
                TokenKind::Str(s) => items.push(s.clone()),
                _ => return Err(self.err_tree(token.offset, "expected a quoted string")),
            }
            if self.eat_kind(&TokenKind::Comma) {
                continue;
            }
            break;
        }
        Ok(items)
    }

    fn parse_enum(&mut self) -> Result<EnumDecl, GrammarError> {
        let name = self.expect_ident()?;
        self.expect_kind(TokenKind::LBrace, "`{`")?;
        let domain = self.string_list()?;
        self.expect_kind(TokenKind::Semicolon, "`;`")?;
        self.expect_kind(TokenKind::RBrace, "`}`")?;
        Ok(EnumDecl { name, domain })
    }

    fn parse_value(&mut self) -> Result<ValueDecl, GrammarError> {
        let name = self.expect_ident()?;
        self.expect_kind(TokenKind::Semicolon, "`;`")?;
        Ok(ValueDecl { name })
    }

    fn parse_func(&mut self) -> Result<FuncDecl, GrammarError> {
        let name = self.expect_ident()?;
        self.expect_kind(TokenKind::Colon, "`:`")?;
        let ret = self.expect_ident()?;
        self.expect_kind(TokenKind::Arrow, "`->`")?;
        let args = self.ident_list(&TokenKind::Semicolon)?;
        self.expect_kind(TokenKind::Semicolon, "`;`")?;
        Ok(FuncDecl { name, ret, args })
    }

    fn parse_program(&mut self) -> Result<ProgramDecl, GrammarError> {
        let name = self.expect_ident()?;
        self.expect_kind(TokenKind::LParen, "`(`")?;
        let args = self.ident_list(&TokenKind::RParen)?;
        self.expect_kind(TokenKind::RParen, "`)`")?;
        self.expect_kind(TokenKind::Arrow, "`->`")?;
        let ret = self.expect_ident()?;
        self.expect_kind(TokenKind::Semicolon, "`;`")?;
        Ok(ProgramDecl { name, args, ret })
    }

    fn parse(&mut self) -> Result<GrammarAst, GrammarError> {
        let mut ast = GrammarAst::default();
        while self.pos < self.tokens.len() {
            let keyword_token = self.advance()?;
            let keyword = match &keyword_token.kind {
                TokenKind::Ident(name) => name.clone(),
                _ => return Err(self.err_tree(keyword_token.offset, "expected a statement keyword")),
            };
            match keyword.as_str() {
                "enum" => ast.enums.push(self.parse_enum()?),
                "value" => ast.values.push(self.parse_value()?),
                "func" => ast.funcs.push(self.parse_func()?),
                "program" => {
                    if ast.program.is_some() {
                        return Err(self.err_tree(
                            keyword_token.offset,
                            "grammar text may declare only one `program` signature",
                        ));
                    }
                    ast.program = Some(self.parse_program()?);
                }
                other => {
                    return Err(
                        self.err_tree(keyword_token.offset, format!("unknown statement keyword `{other}`"))
                    )
                }
            }
        }
        Ok(ast)
    }
}

pub fn parse(text: &str, tokens: &[Token]) -> Result<GrammarAst, GrammarError> {
    let mut parser = Parser {
        text,
        tokens,
        pos: 0,
    };
    parser.parse()
}
