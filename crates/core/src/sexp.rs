// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Reader for the textual s-expression form of parsed trees.
//!
//! `ruby-parse` prints trees as `(def :foo (args (arg :x)) nil)`; this module
//! reads that form into [`SyntaxNode`]s. Line comments introduced by `;`
//! attach to the next node as its `leading_comment`, which is how fixtures
//! and collaborators carry source comments through the interchange format:
//!
//! ```text
//! ; Widget factory.
//! (class (const nil :Widget) nil ...)
//! ```
//!
//! Node lines are the 1-based line of the node's opening paren within the
//! s-expression text.

use crate::syntax::{Element, SyntaxNode};
use thiserror::Error;

/// Structural error in the s-expression text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message} at line {line}, column {column}")]
pub struct SexpError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

/// Read a single tree from s-expression text.
pub fn parse_sexp(text: &str) -> Result<SyntaxNode, SexpError> {
    let mut reader = Reader::new(text);
    reader.skip_trivia();
    let node = reader.read_node()?;
    reader.skip_trivia();
    if !reader.at_end() {
        return Err(reader.error("trailing input after tree"));
    }
    Ok(node)
}

struct Reader {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    column: usize,
    /// Comment lines waiting to attach to the next node.
    pending_comment: Vec<String>,
}

impl Reader {
    fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
            pending_comment: Vec::new(),
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn error(&self, message: impl Into<String>) -> SexpError {
        SexpError {
            message: message.into(),
            line: self.line,
            column: self.column,
        }
    }

    fn skip_trivia(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.bump();
            } else if ch == ';' {
                let mut comment = String::new();
                while let Some(c) = self.peek() {
                    if c == '\n' {
                        break;
                    }
                    comment.push(c);
                    self.bump();
                }
                let trimmed = comment.trim_start_matches(';').trim();
                self.pending_comment.push(trimmed.to_string());
            } else {
                break;
            }
        }
    }

    fn read_node(&mut self) -> Result<SyntaxNode, SexpError> {
        let line = self.line;
        let comment = if self.pending_comment.is_empty() {
            None
        } else {
            Some(self.pending_comment.drain(..).collect::<Vec<_>>().join("\n"))
        };
        if self.peek() != Some('(') {
            return Err(self.error("expected `(`"));
        }
        self.bump();
        let tag = self.read_word();
        if tag.is_empty() {
            return Err(self.error("expected node tag"));
        }
        let mut children = Vec::new();
        loop {
            self.skip_trivia();
            match self.peek() {
                None => return Err(self.error("unterminated node")),
                Some(')') => {
                    self.bump();
                    break;
                }
                Some(_) => children.push(self.read_element()?),
            }
        }
        Ok(SyntaxNode {
            tag,
            children,
            line: Some(line),
            leading_comment: comment,
        })
    }

    fn read_element(&mut self) -> Result<Element, SexpError> {
        match self.peek() {
            Some('(') => Ok(Element::Node(self.read_node()?)),
            Some(':') => {
                self.bump();
                let name = self.read_symbol_body();
                if name.is_empty() {
                    Err(self.error("empty symbol"))
                } else {
                    Ok(Element::Sym(name))
                }
            }
            Some('"') => self.read_string(),
            Some(ch) if ch == '-' || ch.is_ascii_digit() => self.read_number(),
            Some(_) => {
                let word = self.read_word();
                match word.as_str() {
                    "nil" => Ok(Element::Nil),
                    "" => Err(self.error("unexpected character")),
                    other => Err(self.error(format!("unexpected token `{other}`"))),
                }
            }
            None => Err(self.error("unexpected end of input")),
        }
    }

    /// Tag and bare-word characters: everything up to whitespace or a paren.
    fn read_word(&mut self) -> String {
        let mut word = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() || ch == '(' || ch == ')' || ch == ';' {
                break;
            }
            word.push(ch);
            self.bump();
        }
        word
    }

    /// Symbol bodies admit operator names (`:+`, `:[]=`) and sigils (`:@x`).
    fn read_symbol_body(&mut self) -> String {
        let mut name = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() || ch == '(' || ch == ')' || ch == ';' {
                break;
            }
            name.push(ch);
            self.bump();
        }
        name
    }

    fn read_string(&mut self) -> Result<Element, SexpError> {
        self.bump();
        let mut text = String::new();
        loop {
            match self.bump() {
                None => return Err(self.error("unterminated string")),
                Some('"') => break,
                Some('\\') => match self.bump() {
                    Some('n') => text.push('\n'),
                    Some('t') => text.push('\t'),
                    Some('"') => text.push('"'),
                    Some('\\') => text.push('\\'),
                    Some(other) => text.push(other),
                    None => return Err(self.error("unterminated escape")),
                },
                Some(ch) => text.push(ch),
            }
        }
        Ok(Element::Str(text))
    }

    fn read_number(&mut self) -> Result<Element, SexpError> {
        let word = self.read_word();
        if word.contains('.') || word.contains('e') || word.contains('E') {
            word.parse::<f64>()
                .map(Element::Float)
                .map_err(|_| self.error(format!("bad float `{word}`")))
        } else {
            word.parse::<i64>()
                .map(Element::Int)
                .map_err(|_| self.error(format!("bad integer `{word}`")))
        }
    }
}
