//! Parser for the service's bracketed query grammar.
//!
//! ```text
//! query     := clause (connector clause)*
//! clause    := '{' field '.' comparator '.' value '}'
//! field     := "'" text "'" | bare
//! value     := "'" text "'" | bare
//! connector := 'AND' | 'OR'
//! ```
//!
//! There is no grouping and no escaping. Clauses combine strictly left to
//! right. A quoted value ends at the first `'}`, so values may themselves
//! contain `.` and `'`.

use qbrecord_core::{schema::Fid, Error, Result};
use std::ops::Range;

/// A parsed query string.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    clauses: Vec<Clause>,

    /// `connectors[i]` joins `clauses[i]` and `clauses[i + 1]`
    connectors: Vec<Connector>,
}

/// One `{field.CMP.value}` term.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    /// Left operand
    pub field: FieldRef,

    /// Byte range of the left operand in the input, excluding quotes
    pub field_span: Range<usize>,

    pub comparator: String,

    /// Right operand with any surrounding quotes removed
    pub value: String,
}

/// Left operand of a clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldRef {
    Fid(Fid),
    Name(String),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Connector {
    And,
    Or,
}

/// Parse `input`, failing with a malformed filter error if it does not follow
/// the grammar.
pub fn parse(input: &str) -> Result<Query> {
    Parser { input, pos: 0 }.parse()
}

impl Query {
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn connectors(&self) -> &[Connector] {
        &self.connectors
    }

    /// Evaluate the query against one record, combining clause results left
    /// to right.
    pub fn evaluate(&self, mut matches: impl FnMut(&Clause) -> Result<bool>) -> Result<bool> {
        let mut clauses = self.clauses.iter();

        let Some(first) = clauses.next() else {
            return Ok(false);
        };

        let mut ret = matches(first)?;

        for (connector, clause) in self.connectors.iter().zip(clauses) {
            let rhs = matches(clause)?;
            ret = match connector {
                Connector::And => ret && rhs,
                Connector::Or => ret || rhs,
            };
        }

        Ok(ret)
    }
}

impl Clause {
    /// Returns the FID when the left operand is numeric.
    pub fn fid(&self) -> Option<Fid> {
        match &self.field {
            FieldRef::Fid(fid) => Some(*fid),
            FieldRef::Name(_) => None,
        }
    }
}

impl Connector {
    pub fn as_str(self) -> &'static str {
        match self {
            Connector::And => "AND",
            Connector::Or => "OR",
        }
    }
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn parse(mut self) -> Result<Query> {
        let mut query = Query {
            clauses: vec![],
            connectors: vec![],
        };

        self.skip_whitespace();

        if self.at_end() {
            return Err(self.error("query is empty"));
        }

        query.clauses.push(self.clause()?);

        loop {
            self.skip_whitespace();

            if self.at_end() {
                break;
            }

            query.connectors.push(self.connector()?);
            self.skip_whitespace();
            query.clauses.push(self.clause()?);
        }

        Ok(query)
    }

    fn clause(&mut self) -> Result<Clause> {
        self.expect(b'{')?;
        let field_span = self.field()?;
        self.expect(b'.')?;
        let comparator = self.comparator()?;
        self.expect(b'.')?;
        let value = self.value()?;
        self.expect(b'}')?;

        let text = &self.input[field_span.clone()];
        let field = match text.parse::<Fid>() {
            Ok(fid) => FieldRef::Fid(fid),
            Err(_) => FieldRef::Name(text.to_string()),
        };

        Ok(Clause {
            field,
            field_span,
            comparator,
            value,
        })
    }

    fn field(&mut self) -> Result<Range<usize>> {
        if self.eat(b'\'') {
            let start = self.pos;
            let Some(len) = self.rest().find('\'') else {
                return Err(self.error("unterminated quoted field"));
            };
            self.pos += len + 1;

            if len == 0 {
                return Err(self.error_at(start, "field is empty"));
            }

            return Ok(start..start + len);
        }

        let start = self.pos;
        while let Some(b) = self.peek() {
            if matches!(b, b'.' | b'{' | b'}' | b'\'') {
                break;
            }
            self.pos += 1;
        }

        if start == self.pos {
            return Err(self.error("expected a field"));
        }

        Ok(start..self.pos)
    }

    fn comparator(&mut self) -> Result<String> {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_alphanumeric()) {
            self.pos += 1;
        }

        if start == self.pos {
            return Err(self.error("expected a comparator"));
        }

        Ok(self.input[start..self.pos].to_string())
    }

    fn value(&mut self) -> Result<String> {
        if self.peek() == Some(b'\'') {
            let start = self.pos + 1;
            let Some(len) = self.input[start..].find("'}") else {
                return Err(self.error("unterminated quoted value"));
            };
            self.pos = start + len + 1;
            return Ok(self.input[start..start + len].to_string());
        }

        let start = self.pos;
        let Some(len) = self.rest().find('}') else {
            return Err(self.error("missing closing `}`"));
        };
        self.pos += len;
        Ok(self.input[start..self.pos].to_string())
    }

    fn connector(&mut self) -> Result<Connector> {
        for connector in [Connector::And, Connector::Or] {
            if self.rest().starts_with(connector.as_str()) {
                self.pos += connector.as_str().len();
                return Ok(connector);
            }
        }

        Err(self.error("expected `AND` or `OR`"))
    }

    fn expect(&mut self, expected: u8) -> Result<()> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(self.error(&format!("expected `{}`", expected as char)))
        }
    }

    fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn rest(&self) -> &str {
        &self.input[self.pos..]
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn error(&self, reason: &str) -> Error {
        self.error_at(self.pos, reason)
    }

    fn error_at(&self, pos: usize, reason: &str) -> Error {
        Error::malformed_filter(self.input, format!("{reason} at offset {pos}"))
    }
}
