use crate::{
    fbx::{Document, Node, Property},
    foundation::error::{UvError, UvResult},
};

#[derive(Debug, Clone, PartialEq)]
struct Token {
    kind: TokenKind,
    offset: usize,
}

#[derive(Debug, Clone, PartialEq)]
enum TokenKind {
    Ident(String),
    Int(i64),
    Float(f64),
    Str(String),

    Colon,
    Comma,
    Star,
    LBrace,
    RBrace,

    Eof,
}

fn err(offset: usize, msg: impl std::fmt::Display) -> UvError {
    UvError::container(format!("text FBX at byte {offset}: {msg}"))
}

fn lex(input: &str) -> UvResult<Vec<Token>> {
    let mut out = Vec::new();
    let bytes = input.as_bytes();
    let mut i = 0usize;

    while i < bytes.len() {
        let c = bytes[i];
        if c.is_ascii_whitespace() {
            i += 1;
            continue;
        }
        // Comment to end of line.
        if c == b';' {
            while i < bytes.len() && bytes[i] != b'\n' {
                i += 1;
            }
            continue;
        }

        let start = i;
        let punct = match c {
            b':' => Some(TokenKind::Colon),
            b',' => Some(TokenKind::Comma),
            b'*' => Some(TokenKind::Star),
            b'{' => Some(TokenKind::LBrace),
            b'}' => Some(TokenKind::RBrace),
            _ => None,
        };
        if let Some(kind) = punct {
            out.push(Token {
                kind,
                offset: start,
            });
            i += 1;
            continue;
        }

        if c == b'"' {
            i += 1;
            while i < bytes.len() && bytes[i] != b'"' {
                i += 1;
            }
            if i == bytes.len() {
                return Err(err(start, "unterminated string"));
            }
            out.push(Token {
                kind: TokenKind::Str(input[start + 1..i].to_string()),
                offset: start,
            });
            i += 1;
            continue;
        }

        let starts_number = c.is_ascii_digit()
            || ((c == b'-' || c == b'+' || c == b'.')
                && bytes
                    .get(i + 1)
                    .is_some_and(|&n| n.is_ascii_digit() || n == b'.'));
        if starts_number {
            i += 1;
            let mut integral = c != b'.';
            while i < bytes.len() {
                match bytes[i] {
                    b'0'..=b'9' => {}
                    b'.' => integral = false,
                    b'e' | b'E' => {
                        integral = false;
                        if matches!(bytes.get(i + 1), Some(b'+' | b'-')) {
                            i += 1;
                        }
                    }
                    _ => break,
                }
                i += 1;
            }
            let s = &input[start..i];
            let kind = if integral {
                TokenKind::Int(s.parse().map_err(|_| err(start, format!("invalid integer '{s}'")))?)
            } else {
                TokenKind::Float(s.parse().map_err(|_| err(start, format!("invalid number '{s}'")))?)
            };
            out.push(Token {
                kind,
                offset: start,
            });
            continue;
        }

        if c.is_ascii_alphabetic() || c == b'_' {
            i += 1;
            while i < bytes.len()
                && (bytes[i].is_ascii_alphanumeric() || matches!(bytes[i], b'_' | b'|' | b'.'))
            {
                i += 1;
            }
            out.push(Token {
                kind: TokenKind::Ident(input[start..i].to_string()),
                offset: start,
            });
            continue;
        }

        let ch = input[start..].chars().next().unwrap_or('?');
        return Err(err(start, format!("unexpected character '{ch}'")));
    }

    out.push(Token {
        kind: TokenKind::Eof,
        offset: bytes.len(),
    });
    Ok(out)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> &TokenKind {
        self.peek_at(0)
    }

    fn peek_at(&self, n: usize) -> &TokenKind {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.pos + n).min(last)].kind
    }

    fn offset(&self) -> usize {
        self.tokens[self.pos.min(self.tokens.len() - 1)].offset
    }

    fn bump(&mut self) -> TokenKind {
        let kind = self.peek().clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        kind
    }

    fn expect(&mut self, want: TokenKind, what: &str) -> UvResult<()> {
        if *self.peek() == want {
            self.bump();
            Ok(())
        } else {
            Err(err(self.offset(), format!("expected {what}, found {:?}", self.peek())))
        }
    }

    /// Nodes until `}` (when `nested`) or end of input.
    fn nodes(&mut self, nested: bool) -> UvResult<Vec<Node>> {
        let mut out = Vec::new();
        loop {
            match self.peek() {
                TokenKind::Eof if nested => {
                    return Err(err(self.offset(), "unexpected end of input, expected '}'"));
                }
                TokenKind::Eof => return Ok(out),
                TokenKind::RBrace if nested => {
                    self.bump();
                    return Ok(out);
                }
                _ => out.push(self.node()?),
            }
        }
    }

    fn node(&mut self) -> UvResult<Node> {
        let at = self.offset();
        let TokenKind::Ident(name) = self.bump() else {
            return Err(err(at, "expected a node name"));
        };
        self.expect(TokenKind::Colon, "':' after node name")?;
        // SDK exporters write embedded media as `Content: , "<base64>"`.
        if *self.peek() == TokenKind::Comma {
            self.bump();
        }

        let mut properties = Vec::new();
        if !self.at_property_list_end() {
            loop {
                let prop = self.property()?;
                let is_array = matches!(
                    prop,
                    Property::I64Array(_) | Property::F64Array(_)
                );
                properties.push(prop);
                if is_array {
                    return Ok(Node {
                        name,
                        properties,
                        children: Vec::new(),
                    });
                }
                if *self.peek() != TokenKind::Comma {
                    break;
                }
                self.bump();
            }
        }

        let children = if *self.peek() == TokenKind::LBrace {
            self.bump();
            self.nodes(true)?
        } else {
            Vec::new()
        };

        Ok(Node {
            name,
            properties,
            children,
        })
    }

    fn at_property_list_end(&self) -> bool {
        match self.peek() {
            TokenKind::LBrace | TokenKind::RBrace | TokenKind::Eof => true,
            TokenKind::Ident(_) => *self.peek_at(1) == TokenKind::Colon,
            _ => false,
        }
    }

    fn property(&mut self) -> UvResult<Property> {
        let at = self.offset();
        match self.bump() {
            TokenKind::Int(v) => Ok(Property::I64(v)),
            TokenKind::Float(v) => Ok(Property::F64(v)),
            TokenKind::Str(s) | TokenKind::Ident(s) => Ok(Property::String(s)),
            TokenKind::Star => self.array(at),
            other => Err(err(at, format!("expected a property value, found {other:?}"))),
        }
    }

    // `*N { a: v, v, ... }`
    fn array(&mut self, at: usize) -> UvResult<Property> {
        let TokenKind::Int(declared) = self.bump() else {
            return Err(err(at, "expected an element count after '*'"));
        };
        self.expect(TokenKind::LBrace, "'{' to open array")?;

        let mut ints = Vec::new();
        let mut floats: Option<Vec<f64>> = None;
        if *self.peek() != TokenKind::RBrace {
            match self.bump() {
                TokenKind::Ident(a) if a == "a" => {}
                _ => return Err(err(self.offset(), "expected 'a:' inside array")),
            }
            self.expect(TokenKind::Colon, "':' after 'a'")?;

            while *self.peek() != TokenKind::RBrace {
                let vat = self.offset();
                match self.bump() {
                    TokenKind::Int(v) => match floats.as_mut() {
                        Some(fs) => fs.push(v as f64),
                        None => ints.push(v),
                    },
                    TokenKind::Float(v) => floats
                        .get_or_insert_with(|| ints.drain(..).map(|x| x as f64).collect())
                        .push(v),
                    other => {
                        return Err(err(vat, format!("expected a number, found {other:?}")));
                    }
                }
                if *self.peek() == TokenKind::Comma {
                    self.bump();
                }
            }
        }
        self.expect(TokenKind::RBrace, "'}' to close array")?;

        let (prop, actual) = match floats {
            Some(fs) => {
                let n = fs.len();
                (Property::F64Array(fs), n)
            }
            None => {
                let n = ints.len();
                (Property::I64Array(ints), n)
            }
        };
        if usize::try_from(declared).ok() != Some(actual) {
            return Err(err(
                at,
                format!("array declares {declared} elements but holds {actual}"),
            ));
        }
        Ok(prop)
    }
}

/// Decode an ASCII FBX file.
pub(crate) fn parse(input: &str) -> UvResult<Document> {
    let tokens = lex(input)?;
    let mut parser = Parser { tokens, pos: 0 };
    let nodes = parser.nodes(false)?;
    Ok(Document { nodes })
}

#[cfg(test)]
#[path = "../../tests/unit/fbx/text.rs"]
mod tests;
