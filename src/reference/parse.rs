//! Tokenizer for raw reference text.
//!
//! Turns text such as `java.util.Map<K, java.util.List<? extends a.B>>[]`
//! into a [`TypeExpr`] tree. Names are kept verbatim here; validating them is
//! the job of [`Reference`](super::Reference).

use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

use crate::base::is_identifier_continue;
use crate::error::ReferenceError;

/// A parsed reference: a named type or a wildcard argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeExpr {
    Named(NamedType),
    /// `?`, `? extends T` or `? super T`. Only valid as a type argument.
    Wildcard(Option<WildcardBound>),
}

/// A dotted name with optional type arguments and array/varargs suffix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedType {
    pub name: String,
    /// `None` without brackets, `Some(vec![])` for the diamond `<>`.
    pub arguments: Option<Vec<TypeExpr>>,
    /// Array dimensions (`[]` each) followed by an optional `...`.
    pub suffix: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WildcardBound {
    pub kind: BoundKind,
    pub bound: Box<TypeExpr>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundKind {
    Extends,
    Super,
}

impl BoundKind {
    fn keyword(self) -> &'static str {
        match self {
            BoundKind::Extends => "extends",
            BoundKind::Super => "super",
        }
    }
}

impl TypeExpr {
    /// Parse one complete reference.
    pub fn parse(text: &str) -> Result<Self, ReferenceError> {
        if text.trim().is_empty() {
            return Err(ReferenceError::Empty);
        }
        let mut parser = Parser::new(text);
        let expr = parser.named_type()?;
        parser.skip_whitespace();
        match parser.chars.next() {
            None => Ok(expr),
            Some((_, '>')) => Err(ReferenceError::Unbalanced(text.to_string())),
            Some((offset, found)) => Err(ReferenceError::unexpected(text, found, offset)),
        }
    }

    /// Every name in the tree, depth-first, with its type-argument flag.
    pub fn names(&self) -> Vec<(&str, bool)> {
        let mut out = Vec::new();
        self.collect_names(false, &mut out);
        out
    }

    fn collect_names<'a>(&'a self, in_argument: bool, out: &mut Vec<(&'a str, bool)>) {
        match self {
            TypeExpr::Named(named) => {
                out.push((named.name.as_str(), in_argument));
                for arg in named.arguments.iter().flatten() {
                    arg.collect_names(true, out);
                }
            }
            TypeExpr::Wildcard(Some(bound)) => bound.bound.collect_names(true, out),
            TypeExpr::Wildcard(None) => {}
        }
    }

    /// Rebuild the text, replacing every name with the output of `map`.
    ///
    /// `map` is called depth-first: the outer name before its arguments,
    /// arguments left to right. Its second parameter is true for names inside
    /// angle brackets, and for the outer name when `in_argument` is set.
    pub fn render_with<F, E>(&self, in_argument: bool, map: &mut F) -> Result<String, E>
    where
        F: FnMut(&str, bool) -> Result<String, E>,
    {
        match self {
            TypeExpr::Named(named) => {
                let mut out = map(&named.name, in_argument)?;
                if let Some(arguments) = &named.arguments {
                    out.push('<');
                    for (i, arg) in arguments.iter().enumerate() {
                        if i > 0 {
                            out.push_str(", ");
                        }
                        out.push_str(&arg.render_with(true, map)?);
                    }
                    out.push('>');
                }
                out.push_str(&named.suffix);
                Ok(out)
            }
            TypeExpr::Wildcard(None) => Ok("?".to_string()),
            TypeExpr::Wildcard(Some(bound)) => Ok(format!(
                "? {} {}",
                bound.kind.keyword(),
                bound.bound.render_with(true, map)?
            )),
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.render_with(false, &mut |name: &str, _: bool| {
            Ok::<_, fmt::Error>(name.to_string())
        })?;
        f.write_str(&text)
    }
}

struct Parser<'a> {
    text: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.char_indices().peekable(),
        }
    }

    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}
    }

    fn unexpected_or_unbalanced(&mut self) -> ReferenceError {
        match self.chars.peek() {
            Some(&(offset, found)) => ReferenceError::unexpected(self.text, found, offset),
            None => ReferenceError::Unbalanced(self.text.to_string()),
        }
    }

    /// Read a dotted name; whitespace around dots is not allowed.
    ///
    /// Stops before `..` so a varargs suffix is not swallowed into the name.
    fn name(&mut self) -> Result<String, ReferenceError> {
        self.skip_whitespace();
        let mut name = String::new();
        while let Some(&(offset, c)) = self.chars.peek() {
            let accept = is_identifier_continue(c)
                || (c == '.' && !self.text[offset + 1..].starts_with('.'));
            if !accept {
                break;
            }
            name.push(c);
            self.chars.next();
        }
        if name.is_empty() {
            return Err(self.unexpected_or_unbalanced());
        }
        Ok(name)
    }

    fn named_type(&mut self) -> Result<TypeExpr, ReferenceError> {
        let name = self.name()?;
        self.skip_whitespace();

        let arguments = if self.chars.next_if(|&(_, c)| c == '<').is_some() {
            Some(self.arguments()?)
        } else {
            None
        };

        let mut suffix = String::new();
        loop {
            self.skip_whitespace();
            if self.chars.next_if(|&(_, c)| c == '[').is_some() {
                self.skip_whitespace();
                if self.chars.next_if(|&(_, c)| c == ']').is_none() {
                    return Err(self.unexpected_or_unbalanced());
                }
                suffix.push_str("[]");
            } else if self.chars.peek().map(|&(_, c)| c) == Some('.') {
                for _ in 0..3 {
                    if self.chars.next_if(|&(_, c)| c == '.').is_none() {
                        return Err(self.unexpected_or_unbalanced());
                    }
                }
                suffix.push_str("...");
                break;
            } else {
                break;
            }
        }

        Ok(TypeExpr::Named(NamedType {
            name,
            arguments,
            suffix,
        }))
    }

    /// Parse arguments after an opening `<` up to and including the `>`.
    fn arguments(&mut self) -> Result<Vec<TypeExpr>, ReferenceError> {
        let mut arguments = Vec::new();
        self.skip_whitespace();
        if self.chars.next_if(|&(_, c)| c == '>').is_some() {
            return Ok(arguments);
        }
        loop {
            arguments.push(self.argument()?);
            self.skip_whitespace();
            match self.chars.next() {
                Some((_, ',')) => continue,
                Some((_, '>')) => return Ok(arguments),
                Some((offset, found)) => {
                    return Err(ReferenceError::unexpected(self.text, found, offset));
                }
                None => return Err(ReferenceError::Unbalanced(self.text.to_string())),
            }
        }
    }

    fn argument(&mut self) -> Result<TypeExpr, ReferenceError> {
        self.skip_whitespace();
        if self.chars.next_if(|&(_, c)| c == '?').is_none() {
            return self.named_type();
        }

        self.skip_whitespace();
        let kind = match self.peek_word().as_str() {
            "extends" => BoundKind::Extends,
            "super" => BoundKind::Super,
            _ => return Ok(TypeExpr::Wildcard(None)),
        };
        for _ in 0..kind.keyword().len() {
            self.chars.next();
        }
        let bound = self.named_type()?;
        Ok(TypeExpr::Wildcard(Some(WildcardBound {
            kind,
            bound: Box::new(bound),
        })))
    }

    /// The identifier at the cursor, without consuming it.
    fn peek_word(&mut self) -> String {
        let Some(&(start, _)) = self.chars.peek() else {
            return String::new();
        };
        self.text[start..]
            .chars()
            .take_while(|&c| is_identifier_continue(c))
            .collect()
    }
}
