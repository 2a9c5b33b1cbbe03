#![forbid(unsafe_code)]

//! Template text parsing.
//!
//! # Invariants
//!
//! 1. **Single pass**: the parser walks the input once; placeholder
//!    bodies never nest, so `}` always closes the innermost `${`.
//!
//! 2. **Balanced conditions**: every `${<name>}` needs a matching
//!    `${</name>}` in the same region; the parser rejects anything else.
//!
//! 3. **Lenient dollars**: a `$` not followed by `{` or `$` is literal
//!    text.
//!
//! # Failure Modes
//!
//! | Error | Raised when |
//! |-------|-------------|
//! | `UnclosedPlaceholder` | `${` without a closing `}` |
//! | `EmptyPlaceholder` | `${}` or a blank slot / condition / function name |
//! | `UnclosedCondition` | `${<name>}` still open at end of input |
//! | `UnexpectedConditionClose` | `${</name>}` with no open condition |
//! | `MismatchedConditionClose` | close marker names a different condition |

use std::error::Error;
use std::fmt;
use std::mem;

/// A parse failure. The template keeps none of its text on error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// `${` without a closing `}`.
    UnclosedPlaceholder,
    /// A placeholder with nothing (or only whitespace) inside.
    EmptyPlaceholder,
    /// A condition opened but never closed.
    UnclosedCondition(String),
    /// A close marker for a condition that was never opened.
    UnexpectedConditionClose(String),
    /// A close marker naming a different condition than the open one.
    MismatchedConditionClose {
        /// The innermost open condition.
        expected: String,
        /// The name the close marker carried.
        found: String,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnclosedPlaceholder => write!(f, "unclosed '${{' placeholder"),
            Self::EmptyPlaceholder => write!(f, "empty placeholder"),
            Self::UnclosedCondition(name) => {
                write!(f, "condition '{name}' is never closed")
            }
            Self::UnexpectedConditionClose(name) => {
                write!(f, "close marker for condition '{name}' without an opening")
            }
            Self::MismatchedConditionClose { expected, found } => {
                write!(f, "condition '{expected}' closed as '{found}'")
            }
        }
    }
}

impl Error for TemplateError {}

/// One node of the parsed template tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Literal text, emitted as-is.
    Text(String),
    /// `${name}`: renders the slot's bound content.
    Slot(String),
    /// `${<name>} … ${</name>}`: children render when the condition holds.
    Condition {
        /// The condition gating the children.
        name: String,
        /// Nodes between the open and close markers.
        children: Vec<Node>,
    },
    /// `${fn:arg1 arg2}`: renders the function's output.
    Function {
        /// Registered function name (the part before `:`).
        name: String,
        /// Whitespace-separated arguments after the `:`.
        args: Vec<String>,
    },
}

/// Parse template text into a node tree.
pub fn parse(text: &str) -> Result<Vec<Node>, TemplateError> {
    let mut stack: Vec<(String, Vec<Node>)> = Vec::new();
    let mut current: Vec<Node> = Vec::new();
    let mut buffer = String::new();
    let mut rest = text;

    while let Some(dollar) = rest.find('$') {
        buffer.push_str(&rest[..dollar]);
        let after = &rest[dollar + 1..];
        if let Some(tail) = after.strip_prefix('$') {
            buffer.push('$');
            rest = tail;
        } else if let Some(body) = after.strip_prefix('{') {
            let Some(close) = body.find('}') else {
                return Err(TemplateError::UnclosedPlaceholder);
            };
            let content = body[..close].trim();
            rest = &body[close + 1..];
            flush(&mut buffer, &mut current);
            placeholder(content, &mut stack, &mut current)?;
        } else {
            buffer.push('$');
            rest = after;
        }
    }
    buffer.push_str(rest);
    flush(&mut buffer, &mut current);

    if let Some((name, _)) = stack.pop() {
        return Err(TemplateError::UnclosedCondition(name));
    }
    Ok(current)
}

fn flush(buffer: &mut String, nodes: &mut Vec<Node>) {
    if !buffer.is_empty() {
        nodes.push(Node::Text(mem::take(buffer)));
    }
}

fn placeholder(
    content: &str,
    stack: &mut Vec<(String, Vec<Node>)>,
    current: &mut Vec<Node>,
) -> Result<(), TemplateError> {
    if content.is_empty() {
        return Err(TemplateError::EmptyPlaceholder);
    }

    if let Some(inner) = content.strip_prefix('<').and_then(|c| c.strip_suffix('>')) {
        if let Some(name) = inner.strip_prefix('/') {
            let name = name.trim();
            if name.is_empty() {
                return Err(TemplateError::EmptyPlaceholder);
            }
            let Some((expected, parent)) = stack.pop() else {
                return Err(TemplateError::UnexpectedConditionClose(name.to_owned()));
            };
            if expected != name {
                return Err(TemplateError::MismatchedConditionClose {
                    expected,
                    found: name.to_owned(),
                });
            }
            let children = mem::replace(current, parent);
            current.push(Node::Condition {
                name: expected,
                children,
            });
        } else {
            let name = inner.trim();
            if name.is_empty() {
                return Err(TemplateError::EmptyPlaceholder);
            }
            stack.push((name.to_owned(), mem::take(current)));
        }
        return Ok(());
    }

    if let Some((name, args)) = content.split_once(':') {
        let name = name.trim();
        if name.is_empty() {
            return Err(TemplateError::EmptyPlaceholder);
        }
        current.push(Node::Function {
            name: name.to_owned(),
            args: args.split_whitespace().map(str::to_owned).collect(),
        });
        return Ok(());
    }

    current.push(Node::Slot(content.to_owned()));
    Ok(())
}
