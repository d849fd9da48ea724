/*!
Error types used in the library.

Names of the error enums overlap with the components that raise them. As in
the rest of the library, runtime failures during labelling do not exist ---
the propagation procedures are total. All the variants here are raised
either at construction time (a malformed system, an inconsistent knowledge
base passed to the strict constructor) or by callers asking for something
that isn't there (an unknown identifier).
*/

use crate::structures::atom::Atom;

/// A union of the error kinds raised by this crate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// An error building an [`ArgumentationSystem`](crate::structures::system::ArgumentationSystem).
    MalformedSystem(MalformedSystem),

    /// An inconsistent knowledge base was passed to a constructor that
    /// requires consistency up front.
    InconsistentKnowledgeBase(InconsistentKnowledgeBase),

    /// A caller asked for an identifier not present in the language.
    UnknownIdentifier(String),

    /// A bounded generation procedure could not meet its parameters within
    /// its retry budget.
    GeneratorExhausted,

    /// An error parsing a textual form (a [`StabilityLabel`](crate::structures::label::StabilityLabel)
    /// or a dataset sample line).
    Parse(ParseError),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::MalformedSystem(e) => write!(f, "malformed argumentation system: {e}"),
            ErrorKind::InconsistentKnowledgeBase(e) => write!(f, "inconsistent knowledge base: {e}"),
            ErrorKind::UnknownIdentifier(id) => write!(f, "unknown identifier: {id}"),
            ErrorKind::GeneratorExhausted => write!(f, "generator exhausted its retry budget"),
            ErrorKind::Parse(e) => write!(f, "parse error: {e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

use std::fmt;

/// Errors raised while building an [`ArgumentationSystem`](crate::structures::system::ArgumentationSystem).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MalformedSystem {
    /// Two literals were registered under the same identifier.
    DuplicateIdentifier(String),

    /// A literal was registered without its negation.
    MissingNegation(String),

    /// A rule's antecedent is not part of the system's language.
    UnknownAntecedent(String),

    /// A rule's consequent is not part of the system's language.
    UnknownConsequent(String),

    /// A rule preference could not be parsed.
    InvalidRulePreference(String),
}

impl fmt::Display for MalformedSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedSystem::DuplicateIdentifier(id) => write!(f, "duplicate identifier `{id}`"),
            MalformedSystem::MissingNegation(id) => write!(f, "literal `{id}` has no registered negation"),
            MalformedSystem::UnknownAntecedent(id) => write!(f, "antecedent `{id}` is not in the language"),
            MalformedSystem::UnknownConsequent(id) => write!(f, "consequent `{id}` is not in the language"),
            MalformedSystem::InvalidRulePreference(s) => write!(f, "invalid rule preference `{s}`"),
        }
    }
}

impl From<MalformedSystem> for ErrorKind {
    fn from(e: MalformedSystem) -> Self {
        ErrorKind::MalformedSystem(e)
    }
}

/// Raised only by the strict theory constructor (the engine's public `update`
/// silently filters inconsistent observations instead, per spec).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InconsistentKnowledgeBase {
    pub first: Atom,
    pub second: Atom,
}

impl fmt::Display for InconsistentKnowledgeBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "atoms {} and {} are contrary", self.first, self.second)
    }
}

impl From<InconsistentKnowledgeBase> for ErrorKind {
    fn from(e: InconsistentKnowledgeBase) -> Self {
        ErrorKind::InconsistentKnowledgeBase(e)
    }
}

/// Errors parsing a textual representation ([`StabilityLabel`](crate::structures::label::StabilityLabel)
/// or a dataset sample line).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// A required delimiter (`(U:`, `, D:`, etc.) was not found.
    MissingDelimiter,

    /// A value was present but didn't parse into the expected type.
    Malformed,

    /// A line, numbered from 1, failed to parse.
    Line(usize),

    /// The input was empty where a non-empty value was required.
    Empty,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingDelimiter => write!(f, "missing delimiter"),
            ParseError::Malformed => write!(f, "malformed value"),
            ParseError::Line(n) => write!(f, "malformed input at line {n}"),
            ParseError::Empty => write!(f, "unexpected empty input"),
        }
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl std::error::Error for ParseError {}
impl std::error::Error for MalformedSystem {}
impl std::error::Error for InconsistentKnowledgeBase {}
