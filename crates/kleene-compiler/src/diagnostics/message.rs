use super::Span;

/// What went wrong, roughly in the order a reader should fix things.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Unbalanced parentheses
    UnclosedGroup,
    UnmatchedParen,

    // Something required is absent
    EmptyExpression,
    EmptyGroup,
    MissingOperand,

    // Something that does not belong
    UnexpectedCharacter,

    // Postfix evaluation left more than one fragment
    UnreducedExpression,

    // Valid but suspicious
    StackedQuantifier,
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::StackedQuantifier => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Message used when no detail is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnclosedGroup => "missing closing `)`",
            Self::UnmatchedParen => "unmatched `)`",
            Self::EmptyExpression => "expected an expression",
            Self::EmptyGroup => "empty group `()`",
            Self::MissingOperand => "operator is missing an operand",
            Self::UnexpectedCharacter => "unexpected character",
            Self::UnreducedExpression => "expression does not reduce to a single automaton",
            Self::StackedQuantifier => "quantifier applied to a quantified expression",
        }
    }

    /// Template for messages with detail; `{}` is replaced by the detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::UnclosedGroup => format!("{}; {{}}", self.fallback_message()),
            Self::UnexpectedCharacter => "unexpected `{}`".to_string(),
            Self::MissingOperand => "{}".to_string(),
            Self::StackedQuantifier => "{}".to_string(),
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// - `None`: the fallback message
    /// - `Some(detail)`: the custom template filled with `detail`
    pub fn message(&self, detail: Option<&str>) -> String {
        match detail {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RelatedInfo {
    pub(crate) span: Span,
    pub(crate) message: String,
}

impl RelatedInfo {
    pub(crate) fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// Underlined in rendered output.
    pub(crate) span: Span,
    pub(crate) message: String,
    pub(crate) related: Vec<RelatedInfo>,
}

impl DiagnosticMessage {
    pub(crate) fn with_default_message(kind: DiagnosticKind, span: Span) -> Self {
        Self {
            kind,
            span,
            message: kind.fallback_message().to_string(),
            related: Vec::new(),
        }
    }

    pub(crate) fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub(crate) fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub(crate) fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}..{}: {}",
            self.severity(),
            self.span.start,
            self.span.end,
            self.message
        )?;
        for related in &self.related {
            write!(
                f,
                " (related: {} at {}..{})",
                related.message, related.span.start, related.span.end
            )?;
        }
        Ok(())
    }
}
