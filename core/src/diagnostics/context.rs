use crate::api::RelatedInfo;
use crate::parser::Span;
use crate::{String, format};

/// Context information for error messages.
///
/// Points at an enclosing construct of the failure, such as the declaration
/// being parsed. Each entry becomes a secondary label when rendered.
#[derive(Debug, Clone)]
pub enum Context {
    /// Inside the declaration of a variable
    InDeclaration { name: String, span: Span },
    /// Inside an operator chain
    InExpression { kind: String, span: Span },
}

impl Context {
    /// Convert to a RelatedInfo for diagnostic display
    pub fn to_related_info(&self) -> RelatedInfo {
        match self {
            Context::InDeclaration { name, span } => RelatedInfo {
                span: span.clone(),
                message: format!("in declaration of `{}`", name),
            },
            Context::InExpression { kind, span } => RelatedInfo {
                span: span.clone(),
                message: format!("in {}", kind),
            },
        }
    }
}
