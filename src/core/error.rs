use super::token::Token;

pub type Result<T> = std::result::Result<T, UiError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    /// Navigation or a focus query on a container without children.
    EmptyContainer,
    /// A child broke the render contract; `index` is its position in the
    /// parent container.
    InvalidChild { index: usize, reason: String },
    /// Neither a local binding nor the focused child accepted the token.
    /// Only produced by strict dispatch.
    UnboundInput(Token),
}

impl std::fmt::Display for UiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UiError::EmptyContainer => write!(f, "container has no children"),
            UiError::InvalidChild { index, reason } => {
                write!(f, "invalid child at index {}: {}", index, reason)
            }
            UiError::UnboundInput(token) => write!(f, "unbound input: {}", token),
        }
    }
}

impl std::error::Error for UiError {}
