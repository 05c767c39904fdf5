//! Host loop glue: one token in, at most one frame out.

use crate::core::{Token, UiError};
use crate::ui::backend::Backend;
use crate::ui::core::container::Container;
use std::io;

#[derive(Debug)]
pub enum RuntimeError {
    Ui(UiError),
    Io(io::Error),
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuntimeError::Ui(e) => write!(f, "ui error: {}", e),
            RuntimeError::Io(e) => write!(f, "display error: {}", e),
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RuntimeError::Ui(e) => Some(e),
            RuntimeError::Io(e) => Some(e),
        }
    }
}

impl From<UiError> for RuntimeError {
    fn from(e: UiError) -> Self {
        RuntimeError::Ui(e)
    }
}

impl From<io::Error> for RuntimeError {
    fn from(e: io::Error) -> Self {
        RuntimeError::Io(e)
    }
}

pub struct Runtime<B: Backend> {
    root: Container,
    backend: B,
}

impl<B: Backend> Runtime<B> {
    pub fn new(root: Container, backend: B) -> Self {
        if root.size() != backend.size() {
            tracing::warn!(
                root_w = root.size().w,
                root_h = root.size().h,
                display_w = backend.size().w,
                display_h = backend.size().h,
                "root size differs from display; frame will be clipped or padded"
            );
        }
        Self { root, backend }
    }

    pub fn root(&self) -> &Container {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Container {
        &mut self.root
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_parts(self) -> (Container, B) {
        (self.root, self.backend)
    }

    /// Renders the whole tree and hands the frame to the backend.
    pub fn redraw(&mut self) -> Result<(), RuntimeError> {
        let frame = self.root.render()?;
        self.backend.present(&frame)?;
        tracing::trace!("frame presented");
        Ok(())
    }

    /// Routes one token through the tree and redraws when something took it.
    /// Returns whether the token was consumed.
    pub fn feed(&mut self, token: &Token) -> Result<bool, RuntimeError> {
        let consumed = self.root.interact(token)?;
        if consumed {
            self.redraw()?;
        }
        Ok(consumed)
    }

    /// Plays a scripted token sequence, stopping at the first error.
    pub fn play<I>(&mut self, tokens: I) -> Result<usize, RuntimeError>
    where
        I: IntoIterator<Item = Token>,
    {
        let mut consumed = 0;
        for token in tokens {
            if self.feed(&token)? {
                consumed += 1;
            }
        }
        Ok(consumed)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/runtime.rs"]
mod tests;
