//! Composition and input routing for a widget tree.
//!
//! A container owns an ordered list of children and a focus cursor over them.
//! Input is checked against the container's own bindings first; anything
//! unbound goes to the focused child, which may itself be a container.
//! Rendering pastes every child, in insertion order, onto a blank canvas.

use super::binding::{Bindings, NavAction};
use super::bitmap::Bitmap;
use super::cursor::Cursor;
use super::geom::{Pos, Rect, Size};
use super::widget::{Rendered, Widget};
use crate::core::{Result, Token, UiError};
use crate::settings::{apply_rules, ConfigError, KeybindingRule};

pub struct Container {
    children: Vec<Box<dyn Widget>>,
    size: Size,
    offset: Pos,
    bindings: Bindings,
    cursor: Cursor,
}

impl Container {
    /// Empty container with the default `U`/`D` bindings.
    pub fn new(size: Size, offset: Pos) -> Self {
        Self::with_bindings(size, offset, Bindings::with_defaults())
    }

    pub fn with_bindings(size: Size, offset: Pos, bindings: Bindings) -> Self {
        Self {
            children: Vec::new(),
            size,
            offset,
            bindings,
            cursor: Cursor::new(0),
        }
    }

    pub fn with_child(mut self, child: impl Widget + 'static) -> Self {
        self.push(child);
        self
    }

    pub fn with_binding(mut self, token: impl Into<Token>, action: NavAction) -> Self {
        self.bind(token.into(), action);
        self
    }

    pub fn push(&mut self, child: impl Widget + 'static) {
        self.push_boxed(Box::new(child));
    }

    pub fn push_boxed(&mut self, child: Box<dyn Widget>) {
        let index = self.children.len();
        let focusable = child.focusable();
        self.children.push(child);
        self.cursor.grow();

        // The cursor only rests on a non-focusable child while no focusable
        // one exists.
        let current = self.cursor.index();
        if focusable && !self.children[current].focusable() {
            self.cursor.land(index);
        }
    }

    pub fn bind(&mut self, token: Token, action: NavAction) -> Option<NavAction> {
        self.bindings.bind(token, action)
    }

    pub fn unbind(&mut self, token: &Token) -> Option<NavAction> {
        self.bindings.unbind(token)
    }

    /// Applies configured rules on top of the current bindings. Nothing is
    /// changed if any rule names an unknown action.
    pub fn apply_keybindings(
        &mut self,
        rules: &[KeybindingRule],
    ) -> std::result::Result<(), ConfigError> {
        apply_rules(&mut self.bindings, rules)
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    pub fn children(&self) -> &[Box<dyn Widget>] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn offset(&self) -> Pos {
        self.offset
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn cursor_index(&self) -> Result<usize> {
        self.cursor.current()
    }

    pub fn focused(&self) -> Result<&dyn Widget> {
        let index = self.cursor.current()?;
        Ok(&*self.children[index])
    }

    pub fn focused_mut(&mut self) -> Result<&mut (dyn Widget + 'static)> {
        let index = self.cursor.current()?;
        Ok(&mut *self.children[index])
    }

    /// Routes one token through this container.
    ///
    /// A bound token runs its navigation action and is never forwarded. Any
    /// other token goes to the focused child exactly once. Returns whether
    /// the token was consumed somewhere in the subtree.
    pub fn interact(&mut self, token: &Token) -> Result<bool> {
        if let Some(action) = self.bindings.resolve(token) {
            self.navigate(action)?;
            return Ok(true);
        }

        let index = self.cursor.current()?;
        let child = &mut self.children[index];
        let consumed = child.handle_input(token)?;
        if !consumed {
            tracing::trace!(token = %token, child = child.kind(), index, "input ignored");
        }
        Ok(consumed)
    }

    /// Like [`Container::interact`], but unmatched input is an error.
    pub fn interact_strict(&mut self, token: &Token) -> Result<()> {
        if self.interact(token)? {
            Ok(())
        } else {
            Err(UiError::UnboundInput(token.clone()))
        }
    }

    /// Runs a navigation action directly, as a binding would.
    pub fn navigate(&mut self, action: NavAction) -> Result<usize> {
        let children = &self.children;
        let focusable = |i: usize| children[i].focusable();
        let from = self.cursor.current()?;
        let to = match action {
            NavAction::Prev => self.cursor.prev_where(focusable)?,
            NavAction::Next => self.cursor.next_where(focusable)?,
            NavAction::First => self.cursor.first_where(focusable)?,
            NavAction::Last => self.cursor.last_where(focusable)?,
        };
        tracing::debug!(action = action.name(), from, to, "focus moved");
        Ok(to)
    }

    /// Renders the tree rooted here. Every container marks the child under
    /// its own cursor focused, nested ones included.
    pub fn render(&self) -> Result<Rendered> {
        let mut canvas = Bitmap::new(self.size);
        let cursor = self.cursor.current().ok();
        let canvas_rect = canvas.rect();

        for (index, child) in self.children.iter().enumerate() {
            let Rendered { bitmap, offset } = child.render(cursor == Some(index))?;

            if bitmap.is_empty() {
                return Err(invalid_child(index, &**child, "rendered an empty bitmap"));
            }
            // Off-canvas children are valid (scrolled out); paste clips them.
            if Rect::from_pos_size(offset, bitmap.size())
                .intersect(canvas_rect)
                .is_empty()
            {
                tracing::trace!(index, child = child.kind(), "child outside canvas");
                continue;
            }

            canvas.paste(&bitmap, offset);
        }

        Ok(Rendered::new(canvas, self.offset))
    }
}

fn invalid_child(index: usize, child: &dyn Widget, reason: &str) -> UiError {
    tracing::error!(index, child = child.kind(), reason, "invalid child");
    UiError::InvalidChild {
        index,
        reason: format!("{} {}", child.kind(), reason),
    }
}

impl Widget for Container {
    /// The container's own focus flag does not change how its children are
    /// marked.
    fn render(&self, _focused: bool) -> Result<Rendered> {
        Container::render(self)
    }

    fn handle_input(&mut self, token: &Token) -> Result<bool> {
        self.interact(token)
    }

    fn focusable(&self) -> bool {
        self.children.iter().any(|c| c.focusable())
    }

    fn kind(&self) -> &'static str {
        "container"
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/container.rs"]
mod tests;
