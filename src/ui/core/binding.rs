//! Local key bindings: token -> navigation action.
//!
//! Every container owns its own map. The map stores the action to run, never
//! the result of running it.

use crate::core::Token;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavAction {
    Prev,
    Next,
    First,
    Last,
}

impl NavAction {
    pub fn name(self) -> &'static str {
        match self {
            NavAction::Prev => "prev",
            NavAction::Next => "next",
            NavAction::First => "first",
            NavAction::Last => "last",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let v = value.trim().to_ascii_lowercase();
        match v.as_str() {
            "prev" | "previous" | "up" | "focusprev" | "focus_prev" => Some(Self::Prev),
            "next" | "down" | "focusnext" | "focus_next" => Some(Self::Next),
            "first" | "home" | "focusfirst" | "focus_first" => Some(Self::First),
            "last" | "end" | "focuslast" | "focus_last" => Some(Self::Last),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bindings {
    map: FxHashMap<Token, NavAction>,
}

impl Bindings {
    pub fn empty() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    /// `U` -> previous child, `D` -> next child.
    pub fn with_defaults() -> Self {
        let mut map = FxHashMap::default();
        map.insert(Token::up(), NavAction::Prev);
        map.insert(Token::down(), NavAction::Next);
        Self { map }
    }

    pub fn resolve(&self, token: &Token) -> Option<NavAction> {
        self.map.get(token).copied()
    }

    pub fn bind(&mut self, token: Token, action: NavAction) -> Option<NavAction> {
        self.map.insert(token, action)
    }

    pub fn unbind(&mut self, token: &Token) -> Option<NavAction> {
        self.map.remove(token)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Token, &NavAction)> {
        self.map.iter()
    }
}

impl Default for Bindings {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/binding.rs"]
mod tests;
