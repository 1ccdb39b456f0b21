//! Keyboard dismissal: drop focus from whatever element currently holds it.
//!
//! The host UI owns the element tree; this module only needs to ask it for
//! the focused element and tell that element to blur.

use std::sync::{Arc, Mutex};

pub trait Focusable {
    fn blur(&self);
}

pub trait FocusEnvironment {
    type Element: Focusable;

    fn active_element(&self) -> Option<Self::Element>;
}

/// Blurs the active element, if any. Does nothing when nothing is focused.
pub fn dismiss_keyboard<E: FocusEnvironment>(env: &E) {
    if let Some(element) = env.active_element() {
        element.blur();
    }
}

/// Focus tracking for hosts without a DOM: remembers which element id holds
/// focus.
#[derive(Debug, Clone, Default)]
pub struct FocusState {
    focused: Arc<Mutex<Option<String>>>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self, element_id: impl Into<String>) {
        *self.lock() = Some(element_id.into());
    }

    pub fn focused(&self) -> Option<String> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.focused
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[derive(Debug, Clone)]
pub struct FocusedElement {
    id: String,
    state: FocusState,
}

impl FocusedElement {
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Focusable for FocusedElement {
    fn blur(&self) {
        let mut focused = self.state.lock();
        // Focus may have moved on since this handle was taken.
        if focused.as_deref() == Some(self.id.as_str()) {
            *focused = None;
        }
    }
}

impl FocusEnvironment for FocusState {
    type Element = FocusedElement;

    fn active_element(&self) -> Option<FocusedElement> {
        self.focused().map(|id| FocusedElement {
            id,
            state: self.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blurs_focused_element() {
        let env = FocusState::new();
        env.focus("search-input");
        dismiss_keyboard(&env);
        assert!(env.focused().is_none());
    }

    #[test]
    fn nothing_focused_is_a_no_op() {
        let env = FocusState::new();
        dismiss_keyboard(&env);
        assert!(env.focused().is_none());
    }

    #[test]
    fn stale_handle_does_not_steal_new_focus() {
        let env = FocusState::new();
        env.focus("a");
        let handle = env.active_element().unwrap();
        assert_eq!(handle.id(), "a");
        env.focus("b");
        handle.blur();
        assert_eq!(env.focused().as_deref(), Some("b"));
    }
}
