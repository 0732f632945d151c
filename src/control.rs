//! The clickable "show full chart / show top N" control.

use std::fmt;

/// Identifies one installed click handler. A fresh id is issued on every rebind, so a
/// click that was dispatched to an older handler can be recognized and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

impl HandlerId {
    pub(crate) fn first() -> Self {
        Self(1)
    }

    pub(crate) fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "handler#{}", self.0)
    }
}

/// A click delivered to a handler.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    default_prevented: bool,
}

impl ClickEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress the control's default navigation.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// A UI control element the toggle controller drives.
pub trait ToggleControl {
    fn set_text(&mut self, text: &str);

    fn set_visible(&mut self, visible: bool);

    fn is_visible(&self) -> bool;

    /// Unbind whatever handler is installed and bind `handler` in one step.
    /// `None` leaves the control without a handler.
    fn replace_click_handler(&mut self, handler: Option<HandlerId>);

    fn bound_handler(&self) -> Option<HandlerId>;
}

impl<C: ToggleControl + ?Sized> ToggleControl for &mut C {
    fn set_text(&mut self, text: &str) {
        (**self).set_text(text)
    }

    fn set_visible(&mut self, visible: bool) {
        (**self).set_visible(visible)
    }

    fn is_visible(&self) -> bool {
        (**self).is_visible()
    }

    fn replace_click_handler(&mut self, handler: Option<HandlerId>) {
        (**self).replace_click_handler(handler)
    }

    fn bound_handler(&self) -> Option<HandlerId> {
        (**self).bound_handler()
    }
}

/// Headless button: text, visibility, and at most one bound handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    text: String,
    visible: bool,
    handler: Option<HandlerId>,
    rebinds: usize,
}

impl Default for Button {
    fn default() -> Self {
        Self::new("")
    }
}

impl Button {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            visible: true,
            handler: None,
            rebinds: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// How many times a handler was (re)bound.
    pub fn rebinds(&self) -> usize {
        self.rebinds
    }

    /// The handler a click would reach right now, if any.
    pub fn click_target(&self) -> Option<HandlerId> {
        self.handler.filter(|_| self.visible)
    }
}

impl ToggleControl for Button {
    fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text);
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn replace_click_handler(&mut self, handler: Option<HandlerId>) {
        if handler.is_some() {
            self.rebinds += 1;
        }
        self.handler = handler;
    }

    fn bound_handler(&self) -> Option<HandlerId> {
        self.handler
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replacing_keeps_a_single_handler() {
        let mut b = Button::new("x");
        let first = HandlerId::first();
        b.replace_click_handler(Some(first));
        b.replace_click_handler(Some(first.next()));
        assert_eq!(b.bound_handler(), Some(first.next()));
        assert_eq!(b.rebinds(), 2);
    }

    #[test]
    fn hidden_button_has_no_click_target() {
        let mut b = Button::new("x");
        b.replace_click_handler(Some(HandlerId::first()));
        b.set_visible(false);
        assert_eq!(b.click_target(), None);
    }
}
