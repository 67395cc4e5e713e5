//! Interaction logic of the text field.
//!
//! The handlers here are written against [`FieldHandle`] so they can run both
//! on the real `<input>` ([`DomField`]) and on an in-memory field in tests
//! ([`MockField`]).

mod dom;
#[cfg(test)]
mod mock;

use std::time::Duration;

use dioxus::prelude::Key;
pub use dom::DomField;
#[cfg(test)]
pub use mock::MockField;

use crate::config::{FieldType, IconAction, InputConfig};
use crate::slot::IconSlot;

/// Delay before selecting the value of a freshly focused field. Mobile
/// browsers drop a selection made during the focus event itself.
pub const SELECT_DELAY: Duration = Duration::from_millis(100);

/// End of the selection range used by [`FieldHandle::select_all`]. Some mobile
/// browsers under-select with `select()` alone.
pub const SELECTION_END: usize = 9999;

pub trait FieldHandle {
    fn value(&self) -> String;
    fn set_value(&mut self, value: String);
    fn focus(&mut self);
    fn blur(&mut self);
    /// Selects the whole value, with the range end forced to [`SELECTION_END`].
    fn select_all(&mut self);
    /// Copies the current selection to the clipboard.
    fn copy_selection(&mut self);
}

/// The `type` attribute to render. Revealing only affects password fields.
pub fn effective_type(field_type: FieldType, password_is_readable: bool) -> FieldType {
    match field_type {
        FieldType::Password if password_is_readable => FieldType::Text,
        other => other,
    }
}

/// Handles a key press. Enter submits the trimmed value unless it is empty,
/// then optionally clears and blurs the field. An Enter that commits an IME
/// composition is not a submission.
///
/// Returns whether a submission happened.
pub fn press_key<F: FieldHandle>(
    field: &mut F,
    key: &Key,
    is_composing: bool,
    config: &InputConfig,
    on_press_enter: impl FnOnce(String),
) -> bool {
    if *key != Key::Enter || is_composing {
        return false;
    }

    let value = field.value().trim().to_owned();
    if value.is_empty() {
        return false;
    }

    on_press_enter(value);
    if config.clear {
        field.set_value(String::new());
    }
    if config.blur {
        field.blur();
    }
    true
}

/// Records a new value and reports it trimmed, empty or not.
pub fn change<F: FieldHandle>(field: &mut F, value: String, on_value_change: impl FnOnce(String)) {
    let trimmed = value.trim().to_owned();
    field.set_value(value);
    on_value_change(trimmed);
}

/// Whether gaining focus should schedule a select-all.
pub fn selects_on_focus<F: FieldHandle>(field: &F, config: &InputConfig) -> bool {
    config.select && !field.value().is_empty()
}

pub fn run_icon_action<F: FieldHandle>(field: &mut F, action: IconAction) {
    tracing::debug!(?action, "icon clicked");
    match action {
        IconAction::Copy => {
            field.select_all();
            field.copy_selection();
        }
        IconAction::Clear => {
            field.set_value(String::new());
            field.focus();
        }
        IconAction::Select => field.select_all(),
        IconAction::None => {}
    }
}

/// Handles a click on the icon slot: runs the single icon's action or flips
/// the password toggle.
pub fn click_slot<F: FieldHandle>(
    field: &mut F,
    slot: IconSlot<'_>,
    password_is_readable: &mut bool,
) {
    match slot {
        IconSlot::None => {}
        IconSlot::Single { action, .. } => run_icon_action(field, action),
        IconSlot::PasswordToggle(_) => {
            *password_is_readable = !*password_is_readable;
            tracing::debug!(readable = *password_is_readable, "password toggled");
        }
    }
}

/// Tracks the select-all scheduled on focus.
///
/// Every scheduling gets a new ticket. A timer that fires with an old ticket,
/// or after [`SelectTimer::disarm`], must not select anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectTimer {
    ticket: u64,
    armed: bool,
}

impl SelectTimer {
    pub fn arm(&mut self) -> u64 {
        self.ticket += 1;
        self.armed = true;
        self.ticket
    }

    pub fn disarm(&mut self) {
        self.armed = false;
    }

    /// Consumes the pending selection if `ticket` is still current.
    pub fn fire(&mut self, ticket: u64) -> bool {
        let due = self.armed && self.ticket == ticket;
        if due {
            self.armed = false;
        }
        due
    }
}
