//! Single-selection state machine.
//!
//! At most one event is expanded at a time. Activating the selected event
//! collapses it; activating any other event moves the selection there.

/// Which event, if any, is currently expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Unselected,
    Selected(usize),
}

impl Selection {
    /// Apply a user activation of the event at `index`.
    pub fn toggle(&mut self, index: usize) {
        *self = match *self {
            Selection::Selected(current) if current == index => Selection::Unselected,
            _ => Selection::Selected(index),
        };
    }

    /// Whether the event at `index` is expanded.
    pub fn is_selected(self, index: usize) -> bool {
        self == Selection::Selected(index)
    }

    /// Index of the expanded event.
    pub fn index(self) -> Option<usize> {
        match self {
            Selection::Selected(index) => Some(index),
            Selection::Unselected => None,
        }
    }

    pub fn clear(&mut self) {
        *self = Selection::Unselected;
    }
}

/// Owner of the selection, as seen by the rendering layer.
pub trait SelectionController {
    /// Current selection.
    fn selection(&self) -> Selection;

    /// Handle a user activation of the event at `index`.
    fn activate(&mut self, index: usize);
}

impl SelectionController for Selection {
    fn selection(&self) -> Selection {
        *self
    }

    fn activate(&mut self, index: usize) {
        self.toggle(index);
    }
}
