use crate::render::backend::BackendKind;

/// Two-valued accessor for the active backend choice.
///
/// The selector only tracks the choice; the switch-ordering rule (stop the
/// outgoing driver before constructing the incoming backend) is enforced by
/// [`CursorSession::toggle_backend`](crate::CursorSession::toggle_backend).
/// The choice is not persisted across restarts.
#[derive(Clone, Copy, Debug)]
pub struct BackendSelector {
    active: BackendKind,
}

impl Default for BackendSelector {
    fn default() -> Self {
        Self::new(BackendKind::Scripted)
    }
}

impl BackendSelector {
    /// Create a selector with `initial` active.
    pub fn new(initial: BackendKind) -> Self {
        Self { active: initial }
    }

    /// The currently selected backend kind.
    pub fn active(&self) -> BackendKind {
        self.active
    }

    /// Whether the compiled-module backend is the active choice.
    pub fn is_module_active(&self) -> bool {
        self.active == BackendKind::Module
    }

    /// Flip to the other backend and return the incoming kind.
    pub fn toggle(&mut self) -> BackendKind {
        self.active = self.active.other();
        self.active
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/selector.rs"]
mod tests;
