//! Confirmation gates for destructive operations.
//!
//! Each gate is an independent flag: `Hidden -> Visible` on request, back to
//! `Hidden` on accept or cancel. Both may be visible at once.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmKind {
    /// Clear the selected thread.
    ClearCurrent,
    /// Clear every thread.
    ClearAll,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfirmFlags {
    pub clear_current: bool,
    pub clear_all: bool,
}

impl ConfirmFlags {
    pub fn is_visible(&self, kind: ConfirmKind) -> bool {
        match kind {
            ConfirmKind::ClearCurrent => self.clear_current,
            ConfirmKind::ClearAll => self.clear_all,
        }
    }

    pub fn show(&mut self, kind: ConfirmKind) {
        *self.flag_mut(kind) = true;
    }

    pub fn hide(&mut self, kind: ConfirmKind) {
        *self.flag_mut(kind) = false;
    }

    /// The gate to present first when more than one is visible.
    pub fn active(&self) -> Option<ConfirmKind> {
        if self.clear_current {
            Some(ConfirmKind::ClearCurrent)
        } else if self.clear_all {
            Some(ConfirmKind::ClearAll)
        } else {
            None
        }
    }

    fn flag_mut(&mut self, kind: ConfirmKind) -> &mut bool {
        match kind {
            ConfirmKind::ClearCurrent => &mut self.clear_current,
            ConfirmKind::ClearAll => &mut self.clear_all,
        }
    }
}
