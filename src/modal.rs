use crate::content::ExperienceRecord;

pub const ESCAPE_KEY: &str = "Escape";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalPhase {
    #[default]
    Closed,
    Open,
    Closing,
}

/// Identifies the close that a completion belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseToken(u64);

/// Detail overlay lifecycle: the selected record outlives the exit animation
/// and is only cleared by [`ModalState::finish_close`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalState {
    selected: Option<ExperienceRecord>,
    phase: ModalPhase,
    generation: u64,
}

impl ModalState {
    pub fn selected(&self) -> Option<&ExperienceRecord> {
        self.selected.as_ref()
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase == ModalPhase::Open
    }

    /// Page scroll stays suspended until the exit animation has finished.
    pub fn scroll_locked(&self) -> bool {
        self.phase != ModalPhase::Closed
    }

    pub fn open(&mut self, record: ExperienceRecord) {
        self.generation += 1;
        self.selected = Some(record);
        self.phase = ModalPhase::Open;
    }

    /// Starts the exit animation. `None` when there is nothing to close.
    pub fn close(&mut self) -> Option<CloseToken> {
        if self.phase != ModalPhase::Open {
            return None;
        }
        self.generation += 1;
        self.phase = ModalPhase::Closing;
        Some(CloseToken(self.generation))
    }

    /// Clears the selection once the exit animation is done. Stale tokens
    /// (the overlay was reopened meanwhile) are ignored.
    pub fn finish_close(&mut self, token: CloseToken) -> bool {
        if self.phase != ModalPhase::Closing || token.0 != self.generation {
            return false;
        }
        self.phase = ModalPhase::Closed;
        self.selected = None;
        true
    }

    pub fn handle_key(&mut self, key: &str) -> Option<CloseToken> {
        if key == ESCAPE_KEY {
            self.close()
        } else {
            None
        }
    }
}
