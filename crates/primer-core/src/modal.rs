// ── Bottom-sheet modal ──
//
// At most one overlay is open. `close` is total: whatever state the modal
// is in, it ends up `Closed` with its payload dropped and scroll unlocked.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::ProfileField;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModalState {
    #[default]
    Closed,
    Detail {
        property_id: String,
    },
    PriceFilter,
    FilterPanel,
    EditField {
        field: ProfileField,
        draft: String,
    },
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Id of the listing shown in a detail sheet.
    pub fn detail_id(&self) -> Option<&str> {
        match self {
            Self::Detail { property_id } => Some(property_id),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct ModalController {
    state: ModalState,
}

impl ModalController {
    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Page scrolling is locked while any sheet is mounted.
    pub fn scroll_locked(&self) -> bool {
        self.state.is_open()
    }

    /// Mount `state`, replacing whatever was open.
    pub fn open(&mut self, state: ModalState) {
        debug!(?state, "modal opened");
        self.state = state;
    }

    /// Close and drop the payload. Returns whether anything was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.state.is_open();
        if was_open {
            debug!("modal closed");
        }
        self.state = ModalState::Closed;
        was_open
    }

    /// Replace the draft of an open field editor. Ignored otherwise.
    pub fn set_draft(&mut self, value: &str) {
        if let ModalState::EditField { draft, .. } = &mut self.state {
            value.clone_into(draft);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn close_is_idempotent() {
        let mut modal = ModalController::default();
        assert!(!modal.close());
        modal.open(ModalState::PriceFilter);
        assert!(modal.scroll_locked());
        assert!(modal.close());
        assert!(!modal.close());
        assert_eq!(modal.state(), &ModalState::Closed);
        assert!(!modal.scroll_locked());
    }

    #[test]
    fn open_replaces_previous_sheet() {
        let mut modal = ModalController::default();
        modal.open(ModalState::Detail {
            property_id: "prop1".into(),
        });
        modal.open(ModalState::FilterPanel);
        assert_eq!(modal.state(), &ModalState::FilterPanel);
        assert_eq!(modal.state().detail_id(), None);
    }

    #[test]
    fn draft_only_changes_in_editor() {
        let mut modal = ModalController::default();
        modal.set_draft("ignored");
        assert_eq!(modal.state(), &ModalState::Closed);

        modal.open(ModalState::EditField {
            field: ProfileField::Email,
            draft: "old@example.com".into(),
        });
        modal.set_draft("new@example.com");
        assert_eq!(
            modal.state(),
            &ModalState::EditField {
                field: ProfileField::Email,
                draft: "new@example.com".into()
            }
        );
    }
}
