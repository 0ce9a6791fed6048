use uuid::Uuid;

/// The explicit edit-mode state machine: at most one order is being edited
/// at a time, and leaving the form by submit or cancel always returns to
/// `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Idle,
    Editing(Uuid),
}

impl EditState {
    pub fn start(&mut self, id: Uuid) {
        *self = EditState::Editing(id);
    }

    pub fn finish(&mut self) {
        *self = EditState::Idle;
    }

    pub fn editing_id(&self) -> Option<Uuid> {
        match self {
            EditState::Idle => None,
            EditState::Editing(id) => Some(*id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitions_between_idle_and_editing() {
        let mut state = EditState::default();
        assert_eq!(state.editing_id(), None);

        let id = Uuid::new_v4();
        state.start(id);
        assert_eq!(state.editing_id(), Some(id));

        state.finish();
        assert_eq!(state, EditState::Idle);
    }
}
