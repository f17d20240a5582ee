/// Where the dialogue currently is.
///
/// The pending question only exists while learning, so leaving `Learning`
/// always drops it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConversationState {
    #[default]
    Normal,
    Learning { pending: String },
}

impl ConversationState {
    pub fn is_learning(&self) -> bool {
        matches!(self, ConversationState::Learning { .. })
    }

    pub fn pending_question(&self) -> Option<&str> {
        match self {
            ConversationState::Normal => None,
            ConversationState::Learning { pending } => Some(pending),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ConversationState::Normal => "normal",
            ConversationState::Learning { .. } => "learning",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversation_state_default_is_normal() {
        assert_eq!(ConversationState::default(), ConversationState::Normal);
        assert!(!ConversationState::default().is_learning());
    }

    #[test]
    fn conversation_state_learning_holds_pending_question() {
        let state = ConversationState::Learning {
            pending: "co to jest kot".to_string(),
        };
        assert!(state.is_learning());
        assert_eq!(state.pending_question(), Some("co to jest kot"));
        assert_eq!(state.description(), "learning");
    }

    #[test]
    fn conversation_state_normal_has_no_pending_question() {
        assert_eq!(ConversationState::Normal.pending_question(), None);
        assert_eq!(ConversationState::Normal.description(), "normal");
    }
}
