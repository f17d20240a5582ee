mod conversation;

pub use conversation::{format_result, is_exit_command, ConversationEngine};
