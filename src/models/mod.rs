mod conversation;
mod interaction;

pub use conversation::ConversationState;
pub use interaction::Interaction;
