mod base;
mod normalize;
mod store;

pub use base::KnowledgeBase;
pub use normalize::normalize_question;
pub use store::{KnowledgeFile, KnowledgeStore};
