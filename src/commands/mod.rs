pub mod calc;
pub mod chat;
pub mod history;
pub mod knowledge;
