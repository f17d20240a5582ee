mod evaluator;
mod tokenizer;

pub use evaluator::evaluate;
