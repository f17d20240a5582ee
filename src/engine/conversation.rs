use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use regex::Regex;
use std::sync::OnceLock;
use tracing::{debug, error, info};

use crate::knowledge::{normalize_question, KnowledgeStore};
use crate::math::evaluate;
use crate::models::{ConversationState, Interaction};
use crate::personality::{PhraseProvider, CALC_FAILURE, SKIP_ACK};

const SKIP_COMMAND: &str = "skip";
const EXIT_COMMAND: &str = "koniec";

fn calculation_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(policz|oblicz)\s*([\d+\-*/()^\s]+)").expect("calculation pattern is valid")
    })
}

/// Extract the expression from a request such as `policz 2 + 2`.
///
/// The cue word may appear anywhere in the line; the expression is the run
/// of digits, operators, parentheses and spaces right after it.
pub fn calculation_request(input: &str) -> Option<String> {
    let lowered = input.to_lowercase();
    calculation_pattern()
        .captures(&lowered)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str().trim().to_string())
}

/// Whether a line asks to end the session. Valid in every state.
pub fn is_exit_command(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(EXIT_COMMAND)
}

/// Integral results keep one decimal place, so `4` prints as `4.0`.
/// From 1e16 up the value switches to exponent form, e.g. `1e+17`.
pub fn format_result(value: f64) -> String {
    if value.abs() >= 1e16 {
        return exponent_form(value);
    }
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

fn exponent_form(value: f64) -> String {
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exponent) => format!("{}e{:+03}", mantissa, exponent),
            Err(_) => formatted,
        },
        None => formatted,
    }
}

/// The dialogue controller. Routes every line to the calculator, the
/// knowledge store or the learning flow and remembers one pending question.
pub struct ConversationEngine<S, P> {
    store: S,
    phrases: P,
    rng: StdRng,
    state: ConversationState,
}

impl<S: KnowledgeStore, P: PhraseProvider> ConversationEngine<S, P> {
    pub fn new(store: S, phrases: P, rng: StdRng) -> Self {
        Self {
            store,
            phrases,
            rng,
            state: ConversationState::Normal,
        }
    }

    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn greeting(&mut self) -> String {
        self.phrases.greeting(&mut self.rng)
    }

    /// Handle one line of user input and return the reply.
    pub fn process(&mut self, input: &str) -> String {
        let input = input.trim();

        match std::mem::take(&mut self.state) {
            ConversationState::Learning { pending } => self.finish_learning(&pending, input),
            ConversationState::Normal => self.respond(input),
        }
    }

    fn finish_learning(&mut self, question: &str, answer: &str) -> String {
        if answer.eq_ignore_ascii_case(SKIP_COMMAND) {
            debug!("Skipped teaching: {}", question);
            return SKIP_ACK.to_string();
        }

        self.learn(question, answer);
        self.phrases.gratitude(&mut self.rng)
    }

    fn respond(&mut self, input: &str) -> String {
        if let Some(expression) = calculation_request(input) {
            return self.calculate(&expression);
        }

        if let Some(answer) = self.answer(input) {
            return answer;
        }

        self.state = ConversationState::Learning {
            pending: input.to_string(),
        };
        self.phrases.learning_request(&mut self.rng)
    }

    fn calculate(&self, expression: &str) -> String {
        match evaluate(expression) {
            Ok(result) => format!(
                "Wynik działania {} = {} 📊",
                expression,
                format_result(result)
            ),
            Err(e) => {
                debug!("Cannot evaluate {:?}: {}", expression, e);
                CALC_FAILURE.to_string()
            }
        }
    }

    fn answer(&mut self, question: &str) -> Option<String> {
        let key = normalize_question(question);
        let answer = self.store.lookup(&key)?.choose(&mut self.rng)?.clone();

        self.store
            .record(Interaction::answered(question, answer.as_str()));
        self.persist();
        debug!("Answered {:?} from knowledge", key);
        Some(answer)
    }

    fn learn(&mut self, question: &str, answer: &str) {
        let key = normalize_question(question);
        self.store.record(Interaction::learned(question, answer));
        if !self.store.teach(&key, answer) {
            debug!("Answer already known for {:?}", key);
        }
        self.persist();
        info!("Learned answer: {} -> {}", key, answer);
    }

    /// Save failures are logged and the conversation continues in memory.
    fn persist(&self) {
        if let Err(e) = self.store.save() {
            error!("Failed to save knowledge: {}", e);
        }
    }
}
