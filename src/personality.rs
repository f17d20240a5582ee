use rand::seq::SliceRandom;
use rand::RngCore;

pub const SKIP_ACK: &str = "Okej, nie ma sprawy! 😊";
pub const CALC_FAILURE: &str = "Przepraszam, ale nie mogę wykonać tego działania 😅";
pub const FAREWELL: &str = "Pa pa! 👋";
pub const TURN_FAILURE: &str = "Ups, coś poszło nie tak... 😅";
pub const LOAD_FAILURE_NOTICE: &str = "Wystąpił błąd podczas ładowania wiedzy. Zaczynam od nowa!";
pub const USAGE_HINT: &str = "Możesz ze mną rozmawiać, prosić o obliczenia (np. 'policz 2 + 2')\n\
lub napisać 'koniec' aby zakończyć rozmowę.";

const GREETINGS: &[&str] = &[
    "Hej! 😊",
    "Cześć!",
    "Dzień dobry! 👋",
    "Siema!",
    "Witaj! ✨",
    "Co słychać? 😊",
];

const LEARNING_REQUESTS: &[&str] = &[
    "Nie wiem, nauczysz mnie? 🤔",
    "Pierwsze słyszę! Co to?",
    "Opowiesz mi o tym? 😊",
    "A co to takiego?",
    "Nie znam tego jeszcze!",
    "Wyjaśnisz? 🤗",
];

const GRATITUDE: &[&str] = &[
    "Dzięki! 💖",
    "Super, że mi powiedziałeś!",
    "O, fajnie! 😊",
    "Świetnie! Zapamiętam!",
    "Dzięki za wyjaśnienie! ✨",
    "Ekstra! 🌟",
];

/// Source of the bot's conversational phrases. Randomness comes from the
/// caller so a seeded generator gives reproducible conversations.
pub trait PhraseProvider {
    fn greeting(&self, rng: &mut dyn RngCore) -> String;
    fn learning_request(&self, rng: &mut dyn RngCore) -> String;
    fn gratitude(&self, rng: &mut dyn RngCore) -> String;
}

/// Warm, chatty persona with a few interchangeable templates per situation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Personality;

fn pick(templates: &[&str], rng: &mut dyn RngCore) -> String {
    templates.choose(rng).copied().unwrap_or_default().to_string()
}

impl PhraseProvider for Personality {
    fn greeting(&self, rng: &mut dyn RngCore) -> String {
        pick(GREETINGS, rng)
    }

    fn learning_request(&self, rng: &mut dyn RngCore) -> String {
        pick(LEARNING_REQUESTS, rng)
    }

    fn gratitude(&self, rng: &mut dyn RngCore) -> String {
        pick(GRATITUDE, rng)
    }
}
