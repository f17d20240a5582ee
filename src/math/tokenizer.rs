#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            '^' => Some(Operator::Pow),
            _ => None,
        }
    }

    /// Higher binds tighter. Equal precedence is applied left to right, which
    /// makes `^` left-associative: `2^3^2` is `(2^3)^2`.
    pub fn precedence(&self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
            Operator::Pow => 3,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Pow => '^',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Raw digit/dot run. Parsed during evaluation, so `1.2.3` survives
    /// tokenizing and fails later.
    Number(String),
    Op(Operator),
    LParen,
    RParen,
}

/// Split an expression into tokens.
///
/// Whitespace is removed first, so `1 2` reads as `12`. Characters that are
/// neither digits, `.`, operators nor parentheses are dropped without error.
pub fn tokenize(expression: &str) -> Vec<Token> {
    let stripped: String = expression.chars().filter(|c| !c.is_whitespace()).collect();
    let mut tokens = Vec::new();
    let mut chars = stripped.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '0'..='9' | '.' => {
                let mut number = String::from(c);
                while let Some(&next) = chars.peek() {
                    if next.is_ascii_digit() || next == '.' {
                        number.push(next);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token::Number(number));
            }
            '(' => tokens.push(Token::LParen),
            ')' => tokens.push(Token::RParen),
            _ => {
                if let Some(op) = Operator::from_char(c) {
                    tokens.push(Token::Op(op));
                }
            }
        }
    }

    tokens
}
