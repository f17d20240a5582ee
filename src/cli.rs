use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{calc, chat, history, knowledge};

#[derive(Parser)]
#[command(name = "dawid")]
#[command(about = "Dawid - chats, calculates and learns new answers")]
#[command(version)]
pub struct Cli {
    /// Custom config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Knowledge file to use (overrides config)
    #[arg(short, long, global = true)]
    pub data_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive conversation (default)
    Chat(chat::Args),

    /// Evaluate an arithmetic expression and exit
    Calc(calc::Args),

    /// Show recorded questions and answers
    History(history::Args),

    /// List everything Dawid has learned
    Knowledge(knowledge::Args),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_without_subcommand_defaults_to_none() {
        let cli = Cli::try_parse_from(["dawid"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_calc_accepts_multiple_words() {
        let cli = Cli::try_parse_from(["dawid", "calc", "2", "+", "2"]).unwrap();
        match cli.command {
            Some(Commands::Calc(args)) => assert_eq!(args.expression, vec!["2", "+", "2"]),
            _ => panic!("expected calc subcommand"),
        }
    }

    #[test]
    fn cli_global_data_file_after_subcommand() {
        let cli = Cli::try_parse_from(["dawid", "history", "--data-file", "kb.json", "-n", "3"])
            .unwrap();
        assert_eq!(cli.data_file, Some(PathBuf::from("kb.json")));
        match cli.command {
            Some(Commands::History(args)) => assert_eq!(args.limit, Some(3)),
            _ => panic!("expected history subcommand"),
        }
    }

    #[test]
    fn cli_chat_seed() {
        let cli = Cli::try_parse_from(["dawid", "chat", "--seed", "42"]).unwrap();
        match cli.command {
            Some(Commands::Chat(args)) => assert_eq!(args.seed, Some(42)),
            _ => panic!("expected chat subcommand"),
        }
    }
}
