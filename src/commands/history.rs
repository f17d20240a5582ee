use anyhow::{Context, Result};
use clap::Args as ClapArgs;

use crate::config::Config;
use crate::knowledge::KnowledgeFile;
use crate::models::Interaction;
use crate::utils::{display_timestamp, truncate_str};

#[derive(ClapArgs)]
pub struct Args {
    /// Only show answers that were taught
    #[arg(long)]
    pub learned: bool,

    /// Show at most this many of the most recent interactions
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

pub async fn execute(args: Args, config: Config) -> Result<()> {
    let store = KnowledgeFile::load(config.data_file.clone())
        .with_context(|| format!("Failed to load knowledge from {:?}", config.data_file))?;

    let interactions = select_interactions(&store.data().history, args.learned, args.limit);

    if interactions.is_empty() {
        println!("No interactions recorded.");
        return Ok(());
    }

    println!(
        "{:<17} {:<7} {:<32} {}",
        "TIME", "TAUGHT", "QUESTION", "ANSWER"
    );
    println!("{}", "-".repeat(90));

    for interaction in interactions {
        println!("{}", format_row(interaction));
    }

    Ok(())
}

/// Latest `limit` interactions in chronological order, optionally only
/// the taught ones.
fn select_interactions(
    history: &[Interaction],
    learned_only: bool,
    limit: Option<usize>,
) -> Vec<&Interaction> {
    let matching: Vec<&Interaction> = history
        .iter()
        .filter(|i| !learned_only || i.learned)
        .collect();
    let skip = limit.map_or(0, |n| matching.len().saturating_sub(n));
    matching.into_iter().skip(skip).collect()
}

fn format_row(interaction: &Interaction) -> String {
    format!(
        "{:<17} {:<7} {:<32} {}",
        display_timestamp(&interaction.timestamp),
        if interaction.learned { "yes" } else { "" },
        truncate_str(&interaction.question, 30),
        truncate_str(&interaction.answer, 40)
    )
}
