use anyhow::{Context, Result};
use clap::Args as ClapArgs;

use crate::config::Config;
use crate::knowledge::{KnowledgeBase, KnowledgeFile};
use crate::utils::truncate_str;

#[derive(ClapArgs)]
pub struct Args {
    /// Show every answer instead of only the first one
    #[arg(short, long)]
    pub all: bool,
}

pub async fn execute(args: Args, config: Config) -> Result<()> {
    let store = KnowledgeFile::load(config.data_file.clone())
        .with_context(|| format!("Failed to load knowledge from {:?}", config.data_file))?;
    let data = store.data();

    if data.question_count() == 0 {
        println!("Nothing learned yet.");
        return Ok(());
    }

    println!("{:<40} {:>7} {}", "QUESTION", "ANSWERS", "ANSWER");
    println!("{}", "-".repeat(90));
    for line in format_rows(data, args.all) {
        println!("{}", line);
    }
    println!(
        "\n{} questions, {} answers taught in total",
        data.question_count(),
        data.learned_count()
    );

    Ok(())
}

fn format_rows(data: &KnowledgeBase, all: bool) -> Vec<String> {
    let mut rows = Vec::new();
    for (question, answers) in &data.knowledge_base {
        let mut shown = answers.iter();
        let first = shown.next().map(String::as_str).unwrap_or("");
        rows.push(format!(
            "{:<40} {:>7} {}",
            truncate_str(question, 38),
            answers.len(),
            truncate_str(first, 40)
        ));
        if all {
            for answer in shown {
                rows.push(format!("{:<40} {:>7} {}", "", "", truncate_str(answer, 40)));
            }
        }
    }
    rows
}
