use anyhow::Result;
use clap::Args as ClapArgs;
use std::future::Future;
use std::io::{self, BufRead, BufReader, Write};
use tokio::signal;
use tokio::sync::mpsc;

use crate::config::Config;
use crate::engine::{is_exit_command, ConversationEngine};
use crate::knowledge::{KnowledgeFile, KnowledgeStore};
use crate::personality::{
    Personality, PhraseProvider, FAREWELL, LOAD_FAILURE_NOTICE, TURN_FAILURE, USAGE_HINT,
};

#[derive(ClapArgs, Default)]
pub struct Args {
    /// Seed for phrase and answer selection (reproducible conversations)
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed the exit command.
    Requested,
    Interrupted,
    InputClosed,
}

pub type InputLines = mpsc::Receiver<io::Result<String>>;

pub async fn execute(args: Args, mut config: Config) -> Result<()> {
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let (store, load_error) = KnowledgeFile::load_or_empty(config.data_file.clone());
    tracing::info!(
        "Starting chat with knowledge from {:?} ({} questions)",
        store.path(),
        store.data().question_count()
    );

    let mut stdout = io::stdout();
    if load_error.is_some() {
        writeln!(stdout, "{}", LOAD_FAILURE_NOTICE)?;
    }

    let mut engine = ConversationEngine::new(store, Personality, config.rng());
    let lines = spawn_line_reader(BufReader::new(io::stdin()));
    let end = run_session(&mut engine, &config, lines, ctrl_c(), &mut stdout).await?;

    let state = engine.state();
    tracing::info!(
        "Chat session ended: {:?} in {} state, {} questions known",
        end,
        state.description(),
        engine.store().data().question_count()
    );
    if state.is_learning() {
        tracing::info!(
            "Left unanswered: {}",
            state.pending_question().unwrap_or_default()
        );
    }
    Ok(())
}

/// Read lines on a plain OS thread and forward them over a channel.
///
/// A blocked read cannot be cancelled, so it must not live on the runtime's
/// blocking pool: the runtime would wait for it on shutdown. The thread ends
/// at end of input or once the receiver is gone.
pub fn spawn_line_reader<R>(reader: R) -> InputLines
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(1);
    std::thread::spawn(move || {
        for line in reader.lines() {
            if tx.blocking_send(line).is_err() {
                break;
            }
        }
    });
    rx
}

/// Resolves on Ctrl+C. If the handler cannot be installed the session simply
/// runs without it.
async fn ctrl_c() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}

/// Drive the conversation until the user leaves, input closes or `interrupt`
/// resolves. Only failures to write output are returned as errors.
pub async fn run_session<S, P, I, W>(
    engine: &mut ConversationEngine<S, P>,
    config: &Config,
    mut lines: InputLines,
    interrupt: I,
    out: &mut W,
) -> Result<SessionEnd>
where
    S: KnowledgeStore,
    P: PhraseProvider,
    I: Future<Output = ()>,
    W: Write,
{
    writeln!(out, "{}", engine.greeting())?;
    writeln!(out, "\n{}", USAGE_HINT)?;

    tokio::pin!(interrupt);

    let end = loop {
        write!(out, "\n{}: ", config.user_name)?;
        out.flush()?;

        let line = tokio::select! {
            line = lines.recv() => line,
            _ = &mut interrupt => {
                writeln!(out)?;
                break SessionEnd::Interrupted;
            }
        };

        match line {
            Some(Ok(line)) => {
                if is_exit_command(&line) {
                    break SessionEnd::Requested;
                }
                let reply = engine.process(&line);
                writeln!(out, "\n{}: {}", config.bot_name, reply)?;
            }
            None => {
                writeln!(out)?;
                break SessionEnd::InputClosed;
            }
            Some(Err(e)) if e.kind() == io::ErrorKind::InvalidData => {
                tracing::error!("Failed to read input line: {}", e);
                writeln!(out, "\n{}: {}", config.bot_name, TURN_FAILURE)?;
            }
            Some(Err(e)) => {
                tracing::error!("Input stream failed: {}", e);
                break SessionEnd::InputClosed;
            }
        }
    };

    writeln!(out, "\n{}: {}", config.bot_name, FAREWELL)?;
    out.flush()?;
    Ok(end)
}
