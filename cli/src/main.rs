//! CLI entrypoint for agora
//!
//! Runs a self-contained debate session against the in-memory adapters,
//! wiring all layers together using dependency injection: post human
//! messages, watch the automated responders fan out, then score the
//! transcript.

use agora_application::ports::reply_generator::ReplyGenerator;
use agora_application::{DebateChannel, DebateStore, ResponseOrchestrator, ScoreDebateUseCase};
use agora_domain::{Debate, Message, MessageDraft, Participant, ScoreSummary, UserId};
use agora_infrastructure::{BroadcastChannel, ConfigLoader, FileConfig, MemoryDebateStore};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

const RESPONDER_NAMES: [&str; 9] = [
    "AI Alpha", "AI Beta", "AI Gamma", "AI Delta", "AI Epsilon", "AI Zeta", "AI Eta", "AI Theta",
    "AI Iota",
];

#[derive(Parser)]
#[command(name = "agora", version, about = "Multi-party debate orchestration and scoring")]
struct Cli {
    /// Debate topic name
    #[arg(long, default_value = "Climate Change")]
    topic: String,

    /// Number of automated responders
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(0..=9))]
    responders: u8,

    /// Human message to post; repeat for multiple rounds
    #[arg(short, long = "message")]
    messages: Vec<String>,

    /// Print the score breakdown after the debate
    #[arg(long)]
    score: bool,

    /// Path to a config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip config files and use built-in defaults
    #[arg(long)]
    no_config: bool,

    /// Verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };

    // === Dependency Injection ===
    let store = Arc::new(MemoryDebateStore::new());
    let channel = Arc::new(BroadcastChannel::new());
    let generator = build_generator(&config);
    let orchestrator = ResponseOrchestrator::new(
        Arc::clone(&store),
        Arc::clone(&channel),
        generator,
        config.responder_config(),
    );

    // Seed the debate roster: one human plus the requested responders.
    let mut participants = vec![Participant::human(Some(UserId::new("local-user")))];
    for slot in 1..=cli.responders {
        let name = RESPONDER_NAMES[slot as usize - 1];
        let stance = if slot % 2 == 1 { "con" } else { "pro" };
        participants.push(Participant::responder(
            slot,
            Some(name.to_string()),
            Some(stance.to_string()),
        ));
    }
    let debate = Debate::new("debate-1", "topic-1", cli.topic.clone(), participants);
    store.insert_debate(debate.clone()).await;
    info!(debate = %debate.id, topic = %debate.topic_name, "Debate seeded");

    // Live transcript: print every message the channel broadcasts.
    let mut events = channel.subscribe(&debate.id);
    let printer = tokio::spawn(async move {
        while let Ok(message) = events.recv().await {
            println!("[round {}] {}: {}", message.round, message.sender, message.text);
        }
    });

    let messages = if cli.messages.is_empty() {
        vec![
            "Climate change is driven by data and research showing rising CO2, \
             therefore we must act"
                .to_string(),
        ]
    } else {
        cli.messages.clone()
    };

    println!("Topic: {}", debate.topic_name);
    for (i, text) in messages.iter().enumerate() {
        let round = i as u32 + 1;
        let message = post_human_message(&*store, &*channel, &debate, text, round).await?;

        // The human message is acknowledged as soon as it is stored and
        // published; joining the dispatch here is only so the printed
        // transcript is complete before the next round starts.
        let dispatch = orchestrator.on_human_message(&debate, &message).await?;
        dispatch.join_all().await;
    }

    // Give the printer a beat to drain, then stop it.
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    printer.abort();

    if cli.score {
        let summary = ScoreDebateUseCase::new(Arc::clone(&store))
            .execute(&debate.id)
            .await?;
        print_summary(&summary);
    }

    Ok(())
}

/// Store, touch and broadcast one human message, the same sequence a
/// transport-facing handler would run before triggering the orchestrator.
async fn post_human_message<S, C>(
    store: &S,
    channel: &C,
    debate: &Debate,
    text: &str,
    round: u32,
) -> Result<Message>
where
    S: DebateStore,
    C: DebateChannel,
{
    let draft = MessageDraft::human(
        debate.id.clone(),
        Some(UserId::new("local-user")),
        text.to_string(),
        round,
    )?;
    let message = store.create_message(draft).await?;
    store.touch_debate(&debate.id).await?;
    channel.publish(&debate.id, &message);
    Ok(message)
}

fn print_summary(summary: &ScoreSummary) {
    println!();
    println!(
        "Scores for \"{}\" ({} messages, scored at {})",
        summary.topic_name,
        summary.message_count,
        summary.scored_at.format("%H:%M:%S")
    );
    println!(
        "  {:<8} {:>9} {:>8} {:>10} {:>5}",
        "role", "relevance", "strength", "engagement", "total"
    );
    for entry in &summary.breakdown {
        println!(
            "  {:<8} {:>9} {:>8} {:>10} {:>5}",
            entry.role.to_string(),
            entry.relevance,
            entry.strength,
            entry.engagement,
            entry.total
        );
    }
    println!(
        "  {:<8} {:>9} {:>8} {:>10} {:>5}",
        "average",
        summary.averages.relevance,
        summary.averages.strength,
        summary.averages.engagement,
        summary.averages.total
    );
}

#[cfg(feature = "gemini")]
fn build_generator(config: &FileConfig) -> Option<Arc<dyn ReplyGenerator>> {
    use agora_infrastructure::GeminiReplyGenerator;

    let api_key = config.gemini.api_key.clone()?;
    let mut generator = GeminiReplyGenerator::new(api_key);
    if let Some(model) = &config.gemini.model {
        generator = generator.with_model(model.clone());
    }
    info!("Using Gemini reply generator");
    Some(Arc::new(generator))
}

#[cfg(not(feature = "gemini"))]
fn build_generator(_config: &FileConfig) -> Option<Arc<dyn ReplyGenerator>> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_domain::RoleTag;

    #[tokio::test]
    async fn test_post_human_message_stores_touches_and_broadcasts() {
        let store = MemoryDebateStore::new();
        let channel = BroadcastChannel::new();
        let debate = Debate::new(
            "d1",
            "t1",
            "Climate Change",
            vec![Participant::human(Some(UserId::new("local-user")))],
        );
        store.insert_debate(debate.clone()).await;
        let mut events = channel.subscribe(&debate.id);

        let message = post_human_message(&store, &channel, &debate, "opening statement", 1)
            .await
            .unwrap();

        assert_eq!(message.sender, RoleTag::User);
        assert_eq!(message.round, 1);
        let broadcast = events.recv().await.unwrap();
        assert_eq!(broadcast.seq, message.seq);
        assert_eq!(broadcast.text, "opening statement");
    }
}
