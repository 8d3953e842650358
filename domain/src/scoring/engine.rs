//! The heuristic scoring engine
//!
//! Pure computation over a debate's full message history: no external
//! calls, deterministic for a given input. The heuristics are transparent
//! by design:
//!
//! - **Relevance** (0-35): keyword overlap between the topic name and the
//!   participant's messages.
//! - **Strength** (0-40): message length plus presence of evidence words
//!   and logical connectors, with a penalty for terse contributions.
//! - **Engagement** (0-25): turn count and a length band rewarding
//!   contributions that are neither one-liners nor walls of text.

use crate::debate::entities::Participant;
use crate::debate::message::Message;
use crate::lexical::{CONNECTOR_WORDS, EVIDENCE_WORDS, tokenize};
use crate::scoring::value_objects::{ScoreAverages, ScoreEntry, Scorecard};
use std::collections::{HashMap, HashSet};

/// Score a debate: exactly one entry per participant, in roster order,
/// plus the rounded mean of every sub-score across the roster.
///
/// Participants with no messages score all zeros. An empty topic name
/// means relevance is 0 for everyone.
pub fn score(topic_name: &str, participants: &[Participant], messages: &[Message]) -> Scorecard {
    let topic_tokens = tokenize(topic_name);

    // Group message texts by sender role tag, as-is.
    let mut groups: HashMap<String, Vec<&str>> = HashMap::new();
    for message in messages {
        groups
            .entry(message.sender.to_string())
            .or_default()
            .push(message.text.as_str());
    }

    let breakdown: Vec<ScoreEntry> = participants
        .iter()
        .map(|participant| {
            let role = participant.resolved_role();
            match groups.get(&role.to_string()) {
                Some(texts) if !texts.is_empty() => {
                    let relevance = relevance_for_texts(&topic_tokens, texts);
                    let strength = strength_for_texts(texts);
                    let engagement = engagement_for_texts(texts);
                    ScoreEntry::new(role, relevance, strength, engagement)
                }
                _ => ScoreEntry::silent(role),
            }
        })
        .collect();

    let averages = average(&breakdown);
    Scorecard {
        breakdown,
        averages,
    }
}

/// Topic-token overlap, normalized loosely against twice the topic length.
fn relevance_for_texts(topic_tokens: &[String], texts: &[&str]) -> u8 {
    let all_tokens: Vec<String> = texts.iter().flat_map(|t| tokenize(t)).collect();
    if all_tokens.is_empty() {
        return 0;
    }
    let topic_set: HashSet<&str> = topic_tokens.iter().map(String::as_str).collect();
    let overlap = all_tokens
        .iter()
        .filter(|t| topic_set.contains(t.as_str()))
        .count();
    let norm = f64::min(1.0, overlap as f64 / f64::max(1.0, topic_tokens.len() as f64 * 2.0));
    (norm * 35.0).round() as u8
}

/// Length contribution capped at 20, evidence words at +10, connectors at
/// +10; averaged across messages and normalized into 0-40, with a 0.8
/// penalty when the total token count is tiny for the turn count.
fn strength_for_texts(texts: &[&str]) -> u8 {
    if texts.is_empty() {
        return 0;
    }
    let mut score = 0.0;
    let mut total_len = 0usize;
    for text in texts {
        let words = tokenize(text);
        total_len += words.len();

        score += f64::min(20.0, words.len() as f64 / 3.0);

        let evidence_hits = EVIDENCE_WORDS
            .iter()
            .filter(|w| words.iter().any(|t| t == *w))
            .count();
        let connector_hits = CONNECTOR_WORDS
            .iter()
            .filter(|w| words.iter().any(|t| t == *w))
            .count();
        score += f64::min(10.0, evidence_hits as f64 * 3.0);
        score += f64::min(10.0, connector_hits as f64 * 2.0);
    }

    let avg = score / texts.len() as f64;
    let normalized = f64::min(40.0, ((avg / 40.0) * 40.0).round());
    if total_len < 5 * texts.len() {
        (normalized * 0.8).round() as u8
    } else {
        normalized as u8
    }
}

/// Turn count bonus plus a length band: under 5 tokens per message scores
/// the band 5, the 5-20 sweet spot scores 20, longer scores 15.
fn engagement_for_texts(texts: &[&str]) -> u8 {
    if texts.is_empty() {
        return 0;
    }
    let turns = texts.len();
    let avg_len = texts.iter().map(|t| tokenize(t).len()).sum::<usize>() as f64 / turns as f64;
    let length_band = if avg_len < 5.0 {
        5.0
    } else if avg_len < 20.0 {
        20.0
    } else {
        15.0
    };
    let turn_bonus = f64::min(10.0, turns as f64 * 2.0);
    let total = ((length_band / 20.0) * 15.0 + turn_bonus).round() as u8;
    total.min(25)
}

fn average(breakdown: &[ScoreEntry]) -> ScoreAverages {
    let n = breakdown.len().max(1) as f64;
    let mean = |pick: fn(&ScoreEntry) -> u8| {
        (breakdown.iter().map(|e| pick(e) as f64).sum::<f64>() / n).round() as u8
    };
    ScoreAverages {
        relevance: mean(|e| e.relevance),
        strength: mean(|e| e.strength),
        engagement: mean(|e| e.engagement),
        total: mean(|e| e.total),
    }
}
