use std::io::{self, BufRead};
use std::process::ExitCode;

use pokerhand::{rank_hands, Hand};
use tracing::{debug, error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Initialize tracing, stdout is reserved for the ranking
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokerhand=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // Hands come from the arguments, or one per line from stdin
    let args: Vec<String> = std::env::args().skip(1).collect();
    let inputs = if args.is_empty() {
        match read_lines(io::stdin().lock()) {
            Ok(lines) => lines,
            Err(e) => {
                error!(error = %e, "Failed to read hands from stdin");
                return ExitCode::FAILURE;
            }
        }
    } else {
        args
    };

    let hands = parse_inputs(&inputs);
    if hands.is_empty() {
        error!("No valid hands to rank");
        return ExitCode::FAILURE;
    }

    info!(count = hands.len(), "Ranking hands");
    for line in format_ranking(&rank_hands(hands)) {
        println!("{line}");
    }

    ExitCode::SUCCESS
}

fn read_lines(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

/// Parses every input, invalid hands are logged and skipped.
fn parse_inputs(inputs: &[String]) -> Vec<Hand> {
    inputs
        .iter()
        .filter_map(|input| match input.parse::<Hand>() {
            Ok(hand) => {
                debug!(input = %input, hand = %hand, "Parsed hand");
                Some(hand)
            }
            Err(e) => {
                warn!(input = %input, error = %e, "Skipping invalid hand");
                None
            }
        })
        .collect()
}

/// One line per hand, tied hands share the same position.
fn format_ranking(ranked: &[Hand]) -> Vec<String> {
    let mut lines = Vec::with_capacity(ranked.len());
    let mut position = 0;
    for (i, hand) in ranked.iter().enumerate() {
        if i == 0 || ranked[i - 1] != *hand {
            position = i + 1;
        }
        lines.push(format!("{position}. {hand}"));
    }
    lines
}
