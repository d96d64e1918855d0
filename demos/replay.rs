//! Replaying Actions from JSON
//!
//! This example decodes a state and an action list from JSON, replays them,
//! and prints every snapshot.
//!
//! Key concepts:
//! - Decoding untyped input at the JSON boundary
//! - One snapshot per action, the input left untouched
//! - Rejecting unrecognized actions through configuration
//!
//! Run with: RUST_LOG=state_history=trace cargo run --example replay

use serde_json::json;
use state_history::json::{parse_actions, parse_state, render};
use state_history::transformer::{Transformer, UnknownActionPolicy};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    println!("=== Replay Example ===\n");

    let initial = json!({ "user": "ada", "theme": "dark", "tabs": ["inbox", "drafts"] });
    let actions = json!([
        { "type": "addProperties", "extraData": { "theme": "light", "lang": "en" } },
        { "type": "removeProperties", "keysToRemove": ["tabs", "missing"] },
        { "type": "rename" },
        { "type": "clear" }
    ]);

    let state = parse_state(&initial)?;
    let actions = parse_actions(&actions)?;

    let history = Transformer::builder()
        .on_unknown_action(UnknownActionPolicy::PassThroughAndLog)
        .build()
        .run(&state, &actions)?;

    for (action, snapshot) in actions.iter().zip(&history) {
        println!("{:>18} -> {}", action.kind(), snapshot.to_value());
    }

    println!("\nInitial state is unchanged: {}", state.to_value());
    println!("Full history: {}", serde_json::to_string_pretty(&render(&history)?)?);

    println!("\n=== Strict Mode ===\n");

    let strict = Transformer::builder()
        .on_unknown_action(UnknownActionPolicy::Reject)
        .build();

    match strict.run(&state, &actions) {
        Ok(_) => println!("Unexpectedly accepted"),
        Err(error) => println!("Rejected: {error}"),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
