// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Distribution report.
use lowball_drawsim::{Config, Distribution, DrawOutcome};
use lowball_eval::{Card, HandRank};

const LINE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Prints the ranked outcomes and summary stats.
pub fn print(config: &Config, dist: &Distribution, all: bool) {
    println!(
        "\n{}(draw {}) dead: {}",
        format_cards(&config.kept),
        config.draw_count,
        format_cards(&config.dead)
    );

    if all {
        println!("\nHand Rankings (Best to Worst)");
        println!("{LINE}");
        println!("{:<6}  {:<16}  {:<16}  {:>10}", "Rank", "Hand", "Value", "Percentile");
        for (idx, outcome) in dist.iter().enumerate() {
            println!(
                "{:<6}  {:<16}  {:<16}  {:>9.1}%",
                idx + 1,
                format_cards(&outcome.hand),
                outcome.value,
                outcome.percentile
            );
        }
    }

    println!("\nSummary ({} hands)", dist.len());
    println!("{LINE}");
    if let Some(best) = dist.best() {
        print_outcome("Best Hand:", best);
    }

    if let Some(worst) = dist.worst() {
        print_outcome("Worst Hand:", worst);
    }

    println!("\nPercentile Distribution");
    println!("{LINE}");
    for p in [25.0, 50.0, 75.0] {
        if let Some(outcome) = dist.at_percentile(p) {
            print_outcome(&format!("{p:.0}%:"), outcome);
        }
    }

    println!("\nHand Ranks");
    println!("{LINE}");
    let counts = dist.rank_counts();
    for rank in HandRank::ranks() {
        let count = counts[rank as usize];
        if count > 0 {
            let share = count as f64 / dist.len() as f64 * 100.0;
            println!("{:<16} {count:>8}  {share:>6.2}%", rank.to_string());
        }
    }

    println!();
}

fn print_outcome(label: &str, outcome: &DrawOutcome) {
    let rank = outcome
        .value
        .rank()
        .map(|r| r.to_string())
        .unwrap_or_default();
    println!(
        "{label:<12} {:<16} {rank:<16} Value: {}",
        format_cards(&outcome.hand),
        outcome.value
    );
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
