//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::{HintsResult, VetReport};
use colored::Colorize;

/// How many hint words to print without `--all`
const HINTS_PREVIEW: usize = 25;

/// Print the result of analyzing a root word
pub fn print_hints_result(result: &HintsResult, show_all: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PLAYABLE WORDS:".bright_cyan().bold(),
        result.root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📖 Against a lexicon of {} words:",
        result.lexicon_size
    );
    println!(
        "   Playable words:  {}",
        result.words.len().to_string().bright_yellow().bold()
    );
    println!(
        "   Available score: {}",
        result.available_score.to_string().bright_yellow()
    );

    if result.words.is_empty() {
        println!("\n{}", "This root offers no playable words.".red());
        return;
    }

    let shown = if show_all {
        result.words.len()
    } else {
        result.words.len().min(HINTS_PREVIEW)
    };

    println!();
    for word in &result.words[..shown] {
        let len = word.chars().count();
        println!("  {} {}", format!("{len:>2}").bright_black(), word);
    }

    if shown < result.words.len() {
        println!(
            "\n  ... and {} more (pass --all to see every word)",
            result.words.len() - shown
        );
    }
}

/// Print the result of vetting a root-word list
pub fn print_vet_report(report: &VetReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD LIST REPORT".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Coverage:".bright_cyan().bold());
    println!("   Roots vetted:      {}", report.total_roots);
    println!("   Lexicon size:      {}", report.lexicon_size);
    println!(
        "   Avg words/root:    {}",
        format!("{:.1}", report.average_playable)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Range:             {} – {}",
        report.min_playable.to_string().yellow(),
        report.max_playable.to_string().green()
    );
    println!("   Time taken:        {:.2}s", report.duration.as_secs_f64());

    if !report.barren.is_empty() {
        println!(
            "\n⚠️  {} {}",
            "Barren roots (no playable words):".red().bold(),
            report.barren.len()
        );
        for root in report.barren.iter().take(10) {
            println!("   {}", root.red());
        }
        if report.barren.len() > 10 {
            println!("   ... and {} more", report.barren.len() - 10);
        }
    }

    if !report.best.is_empty() {
        println!("\n✨ {}", "Richest roots".green().bold());
        let top = report.best[0].playable.max(1);
        for entry in &report.best {
            let bar = create_progress_bar(entry.playable as f64, top as f64, 30);
            println!(
                "   {:<12} {} {:4} words ({} pts)",
                entry.root,
                bar.green(),
                entry.playable,
                entry.available_score
            );
        }
    }

    if !report.worst.is_empty() {
        println!("\n😰 {}", "Poorest roots".yellow().bold());
        for entry in report.worst.iter().take(5) {
            println!(
                "   {:<12} {:4} words ({} pts)",
                entry.root.yellow(),
                entry.playable,
                entry.available_score
            );
        }
    }
}
