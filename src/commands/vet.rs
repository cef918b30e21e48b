//! Root-word list vetting
//!
//! Scores every candidate root against the lexicon and reports how much
//! play each one offers, so a word list can be checked before shipping.

use crate::core::{is_buildable, normalize};
use crate::dictionary::WordSet;
use crate::game::MIN_WORD_LEN;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::cmp::Reverse;
use std::time::{Duration, Instant};

/// Play available from a single root word
#[derive(Debug, Clone)]
pub struct RootReport {
    pub root: String,
    /// Lexicon words the rules would accept against this root
    pub playable: usize,
    /// Score a player finding every word would reach
    pub available_score: u32,
}

/// Statistics from vetting a root-word list
#[derive(Debug)]
pub struct VetReport {
    pub total_roots: usize,
    pub lexicon_size: usize,
    pub average_playable: f64,
    pub min_playable: usize,
    pub max_playable: usize,
    /// Roots offering no playable words at all
    pub barren: Vec<String>,
    /// Richest roots, most playable words first
    pub best: Vec<RootReport>,
    /// Poorest non-barren roots, fewest playable words first
    pub worst: Vec<RootReport>,
    pub duration: Duration,
}

/// Vet a root-word list against a lexicon
///
/// Each root is scanned in parallel across the lexicon; a progress bar
/// tracks the outer loop. `limit` caps how many roots are examined.
#[must_use]
pub fn vet_roots(roots: &[String], lexicon: &WordSet, limit: Option<usize>) -> VetReport {
    let candidates: Vec<&String> = roots
        .iter()
        .take(limit.unwrap_or(roots.len()))
        .collect();

    let pb = ProgressBar::new(candidates.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let entries: Vec<&str> = lexicon.iter().collect();
    let start = Instant::now();

    let mut reports: Vec<RootReport> = Vec::with_capacity(candidates.len());
    for (idx, root) in candidates.iter().enumerate() {
        let root = normalize(root);

        let playable_words: Vec<&&str> = entries
            .par_iter()
            .filter(|word| {
                ***word != root
                    && word.chars().count() >= MIN_WORD_LEN
                    && is_buildable(word, &root)
            })
            .collect();

        let available_score = playable_words
            .iter()
            .map(|w| w.chars().count() as u32)
            .sum();

        reports.push(RootReport {
            root,
            playable: playable_words.len(),
            available_score,
        });

        if idx % 10 == 0 && !reports.is_empty() {
            let avg =
                reports.iter().map(|r| r.playable).sum::<usize>() as f64 / reports.len() as f64;
            pb.set_message(format!("Avg: {avg:.0} words/root"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_roots = reports.len();

    let total_playable: usize = reports.iter().map(|r| r.playable).sum();
    let average_playable = if total_roots > 0 {
        total_playable as f64 / total_roots as f64
    } else {
        0.0
    };
    let min_playable = reports.iter().map(|r| r.playable).min().unwrap_or(0);
    let max_playable = reports.iter().map(|r| r.playable).max().unwrap_or(0);

    let barren: Vec<String> = reports
        .iter()
        .filter(|r| r.playable == 0)
        .map(|r| r.root.clone())
        .collect();

    let mut ranked: Vec<RootReport> = reports;
    ranked.sort_by_key(|r| Reverse(r.playable));

    let best: Vec<RootReport> = ranked.iter().take(10).cloned().collect();
    let worst: Vec<RootReport> = ranked
        .iter()
        .rev()
        .filter(|r| r.playable > 0)
        .take(10)
        .cloned()
        .collect();

    VetReport {
        total_roots,
        lexicon_size: lexicon.len(),
        average_playable,
        min_playable,
        max_playable,
        barren,
        best,
        worst,
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> WordSet {
        WordSet::from_words(["list", "tins", "tin", "silent", "listen", "inlet", "cot"])
    }

    fn roots(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn vet_counts_playable_words() {
        let report = vet_roots(&roots(&["silent"]), &lexicon(), None);

        assert_eq!(report.total_roots, 1);
        // listen, inlet, list, tins, tin — the root itself is excluded
        assert_eq!(report.best[0].playable, 5);
        assert_eq!(report.max_playable, 5);
    }

    #[test]
    fn vet_flags_barren_roots() {
        let report = vet_roots(&roots(&["silent", "zzz"]), &lexicon(), None);

        assert_eq!(report.barren, ["zzz"]);
        assert_eq!(report.min_playable, 0);
    }

    #[test]
    fn vet_respects_limit() {
        let report = vet_roots(&roots(&["silent", "zzz", "cot"]), &lexicon(), Some(1));
        assert_eq!(report.total_roots, 1);
    }

    #[test]
    fn vet_empty_list() {
        let report = vet_roots(&[], &lexicon(), None);

        assert_eq!(report.total_roots, 0);
        assert!(report.best.is_empty());
        assert!(report.barren.is_empty());
        assert!((report.average_playable - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn vet_ranks_best_and_worst() {
        let report = vet_roots(&roots(&["silent", "cot", "zzz"]), &lexicon(), None);

        assert_eq!(report.best[0].root, "silent");
        // "cot" offers only itself, which the rules exclude, so it is
        // barren alongside "zzz"
        assert_eq!(report.barren.len(), 2);
        assert_eq!(report.worst.len(), 1);
        assert_eq!(report.worst[0].root, "silent");
    }
}
