//! Display functions for command results

use colored::Colorize;

use crate::commands::{BenchmarkResult, SolveResult};

/// Print the result of solving one start/end pair
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Ladder: {} -> {}",
        result.from.to_uppercase().bright_yellow().bold(),
        result.to.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, ladder) in result.ladders.iter().enumerate() {
        println!("{:>4}. {ladder}", i + 1);
    }

    println!();
    if let Some(len) = result.ladder_len() {
        println!(
            "{}",
            format!(
                "✅ Found {} shortest ladder{} of length {len}",
                result.ladders.len(),
                if result.ladders.len() == 1 { "" } else { "s" }
            )
            .green()
            .bold()
        );
    } else {
        println!("{}", "❌ No ladder exists".red().bold());
    }

    if verbose {
        println!("  Lexicon:  {} words", result.lexicon_size);
        println!("  Elapsed:  {:.2?}", result.duration);
    }
}

/// Print benchmark statistics
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("{}", "Benchmark Results".bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    println!("  Pairs tested:   {}", result.total_pairs);
    println!(
        "  Pairs solved:   {} ({:.1}%)",
        result.solved_pairs,
        if result.total_pairs == 0 {
            0.0
        } else {
            100.0 * result.solved_pairs as f64 / result.total_pairs as f64
        }
    );
    println!("  Total ladders:  {}", result.total_ladders);
    println!("  Elapsed:        {:.2?}", result.duration);
    println!("  Throughput:     {:.1} pairs/s", result.pairs_per_second);

    if !result.length_distribution.is_empty() {
        println!("\n  Ladder length distribution:");
        let mut lengths: Vec<_> = result.length_distribution.iter().collect();
        lengths.sort();
        for (len, pairs) in lengths {
            println!("    {len:>3} words: {pairs} pairs");
        }
    }
}
