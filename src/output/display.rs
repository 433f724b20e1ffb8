//! Display functions for command results

use super::formatters::{board_lines, create_progress_bar, information_bar, word_list};
use crate::commands::{AnalysisResult, RunSummary, SolveReport};
use crate::commands::solve::Analysis;
use crate::core::Board;
use crate::solver::GuessInformation;
use colored::Colorize;

/// Print what the solver makes of a board
pub fn print_solve_report(report: &SolveReport, board: &Board, top: usize) {
    if !board.is_empty() {
        println!();
        for line in board_lines(board) {
            println!("   {line}");
        }
    }

    match report {
        SolveReport::Solved { answer, turns } => {
            println!(
                "\n{}",
                format!(
                    "✅ Solved! The answer is {} ({turns} guesses)",
                    answer.as_str().to_uppercase()
                )
                .green()
                .bold()
            );
        }
        SolveReport::Exhausted { .. } => {
            println!(
                "\n{}",
                "❌ No word in the list fits this feedback.".red().bold()
            );
            println!("   Double-check the colors you entered for each guess.");
        }
        SolveReport::InProgress(analysis) => {
            if board.is_empty() {
                println!("\n{}", "═".repeat(60).cyan());
                println!(" {} ", "WORDLE SOLVER".bright_cyan().bold());
                println!("{}", "═".repeat(60).cyan());
                println!(
                    "\nEnter your board as guess/feedback pairs, e.g. {}",
                    "crane XGYXX".bright_yellow()
                );
            }
            print_analysis(analysis, top);
        }
    }
}

fn print_analysis(analysis: &Analysis, top: usize) {
    println!(
        "\n📊 {} possible answers remain",
        analysis.candidates.len().to_string().bright_yellow().bold()
    );

    print_ranking(&analysis.information, top);

    let answers: Vec<_> = analysis
        .information
        .possible_answers()
        .take(top)
        .map(|row| row.word)
        .collect();
    println!(
        "\n🎯 {} {}",
        "Top answers:".bright_cyan().bold(),
        word_list(&answers, top)
    );

    println!("\n💡 {}", "Suggestions:".bright_cyan().bold());
    for (strategy, options) in &analysis.suggestions {
        println!(
            "   {:<14} {}",
            strategy.to_string(),
            word_list(options, top).bright_green()
        );
    }
}

/// Print the top rows of a ranking; `*` marks possible answers
pub fn print_ranking(information: &GuessInformation, top: usize) {
    let max_bits = information.best().map_or(0.0, |row| row.information);

    println!("\n📈 {}", "Top guesses:".bright_cyan().bold());
    for (rank, row) in information.ranked().iter().take(top).enumerate() {
        let marker = if row.possible_answer { "*" } else { " " };
        println!(
            "   {:>3}. {}{} [{}] {}",
            rank + 1,
            row.word.as_str().to_uppercase(),
            marker.bright_green().bold(),
            information_bar(row.information, max_bits, 20).green(),
            format!("{:.3} bits", row.information).bright_yellow()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "INFORMATION ANALYSIS:".bright_cyan().bold(),
        result.word.as_str().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let max_bits = (result.total_candidates.max(1) as f64).log2();
    let bar = information_bar(result.information, max_bits, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Information: [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.information).bright_yellow()
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
    println!("   Partitions:  {}", result.partitions);

    println!("\n🧩 {}", "Largest partitions:".bright_cyan().bold());
    for (feedback, group) in &result.largest {
        println!(
            "   {} {:>5}  {}",
            feedback.to_emoji(),
            group.len(),
            word_list(group, 8).bright_black()
        );
    }
}

/// Print one block per simulated run
pub fn print_simulation_summary(runs: &[RunSummary]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for run in runs {
        let summary = &run.summary;
        println!(
            "\n📊 {} (rep {})",
            run.strategy.to_string().bright_yellow().bold(),
            run.rep
        );
        println!("   Games:            {}", summary.games);
        println!(
            "   Solved:           {} ({:.1}%)",
            summary.solved.to_string().green(),
            summary.success_rate()
        );
        if summary.exhausted > 0 {
            println!("   Exhausted:        {}", summary.exhausted.to_string().red());
        }
        println!(
            "   Average guesses:  {}",
            format!("{:.3}", summary.average_turns).bright_yellow().bold()
        );
        if let (Some(min), Some(max)) = (summary.min_turns, summary.max_turns) {
            println!("   Best case:        {}", min.to_string().green());
            println!("   Worst case:       {}", max.to_string().yellow());
        }
        println!("   Time taken:       {:.2}s", run.duration.as_secs_f64());
        println!("   Saved to:         {}", run.path.display());

        for (&turns, &count) in &summary.distribution {
            let pct = count as f64 / summary.games.max(1) as f64 * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {turns:>2}: {} {count:5} ({pct:5.1}%)", bar.green());
        }
    }
}
