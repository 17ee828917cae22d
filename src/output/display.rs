//! Display functions for session results
//!
//! Printed to stderr so the game transcript on stdout stays untouched.

use super::formatters::lives_bar;
use crate::core::SessionReport;
use colored::Colorize;

/// Print a summary of a finished session
pub fn print_session_report(report: &SessionReport) {
    let budget = report.word.chars().count();

    eprintln!("\n{}", "═".repeat(40).cyan());
    eprintln!(
        " {} {}",
        "HANGMAN:".bright_cyan().bold(),
        report.word.to_uppercase().bright_yellow().bold()
    );
    eprintln!("{}", "═".repeat(40).cyan());

    let outcome = if report.outcome.is_win() {
        report.outcome.to_string().green().bold()
    } else {
        report.outcome.to_string().red().bold()
    };

    eprintln!("   Outcome:     {outcome}");
    eprintln!("   Proposals:   {}", report.proposals);
    eprintln!("   Wrong:       {}", report.wrong_guesses);
    eprintln!(
        "   Lives left:  [{}] {}/{budget}",
        lives_bar(report.remaining_guesses, budget).green(),
        report.remaining_guesses
    );
}
