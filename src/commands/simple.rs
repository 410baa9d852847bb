//! Simple interactive CLI mode
//!
//! Text-based play without the TUI: one prompt per guess, labels in,
//! pins out. Round tracking and the win/loss calls live here, not in
//! the evaluator.

use crate::game::{Evaluator, SecretSource};
use crate::output::{colored_pegs, score_pins};
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading user input fails or if the secret cannot
/// be revealed at the end of a lost game.
pub fn run_simple<S: SecretSource>(
    evaluator: &mut Evaluator<S>,
    rounds: usize,
) -> Result<(), String> {
    let length = evaluator.code_length();
    let label_list: String = evaluator
        .palette()
        .labels()
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ");

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Mastermind - Break the Code                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I picked a secret code of {length} pegs from: {label_list}");
    println!("Colors may repeat. You have {rounds} rounds to find it.\n");
    println!("After each guess you get pins:");
    println!("  ● right color, right position");
    println!("  ○ right color, wrong position\n");
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    let mut turn = 1;

    loop {
        if turn > rounds {
            let secret = evaluator.show_secret().map_err(|e| e.to_string())?;
            let secret_code = evaluator
                .palette()
                .code_from_labels(&secret)
                .map_err(|e| e.to_string())?;

            println!(
                "\n❌ You lost! The secret was {}",
                colored_pegs(&secret_code, evaluator.palette())
            );

            if !ask_play_again()? {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }

            evaluator.init(length).map_err(|e| e.to_string())?;
            turn = 1;
            println!("\n🔄 New game started!\n");
            continue;
        }

        println!("────────────────────────────────────────────────────────────");
        println!("Turn {turn}/{rounds}");

        let input = get_user_input(&format!("Enter {length} labels (e.g. RGBY) or command"))?
            .to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                evaluator.init(length).map_err(|e| e.to_string())?;
                turn = 1;
                println!("\n🔄 New game started!\n");
                continue;
            }
            _ => {}
        }

        let guess = match evaluator.palette().code_from_labels(input.trim()) {
            Ok(guess) => guess,
            Err(err) => {
                println!("❌ {err}\n");
                continue;
            }
        };

        let score = match evaluator.check_guess(&guess) {
            Ok(score) => score,
            Err(err) => {
                println!("❌ {err}\n");
                continue;
            }
        };

        println!(
            "\n   {}   {}",
            colored_pegs(&guess, evaluator.palette()),
            score_pins(score, length)
        );
        println!("   {score}\n");

        if score.is_win(length) {
            print_win_banner(turn);

            if !ask_play_again()? {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }

            evaluator.init(length).map_err(|e| e.to_string())?;
            turn = 1;
            println!("\n🔄 New game started!\n");
            continue;
        }

        turn += 1;
    }
}

fn print_win_banner(turn: usize) {
    use colored::Colorize;

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "       🎉 🎊 ✨  Y O U   G U E S S E D   I T !  ✨ 🎊 🎉       "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    let performance = match turn {
        1 => "🏆 First try - incredible!",
        2 | 3 => "⭐ Excellent deduction!",
        4 | 5 => "✨ Well played!",
        _ => "✓ Got there in the end!",
    };

    println!("\n  {}", performance.bright_yellow().bold());
    println!(
        "  Code broken in {} {}",
        turn.to_string().bright_cyan().bold(),
        if turn == 1 { "round" } else { "rounds" }
    );
    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}

fn ask_play_again() -> Result<bool, String> {
    let answer = get_user_input("Play again? (yes/no)")?.to_lowercase();
    Ok(matches!(answer.as_str(), "yes" | "y"))
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
