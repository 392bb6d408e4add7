//! CLI Higher-Lower example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use hilo::{GameOptions, Guess, HigherLowerGame, Rank};

fn main() {
    env_logger::init();

    println!("Higher-Lower CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::new(3).with_minimum_rank(Rank::Five);

    let mut game = match HigherLowerGame::with_seed(options, seed) {
        Ok(game) => game,
        Err(err) => {
            println!("Could not start the game: {err}");
            return;
        }
    };

    println!(
        "Guess {} times in a row whether the next card is higher or lower.",
        game.required_correct_guesses()
    );

    loop {
        print_table(&game);

        if game.has_won() {
            println!("You won!");
            break;
        }

        let Some(guess) = prompt_guess("Higher or lower? (h/l): ") else {
            println!("Goodbye.");
            break;
        };

        match game.make_guess(guess) {
            Ok(result) if result.correct => println!("Correct: {}", result.dealt),
            Ok(result) => println!("Wrong: {}. Streak reset.", result.dealt),
            Err(err) => {
                println!("Game over: {err}");
                break;
            }
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_guess(prompt: &str) -> Option<Guess> {
    loop {
        match prompt_line(prompt).as_str() {
            "q" | "quit" | "" => return None,
            "h" | "higher" => return Some(Guess::Higher),
            "l" | "lower" => return Some(Guess::Lower),
            _ => println!("Please enter 'h' or 'l'."),
        }
    }
}

fn print_table(game: &HigherLowerGame) {
    println!("\nDeck: {} cards remaining", game.remaining_cards());
    if let Some(previous) = game.previous_card() {
        println!("Previous card: {previous}");
    }
    println!("Current card:  {}", game.current_card());
    println!(
        "Streak: {}/{}",
        game.number_of_correct_guesses(),
        game.required_correct_guesses()
    );
    if let Some(motivation) = game.motivation() {
        println!("{motivation}");
    }
}
