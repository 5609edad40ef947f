//! The interactive play loop.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use lg_engine::{Ending, GameConfig, GameSession, TurnReport};

use crate::audio::TracingAudio;

pub fn run(seed: Option<u64>) -> Result<(), String> {
    let world = super::load_world()?;
    let seed = seed.unwrap_or_else(rand::random);
    tracing::debug!(seed, "starting session");

    let mut session = GameSession::new(world, GameConfig::default().with_seed(seed))
        .map_err(|e| format!("failed to start session: {e}"))?
        .with_audio(Box::new(TracingAudio));

    let opening = session.opening().map_err(|e| e.to_string())?;
    render(&opening, session.world().in_dark_mode());

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            break;
        }

        let report = session.submit(input).map_err(|e| e.to_string())?;
        render(&report, session.world().in_dark_mode());

        if let Some(ending) = report.ending {
            println!("{}\n", banner(ending).bold());
            break;
        }
    }

    Ok(())
}

/// Print a turn's channels: main text themed by world mode, activity in
/// yellow, errors in red.
fn render(report: &TurnReport, dark: bool) {
    if let Some(main) = &report.main {
        if dark {
            println!("{}\n", main.bright_white().on_black());
        } else {
            println!("{main}\n");
        }
    }
    for line in &report.activity {
        println!("{}\n", line.yellow());
    }
    if let Some(error) = &report.error {
        println!("{}\n", error.to_string().red());
    }
}

fn banner(ending: Ending) -> &'static str {
    match ending {
        Ending::Death => "Everything goes dark.  GAME OVER.",
        Ending::Light => "You keep walking down, towards a distant warmth.  THE END.",
        Ending::Dark => "You keep walking down, smiling all the while.  THE END.",
    }
}
