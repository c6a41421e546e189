//! Interactive cooking loop.
//!
//! Each line on stdin is one user intent. The loop forwards it to the cooking
//! mode and re-renders the view; the countdown keeps running in the
//! background between lines.

use std::{
    io::{self, Write},
    time::Duration,
};

use anyhow::Result;
use log::debug;
use sous_core::{CookingMode, Haptics, OperationStatus, VibrationPattern};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::renderer::TerminalRenderer;

const HELP: &str = "Commands: n(ext), p(rev), t(imer), r(eset), s(tatus), f(inish), q(uit), wait <seconds>, h(elp)\n";

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    Next,
    Previous,
    ToggleTimer,
    ResetTimer,
    Status,
    Finish,
    Quit,
    Help,
    Wait(Duration),
}

impl Intent {
    /// Parses a command line; `None` for anything unrecognized.
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let command = words.next()?.to_lowercase();

        let intent = match command.as_str() {
            "n" | "next" => Intent::Next,
            "p" | "prev" | "previous" | "back" => Intent::Previous,
            "t" | "timer" | "toggle" => Intent::ToggleTimer,
            "r" | "reset" => Intent::ResetTimer,
            "s" | "status" => Intent::Status,
            "f" | "finish" | "done" => Intent::Finish,
            "q" | "quit" | "exit" => Intent::Quit,
            "h" | "help" | "?" => Intent::Help,
            "w" | "wait" => {
                let seconds: f64 = words.next()?.parse().ok()?;
                if !seconds.is_finite() || seconds < 0.0 {
                    return None;
                }
                Intent::Wait(Duration::from_secs_f64(seconds))
            }
            _ => return None,
        };

        Some(intent)
    }
}

/// Expiry feedback for a terminal: a bell and a notice line.
pub struct TerminalHaptics {
    bell: bool,
}

impl TerminalHaptics {
    pub fn new(bell: bool) -> Self {
        Self { bell }
    }
}

impl Haptics for TerminalHaptics {
    fn vibrate(&self, pattern: VibrationPattern) {
        let bells = if self.bell {
            "\x07".repeat(usize::from(pattern.pulses))
        } else {
            String::new()
        };
        let mut stdout = io::stdout().lock();
        // Nothing useful to do if stdout is gone.
        let _ = writeln!(stdout, "{bells}Timer done!");
        let _ = stdout.flush();
    }
}

/// Runs the cooking loop until the user finishes, quits, or input ends.
pub async fn run(mode: &mut CookingMode, renderer: &TerminalRenderer) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    renderer.render(&mode.view().to_string())?;
    renderer.render(HELP)?;

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => {
                debug!("Interrupted, leaving cooking mode");
                None
            }
        };
        let Some(line) = line else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let Some(intent) = Intent::parse(&line) else {
            renderer.render(&format!("Unknown command: {}\n{HELP}", line.trim()))?;
            continue;
        };
        debug!("Cooking intent: {intent:?}");

        match intent {
            Intent::Next => {
                mode.next();
            }
            Intent::Previous => {
                mode.previous();
            }
            Intent::ToggleTimer => {
                mode.toggle_timer();
            }
            Intent::ResetTimer => mode.reset_timer(),
            Intent::Status => {}
            Intent::Help => {
                renderer.render(HELP)?;
                continue;
            }
            Intent::Wait(duration) => {
                tokio::time::sleep(duration).await;
            }
            Intent::Finish => {
                let Some(exit) = mode.finalize() else {
                    renderer.render(&OperationStatus::failure("Nothing to finish").to_string())?;
                    continue;
                };
                renderer.render(&mode.view().to_string())?;
                renderer.render(&OperationStatus::finished(exit).to_string())?;
                return Ok(());
            }
            Intent::Quit => break,
        }

        renderer.render(&mode.view().to_string())?;
    }

    Ok(())
}
