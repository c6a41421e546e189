//! Terminal rendering for markdown output.
//!
//! Rich mode styles headers and inline markdown with termimad and highlights
//! the current step line; plain mode prints the markdown untouched so the
//! output stays stable for pipes and tests.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

const CURRENT_STEP_PREFIX: &str = "- ➤ ";

/// Renders markdown either styled or as plain text.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Whether styling (and terminal bells) are allowed.
    pub fn rich_enabled(&self) -> bool {
        self.rich_enabled
    }

    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            if line.starts_with('#') {
                // Keep the hash marks visible, termimad would strip them.
                println!("\x1b[34m{line}\x1b[0m");
            } else if line.starts_with(CURRENT_STEP_PREFIX) {
                println!("\x1b[1;32m{line}\x1b[0m");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled());
        assert!(renderer.render("# Title\n").is_ok());
    }

    #[test]
    fn test_rich_renderer() {
        let renderer = TerminalRenderer::new(true);
        assert!(renderer.rich_enabled());
        assert!(renderer.render("# Title\n- ➤ 1. Boil\n- ○ 2. Drain\n").is_ok());
    }
}
