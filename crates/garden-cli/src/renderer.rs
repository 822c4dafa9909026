//! Terminal rendering module for rich markdown output
//!
//! Uses termimad for styled inline markdown, with a plain mode that writes
//! the markdown unchanged (for `--no-color` and non-terminal output).

use std::io::{self, Write};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

const HEADER_STYLE: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Green);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Cyan);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to standard output
    pub fn render(&self, markdown: &str) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.render_to(&mut out, markdown)?;
        out.flush()?;
        Ok(())
    }

    fn render_to(&self, out: &mut impl Write, markdown: &str) -> io::Result<()> {
        if !self.rich_enabled {
            return write!(out, "{markdown}");
        }

        // Headers keep their hash marks; everything else goes through the skin
        for line in markdown.lines() {
            if line.starts_with('#') {
                writeln!(out, "{HEADER_STYLE}{line}{RESET}")?;
            } else {
                writeln!(out, "{}", self.skin.inline(line))?;
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer_passes_markdown_through() {
        let renderer = TerminalRenderer::new(false);
        let mut out = Vec::new();
        renderer
            .render_to(&mut out, "# My Garden\n\n**Total**: 0\n")
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "# My Garden\n\n**Total**: 0\n");
    }

    #[test]
    fn test_rich_renderer_colors_headers() {
        let renderer = TerminalRenderer::default();
        let mut out = Vec::new();
        renderer.render_to(&mut out, "## Gardening Tip\nMulch").unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("\x1b[32m## Gardening Tip\x1b[0m\n"));
        assert!(output.contains("Mulch"));
    }
}
