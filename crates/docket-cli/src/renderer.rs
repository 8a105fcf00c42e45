//! Terminal output for the `list` command.

use anyhow::Result;
use termimad::{
    crossterm::style::{Color, Stylize},
    MadSkin,
};

/// Kind of a line in a rendered docket page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    /// `# Docket` and other page titles
    Title,
    /// `## <list title>`
    List,
    /// `- [x] ...`
    DoneTask,
    /// `- [ ] ...`
    OpenTask,
    /// `> ...` flash messages
    Flash,
    Other,
}

impl LineKind {
    fn of(line: &str) -> Self {
        if line.starts_with("## ") {
            Self::List
        } else if line.starts_with("# ") {
            Self::Title
        } else if line.starts_with("- [x] ") {
            Self::DoneTask
        } else if line.starts_with("- [ ] ") {
            Self::OpenTask
        } else if line.starts_with("> ") {
            Self::Flash
        } else {
            Self::Other
        }
    }
}

/// Prints docket pages either styled for a terminal or as plain markdown.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.bold.set_fg(Color::Yellow);
        skin.inline_code.set_fg(Color::Cyan);

        Self { rich_enabled, skin }
    }

    /// Render a page to stdout
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            match LineKind::of(line) {
                LineKind::Title => println!("{}", line.trim_start_matches("# ").bold().blue()),
                LineKind::List => println!("{}", line.trim_start_matches("## ").bold().cyan()),
                // Finished work fades into the background
                LineKind::DoneTask => println!("{}", line.dark_grey().crossed_out()),
                LineKind::OpenTask => {
                    self.skin.print_inline(line);
                    println!();
                }
                LineKind::Flash => println!("{}", line.trim_start_matches("> ").magenta()),
                LineKind::Other => {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        }
        Ok(())
    }
}
