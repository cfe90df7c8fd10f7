use crossterm::style::{Color, Stylize};
use std::io::{self, Write};

use crate::clues::ClueTree;
use crate::suspects::{SuspectRegistry, TopSuspect};

/// Colors output when writing to a terminal, passes text through otherwise.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    color: bool,
}

impl Painter {
    pub fn new(color: bool) -> Self {
        Painter { color }
    }

    pub fn plain() -> Self {
        Painter { color: false }
    }

    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn bold(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).bold().to_string()
        } else {
            text.to_string()
        }
    }
}

pub fn help(out: &mut impl Write, painter: Painter) -> io::Result<()> {
    writeln!(out, "{}", painter.paint("Commands:", Color::Cyan))?;
    for (key, what) in [
        ('l', "go to the room on the left"),
        ('r', "go to the room on the right"),
        ('c', "list collected clues (alphabetical)"),
        ('a', "list suspects and their clues"),
        ('t', "show the most likely suspect"),
        ('h', "help"),
        ('q', "leave the mansion"),
    ] {
        writeln!(out, "  {key} - {what}")?;
    }
    Ok(())
}

pub fn prompt(out: &mut impl Write, painter: Painter) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        painter.paint(
            "Choose: (l) left  (r) right  (c) clues  (a) associations  (t) top suspect  (h) help  (q) quit",
            Color::DarkGrey,
        )
    )
}

pub fn clue_list(out: &mut impl Write, painter: Painter, clues: &ClueTree) -> io::Result<()> {
    if clues.is_empty() {
        return writeln!(out, "(No clues collected yet)");
    }
    writeln!(
        out,
        "{}",
        painter.bold("=== Clues in alphabetical order ===", Color::Yellow)
    )?;
    for clue in clues.in_order() {
        writeln!(out, " - {clue}")?;
    }
    Ok(())
}

pub fn associations(
    out: &mut impl Write,
    painter: Painter,
    registry: &SuspectRegistry,
) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        painter.bold("=== Suspects and associated clues ===", Color::Yellow)
    )?;
    if registry.is_empty() {
        return writeln!(out, "(No suspects named yet)");
    }
    for suspect in registry.iter() {
        writeln!(out, "* {} (citations: {})", suspect.name, suspect.citations())?;
        for clue in &suspect.clues {
            writeln!(out, "   - {clue}")?;
        }
    }
    Ok(())
}

pub fn top_suspect(
    out: &mut impl Write,
    painter: Painter,
    registry: &SuspectRegistry,
) -> io::Result<()> {
    match registry.top_suspect() {
        TopSuspect::Leading(suspect) => writeln!(
            out,
            "Most likely suspect: {} (citations: {})",
            painter.bold(&suspect.name, Color::Red),
            suspect.citations()
        ),
        TopSuspect::NoCitations => writeln!(out, "No predominant suspect yet."),
        TopSuspect::NoSuspects => writeln!(out, "No suspects named yet."),
    }
}

pub fn summary(
    out: &mut impl Write,
    painter: Painter,
    clues: &ClueTree,
    registry: &SuspectRegistry,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", painter.bold("=== Case summary ===", Color::Yellow))?;
    writeln!(out, "Clues collected: {}", clues.len())?;
    writeln!(out, "Suspects named:  {}", registry.len())?;
    match registry.top_suspect() {
        TopSuspect::Leading(suspect) => writeln!(
            out,
            "Leading suspect: {} (citations: {})",
            suspect.name,
            suspect.citations()
        ),
        TopSuspect::NoCitations | TopSuspect::NoSuspects => {
            writeln!(out, "Leading suspect: none")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn plain_painter_leaves_text_alone() {
        let painter = Painter::plain();
        assert_eq!(painter.paint("hall", Color::Red), "hall");
        assert_eq!(painter.bold("hall", Color::Red), "hall");
    }

    #[test]
    fn color_painter_keeps_the_text() {
        assert!(Painter::new(true).paint("hall", Color::Red).contains("hall"));
    }

    #[test]
    fn clue_list_sorted_or_empty_message() {
        let mut clues = ClueTree::new();
        let empty = render(|out| clue_list(out, Painter::plain(), &clues));
        assert_eq!(empty, "(No clues collected yet)\n");

        clues.insert("veneno");
        clues.insert("carta rasgada");
        let listed = render(|out| clue_list(out, Painter::plain(), &clues));
        assert_eq!(
            listed,
            "=== Clues in alphabetical order ===\n - carta rasgada\n - veneno\n"
        );
    }

    #[test]
    fn associations_show_counts_and_clues() {
        let mut registry = SuspectRegistry::new();
        let empty = render(|out| associations(out, Painter::plain(), &registry));
        assert!(empty.ends_with("(No suspects named yet)\n"));

        registry.associate("chave dourada", "Mordomo");
        registry.associate("veneno", "Mordomo");
        let listed = render(|out| associations(out, Painter::plain(), &registry));
        assert!(listed.contains("* Mordomo (citations: 2)\n   - veneno\n   - chave dourada\n"));
    }

    #[test]
    fn top_suspect_messages() {
        let mut registry = SuspectRegistry::new();
        let none = render(|out| top_suspect(out, Painter::plain(), &registry));
        assert_eq!(none, "No suspects named yet.\n");

        registry.find_or_create("Mordomo");
        let uncited = render(|out| top_suspect(out, Painter::plain(), &registry));
        assert_eq!(uncited, "No predominant suspect yet.\n");

        registry.associate("veneno", "Cozinheira");
        let leading = render(|out| top_suspect(out, Painter::plain(), &registry));
        assert_eq!(leading, "Most likely suspect: Cozinheira (citations: 1)\n");
    }
}
