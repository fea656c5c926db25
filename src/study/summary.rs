use std::{
    fmt::Display,
    io::{self, Write},
};

use crossterm::{
    queue,
    style::{self, Color, Stylize},
};

use crate::quiz::FinalReport;

/// Prints the end-of-session stats and every prompt that was missed
pub fn print(report: &FinalReport) -> io::Result<()> {
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", "Stats:".bold())?;
    for line in table(report) {
        writeln!(stdout, "{line}")?;
    }

    let color = score_color(report.percentage());
    queue!(
        stdout,
        style::SetForegroundColor(color),
        style::Print(format!("Score: {:.2}%\n", report.percentage())),
        style::SetForegroundColor(Color::Reset),
    )?;

    if !report.incorrect_tally.is_empty() {
        writeln!(stdout, "\n{}", "Review:".bold())?;
        for entry in report.incorrect_tally.entries() {
            queue!(
                stdout,
                style::Print(format!("  {} ", entry.prompt)),
                style::SetForegroundColor(Color::Red),
                style::Print(format!("{}\n", entry.answer)),
                style::SetForegroundColor(Color::Reset),
            )?;
        }
    }
    stdout.flush()
}

fn table(report: &FinalReport) -> [String; 2] {
    fn row(tag: &str, total: impl Display, correct: impl Display, incorrect: impl Display) -> String {
        format!("{tag:15} |{total:^10}|{correct:^10}|{incorrect:^10}|")
    }

    [
        row("", "total", "correct", "incorrect"),
        row("Prompts:", report.total(), report.correct, report.incorrect),
    ]
}

fn score_color(percentage: f64) -> Color {
    match percentage {
        p if p >= 80.0 => Color::Green,
        p if p >= 50.0 => Color::Yellow,
        _ => Color::Red,
    }
}

#[cfg(test)]
mod tests {
    use crate::quiz::Tally;

    use super::*;

    #[test]
    fn table_lines_up() {
        let report = FinalReport {
            correct: 3,
            incorrect: 2,
            incorrect_tally: Tally::default(),
        };
        let [header, counts] = table(&report);
        assert_eq!(header, "                |  total   | correct  |incorrect |");
        assert_eq!(counts, "Prompts:        |    5     |    3     |    2     |");
    }

    #[test]
    fn score_colors() {
        assert_eq!(score_color(100.0), Color::Green);
        assert_eq!(score_color(60.0), Color::Yellow);
        assert_eq!(score_color(0.0), Color::Red);
    }
}
