use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{self, Color},
    terminal::{self, ClearType},
};

use crate::{
    output::{fit_line, BoxOutline, TextBox},
    quiz::{Judgment, Quiz},
    vec2::{Rect, Vec2},
};

use super::{footer::Footer, Controls};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    prompt: Rect,
    answer: Rect,
    status_y: u16,
    hint_y: u16,
}

impl Layout {
    fn new(size: Vec2<u16>) -> Self {
        let width = (size.x / 2).max(20).min(size.x);
        let prompt = Rect::centered_h(size.x, 1, Vec2::new(width, 5));
        let answer = Rect::centered_h(size.x, prompt.bottom() + 1, Vec2::new(width, 3));
        Layout {
            prompt,
            answer,
            status_y: answer.bottom() + 1,
            hint_y: answer.bottom() + 2,
        }
    }
}

/// The prompt card, the answer card under it, a verdict line, key help and the
/// progress footer
#[derive(Debug)]
pub(crate) struct Screen {
    width: u16,
    layout: Layout,
    prompt_box: TextBox,
    answer_box: TextBox,
    footer: Footer,
}

impl Screen {
    pub(crate) fn new(size: Vec2<u16>) -> Self {
        let layout = Layout::new(size);
        let mut prompt_box = TextBox::new(layout.prompt);
        prompt_box.outline(Some(BoxOutline::DOUBLE));
        Screen {
            width: size.x,
            layout,
            prompt_box,
            answer_box: TextBox::new(layout.answer),
            footer: Footer::new(size),
        }
    }

    pub(crate) fn resize(&mut self, size: Vec2<u16>) {
        self.width = size.x;
        self.layout = Layout::new(size);
        self.prompt_box.dims = self.layout.prompt;
        self.answer_box.dims = self.layout.answer;
        self.footer.resize(size);
    }

    /// Redraws everything from the state of `quiz` and flushes stdout
    pub(crate) fn draw(&mut self, quiz: &Quiz, controls: &impl Controls) -> io::Result<()> {
        queue!(io::stdout(), terminal::Clear(ClearType::All))?;

        self.prompt_box
            .draw(quiz.current_prompt().unwrap_or_default())?;

        let (color, status) = match quiz.last_judgment() {
            Some(judgment) => verdict(judgment),
            None => (Color::White, String::new()),
        };
        self.answer_box
            .color(color)
            .draw(&controls.answer_text(quiz))?;
        self.print_centered(self.layout.status_y, &status, color)?;
        self.print_centered(self.layout.hint_y, &controls.hint(), Color::DarkGrey)?;

        let (_, total) = quiz.progress();
        self.footer.render(
            quiz.correct_tally().len() as u32,
            quiz.incorrect_tally().len() as u32,
            total as u32,
        )?;
        io::stdout().flush()
    }

    fn print_centered(&self, y: u16, text: &str, color: Color) -> io::Result<()> {
        let line = fit_line(text, self.width as usize);
        let len = line.chars().count() as u16;
        queue!(
            io::stdout(),
            cursor::MoveTo((self.width - len) / 2, y),
            style::SetForegroundColor(color),
            style::Print(line),
            style::SetForegroundColor(Color::Reset),
        )
    }
}

fn verdict(judgment: &Judgment) -> (Color, String) {
    match (judgment.correct, judgment.given.is_some()) {
        (true, true) => (Color::Green, "Correct!".to_owned()),
        (false, true) => (
            Color::Red,
            format!("Incorrect!  The answer is {}", judgment.expected),
        ),
        (true, false) => (Color::Green, "Nice, you knew it!".to_owned()),
        (false, false) => (
            Color::Red,
            format!("Keep practicing: {}", judgment.expected),
        ),
    }
}
