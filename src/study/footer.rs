use std::io;

use crossterm::{
    cursor, queue,
    style::{self, Color},
};

use crate::{output::Repeat, vec2::Vec2};

/// A bar along the bottom row split into correct, incorrect and unanswered prompts
#[derive(Debug)]
pub struct Footer {
    width: u16,
    y: u16,
}

impl Footer {
    pub fn new(term_size: Vec2<u16>) -> Self {
        Footer {
            width: term_size.x,
            y: term_size.y.saturating_sub(1),
        }
    }

    pub fn resize(&mut self, term_size: Vec2<u16>) {
        *self = Self::new(term_size);
    }

    pub fn render(&self, correct: u32, incorrect: u32, total: u32) -> io::Result<()> {
        queue!(io::stdout(), cursor::MoveTo(0, self.y))?;

        let remaining = total.saturating_sub(correct + incorrect);
        let [correct_width, incorrect_width, remaining_width] =
            widths(self.width, [correct, incorrect, remaining]);

        print_section(correct, correct_width, Color::DarkGreen)?;
        print_section(incorrect, incorrect_width, Color::DarkRed)?;
        print_section(remaining, remaining_width, Color::Black)?;

        queue!(io::stdout(), style::SetBackgroundColor(Color::Reset))
    }
}

/// Splits `width` between `vals` in proportion.  The last section takes whatever
/// rounding leaves over
fn widths(width: u16, vals: [u32; 3]) -> [u16; 3] {
    let count = vals.iter().sum::<u32>();
    if count == 0 {
        return [0, 0, width];
    }
    let share = |val: u32| ((val as f32 / count as f32) * width as f32) as u16;
    let first = share(vals[0]);
    let second = share(vals[1]);
    [
        first,
        second,
        width.saturating_sub(first).saturating_sub(second),
    ]
}

fn print_section(amount: u32, width: u16, color: Color) -> io::Result<()> {
    let amount = amount.to_string();
    let amount = &amount[..(width as usize).min(amount.len())];
    let pad = width - amount.len() as u16;
    let left_pad = pad / 2;
    let right_pad = pad - left_pad;
    queue!(
        io::stdout(),
        style::SetBackgroundColor(color),
        style::Print(Repeat(' ', left_pad)),
        style::Print(amount),
        style::Print(Repeat(' ', right_pad)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_fill_the_row() {
        assert_eq!(widths(80, [3, 1, 0]), [60, 20, 0]);
        assert_eq!(widths(10, [1, 1, 1]), [3, 3, 4]);
        assert_eq!(widths(10, [0, 0, 0]), [0, 0, 10]);
    }
}
