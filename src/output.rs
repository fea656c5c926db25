use std::{borrow::Cow, fmt::Display, io};

use crossterm::{
    cursor, execute, queue,
    style::{self, Color, Stylize},
    terminal,
};

use crate::vec2::{Rect, Vec2};

pub fn write_fatal_error(text: &str) {
    eprintln!("{}", text.dark_red());
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repeat(pub char, pub u16);

impl Display for Repeat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for _ in 0..self.1 {
            write!(f, "{}", self.0)?;
        }
        Ok(())
    }
}

/// Restores everything it changed about the terminal when dropped
#[derive(Debug, Default)]
pub struct TerminalSettings {
    alternate_screen: bool,
    cursor_hidden: bool,
    raw_mode: bool,
}

impl TerminalSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter_alternate_screen(&mut self) -> io::Result<&mut Self> {
        queue!(io::stdout(), terminal::EnterAlternateScreen)?;
        self.alternate_screen = true;
        Ok(self)
    }

    pub fn hide_cursor(&mut self) -> io::Result<&mut Self> {
        queue!(io::stdout(), cursor::Hide)?;
        self.cursor_hidden = true;
        Ok(self)
    }

    pub fn enable_raw_mode(&mut self) -> io::Result<&mut Self> {
        terminal::enable_raw_mode()?;
        self.raw_mode = true;
        Ok(self)
    }
}

impl Drop for TerminalSettings {
    fn drop(&mut self) {
        if self.raw_mode {
            let _ = terminal::disable_raw_mode();
        }
        if self.cursor_hidden {
            let _ = execute!(io::stdout(), cursor::Show);
        }
        if self.alternate_screen {
            let _ = execute!(io::stdout(), terminal::LeaveAlternateScreen);
        }
    }
}

/// Shortens `text` to `width` columns, marking the cut with `...`
pub fn fit_line(text: &str, width: usize) -> Cow<'_, str> {
    if text.chars().count() <= width {
        Cow::Borrowed(text)
    } else if width <= 3 {
        text.chars().take(width).collect()
    } else {
        let mut line: String = text.chars().take(width - 3).collect();
        line.push_str("...");
        Cow::Owned(line)
    }
}

/// A box with a single centered line of text
#[derive(Debug, Clone)]
pub struct TextBox {
    pub dims: Rect,
    pub outline: Option<BoxOutline>,
    pub outline_color: Color,
    pub content_color: Color,
}

impl TextBox {
    pub fn new(dims: Rect) -> Self {
        Self {
            dims: Self::make_valid_dims(dims),
            outline: Some(BoxOutline::LIGHT),
            outline_color: Color::White,
            content_color: Color::White,
        }
    }

    fn make_valid_dims(mut dims: Rect) -> Rect {
        dims.size = dims.size.join(Vec2::new(5, 3), u16::max);
        dims
    }

    pub fn outline(&mut self, outline: Option<BoxOutline>) -> &mut Self {
        self.outline = outline;
        self
    }

    pub fn color(&mut self, color: Color) -> &mut Self {
        self.outline_color = color;
        self.content_color = color;
        self
    }

    /// Draws the outline and text, replacing whatever was inside.  Does not flush
    /// stdout
    pub fn draw(&self, text: &str) -> io::Result<&Self> {
        self.draw_outline()?.draw_text(text)
    }

    /// Draws just the outline of this, or does nothing if `self.outline` is `None`
    pub fn draw_outline(&self) -> io::Result<&Self> {
        let Some(outline) = self.outline else {
            return Ok(self);
        };
        let Rect { pos, size } = self.dims;
        let mut stdout = io::stdout();

        queue!(
            stdout,
            pos.move_to(),
            style::SetForegroundColor(self.outline_color),
            style::Print(outline.tl),
            style::Print(Repeat(outline.h, size.x - 2)),
            style::Print(outline.tr)
        )?;
        for y in 1..size.y - 1 {
            queue!(
                stdout,
                cursor::MoveTo(pos.x, pos.y + y),
                style::Print(outline.v),
                cursor::MoveTo(pos.x + size.x - 1, pos.y + y),
                style::Print(outline.v),
            )?;
        }
        queue!(
            stdout,
            cursor::MoveTo(pos.x, pos.y + size.y - 1),
            style::Print(outline.bl),
            style::Print(Repeat(outline.h, size.x - 2)),
            style::Print(outline.br),
            style::SetForegroundColor(Color::Reset),
        )?;
        Ok(self)
    }

    /// Blanks the inside of this and draws `text` centered on its middle row
    pub fn draw_text(&self, text: &str) -> io::Result<&Self> {
        let inner = self.inner();
        let mut stdout = io::stdout();
        for y in 0..inner.size.y {
            queue!(
                stdout,
                cursor::MoveTo(inner.pos.x, inner.pos.y + y),
                style::Print(Repeat(' ', inner.size.x)),
            )?;
        }

        let line = fit_line(text, inner.size.x as usize);
        let len = line.chars().count() as u16;
        queue!(
            stdout,
            cursor::MoveTo(
                inner.pos.x + (inner.size.x - len) / 2,
                inner.pos.y + inner.size.y / 2,
            ),
            style::SetForegroundColor(self.content_color),
            style::Print(line),
            style::SetForegroundColor(Color::Reset),
        )?;
        Ok(self)
    }

    pub fn inner(&self) -> Rect {
        match self.outline {
            Some(_) => Rect {
                pos: self.dims.pos + Vec2::splat(1),
                size: self.dims.size - Vec2::splat(2),
            },
            None => self.dims,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxOutline {
    tl: char,
    tr: char,
    bl: char,
    br: char,
    h: char,
    v: char,
}

impl BoxOutline {
    pub const LIGHT: Self = Self {
        tl: '┌',
        tr: '┐',
        bl: '└',
        br: '┘',
        h: '─',
        v: '│',
    };

    pub const DOUBLE: Self = Self {
        tl: '╔',
        tr: '╗',
        bl: '╚',
        br: '╝',
        h: '═',
        v: '║',
    };
}
