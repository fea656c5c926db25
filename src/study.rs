use std::{
    io::{self, Write},
    ops::ControlFlow,
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal,
};
use thiserror::Error;
use tracing::debug;

use crate::{
    output::TerminalSettings,
    quiz::{Quiz, QuizError, State, Step},
    vec2::Vec2,
    vocabulary::Vocabulary,
};

use self::screen::Screen;

pub mod codes;
pub mod flip;
pub mod spell;

mod footer;
mod screen;
mod summary;

#[derive(Debug, Error)]
pub enum StudyError {
    #[error("Unable to start the quiz: {0}")]
    Quiz(#[from] QuizError),
    #[error("Terminal error: {0}")]
    Io(#[from] io::Error),
}

/// Turns key presses into quiz calls for one way of answering
pub(crate) trait Controls {
    fn key_pressed(&mut self, quiz: &mut Quiz, code: KeyCode) -> Result<(), QuizError>;

    /// What goes in the answer box
    fn answer_text(&self, quiz: &Quiz) -> String;

    /// Key help shown under the answer box
    fn hint(&self) -> String;
}

/// Drills `vocabulary` until every prompt is judged or the user quits, then prints
/// the summary
fn run(
    mut quiz: Quiz,
    vocabulary: Vocabulary,
    delay: Duration,
    mut controls: impl Controls,
) -> Result<(), StudyError> {
    quiz.start_session(vocabulary)?;

    let mut term_settings = TerminalSettings::new();
    term_settings
        .enter_alternate_screen()?
        .enable_raw_mode()?
        .hide_cursor()?;

    let mut screen = Screen::new(terminal::size()?.into());
    screen.draw(&quiz, &controls)?;

    let report = loop {
        match event::read()? {
            event if is_quit(&event) => break None,
            Event::Key(KeyEvent {
                kind: KeyEventKind::Release,
                ..
            }) => continue,
            Event::Key(KeyEvent { code, .. }) => {
                if let Err(err) = controls.key_pressed(&mut quiz, code) {
                    debug!(%err, ?code, "key ignored");
                }
            }
            Event::Resize(x, y) => screen.resize(Vec2::new(x, y)),
            _ => continue,
        }
        screen.draw(&quiz, &controls)?;

        if quiz.state() == State::Judged {
            if pause(delay, &mut screen, &quiz, &controls)?.is_break() {
                break None;
            }
            let finished = match quiz.advance()? {
                Step::Complete(report) => Some(report),
                Step::Prompt(_) => None,
            };
            if finished.is_some() {
                break finished;
            }
            screen.draw(&quiz, &controls)?;
        }
    };

    drop(term_settings);
    match report {
        Some(report) => summary::print(&report)?,
        None => abandoned(&quiz)?,
    }
    Ok(())
}

fn is_quit(event: &Event) -> bool {
    match event {
        Event::Key(KeyEvent {
            code: KeyCode::Esc,
            kind: KeyEventKind::Press,
            ..
        }) => true,
        Event::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Shows a verdict for `delay` before the next prompt.  Any key cuts it short,
/// quitting breaks
fn pause(
    delay: Duration,
    screen: &mut Screen,
    quiz: &Quiz,
    controls: &impl Controls,
) -> io::Result<ControlFlow<()>> {
    let deadline = Instant::now() + delay;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() || !event::poll(remaining)? {
            return Ok(ControlFlow::Continue(()));
        }
        match event::read()? {
            event if is_quit(&event) => return Ok(ControlFlow::Break(())),
            Event::Key(KeyEvent {
                kind: KeyEventKind::Press,
                ..
            }) => return Ok(ControlFlow::Continue(())),
            Event::Resize(x, y) => {
                screen.resize(Vec2::new(x, y));
                screen.draw(quiz, controls)?;
            }
            _ => {}
        }
    }
}

fn abandoned(quiz: &Quiz) -> io::Result<()> {
    let (judged, total) = quiz.progress();
    let mut stdout = io::stdout();
    writeln!(stdout, "Quit after {judged} of {total} prompts.")?;
    stdout.flush()
}
