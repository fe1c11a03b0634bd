//! Keyboard input handling and interactive loop.
//!
//! Keys map to picker commands or to the two session outcomes. The loop
//! owns the terminal (raw mode, alternate screen) for the whole session and
//! always hands it back, including on error.

use std::io::{self, Write};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::style::{
    Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::{cursor, execute, queue, terminal};
use tracing::debug;

use crate::error::TzpickResult;
use crate::picker::{Command, QueryEdit, SessionState};

use super::render::{render_frame, Frame, LineStyle, RenderOptions};
use super::theme::colors;

/// What a key press asks the session to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    /// Save the selection and leave
    Commit,
    /// Leave without saving
    Cancel,
}

/// Convert a keyboard event to an [`Input`] for the current mode
pub fn key_to_input(key: KeyEvent, state: &SessionState) -> Option<Input> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    match key.code {
        KeyCode::Char('c') if ctrl => return Some(Input::Cancel),
        KeyCode::Char('s') if ctrl => return Some(Input::Commit),
        _ => {}
    }

    let command = if state.is_searching() {
        match key.code {
            KeyCode::Up => Command::MoveUp,
            KeyCode::Down => Command::MoveDown,
            KeyCode::Char(' ') => Command::ToggleSelection,
            KeyCode::Enter => Command::CommitSearchMatch,
            KeyCode::Esc => Command::ExitSearch {
                keep_expansion: false,
            },
            KeyCode::Backspace => Command::EditQuery(QueryEdit::Backspace),
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                Command::EditQuery(QueryEdit::Append(c.to_string()))
            }
            _ => return None,
        }
    } else {
        match key.code {
            KeyCode::Up if shift => Command::MoveSelectedUp,
            KeyCode::Down if shift => Command::MoveSelectedDown,
            KeyCode::Char('K') => Command::MoveSelectedUp,
            KeyCode::Char('J') => Command::MoveSelectedDown,
            KeyCode::Up | KeyCode::Char('k') => Command::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => Command::MoveDown,
            KeyCode::Tab | KeyCode::BackTab => Command::SwitchPane,
            KeyCode::Char(' ') => Command::ToggleSelection,
            KeyCode::Enter => Command::ToggleExpand,
            KeyCode::Delete | KeyCode::Backspace | KeyCode::Char('x') => Command::RemoveSelected,
            KeyCode::Char('/') => Command::EnterSearch,
            KeyCode::Char('q') => return Some(Input::Commit),
            _ => return None,
        }
    };
    Some(Input::Command(command))
}

/// Feed one key into the session. Returns `Some(committed)` once the
/// session is over.
pub fn handle_key(state: &mut SessionState, key: KeyEvent) -> Option<bool> {
    match key_to_input(key, state)? {
        Input::Command(command) => {
            state.apply(command);
            None
        }
        Input::Commit => Some(true),
        Input::Cancel => Some(false),
    }
}

/// Leaves raw mode and the alternate screen when dropped
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let guard = TerminalGuard;
        execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Run the picker interactively.
/// Returns the ordered selection if committed, None if cancelled.
pub fn run_interactive(
    mut state: SessionState,
    supports_unicode: bool,
) -> TzpickResult<Option<Vec<String>>> {
    use crossterm::event::{self, Event, KeyEventKind};

    let _guard = TerminalGuard::enter()?;
    let mut stdout = io::stdout();

    draw(&mut stdout, &render_frame(&state, &options(supports_unicode)?))?;

    let committed = loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(committed) = handle_key(&mut state, key) {
                    break committed;
                }
            }
            Event::Resize(_, _) => {}
            _ => continue,
        }
        draw(&mut stdout, &render_frame(&state, &options(supports_unicode)?))?;
    };

    debug!(committed, "interactive picker finished");
    Ok(state.end(committed))
}

fn options(supports_unicode: bool) -> io::Result<RenderOptions> {
    let (width, height) = terminal::size()?;
    Ok(RenderOptions {
        width: usize::from(width),
        height: usize::from(height),
        unicode: supports_unicode,
    })
}

fn draw(out: &mut impl Write, frame: &Frame) -> io::Result<()> {
    queue!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    for (row, line) in frame.lines.iter().enumerate() {
        let Ok(row) = u16::try_from(row) else {
            break;
        };
        queue!(out, cursor::MoveTo(0, row))?;
        match line.style {
            LineStyle::Title => queue!(
                out,
                SetForegroundColor(colors::INFO),
                SetAttribute(Attribute::Bold)
            )?,
            LineStyle::Header => queue!(out, SetAttribute(Attribute::Bold))?,
            LineStyle::Cursor => queue!(out, SetForegroundColor(colors::SUCCESS))?,
            LineStyle::Dim => queue!(out, SetForegroundColor(colors::DIM))?,
            LineStyle::Normal => {}
        }

        match &line.highlight {
            Some(range) if line.text.get(range.clone()).is_some() => {
                queue!(
                    out,
                    Print(&line.text[..range.start]),
                    SetBackgroundColor(colors::WARNING),
                    Print(&line.text[range.clone()]),
                    SetBackgroundColor(crossterm::style::Color::Reset),
                    Print(&line.text[range.end..])
                )?;
            }
            _ => queue!(out, Print(&line.text))?,
        }
        queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
    }

    out.flush()
}
