//! Paginated navigation over an ordered collection.
//!
//! A browsing session is a small state machine ([`Session`]) whose cursor is a
//! plain value: [`Session::apply`] takes a session and a [`NavigationCommand`]
//! and returns the next session. Rendering goes through [`PageView`], a pure
//! projection of `(items, cursor)`. Display indices are 1-based and global to
//! the collection, so "item 15" means the same item on every page.
//!
//! Raw keys are turned into commands by [`KeyInput`], which also accumulates
//! multi-digit selections until Enter.

use std::ops::Range;

use crossterm::event::{KeyCode, KeyEvent};

use crate::error::NavigationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    page_size: usize,
    current_page: usize,
    total_pages: usize,
    count: usize,
}

impl PageCursor {
    /// `None` for an empty collection: there is nothing to page through.
    pub fn new(count: usize, page_size: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }
        let page_size = page_size.max(1);
        Some(Self {
            page_size,
            current_page: 0,
            total_pages: count.div_ceil(page_size),
            count,
        })
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn has_next(&self) -> bool {
        self.current_page + 1 < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 0
    }

    pub fn next(self) -> Self {
        if self.has_next() {
            Self {
                current_page: self.current_page + 1,
                ..self
            }
        } else {
            self
        }
    }

    pub fn previous(self) -> Self {
        if self.has_previous() {
            Self {
                current_page: self.current_page - 1,
                ..self
            }
        } else {
            self
        }
    }

    /// Absolute index range of the current page.
    pub fn range(&self) -> Range<usize> {
        let start = self.current_page * self.page_size;
        let end = (start + self.page_size).min(self.count);
        start..end
    }

    /// Map a 1-based display index to an absolute index, independent of the current page.
    pub fn resolve(&self, display_index: usize) -> Result<usize, NavigationError> {
        if (1..=self.count).contains(&display_index) {
            Ok(display_index - 1)
        } else {
            Err(NavigationError::OutOfRange {
                input: display_index.to_string(),
                count: self.count,
            })
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationCommand {
    Next,
    Previous,
    SelectItem(usize),
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Session {
    Active(PageCursor),
    Empty,
    Exited,
}

/// Result of one transition: the next session and, for a selection, the
/// absolute index of the chosen item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub session: Session,
    pub selected: Option<usize>,
}

impl Step {
    fn stay(session: Session) -> Self {
        Self {
            session,
            selected: None,
        }
    }
}

impl Session {
    pub fn new(count: usize, page_size: usize) -> Self {
        match PageCursor::new(count, page_size) {
            Some(cursor) => Session::Active(cursor),
            None => Session::Empty,
        }
    }

    pub fn cursor(&self) -> Option<&PageCursor> {
        match self {
            Session::Active(cursor) => Some(cursor),
            _ => None,
        }
    }

    pub fn is_exited(&self) -> bool {
        matches!(self, Session::Exited)
    }

    /// Apply one command. An invalid selection leaves the session unchanged and
    /// reports `OutOfRange`; commands that are unavailable are no-ops.
    pub fn apply(self, command: NavigationCommand) -> Result<Step, NavigationError> {
        match (self, command) {
            (Session::Exited, _) => Ok(Step::stay(Session::Exited)),
            (_, NavigationCommand::Exit) => Ok(Step::stay(Session::Exited)),
            (Session::Empty, _) => Ok(Step::stay(Session::Empty)),
            (Session::Active(cursor), NavigationCommand::Next) => {
                Ok(Step::stay(Session::Active(cursor.next())))
            }
            (Session::Active(cursor), NavigationCommand::Previous) => {
                Ok(Step::stay(Session::Active(cursor.previous())))
            }
            (Session::Active(cursor), NavigationCommand::SelectItem(index)) => {
                let absolute = cursor.resolve(index)?;
                Ok(Step {
                    session: Session::Active(cursor),
                    selected: Some(absolute),
                })
            }
        }
    }
}

/// One rendered page: the visible items paired with their display indices.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a, T> {
    pub entries: Vec<(usize, &'a T)>,
    pub page: usize,
    pub total_pages: usize,
    pub count: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<'a, T> PageView<'a, T> {
    pub fn project(items: &'a [T], cursor: &PageCursor) -> Self {
        let range = cursor.range();
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        let entries = items[start..end]
            .iter()
            .enumerate()
            .map(|(offset, item)| (start + offset + 1, item))
            .collect();

        Self {
            entries,
            page: cursor.current_page(),
            total_pages: cursor.total_pages(),
            count: cursor.count(),
            has_next: cursor.has_next(),
            has_previous: cursor.has_previous(),
        }
    }
}

/// How a view reacts to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paging {
    /// Next/previous page letters plus numbered selection.
    Paged,
    /// Forward only: any key shows the next chunk, Escape leaves.
    Chunked,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Command(NavigationCommand),
    /// Digits are being collected; nothing to apply yet.
    Pending,
    Rejected(NavigationError),
    Ignored,
}

/// Turns key presses into navigation commands, collecting multi-digit
/// selections until Enter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyInput {
    digits: Option<String>,
}

impl KeyInput {
    /// Digits typed so far, while a selection is being entered.
    pub fn pending(&self) -> Option<&str> {
        self.digits.as_deref()
    }

    pub fn interpret(&mut self, key: KeyEvent, session: &Session, paging: Paging) -> KeyOutcome {
        if let Some(buffer) = self.digits.as_mut() {
            return match key.code {
                KeyCode::Enter => {
                    let input = self.digits.take().unwrap_or_default();
                    finish_selection(&input, session)
                }
                KeyCode::Esc => {
                    self.digits = None;
                    KeyOutcome::Ignored
                }
                KeyCode::Backspace => {
                    buffer.pop();
                    if buffer.is_empty() {
                        self.digits = None;
                    }
                    KeyOutcome::Pending
                }
                KeyCode::Char(c) => {
                    buffer.push(c);
                    KeyOutcome::Pending
                }
                _ => KeyOutcome::Pending,
            };
        }

        if key.code == KeyCode::Esc {
            return KeyOutcome::Command(NavigationCommand::Exit);
        }

        let cursor = match session {
            Session::Active(cursor) => cursor,
            Session::Empty if paging == Paging::Chunked => {
                return KeyOutcome::Command(NavigationCommand::Exit)
            }
            _ => return KeyOutcome::Ignored,
        };

        match paging {
            Paging::Chunked => {
                if cursor.has_next() {
                    KeyOutcome::Command(NavigationCommand::Next)
                } else {
                    KeyOutcome::Command(NavigationCommand::Exit)
                }
            }
            Paging::Paged => match key.code {
                KeyCode::Char('n' | 'N') | KeyCode::Right if cursor.has_next() => {
                    KeyOutcome::Command(NavigationCommand::Next)
                }
                KeyCode::Char('p' | 'P') | KeyCode::Left if cursor.has_previous() => {
                    KeyOutcome::Command(NavigationCommand::Previous)
                }
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    self.digits = Some(c.to_string());
                    KeyOutcome::Pending
                }
                _ => KeyOutcome::Ignored,
            },
        }
    }
}

fn finish_selection(input: &str, session: &Session) -> KeyOutcome {
    let count = session.cursor().map(|c| c.count()).unwrap_or(0);
    match input.trim().parse::<usize>() {
        Ok(index) => KeyOutcome::Command(NavigationCommand::SelectItem(index)),
        Err(_) => KeyOutcome::Rejected(NavigationError::OutOfRange {
            input: input.to_string(),
            count,
        }),
    }
}
