//! Session controller: owns the reference structure, cursor, and token
//! window, and drives page/story progression from recognition events.

use crate::align::{Cursor, TokenWindow, align};
use crate::error::Result;
use crate::session::transcript::TranscriptLog;
use crate::story::Story;
use crate::text::ReferenceText;

/// Controller lifecycle state. Partial/final events are only accepted while
/// `Listening`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Listening,
}

/// What a partial-transcript event did to page progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// Still reading the current page.
    InProgress,
    /// The page was completed and the session advanced to the next one.
    PageAdvanced,
    /// The last page was completed; the story is finished.
    StoryComplete,
}

/// One reader's pass through one story.
///
/// All mutation happens in synchronous read-modify-write methods; events are
/// processed one at a time to completion, so reference, cursor, and token
/// window can never be observed mid-update.
pub struct ReadingSession {
    story: Story,
    page_index: usize,
    reference: ReferenceText,
    cursor: Cursor,
    window: TokenWindow,
    transcript: TranscriptLog,
    state: SessionState,
    finished: bool,
}

impl ReadingSession {
    /// Create a session positioned at `page_index` of `story`.
    pub fn new(story: Story, page_index: usize) -> Result<Self> {
        let mut session = Self {
            story,
            page_index: 0,
            reference: ReferenceText::default(),
            cursor: Cursor::initial(),
            window: TokenWindow::new(),
            transcript: TranscriptLog::new(),
            state: SessionState::Idle,
            finished: false,
        };
        session.load_page(page_index)?;
        Ok(session)
    }

    /// Rebuild the reference for a page, resetting cursor and token window.
    ///
    /// Reading progress on the previous page is discarded; the transcript
    /// log is kept (it spans the whole session).
    pub fn load_page(&mut self, page_index: usize) -> Result<()> {
        let page = self.story.page(page_index)?;
        self.reference = ReferenceText::build(&page.text);
        self.page_index = page_index;
        self.cursor = Cursor::initial();
        self.window.clear();
        self.finished = false;
        Ok(())
    }

    /// Begin accepting recognition events. Idempotent.
    pub fn start(&mut self) {
        if self.state == SessionState::Idle {
            self.window.clear();
            self.state = SessionState::Listening;
        }
    }

    /// Stop accepting recognition events. Idempotent; correctness progress
    /// is preserved, only the partial-comparison baseline is discarded.
    pub fn stop(&mut self) {
        self.window.clear();
        self.state = SessionState::Idle;
    }

    /// Process a revised partial transcript.
    ///
    /// Diffs against the previous partial, aligns only the fresh tokens, and
    /// advances to the next page when the current one completes. Ignored
    /// while `Idle`.
    pub fn on_partial(&mut self, raw_partial: &str) -> Result<PageOutcome> {
        if self.state != SessionState::Listening {
            return Ok(PageOutcome::InProgress);
        }

        let fresh = self.window.advance(raw_partial);
        align(&mut self.reference, &mut self.cursor, &fresh);

        if !self.reference.is_complete() {
            return Ok(PageOutcome::InProgress);
        }
        self.advance_page()
    }

    /// Process a committed final transcript.
    ///
    /// Finals never feed alignment; they go to the transcript log (unless
    /// this was a no-match result) and reset the partial baseline, since the
    /// recognizer starts its next hypothesis from scratch. Ignored while
    /// `Idle`.
    pub fn on_final(&mut self, text: &str, recognized: bool) {
        if self.state != SessionState::Listening {
            return;
        }
        if recognized {
            self.transcript.append(text);
        }
        self.window.clear();
    }

    /// Reload the current page, clearing all progress and the transcript.
    pub fn reset(&mut self) -> Result<()> {
        self.stop();
        self.transcript.clear();
        self.load_page(self.page_index)
    }

    /// Move to the next page, if any.
    pub fn next_page(&mut self) -> Result<bool> {
        if self.page_index + 1 < self.story.pages.len() {
            self.load_page(self.page_index + 1)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Move to the previous page, if any.
    pub fn previous_page(&mut self) -> Result<bool> {
        if self.page_index > 0 {
            self.load_page(self.page_index - 1)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn advance_page(&mut self) -> Result<PageOutcome> {
        if self.page_index + 1 < self.story.pages.len() {
            self.load_page(self.page_index + 1)?;
            Ok(PageOutcome::PageAdvanced)
        } else {
            self.finished = true;
            Ok(PageOutcome::StoryComplete)
        }
    }

    // Read-only snapshot accessors for the presentation layer.

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_listening(&self) -> bool {
        self.state == SessionState::Listening
    }

    pub fn story(&self) -> &Story {
        &self.story
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_count(&self) -> usize {
        self.story.pages.len()
    }

    pub fn reference(&self) -> &ReferenceText {
        &self.reference
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn transcript(&self) -> &TranscriptLog {
        &self.transcript
    }

    /// True once the last page has been completed.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// `(correct, total)` word counts for the current page.
    pub fn progress(&self) -> (usize, usize) {
        (self.reference.correct_count(), self.reference.word_count())
    }
}
