//! Read-along application entry point.
//!
//! Orchestrates the complete flow: story lookup → session → recognition
//! events → alignment → terminal rendering.

use crate::config::Config;
use crate::error::{ReadalongError, Result};
use crate::recognition::channel::{RecognitionChannelFactory, RecognitionEvent};
use crate::recognition::typed::TypedChannelFactory;
use crate::session::{PageOutcome, ReadingSession};
use crate::story::{BuiltinStories, FileStorySource, StorySource};
use crate::view;
use std::path::PathBuf;

/// Output behavior for a session run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Suppress status messages.
    pub quiet: bool,
    /// Verbosity level (0=default, 1=show partials, 2=full diagnostics).
    pub verbosity: u8,
    /// Write the accumulated transcript here on exit.
    pub export: Option<PathBuf>,
}

/// Run the interactive read command.
///
/// # Arguments
/// * `config` - Base configuration (can be overridden by CLI args)
/// * `story_id` - Optional story override from CLI
/// * `page` - Optional 1-based starting page from CLI
/// * `language` - Optional language override from CLI
/// * `story_dir` - Optional story directory override from CLI
/// * `opts` - Output options
#[allow(clippy::too_many_arguments)]
pub async fn run_read_command(
    mut config: Config,
    story_id: Option<u32>,
    page: Option<usize>,
    language: Option<String>,
    story_dir: Option<PathBuf>,
    opts: RunOptions,
) -> Result<()> {
    // Apply CLI overrides
    if let Some(l) = language {
        config.recognition.language = l;
    }
    if let Some(dir) = story_dir {
        config.story.dir = Some(dir);
    }

    let source = story_source(&config);
    let id = story_id
        .or(config.story.default_id)
        .unwrap_or(crate::defaults::DEFAULT_STORY_ID);
    let story = source.story(id)?;

    let page_index = page.unwrap_or(1).saturating_sub(1);
    let mut session = ReadingSession::new(story, page_index)?;

    if !opts.quiet {
        eprintln!(
            "Reading '{}' ({} pages). Type what the reader says; Ctrl+D to stop.",
            session.story().title,
            session.page_count()
        );
    }

    let factory = TypedChannelFactory;
    run_session(&mut session, &factory, &config, &opts).await?;

    if let Some(path) = &opts.export {
        session.transcript().export_to(path)?;
        if !opts.quiet {
            eprintln!("Transcript written to {}", path.display());
        }
    }

    Ok(())
}

/// Pick the story source configured for this run.
fn story_source(config: &Config) -> Box<dyn StorySource> {
    match &config.story.dir {
        Some(dir) => Box::new(FileStorySource::new(dir.clone())),
        None => Box::new(BuiltinStories),
    }
}

/// Drive one listening session from a recognition channel to completion.
///
/// Creates the channel via the factory (owned for the duration of the run,
/// released on exit), then consumes the single ordered event stream:
/// partials and finals go to the session, `Canceled` is reported and treated
/// as a stop, `SessionStopped` ends listening. Always stops the channel on
/// the way out, even after an error.
pub async fn run_session(
    session: &mut ReadingSession,
    factory: &dyn RecognitionChannelFactory,
    config: &Config,
    opts: &RunOptions,
) -> Result<()> {
    let (mut channel, mut events) = match factory.create(&config.recognition) {
        Ok(pair) => pair,
        Err(ReadalongError::AudioInput { message }) => {
            // Non-fatal: the page is still shown, there is just no live
            // alignment to drive it.
            eprintln!("No audio input available: {message}");
            eprintln!("The story is shown below for manual review.");
            view::render_session(session);
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    session.start();
    channel.start().await?;

    if !opts.quiet {
        view::render_session(session);
    }

    let result = consume_events(session, &mut events, opts).await;

    channel.stop().await?;
    session.stop();
    result
}

async fn consume_events(
    session: &mut ReadingSession,
    events: &mut tokio::sync::mpsc::Receiver<RecognitionEvent>,
    opts: &RunOptions,
) -> Result<()> {
    while let Some(event) = events.recv().await {
        match event {
            RecognitionEvent::Partial(text) => {
                if opts.verbosity >= 1 {
                    eprintln!("partial: {text}");
                }
                let before = (session.progress(), session.cursor());
                let outcome = session.on_partial(&text)?;
                match outcome {
                    PageOutcome::InProgress => {
                        if !opts.quiet && before != (session.progress(), session.cursor()) {
                            view::render_session(session);
                            view::render_frozen_hint(session);
                        }
                    }
                    PageOutcome::PageAdvanced => {
                        if !opts.quiet {
                            eprintln!("Page complete! Moving on.");
                            view::render_session(session);
                        }
                    }
                    PageOutcome::StoryComplete => {
                        if !opts.quiet {
                            view::render_session(session);
                            eprintln!("You've finished the story!");
                        }
                        break;
                    }
                }
            }
            RecognitionEvent::Final { text, recognized } => {
                if !recognized && opts.verbosity >= 2 {
                    eprintln!("no-match: speech could not be recognized");
                }
                session.on_final(&text, recognized);
            }
            RecognitionEvent::Canceled {
                reason,
                error_code,
                error_details,
            } => {
                eprintln!("Recognition canceled: {reason}");
                if opts.verbosity >= 2 {
                    if let Some(code) = error_code {
                        eprintln!("  error code: {code}");
                    }
                    if let Some(details) = error_details {
                        eprintln!("  details: {details}");
                    }
                }
                break;
            }
            RecognitionEvent::SessionStopped => {
                if opts.verbosity >= 2 {
                    eprintln!("recognition session stopped");
                }
                break;
            }
        }
    }
    Ok(())
}

/// List available stories to stdout.
pub fn list_stories(config: &Config) {
    let source = story_source(config);
    println!("Available stories:");
    for (id, title, pages) in source.list() {
        println!("  [{}] {} ({} pages)", id, title, pages);
    }
}
