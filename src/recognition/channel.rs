//! Recognition channel trait and event types.
//!
//! The upstream recognizer is an external collaborator. It emits one ordered
//! stream of events over a single channel, consumed by one handling loop; the
//! session never registers per-event-type callbacks.

use crate::config::RecognitionConfig;
use crate::defaults;
use crate::error::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;

/// One event from the recognition channel, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionEvent {
    /// In-progress, revisable hypothesis for the current utterance.
    Partial(String),
    /// Committed transcript for a completed utterance. `recognized` is false
    /// when the recognizer heard audio but produced no transcript (no-match).
    Final { text: String, recognized: bool },
    /// The channel was canceled, possibly due to an error.
    Canceled {
        reason: String,
        error_code: Option<i32>,
        error_details: Option<String>,
    },
    /// The recognition session ended; treated the same as a stop.
    SessionStopped,
}

/// Control handle for a recognition channel.
///
/// `stop` must be idempotent and safe to call from any state, including
/// before `start`. `Canceled` and `SessionStopped` may arrive at any time.
#[async_trait]
pub trait RecognitionChannel: Send {
    /// Begin continuous recognition.
    async fn start(&mut self) -> Result<()>;

    /// Stop continuous recognition. Idempotent.
    async fn stop(&mut self) -> Result<()>;
}

/// Constructs a recognition channel and its event receiver.
///
/// The session controller calls this on every explicit start; the handle is
/// owned, replaced (not merged) on restart, and released on stop/teardown.
pub trait RecognitionChannelFactory {
    fn create(
        &self,
        config: &RecognitionConfig,
    ) -> Result<(Box<dyn RecognitionChannel>, mpsc::Receiver<RecognitionEvent>)>;
}

/// Scripted channel for tests and demos: emits a fixed event sequence.
pub struct ScriptedChannel {
    script: Vec<RecognitionEvent>,
    tx: mpsc::Sender<RecognitionEvent>,
    stopped: bool,
}

impl ScriptedChannel {
    /// Create a channel that will emit `script` in order on `start`, followed
    /// by a `SessionStopped` event.
    pub fn new(script: Vec<RecognitionEvent>) -> (Self, mpsc::Receiver<RecognitionEvent>) {
        let (tx, rx) = mpsc::channel(defaults::EVENT_BUFFER.max(script.len() + 1));
        (
            Self {
                script,
                tx,
                stopped: false,
            },
            rx,
        )
    }
}

#[async_trait]
impl RecognitionChannel for ScriptedChannel {
    async fn start(&mut self) -> Result<()> {
        if self.stopped {
            return Ok(());
        }
        for event in self.script.drain(..) {
            // Receiver dropped means the consumer is gone; nothing to report.
            if self.tx.send(event).await.is_err() {
                break;
            }
        }
        let _ = self.tx.send(RecognitionEvent::SessionStopped).await;
        Ok(())
    }

    async fn stop(&mut self) -> Result<()> {
        self.stopped = true;
        Ok(())
    }
}

/// Factory producing scripted channels, one script per `create` call.
pub struct ScriptedChannelFactory {
    scripts: std::sync::Mutex<Vec<Vec<RecognitionEvent>>>,
}

impl ScriptedChannelFactory {
    /// Each call to `create` consumes the next script; when the scripts run
    /// out, channels are created with an empty script.
    pub fn new(scripts: Vec<Vec<RecognitionEvent>>) -> Self {
        let mut scripts = scripts;
        scripts.reverse();
        Self {
            scripts: std::sync::Mutex::new(scripts),
        }
    }
}

impl RecognitionChannelFactory for ScriptedChannelFactory {
    fn create(
        &self,
        _config: &RecognitionConfig,
    ) -> Result<(Box<dyn RecognitionChannel>, mpsc::Receiver<RecognitionEvent>)> {
        let script = self
            .scripts
            .lock()
            .map(|mut s| s.pop().unwrap_or_default())
            .unwrap_or_default();
        let (channel, rx) = ScriptedChannel::new(script);
        Ok((Box::new(channel), rx))
    }
}
