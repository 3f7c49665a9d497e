//! Typed-input recognition channel.
//!
//! A recognizer stand-in that reads lines from stdin so the binary works
//! without audio hardware: each line becomes one utterance, emitted as
//! word-by-word growing partials (the way a streaming recognizer revises its
//! hypothesis) followed by a final transcript.

use crate::config::RecognitionConfig;
use crate::defaults;
use crate::error::Result;
use crate::recognition::channel::{
    RecognitionChannel, RecognitionChannelFactory, RecognitionEvent,
};
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Recognition channel driven by stdin lines.
pub struct TypedChannel {
    tx: Option<mpsc::Sender<RecognitionEvent>>,
    reader: Option<JoinHandle<()>>,
}

impl TypedChannel {
    pub fn new() -> (Self, mpsc::Receiver<RecognitionEvent>) {
        let (tx, rx) = mpsc::channel(defaults::EVENT_BUFFER);
        (
            Self {
                tx: Some(tx),
                reader: None,
            },
            rx,
        )
    }

    /// Expand one typed line into the event sequence a recognizer would emit.
    fn utterance_events(line: &str) -> Vec<RecognitionEvent> {
        let mut events = Vec::new();
        let mut hypothesis = String::new();
        for word in line.split_whitespace() {
            if !hypothesis.is_empty() {
                hypothesis.push(' ');
            }
            hypothesis.push_str(word);
            events.push(RecognitionEvent::Partial(hypothesis.clone()));
        }
        let recognized = !events.is_empty();
        events.push(RecognitionEvent::Final {
            text: line.trim().to_string(),
            recognized,
        });
        events
    }
}

#[async_trait]
impl RecognitionChannel for TypedChannel {
    async fn start(&mut self) -> Result<()> {
        let Some(tx) = self.tx.take() else {
            // Already started or stopped.
            return Ok(());
        };

        self.reader = Some(tokio::spawn(async move {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                for event in TypedChannel::utterance_events(&line) {
                    if tx.send(event).await.is_err() {
                        return;
                    }
                }
            }
            // EOF on stdin ends the recognition session.
            let _ = tx.send(RecognitionEvent::SessionStopped).await;
        }));
        Ok(())
    }

    async fn stop(&mut self) -> Result<()> {
        self.tx = None;
        if let Some(reader) = self.reader.take() {
            reader.abort();
        }
        Ok(())
    }
}

/// Factory for typed-input channels.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypedChannelFactory;

impl RecognitionChannelFactory for TypedChannelFactory {
    fn create(
        &self,
        _config: &RecognitionConfig,
    ) -> Result<(Box<dyn RecognitionChannel>, mpsc::Receiver<RecognitionEvent>)> {
        let (channel, rx) = TypedChannel::new();
        Ok((Box::new(channel), rx))
    }
}
