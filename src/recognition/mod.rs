//! Recognition-channel interface: the external continuous speech recognizer,
//! modeled as an ordered event stream with start/stop control.

pub mod channel;
pub mod typed;

pub use channel::{
    RecognitionChannel, RecognitionChannelFactory, RecognitionEvent, ScriptedChannel,
    ScriptedChannelFactory,
};
pub use typed::{TypedChannel, TypedChannelFactory};
