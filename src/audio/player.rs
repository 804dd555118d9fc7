//! Clip player using rodio
//!
//! One output stream is opened at startup and shared by every activation.
//! Each clip gets its own detached sink on the stream's mixer, so
//! overlapping activations mix freely and nothing tracks completion.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, mixer::Mixer};

/// Shared audio output for fire-and-forget clip playback
pub struct ClipPlayer {
    _stream: OutputStream,
    mixer: Mixer,
}

impl ClipPlayer {
    /// Open the default output device
    pub fn new() -> Result<Self, String> {
        let stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| format!("Failed to create audio output: {}", e))?;
        let mixer = stream.mixer().clone();

        Ok(Self {
            _stream: stream,
            mixer,
        })
    }

    /// Decode a clip and start playing it.
    ///
    /// Returns as soon as the sink is detached; the clip plays to completion
    /// on the output thread. Decode failures (corrupt or unsupported data)
    /// are reported to the caller, which surfaces them to the user.
    pub fn play_clip(&self, path: &Path) -> Result<(), String> {
        let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
        let reader = BufReader::new(file);
        let source = Decoder::new(reader).map_err(|e| format!("Failed to decode audio: {}", e))?;

        let sink = Sink::connect_new(&self.mixer);
        sink.append(source);
        sink.detach();

        Ok(())
    }
}
