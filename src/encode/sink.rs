use std::io::Write;

use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{KinemaError, KinemaResult};
use crate::scene::graph::{RenderedObject, SceneSnapshot};

/// Configuration provided to a [`FrameSink`] when a scene starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    /// Tick rate of the player.
    pub fps: Fps,
}

/// Sink contract for consuming frame snapshots in timeline order.
///
/// Ordering contract: `receive_frame` is called exactly once per tick, with strictly
/// increasing `FrameIndex` and non-decreasing `time_s`. Any error is fatal to the running
/// `play` call; the engine never retries delivery.
pub trait FrameSink {
    /// Called once before any frame is delivered.
    fn begin(&mut self, cfg: SinkConfig) -> KinemaResult<()>;
    /// Accept one frame.
    fn receive_frame(
        &mut self,
        idx: FrameIndex,
        time_s: f64,
        snapshot: &SceneSnapshot,
    ) -> KinemaResult<()>;
    /// Called once after the last frame.
    fn end(&mut self) -> KinemaResult<()>;
}

/// One frame captured by [`InMemorySink`].
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedFrame {
    /// Global frame index.
    pub index: FrameIndex,
    /// Virtual time in seconds.
    pub time_s: f64,
    /// Scene state at that tick.
    pub scene: SceneSnapshot,
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<CapturedFrame>,
    ended: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[CapturedFrame] {
        &self.frames
    }

    /// Whether `end` has been called.
    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> KinemaResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn receive_frame(
        &mut self,
        idx: FrameIndex,
        time_s: f64,
        snapshot: &SceneSnapshot,
    ) -> KinemaResult<()> {
        self.frames.push(CapturedFrame {
            index: idx,
            time_s,
            scene: snapshot.clone(),
        });
        Ok(())
    }

    fn end(&mut self) -> KinemaResult<()> {
        self.ended = true;
        Ok(())
    }
}

/// Sink that only counts frames.
#[derive(Debug, Default)]
pub struct CountingSink {
    frames: u64,
    last_time_s: f64,
}

impl CountingSink {
    /// Create a new counting sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames received so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Virtual time of the last frame received.
    pub fn last_time_s(&self) -> f64 {
        self.last_time_s
    }
}

impl FrameSink for CountingSink {
    fn begin(&mut self, _cfg: SinkConfig) -> KinemaResult<()> {
        self.frames = 0;
        self.last_time_s = 0.0;
        Ok(())
    }

    fn receive_frame(
        &mut self,
        _idx: FrameIndex,
        time_s: f64,
        _snapshot: &SceneSnapshot,
    ) -> KinemaResult<()> {
        self.frames += 1;
        self.last_time_s = time_s;
        Ok(())
    }

    fn end(&mut self) -> KinemaResult<()> {
        Ok(())
    }
}

#[derive(serde::Serialize)]
struct FrameRecord<'a> {
    frame: u64,
    time_s: f64,
    objects: &'a [RenderedObject],
}

/// Sink writing one JSON object per frame, newline-delimited.
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    out: W,
    frames: u64,
}

impl<W: Write> JsonLinesSink<W> {
    /// Wrap a writer.
    pub fn new(out: W) -> Self {
        Self { out, frames: 0 }
    }

    /// Frames written so far.
    pub fn frames_written(&self) -> u64 {
        self.frames
    }

    /// Unwrap the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for JsonLinesSink<W> {
    fn begin(&mut self, _cfg: SinkConfig) -> KinemaResult<()> {
        self.frames = 0;
        Ok(())
    }

    fn receive_frame(
        &mut self,
        idx: FrameIndex,
        time_s: f64,
        snapshot: &SceneSnapshot,
    ) -> KinemaResult<()> {
        let record = FrameRecord {
            frame: idx.0,
            time_s,
            objects: &snapshot.objects,
        };
        serde_json::to_writer(&mut self.out, &record)
            .map_err(|e| KinemaError::sink(format!("encode frame {}: {e}", idx.0)))?;
        self.out
            .write_all(b"\n")
            .map_err(|e| KinemaError::sink(format!("write frame {}: {e}", idx.0)))?;
        self.frames += 1;
        Ok(())
    }

    fn end(&mut self) -> KinemaResult<()> {
        self.out
            .flush()
            .map_err(|e| KinemaError::sink(format!("flush: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
