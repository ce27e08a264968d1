use std::collections::HashSet;

use crate::{
    animation::anim::{Animation, PreparedAnimation},
    animation::ease::Ease,
    encode::sink::{FrameSink, SinkConfig},
    foundation::core::FrameIndex,
    foundation::error::{KinemaError, KinemaResult},
    geometry::object::{GeometricObject, ObjectId},
    player::config::{PlayConfig, SceneConfig},
    scene::graph::SceneGraph,
};

/// Summary of one `play` or `wait` call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayReport {
    /// Index of the first frame emitted by the call.
    pub first_frame: FrameIndex,
    /// Number of ticks (and frames) the call ran.
    pub ticks: u64,
    /// Virtual duration of the call in seconds.
    pub duration_s: f64,
    /// Virtual clock after the call.
    pub end_time_s: f64,
}

/// Authoring entry point: owns the scene graph and drives the fixed-step timeline.
///
/// Each `play` call runs to completion before returning; nothing but the clock and the
/// scene graph outlives a call. Dropping a scene without [`Scene::finish`] leaves the sink
/// un-ended.
pub struct Scene<'s> {
    config: SceneConfig,
    graph: SceneGraph,
    sink: &'s mut dyn FrameSink,
    next_frame: u64,
    time_s: f64,
}

struct Slot {
    prepared: PreparedAnimation,
    start_s: f64,
    duration_s: f64,
    rate: Ease,
}

impl<'s> Scene<'s> {
    /// Validate `config` and start the sink.
    pub fn new(config: SceneConfig, sink: &'s mut dyn FrameSink) -> KinemaResult<Self> {
        config.validate()?;
        sink.begin(SinkConfig { fps: config.fps })
            .map_err(into_sink_error)?;
        Ok(Self {
            config,
            graph: SceneGraph::new(),
            sink,
            next_frame: 0,
            time_s: 0.0,
        })
    }

    /// Scene settings.
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Live scene graph (read-only).
    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    /// Current state of an on-screen object.
    pub fn get(&self, id: impl Into<ObjectId>) -> Option<&GeometricObject> {
        self.graph.get(id.into())
    }

    /// Virtual clock in seconds.
    pub fn time_s(&self) -> f64 {
        self.time_s
    }

    /// Frames delivered to the sink so far.
    pub fn frames_emitted(&self) -> u64 {
        self.next_frame
    }

    /// Put objects on screen immediately, without animation or frames.
    pub fn add(&mut self, objects: impl IntoIterator<Item = GeometricObject>) -> usize {
        self.graph.add(objects)
    }

    /// Take objects off screen immediately, without animation or frames.
    pub fn remove(&mut self, ids: impl IntoIterator<Item = ObjectId>) -> usize {
        self.graph.remove(ids)
    }

    /// Run one animation with default play settings.
    pub fn play_one(&mut self, animation: impl Into<Animation>) -> KinemaResult<PlayReport> {
        self.play(vec![animation.into()], PlayConfig::default())
    }

    /// Run `animations` in parallel on one clock until every one reaches `t = 1`.
    ///
    /// Validation and law resolution happen before the first tick, so a rejected call
    /// leaves the scene untouched. A sink failure aborts the call; the scene keeps whatever
    /// state was last applied.
    #[tracing::instrument(skip(self, animations), fields(count = animations.len()))]
    pub fn play(
        &mut self,
        animations: Vec<Animation>,
        cfg: PlayConfig,
    ) -> KinemaResult<PlayReport> {
        if animations.is_empty() {
            return Err(KinemaError::validation(
                "play needs at least one animation",
            ));
        }
        cfg.validate()?;

        let mut prepared = Vec::with_capacity(animations.len());
        for anim in &animations {
            prepared.push(anim.prepare(&self.graph)?);
        }
        warn_on_shared_targets(&prepared);

        let durations: Vec<f64> = animations
            .iter()
            .map(|a| a.run_time.unwrap_or(self.config.default_run_time))
            .collect();
        let (starts, durations, total_s) = schedule(&durations, cfg.lag_ratio, cfg.run_time);

        let slots: Vec<Slot> = prepared
            .into_iter()
            .zip(&animations)
            .zip(starts.into_iter().zip(durations))
            .map(|((prepared, anim), (start_s, duration_s))| Slot {
                prepared,
                start_s,
                duration_s,
                rate: anim
                    .rate_func
                    .or(cfg.rate_func)
                    .unwrap_or(self.config.default_rate),
            })
            .collect();

        for slot in &slots {
            slot.prepared.begin(&mut self.graph);
        }

        let report = self.run_ticks(total_s, |graph, elapsed| {
            for slot in &slots {
                let local = ((elapsed - slot.start_s) / slot.duration_s).clamp(0.0, 1.0);
                slot.prepared.apply(graph, slot.rate.apply(local));
            }
        })?;

        for slot in &slots {
            slot.prepared.finish(&mut self.graph);
        }

        tracing::debug!(
            ticks = report.ticks,
            duration_s = report.duration_s,
            on_screen = self.graph.len(),
            "play finished"
        );
        Ok(report)
    }

    /// Advance the clock by `secs`, emitting frames of the unchanged scene.
    #[tracing::instrument(skip(self))]
    pub fn wait(&mut self, secs: f64) -> KinemaResult<PlayReport> {
        if !(secs.is_finite() && secs > 0.0) {
            return Err(KinemaError::validation(format!(
                "wait duration must be finite and > 0 (got {secs})"
            )));
        }
        self.run_ticks(secs, |_, _| {})
    }

    /// [`Scene::wait`] for the configured default wait time.
    pub fn wait_default(&mut self) -> KinemaResult<PlayReport> {
        self.wait(self.config.wait_time)
    }

    /// End the sink and tear the scene graph down.
    pub fn finish(mut self) -> KinemaResult<()> {
        self.graph.clear();
        self.sink.end().map_err(into_sink_error)
    }

    fn run_ticks(
        &mut self,
        total_s: f64,
        mut step: impl FnMut(&mut SceneGraph, f64),
    ) -> KinemaResult<PlayReport> {
        let fps = self.config.fps;
        let dt = fps.frame_duration_secs();
        let ticks = fps.secs_to_frames_ceil(total_s);
        let first_frame = FrameIndex(self.next_frame);
        let start_s = self.time_s;

        for k in 1..=ticks {
            let elapsed = if k == ticks {
                total_s
            } else {
                (k as f64 * dt).min(total_s)
            };
            step(&mut self.graph, elapsed);

            let idx = FrameIndex(self.next_frame);
            let time_s = start_s + elapsed;
            let snapshot = self.graph.snapshot();
            tracing::trace!(frame = idx.0, time_s, objects = snapshot.objects.len(), "tick");
            self.sink
                .receive_frame(idx, time_s, &snapshot)
                .map_err(into_sink_error)?;
            self.next_frame += 1;
            self.time_s = time_s;
        }
        self.time_s = start_s + total_s;

        Ok(PlayReport {
            first_frame,
            ticks,
            duration_s: total_s,
            end_time_s: self.time_s,
        })
    }
}

/// Start offsets and durations for a call, plus its total length.
///
/// Each animation starts `lag_ratio` of the previous one's duration after the previous
/// start. A `run_time` override rescales the whole schedule to that length.
fn schedule(
    durations: &[f64],
    lag_ratio: f64,
    run_time: Option<f64>,
) -> (Vec<f64>, Vec<f64>, f64) {
    let mut starts = Vec::with_capacity(durations.len());
    let mut next_start = 0.0;
    let mut total: f64 = 0.0;
    for d in durations {
        starts.push(next_start);
        total = total.max(next_start + d);
        next_start += lag_ratio * d;
    }

    match run_time {
        Some(rt) if total > 0.0 => {
            let k = rt / total;
            (
                starts.into_iter().map(|s| s * k).collect(),
                durations.iter().map(|d| d * k).collect(),
                rt,
            )
        }
        _ => (starts, durations.to_vec(), total),
    }
}

fn warn_on_shared_targets(prepared: &[PreparedAnimation]) {
    let mut seen = HashSet::new();
    for p in prepared {
        if !seen.insert(p.target()) {
            tracing::warn!(
                target_id = %p.target(),
                animation = p.name(),
                "several animations write the same object in one play call; last write wins"
            );
        }
    }
}

fn into_sink_error(e: KinemaError) -> KinemaError {
    match e {
        KinemaError::Sink(_) => e,
        other => KinemaError::sink(other.to_string()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/player/scene.rs"]
mod tests;
