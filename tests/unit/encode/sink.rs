use super::*;
use crate::geometry::shapes::square;
use crate::scene::graph::SceneGraph;

fn one_object_snapshot() -> SceneSnapshot {
    let mut g = SceneGraph::new();
    g.add([square(2.0).unwrap()]);
    g.snapshot()
}

#[test]
fn in_memory_sink_captures_config_and_frames() {
    let mut sink = InMemorySink::new();
    let fps = Fps::new(24, 1).unwrap();
    sink.begin(SinkConfig { fps }).unwrap();
    let snap = one_object_snapshot();
    sink.receive_frame(FrameIndex(0), 1.0 / 24.0, &snap).unwrap();
    sink.end().unwrap();

    assert_eq!(sink.config(), Some(SinkConfig { fps }));
    assert_eq!(sink.frames().len(), 1);
    assert_eq!(sink.frames()[0].scene, snap);
    assert!(sink.is_ended());
}

#[test]
fn json_lines_sink_writes_one_line_per_frame() {
    let mut sink = JsonLinesSink::new(Vec::new());
    sink.begin(SinkConfig {
        fps: Fps::default(),
    })
    .unwrap();
    let snap = one_object_snapshot();
    sink.receive_frame(FrameIndex(0), 0.5, &snap).unwrap();
    sink.receive_frame(FrameIndex(1), 1.0, &snap).unwrap();
    sink.end().unwrap();
    assert_eq!(sink.frames_written(), 2);

    let text = String::from_utf8(sink.into_inner()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    let v: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(v["frame"], 1);
    assert_eq!(v["time_s"], 1.0);
    assert_eq!(v["objects"].as_array().unwrap().len(), 1);
    assert_eq!(v["objects"][0]["points"].as_array().unwrap().len(), 4);
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn json_lines_sink_reports_write_failures_as_sink_errors() {
    let mut sink = JsonLinesSink::new(BrokenPipe);
    let err = sink
        .receive_frame(FrameIndex(3), 0.1, &one_object_snapshot())
        .unwrap_err();
    assert!(matches!(err, KinemaError::Sink(_)));
    assert_eq!(sink.frames_written(), 0);
}
