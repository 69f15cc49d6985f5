use super::*;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_sink").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_event(sink: &mut dyn LayerSink, id: &str) -> FrescoResult<()> {
    sink.begin(id)?;
    for kind in LayerKind::ALL {
        sink.write_layer(kind, kind.stem().as_bytes())?;
    }
    sink.end()
}

#[test]
fn layer_paths_use_stems() {
    let p = layer_path(Path::new("out"), "rubicon", LayerKind::Midground, "webp");
    assert_eq!(p, Path::new("out").join("rubicon").join("mid.webp"));
}

#[test]
fn png_dir_sink_writes_three_files() {
    let root = scratch_dir("png");
    let mut sink = PngDirSink::new(&root);
    write_event(&mut sink, "gallic-sack").unwrap();

    for kind in LayerKind::ALL {
        let bytes = std::fs::read(layer_path(&root, "gallic-sack", kind, "png")).unwrap();
        assert_eq!(bytes, kind.stem().as_bytes());
    }
}

#[test]
fn needs_render_skips_complete_events_unless_overwriting() {
    let root = scratch_dir("skip");
    assert!(needs_render(&root, "rubicon", "png", false));

    let mut sink = PngDirSink::new(&root);
    write_event(&mut sink, "rubicon").unwrap();
    assert!(!needs_render(&root, "rubicon", "png", false));
    assert!(needs_render(&root, "rubicon", "png", true));
    assert!(needs_render(&root, "rubicon", "webp", false));

    std::fs::remove_file(layer_path(&root, "rubicon", LayerKind::Foreground, "png")).unwrap();
    assert!(needs_render(&root, "rubicon", "png", false));
}

#[test]
fn writing_before_begin_is_rejected() {
    let mut sink = PngDirSink::new(scratch_dir("early"));
    let err = sink.write_layer(LayerKind::Background, b"x").unwrap_err();
    assert!(matches!(err, FrescoError::Validation(_)));

    let mut mem = InMemorySink::new();
    assert!(mem.write_layer(LayerKind::Background, b"x").is_err());
    assert!(mem.end().is_err());
}

#[test]
fn in_memory_sink_groups_layers_by_event() {
    let mut sink = InMemorySink::new();
    write_event(&mut sink, "a").unwrap();
    write_event(&mut sink, "b").unwrap();

    let ids: Vec<_> = sink.events.iter().map(|e| e.event_id.as_str()).collect();
    assert_eq!(ids, ["a", "b"]);
    assert!(sink.events.iter().all(|e| e.closed));
    let kinds: Vec<_> = sink.events[1].layers.iter().map(|(k, _)| *k).collect();
    assert_eq!(kinds, LayerKind::ALL);
}

#[test]
fn webp_sink_removes_temp_png_when_transcode_fails() {
    let root = scratch_dir("webp_fail");
    let mut sink = WebpDirSink::new(&root, CwebpTranscoder::new("/definitely/not/a/cwebp"));
    sink.begin("rubicon").unwrap();
    let err = sink.write_layer(LayerKind::Background, b"png").unwrap_err();
    assert!(matches!(err, FrescoError::Transcode(_)));

    let leftovers: Vec<_> = std::fs::read_dir(root.join("rubicon")).unwrap().collect();
    assert!(leftovers.is_empty(), "{leftovers:?}");
}

#[cfg(unix)]
#[test]
fn webp_sink_runs_transcoder_and_cleans_up() {
    use std::os::unix::fs::PermissionsExt as _;

    let root = scratch_dir("webp_ok");
    // stand-in encoder: copies the input (arg 5) to the output (arg 7)
    let bin = root.join("fake-cwebp");
    std::fs::write(&bin, "#!/bin/sh\ncp \"$5\" \"$7\"\n").unwrap();
    std::fs::set_permissions(&bin, std::fs::Permissions::from_mode(0o755)).unwrap();

    let out = root.join("scenes");
    let mut sink = WebpDirSink::new(&out, CwebpTranscoder::new(&bin));
    write_event(&mut sink, "rubicon").unwrap();

    for kind in LayerKind::ALL {
        let bytes = std::fs::read(layer_path(&out, "rubicon", kind, "webp")).unwrap();
        assert_eq!(bytes, kind.stem().as_bytes());
    }
    let mut names: Vec<_> = std::fs::read_dir(out.join("rubicon"))
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    assert_eq!(names, ["bg.webp", "fg.webp", "mid.webp"]);
    assert!(!needs_render(&out, "rubicon", "webp", false));
}
