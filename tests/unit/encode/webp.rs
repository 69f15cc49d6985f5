use super::*;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_webp").join(name);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn default_quality_matches_asset_pipeline() {
    let o = CwebpOpts::default();
    assert_eq!((o.quality, o.alpha_quality), (87, 92));
}

#[test]
fn args_are_quality_then_io() {
    let t = CwebpTranscoder::new("cwebp");
    let args = t.args(Path::new("in.png"), Path::new("out.webp"));
    let args: Vec<_> = args.iter().map(|a| a.to_string_lossy().into_owned()).collect();
    assert_eq!(
        args,
        vec!["-q", "87", "-alpha_q", "92", "in.png", "-o", "out.webp"]
    );
}

#[test]
fn custom_opts_flow_into_args() {
    let t = CwebpTranscoder::new("cwebp").with_opts(CwebpOpts {
        quality: 50,
        alpha_quality: 60,
    });
    let args = t.args(Path::new("a"), Path::new("b"));
    assert_eq!(args[1], OsString::from("50"));
    assert_eq!(args[3], OsString::from("60"));
}

#[test]
fn explicit_path_wins() {
    let p = pick_cwebp(Some(Path::new("/x/cwebp")), None, &[]);
    assert_eq!(p, PathBuf::from("/x/cwebp"));
}

#[test]
fn env_path_is_used_only_when_it_exists() {
    let dir = scratch_dir("env");
    let fake = dir.join("cwebp-env");
    std::fs::write(&fake, b"").unwrap();

    assert_eq!(pick_cwebp(None, Some(&fake), &[]), fake);
    let missing = dir.join("does-not-exist");
    assert_eq!(pick_cwebp(None, Some(&missing), &[]), PathBuf::from("cwebp"));
}

#[test]
fn first_existing_candidate_is_used() {
    let dir = scratch_dir("candidates");
    let present = dir.join("cwebp-present");
    std::fs::write(&present, b"").unwrap();
    let missing = dir.join("cwebp-missing");

    let p = pick_cwebp(None, None, &[missing.as_path(), present.as_path()]);
    assert_eq!(p, present);
}

#[test]
fn probe_reports_missing_binary() {
    let t = CwebpTranscoder::new("/definitely/not/a/cwebp");
    let err = t.probe().unwrap_err();
    assert!(err.to_string().contains("transcode error:"));
}
