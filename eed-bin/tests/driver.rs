use clap::Parser;
use eed_bin::{Cli, InputError};
use std::{io::Write, path::Path};
use tempfile::{tempdir, NamedTempFile};

fn file(content: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f
}

fn cli(hyp: &Path, reference: &Path, extra: &[&str]) -> Cli {
    let mut args = vec![
        "eed-bin".to_string(),
        "-r".into(),
        reference.display().to_string(),
        "-i".into(),
        hyp.display().to_string(),
    ];
    args.extend(extra.iter().map(|s| s.to_string()));
    Cli::parse_from(args)
}

fn run(cli: &Cli) -> (anyhow::Result<eed_bin::CorpusScores>, String) {
    let mut out = vec![];
    let r = cli.run(&mut out);
    (r, String::from_utf8(out).unwrap())
}

#[test]
fn system_score() {
    let hyp = file("hello world\nworld hello\n");
    let reference = file("hello world\nhello world\n");
    let (r, out) = run(&cli(hyp.path(), reference.path(), &[]));
    let corpus = r.unwrap();
    assert_eq!(corpus.scores.len(), 2);
    assert_eq!(out, "System Score=0.1901\n");
}

#[test]
fn verbose_prints_each_sentence() {
    let hyp = file("hello world\nworld hello\n");
    let reference = file("hello world\nhello world\n");
    let (r, out) = run(&cli(hyp.path(), reference.path(), &["-v"]));
    r.unwrap();
    assert_eq!(
        out,
        "Sentence 1: 0.0000\nSentence 2: 0.3803\nSystem Score=0.1901\n"
    );
}

#[test]
fn crlf_line_endings() {
    let hyp = file("hello world\r\nabc\r\n");
    let reference = file("hello world\nabc\n");
    let (r, _) = run(&cli(hyp.path(), reference.path(), &[]));
    assert_eq!(r.unwrap().scores, vec![0.0, 0.0]);
}

#[test]
fn line_count_mismatch() {
    let hyp = file("a\nb\nc\n");
    let reference = file("a\nb\n");
    let (r, out) = run(&cli(hyp.path(), reference.path(), &[]));
    let err = r.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<InputError>(),
        Some(InputError::LineCountMismatch {
            hyp: 3,
            reference: 2
        })
    ));
    assert_eq!(
        format!("Error: {err:#}"),
        "Error: input file has 3 lines, but reference has 2 lines."
    );
    assert!(out.is_empty());
}

#[test]
fn missing_file() {
    let dir = tempdir().unwrap();
    let reference = file("a\n");
    let missing = dir.path().join("missing.txt");
    let (r, _) = run(&cli(&missing, reference.path(), &[]));
    let err = r.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<InputError>(),
        Some(InputError::Io { .. })
    ));
    assert!(format!("{err:#}").starts_with("cannot read "));
}

#[test]
fn invalid_costs() {
    let hyp = file("a\n");
    let reference = file("a\n");
    let (r, _) = run(&cli(hyp.path(), reference.path(), &["--jump=-1"]));
    assert!(r.unwrap_err().to_string().contains("jump"));
}

#[test]
fn json_output() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("scores.json");
    let hyp = file("hello world\nabcd\n");
    let reference = file("hello world\nwxyz\n");
    let (r, _) = run(&cli(
        hyp.path(),
        reference.path(),
        &["-o", output.to_str().unwrap()],
    ));
    let corpus = r.unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["scores"].as_array().unwrap().len(), 2);
    assert_eq!(json["scores"][0].as_f64(), Some(0.0));
    assert!((json["mean"].as_f64().unwrap() - corpus.mean()).abs() < 1e-12);
}
