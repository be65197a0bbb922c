use inkpad_app::{AppError, Cli, run};
use inkpad_core::ShapeStore;
use std::fs;
use std::path::Path;

const SCRIPT: &str = r##"[
    {"color": "#cc0000"},
    {"size": 4},
    {"tool": "pen"},
    {"down": {"x": 10, "y": 10}},
    {"move": {"x": 20, "y": 12}},
    {"move": {"x": 30, "y": 18}},
    {"up": {"x": 30, "y": 18}},
    {"tool": "circle"},
    {"down": {"x": 100, "y": 100}},
    {"move": {"x": 120, "y": 100}},
    {"leave": {"x": 120, "y": 100}},
    {"tool": "text"},
    {"down": {"x": 300, "y": 50}},
    {"up": {"x": 300, "y": 50}},
    {"down": {"x": 5, "y": 5, "pointer": "touch"}}
]"##;

fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn cli(script: std::path::PathBuf) -> Cli {
    Cli {
        script,
        config: None,
        svg: None,
        json: None,
    }
}

#[test]
fn exports_svg_and_json() {
    let dir = tempfile::tempdir().unwrap();
    let mut args = cli(write(dir.path(), "script.json", SCRIPT));
    args.svg = Some(dir.path().join("board.svg"));
    args.json = Some(dir.path().join("board.json"));

    let report = run(&args).unwrap();
    assert_eq!(report.steps, 15);
    assert_eq!(report.touch_blocked, 1);

    let json = fs::read_to_string(dir.path().join("board.json")).unwrap();
    let store = ShapeStore::from_json(&json).unwrap();
    assert_eq!(store.lines().len(), 1);
    assert_eq!(store.circles().len(), 1);
    assert_eq!(store.texts().len(), 1);
    assert!(store.rectangles().is_empty());
    let stroke = &store.lines()[0];
    assert_eq!(stroke.style().color.to_hex(), "#cc0000");
    assert_eq!(stroke.style().stroke_size, 4);

    let svg = fs::read_to_string(dir.path().join("board.svg")).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(&format!(r#"id="{}""#, stroke.id())));
    assert!(svg.contains(">Sample</text>"));
}

#[test]
fn config_controls_canvas_and_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(
        dir.path(),
        "board.json",
        r#"{"text_placeholder": "Hello", "canvas_width": 50, "canvas_height": 50}"#,
    );
    let script = write(
        dir.path(),
        "script.json",
        r#"[
            {"tool": "line"},
            {"down": {"x": 10, "y": 10}},
            {"move": {"x": 40, "y": 40}},
            {"move": {"x": 80, "y": 40}},
            {"up": {"x": 80, "y": 40}},
            {"tool": "text"},
            {"down": {"x": 1, "y": 1}}
        ]"#,
    );
    let mut args = cli(script);
    args.config = Some(config);
    args.json = Some(dir.path().join("out.json"));
    run(&args).unwrap();

    let json = fs::read_to_string(dir.path().join("out.json")).unwrap();
    let store = ShapeStore::from_json(&json).unwrap();
    let inkpad_core::Shape::Line(line) = &store.lines()[0] else {
        panic!("expected line");
    };
    assert_eq!(line.flat_points(), [10.0, 10.0, 40.0, 40.0]);
    let inkpad_core::Shape::Text(text) = &store.texts()[0] else {
        panic!("expected text");
    };
    assert_eq!(text.content, "Hello");
}

#[test]
fn missing_script_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = run(&cli(dir.path().join("absent.json"))).unwrap_err();
    assert!(matches!(err, AppError::Io { .. }));
}

#[test]
fn malformed_script_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let script = write(dir.path(), "script.json", r#"[{"jump": {}}]"#);
    let err = run(&cli(script)).unwrap_err();
    assert!(matches!(err, AppError::Script(_)));
}

#[test]
fn cli_parses_flags() {
    use clap::Parser;
    let args = Cli::try_parse_from(["inkpad", "s.json", "-c", "b.json", "--svg", "o.svg"]).unwrap();
    assert_eq!(args.script, Path::new("s.json"));
    assert_eq!(args.config.as_deref(), Some(Path::new("b.json")));
    assert_eq!(args.svg.as_deref(), Some(Path::new("o.svg")));
    assert!(args.json.is_none());
}
