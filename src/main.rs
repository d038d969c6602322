#![warn(clippy::all, rust_2018_idioms)]

use std::path::PathBuf;
use std::process::ExitCode;

use gridsketch::{CommentStyle, DiagramSnapshot, EditorConfig, EditorContext, StyleMode};

const USAGE: &str = "Usage: gridsketch-export <snapshot.json> [--ascii] [--comment <none|slash|hash|dash|semicolon>] [--config <file>]";

#[derive(Debug, Default)]
struct Args {
    snapshot: Option<PathBuf>,
    config: Option<PathBuf>,
    comment: Option<CommentStyle>,
    ascii: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--ascii" => parsed.ascii = true,
            "--comment" => {
                let value = args.next().ok_or("--comment needs a value")?;
                parsed.comment = Some(value.parse()?);
            }
            "--config" => {
                let value = args.next().ok_or("--config needs a file")?;
                parsed.config = Some(PathBuf::from(value));
            }
            "-h" | "--help" => return Err(USAGE.to_owned()),
            other if other.starts_with("--") => return Err(format!("unknown option {other}\n{USAGE}")),
            other => {
                if parsed.snapshot.replace(PathBuf::from(other)).is_some() {
                    return Err(format!("only one snapshot may be given\n{USAGE}"));
                }
            }
        }
    }
    Ok(parsed)
}

fn run(args: Args) -> Result<String, Box<dyn std::error::Error>> {
    let snapshot_path = args.snapshot.ok_or(USAGE)?;
    let config = match &args.config {
        Some(path) => EditorConfig::load(path)?,
        None => EditorConfig::default(),
    };
    let comment_style = args.comment.unwrap_or(config.comment_style);

    let snapshot = DiagramSnapshot::load(&snapshot_path)?;
    let mut editor = EditorContext::from_snapshot(snapshot, config)?;
    if args.ascii {
        editor.set_style_mode(StyleMode::Ascii);
    }
    log::info!(
        "exporting {} shapes from {}",
        editor.shapes().len(),
        snapshot_path.display()
    );
    Ok(editor.text_export(comment_style))
}

fn main() -> ExitCode {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let result = parse_args(std::env::args().skip(1)).map_err(Into::into).and_then(run);
    match result {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
