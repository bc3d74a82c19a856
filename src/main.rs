//! Replays a recorded input script and prints the view box after each event.
//!
//! Usage: `zoop-replay <script.json> [--config <config.json>] [--json]`
use std::path::PathBuf;

use zoop::{run_script, ReplayScript, ZoopConfig};

struct Args {
    script: PathBuf,
    config: Option<PathBuf>,
    json: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut script = None;
    let mut config = None;
    let mut json = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().ok_or("--config needs a path")?;
                config = Some(PathBuf::from(path));
            }
            "--json" => json = true,
            "-h" | "--help" => return Err(String::new()),
            other if other.starts_with("--") => return Err(format!("Unknown option {}", other)),
            other => script = Some(PathBuf::from(other)),
        }
    }

    Ok(Args {
        script: script.ok_or("Missing script path")?,
        config,
        json,
    })
}

fn run(args: Args) -> zoop::Result<()> {
    let script = ReplayScript::load_from_path(&args.script)?;
    let config = match &args.config {
        Some(path) => ZoopConfig::load_from_path(path)?,
        None => script.config.clone().unwrap_or_default(),
    };

    env_logger::Builder::new()
        .filter_level(config.log_level.to_level_filter())
        .parse_default_env()
        .init();

    let report = run_script(&script, &config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for step in &report.steps {
            println!("{:>4}  {:<14}  {}", step.index, step.kind, step.window);
        }
        println!("final  {}", report.final_window);
    }

    Ok(())
}

fn main() {
    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            if !message.is_empty() {
                eprintln!("{}", message);
            }
            eprintln!("Usage: zoop-replay <script.json> [--config <config.json>] [--json]");
            std::process::exit(2);
        }
    };

    if let Err(e) = run(args) {
        eprintln!("Replay error: {}", e);
        std::process::exit(1);
    }
}
