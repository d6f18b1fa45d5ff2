use std::{fs::File, io::BufReader, path::PathBuf};

use anyhow::{Context, Result};
use crossbeam_channel::unbounded;
use gesture_pilot::{
    SessionConfig, TrackingSession,
    capture::read_capture,
    pipeline::{Backlog, start_session_worker},
};

fn main() -> Result<()> {
    env_logger::init();

    let mut capture_path = None;
    let mut config_path = None;
    let mut backlog = Backlog::KeepAll;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().context("--config needs a path")?;
                config_path = Some(PathBuf::from(path));
            }
            "--latest" => backlog = Backlog::KeepLatest,
            _ => capture_path = Some(PathBuf::from(arg)),
        }
    }

    let Some(capture_path) = capture_path else {
        anyhow::bail!("usage: gesture-pilot <capture.jsonl> [--config session.toml] [--latest]");
    };

    let config = match &config_path {
        Some(path) => SessionConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SessionConfig::default(),
    };
    log::info!("session config: {config:?}");

    let file = File::open(&capture_path)
        .with_context(|| format!("failed to open capture {}", capture_path.display()))?;
    let records = read_capture(BufReader::new(file))
        .with_context(|| format!("failed to parse capture {}", capture_path.display()))?;
    log::info!(
        "replaying {} records from {}",
        records.len(),
        capture_path.display()
    );

    let (session, events_rx) = TrackingSession::new(config);
    let (input_tx, input_rx) = unbounded();
    let worker = start_session_worker(session, input_rx, backlog);

    for record in records {
        for input in record.into_inputs() {
            input_tx
                .send(input)
                .context("session worker stopped unexpectedly")?;
        }
    }
    drop(input_tx);

    let mut count = 0usize;
    for event in events_rx.iter() {
        println!("[{:>5}] {}", event.frame, event.display_text());
        count += 1;
    }

    if worker.join().is_err() {
        anyhow::bail!("session worker panicked");
    }
    println!("{count} events");

    Ok(())
}
