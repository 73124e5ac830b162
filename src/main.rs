use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Parser;
use eyre::Result;
use log::info;

mod cli;

use cli::Cli;
use ytgist::pipeline::{GeminiBackend, InnerTubeCaptions, Pipeline};

fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("ytgist.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ytgist")
        .join("logs")
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    let cli = Cli::parse();

    // Fatal before any input is read: the pipeline cannot run without a key
    let mut config = ytgist::config::Config::from_env()?;

    if !cli.langs.is_empty() {
        config.languages = cli.langs.clone();
    }
    if let Some(ref model) = cli.model {
        config.model = model.clone();
    }

    if cli.verbose {
        let config_path = ytgist::config::config_path();
        if config_path.exists() {
            eprintln!("Config: {}", config_path.display());
        }
        eprintln!("Model: {}", config.model);
        eprintln!("Languages: {}", config.languages.join(", "));
    }

    let client = reqwest::Client::new();
    let pipeline = Pipeline::new(
        config.clone(),
        InnerTubeCaptions::new(client.clone()),
        GeminiBackend::new(&config, client),
    );

    // Collect URLs: from arg or stdin, one pipeline run per line
    let urls = if let Some(ref url) = cli.url {
        vec![url.clone()]
    } else {
        let stdin = io::stdin();
        stdin.lock().lines().collect::<Result<Vec<_>, _>>()?
    };

    if urls.is_empty() {
        eyre::bail!("no URL provided\n\nUsage: ytgist <URL>\n       echo <URL> | ytgist");
    }

    for url in &urls {
        let url = url.trim();
        if url.is_empty() {
            continue;
        }

        match pipeline.run(url).await {
            Ok(report) => {
                if cli.verbose {
                    eprintln!("Video ID: {}", report.video_id);
                }
                println!("{}", ytgist::output::render_report(&report, cli.show_transcript));
            }
            Err(e) => {
                eprintln!(
                    "could not extract video ID from: {url} ({e})\n\
                     Expected format: https://www.youtube.com/watch?v=ID"
                );
            }
        }
    }

    Ok(())
}
