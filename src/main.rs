use clap::Parser;
use std::path::PathBuf;
use anyhow::{Context, Result};
use std::io::{self, Read};

mod config;
mod error;
mod llm;
mod parser;
mod pipeline;
mod prompt;
mod report;

use config::{Config, FileConfig, Overrides};
use pipeline::Transformer;
use prompt::{PromptRequest, SAMPLE_PARAGRAPH};

#[derive(Parser, Debug)]
#[command(version, about = "Summarize, classify the tone of, and rewrite a paragraph with a local model", long_about = None)]
struct Args {
    /// Paragraph to analyze; `-` reads it from stdin. Defaults to a sample paragraph
    paragraph: Option<String>,

    /// Model name to request from the completion service
    #[arg(short, long)]
    model: Option<String>,

    /// Base URL of the Ollama server
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in seconds (no timeout when unset)
    #[arg(long)]
    timeout: Option<u64>,

    /// Path to a JSON config file (defaults to ~/.text_transformer/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn read_paragraph(arg: Option<String>) -> Result<String> {
    match arg {
        None => Ok(SAMPLE_PARAGRAPH.to_string()),
        Some(p) if p == "-" => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read paragraph from stdin")?;
            Ok(buf)
        }
        Some(p) => Ok(p),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let config_path = match args.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };
    let file = FileConfig::load(&config_path)?;
    let config = Config::resolve(
        file,
        Overrides {
            model: args.model,
            base_url: args.base_url,
            timeout_secs: args.timeout,
        },
    );
    log::info!("Using model {} at {}", config.model, config.base_url);

    let paragraph = read_paragraph(args.paragraph)?;
    let request = PromptRequest::new(paragraph)?;

    let transformer = Transformer::new(&config)?;

    log::info!("Processing paragraph ({} chars)", request.paragraph().len());
    let result = match transformer.transform(&request) {
        Ok(result) => result,
        Err(e) => {
            log::error!("Error during processing: {}", e);
            return Err(e.into());
        }
    };

    let mut stdout = io::stdout().lock();
    if args.json {
        report::render_json(&mut stdout, request.paragraph(), &result)?;
    } else {
        report::render_text(&mut stdout, request.paragraph(), &result)?;
    }

    Ok(())
}
