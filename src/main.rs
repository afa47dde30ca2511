// ABOUTME: Main entry point for the md2pptx builder.
// ABOUTME: Provides CLI interface and executes the conversion from the library.

use anyhow::Context;
use clap::Parser;
use log::{info, warn};
use md2pptx::{build_presentation, Config, DeckAssembler, SlideAssembler};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Generate a PowerPoint deck with a background image and logo from markdown",
    long_about = None
)]
struct Cli {
    /// Path to the markdown file
    input_md: PathBuf,

    /// Background image (.png/.jpg)
    #[arg(short, long)]
    background: PathBuf,

    /// Logo image
    #[arg(short, long)]
    logo: PathBuf,

    /// Template PPTX whose slide size is reused
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Path to output PPTX file
    #[arg(short, long, default_value = "output.pptx")]
    output: PathBuf,

    /// Slide delimiter line
    #[arg(long)]
    pagebreak: Option<String>,

    /// Font family for slide text
    #[arg(long)]
    font: Option<String>,

    /// Slide aspect ratio when no template is given: 16:9 or 4:3
    #[arg(long)]
    aspect_ratio: Option<String>,

    /// Parse only, do not write a file
    #[arg(long)]
    dry_run: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = Config::from_env().with_overrides(
        cli.font.clone(),
        cli.pagebreak.clone(),
        cli.aspect_ratio.clone(),
    );
    config.validate()?;
    let style = config.style_config()?;

    let assembler = SlideAssembler::new(&config.pagebreak)?;
    let slides = assembler
        .assemble_file(&cli.input_md)
        .with_context(|| format!("Failed to process {:?}", cli.input_md))?;

    info!("Detected {} slides", slides.len());

    if cli.dry_run {
        if slides.is_empty() {
            warn!("No slides to convert");
        }
        for slide in &slides {
            println!(
                "{:>3}  {}  ({} blocks)",
                slide.number(),
                slide.title,
                slide.body_blocks.len()
            );
        }
        info!("Dry run: no PPTX file written");
        return Ok(());
    }

    // Assets are checked even when there is nothing to convert.
    let deck = DeckAssembler::new(
        &cli.background,
        &cli.logo,
        cli.template.as_deref(),
        config.slide_size()?,
    )?;

    let Some(first) = slides.first() else {
        warn!("No slides to convert");
        return Ok(());
    };
    let deck = deck.with_title(first.title.clone());

    build_presentation(&slides, &style, &deck, &cli.output)
        .with_context(|| format!("Failed to write {:?}", cli.output))?;

    println!("PPTX generated successfully: {:?}", cli.output);
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
