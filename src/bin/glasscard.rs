use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "glasscard", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a batch of cards from records and an image folder into a ZIP.
    Bulk(BulkArgs),
    /// Print the AI prompt describing the record shape for a template.
    Prompt(PromptArgs),
}

#[derive(Parser, Debug)]
struct BulkArgs {
    /// Base card state JSON; defaults apply when omitted.
    #[arg(long)]
    state: Option<PathBuf>,

    /// JSON array of record patches.
    #[arg(long)]
    records: Option<PathBuf>,

    /// Directory of sequence images, sorted by file name.
    #[arg(long)]
    images: Option<PathBuf>,

    /// Card font file (TTF/OTF).
    #[arg(long)]
    font: PathBuf,

    /// First 1-based index to generate (inclusive).
    #[arg(long)]
    start: Option<u32>,

    /// Last 1-based index to generate (inclusive).
    #[arg(long)]
    end: Option<u32>,

    /// Capture resolution multiplier (1-4).
    #[arg(long, default_value_t = 2)]
    resolution: u32,

    /// Where folder images are applied: background | card.
    #[arg(long, default_value = "background")]
    target: String,

    /// Output ZIP path.
    #[arg(long, default_value = glasscard::ARCHIVE_FILE_NAME)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct PromptArgs {
    /// Card template: quote | qa | image-text.
    #[arg(long, default_value = "quote")]
    template: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Bulk(args) => cmd_bulk(args),
        Command::Prompt(args) => cmd_prompt(args),
    }
}

fn cmd_bulk(args: BulkArgs) -> anyhow::Result<()> {
    let state = match &args.state {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read state '{}'", path.display()))?;
            serde_json::from_str::<glasscard::CardState>(&text)
                .with_context(|| format!("parse state '{}'", path.display()))?
        }
        None => glasscard::CardState::default(),
    };

    let font_bytes = std::fs::read(&args.font)
        .with_context(|| format!("read font '{}'", args.font.display()))?;
    let canvas = glasscard::OffscreenCanvas::new(glasscard::RendererOptions { font_bytes })?;

    let shared = glasscard::SharedCardState::new(state);
    let mut generator = glasscard::BulkGenerator::new(shared);
    generator.attach_canvas(Box::new(canvas));

    if let Some(path) = &args.records {
        let bytes = std::fs::read(path)
            .with_context(|| format!("read records '{}'", path.display()))?;
        let count = generator.records_mut().load_file_bytes(&bytes)?;
        eprintln!("loaded {count} records");
    }
    if let Some(dir) = &args.images {
        let images = glasscard::load_images_from_dir(dir)?;
        eprintln!("loaded {} images", images.len());
        generator.set_images(images);
    }

    let default_range = generator.default_range();
    let range = glasscard::BatchRange::new(
        args.start.unwrap_or(default_range.start),
        args.end.unwrap_or(default_range.end),
    );

    let target = match args.target.as_str() {
        "background" => glasscard::ImageTarget::Background,
        "card" => glasscard::ImageTarget::Subject,
        other => anyhow::bail!("unknown image target '{other}' (expected background|card)"),
    };
    let job = glasscard::GenerationJob::new(
        glasscard::Resolution::from_multiplier(args.resolution)?,
        target,
    );

    let Some(run) = generator.generate(range, &job)? else {
        anyhow::bail!("nothing to generate: load records and/or images first");
    };

    eprintln!(
        "captured {} of {} cards",
        run.report.captured(),
        run.report.steps.len()
    );
    for step in &run.report.steps {
        if let glasscard::StepStatus::Skipped(reason) = &step.status {
            eprintln!("  skipped card-{}: {reason}", step.position);
        }
    }

    match run.archive {
        Some(bytes) => {
            std::fs::write(&args.out, &bytes)
                .with_context(|| format!("write archive '{}'", args.out.display()))?;
            eprintln!("wrote {}", args.out.display());
            Ok(())
        }
        None => anyhow::bail!("archive serialization failed; no output written"),
    }
}

fn cmd_prompt(args: PromptArgs) -> anyhow::Result<()> {
    let template = match args.template.as_str() {
        "quote" => glasscard::CardTemplate::Quote,
        "qa" => glasscard::CardTemplate::Qa,
        "image-text" => glasscard::CardTemplate::ImageText,
        other => anyhow::bail!("unknown template '{other}' (expected quote|qa|image-text)"),
    };
    println!("{}", glasscard::ai_prompt(template));
    Ok(())
}
