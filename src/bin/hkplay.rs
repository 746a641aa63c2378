use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "hkplay", version)]
struct Cli {
    /// Log playback decisions (state changes, skipped lines and effects) at debug level.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the timed-effect stream as JSON.
    Effects(EffectsArgs),
    /// Print the narration timeline.
    Narrate(InputArgs),
    /// Play the stream against the in-memory renderer and print the final scene summary.
    Play(InputArgs),
}

#[derive(Parser, Debug)]
struct InputArgs {
    /// Input step log.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Optional playback config JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct EffectsArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Effects(args) => cmd_effects(args),
        Command::Narrate(args) => cmd_narrate(args),
        Command::Play(args) => cmd_play(args),
    }
}

fn load(args: &InputArgs) -> anyhow::Result<(hkplay::PlaybackConfig, hkplay::Playback)> {
    let config = match &args.config {
        Some(path) => hkplay::PlaybackConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => hkplay::PlaybackConfig::default(),
    };
    let log = hkplay::StepLog::from_path(&args.in_path)?;
    let playback = hkplay::build_playback(&log, config.clone())?;
    if playback.stats.skipped_lines > 0 || playback.stats.skipped_effects > 0 {
        eprintln!(
            "skipped {} line(s) and {} effect(s)",
            playback.stats.skipped_lines, playback.stats.skipped_effects
        );
    }
    Ok((config, playback))
}

fn cmd_effects(args: EffectsArgs) -> anyhow::Result<()> {
    let (_, playback) = load(&args.input)?;

    match &args.out {
        Some(out) => {
            ensure_parent_dir(out)?;
            let f = File::create(out).with_context(|| format!("create '{}'", out.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer_pretty(&mut w, &playback.effects)
                .with_context(|| "serialize effects")?;
            w.flush()?;
            eprintln!("wrote {}", out.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut w = stdout.lock();
            serde_json::to_writer_pretty(&mut w, &playback.effects)
                .with_context(|| "serialize effects")?;
            writeln!(w)?;
        }
    }
    Ok(())
}

fn cmd_narrate(args: InputArgs) -> anyhow::Result<()> {
    let (_, playback) = load(&args)?;
    for e in &playback.effects {
        match &e.effect {
            hkplay::EffectKind::SetNarrationText { text } => {
                println!("{:>8.2}  {text}", e.fire_at());
            }
            hkplay::EffectKind::SetPhaseText { text } => {
                println!("{:>8.2}  [{text}]", e.fire_at());
            }
            _ => {}
        }
    }
    Ok(())
}

fn cmd_play(args: InputArgs) -> anyhow::Result<()> {
    let (config, playback) = load(&args)?;
    let mut renderer = hkplay::RecordingRenderer::new(hkplay::EdgeStyle {
        color: config.edge_color,
        width: config.edge_width,
        z_order: 0,
    });
    let report = hkplay::Player::new(&config).play(playback.effects, &mut renderer);

    println!(
        "nodes: {}  edges: {}",
        renderer.nodes().len(),
        renderer.edges().len()
    );
    println!(
        "applied: {}  skipped: {}  end: {:.2}",
        report.applied, report.skipped, report.end_time
    );
    println!("phase: {}", renderer.text(hkplay::TextSlot::Phase));
    println!("narration: {}", renderer.text(hkplay::TextSlot::Narration));
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}
