use anyhow::{Context, Result};
use buildstats::config::DashboardConfig;
use buildstats::control::Button;
use buildstats::controller::ToggleController;
use buildstats::storage;
use buildstats::viz::svg::SvgBackend;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "buildstats",
    version,
    about = "Render ranked per-chroot build charts for package-build dashboards"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the ranked chroot chart to SVG (optionally toggling it).
    Render(RenderArgs),
    /// Print the family color resolved for each label.
    Classify(ClassifyArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Dataset file (.json with [label, value] pairs, or .csv with a label,value header).
    #[arg(short, long)]
    input: PathBuf,
    /// Directory receiving <container>.svg.
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,
    /// Container id; becomes the output file stem.
    #[arg(short, long, default_value = "chroots")]
    container: String,
    /// JSON configuration file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Bars shown before expanding.
    #[arg(short, long, allow_negative_numbers = true)]
    limit: Option<i64>,
    /// Left padding in pixels (defaults to the widest label).
    #[arg(long)]
    padding_left: Option<u32>,
    /// Chart width in pixels.
    #[arg(long)]
    width: Option<u32>,
    /// Locale for value labels (e.g. en, de).
    #[arg(long)]
    locale: Option<String>,
    /// Activate the show-more/show-less toggle this many times after mounting.
    #[arg(long, default_value_t = 0)]
    toggles: u32,
    /// Also write the final chart configuration as JSON.
    #[arg(long)]
    emit_config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ClassifyArgs {
    /// JSON configuration file with a custom palette.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Labels to classify.
    #[arg(required = true)]
    labels: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Classify(args) => cmd_classify(args),
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<DashboardConfig> {
    match path {
        Some(p) => DashboardConfig::load(p),
        None => Ok(DashboardConfig::default()),
    }
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let mut cfg = load_config(args.config.as_ref())?;
    if let Some(limit) = args.limit {
        cfg.limit = limit;
    }
    if args.padding_left.is_some() {
        cfg.padding_left = args.padding_left;
    }
    if let Some(width) = args.width {
        cfg.width = width;
    }
    if let Some(locale) = args.locale {
        cfg.locale = locale;
    }

    let points = storage::load_dataset(&args.input)?;
    let backend = SvgBackend::new(args.out_dir.clone()).with_locale(cfg.locale.clone());
    let mut chart = ToggleController::mount(
        backend,
        cfg.renderer(),
        points,
        args.container.as_str(),
        Some(Button::default()),
        cfg.mount_options(),
    )
    .with_context(|| format!("rendering into {}", args.out_dir.display()))?;

    for _ in 0..args.toggles {
        if !chart.activate()? {
            eprintln!("Nothing to toggle: every entry is already shown");
            break;
        }
    }

    let view = chart.current_view();
    match chart.handle() {
        Some(handle) => eprintln!(
            "Wrote {} bars ({:?}) to {}",
            view.len(),
            chart.mode(),
            handle.path().display()
        ),
        None => eprintln!("Empty dataset, no chart written"),
    }
    if let Some(button) = chart.control().filter(|b| b.click_target().is_some()) {
        eprintln!("Toggle: {}", button.text());
    }

    if let Some(path) = args.emit_config.as_ref() {
        if chart.handle().is_none() {
            eprintln!("No chart rendered, skipping {}", path.display());
            return Ok(());
        }
        let config = chart
            .renderer()
            .config(&view, chart.container(), chart.options().padding_left);
        storage::save_config_json(&config, path)?;
        eprintln!("Saved chart config to {}", path.display());
    }
    Ok(())
}

fn cmd_classify(args: ClassifyArgs) -> Result<()> {
    let palette = load_config(args.config.as_ref())?.palette();
    for label in &args.labels {
        println!("{}\t{}", label, palette.classify(Some(label)));
    }
    Ok(())
}
