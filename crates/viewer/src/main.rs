use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use graphview::layout::Position;
use graphview::{GraphView, GraphViewConfig, PageData};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod page;

/// Frames simulated while a scripted drag holds its node
const DRAG_FRAMES: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Html,
    Svg,
}

/// Lay out a search result graph and write it as a page or a bare SVG
#[derive(Debug, Parser)]
#[command(name = "scholarnet-viewer", version, about)]
struct Args {
    /// Page data JSON: nodes, links and searchHistory
    dataset: PathBuf,

    /// KDL config file
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Output file, stdout when omitted
    #[arg(long, short)]
    out: Option<PathBuf>,

    #[arg(long, short, value_enum, default_value = "html")]
    format: Format,

    /// Upper bound on simulated frames per settle
    #[arg(long, default_value_t = 1000)]
    max_ticks: usize,

    /// Query these results answer, recorded as the newest history entry
    #[arg(long, short)]
    query: Option<String>,

    /// Drag a node to a position before rendering
    #[arg(long, num_args = 3, value_names = ["ID", "X", "Y"], allow_negative_numbers = true)]
    drag: Vec<String>,

    /// Hover a node so the detail panel shows it
    #[arg(long, value_name = "ID")]
    hover: Option<String>,

    /// Expand the abstract of the hovered node
    #[arg(long)]
    show_abstract: bool,

    /// Print the detail page URL of a node
    #[arg(long, value_name = "ID")]
    open: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            config::parse_config(&content)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => GraphViewConfig::default(),
    };

    let json = std::fs::read_to_string(&args.dataset)
        .with_context(|| format!("failed to read dataset {}", args.dataset.display()))?;
    let mut data = PageData::from_json(&json).context("invalid page data")?;
    if let Some(query) = &args.query {
        data.record_query(query, config.history_slots);
    }
    let mut view = GraphView::new(&data, config).context("failed to build graph")?;

    view.run_until_settled(args.max_ticks);
    replay(&mut view, &args)?;

    let output = match args.format {
        Format::Html => page::render_page(&view).context("failed to render page")?,
        Format::Svg => view.render_svg().to_string(),
    };
    match &args.out {
        Some(path) => {
            std::fs::write(path, output)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "written");
        }
        None => print!("{output}"),
    }
    Ok(())
}

/// Apply the scripted interactions in the order a user would perform them
fn replay(view: &mut GraphView, args: &Args) -> Result<()> {
    if let [id, x, y] = args.drag.as_slice() {
        let index = lookup(view, id)?;
        let x: f64 = x.parse().with_context(|| format!("invalid x `{x}`"))?;
        let y: f64 = y.parse().with_context(|| format!("invalid y `{y}`"))?;
        view.drag_started(index);
        view.drag_moved(Position::new(x, y));
        view.run_until_settled(DRAG_FRAMES);
        view.drag_ended();
        view.run_until_settled(args.max_ticks);
    }

    if let Some(id) = &args.hover {
        let index = lookup(view, id)?;
        view.node_entered(index);
    }

    if args.show_abstract && !view.toggle_abstract() {
        warn!("--show-abstract needs a hovered node");
    }

    if let Some(id) = &args.open {
        let index = lookup(view, id)?;
        if let Some(link) = view.node_clicked(index) {
            eprintln!("{link}");
        }
    }
    Ok(())
}

fn lookup(view: &GraphView, id: &str) -> Result<usize> {
    match view.index_of(id) {
        Some(index) => Ok(index),
        None => bail!("no node with id `{id}`"),
    }
}
