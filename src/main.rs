use std::fs::File;
use std::sync::Arc;

use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};

use mangarank::core::category::Category;
use mangarank::core::config::{self, CliOverrides, ConfigOrigin};
use mangarank::core::selection::{RouteHistory, SelectionContext, SharedSelection};
use mangarank::core::state::App;
use mangarank::report;
use mangarank::source::{HttpRankingSource, RankingSource};

#[derive(Parser)]
#[command(name = "mangarank", about = "Top, favourite and newest manga at a glance")]
struct Args {
    /// Category shown first
    #[arg(short, long, value_enum)]
    category: Option<Category>,

    /// Base URL of the manga API
    #[arg(long)]
    base_url: Option<String>,

    /// Print the ranking to stdout instead of starting the TUI
    #[arg(long)]
    plain: bool,

    /// With --plain: open the item at this rank (1-based) and print its route
    #[arg(long, requires = "plain")]
    open: Option<usize>,

    /// With --plain: print the ranking as JSON
    #[arg(long, requires = "plain", conflicts_with = "open")]
    json: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let (file_config, config_origin) = config::load_config().map_err(std::io::Error::other)?;
    let cli = CliOverrides {
        category: args.category,
        base_url: args.base_url.clone(),
    };
    let resolved = config::resolve(&file_config, &cli).map_err(std::io::Error::other)?;

    // Initialize file logger - the TUI owns stdout
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    match &config_origin {
        ConfigOrigin::Defaults(_) => log::warn!("{config_origin}"),
        _ => log::info!("{config_origin}"),
    }
    log::info!(
        "mangarank starting: base_url={}, category={}",
        resolved.base_url,
        resolved.default_category
    );

    let source: Arc<dyn RankingSource> =
        Arc::new(HttpRankingSource::new(resolved.base_url.clone(), resolved.timeout));

    if !args.plain {
        return mangarank::tui::run(&resolved, source);
    }

    let routes = Arc::new(RouteHistory::new());
    let selection = SelectionContext::new(Arc::new(SharedSelection::new()), routes.clone());
    let mut app = App::new(resolved.default_category, selection);
    report::fetch_all(&mut app, source.as_ref()).await;
    if args.json {
        if let Some(json) = report::render_json(&app) {
            println!("{}", json.map_err(std::io::Error::other)?);
        }
    } else {
        print!("{}", report::render_plain(&app));
    }

    if let Some(message) = app.error_message() {
        return Err(std::io::Error::other(message));
    }

    if let Some(rank) = args.open {
        let item = rank
            .checked_sub(1)
            .and_then(|index| app.displayed_list().get(index))
            .ok_or_else(|| std::io::Error::other(format!("no item at rank {rank}")))?;
        app.select_item(item);
        if let Some(route) = routes.current() {
            println!("→ {route}");
        }
    }
    Ok(())
}
