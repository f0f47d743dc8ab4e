use std::{path::PathBuf, str::FromStr, sync::Arc};

use billed_front::{
    app::{AppContext, BillsEvent, Page, Router},
    config::BilledConfig,
    entities::{Route, Session, UiSurface, User},
    errors::InvalidJson,
    store::LocalBillsStore,
    util::BilledUtil,
};
use clap::Parser;
use fractic_server_error::ServerError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "billed")]
#[command(about = "Render Billed employee pages from a bills JSON file", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON array of bills, as returned by the store.
    #[arg(long)]
    bills: PathBuf,

    /// Configuration file; the bundled defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// `bills`, `new-bill`, `login`, `dashboard`, or a hash path.
    #[arg(long, default_value = "bills", value_parser = Route::from_str)]
    route: Route,

    #[arg(long, default_value = "employee@test.tld")]
    email: String,

    #[arg(long, default_value = "800")]
    modal_width: u32,

    /// Open the receipt modal for this URL after rendering the bills page.
    #[arg(long)]
    preview: Option<String>,

    /// Print the decorated bills as JSON instead of the page markup.
    #[arg(long)]
    json: bool,

    #[arg(long, value_parser = ["error", "warn", "info", "debug", "trace"], default_value = "warn")]
    log_level: String,
}

/// Writes everything the page would show to stdout.
struct StdoutUi {
    modal_width: u32,
}

impl UiSurface for StdoutUi {
    fn render_root(&self, markup: &str) {
        println!("{markup}");
    }

    fn modal_width(&self) -> u32 {
        self.modal_width
    }

    fn set_modal_body(&self, markup: &str) {
        println!("{markup}");
    }

    fn show_modal(&self) {
        tracing::debug!("modal shown");
    }

    fn reset_file_input(&self) {
        tracing::debug!("file input reset");
    }

    fn download_file(&self, url: &str, file_name: &str) {
        println!("download {url} as {file_name}");
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)))
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("billed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), ServerError> {
    let config = match &cli.config {
        Some(path) => BilledConfig::from_file(path).await?,
        None => BilledConfig::load_default()?,
    };
    if cli.json {
        let (bills, _) = BilledUtil::new(config).from_file(&cli.bills).await?;
        let json = serde_json::to_string_pretty(&bills)
            .map_err(|e| InvalidJson::with_debug("bills", &e))?;
        println!("{json}");
        return Ok(());
    }

    let store = LocalBillsStore::from_file(&cli.bills, &config.storage_base_url).await?;

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let ui = Arc::new(StdoutUi {
        modal_width: cli.modal_width,
    });
    let ctx = AppContext::new(ui, Arc::new(tx), config)
        .with_store(Arc::new(store))
        .with_session(Session::connected(User::employee(cli.email)));
    let router = Router::new(ctx);

    let page = router.navigate(cli.route).await?;
    if let (Page::Bills(container), Some(bill_url)) = (&page, cli.preview) {
        container.handle(BillsEvent::IconEye { bill_url }).await?;
    }

    // Follow navigation requested while handling the events above.
    while let Ok(route) = rx.try_recv() {
        router.navigate(route).await?;
    }
    Ok(())
}
