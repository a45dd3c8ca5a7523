//! Static export of the site for hosting on a plain file server.
//!
//! ```text
//! zealous-export --output docs --static-dir static
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use zealous_core::routes::RouteTable;
use zealous_events::DisabledMailer;

use zealous_api::config::ServerConfig;
use zealous_api::export::export_site;
use zealous_api::router::build_app_router;
use zealous_api::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "zealous-export", version, about = "Render the site into a static HTML tree")]
struct Cli {
    /// Output directory for the generated site.
    #[arg(short, long, default_value = "docs")]
    output: PathBuf,

    /// Directory of static assets copied to `<output>/static`.
    #[arg(long, env = "STATIC_DIR", default_value = "static")]
    static_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    zealous_api::init_tracing();
    let cli = Cli::parse();

    let mut config = ServerConfig::from_env()?;
    config.static_dir = cli.static_dir.clone();

    let routes = RouteTable::site();
    let state = AppState::new(config, routes.clone(), Arc::new(DisabledMailer));
    let app = build_app_router(state);

    let summary = export_site(app, &routes, &cli.output, &cli.static_dir).await?;

    println!(
        "Static site generated in '{}': {} pages written, {} skipped",
        cli.output.display(),
        summary.written.len(),
        summary.skipped.len()
    );
    for skipped in &summary.skipped {
        println!("  skipped {}: {}", skipped.logical_path, skipped.reason);
    }

    if summary.skipped.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
