// Static Site Builder
//
// Purpose: render the page template with the CV data into a single HTML file
// Usage: cargo run --bin build_site
//        DATA_PATH=... TEMPLATE_PATH=... OUTPUT_PATH=... cargo run --bin build_site

use anyhow::Context;
use portfolio_cv::{App, Page, SiteConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_cv=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SiteConfig::from_env();
    tracing::info!("Template: {}", config.template_path.display());
    tracing::info!("Output:   {}", config.output_path.display());

    let template = tokio::fs::read_to_string(&config.template_path)
        .await
        .with_context(|| format!("reading template {}", config.template_path.display()))?;
    let mut page = Page::from_template(template);
    tracing::info!("Template declares {} mount point(s)", page.mounts().len());

    let mut app = App::boot(&config).await;
    if app.store().is_none() {
        anyhow::bail!("CV data could not be loaded from {}", config.data_path.display());
    }
    let patches = app.render_page(&mut page);
    tracing::info!("Initial collapse pass: {} patch(es)", patches.len());

    if let Some(parent) = config.output_path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    tokio::fs::write(&config.output_path, page.into_html())
        .await
        .with_context(|| format!("writing {}", config.output_path.display()))?;

    tracing::info!("Wrote {}", config.output_path.display());
    Ok(())
}
