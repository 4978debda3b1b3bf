use clap::Parser;
use equip_console::config::init_app_state;
use equip_console::service::{ListingPresenter, ListingView};
use equip_console::{cmd::*, config};

#[tokio::main]
async fn main() {
    // step1. parse cli
    let cli = EquipCli::parse();
    match cli.command {
        Commands::Run { config } => {
            // set config
            let config = config::parse_config(&config).await.unwrap();
            // error level
            let mut filter = tracing_subscriber::EnvFilter::from_default_env();
            // convert config
            if let Some(tracing) = &config.tracing {
                for x in tracing.filter.split(",") {
                    filter = filter.add_directive(x.parse().unwrap());
                }
            }
            // register
            tracing_subscriber::fmt().with_env_filter(filter).init();
            // init state
            let state = init_app_state(&config).unwrap();
            // step2. fetch the collection once and show the first page
            if let Err(e) = state.store.load().await {
                tracing::error!("initial load failed: {:?}", e);
            }
            let presenter = ListingPresenter::new(state.store.clone());
            match presenter.view().await {
                ListingView::Page { rows, total, page, size } => {
                    tracing::info!("{} assets, page {} ({} per page)", total, page, size);
                    for row in rows {
                        tracing::info!(
                            "{} | {} | {} | {} | {}",
                            row.row.label_id,
                            row.row.component,
                            row.row.equipment,
                            row.row.sector,
                            row.row.state_label
                        );
                    }
                }
                ListingView::Empty => tracing::info!("no equipment records"),
                ListingView::Failed(msg) => tracing::error!("{}", msg),
                ListingView::Loading => {}
            }
        }
    }
}
