use ankicard::{
    core::ClientConfig,
    gui::CardApp,
};
use eframe::egui;
use tracing::info;
use tracing_subscriber::{
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

fn main() -> eframe::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ankicard=info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::default();
    info!(endpoint = %config.endpoint, model = %config.model_name, "Starting ankicard");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size([460.0, 560.0])
            .with_min_inner_size([360.0, 420.0]),
        ..Default::default()
    };

    let app_name = config.window_title.clone();
    eframe::run_native(
        &app_name,
        options,
        Box::new(move |cc| Ok(Box::new(CardApp::new(cc, config)?))),
    )
}
