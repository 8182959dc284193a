mod app;
mod assistant;
mod config;
mod controller;
mod event;
mod session;
mod theme;
mod ui;

use app::HospitalApp;
use assistant::ReplyScheduler;
use clap::Parser;
use config::AppConfig;
use controller::RootController;
use eframe::egui;
use std::path::PathBuf;
use std::sync::mpsc;
use theme::Theme;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "hospital-assistant", version, about = "Hospital AI Assistant desktop mock-up")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Delay before the simulated assistant reply
    #[arg(long)]
    reply_delay_ms: Option<u64>,

    /// Patient selected at startup
    #[arg(long)]
    patient: Option<String>,

    /// Start in production mode instead of local testing
    #[arg(long)]
    production: bool,
}

impl Cli {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(delay) = self.reply_delay_ms {
            config.assistant.reply_delay_ms = delay;
        }
        if let Some(patient) = &self.patient {
            config.session.initial_patient = patient.clone();
        }
        if self.production {
            config.session.local_mode = false;
        }
    }
}

fn init_tracing(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("hospital_assistant={level}").into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let (mut config, warnings) = AppConfig::resolve(cli.config.as_deref())?;
    cli.apply(&mut config);

    init_tracing(&config.logging.level);
    for warning in warnings {
        tracing::warn!("config: {warning}");
    }
    tracing::info!(
        patient = %config.session.initial_patient,
        local_mode = config.session.local_mode,
        reply_delay_ms = config.assistant.reply_delay_ms,
        "starting Hospital AI Assistant v{}",
        env!("CARGO_PKG_VERSION")
    );

    let (tx, rx) = mpsc::channel();
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .thread_name("hospital-assistant-runtime")
        .build()?;

    let replies = ReplyScheduler::new(
        runtime.handle().clone(),
        tx,
        config.assistant.reply_delay(),
        config.assistant.reply_text.clone(),
    );
    let controller = RootController::new(
        rx,
        replies,
        config.session.initial_patient.clone(),
        config.session.local_mode,
    );
    let theme = Theme::default();
    let window = &config.window;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Hospital AI Assistant")
            .with_inner_size([window.width, window.height])
            .with_min_inner_size([window.min_width, window.min_height]),
        ..Default::default()
    };

    eframe::run_native(
        "Hospital AI Assistant",
        native_options,
        Box::new(move |creation_context| {
            theme.apply_visuals(&creation_context.egui_ctx);
            Ok(Box::new(HospitalApp::new(controller, theme)))
        }),
    )?;

    drop(runtime);
    tracing::info!("shutdown complete");
    Ok(())
}
