//! Gobang GUI
//!
//! Pick the players in the Option menu, then start a match from the Game
//! menu. Manual players move by clicking the board.

use clap::Parser;
use gobang::config::Overrides;
use gobang::ui::GobangApp;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
#[command(version, about = "Gobang desktop game")]
struct Args {
    #[command(flatten)]
    overrides: Overrides,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    gobang::logging::init(args.log_level);

    let config = args.overrides.resolve()?;
    info!(?config, "starting GUI");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Gobang"),
        ..Default::default()
    };

    eframe::run_native(
        "Gobang",
        options,
        Box::new(move |cc| Ok(Box::new(GobangApp::new(cc, config)))),
    )
    .map_err(|err| anyhow::anyhow!("GUI failed: {err}"))
}
