use clap::Parser;
use croprec::DisplayMode;
use croprec::core::config::{self, CliOverrides};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "croprec", about = "Crop recommendations from your field data")]
struct Args {
    /// Base URL of the prediction backend (overrides CROP_API_URL)
    #[arg(short, long)]
    api_url: Option<String>,

    /// How results are shown: all crops with scores, or the top three
    #[arg(short, long, value_enum)]
    display: Option<DisplayMode>,

    /// Where to write the log file
    #[arg(long, default_value = "croprec.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // The terminal belongs to the TUI, so logs go to a file
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Ignoring config file: {}", e);
            config::CroprecConfig::default()
        }
    };
    let cli = CliOverrides {
        api_url: args.api_url,
        display_mode: args.display,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "croprec starting up: backend={}, display={:?}",
        resolved.api_base_url,
        resolved.display_mode
    );

    croprec::tui::run(resolved)
}
