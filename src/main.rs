use clap::Parser;
use object_inspect::domain::model::{inspect_all, render_json, render_text};
use object_inspect::utils::logger;
use object_inspect::{CliConfig, OutputFormat};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 載入設定（日誌尚未初始化，錯誤直接輸出）
    let settings = match config.load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    };

    if settings.json_logs {
        logger::init_json_logger(settings.verbose);
    } else {
        logger::init_cli_logger(settings.verbose);
    }

    tracing::info!("Inspecting {} values", settings.values.len());
    tracing::debug!("Resolved settings: {:?}", settings);

    let reports = inspect_all(&settings.values, settings.default_value.as_ref());
    let rejected = reports.iter().filter(|r| r.error.is_some()).count();
    if rejected > 0 {
        tracing::warn!("{} values were null and rejected by the array check", rejected);
    }

    match settings.format {
        OutputFormat::Text => print!("{}", render_text(&reports)),
        OutputFormat::Json => println!("{}", render_json(&reports)?),
    }

    Ok(())
}
