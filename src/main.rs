// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{self, Flags};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()?;

    let mut args = pico_args::Arguments::from_env();
    let dismiss_ms: Option<u64> = args.opt_value_from_str("--dismiss-ms")?;
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir")?;

    // Toast timers run here; iced keeps its own executor for the UI.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .build()?;

    app::run(Flags {
        runtime: runtime.handle().clone(),
        dismiss_ms,
        config_dir,
    })?;

    Ok(())
}
