// ───── Crates ─────
use fern::colors::{Color, ColoredLevelConfig};

/// Sets up colored console logging for the agent.
///
/// The bridge app logs to a rotating file via `fern::log_file` because it
/// is a GUI app with no console of its own. This agent runs as a
/// background plugin with a visible host console, so it logs straight to
/// stdout using `fern`'s `colors` feature: green for info, yellow for
/// warning, red for error (spec §7).
pub fn setup_logging() {
    let colors = ColoredLevelConfig::new()
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
        .debug(Color::BrightBlack)
        .trace(Color::BrightBlack);

    let init_result = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{}[{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S%.3f]"),
                colors.color(record.level()),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stdout())
        .apply();

    if let Err(e) = init_result {
        eprintln!("Failed to initialize logging: {e}");
        return;
    }

    log::info!("-== Card session agent starting ==-");
}
