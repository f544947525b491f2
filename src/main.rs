use layersync::cli::{CliArgs, OutputFormatter};
use layersync::config::SyncConfig;
use layersync::pipeline::run_sync;
use layersync::progress::LoggingHandler;
use layersync::util::logging::parse_level;
use layersync::VERSION;

use clap::Parser;
use std::env;
use tracing::{debug, error, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("layersync v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    std::process::exit(run(&args));
}

fn run(args: &CliArgs) -> i32 {
    let mut config = match SyncConfig::resolve(args.source.clone(), args.target.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return 2;
        }
    };
    config.dry_run = args.dry_run;

    if let Err(e) = config.validate() {
        error!("{}", e);
        return 2;
    }

    let report = match run_sync(&config, &LoggingHandler) {
        Ok(report) => report,
        Err(e) => {
            error!("sync failed: {}", e);
            return 1;
        }
    };

    let formatter = OutputFormatter::new(args.format.into());
    match formatter.format(&report) {
        Ok(text) => {
            print!("{}", text);
            if !text.ends_with('\n') {
                println!();
            }
            0
        }
        Err(e) => {
            error!("failed to format report: {:#}", e);
            1
        }
    }
}

fn init_logging_from_args(args: &CliArgs) {
    use std::sync::Once;
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let level = if let Some(level_str) = &args.log_level {
            parse_level(level_str)
        } else if args.verbose {
            Level::DEBUG
        } else if args.quiet {
            Level::ERROR
        } else {
            let level_str =
                env::var("LAYERSYNC_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
            parse_level(&level_str)
        };

        let mut filter = EnvFilter::from_default_env();

        if env::var("RUST_LOG").is_err() {
            filter = filter.add_directive(
                format!("layersync={}", level)
                    .parse()
                    .expect("level directive is valid"),
            );
        }

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    });
}
