mod platform;

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use colored::{Color, Colorize};
use env_logger::fmt::Formatter;
use log::{debug, error};
use model::Report;

/// Prints the operating system and CPU architecture this binary was built for.
#[derive(Parser, Debug)]
#[command(version, about, max_term_width = 80)]
struct Cli {}

fn main() {
    init_logger();

    let _cli = Cli::parse();

    let config = Config::load();

    if let Err(e) = run(config) {
        error!("{e:?}");
        std::process::exit(1);
    }
}

/// Initialize the logger.
fn init_logger() {
    let format = |buf: &mut Formatter, record: &log::Record| {
        use log::Level::*;
        let level = {
            let color = match record.level() {
                Error => Color::Red,
                Warn => Color::Yellow,
                Info => Color::Blue,
                Debug => Color::Green,
                Trace => Color::Magenta,
            };

            let text = match record.level() {
                Warn => String::from("warning"),
                _ => record.level().to_string(),
            };

            text.to_lowercase().color(color).bold()
        };

        writeln!(buf, "{level}{} {}", ":".bold(), record.args())
    };

    env_logger::builder()
        .format(format)
        .filter_level(log::LevelFilter::Warn)
        .init();
}

/// Application config.
///
/// Everything is fixed at build time; nothing is read at runtime.
struct Config {
    /// The product identifier leading the report line.
    product_tag: &'static str,
}

// Defines `PRODUCT_TAG`, checked by the build script to be a single line.
include!(concat!(env!("OUT_DIR"), "/product_tag.rs"));

impl Config {
    /// Loads config captured from the build environment.
    ///
    /// Set `HELLO_PRODUCT_TAG` when building to change the product tag.
    fn load() -> Self {
        Self {
            product_tag: PRODUCT_TAG,
        }
    }
}

/// Print the report line.
fn run(config: Config) -> anyhow::Result<()> {
    let platform = platform::current();
    debug!("built for {} - {}", platform.os, platform.arch);

    let report = Report::new(config.product_tag, platform);

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{report}").context("failed to write report to stdout")?;
    stdout.flush().context("failed to flush stdout")?;

    Ok(())
}
