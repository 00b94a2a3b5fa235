// SPDX-License-Identifier: MPL-2.0
use scale_panel::app::{self, Flags};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const HELP: &str = "\
scale_panel - in-game character scale panel

USAGE:
  scale_panel [OPTIONS]

OPTIONS:
  --lang <LOCALE>        UI language (pt-BR, en-US)
  --config-dir <DIR>     Directory holding settings.toml
  --host-url <URL>       Base URL for applyScale/closeUI requests
  -h, --help             Print this help

Host commands are read from stdin, one JSON object per line.
";

fn main() -> iced::Result {
    let filter = EnvFilter::from_default_env().add_directive(
        "scale_panel=info"
            .parse()
            .unwrap_or_else(|_| LevelFilter::INFO.into()),
    );
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: opt_value(&mut args, "--lang"),
        config_dir: opt_value(&mut args, "--config-dir"),
        host_url: opt_value(&mut args, "--host-url"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unknown arguments");
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting scale panel");
    app::run(flags)
}

fn opt_value(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(key, %err, "invalid argument");
            None
        }
    }
}
