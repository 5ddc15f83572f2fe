// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{self, Flags};
use iced_toast::logging;

const HELP: &str = "\
iced_toast demo

USAGE:
  iced_toast [OPTIONS]

OPTIONS:
  --position <ANCHOR>   top-left, top-center, top-right,
                        bottom-left, bottom-center, bottom-right
  --max-toasts <N>      toasts visible at once
  --theme <MODE>        light, dark or system
  --config-dir <DIR>    directory holding toaster.toml
  --reduced-motion      disable enter/exit animations
  -v, --verbose         debug logging (RUST_LOG takes precedence)
  -h, --help            print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    logging::init(args.contains(["-v", "--verbose"]));

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let unused = args.finish();
    if !unused.is_empty() {
        tracing::warn!(?unused, "ignoring unknown arguments");
    }

    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        position: args.opt_value_from_str("--position")?,
        max_toasts: args.opt_value_from_str("--max-toasts")?,
        theme: args.opt_value_from_str("--theme")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        reduced_motion: args.contains("--reduced-motion"),
    })
}
