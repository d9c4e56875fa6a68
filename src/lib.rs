#![allow(clippy::result_large_err)]
#![deny(
  clippy::cast_lossless,
  clippy::cast_possible_truncation,
  clippy::cast_possible_wrap,
  clippy::cast_sign_loss
)]

use {
  self::{
    arguments::Arguments,
    error::{ResultExt, SnafuError},
    options::Options,
    settings::Settings,
    subcommand::{OutputFormat, Subcommand, SubcommandResult},
  },
  anyhow::{anyhow, Context, Error},
  bitcoin::Amount,
  clap::{ArgGroup, Parser},
  ordinals::{Etching, RuneId, SpacedRune, Terms},
  serde::{Deserialize, Serialize},
  serde_with::{DeserializeFromStr, SerializeDisplay},
  snafu::{Backtrace, ErrorCompat, Snafu},
  std::{
    backtrace::BacktraceStatus,
    env,
    ffi::OsString,
    fmt::{self, Display, Formatter},
    fs::File,
    io,
    path::{Path, PathBuf},
    process,
    str::FromStr,
  },
};

pub use self::{
  chain::Chain,
  config::{Config, EtchingConfig, MintConfig},
  fee_rate::FeeRate,
  key::KeyMaterial,
  logo::Logo,
  mint_request::MintRequest,
};


#[cfg(test)]
use self::test::*;

pub mod arguments;
pub mod chain;
pub mod config;
pub mod error;
mod fee_rate;
pub mod key;
pub mod logo;
mod mint_request;
pub mod options;
pub mod settings;
pub mod subcommand;

type Result<T = (), E = Error> = std::result::Result<T, E>;
pub type SnafuResult<T = (), E = SnafuError> = std::result::Result<T, E>;

const DEFAULT_CONFIG_FILE: &str = "runecraft.yaml";

fn default<T: Default>() -> T {
  Default::default()
}

pub fn main() {
  env_logger::init();

  let args = Arguments::parse();

  let format = args.options.format;

  match args.run() {
    Err(err) => {
      eprintln!("error: {err}");

      if let SnafuError::Anyhow { err } = err {
        for (i, err) in err.chain().skip(1).enumerate() {
          if i == 0 {
            eprintln!();
            eprintln!("because:");
          }

          eprintln!("- {err}");
        }

        if env::var_os("RUST_BACKTRACE")
          .map(|val| val == "1")
          .unwrap_or_default()
        {
          eprintln!("{}", err.backtrace());
        }
      } else {
        for (i, err) in err.iter_chain().skip(1).enumerate() {
          if i == 0 {
            eprintln!();
            eprintln!("because:");
          }

          eprintln!("- {err}");
        }

        if let Some(backtrace) = err.backtrace() {
          if backtrace.status() == BacktraceStatus::Captured {
            eprintln!("backtrace:");
            eprintln!("{backtrace}");
          }
        }
      }

      process::exit(1);
    }
    Ok(output) => {
      if let Some(output) = output {
        output.print(format.unwrap_or_default());
      }
    }
  }
}
