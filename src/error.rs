use super::*;

#[derive(Debug, Snafu)]
#[snafu(context(suffix(false)), visibility(pub(crate)))]
pub enum SnafuError {
  #[snafu(display("failed to encode taproot address"))]
  AddressEncoding {
    backtrace: Backtrace,
    source: bitcoin::bech32::segwit::EncodeError,
  },
  #[snafu(display("{err}"))]
  Anyhow { err: anyhow::Error },
  #[snafu(display("failed to parse config file `{}`", path.display()))]
  ConfigParse {
    backtrace: Backtrace,
    path: PathBuf,
    source: serde_yaml::Error,
  },
  #[snafu(display("environment variable `{variable}` not valid unicode: `{}`", value.to_string_lossy()))]
  EnvVarUnicode {
    backtrace: Backtrace,
    value: OsString,
    variable: String,
  },
  #[snafu(display(
    "divisibility {divisibility} must be equal to or less than {}",
    Etching::MAX_DIVISIBILITY
  ))]
  InvalidDivisibility { divisibility: u8 },
  #[snafu(display("private key is not valid hex"))]
  InvalidKeyEncoding {
    backtrace: Backtrace,
    source: hex::FromHexError,
  },
  #[snafu(display("private key is not a valid secp256k1 secret key"))]
  InvalidPrivateKey {
    backtrace: Backtrace,
    source: secp256k1::Error,
  },
  #[snafu(display("invalid rune ID `{rune_id}`"))]
  InvalidRuneId {
    rune_id: String,
    source: <RuneId as FromStr>::Err,
  },
  #[snafu(display("invalid rune name `{name}`"))]
  InvalidRuneName {
    name: String,
    source: <SpacedRune as FromStr>::Err,
  },
  #[snafu(display("symbol `{symbol}` must be a single character, found {count}"))]
  InvalidSymbol { count: usize, symbol: String },
  #[snafu(display("I/O error at `{}`", path.display()))]
  Io {
    backtrace: Backtrace,
    path: PathBuf,
    source: io::Error,
  },
  #[snafu(display("logo `{}` is larger than {max} bytes", path.display()))]
  LogoTooLarge { max: usize, path: PathBuf },
  #[snafu(display("`{section}` config is required"))]
  MissingConfig { section: &'static str },
  #[snafu(display("`{field}` is required"))]
  MissingField { field: &'static str },
  #[snafu(display("rune `{rune}` is reserved"))]
  ReservedRune { rune: SpacedRune },
  #[snafu(display("unsupported network `{network}`"))]
  UnsupportedNetwork { network: String },
}

impl From<Error> for SnafuError {
  fn from(err: Error) -> SnafuError {
    Self::Anyhow { err }
  }
}

/// `anyhow::Context::context` shadows `snafu::ResultExt::context`, so this
/// trait re-exposes the latter under a different name.
pub(crate) trait ResultExt<T, E>: Sized {
  fn snafu_context<C, E2>(self, context: C) -> Result<T, E2>
  where
    C: snafu::IntoError<E2, Source = E>,
    E2: std::error::Error + snafu::ErrorCompat;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E> {
  fn snafu_context<C, E2>(self, context: C) -> Result<T, E2>
  where
    C: snafu::IntoError<E2, Source = E>,
    E2: std::error::Error + snafu::ErrorCompat,
  {
    use snafu::ResultExt;
    self.context(context)
  }
}
