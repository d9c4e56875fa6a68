use super::*;

/// Configuration merged from command line options, `RUNECRAFT_*` environment
/// variables, and the configuration file, in that order of precedence.
#[derive(Default, Debug, Clone)]
pub struct Settings {
  chain: Chain,
  config: Config,
  options: Options,
}

impl Settings {
  const DEFAULT_UTXO_AMOUNT: Amount = Amount::from_sat(330);

  pub(crate) fn load(options: Options) -> SnafuResult<Self> {
    let path = match &options.config {
      Some(path) => Some(path.clone()),
      None => match Self::env("CONFIG")? {
        Some(path) => Some(path.into()),
        None => Some(PathBuf::from(DEFAULT_CONFIG_FILE)).filter(|path| path.is_file()),
      },
    };

    let config = match path {
      Some(path) => Config::load(&path)?,
      None => {
        log::info!("No configuration file found, using defaults");
        Config::default()
      }
    };

    Self::new(options, config)
  }

  pub(crate) fn new(options: Options, config: Config) -> SnafuResult<Self> {
    let chain = match options
      .signet
      .then_some(Chain::Signet)
      .or(options.regtest.then_some(Chain::Regtest))
      .or(options.testnet.then_some(Chain::Testnet))
      .or(options.chain_argument)
    {
      Some(chain) => chain,
      None => match Self::env("CHAIN")? {
        Some(chain) => chain.parse()?,
        None => config.chain()?.unwrap_or_default(),
      },
    };

    Ok(Self {
      chain,
      config,
      options,
    })
  }

  pub(crate) fn chain(&self) -> Chain {
    self.chain
  }

  pub(crate) fn config(&self) -> &Config {
    &self.config
  }

  /// Explicit fee rate, if any.
  ///
  /// An unset or zero `feePerByte` means no fee rate was chosen, and is
  /// reported as `None` rather than as a zero fee rate.
  pub(crate) fn fee_rate(&self) -> Result<Option<FeeRate>> {
    let fee_rate = match self.options.fee_rate {
      Some(fee_rate) => Some(fee_rate),
      None => match Self::env("FEE_RATE")? {
        Some(fee_rate) => Some(
          fee_rate
            .parse::<FeeRate>()
            .context("failed to parse RUNECRAFT_FEE_RATE")?,
        ),
        None => self
          .config
          .fee_per_byte
          .map(FeeRate::try_from)
          .transpose()?,
      },
    };

    Ok(fee_rate.filter(|fee_rate| !fee_rate.is_zero()))
  }

  pub(crate) fn key_material(&self) -> SnafuResult<KeyMaterial> {
    match Self::env("PRIVATE_KEY")?.filter(|key| !key.is_empty()) {
      Some(private_key) => KeyMaterial::derive(&private_key, self.chain),
      None => self.config.key_material(self.chain),
    }
  }

  /// Whether a non-empty private key is configured. An empty key is treated
  /// as absent.
  pub(crate) fn has_private_key(&self) -> SnafuResult<bool> {
    Ok(
      Self::env("PRIVATE_KEY")?.is_some_and(|key| !key.is_empty())
        || self
          .config
          .private_key
          .as_deref()
          .is_some_and(|key| !key.is_empty()),
    )
  }

  pub(crate) fn utxo_amount(&self) -> Amount {
    self
      .config
      .utxo_amount
      .filter(|amount| *amount > 0)
      .map(Amount::from_sat)
      .unwrap_or(Self::DEFAULT_UTXO_AMOUNT)
  }

  pub(crate) fn auto_speed(&self) -> bool {
    self.config.auto_speed
  }

  pub(crate) fn wallet_name(&self) -> Option<&str> {
    self.config.wallet_name.as_deref()
  }

  pub(crate) fn rpc_url(&self) -> Option<&str> {
    self.config.rpc_url.as_deref()
  }

  pub(crate) fn local_rpc_url(&self) -> String {
    self
      .config
      .local_rpc_url
      .clone()
      .unwrap_or_else(|| format!("http://127.0.0.1:{}", self.chain.default_rpc_port()))
  }

  fn env(key: &str) -> SnafuResult<Option<String>> {
    let variable = format!("RUNECRAFT_{key}");

    match env::var(&variable) {
      Ok(value) => Ok(Some(value)),
      Err(env::VarError::NotPresent) => Ok(None),
      Err(env::VarError::NotUnicode(value)) => error::EnvVarUnicode { value, variable }.fail(),
    }
  }
}
