use super::*;

pub use self::{etching::EtchingConfig, mint::MintConfig};

mod etching;
mod mint;

/// Contents of a `runecraft.yaml` configuration file.
///
/// Every field is optional so that a partial file can be combined with
/// command line flags and environment variables by [`Settings`].
#[derive(Deserialize, Default, PartialEq, Debug, Clone)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Config {
  #[serde(default, alias = "isAutoSpeed")]
  pub auto_speed: bool,
  pub etching: Option<EtchingConfig>,
  pub fee_per_byte: Option<f64>,
  pub local_rpc_url: Option<String>,
  pub mint: Option<MintConfig>,
  pub network: Option<String>,
  pub private_key: Option<String>,
  pub rpc_url: Option<String>,
  pub utxo_amount: Option<u64>,
  pub wallet_name: Option<String>,
}

impl Config {
  pub fn load(path: &Path) -> SnafuResult<Self> {
    log::debug!("Loading configuration from `{}`", path.display());

    let file = File::open(path).snafu_context(error::Io { path })?;

    serde_yaml::from_reader(file).snafu_context(error::ConfigParse { path })
  }

  /// Validate the `etching` section into a protocol etching.
  pub fn etching(&self) -> SnafuResult<Etching> {
    let Some(etching) = &self.etching else {
      return error::MissingConfig { section: "etching" }.fail();
    };

    etching.validate()
  }

  /// Validate the `mint` section into a mint request.
  pub fn mint(&self) -> SnafuResult<MintRequest> {
    let Some(mint) = &self.mint else {
      return error::MissingConfig { section: "mint" }.fail();
    };

    mint.validate()
  }

  pub fn chain(&self) -> SnafuResult<Option<Chain>> {
    self.network.as_deref().map(str::parse).transpose()
  }

  pub fn key_material(&self, chain: Chain) -> SnafuResult<KeyMaterial> {
    KeyMaterial::derive(self.private_key.as_deref().unwrap_or_default(), chain)
  }

  /// Load the etching logo, if one is configured.
  ///
  /// A logo that cannot be read is reported as `None` and never fails the
  /// etching.
  pub fn logo(&self) -> Option<Logo> {
    let path = self.etching.as_ref()?.logo_path.as_ref()?;

    match Logo::load(path) {
      Ok(logo) => Some(logo),
      Err(err) => {
        log::warn!("Ignoring logo: {err}");
        None
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parse(yaml: &str) -> Config {
    serde_yaml::from_str(yaml).unwrap()
  }

  #[test]
  fn empty_config_is_default() {
    assert_eq!(parse("{}"), Config::default());
  }

  #[test]
  fn fields_are_camel_case() {
    pretty_assert_eq!(
      parse(
        "
network: regtest
privateKey: '0101'
walletName: alice
feePerByte: 12
utxoAmount: 546
autoSpeed: true
rpcUrl: https://example.com
localRpcUrl: http://127.0.0.1:18443
"
      ),
      Config {
        auto_speed: true,
        etching: None,
        fee_per_byte: Some(12.0),
        local_rpc_url: Some("http://127.0.0.1:18443".into()),
        mint: None,
        network: Some("regtest".into()),
        private_key: Some("0101".into()),
        rpc_url: Some("https://example.com".into()),
        utxo_amount: Some(546),
        wallet_name: Some("alice".into()),
      }
    );
  }

  #[test]
  fn legacy_auto_speed_alias() {
    assert!(parse("isAutoSpeed: true").auto_speed);
  }

  #[test]
  fn unknown_fields_are_rejected() {
    assert!(serde_yaml::from_str::<Config>("foo: bar").is_err());
    assert!(serde_yaml::from_str::<Config>("etching:\n  runeName: A\n  foo: 1").is_err());
  }

  #[test]
  fn json_is_accepted() {
    let config = parse(r#"{"network": "signet", "mint": {"runeId": "1:2", "mintCount": 3}}"#);
    assert_eq!(config.network.as_deref(), Some("signet"));
    assert_eq!(config.mint.unwrap().mint_count, 3);
  }

  #[test]
  fn missing_etching_section() {
    assert_matches!(
      Config::default().etching(),
      Err(SnafuError::MissingConfig { section: "etching" })
    );
  }

  #[test]
  fn missing_mint_section() {
    assert_matches!(
      Config::default().mint(),
      Err(SnafuError::MissingConfig { section: "mint" })
    );
  }

  #[test]
  fn etching_and_mint_are_independent() {
    let config = parse(
      "
etching:
  runeName: FOO
mint:
  runeId: 840000:1
  mintCount: 1
",
    );

    assert!(config.etching().is_ok());
    assert!(config.mint().is_ok());
  }

  #[test]
  fn chain() {
    assert_eq!(Config::default().chain().unwrap(), None);
    assert_eq!(
      parse("network: signet").chain().unwrap(),
      Some(Chain::Signet)
    );
    assert_matches!(
      parse("network: foonet").chain(),
      Err(SnafuError::UnsupportedNetwork { network }) if network == "foonet"
    );
  }

  #[test]
  fn key_material_requires_private_key() {
    assert_matches!(
      Config::default().key_material(Chain::Mainnet),
      Err(SnafuError::MissingField { field: "privateKey" })
    );
  }

  #[test]
  fn logo_is_none_without_logo_path() {
    assert_eq!(Config::default().logo(), None);
    assert_eq!(parse("etching:\n  runeName: FOO").logo(), None);
  }

  #[test]
  fn unreadable_logo_is_ignored() {
    let config = parse("etching:\n  runeName: FOO\n  logoPath: /does/not/exist.png");
    assert_eq!(config.logo(), None);
    assert!(config.etching().is_ok());
  }

  #[test]
  fn logo_is_loaded() {
    let tempdir = TempDir::new().unwrap();
    let path = tempdir.path().join("logo.png");
    fs::write(&path, PNG).unwrap();

    let config = Config {
      etching: Some(EtchingConfig {
        rune_name: "FOO".into(),
        logo_path: Some(path),
        ..default()
      }),
      ..default()
    };

    assert_eq!(
      config.logo(),
      Some(Logo {
        content_type: "image/png".into(),
        data: PNG.into(),
      })
    );
  }

  #[test]
  fn load_reports_path_on_missing_file() {
    let err = Config::load(Path::new("/does/not/exist.yaml")).unwrap_err();
    assert_matches!(err, SnafuError::Io { .. });
    assert_eq!(err.to_string(), "I/O error at `/does/not/exist.yaml`");
  }

  #[test]
  fn load_reports_parse_errors() {
    let tempdir = TempDir::new().unwrap();
    let path = tempdir.path().join("runecraft.yaml");
    fs::write(&path, "network: [").unwrap();
    assert_matches!(Config::load(&path), Err(SnafuError::ConfigParse { .. }));
  }

  #[test]
  fn example_config_file_is_valid() {
    let config = Config::load(Path::new("runecraft.yaml")).unwrap();
    assert!(config.etching().is_ok());
    assert!(config.mint().is_ok());
    assert_eq!(config.chain().unwrap(), Some(Chain::Regtest));
  }
}
