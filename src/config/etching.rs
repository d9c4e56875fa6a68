use {super::*, snafu::ensure};

#[derive(Deserialize, Default, PartialEq, Debug, Clone)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct EtchingConfig {
  pub amount: Option<u64>,
  pub cap: Option<u64>,
  pub divisibility: Option<u8>,
  pub height_end: Option<u64>,
  pub height_offset_end: Option<u64>,
  pub height_offset_start: Option<u64>,
  pub height_start: Option<u64>,
  #[serde(alias = "logo")]
  pub logo_path: Option<PathBuf>,
  pub premine: Option<u64>,
  #[serde(default, alias = "rune")]
  pub rune_name: String,
  pub symbol: Option<String>,
}

impl EtchingConfig {
  pub(crate) fn validate(&self) -> SnafuResult<Etching> {
    ensure!(
      !self.rune_name.is_empty(),
      error::MissingField {
        field: "etching.runeName"
      }
    );

    let symbol = self.symbol.as_deref().map(Self::symbol).transpose()?;

    let spaced_rune = self
      .rune_name
      .parse::<SpacedRune>()
      .snafu_context(error::InvalidRuneName {
        name: &self.rune_name,
      })?;

    if let Some(divisibility) = self.divisibility {
      ensure!(
        divisibility <= Etching::MAX_DIVISIBILITY,
        error::InvalidDivisibility { divisibility }
      );
    }

    ensure!(
      !spaced_rune.rune.is_reserved(),
      error::ReservedRune { rune: spaced_rune }
    );

    Ok(Etching {
      divisibility: self.divisibility,
      premine: self.premine.map(u128::from),
      rune: Some(spaced_rune.rune),
      spacers: Some(spaced_rune.spacers),
      symbol,
      terms: self.terms(),
      ..default()
    })
  }

  fn symbol(symbol: &str) -> SnafuResult<char> {
    let mut chars = symbol.chars();

    match (chars.next(), chars.next()) {
      (Some(c), None) => Ok(c),
      _ => error::InvalidSymbol {
        count: symbol.chars().count(),
        symbol,
      }
      .fail(),
    }
  }

  /// Terms are only present if at least one of their fields is set.
  fn terms(&self) -> Option<Terms> {
    let any = self.amount.is_some()
      || self.cap.is_some()
      || self.height_start.is_some()
      || self.height_end.is_some()
      || self.height_offset_start.is_some()
      || self.height_offset_end.is_some();

    any.then(|| Terms {
      amount: self.amount.map(u128::from),
      cap: self.cap.map(u128::from),
      height: (self.height_start, self.height_end),
      offset: (self.height_offset_start, self.height_offset_end),
    })
  }
}
