use {super::*, snafu::ensure};

#[derive(Deserialize, Default, PartialEq, Debug, Clone)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct MintConfig {
  #[serde(default, alias = "mintNum")]
  pub mint_count: u64,
  #[serde(default)]
  pub rune_id: String,
}

impl MintConfig {
  pub(crate) fn validate(&self) -> SnafuResult<MintRequest> {
    ensure!(
      !self.rune_id.is_empty(),
      error::MissingField {
        field: "mint.runeId"
      }
    );

    ensure!(
      self.mint_count != 0,
      error::MissingField {
        field: "mint.mintCount"
      }
    );

    let rune_id = self
      .rune_id
      .parse::<RuneId>()
      .snafu_context(error::InvalidRuneId {
        rune_id: &self.rune_id,
      })?;

    Ok(MintRequest {
      rune_id,
      count: self.mint_count,
    })
  }
}
