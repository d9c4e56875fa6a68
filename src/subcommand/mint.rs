use super::*;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct Output {
  pub chain: Chain,
  pub count: u64,
  pub destination: Option<String>,
  pub rune_id: RuneId,
}

pub(crate) fn run(settings: Settings) -> SubcommandResult {
  let MintRequest { rune_id, count } = settings.config().mint()?;

  log::info!("Validated mint of {count} from rune {rune_id}");

  let destination = if settings.has_private_key()? {
    Some(settings.key_material()?.address)
  } else {
    None
  };

  Ok(Some(Box::new(Output {
    chain: settings.chain(),
    count,
    destination,
    rune_id,
  })))
}
