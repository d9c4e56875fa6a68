use super::*;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct Output {
  pub address: String,
  pub chain: Chain,
  pub internal_key: String,
  pub output_key: String,
}

pub(crate) fn run(settings: Settings) -> SubcommandResult {
  let KeyMaterial {
    address,
    internal_key,
    output_key,
    ..
  } = settings.key_material()?;

  Ok(Some(Box::new(Output {
    address,
    chain: settings.chain(),
    internal_key: internal_key.to_string(),
    output_key: output_key.to_string(),
  })))
}
