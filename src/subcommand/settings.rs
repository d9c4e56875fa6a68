use super::*;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct Output {
  pub auto_speed: bool,
  pub chain: Chain,
  pub fee_rate: Option<FeeRate>,
  pub local_rpc_url: String,
  pub rpc_url: Option<String>,
  pub utxo_amount: u64,
  pub wallet_name: Option<String>,
}

pub(crate) fn run(settings: Settings) -> SubcommandResult {
  Ok(Some(Box::new(Output {
    auto_speed: settings.auto_speed(),
    chain: settings.chain(),
    fee_rate: settings.fee_rate()?,
    local_rpc_url: settings.local_rpc_url(),
    rpc_url: settings.rpc_url().map(str::to_string),
    utxo_amount: settings.utxo_amount().to_sat(),
    wallet_name: settings.wallet_name().map(str::to_string),
  })))
}
