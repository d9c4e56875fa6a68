use {
  super::*,
  bitcoin::bech32::{hrp, Hrp},
  clap::ValueEnum,
};

#[derive(
  Default,
  ValueEnum,
  Copy,
  Clone,
  Debug,
  PartialEq,
  Eq,
  Hash,
  DeserializeFromStr,
  SerializeDisplay,
)]
pub enum Chain {
  #[default]
  #[value(alias("main"))]
  Mainnet,
  #[value(alias("test"))]
  Testnet,
  Signet,
  Regtest,
}

impl Chain {
  pub fn network(self) -> bitcoin::Network {
    match self {
      Self::Mainnet => bitcoin::Network::Bitcoin,
      Self::Testnet => bitcoin::Network::Testnet,
      Self::Signet => bitcoin::Network::Signet,
      Self::Regtest => bitcoin::Network::Regtest,
    }
  }

  /// Human-readable part of segwit addresses on this chain.
  pub fn hrp(self) -> Hrp {
    match self {
      Self::Mainnet => hrp::BC,
      Self::Testnet | Self::Signet => hrp::TB,
      Self::Regtest => hrp::BCRT,
    }
  }

  pub fn default_rpc_port(self) -> u16 {
    match self {
      Self::Mainnet => 8332,
      Self::Regtest => 18443,
      Self::Signet => 38332,
      Self::Testnet => 18332,
    }
  }
}

impl Display for Chain {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(
      f,
      "{}",
      match self {
        Self::Mainnet => "mainnet",
        Self::Regtest => "regtest",
        Self::Signet => "signet",
        Self::Testnet => "testnet",
      }
    )
  }
}

impl FromStr for Chain {
  type Err = SnafuError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "mainnet" | "main" => Ok(Self::Mainnet),
      "regtest" => Ok(Self::Regtest),
      "signet" => Ok(Self::Signet),
      "testnet" | "test" => Ok(Self::Testnet),
      _ => error::UnsupportedNetwork { network: s }.fail(),
    }
  }
}
