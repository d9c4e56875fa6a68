use super::*;

#[derive(Debug, Parser)]
pub(crate) struct Etch {
  #[arg(long, help = "Do not load the etching logo.")]
  no_logo: bool,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct Output {
  pub chain: Chain,
  pub destination: Option<String>,
  pub etching: Etching,
  pub logo: Option<LogoInfo>,
  pub rune: SpacedRune,
  pub supply: Option<u128>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct LogoInfo {
  pub content_type: String,
  pub size: usize,
}

impl Etch {
  pub(crate) fn run(self, settings: Settings) -> SubcommandResult {
    let etching = settings.config().etching()?;

    let rune = SpacedRune {
      rune: etching.rune.ok_or_else(|| anyhow!("etching is missing rune"))?,
      spacers: etching.spacers.unwrap_or_default(),
    };

    log::info!("Validated etching of rune {rune}");

    let logo = if self.no_logo {
      None
    } else {
      settings.config().logo().map(|logo| LogoInfo {
        size: logo.data.len(),
        content_type: logo.content_type,
      })
    };

    let destination = if settings.has_private_key()? {
      Some(settings.key_material()?.address)
    } else {
      None
    };

    Ok(Some(Box::new(Output {
      chain: settings.chain(),
      destination,
      etching,
      logo,
      rune,
      supply: etching.supply(),
    })))
  }
}
