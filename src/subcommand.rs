use {super::*, clap::ValueEnum};

pub mod address;
pub mod etch;
pub mod mint;
pub mod settings;

#[derive(Debug, Parser)]
pub(crate) enum Subcommand {
  #[command(about = "Derive the taproot address of the configured private key")]
  Address,
  #[command(about = "Validate the configured rune etching")]
  Etch(etch::Etch),
  #[command(about = "Validate the configured rune mint")]
  Mint,
  #[command(about = "Display resolved settings")]
  Settings,
}

impl Subcommand {
  pub(crate) fn run(self, settings: Settings) -> SubcommandResult {
    match self {
      Self::Address => address::run(settings),
      Self::Etch(etch) => etch.run(settings),
      Self::Mint => mint::run(settings),
      Self::Settings => settings::run(settings),
    }
  }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
  #[default]
  Json,
  Yaml,
  Minify,
}

pub trait Output: Send {
  fn print(&self, format: OutputFormat);
}

impl<T> Output for T
where
  T: Serialize + Send,
{
  fn print(&self, format: OutputFormat) {
    match format {
      OutputFormat::Json => serde_json::to_writer_pretty(io::stdout(), self).ok(),
      OutputFormat::Yaml => serde_yaml::to_writer(io::stdout(), self).ok(),
      OutputFormat::Minify => serde_json::to_writer(io::stdout(), self).ok(),
    };
    println!();
  }
}

pub(crate) type SubcommandResult = Result<Option<Box<dyn Output>>>;
