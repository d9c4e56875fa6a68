use super::*;

/// Fee rate in sats per virtual byte.
#[derive(Debug, PartialEq, Clone, Copy, DeserializeFromStr, SerializeDisplay)]
pub struct FeeRate(f64);

impl FromStr for FeeRate {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::try_from(f64::from_str(s)?)
  }
}

impl TryFrom<f64> for FeeRate {
  type Error = Error;

  fn try_from(rate: f64) -> Result<Self, Self::Error> {
    if rate.is_sign_negative() | rate.is_nan() | rate.is_infinite() {
      return Err(anyhow!("invalid fee rate: {rate}"));
    }
    Ok(Self(rate))
  }
}

impl Display for FeeRate {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl FeeRate {
  pub(crate) fn is_zero(self) -> bool {
    self.0 == 0.0
  }
}
