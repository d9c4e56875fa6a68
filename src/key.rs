use {
  super::*,
  bitcoin::{
    bech32::segwit,
    key::{Keypair, TapTweak, TweakedPublicKey, XOnlyPublicKey},
    PrivateKey,
  },
  secp256k1::{SecretKey, SECP256K1},
  snafu::ensure,
};

/// Signing key and the key-path-only taproot address it controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMaterial {
  pub address: String,
  pub internal_key: XOnlyPublicKey,
  pub output_key: TweakedPublicKey,
  pub private_key: PrivateKey,
}

impl KeyMaterial {
  /// Derive key material from a hex encoded secp256k1 secret key.
  ///
  /// The output key commits to an empty script tree, so the address can only
  /// be spent with a signature from `private_key`.
  pub fn derive(private_key: &str, chain: Chain) -> SnafuResult<Self> {
    ensure!(
      !private_key.is_empty(),
      error::MissingField {
        field: "privateKey"
      }
    );

    let bytes = hex::decode(private_key).snafu_context(error::InvalidKeyEncoding)?;

    let secret_key = SecretKey::from_slice(&bytes).snafu_context(error::InvalidPrivateKey)?;

    let keypair = Keypair::from_secret_key(SECP256K1, &secret_key);

    let (internal_key, _parity) = keypair.x_only_public_key();

    let (output_key, _parity) = internal_key.tap_tweak(SECP256K1, None);

    let address = segwit::encode(
      chain.hrp(),
      segwit::VERSION_1,
      &output_key.to_inner().serialize(),
    )
    .snafu_context(error::AddressEncoding)?;

    log::debug!("Derived {chain} taproot address {address}");

    Ok(Self {
      address,
      internal_key,
      output_key,
      private_key: PrivateKey::new(secret_key, chain.network()),
    })
  }
}
