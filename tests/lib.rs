use {
  self::{command_builder::CommandBuilder, expected::Expected},
  executable_path::executable_path,
  ordinals::{Etching, RuneId, SpacedRune, Terms},
  pretty_assertions::assert_eq as pretty_assert_eq,
  regex::Regex,
  runecraft::Chain,
  serde::de::DeserializeOwned,
  std::{
    collections::BTreeMap,
    env,
    ffi::{OsStr, OsString},
    fs,
    path::Path,
    process::{Command, Stdio},
    str,
  },
  tempfile::TempDir,
};



const PRIVATE_KEY: &str = "0000000000000000000000000000000000000000000000000000000000000001";

const MAINNET_ADDRESS: &str = "bc1pmfr3p9j00pfxjh0zmgp99y8zftmd3s5pmedqhyptwy6lm87hf5sspknck9";

const REGTEST_ADDRESS: &str = "bcrt1pmfr3p9j00pfxjh0zmgp99y8zftmd3s5pmedqhyptwy6lm87hf5ssm803es";

const PNG: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\x0dIHDR\x00\x00\x00\x01\x00\x00\x00\x01";
