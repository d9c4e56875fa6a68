use {super::*, snafu::ensure, std::io::Read};

#[derive(Debug, PartialEq, Clone)]
pub struct Logo {
  pub content_type: String,
  pub data: Vec<u8>,
}

impl Logo {
  pub const MAX_SIZE: usize = 400_000;

  const SNIFF_LEN: usize = 512;

  #[rustfmt::skip]
  const SIGNATURES: &'static [(usize, &'static [u8], &'static str)] = &[
    (0, b"\x89PNG\r\n\x1a\n", "image/png"),
    (0, b"\xff\xd8\xff", "image/jpeg"),
    (0, b"GIF87a", "image/gif"),
    (0, b"GIF89a", "image/gif"),
    (4, b"ftypavif", "image/avif"),
    (8, b"WEBP", "image/webp"),
  ];

  pub fn load(path: &Path) -> SnafuResult<Self> {
    let mut data = Vec::new();

    File::open(path)
      .snafu_context(error::Io { path })?
      .take(Self::MAX_SIZE as u64 + 1)
      .read_to_end(&mut data)
      .snafu_context(error::Io { path })?;

    ensure!(
      data.len() <= Self::MAX_SIZE,
      error::LogoTooLarge {
        max: Self::MAX_SIZE,
        path
      }
    );

    let content_type = Self::content_type(path, &data);

    log::info!(
      "Loaded {} byte logo `{}` with content type {content_type}",
      data.len(),
      path.display(),
    );

    Ok(Self { content_type, data })
  }

  /// Sniff the content type from the leading bytes, falling back to the file
  /// extension.
  fn content_type(path: &Path, data: &[u8]) -> String {
    let head = &data[..data.len().min(Self::SNIFF_LEN)];

    for &(offset, signature, content_type) in Self::SIGNATURES {
      if head.get(offset..offset + signature.len()) != Some(signature) {
        continue;
      }

      if offset == 8 && !head.starts_with(b"RIFF") {
        continue;
      }

      return content_type.into();
    }

    if let Ok(text) = std::str::from_utf8(head) {
      let text = text.trim_start();
      if text.starts_with("<svg") || (text.starts_with("<?xml") && text.contains("<svg")) {
        return "image/svg+xml".into();
      }
    }

    mime_guess::from_path(path)
      .first()
      .map(|mime| mime.essence_str().to_string())
      .unwrap_or_else(|| "application/octet-stream".into())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[track_caller]
  fn case(path: &str, data: &[u8], expected: &str) {
    assert_eq!(Logo::content_type(Path::new(path), data), expected);
  }

  #[test]
  fn sniffed_content_types() {
    case("logo", PNG, "image/png");
    case("logo", b"\xff\xd8\xff\xe0\x00\x10JFIF", "image/jpeg");
    case("logo", b"GIF89a\x01\x00", "image/gif");
    case("logo", b"GIF87a\x01\x00", "image/gif");
    case("logo", b"RIFF\x24\x00\x00\x00WEBPVP8 ", "image/webp");
    case("logo", b"\x00\x00\x00\x1cftypavif", "image/avif");
    case("logo", b"  <svg xmlns=\"http://www.w3.org/2000/svg\"/>", "image/svg+xml");
    case(
      "logo",
      b"<?xml version=\"1.0\"?>\n<svg xmlns=\"http://www.w3.org/2000/svg\"/>",
      "image/svg+xml",
    );
  }

  #[test]
  fn content_beats_extension() {
    case("logo.jpg", PNG, "image/png");
  }

  #[test]
  fn webp_requires_riff_header() {
    case("logo", b"XXXX\x24\x00\x00\x00WEBPVP8 ", "application/octet-stream");
  }

  #[test]
  fn extension_fallback() {
    case("logo.png", b"not really a png", "image/png");
    case("logo.txt", b"hello", "text/plain");
    case("logo", b"hello", "application/octet-stream");
  }

  #[test]
  fn signature_must_be_within_sniffed_prefix() {
    case("logo", b"\x89PNG", "application/octet-stream");
  }

  #[test]
  fn load() {
    let tempdir = TempDir::new().unwrap();
    let path = tempdir.path().join("logo");
    fs::write(&path, PNG).unwrap();

    assert_eq!(
      Logo::load(&path).unwrap(),
      Logo {
        content_type: "image/png".into(),
        data: PNG.into(),
      }
    );
  }

  #[test]
  fn load_at_max_size() {
    let tempdir = TempDir::new().unwrap();
    let path = tempdir.path().join("logo.png");
    fs::write(&path, vec![0; Logo::MAX_SIZE]).unwrap();

    assert_eq!(Logo::load(&path).unwrap().data.len(), Logo::MAX_SIZE);
  }

  #[test]
  fn load_oversized_file() {
    let tempdir = TempDir::new().unwrap();
    let path = tempdir.path().join("logo.png");
    fs::write(&path, vec![0; Logo::MAX_SIZE + 1]).unwrap();

    assert_matches!(
      Logo::load(&path),
      Err(SnafuError::LogoTooLarge { max: Logo::MAX_SIZE, .. })
    );
  }

  #[test]
  fn load_missing_file() {
    assert_matches!(
      Logo::load(Path::new("/does/not/exist.png")),
      Err(SnafuError::Io { path, .. }) if path == Path::new("/does/not/exist.png")
    );
  }
}
