use xxhash_rust::xxh3::xxh3_64;

const HEX: &[u8] = b"0123456789abcdef";
const HASH_LEN: usize = 8;

/// Short hex digest of an artifact's content, used to fill the `[hash]`
/// placeholder in output filename templates.
pub fn content_hash(input: &[u8]) -> String {
  let hash = xxh3_64(input).to_be_bytes();

  let mut out = String::with_capacity(HASH_LEN);
  for byte in hash {
    out.push(HEX[(byte >> 4) as usize] as char);
    out.push(HEX[(byte & 0x0f) as usize] as char);
    if out.len() >= HASH_LEN {
      break;
    }
  }
  out.truncate(HASH_LEN);
  out
}

#[test]
fn test_content_hash() {
  let hash = content_hash(b"body { color: red }");

  assert_eq!(hash.len(), HASH_LEN);
  assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));

  assert_eq!(hash, content_hash(b"body { color: red }"));
  assert_ne!(hash, content_hash(b"body { color: blue }"));
}
