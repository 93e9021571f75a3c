use sha2::{Digest, Sha256};

pub fn compute_script_hash(source: &str) -> [u8; 32] {
    Sha256::digest(source.as_bytes()).into()
}

pub fn script_hash_hex(source: &str) -> String {
    digest_hex(compute_script_hash(source))
}

pub fn digest_hex(digest: [u8; 32]) -> String {
    hex::encode(digest)
}
