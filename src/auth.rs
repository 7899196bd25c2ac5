//! EC authentication hashing
//!
//! The daemon sends a 64-bit salt; the client answers with
//! `md5(hex(md5(password)) + hex(md5(SALTHEX)))` where SALTHEX is the salt
//! as 16 uppercase hex digits and the inner digests are concatenated as
//! lowercase hex strings.

use md5::{Digest, Md5};

/// Compute the salted password hash for the AUTH_PASSWD packet
pub fn hash_password(password: &str, salt: u64) -> [u8; 16] {
    let salt_hash = Md5::digest(format!("{:016X}", salt).as_bytes());
    let password_hash = Md5::digest(password.as_bytes());

    let mut hasher = Md5::new();
    hasher.update(hex::encode(password_hash).as_bytes());
    hasher.update(hex::encode(salt_hash).as_bytes());
    hasher.finalize().into()
}
