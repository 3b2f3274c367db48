// LiteDuco Miner - Free and Open Source Software Statement
//
// This project, liteduco-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/ducos1.rs
// Version: 1.0.0
//
// This file implements the DUCO-S1 hash used by Duino-Coin, located in the core
// subdirectory of the LiteDuco miner source tree. A DUCO-S1 hash is the SHA-1
// digest of the job seed followed by the decimal nonce, both as ASCII.
//
// Tree Location:
// - src/core/ducos1.rs (DUCO-S1 algorithm implementation)
// - Depends on: sha1 crate, hex

use sha1::{Digest, Sha1};

/// Length of a raw SHA-1 digest
pub const DIGEST_LEN: usize = 20;

/// Compute the raw DUCO-S1 digest for `seed ++ decimal(nonce)`
pub fn ducos1_digest(seed: &[u8], nonce: u64) -> [u8; DIGEST_LEN] {
    let mut hasher = Sha1::new();
    hasher.update(seed);
    hasher.update(nonce.to_string().as_bytes());
    hasher.finalize().into()
}

/// Compute the lowercase hex DUCO-S1 hash for `seed ++ decimal(nonce)`
pub fn ducos1_hash_hex(seed: &str, nonce: u64) -> String {
    hex::encode(ducos1_digest(seed.as_bytes(), nonce))
}

/// Decode a pool-supplied hex digest, `None` unless it is exactly 20 bytes
pub fn decode_digest(expected_hash: &str) -> Option<[u8; DIGEST_LEN]> {
    let mut digest = [0u8; DIGEST_LEN];
    hex::decode_to_slice(expected_hash, &mut digest).ok()?;
    Some(digest)
}

/// Write the decimal form of `n` into the tail of `buf`, returning the digits
pub fn write_decimal(n: u64, buf: &mut [u8; 20]) -> &[u8] {
    let mut pos = buf.len();
    let mut n = n;
    loop {
        pos -= 1;
        buf[pos] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    &buf[pos..]
}

// Changelog:
// - v1.0.0 (2026-10-19): Replaced the SHA3x triple hash with DUCO-S1.
//   - ducos1_digest/ducos1_hash_hex hash the ASCII seed and decimal nonce.
//   - decode_digest validates the pool digest once per job.
//   - write_decimal formats nonces without allocating, for the midstate search.
