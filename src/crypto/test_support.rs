//! Shared fixtures for the crypto tests

use std::sync::OnceLock;

use rand::{CryptoRng, RngCore};

use super::asymmetric::{generate_key_pair, RsaKeyPair};

/// One 2048-bit key pair for the whole test binary; prime generation is
/// slow in debug builds
pub fn shared_rsa_pair() -> &'static RsaKeyPair {
    static PAIR: OnceLock<RsaKeyPair> = OnceLock::new();
    PAIR.get_or_init(|| generate_key_pair(2048, 65537).unwrap())
}

/// A random source that refuses every request, like a sandbox that denies
/// access to the OS generator
pub struct DeniedRng;

impl RngCore for DeniedRng {
    fn next_u32(&mut self) -> u32 {
        panic!("DeniedRng::next_u32 called after a failed probe")
    }

    fn next_u64(&mut self) -> u64 {
        panic!("DeniedRng::next_u64 called after a failed probe")
    }

    fn fill_bytes(&mut self, _dest: &mut [u8]) {
        panic!("DeniedRng::fill_bytes called after a failed probe")
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
        Err(rand::Error::new(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "getrandom denied by sandbox",
        )))
    }
}

impl CryptoRng for DeniedRng {}
