//! RSA key pairs and RSA-OAEP encryption
//!
//! OAEP uses SHA-256 for both the label hash and MGF1, with an empty label.
//! Decryption failures collapse into a single `CipherError::Decryption` so a
//! caller (or attacker) cannot tell a bad length from a bad padding check.

use std::fmt;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use rsa::traits::PublicKeyParts;
use rsa::{BigUint, Oaep, RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;

use crate::error::{CipherError, CipherResult};

/// Default modulus size in bits
pub const DEFAULT_MODULUS_BITS: usize = 2048;

/// Default public exponent (F4)
pub const DEFAULT_PUBLIC_EXPONENT: u64 = 65537;

/// Smallest modulus accepted by key generation
pub const MIN_MODULUS_BITS: usize = 2048;

/// Largest modulus accepted by key generation
pub const MAX_MODULUS_BITS: usize = 4096;

/// SHA-256 output length, used for OAEP capacity
const OAEP_HASH_LEN: usize = 32;

/// An RSA private key together with its public half
pub struct RsaKeyPair {
    private_key: RsaPrivateKey,
    public_key: RsaPublicKey,
}

impl RsaKeyPair {
    /// The public key
    pub fn public_key(&self) -> &RsaPublicKey {
        &self.public_key
    }

    /// The private key
    pub fn private_key(&self) -> &RsaPrivateKey {
        &self.private_key
    }

    /// Modulus size in bits
    pub fn modulus_bits(&self) -> usize {
        self.public_key.n().bits()
    }

    /// Modulus size in bytes; also the RSA-OAEP ciphertext length
    pub fn modulus_len(&self) -> usize {
        self.public_key.size()
    }
}

// Private key components must never reach logs
impl fmt::Debug for RsaKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaKeyPair")
            .field("modulus_bits", &self.modulus_bits())
            .field("public_exponent", &self.public_key.e().to_string())
            .finish_non_exhaustive()
    }
}

/// Generate an RSA key pair using the OS random source
pub fn generate_key_pair(modulus_bits: usize, public_exponent: u64) -> CipherResult<RsaKeyPair> {
    generate_key_pair_with_rng(&mut OsRng, modulus_bits, public_exponent)
}

/// Generate an RSA key pair from the given random source
///
/// Rejects moduli outside 2048..=4096 bits and exponents that are even or
/// below 3. Prime generation can take a noticeable amount of CPU time.
pub fn generate_key_pair_with_rng<R>(
    rng: &mut R,
    modulus_bits: usize,
    public_exponent: u64,
) -> CipherResult<RsaKeyPair>
where
    R: CryptoRng + RngCore,
{
    if modulus_bits < MIN_MODULUS_BITS {
        return Err(CipherError::KeyGeneration(format!(
            "{}-bit modulus is below the {}-bit minimum",
            modulus_bits, MIN_MODULUS_BITS
        )));
    }
    if modulus_bits > MAX_MODULUS_BITS {
        return Err(CipherError::KeyGeneration(format!(
            "{}-bit modulus exceeds the {}-bit maximum",
            modulus_bits, MAX_MODULUS_BITS
        )));
    }
    if public_exponent < 3 || public_exponent % 2 == 0 {
        return Err(CipherError::KeyGeneration(format!(
            "public exponent {} must be odd and at least 3",
            public_exponent
        )));
    }

    probe_entropy(rng)?;

    tracing::debug!(modulus_bits, public_exponent, "generating RSA key pair");
    let exponent = BigUint::from(public_exponent);
    let private_key = RsaPrivateKey::new_with_exp(rng, modulus_bits, &exponent)
        .map_err(|e| CipherError::KeyGeneration(e.to_string()))?;
    let public_key = RsaPublicKey::from(&private_key);

    Ok(RsaKeyPair {
        private_key,
        public_key,
    })
}

/// Largest plaintext RSA-OAEP-SHA256 can carry under this key
///
/// `k - 2*hLen - 2`; 190 bytes for a 2048-bit modulus.
pub fn max_plaintext_len(public_key: &RsaPublicKey) -> usize {
    public_key.size().saturating_sub(2 * OAEP_HASH_LEN + 2)
}

/// Encrypt with RSA-OAEP (SHA-256, MGF1-SHA-256, empty label)
pub fn encrypt(public_key: &RsaPublicKey, plaintext: &[u8]) -> CipherResult<Vec<u8>> {
    encrypt_with_rng(&mut OsRng, public_key, plaintext)
}

/// Encrypt with RSA-OAEP, drawing the padding seed from the given source
pub fn encrypt_with_rng<R>(
    rng: &mut R,
    public_key: &RsaPublicKey,
    plaintext: &[u8],
) -> CipherResult<Vec<u8>>
where
    R: CryptoRng + RngCore,
{
    let max = max_plaintext_len(public_key);
    if plaintext.len() > max {
        return Err(CipherError::PlaintextTooLarge {
            len: plaintext.len(),
            max,
        });
    }

    probe_entropy(rng)?;

    let ciphertext = public_key
        .encrypt(rng, Oaep::new::<Sha256>(), plaintext)
        .map_err(|e| match e {
            rsa::Error::MessageTooLong => CipherError::PlaintextTooLarge {
                len: plaintext.len(),
                max,
            },
            other => CipherError::InvalidKey(other.to_string()),
        })?;

    tracing::debug!(
        plaintext_len = plaintext.len(),
        ciphertext_len = ciphertext.len(),
        "RSA-OAEP encrypt"
    );
    Ok(ciphertext)
}

/// Decrypt RSA-OAEP ciphertext
///
/// Any failure, whether a wrong length, an out-of-range value or a failed
/// padding check, yields the same `CipherError::Decryption`.
pub fn decrypt(private_key: &RsaPrivateKey, ciphertext: &[u8]) -> CipherResult<Vec<u8>> {
    decrypt_with_rng(&mut OsRng, private_key, ciphertext)
}

/// Decrypt RSA-OAEP ciphertext, using the given source for blinding
pub fn decrypt_with_rng<R>(
    rng: &mut R,
    private_key: &RsaPrivateKey,
    ciphertext: &[u8],
) -> CipherResult<Vec<u8>>
where
    R: CryptoRng + RngCore,
{
    probe_entropy(rng)?;

    if ciphertext.len() != private_key.size() {
        tracing::debug!("RSA-OAEP decrypt rejected");
        return Err(CipherError::Decryption);
    }

    let plaintext = private_key
        .decrypt_blinded(rng, Oaep::new::<Sha256>(), ciphertext)
        .map_err(|_| {
            tracing::debug!("RSA-OAEP decrypt rejected");
            CipherError::Decryption
        })?;

    tracing::debug!(plaintext_len = plaintext.len(), "RSA-OAEP decrypt");
    Ok(plaintext)
}

/// Confirm the random source answers before handing it to code that
/// cannot report a failure
fn probe_entropy<R>(rng: &mut R) -> CipherResult<()>
where
    R: CryptoRng + RngCore,
{
    let mut probe = [0u8; 16];
    rng.try_fill_bytes(&mut probe)
        .map_err(|e| CipherError::EntropySource(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::test_support::{shared_rsa_pair as shared_pair, DeniedRng};

    const SECRET_MESSAGE: &[u8] = b"Hello, this is a secret message!";

    #[test]
    fn test_generated_pair_parameters() {
        let pair = shared_pair();
        assert_eq!(pair.modulus_bits(), 2048);
        assert_eq!(pair.modulus_len(), 256);
        assert_eq!(pair.public_key().e(), &BigUint::from(65537u64));
        assert_eq!(pair.public_key(), &RsaPublicKey::from(pair.private_key()));
    }

    #[test]
    fn test_secret_message_round_trip() {
        let pair = shared_pair();
        let ciphertext = encrypt(pair.public_key(), SECRET_MESSAGE).unwrap();
        assert_eq!(ciphertext.len(), 256);

        let decrypted = decrypt(pair.private_key(), &ciphertext).unwrap();
        assert_eq!(decrypted.as_slice(), SECRET_MESSAGE);
    }

    #[test]
    fn test_round_trip_across_lengths() {
        let pair = shared_pair();
        for len in [0usize, 1, 16, 32, 64, 100, 189, 190] {
            let plaintext: Vec<u8> = (0..len).map(|i| (i * 7) as u8).collect();
            let ciphertext = encrypt(pair.public_key(), &plaintext).unwrap();
            assert_eq!(ciphertext.len(), pair.modulus_len());
            let decrypted = decrypt(pair.private_key(), &ciphertext).unwrap();
            assert_eq!(decrypted, plaintext, "round trip failed at length {}", len);
        }
    }

    #[test]
    fn test_oaep_is_randomized() {
        let pair = shared_pair();
        let ct1 = encrypt(pair.public_key(), SECRET_MESSAGE).unwrap();
        let ct2 = encrypt(pair.public_key(), SECRET_MESSAGE).unwrap();
        assert_ne!(ct1, ct2);
    }

    #[test]
    fn test_capacity_boundary() {
        let pair = shared_pair();
        assert_eq!(max_plaintext_len(pair.public_key()), 190);

        assert!(encrypt(pair.public_key(), &[0x41; 190]).is_ok());

        let err = encrypt(pair.public_key(), &[0x41; 191]).unwrap_err();
        assert!(matches!(
            err,
            CipherError::PlaintextTooLarge { len: 191, max: 190 }
        ));
    }

    #[test]
    fn test_bit_flip_fails_with_generic_error() {
        let pair = shared_pair();
        let mut ciphertext = encrypt(pair.public_key(), SECRET_MESSAGE).unwrap();
        ciphertext[100] ^= 0x01;

        let err = decrypt(pair.private_key(), &ciphertext).unwrap_err();
        assert!(err.is_decryption());
    }

    #[test]
    fn test_length_mismatch_is_indistinguishable() {
        let pair = shared_pair();
        let ciphertext = encrypt(pair.public_key(), SECRET_MESSAGE).unwrap();

        let truncated = decrypt(pair.private_key(), &ciphertext[..255]).unwrap_err();
        let mut flipped = ciphertext.clone();
        flipped[0] ^= 0x01;
        let tampered = decrypt(pair.private_key(), &flipped).unwrap_err();

        assert!(truncated.is_decryption());
        assert!(tampered.is_decryption());
        assert_eq!(truncated.to_string(), tampered.to_string());
    }

    #[test]
    fn test_wrong_key_fails() {
        let pair = shared_pair();
        let other = generate_key_pair(2048, 65537).unwrap();
        let ciphertext = encrypt(pair.public_key(), SECRET_MESSAGE).unwrap();

        let err = decrypt(other.private_key(), &ciphertext).unwrap_err();
        assert!(err.is_decryption());
    }

    #[test]
    fn test_small_modulus_rejected() {
        let err = generate_key_pair(1024, 65537).unwrap_err();
        match err {
            CipherError::KeyGeneration(msg) => assert!(msg.contains("1024")),
            other => panic!("expected KeyGeneration, got {:?}", other),
        }
    }

    #[test]
    fn test_oversized_modulus_rejected() {
        assert!(matches!(
            generate_key_pair(8192, 65537),
            Err(CipherError::KeyGeneration(_))
        ));
    }

    #[test]
    fn test_bad_exponents_rejected() {
        for exponent in [0u64, 1, 2, 65536] {
            assert!(matches!(
                generate_key_pair(2048, exponent),
                Err(CipherError::KeyGeneration(_))
            ));
        }
    }

    #[test]
    fn test_denied_entropy_source() {
        assert!(matches!(
            generate_key_pair_with_rng(&mut DeniedRng, 2048, 65537),
            Err(CipherError::EntropySource(_))
        ));

        let pair = shared_pair();
        assert!(matches!(
            encrypt_with_rng(&mut DeniedRng, pair.public_key(), SECRET_MESSAGE),
            Err(CipherError::EntropySource(_))
        ));
    }

    #[test]
    fn test_denied_entropy_source_on_decrypt() {
        let pair = shared_pair();
        let ciphertext = encrypt(pair.public_key(), SECRET_MESSAGE).unwrap();

        match decrypt_with_rng(&mut DeniedRng, pair.private_key(), &ciphertext) {
            Err(CipherError::EntropySource(msg)) => assert!(msg.contains("denied")),
            other => panic!("expected EntropySource, got {:?}", other),
        }
    }

    #[test]
    fn test_debug_hides_private_key() {
        let debug = format!("{:?}", shared_pair());
        assert!(debug.contains("modulus_bits: 2048"));
        assert!(debug.contains("65537"));
        assert!(!debug.contains("primes"));
    }
}
