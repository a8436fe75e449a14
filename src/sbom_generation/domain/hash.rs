use crate::shared::error::SbomError;
use crate::shared::Result;
use std::fmt;
use std::str::FromStr;

/// Hash algorithms accepted by the CycloneDX 1.3 schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha256,
    Sha384,
    Sha512,
    Sha3_256,
    Sha3_384,
    Sha3_512,
}

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 8] = [
        HashAlgorithm::Md5,
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
        HashAlgorithm::Sha3_256,
        HashAlgorithm::Sha3_384,
        HashAlgorithm::Sha3_512,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "MD5",
            HashAlgorithm::Sha1 => "SHA-1",
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha384 => "SHA-384",
            HashAlgorithm::Sha512 => "SHA-512",
            HashAlgorithm::Sha3_256 => "SHA3-256",
            HashAlgorithm::Sha3_384 => "SHA3-384",
            HashAlgorithm::Sha3_512 => "SHA3-512",
        }
    }

    /// Length of the hex digest in characters
    fn hex_len(&self) -> usize {
        match self {
            HashAlgorithm::Md5 => 32,
            HashAlgorithm::Sha1 => 40,
            HashAlgorithm::Sha256 | HashAlgorithm::Sha3_256 => 64,
            HashAlgorithm::Sha384 | HashAlgorithm::Sha3_384 => 96,
            HashAlgorithm::Sha512 | HashAlgorithm::Sha3_512 => 128,
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = SbomError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        HashAlgorithm::ALL
            .into_iter()
            .find(|alg| alg.as_str() == s)
            .ok_or_else(|| {
                SbomError::validation(format!(
                    "Unsupported hash algorithm: {}. Supported: {}",
                    s,
                    HashAlgorithm::ALL.map(|alg| alg.as_str()).join(", ")
                ))
            })
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hash value object - algorithm plus lowercase hex digest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hash {
    algorithm: HashAlgorithm,
    content: String,
}

impl Hash {
    pub fn new(algorithm: HashAlgorithm, content: &str) -> Result<Self> {
        let content = content.to_ascii_lowercase();
        if content.len() != algorithm.hex_len() || !content.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(SbomError::validation(format!(
                "Hash content is not a valid {} hex digest",
                algorithm
            ))
            .into());
        }
        Ok(Self { algorithm, content })
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_algorithm_round_trip_names() {
        for alg in HashAlgorithm::ALL {
            assert_eq!(HashAlgorithm::from_str(alg.as_str()).unwrap(), alg);
        }
    }

    #[test]
    fn test_hash_algorithm_rejects_unknown() {
        let err = HashAlgorithm::from_str("CRC32").unwrap_err();
        assert!(err.to_string().contains("Unsupported hash algorithm"));
        assert!(err.to_string().contains("SHA-512"));
    }

    #[test]
    fn test_hash_new_lowercases() {
        let hash = Hash::new(HashAlgorithm::Sha1, &"AB".repeat(20)).unwrap();
        assert_eq!(hash.content(), "ab".repeat(20));
    }

    #[test]
    fn test_hash_new_rejects_wrong_length() {
        assert!(Hash::new(HashAlgorithm::Sha256, "abc").is_err());
    }

    #[test]
    fn test_hash_new_rejects_non_hex() {
        assert!(Hash::new(HashAlgorithm::Md5, &"zz".repeat(16)).is_err());
    }
}
