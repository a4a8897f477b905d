use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Secp256k1Error {
    #[error("secret key must be a 32-byte scalar in [1, n)")]
    InvalidSecretKey,
    #[error("public key bytes are not a valid SEC1 point")]
    InvalidPublicKey,
    #[error("x-coordinate has no matching y-coordinate on the curve")]
    InvalidYCoordinate,
    #[error("signature bytes match neither DER nor 65-byte compact form")]
    InvalidSignature,
    #[error("transport encoding did not decode")]
    InvalidEncoding,
}
