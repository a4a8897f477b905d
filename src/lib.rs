//! Pure Rust implementation of the secp256k1 elliptic curve and the
//! primitives built on it: keypair handling, ECDH shared secrets,
//! deterministic ECDSA signing per RFC 6979, verification, and public key
//! recovery. No native cryptographic backend is involved; all arithmetic
//! runs on arbitrary-precision integers.
//!
//! The library is purely computational: no I/O, no locks, no shared
//! mutable state. Keys, points and signatures are plain values and may be
//! used from multiple threads. The arithmetic is written for clarity and
//! is **not constant-time**; deployments facing timing adversaries should
//! substitute hardened scalar multiplication and inversion.
//!
//! ```rust
//! use secp256k1_pure::{generate_keypair, sign, verify, SignOptions, VerifyOptions};
//!
//! let keypair = generate_keypair();
//! let signature = sign(b"hello", &keypair, &SignOptions::default()).unwrap();
//! assert!(verify(&signature, b"hello", &keypair, &VerifyOptions::default()).unwrap());
//! ```

mod compressed_point;
mod curve;
mod ecdsa;
mod errors;
mod keypair;
mod point;
mod rfc6979;
mod signature;
mod traits;
mod uncompressed_point;

pub use compressed_point::*;
pub use curve::*;
pub use ecdsa::*;
pub use errors::*;
pub use keypair::*;
pub use point::*;
pub use rfc6979::*;
pub use signature::*;
pub use traits::*;
pub use uncompressed_point::*;
