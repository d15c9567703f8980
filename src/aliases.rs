// src/aliases.rs
//! Secret-holding types built on secure-gate
//!
//! Key material lives in these wrappers so it is zeroized on drop.

use secure_gate::fixed_alias;

// Fixed-size secrets
fixed_alias!(DerivedKey32, 32); // SHA-256 of the passphrase, used as the AES-256 key
