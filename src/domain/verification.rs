//! Proof-of-personhood records
//!
//! Field names are snake_case on the wire: they come straight from the
//! identity widget's success callback.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Success payload of the identity verification widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofResult {
    pub nullifier_hash: String,
    pub merkle_root: String,
    pub proof: String,
    pub verification_level: String,
}

/// The local user's verification, at most one per store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRecord {
    /// One hash per distinct verified identity
    pub nullifier_hash: String,
    pub merkle_root: String,
    pub proof: String,
    pub verification_level: String,
    pub verified_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub simulated: bool,
}

impl VerificationRecord {
    pub fn from_proof(proof: ProofResult, verified_at: DateTime<Utc>) -> Self {
        Self {
            nullifier_hash: proof.nullifier_hash,
            merkle_root: proof.merkle_root,
            proof: proof.proof,
            verification_level: proof.verification_level,
            verified_at,
            simulated: false,
        }
    }

    /// Stand-in record for demos without the identity widget
    pub fn simulated(now: DateTime<Utc>) -> Self {
        Self {
            nullifier_hash: format!("simulated_nullifier_{}", now.timestamp_millis()),
            merkle_root: "simulated_merkle_root".to_string(),
            proof: "simulated_proof_data".to_string(),
            verification_level: "orb".to_string(),
            verified_at: now,
            simulated: true,
        }
    }

    pub fn verifier_hash(&self) -> &str {
        &self.nullifier_hash
    }
}
