//! The local verification record

use chrono::Utc;

use super::AppStore;
use crate::domain::{ProofResult, ToastKind, VerificationRecord};
use crate::repository::StorageKey;

impl AppStore {
    /// Store the identity widget's success payload as the verification record
    pub async fn handle_verification(&self, proof: ProofResult) -> VerificationRecord {
        let record = VerificationRecord::from_proof(proof, Utc::now());
        self.set_verification(record.clone()).await;
        log::info!("Identity verified at level {}", record.verification_level);
        self.toasts.show(
            "Welcome to Backed! You are now verified as a real human.",
            ToastKind::Success,
        );
        record
    }

    /// Verify with a simulated record (demo mode without the widget)
    pub async fn simulate_verification(&self) -> VerificationRecord {
        let record = VerificationRecord::simulated(Utc::now());
        self.set_verification(record.clone()).await;
        log::info!("Simulated verification {}", record.nullifier_hash);
        self.toasts
            .show("Simulated verification successful! Welcome to Backed!", ToastKind::Success);
        record
    }

    pub async fn verification(&self) -> Option<VerificationRecord> {
        self.state.lock().await.verification.clone()
    }

    async fn set_verification(&self, record: VerificationRecord) {
        let mut state = self.state.lock().await;
        state.verification = Some(record);
        self.persist(&state, &[StorageKey::WorldId]);
    }
}
