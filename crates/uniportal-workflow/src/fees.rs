//! Fee approval page (admin).

use serde::Serialize;
use uniportal_core::entities::{FeeDecision, FeeTransaction};
use uniportal_core::enums::{ApprovalStatus, Role};

use crate::error::PortalError;
use crate::portal::Portal;

#[derive(Debug, Clone, Default, Serialize)]
pub struct FeeApproval {
    pub transactions: Vec<FeeTransaction>,
}

impl FeeApproval {
    /// Load transactions, filtered server-side by `status` when given.
    pub async fn load(
        &mut self,
        portal: &Portal,
        status: Option<ApprovalStatus>,
    ) -> Result<&[FeeTransaction], PortalError> {
        let session = portal.authorize(&[Role::Admin])?;
        self.transactions = portal
            .client
            .list_fee_transactions(&session, status)
            .await?;
        Ok(&self.transactions)
    }

    /// Client-side search by student id, name or bank transaction id.
    pub fn search<'a>(&'a self, needle: &'a str) -> impl Iterator<Item = &'a FeeTransaction> + 'a {
        self.transactions
            .iter()
            .filter(move |t| t.matches_search(needle))
    }

    pub async fn approve(
        &mut self,
        portal: &Portal,
        fee_id: &str,
        remarks: Option<String>,
    ) -> Result<String, PortalError> {
        self.decide(portal, fee_id, FeeDecision::approve(remarks))
            .await
    }

    /// Reject a transaction. Remarks are required.
    pub async fn reject(
        &mut self,
        portal: &Portal,
        fee_id: &str,
        remarks: Option<String>,
    ) -> Result<String, PortalError> {
        self.decide(portal, fee_id, FeeDecision::reject(remarks))
            .await
    }

    async fn decide(
        &mut self,
        portal: &Portal,
        fee_id: &str,
        decision: FeeDecision,
    ) -> Result<String, PortalError> {
        let session = portal.authorize(&[Role::Admin])?;
        decision.validate()?;
        if let Some(txn) = self.transactions.iter().find(|t| t.fee_id == fee_id)
            && !txn.status.can_transition_to(decision.status)
        {
            return Err(PortalError::validation(format!(
                "Transaction {fee_id} is already {}",
                txn.status
            )));
        }

        let ack = portal
            .client
            .decide_fee_transaction(&session, fee_id, &decision)
            .await?;
        if let Some(txn) = self.transactions.iter_mut().find(|t| t.fee_id == fee_id) {
            txn.status = decision.status;
            txn.remarks.clone_from(&decision.remarks);
        }
        tracing::info!(fee_id, status = %decision.status, "fee decision recorded");
        Ok(ack.message_or(&format!("Transaction {}", decision.status.as_str().to_lowercase())))
    }
}
