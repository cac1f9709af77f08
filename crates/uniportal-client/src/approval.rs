//! Fee transactions awaiting admin review.
//!
//! These routes authorize on the `Role` header alone.

use uniportal_core::entities::{FeeDecision, FeeTransaction, Session};
use uniportal_core::enums::ApprovalStatus;

use crate::{Ack, AuthScheme, Call, ClientError, PortalClient, seg};

impl PortalClient {
    /// `GET /api/approval/fee-transactions`, optionally filtered by status.
    pub async fn list_fee_transactions(
        &self,
        session: &Session,
        status: Option<ApprovalStatus>,
    ) -> Result<Vec<FeeTransaction>, ClientError> {
        let path = status.map_or_else(
            || "/api/approval/fee-transactions".to_string(),
            |s| format!("/api/approval/fee-transactions?status={}", seg(s.as_str())),
        );
        self.fetch_list(Call::get(path, AuthScheme::Role).by(session))
            .await
    }

    pub async fn decide_fee_transaction(
        &self,
        session: &Session,
        fee_id: &str,
        decision: &FeeDecision,
    ) -> Result<Ack, ClientError> {
        let call = Call::put(
            format!("/api/approval/fee-transactions/{}", seg(fee_id)),
            AuthScheme::Role,
        )
        .by(session);
        self.mutate(call, Some(decision)).await
    }
}
