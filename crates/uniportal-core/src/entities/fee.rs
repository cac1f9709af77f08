use serde::{Deserialize, Serialize};

use crate::enums::ApprovalStatus;
use crate::errors::CoreError;
use crate::lenient;

/// A student-submitted payment awaiting admin review.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeeTransaction {
    #[serde(alias = "feeId", alias = "id", deserialize_with = "lenient::id")]
    pub fee_id: String,
    #[serde(alias = "studentId", deserialize_with = "lenient::id")]
    pub student_id: String,
    #[serde(default, alias = "studentName")]
    pub student_name: Option<String>,
    #[serde(
        default,
        alias = "academicYearId",
        deserialize_with = "lenient::opt_id"
    )]
    pub academic_year_id: Option<String>,
    #[serde(default, alias = "bankName")]
    pub bank_name: Option<String>,
    #[serde(
        default,
        alias = "transactionId",
        deserialize_with = "lenient::opt_id"
    )]
    pub transaction_id: Option<String>,
    #[serde(default, alias = "transactionDate")]
    pub transaction_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub amount: f64,
    #[serde(default)]
    pub status: ApprovalStatus,
    #[serde(default)]
    pub remarks: Option<String>,
}

impl FeeTransaction {
    /// Case-insensitive match on student id or name, used by the approval
    /// screen's search box.
    #[must_use]
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.student_id.to_lowercase().contains(&needle)
            || self
                .student_name
                .as_deref()
                .is_some_and(|name| name.to_lowercase().contains(&needle))
            || self
                .transaction_id
                .as_deref()
                .is_some_and(|txn| txn.to_lowercase().contains(&needle))
    }
}

/// Body of the fee-submission call on the finalize step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeeSubmission {
    pub student_id: String,
    pub academic_year_id: String,
    pub bank_name: String,
    pub transaction_id: String,
    pub transaction_date: String,
    pub amount: f64,
}

/// Admin decision on a fee transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeeDecision {
    pub status: ApprovalStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl FeeDecision {
    pub fn approve(remarks: Option<String>) -> Self {
        Self {
            status: ApprovalStatus::Approved,
            remarks,
        }
    }

    pub fn reject(remarks: Option<String>) -> Self {
        Self {
            status: ApprovalStatus::Rejected,
            remarks,
        }
    }

    /// A rejection must say why.
    pub fn validate(&self) -> Result<(), CoreError> {
        match self.status {
            ApprovalStatus::Pending => Err(CoreError::invalid(
                "status",
                "a decision must approve or reject",
            )),
            ApprovalStatus::Rejected
                if self.remarks.as_deref().is_none_or(|r| r.trim().is_empty()) =>
            {
                Err(CoreError::MissingFields {
                    fields: vec!["remarks".into()],
                })
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_parses_string_amount() {
        let json = r#"{"id": 9, "studentId": "S1", "amount": "45000.50", "status": "pending"}"#;
        let txn: FeeTransaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn.fee_id, "9");
        assert_eq!(txn.amount, 45000.5);
        assert_eq!(txn.status, ApprovalStatus::Pending);
    }

    #[test]
    fn search_matches_id_name_and_reference() {
        let txn = FeeTransaction {
            fee_id: "1".into(),
            student_id: "S2101".into(),
            student_name: Some("Asha Rao".into()),
            transaction_id: Some("UTR998".into()),
            ..Default::default()
        };
        assert!(txn.matches_search("s21"));
        assert!(txn.matches_search("ASHA"));
        assert!(txn.matches_search("utr9"));
        assert!(txn.matches_search(""));
        assert!(!txn.matches_search("ravi"));
    }

    #[test]
    fn rejection_needs_remarks() {
        assert!(FeeDecision::reject(None).validate().is_err());
        assert!(FeeDecision::reject(Some("  ".into())).validate().is_err());
        assert!(FeeDecision::reject(Some("amount mismatch".into())).validate().is_ok());
        assert!(FeeDecision::approve(None).validate().is_ok());
    }
}
