//! # API Types
//!
//! Typed views of the records list endpoints return.
//!
//! The backend omits fields inconsistently across endpoints and API
//! versions, so everything beyond the identity of a record carries a
//! serde default.

use rolodex_types::Pagination;
use serde::Deserialize;

/// Lifecycle stage of a customer relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    /// Not yet converted.
    #[default]
    Lead,
    /// Paying customer.
    Active,
    /// Former customer.
    Churned,
}

/// A customer record as list endpoints return it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Customer {
    /// Record ID.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Company the contact belongs to.
    #[serde(default)]
    pub company: Option<String>,
    /// Relationship stage (defaults to lead).
    #[serde(default)]
    pub status: CustomerStatus,
}

/// Delivery state of a campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    /// Being edited, not yet scheduled.
    #[default]
    Draft,
    /// Scheduled for a future send.
    Scheduled,
    /// Currently sending.
    Active,
    /// Fully sent.
    Completed,
}

/// A campaign record as list endpoints return it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Campaign {
    /// Record ID.
    pub id: u64,
    /// Campaign name.
    pub name: String,
    /// Delivery state (defaults to draft).
    #[serde(default)]
    pub status: CampaignStatus,
    /// Number of recipients, when the backend reports it.
    #[serde(default)]
    pub recipients: Option<u32>,
}

/// One page of typed records plus whatever pagination the backend
/// attached to the response.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// The records on this page; empty when the payload carried none.
    pub items: Vec<T>,
    /// Pagination descriptor, if any recognized location held one.
    pub pagination: Option<Pagination>,
}

impl<T> Page<T> {
    /// Total number of pages, when the backend reported one.
    #[must_use]
    pub fn page_count(&self) -> Option<u32> {
        self.pagination.and_then(|p| p.pages)
    }

    /// True when this page holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_customer_minimal_payload_uses_defaults() {
        let customer: Customer =
            serde_json::from_value(json!({ "id": 7, "name": "Ada Lovelace" })).unwrap();

        assert_eq!(customer.id, 7);
        assert_eq!(customer.name, "Ada Lovelace");
        assert_eq!(customer.email, None);
        assert_eq!(customer.status, CustomerStatus::Lead);
    }

    #[test]
    fn test_customer_full_payload() {
        let customer: Customer = serde_json::from_value(json!({
            "id": 12,
            "name": "Grace Hopper",
            "email": "grace@example.com",
            "company": "Navy",
            "status": "active",
            "created_at": "2024-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(customer.email.as_deref(), Some("grace@example.com"));
        assert_eq!(customer.status, CustomerStatus::Active);
    }

    #[test]
    fn test_campaign_status_parses() {
        let campaign: Campaign = serde_json::from_value(json!({
            "id": 3,
            "name": "Spring launch",
            "status": "completed",
            "recipients": 1200
        }))
        .unwrap();

        assert_eq!(campaign.status, CampaignStatus::Completed);
        assert_eq!(campaign.recipients, Some(1200));
    }

    #[test]
    fn test_page_count_reads_through_pagination() {
        let page = Page {
            items: vec![1, 2, 3],
            pagination: Some(Pagination { pages: Some(5) }),
        };
        assert_eq!(page.page_count(), Some(5));
        assert!(!page.is_empty());

        let empty: Page<u32> = Page {
            items: Vec::new(),
            pagination: None,
        };
        assert_eq!(empty.page_count(), None);
        assert!(empty.is_empty());
    }
}
