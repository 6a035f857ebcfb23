//! Receipt service: the two operations the HTTP layer calls.
//!
//! ```text
//! process_submission(raw, cancel)
//!   ├── cancelled? ──────────────────────► Cancelled
//!   ├── ingest(raw) ── error ── cancelled? ► Cancelled
//!   │                    └──────────────────► Validation / Parse
//!   ├── breakdown(receipt)
//!   └── store.save(points) ──────────────► id
//!
//! get_score(id)
//!   └── store.find_by_id(id) ────────────► points | NotFound
//! ```
//!
//! Cancellation is checked, never pre-empted. Once `save` starts the score
//! is stored and visible even if the caller has gone away.

use std::sync::Arc;

use tally_core::{breakdown, ingest, Points, RawSubmission};
use tally_store::ScoreRepository;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::error::{ServiceError, ServiceResult};

/// Parses, scores and stores receipts.
#[derive(Clone)]
pub struct ReceiptService {
    store: Arc<dyn ScoreRepository>,
}

impl ReceiptService {
    pub fn new(store: Arc<dyn ScoreRepository>) -> Self {
        ReceiptService { store }
    }

    /// Ingests a submission, scores it and stores the score.
    ///
    /// Returns the identifier the score can later be fetched with.
    pub fn process_submission(
        &self,
        raw: &RawSubmission,
        cancel: &CancellationToken,
    ) -> ServiceResult<String> {
        if cancel.is_cancelled() {
            return Err(ServiceError::Cancelled);
        }

        let receipt = match ingest(raw) {
            Ok(receipt) => receipt,
            Err(err) => {
                if cancel.is_cancelled() {
                    return Err(ServiceError::Cancelled);
                }
                warn!(error = %err, "Rejected receipt");
                return Err(err.into());
            }
        };

        let rule_points = breakdown(&receipt);
        debug!(retailer = %receipt.retailer, ?rule_points, "Scored receipt");

        let points = rule_points.total();
        let id = self.store.save(points);

        info!(id = %id, points, "Stored receipt score");
        Ok(id)
    }

    /// Points stored under `id`.
    pub fn get_score(&self, id: &str) -> ServiceResult<Points> {
        let result = self.store.find_by_id(id)?;
        Ok(result.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::{Field, ParseError, RawItem, ValidationError};
    use tally_store::{InMemoryScoreStore, StoreError};

    fn service() -> (ReceiptService, Arc<InMemoryScoreStore>) {
        let store = Arc::new(InMemoryScoreStore::new());
        (ReceiptService::new(store.clone()), store)
    }

    fn target() -> RawSubmission {
        RawSubmission {
            retailer: Some("Target".to_string()),
            purchase_date: Some("2022-01-01".to_string()),
            purchase_time: Some("13:01".to_string()),
            total: Some("35.35".to_string()),
            items: Some(vec![
                RawItem::new("Mountain Dew 12PK", "6.49"),
                RawItem::new("Emils Cheese Pizza", "12.25"),
                RawItem::new("Knorr Creamy Chicken", "1.26"),
                RawItem::new("Doritos Nacho Cheese", "3.35"),
                RawItem::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ]),
        }
    }

    #[test]
    fn test_process_then_get() {
        let (service, store) = service();
        let id = service
            .process_submission(&target(), &CancellationToken::new())
            .unwrap();

        assert_eq!(service.get_score(&id), Ok(28));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_missing_retailer() {
        let (service, store) = service();
        let raw = RawSubmission {
            retailer: None,
            ..target()
        };

        let err = service
            .process_submission(&raw, &CancellationToken::new())
            .unwrap_err();

        assert_eq!(
            err,
            ServiceError::Validation(ValidationError::Required {
                field: Field::Retailer
            })
        );
        assert_eq!(err.to_string(), "Field: Retailer, Error: required");
        assert!(store.is_empty());
    }

    #[test]
    fn test_unparseable_total() {
        let (service, store) = service();
        let raw = RawSubmission {
            total: Some("abcrf".to_string()),
            ..target()
        };

        assert_eq!(
            service.process_submission(&raw, &CancellationToken::new()),
            Err(ServiceError::Parse(ParseError::Currency("abcrf".to_string())))
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_cancelled_request_stores_nothing() {
        let (service, store) = service();
        let cancel = CancellationToken::new();
        cancel.cancel();

        assert_eq!(
            service.process_submission(&target(), &cancel),
            Err(ServiceError::Cancelled)
        );
        // invalid input on a cancelled request is still reported as cancelled
        assert_eq!(
            service.process_submission(&RawSubmission::default(), &cancel),
            Err(ServiceError::Cancelled)
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_unknown_id() {
        let (service, _) = service();
        assert_eq!(
            service.get_score("missing"),
            Err(ServiceError::NotFound(StoreError::not_found("missing")))
        );
    }
}
