//! Service layer between the HTTP routes and the domain crates.

pub mod receipt_service;

pub use receipt_service::ReceiptService;
