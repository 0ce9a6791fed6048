pub mod draft;
pub mod enums;
pub mod finance;
pub mod records;
pub mod time;

// Re-export the core types to provide a clean public API.
pub use draft::{EarningDraft, OrderDraft};
pub use enums::{OrderSource, PaymentGateway, PayoutStatus};
pub use finance::{Financials, derive};
pub use records::{OrderRecord, SellerEarning};
