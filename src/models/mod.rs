pub mod aggregate;
pub mod decimal;
pub mod invoice;
pub mod report;

pub use aggregate::ItemAggregate;
pub use invoice::{CanonicalKey, InvoiceLine, Quote};
pub use report::{
    CheapestSummary, InsightReport, ItemInsight, ScoreboardEntry, SupplierScoreboard,
};
