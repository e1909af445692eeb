pub mod aggregator;
pub mod normalizer;
pub mod parser;
pub mod pipeline;
pub mod reporter;

pub use aggregator::{aggregate, PriceAggregator};
pub use normalizer::{canonical_key, normalize_supplier};
pub use parser::parse_invoice_lines;
pub use pipeline::{compute_cheapest, compute_insights};
pub use reporter::build_report;
