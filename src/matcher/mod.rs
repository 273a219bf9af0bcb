pub mod decompose;
mod suffix;

pub use decompose::{decompose, Decomposition, Subdomain, Subdomains};
pub use suffix::{effective_tld_plus_one, search};
