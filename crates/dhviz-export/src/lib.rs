//! dhviz-export: getting chains in and out of the visualizer.
//!
//! Three formats share one error type, [`ExportError`]:
//!
//! - CSV parameter table ([`chain_to_csv`], [`chain_from_csv`])
//! - JSON snapshot ([`to_json`], [`from_json`])
//! - Share URL with the snapshot in the `dh` query parameter
//!   ([`share_url`], [`chain_from_share_url`])

pub mod error;
pub mod share;
pub mod snapshot;
pub mod table;

pub use error::ExportError;
pub use share::{SHARE_PARAM, chain_from_share_url, share_url};
pub use snapshot::{from_json, to_json, to_json_pretty};
pub use table::{CSV_HEADER, chain_from_csv, chain_to_csv, read_csv, write_csv};
