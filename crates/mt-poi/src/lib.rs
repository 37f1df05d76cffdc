//! `mt-poi` — how well does an anonymized trace keep a person's places?
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`config`]    | `PoiConfig` (JSON-compatible parameter object)             |
//! | [`row`]       | `TraceRow`, row parsing, `GridCell` rounding               |
//! | [`window`]    | `PoiWindow`, `classify`                                    |
//! | [`extractor`] | `DwellTable`, `PoiExtractor` — lockstep dwell accumulation |
//! | [`score`]     | `PoiSet`, `top_n`, `similarity`, `score_readers`, `score_files` |
//! | [`error`]     | `PoiError`, `PoiResult<T>`                                 |
//!
//! # Pipeline
//!
//! ```text
//! original row i ─┐                          ┌─ top-N per (id, window) ─┐
//!                 ├─ classify → dwell table ─┤                          ├─ similarity
//! anonym.  row i ─┘                          └─ top-N per (id, window) ─┘
//! ```
//!
//! The two streams are paired by line position, not by timestamp, and the
//! anonymized row is credited to the original row's id.  A stream that falls
//! out of step with the other silently pairs unrelated rows.
//!
//! # Feature flags
//!
//! | Flag      | Effect                                            |
//! |-----------|---------------------------------------------------|
//! | `fx-hash` | FxHash instead of SipHash for the dwell tables.   |

pub mod config;
pub mod error;
pub mod extractor;
pub mod row;
pub mod score;
pub mod window;


pub use config::PoiConfig;
pub use error::{PoiError, PoiResult};
pub use extractor::{DwellTable, PoiExtractor};
pub use row::{GridCell, TraceRow};
pub use score::{score_files, score_readers, similarity, top_n, PoiSet};
pub use window::{classify, PoiWindow};

#[cfg(feature = "fx-hash")]
pub(crate) type Map<K, V> = rustc_hash::FxHashMap<K, V>;
#[cfg(not(feature = "fx-hash"))]
pub(crate) type Map<K, V> = std::collections::HashMap<K, V>;
