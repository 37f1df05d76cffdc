//! Top-N selection and the similarity score.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, info};

use crate::{DwellTable, GridCell, PoiConfig, PoiError, PoiExtractor, PoiResult, PoiWindow};

/// The retained `(cell, seconds)` pairs per id and window, longest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PoiSet {
    by_id: BTreeMap<String, BTreeMap<PoiWindow, Vec<(GridCell, i64)>>>,
}

impl PoiSet {
    pub fn get(&self, id: &str, window: PoiWindow) -> &[(GridCell, i64)] {
        self.by_id
            .get(id)
            .and_then(|w| w.get(&window))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Seconds for `cell`, 0 if it is not among the retained cells.
    pub fn seconds(&self, id: &str, window: PoiWindow, cell: GridCell) -> i64 {
        self.get(id, window)
            .iter()
            .find(|(c, _)| *c == cell)
            .map_or(0, |&(_, s)| s)
    }

    fn contains_window(&self, id: &str, window: PoiWindow) -> bool {
        self.by_id.get(id).is_some_and(|w| w.contains_key(&window))
    }

    /// Every `(id, window, cell, seconds)` in id, window, rank order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, PoiWindow, GridCell, i64)> {
        self.by_id.iter().flat_map(|(id, windows)| {
            windows.iter().flat_map(move |(&w, cells)| {
                cells.iter().map(move |&(c, s)| (id.as_str(), w, c, s))
            })
        })
    }

    pub fn len(&self) -> usize {
        self.by_id.values().flat_map(|w| w.values()).map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Keep the `n` longest cells per id and window.  Ties go to the smaller
/// cell.  With `only`, ids and windows absent from that set are skipped
/// (an empty entry is still recorded for each window `only` has).
pub fn top_n(table: &DwellTable, n: usize, only: Option<&PoiSet>) -> PoiSet {
    let mut set = PoiSet::default();
    for id in table.ids() {
        let Some(windows) = table.windows(id) else { continue };
        for (&window, cells) in windows {
            if only.is_some_and(|o| !o.contains_window(id, window)) {
                continue;
            }
            let mut ranked: Vec<(GridCell, i64)> = cells.iter().map(|(&c, &s)| (c, s)).collect();
            ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
            ranked.truncate(n);
            set.by_id.entry(id.to_owned()).or_default().insert(window, ranked);
        }
    }
    set
}

/// Mean over the original's retained cells of `min / max` of the two
/// durations, negatives clamped to 0.  A cell where both are 0 adds nothing
/// but still counts toward the denominator.
pub fn similarity(original: &PoiSet, anonymized: &PoiSet) -> PoiResult<f64> {
    let total = original.len();
    if total == 0 {
        return Err(PoiError::Empty);
    }

    let mut score = 0.0;
    for (id, window, cell, secs) in original.iter() {
        let ori = secs.max(0) as f64;
        let ano = anonymized.seconds(id, window, cell).max(0) as f64;
        debug!("{id} {window} {cell:?}: original {ori}s, anonymized {ano}s");
        if ori == 0.0 && ano == 0.0 {
            continue;
        }
        score += ori.min(ano) / ori.max(ano);
    }
    Ok(score / total as f64)
}

/// Score two delimited traces read from any sources.
pub fn score_readers<R1: Read, R2: Read>(
    original: R1,
    anonymized: R2,
    cfg: &PoiConfig,
) -> PoiResult<f64> {
    let mut extractor = PoiExtractor::new(cfg.clone())?;
    extractor.consume(original, anonymized)?;
    let pairs = extractor.pairs();
    let (ori, ano) = extractor.finish();
    let score = similarity(&ori, &ano)?;
    info!("POI score {score:.4} over {} cells from {pairs} row pairs", ori.len());
    Ok(score)
}

pub fn score_files(
    original: impl AsRef<Path>,
    anonymized: impl AsRef<Path>,
    cfg: &PoiConfig,
) -> PoiResult<f64> {
    score_readers(File::open(original)?, File::open(anonymized)?, cfg)
}
