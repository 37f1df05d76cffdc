//! Lockstep dwell-time accumulation over an original/anonymized pair.

use std::io::Read;

use chrono::NaiveDateTime;
use csv::{ReaderBuilder, StringRecord};
use log::{debug, warn};

use crate::{classify, top_n, GridCell, Map, PoiConfig, PoiResult, PoiSet, PoiWindow, TraceRow};

// ── DwellTable ────────────────────────────────────────────────────────────────

/// Seconds spent per `id → window → cell` for one side of the comparison.
///
/// Each classified row adds the time since the previous row of the same id
/// in the same window to its own cell.  The first row of an id in a window
/// adds 0 (but still creates the cell), so the gap between the last night
/// row and the first work row is credited nowhere.
#[derive(Clone, Debug, Default)]
pub struct DwellTable {
    dwell:     Map<String, Map<PoiWindow, Map<GridCell, i64>>>,
    last_seen: Map<(String, PoiWindow), NaiveDateTime>,
}

impl DwellTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit `row` to `key`.  Unclassified rows are ignored entirely and do
    /// not move the last-seen timestamp.
    pub fn observe(&mut self, key: &str, row: &TraceRow, cfg: &PoiConfig) {
        let Some(window) = classify(cfg, row.timestamp) else {
            return;
        };
        let secs = match self.last_seen.insert((key.to_owned(), window), row.timestamp) {
            Some(prev) => (row.timestamp - prev).num_seconds(),
            None => 0,
        };
        *self
            .dwell
            .entry(key.to_owned())
            .or_default()
            .entry(window)
            .or_default()
            .entry(row.cell(cfg.size))
            .or_insert(0) += secs;
    }

    /// Accumulated seconds, or `None` if the cell was never visited.
    pub fn seconds(&self, id: &str, window: PoiWindow, cell: GridCell) -> Option<i64> {
        self.dwell.get(id)?.get(&window)?.get(&cell).copied()
    }

    pub fn windows(&self, id: &str) -> Option<&Map<PoiWindow, Map<GridCell, i64>>> {
        self.dwell.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.dwell.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.dwell.is_empty()
    }
}

// ── PoiExtractor ──────────────────────────────────────────────────────────────

/// Feeds paired rows into an original and an anonymized [`DwellTable`].
#[derive(Debug)]
pub struct PoiExtractor {
    cfg:        PoiConfig,
    original:   DwellTable,
    anonymized: DwellTable,
    pairs:      u64,
    deleted:    u64,
}

impl PoiExtractor {
    /// Fails with [`PoiError::Config`](crate::PoiError::Config) when `cfg`
    /// does not validate.
    pub fn new(cfg: PoiConfig) -> PoiResult<Self> {
        cfg.validate()?;
        Ok(Self {
            cfg,
            original: DwellTable::new(),
            anonymized: DwellTable::new(),
            pairs: 0,
            deleted: 0,
        })
    }

    pub fn config(&self) -> &PoiConfig {
        &self.cfg
    }

    /// Process the `line`-th pair.  The anonymized row is credited to the
    /// original row's id; a deleted anonymized row contributes nothing.
    pub fn observe_pair(
        &mut self,
        original: &StringRecord,
        anonymized: &StringRecord,
        line: u64,
    ) -> PoiResult<()> {
        let ori = TraceRow::parse(original, line)?;
        self.original.observe(&ori.id, &ori, &self.cfg);

        if anonymized.get(0) == Some(self.cfg.deletion_sentinel.as_str()) {
            self.deleted += 1;
        } else {
            let ano = TraceRow::parse(anonymized, line)?;
            self.anonymized.observe(&ori.id, &ano, &self.cfg);
        }
        self.pairs += 1;
        Ok(())
    }

    /// Read both streams to the end of the shorter one.  Rows left over in
    /// the longer stream are dropped with a warning.
    pub fn consume<R1: Read, R2: Read>(&mut self, original: R1, anonymized: R2) -> PoiResult<()> {
        let mut ori_reader = self.reader(original);
        let mut ano_reader = self.reader(anonymized);
        let mut ori_rows = ori_reader.records();
        let mut ano_rows = ano_reader.records();

        let mut line = 0u64;
        loop {
            match (ori_rows.next(), ano_rows.next()) {
                (Some(ori), Some(ano)) => {
                    line += 1;
                    self.observe_pair(&ori?, &ano?, line)?;
                }
                (Some(_), None) => {
                    let tail = 1 + ori_rows.count();
                    warn!("anonymized trace ended at line {line}; ignoring {tail} original rows");
                    break;
                }
                (None, Some(_)) => {
                    let tail = 1 + ano_rows.count();
                    warn!("original trace ended at line {line}; ignoring {tail} anonymized rows");
                    break;
                }
                (None, None) => break,
            }
        }
        debug!("processed {} row pairs ({} deleted)", self.pairs, self.deleted);
        Ok(())
    }

    fn reader<R: Read>(&self, input: R) -> csv::Reader<R> {
        ReaderBuilder::new()
            .delimiter(self.cfg.delimiter_byte())
            .has_headers(false)
            .flexible(true)
            .from_reader(input)
    }

    pub fn pairs(&self) -> u64 {
        self.pairs
    }

    pub fn deleted(&self) -> u64 {
        self.deleted
    }

    pub fn original(&self) -> &DwellTable {
        &self.original
    }

    pub fn anonymized(&self) -> &DwellTable {
        &self.anonymized
    }

    /// Top cells for both sides, restricted to the windows the original
    /// trace visited.
    pub fn finish(self) -> (PoiSet, PoiSet) {
        let n = self.cfg.nb_poi;
        let ori = top_n(&self.original, n, None);
        let ano = top_n(&self.anonymized, n, Some(&ori));
        (ori, ano)
    }
}
