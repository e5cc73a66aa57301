use super::error::EngineError;
use crate::core::models::indexed::ResidueIndexed;
use crate::core::models::record::ResidueRecord;
use crate::core::models::residue_key::ResidueKey;
use tracing::debug;

/// One input's records laid out by residue key, plus the header lines that
/// precede its data in CSV form.
#[derive(Debug, Clone)]
pub struct ResidueTable<R> {
    name: String,
    preamble: Vec<Vec<String>>,
    slots: ResidueIndexed<Option<R>>,
}

impl<R: ResidueRecord> ResidueTable<R> {
    /// Places each record at its residue key.
    ///
    /// A later record with the same key replaces the earlier one.
    pub fn from_records(
        name: impl Into<String>,
        preamble: Vec<Vec<String>>,
        records: impl IntoIterator<Item = R>,
    ) -> Result<Self, EngineError> {
        let name = name.into();
        let mut slots: ResidueIndexed<Option<R>> = ResidueIndexed::new();
        let mut replaced = 0usize;

        for record in records {
            let slot = slots.slot_mut(record.residue_key()?);
            if slot.is_some() {
                replaced += 1;
            }
            *slot = Some(record);
        }
        if replaced > 0 {
            debug!(
                "Table '{}': {} record(s) replaced by a later record with the same residue number.",
                name, replaced
            );
        }

        Ok(Self {
            name,
            preamble,
            slots,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn preamble(&self) -> &[Vec<String>] {
        &self.preamble
    }

    pub fn get(&self, residue: ResidueKey) -> Option<&R> {
        self.slots.get(residue).and_then(Option::as_ref)
    }

    pub fn max_key(&self) -> Option<ResidueKey> {
        self.slots.max_key()
    }

    /// Number of residues that hold a record.
    pub fn record_count(&self) -> usize {
        self.slots.iter().filter(|(_, slot)| slot.is_some()).count()
    }
}

/// A residue row across all aligned tables; `slots[i]` belongs to table `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedRow<R> {
    pub residue: ResidueKey,
    pub slots: Vec<Option<R>>,
}

#[derive(Debug, Clone)]
pub struct AlignedTable<R> {
    names: Vec<String>,
    preamble: Vec<Vec<String>>,
    rows: Vec<AlignedRow<R>>,
}

impl<R: ResidueRecord> AlignedTable<R> {
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn table_count(&self) -> usize {
        self.names.len()
    }

    /// Header rows, each the concatenation of every table's header line.
    pub fn preamble(&self) -> &[Vec<String>] {
        &self.preamble
    }

    pub fn rows(&self) -> &[AlignedRow<R>] {
        &self.rows
    }

    /// Largest residue key that has a row.
    pub fn max_key(&self) -> Option<ResidueKey> {
        self.rows.last().map(|row| row.residue)
    }

    /// Renders the header rows followed by one row per residue, with every
    /// empty slot written as `R::FIELD_COUNT` empty fields.
    pub fn csv_rows(&self) -> Vec<Vec<String>> {
        let data = self.rows.iter().map(|row| {
            row.slots
                .iter()
                .flat_map(|slot| match slot {
                    Some(record) => record.csv_fields(),
                    None => vec![String::new(); R::FIELD_COUNT],
                })
                .collect()
        });
        self.preamble.iter().cloned().chain(data).collect()
    }
}

/// Merges independently parsed tables into one table indexed by residue.
///
/// Rows cover `1..=max_key` over all tables; a residue absent from every
/// table gets no row. Each table keeps its column position in every row.
pub fn align<R: ResidueRecord>(tables: Vec<ResidueTable<R>>) -> Result<AlignedTable<R>, EngineError> {
    if tables.is_empty() {
        return Err(EngineError::NoInput);
    }

    let max_key = tables.iter().filter_map(ResidueTable::max_key).max();
    let preamble = merge_preambles::<R>(&tables);
    let names: Vec<String> = tables.iter().map(|t| t.name.clone()).collect();

    let mut columns: Vec<_> = tables
        .into_iter()
        .map(|table| table.slots.into_slots().into_iter())
        .collect();

    let mut rows = Vec::new();
    if let Some(max_key) = max_key {
        for residue in ResidueKey::range_to(max_key) {
            let slots: Vec<Option<R>> = columns
                .iter_mut()
                .map(|column| column.next().flatten())
                .collect();
            if slots.iter().any(Option::is_some) {
                rows.push(AlignedRow { residue, slots });
            }
        }
    }

    debug!(
        "Aligned {} table(s) into {} residue row(s) (max residue {}).",
        names.len(),
        rows.len(),
        max_key.map_or(0, ResidueKey::get)
    );

    Ok(AlignedTable {
        names,
        preamble,
        rows,
    })
}

fn merge_preambles<R: ResidueRecord>(tables: &[ResidueTable<R>]) -> Vec<Vec<String>> {
    let line_count = tables.iter().map(|t| t.preamble.len()).max().unwrap_or(0);
    (0..line_count)
        .map(|line| {
            tables
                .iter()
                .flat_map(|table| match table.preamble.get(line) {
                    Some(fields) => fields.clone(),
                    None => vec![String::new(); R::FIELD_COUNT],
                })
                .collect()
        })
        .collect()
}
