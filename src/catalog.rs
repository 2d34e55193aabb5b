use crate::statics;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::{
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// The fixed catalog schema, in on-disk column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Division,
    Brand,
    Category,
    Franchise,
    SubFranchise,
    ParentTag,
    Activity,
}

impl Column {
    pub const ALL: [Column; 7] = [
        Column::Division,
        Column::Brand,
        Column::Category,
        Column::Franchise,
        Column::SubFranchise,
        Column::ParentTag,
        Column::Activity,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Column::Division => statics::CAT_COL_DIVISION,
            Column::Brand => statics::CAT_COL_BRAND,
            Column::Category => statics::CAT_COL_CATEGORY,
            Column::Franchise => statics::CAT_COL_FRANCHISE,
            Column::SubFranchise => statics::CAT_COL_SUBFRANCHISE,
            Column::ParentTag => statics::CAT_COL_PARENTTAG,
            Column::Activity => statics::CAT_COL_ACTIVITY,
        }
    }
}

/// Activity is a two-state flag, not free text. New rows default to Non-Active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Activity {
    #[serde(rename = "Active")]
    Active,
    #[default]
    #[serde(rename = "Non-Active")]
    NonActive,
}

impl Activity {
    pub fn as_str(self) -> &'static str {
        match self {
            Activity::Active => statics::CAT_ACTIVITY_ACTIVE,
            Activity::NonActive => statics::CAT_ACTIVITY_NON_ACTIVE,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Activity::Active => Activity::NonActive,
            Activity::NonActive => Activity::Active,
        }
    }

    /// Lenient parse for loading: anything that isn't exactly "Active"
    /// (after trimming) is treated as Non-Active.
    pub fn parse(text: &str) -> Self {
        if text.trim() == statics::CAT_ACTIVITY_ACTIVE {
            Activity::Active
        } else {
            Activity::NonActive
        }
    }
}

/// Stable synthetic row identity, assigned at load time and at row creation.
/// Never written to disk; all view/store reconciliation is keyed by it, so
/// rows with identical field values stay distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RowId(pub u64);

/// One catalog record. Field renames are the on-disk header spellings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogRow {
    #[serde(skip)]
    pub id: RowId,
    #[serde(rename = "Division")]
    pub division: String,
    #[serde(rename = "Brand")]
    pub brand: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Franchise")]
    pub franchise: String,
    #[serde(rename = "SubFranchise")]
    pub sub_franchise: String,
    #[serde(rename = "ParentTag")]
    pub parent_tag: String,
    #[serde(rename = "Activity")]
    pub activity: Activity,
}

impl CatalogRow {
    pub fn empty(id: RowId) -> Self {
        Self {
            id,
            division: String::new(),
            brand: String::new(),
            category: String::new(),
            franchise: String::new(),
            sub_franchise: String::new(),
            parent_tag: String::new(),
            activity: Activity::default(),
        }
    }

    pub fn get(&self, column: Column) -> &str {
        match column {
            Column::Division => &self.division,
            Column::Brand => &self.brand,
            Column::Category => &self.category,
            Column::Franchise => &self.franchise,
            Column::SubFranchise => &self.sub_franchise,
            Column::ParentTag => &self.parent_tag,
            Column::Activity => self.activity.as_str(),
        }
    }

    pub fn set(&mut self, column: Column, value: &str) {
        match column {
            Column::Activity => self.activity = Activity::parse(value),
            _ => {
                if let Some(field) = self.field_mut(column) {
                    *field = value.to_string();
                }
            }
        }
    }

    /// Mutable access for the text columns. Activity is not free text and
    /// returns None; the grid toggles it instead.
    pub fn field_mut(&mut self, column: Column) -> Option<&mut String> {
        match column {
            Column::Division => Some(&mut self.division),
            Column::Brand => Some(&mut self.brand),
            Column::Category => Some(&mut self.category),
            Column::Franchise => Some(&mut self.franchise),
            Column::SubFranchise => Some(&mut self.sub_franchise),
            Column::ParentTag => Some(&mut self.parent_tag),
            Column::Activity => None,
        }
    }

    /// Copy all field values from `other`, keeping our identity.
    pub fn assign_fields(&mut self, other: &CatalogRow) {
        self.division = other.division.clone();
        self.brand = other.brand.clone();
        self.category = other.category.clone();
        self.franchise = other.franchise.clone();
        self.sub_franchise = other.sub_franchise.clone();
        self.parent_tag = other.parent_tag.clone();
        self.activity = other.activity;
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("header row does not match the catalog schema (expected {expected:?}, found {found:?})")]
    HeaderMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },
}

/// The backing store: the full in-memory row set, source of truth between
/// load and save. Tracks its source path and whether unsaved edits exist.
#[derive(Debug, Clone, Default)]
pub struct LoadedCatalog {
    pub source_path: Option<PathBuf>,
    pub rows: Vec<CatalogRow>,
    pub dirty: bool,
    next_row_id: u64,
}

impl LoadedCatalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Strict load: the CSV header row must match the schema exactly.
    /// Data cells missing from short records become empty strings.
    pub fn load_path(path: &Path) -> anyhow::Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .with_context(|| format!("reading {path:?}"))?;
        let rows = read_rows(&mut reader).with_context(|| format!("parsing {path:?}"))?;

        let next_row_id = rows.len() as u64;
        Ok(Self {
            source_path: Some(path.to_path_buf()),
            rows,
            dirty: false,
            next_row_id,
        })
    }

    /// The load operation the editor uses at startup: an absent, unreadable,
    /// or malformed file falls back to an empty catalog with the fixed
    /// schema. The path is kept as the save target either way.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load_path(path) {
            Ok(catalog) => catalog,
            Err(_) => Self {
                source_path: Some(path.to_path_buf()),
                ..Self::default()
            },
        }
    }

    /// Serialize the full store, header row included, overwriting `path`.
    /// On success the catalog adopts `path` as its source and clears `dirty`.
    /// On failure the in-memory store is untouched.
    pub fn save_to_path(&mut self, path: &Path) -> anyhow::Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(path)
            .with_context(|| format!("writing {path:?}"))?;
        writer
            .write_record(Column::ALL.iter().map(|c| c.header()))
            .context("writing header row")?;
        for row in &self.rows {
            writer
                .serialize(row)
                .with_context(|| format!("writing row {:?}", row.id))?;
        }
        writer.flush().with_context(|| format!("flushing {path:?}"))?;

        self.source_path = Some(path.to_path_buf());
        self.dirty = false;
        Ok(())
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn fresh_id(&mut self) -> RowId {
        self.next_row_id += 1;
        RowId(self.next_row_id)
    }

    /// Append a brand-new empty row and return its identity.
    pub fn push_empty(&mut self) -> RowId {
        let id = self.fresh_id();
        self.rows.push(CatalogRow::empty(id));
        id
    }

    pub fn position_of(&self, id: RowId) -> Option<usize> {
        self.rows.iter().position(|r| r.id == id)
    }

    pub fn row_mut(&mut self, id: RowId) -> Option<&mut CatalogRow> {
        self.rows.iter_mut().find(|r| r.id == id)
    }

    pub fn remove_by_id(&mut self, id: RowId) -> bool {
        match self.position_of(id) {
            Some(idx) => {
                self.rows.remove(idx);
                true
            }
            None => false,
        }
    }
}

fn read_rows<R: io::Read>(reader: &mut csv::Reader<R>) -> anyhow::Result<Vec<CatalogRow>> {
    let headers = reader.headers().context("reading header row")?;
    let expected: Vec<String> = Column::ALL.iter().map(|c| c.header().to_string()).collect();
    let found: Vec<String> = headers.iter().map(str::to_string).collect();
    if found != expected {
        return Err(CatalogError::HeaderMismatch { expected, found }.into());
    }

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("parsing record {}", idx + 1))?;
        let cell = |i: usize| record.get(i).unwrap_or("").to_string();
        rows.push(CatalogRow {
            id: RowId(idx as u64 + 1),
            division: cell(0),
            brand: cell(1),
            category: cell(2),
            franchise: cell(3),
            sub_franchise: cell(4),
            parent_tag: cell(5),
            activity: Activity::parse(record.get(6).unwrap_or("")),
        });
    }
    Ok(rows)
}
