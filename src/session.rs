use crate::catalog::{CatalogRow, Column, LoadedCatalog, RowId};
use indexmap::IndexSet;
use std::collections::HashSet;

/// The single active filter: one column and one selected value, or all rows
/// when no value is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub column: Column,
    pub value: Option<String>,
}

impl Default for Filter {
    fn default() -> Self {
        Self {
            column: Column::Brand,
            value: None,
        }
    }
}

impl Filter {
    pub fn is_all(&self) -> bool {
        self.value.is_none()
    }

    /// Exact, trimmed match on the filter column.
    pub fn matches(&self, row: &CatalogRow) -> bool {
        match &self.value {
            None => true,
            Some(value) => row.get(self.column).trim() == value.trim(),
        }
    }
}

/// One editing session: the backing catalog, the filter state, and the
/// projected view with its row mapping. Every user action is a synchronous
/// method call that leaves the session consistent; nothing here is ambient
/// or global, so multiple sessions could coexist.
///
/// The mapping is keyed by RowId rather than by row position or field
/// values, so reconciliation stays unambiguous even when several rows carry
/// identical values.
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    pub catalog: LoadedCatalog,
    pub filter: Filter,
    /// The displayed subset of rows, in backing-store order.
    pub view: Vec<CatalogRow>,
    /// mapping[i] identifies the backing row shown at view position i.
    /// Valid until the filter changes or the store changes cardinality;
    /// every method that does either re-projects before returning.
    pub mapping: Vec<RowId>,
}

impl EditorSession {
    pub fn new(catalog: LoadedCatalog) -> Self {
        let mut session = Self {
            catalog,
            ..Self::default()
        };
        session.project();
        session
    }

    /// Recompute the view and row mapping from the catalog and filter.
    /// An empty result is valid.
    pub fn project(&mut self) {
        self.view.clear();
        self.mapping.clear();
        for row in &self.catalog.rows {
            if self.filter.matches(row) {
                self.view.push(row.clone());
                self.mapping.push(row.id);
            }
        }
    }

    pub fn set_filter_column(&mut self, column: Column) {
        if self.filter.column != column {
            self.filter.column = column;
            self.filter.value = None;
            self.project();
        }
    }

    pub fn set_filter_value(&mut self, value: Option<String>) {
        self.filter.value = value;
        self.project();
    }

    /// Write edited view rows back into the backing store. Position i maps
    /// to the backing row with id mapping[i]; positions beyond the mapping
    /// and ids no longer in the store are skipped. Store length never
    /// changes here.
    pub fn reconcile_edits(&mut self, edited: &[CatalogRow]) {
        for (i, id) in self.mapping.iter().enumerate() {
            let Some(edited_row) = edited.get(i) else {
                break;
            };
            if let Some(row) = self.catalog.row_mut(*id) {
                row.assign_fields(edited_row);
            }
        }
    }

    /// The in-place variant the grid uses: the session's own view is the
    /// edited row set.
    pub fn commit_view_edits(&mut self) {
        let edited = std::mem::take(&mut self.view);
        self.reconcile_edits(&edited);
        self.view = edited;
        self.catalog.mark_dirty();
    }

    /// Append a new row: all columns empty, Activity Non-Active, the filter
    /// column prefilled with the active filter value. Re-projects, so the
    /// row appears in the view iff it matches the filter.
    pub fn add_row(&mut self) -> RowId {
        let id = self.catalog.push_empty();
        if let Some(value) = self.filter.value.clone()
            && let Some(row) = self.catalog.row_mut(id)
        {
            row.set(self.filter.column, value.trim());
        }
        self.catalog.mark_dirty();
        self.project();
        id
    }

    /// Remove from the store every previously-mapped row whose id no longer
    /// appears among the edited view rows. Keyed by id: deleting one of
    /// several value-identical rows removes exactly that instance.
    pub fn reconcile_deletion(&mut self, edited: &[CatalogRow]) {
        let surviving: HashSet<RowId> = edited.iter().map(|r| r.id).collect();
        let mut removed_any = false;
        for id in self.mapping.clone() {
            if !surviving.contains(&id) && self.catalog.remove_by_id(id) {
                removed_any = true;
            }
        }
        if removed_any {
            self.catalog.mark_dirty();
        }
        self.project();
    }

    /// Delete the row at view position i. Out-of-range positions are a
    /// no-op.
    pub fn remove_view_row(&mut self, i: usize) -> bool {
        let Some(&id) = self.mapping.get(i) else {
            return false;
        };
        let removed = self.catalog.remove_by_id(id);
        if removed {
            self.catalog.mark_dirty();
        }
        self.project();
        removed
    }

    /// Flip Activity of the view row at position i and of its backing row.
    /// Triggered by a cell click, not a text edit.
    pub fn toggle_activity(&mut self, i: usize) -> bool {
        let Some(&id) = self.mapping.get(i) else {
            return false;
        };
        let Some(row) = self.catalog.row_mut(id) else {
            return false;
        };
        row.activity = row.activity.toggled();
        let activity = row.activity;
        if let Some(view_row) = self.view.get_mut(i) {
            view_row.activity = activity;
        }
        self.catalog.mark_dirty();
        true
    }

    /// Distinct, trimmed, non-empty values of `column` across the whole
    /// store, in first-appearance order. Feeds the filter value dropdown.
    pub fn filter_options(&self, column: Column) -> Vec<String> {
        let mut options = IndexSet::new();
        for row in &self.catalog.rows {
            let value = row.get(column).trim();
            if !value.is_empty() {
                options.insert(value.to_string());
            }
        }
        options.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{EditorSession, Filter};
    use crate::catalog::{Column, LoadedCatalog};

    fn catalog_with_brands(brands: &[&str]) -> LoadedCatalog {
        let mut catalog = LoadedCatalog::empty();
        for brand in brands {
            let id = catalog.push_empty();
            if let Some(row) = catalog.row_mut(id) {
                row.brand = brand.to_string();
            }
        }
        catalog
    }

    #[test]
    fn filter_match_is_exact_and_trimmed() {
        let catalog = catalog_with_brands(&["  Thayers  "]);
        let filter = Filter {
            column: Column::Brand,
            value: Some("Thayers".to_string()),
        };
        assert!(filter.matches(&catalog.rows[0]));

        let other = Filter {
            column: Column::Brand,
            value: Some("thayers".to_string()),
        };
        assert!(!other.matches(&catalog.rows[0]));
    }

    #[test]
    fn filter_options_dedupe_in_first_appearance_order() {
        let session = EditorSession::new(catalog_with_brands(&[
            "Thayers", "John", "Thayers", "", "Michael",
        ]));
        assert_eq!(
            session.filter_options(Column::Brand),
            vec!["Thayers", "John", "Michael"]
        );
    }

    #[test]
    fn changing_filter_column_resets_the_value() {
        let mut session = EditorSession::new(catalog_with_brands(&["A", "B"]));
        session.set_filter_value(Some("A".to_string()));
        assert_eq!(session.view.len(), 1);

        session.set_filter_column(Column::Category);
        assert!(session.filter.is_all());
        assert_eq!(session.view.len(), 2);
    }

    #[test]
    fn empty_projection_is_valid() {
        let mut session = EditorSession::new(catalog_with_brands(&["A"]));
        session.set_filter_value(Some("missing".to_string()));
        assert!(session.view.is_empty());
        assert!(session.mapping.is_empty());
    }
}
