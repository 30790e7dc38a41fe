//! Sort, filter and pagination state of a server-backed table.

use std::collections::BTreeMap;
use std::num::NonZeroU32;

use super::column::ColumnDef;
use crate::models::PageRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascend,
    Descend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: &'static str,
    pub order: SortOrder,
}

/// A page load handed out by [`TableState::take_reload`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub seq: u64,
    pub page: PageRequest,
}

/// View state of one table.
///
/// Sorting and filtering run on the loaded page. Pagination and reloads are
/// server-side: every change records a pending reload that the owner turns into
/// a fetch through [`TableState::take_reload`].
#[derive(Debug, Clone)]
pub struct TableState {
    sort: Option<SortState>,
    filters: BTreeMap<&'static str, Vec<i64>>,
    page: PageRequest,
    load_seq: u64,
    reload_pending: bool,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new()
    }
}

impl TableState {
    /// A table on page 1 with a load already pending.
    pub fn new() -> Self {
        Self {
            sort: None,
            filters: BTreeMap::new(),
            page: PageRequest::default(),
            load_seq: 0,
            reload_pending: true,
        }
    }

    pub fn sort(&self) -> Option<SortState> {
        self.sort
    }

    /// Cycles the sort of `key`: unsorted, ascending, descending, unsorted.
    ///
    /// Sorting another column starts that column at ascending.
    pub fn toggle_sort(&mut self, key: &'static str) {
        self.sort = match self.sort {
            Some(SortState {
                key: current,
                order: SortOrder::Ascend,
            }) if current == key => Some(SortState {
                key,
                order: SortOrder::Descend,
            }),
            Some(SortState {
                key: current,
                order: SortOrder::Descend,
            }) if current == key => None,
            _ => Some(SortState {
                key,
                order: SortOrder::Ascend,
            }),
        };
    }

    /// Selected filter values of a column.
    pub fn selected(&self, key: &str) -> &[i64] {
        self.filters.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_selected(&self, key: &str, value: i64) -> bool {
        self.selected(key).contains(&value)
    }

    pub fn has_filters(&self) -> bool {
        !self.filters.is_empty()
    }

    /// Selects or deselects one filter value of `column`.
    ///
    /// Single-select columns keep at most one value.
    pub fn toggle_filter<R>(&mut self, column: &ColumnDef<R>, value: i64) {
        let multiple = column.filter.as_ref().is_some_and(|filter| filter.multiple);
        let selected = self.filters.entry(column.key).or_default();

        if let Some(pos) = selected.iter().position(|v| *v == value) {
            selected.remove(pos);
        } else if multiple {
            selected.push(value);
        } else {
            selected.clear();
            selected.push(value);
        }

        if selected.is_empty() {
            self.filters.remove(column.key);
        }
    }

    pub fn set_filter(&mut self, key: &'static str, values: Vec<i64>) {
        if values.is_empty() {
            self.filters.remove(key);
        } else {
            self.filters.insert(key, values);
        }
    }

    pub fn clear_filter(&mut self, key: &str) {
        self.filters.remove(key);
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    /// Filters then sorts `rows`.
    ///
    /// Filters combine with AND across columns and any-of within a column. The
    /// sort is stable, so equal rows keep their server order.
    pub fn apply<'r, R>(&self, columns: &[ColumnDef<R>], rows: &'r [R]) -> Vec<&'r R> {
        let active: Vec<(&ColumnDef<R>, &[i64])> = columns
            .iter()
            .filter_map(|column| {
                let selected = self.selected(column.key);
                (!selected.is_empty()).then_some((column, selected))
            })
            .collect();

        let mut visible: Vec<&R> = rows
            .iter()
            .filter(|row| {
                active
                    .iter()
                    .all(|(column, selected)| selected.iter().any(|v| column.matches(row, *v)))
            })
            .collect();

        let sorter = self.sort.and_then(|sort| {
            columns
                .iter()
                .find(|column| column.key == sort.key)
                .and_then(|column| column.sorter)
                .map(|sorter| (sorter, sort.order))
        });
        if let Some((sorter, order)) = sorter {
            match order {
                SortOrder::Ascend => visible.sort_by(|a, b| sorter(a, b)),
                SortOrder::Descend => visible.sort_by(|a, b| sorter(b, a)),
            }
        }

        visible
    }

    pub fn page(&self) -> PageRequest {
        self.page
    }

    pub fn set_page(&mut self, index: NonZeroU32) {
        if self.page.page_index != index {
            self.page.page_index = index;
            self.reload_pending = true;
        }
    }

    /// Changes the page size and returns to page 1.
    pub fn set_page_size(&mut self, size: NonZeroU32) {
        if self.page.page_size != size {
            self.page = PageRequest::first(size);
            self.reload_pending = true;
        }
    }

    /// Reloads the current page.
    pub fn reload(&mut self) {
        self.reload_pending = true;
    }

    /// Reloads from page 1, keeping sort and filters.
    pub fn reload_and_reset(&mut self) {
        self.page = PageRequest::first(self.page.page_size);
        self.reload_pending = true;
    }

    /// Returns to page 1 without requesting a reload.
    pub fn rewind(&mut self) {
        self.page = PageRequest::first(self.page.page_size);
    }

    pub fn reload_pending(&self) -> bool {
        self.reload_pending
    }

    /// Consumes the pending reload, superseding every earlier ticket.
    pub fn take_reload(&mut self) -> Option<LoadTicket> {
        if !self.reload_pending {
            return None;
        }
        self.reload_pending = false;
        self.load_seq += 1;
        Some(LoadTicket {
            seq: self.load_seq,
            page: self.page,
        })
    }

    /// Whether `seq` is the most recent ticket handed out.
    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.load_seq
    }
}
