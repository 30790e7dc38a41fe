//! Declarative column definitions.
//!
//! A [`ColumnDef`] describes one displayed field: how to read it from a row, how
//! to show it, and optionally how to sort and filter by it. Renderers (egui in
//! `roster-ui`, `tabled` in `roster-cli`) dispatch on [`ColumnKind`].

use std::cmp::Ordering;

/// Side a column is pinned to while scrolling horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedSide {
    Left,
    Right,
}

/// Colour family of an enum badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeStatus {
    Success,
    Error,
    Processing,
    Warning,
    #[default]
    Default,
}

/// Display mapping of one code of an enum column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumOption {
    pub code: u8,
    pub label: &'static str,
    pub status: BadgeStatus,
}

impl EnumOption {
    pub const fn new(code: u8, label: &'static str, status: BadgeStatus) -> Self {
        Self {
            code,
            label,
            status,
        }
    }

    pub fn find(options: &[EnumOption], code: u8) -> Option<&EnumOption> {
        options.iter().find(|option| option.code == code)
    }
}

/// How a column's value is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Enum(&'static [EnumOption]),
    Image,
    /// Integer list shown as `"{prefix} {n}"` tags in ascending order.
    Tags { prefix: &'static str },
    Actions,
}

/// A borrowed cell value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellValue<'a> {
    Text(&'a str),
    Code(u8),
    Image(Option<&'a str>),
    Tags(Option<&'a [u32]>),
    Actions,
}

/// One choice in a column filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub value: i64,
    pub label: String,
}

/// Client-side filter attached to a column.
///
/// A row passes when it matches any of the selected values. Without a custom
/// predicate the cell value must equal the selected value exactly.
#[derive(Debug, Clone)]
pub struct ColumnFilter<R> {
    pub options: Vec<FilterOption>,
    pub multiple: bool,
    pub predicate: Option<fn(&R, i64) -> bool>,
}

impl<R> ColumnFilter<R> {
    /// Multi-select filter over every option of an enum column.
    pub fn from_enum(options: &[EnumOption]) -> Self {
        Self {
            options: options
                .iter()
                .map(|option| FilterOption {
                    value: i64::from(option.code),
                    label: option.label.to_owned(),
                })
                .collect(),
            multiple: true,
            predicate: None,
        }
    }

    /// Single-select filter with options `"{prefix} 1"` through `"{prefix} {count}"`.
    pub fn numbered(prefix: &str, count: u32, predicate: fn(&R, i64) -> bool) -> Self {
        Self {
            options: (1..=count)
                .map(|n| FilterOption {
                    value: i64::from(n),
                    label: tag_label(prefix, n),
                })
                .collect(),
            multiple: false,
            predicate: Some(predicate),
        }
    }
}

/// Label of a single tag.
pub fn tag_label(prefix: &str, n: u32) -> String {
    format!("{prefix} {n}")
}

/// Tag values in display order.
pub fn sorted_tags(list: &[u32]) -> Vec<u32> {
    let mut tags = list.to_vec();
    tags.sort_unstable();
    tags
}

fn no_value<R>(_row: &R) -> CellValue<'_> {
    CellValue::Actions
}

pub struct ColumnDef<R> {
    pub title: &'static str,
    pub key: &'static str,
    pub fixed: Option<FixedSide>,
    pub width: Option<f32>,
    pub sorter: Option<fn(&R, &R) -> Ordering>,
    pub kind: ColumnKind,
    pub filter: Option<ColumnFilter<R>>,
    pub hide_in_search: bool,
    pub value: fn(&R) -> CellValue<'_>,
}

impl<R> std::fmt::Debug for ColumnDef<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnDef")
            .field("title", &self.title)
            .field("key", &self.key)
            .field("fixed", &self.fixed)
            .field("width", &self.width)
            .field("sortable", &self.sorter.is_some())
            .field("kind", &self.kind)
            .field("filterable", &self.filter.is_some())
            .field("hide_in_search", &self.hide_in_search)
            .finish()
    }
}

impl<R> ColumnDef<R> {
    fn with_kind(
        title: &'static str,
        key: &'static str,
        kind: ColumnKind,
        value: fn(&R) -> CellValue<'_>,
    ) -> Self {
        Self {
            title,
            key,
            fixed: None,
            width: None,
            sorter: None,
            kind,
            filter: None,
            hide_in_search: false,
            value,
        }
    }

    pub fn text(title: &'static str, key: &'static str, value: fn(&R) -> CellValue<'_>) -> Self {
        Self::with_kind(title, key, ColumnKind::Text, value)
    }

    /// Enum column with a multi-select filter over all of its options.
    pub fn enumeration(
        title: &'static str,
        key: &'static str,
        options: &'static [EnumOption],
        value: fn(&R) -> CellValue<'_>,
    ) -> Self {
        let mut column = Self::with_kind(title, key, ColumnKind::Enum(options), value);
        column.filter = Some(ColumnFilter::from_enum(options));
        column
    }

    pub fn image(title: &'static str, key: &'static str, value: fn(&R) -> CellValue<'_>) -> Self {
        Self::with_kind(title, key, ColumnKind::Image, value)
    }

    pub fn tags(
        title: &'static str,
        key: &'static str,
        prefix: &'static str,
        value: fn(&R) -> CellValue<'_>,
    ) -> Self {
        Self::with_kind(title, key, ColumnKind::Tags { prefix }, value)
    }

    pub fn actions(title: &'static str, key: &'static str) -> Self {
        let mut column = Self::with_kind(title, key, ColumnKind::Actions, no_value::<R>);
        column.hide_in_search = true;
        column
    }

    #[must_use]
    pub fn fixed(mut self, side: FixedSide) -> Self {
        self.fixed = Some(side);
        self
    }

    #[must_use]
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn sorter(mut self, sorter: fn(&R, &R) -> Ordering) -> Self {
        self.sorter = Some(sorter);
        self
    }

    #[must_use]
    pub fn filter(mut self, filter: ColumnFilter<R>) -> Self {
        self.filter = Some(filter);
        self
    }

    #[must_use]
    pub fn hide_in_search(mut self) -> Self {
        self.hide_in_search = true;
        self
    }

    pub fn is_sortable(&self) -> bool {
        self.sorter.is_some()
    }

    pub fn cell<'a>(&self, row: &'a R) -> CellValue<'a> {
        (self.value)(row)
    }

    /// Whether `row` matches one selected filter value.
    pub fn matches(&self, row: &R, selected: i64) -> bool {
        if let Some(predicate) = self.filter.as_ref().and_then(|filter| filter.predicate) {
            return predicate(row, selected);
        }
        match self.cell(row) {
            CellValue::Code(code) => i64::from(code) == selected,
            CellValue::Tags(Some(list)) => list.iter().any(|n| i64::from(*n) == selected),
            CellValue::Text(text) => text.parse::<i64>().is_ok_and(|n| n == selected),
            CellValue::Tags(None) | CellValue::Image(_) | CellValue::Actions => false,
        }
    }

    /// Plain-text rendering of the cell, used by text-only front ends.
    pub fn display_text(&self, row: &R) -> String {
        match (self.kind, self.cell(row)) {
            (ColumnKind::Enum(options), CellValue::Code(code)) => EnumOption::find(options, code)
                .map_or_else(|| code.to_string(), |option| option.label.to_owned()),
            (ColumnKind::Tags { prefix }, CellValue::Tags(Some(list))) => sorted_tags(list)
                .into_iter()
                .map(|n| tag_label(prefix, n))
                .collect::<Vec<_>>()
                .join(", "),
            (_, CellValue::Text(text)) => text.to_owned(),
            (_, CellValue::Code(code)) => code.to_string(),
            (_, CellValue::Image(Some(url))) => url.to_owned(),
            (_, CellValue::Image(None) | CellValue::Tags(_)) => "-".to_owned(),
            (_, CellValue::Actions) => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: String,
        level: u8,
        tags: Option<Vec<u32>>,
    }

    fn name(row: &Row) -> CellValue<'_> {
        CellValue::Text(&row.name)
    }

    fn level(row: &Row) -> CellValue<'_> {
        CellValue::Code(row.level)
    }

    fn tags(row: &Row) -> CellValue<'_> {
        CellValue::Tags(row.tags.as_deref())
    }

    const LEVELS: &[EnumOption] = &[
        EnumOption::new(0, "Low", BadgeStatus::Default),
        EnumOption::new(1, "High", BadgeStatus::Warning),
    ];

    fn row(level: u8, tags: Option<Vec<u32>>) -> Row {
        Row {
            name: "n".to_owned(),
            level,
            tags,
        }
    }

    #[test]
    fn enum_columns_filter_by_exact_code() {
        let column = ColumnDef::enumeration("Level", "level", LEVELS, level);
        let filter = column.filter.as_ref().unwrap();
        assert!(filter.multiple);
        assert_eq!(filter.options.len(), 2);
        assert_eq!(filter.options[1].label, "High");

        assert!(column.matches(&row(1, None), 1));
        assert!(!column.matches(&row(0, None), 1));
    }

    #[test]
    fn enum_display_uses_labels_and_falls_back_to_code() {
        let column = ColumnDef::enumeration("Level", "level", LEVELS, level);
        assert_eq!(column.display_text(&row(1, None)), "High");
        assert_eq!(column.display_text(&row(9, None)), "9");
    }

    #[test]
    fn tags_display_sorted_with_prefix() {
        let column = ColumnDef::tags("Tags", "tags", "Period", tags);
        assert_eq!(
            column.display_text(&row(0, Some(vec![5, 1, 3]))),
            "Period 1, Period 3, Period 5"
        );
        assert_eq!(column.display_text(&row(0, None)), "-");
    }

    #[test]
    fn numbered_filter_is_single_select() {
        fn has(row: &Row, n: i64) -> bool {
            row.tags
                .as_ref()
                .is_some_and(|list| list.iter().any(|t| i64::from(*t) == n))
        }
        let column = ColumnDef::tags("Tags", "tags", "Period", tags)
            .filter(ColumnFilter::numbered("Period", 20, has));
        let filter = column.filter.as_ref().unwrap();

        assert!(!filter.multiple);
        assert_eq!(filter.options.len(), 20);
        assert_eq!(filter.options[0].label, "Period 1");
        assert_eq!(filter.options[19].label, "Period 20");
        assert!(column.matches(&row(0, Some(vec![2, 5])), 5));
        assert!(!column.matches(&row(0, None), 5));
    }

    #[test]
    fn builders_set_layout() {
        let column = ColumnDef::text("Name", "name", name)
            .fixed(FixedSide::Left)
            .width(150.0)
            .sorter(|a: &Row, b: &Row| a.name.cmp(&b.name));
        assert_eq!(column.fixed, Some(FixedSide::Left));
        assert_eq!(column.width, Some(150.0));
        assert!(column.is_sortable());
        assert!(!column.hide_in_search);

        let actions = ColumnDef::<Row>::actions("Actions", "option");
        assert!(actions.hide_in_search);
        assert_eq!(actions.display_text(&row(0, None)), "");
    }
}
