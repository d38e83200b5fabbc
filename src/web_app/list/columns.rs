// web_app/list/columns.rs - Column descriptors
//
// Columns are fixed for the lifetime of a list. Each one extracts a
// comparable cell value from a row and optionally formats it.

use std::fmt;
use std::sync::Arc;

use super::sort::SortDirection;

/// A comparable, displayable cell value
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum CellValue {
    Empty,
    Bool(bool),
    Number(i64),
    Text(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(true) => write!(f, "Yes"),
            CellValue::Bool(false) => write!(f, "No"),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<Option<String>> for CellValue {
    fn from(value: Option<String>) -> Self {
        value.map(CellValue::Text).unwrap_or(CellValue::Empty)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value)
    }
}

type Accessor<T> = Arc<dyn Fn(&T) -> CellValue + Send + Sync>;
type Renderer<T> = Arc<dyn Fn(&CellValue, &T) -> String + Send + Sync>;
type BadgeVariant<T> = Arc<dyn Fn(&CellValue, &T) -> &'static str + Send + Sync>;

/// How one column reads, labels, sorts and renders a row
pub struct ColumnDescriptor<T> {
    /// Stable field name, used to address the column when sorting
    pub field: &'static str,
    /// Header text
    pub label: String,
    pub sortable: bool,
    accessor: Accessor<T>,
    render: Option<Renderer<T>>,
    badge: Option<BadgeVariant<T>>,
}

impl<T> ColumnDescriptor<T> {
    pub fn new<F>(field: &'static str, label: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&T) -> CellValue + Send + Sync + 'static,
    {
        Self {
            field,
            label: label.into(),
            sortable: false,
            accessor: Arc::new(accessor),
            render: None,
            badge: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Custom cell formatting; receives the extracted value and the row
    pub fn render_with<F>(mut self, render: F) -> Self
    where
        F: Fn(&CellValue, &T) -> String + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    /// Draw the cell as a badge; `variant` picks its color
    pub fn badge<F>(mut self, variant: F) -> Self
    where
        F: Fn(&CellValue, &T) -> &'static str + Send + Sync + 'static,
    {
        self.badge = Some(Arc::new(variant));
        self
    }

    pub fn badge_variant(&self, row: &T) -> Option<&'static str> {
        let variant = self.badge.as_ref()?;
        Some(variant(&self.value(row), row))
    }

    pub fn value(&self, row: &T) -> CellValue {
        (self.accessor)(row)
    }

    pub fn display(&self, row: &T) -> String {
        let value = self.value(row);
        match &self.render {
            Some(render) => render(&value, row),
            None => value.to_string(),
        }
    }

    /// `aria-label` for the header's sort button
    pub fn sort_aria_label(&self, current: Option<SortDirection>) -> String {
        let next = current.map(SortDirection::toggled).unwrap_or_default();
        format!("Sort by {} {}", self.label, next)
    }
}

impl<T> Clone for ColumnDescriptor<T> {
    fn clone(&self) -> Self {
        Self {
            field: self.field,
            label: self.label.clone(),
            sortable: self.sortable,
            accessor: Arc::clone(&self.accessor),
            render: self.render.clone(),
            badge: self.badge.clone(),
        }
    }
}

impl<T> fmt::Debug for ColumnDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("field", &self.field)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("custom_render", &self.render.is_some())
            .field("badge", &self.badge.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: String,
        enabled: bool,
    }

    #[test]
    fn test_cell_value_ordering() {
        assert!(CellValue::Empty < CellValue::Bool(false));
        assert!(CellValue::Number(2) < CellValue::Number(10));
        assert!(CellValue::from("a") < CellValue::from("b"));
    }

    #[test]
    fn test_default_display() {
        let column = ColumnDescriptor::new("enabled", "Enabled", |r: &Row| r.enabled.into());
        let row = Row {
            name: "Resident".to_string(),
            enabled: true,
        };
        assert_eq!(column.display(&row), "Yes");
        assert!(!column.sortable);
    }

    #[test]
    fn test_custom_render_sees_value_and_row() {
        let column = ColumnDescriptor::new("name", "Name", |r: &Row| r.name.clone().into())
            .sortable()
            .render_with(|value, row: &Row| {
                if row.enabled {
                    format!("{} (active)", value)
                } else {
                    value.to_string()
                }
            });
        let row = Row {
            name: "Keycloak".to_string(),
            enabled: true,
        };
        assert_eq!(column.display(&row), "Keycloak (active)");
        assert!(column.sortable);
    }

    #[test]
    fn test_badge_variant_follows_value() {
        let column = ColumnDescriptor::new("enabled", "Status", |r: &Row| r.enabled.into())
            .render_with(|value, _: &Row| match value {
                CellValue::Bool(true) => "Enabled".to_string(),
                _ => "Disabled".to_string(),
            })
            .badge(|value, _| match value {
                CellValue::Bool(true) => "green",
                _ => "gray",
            });
        let off = Row {
            name: "Auth0".to_string(),
            enabled: false,
        };
        assert_eq!(column.badge_variant(&off), Some("gray"));
        assert_eq!(column.display(&off), "Disabled");

        let plain = ColumnDescriptor::new("name", "Name", |r: &Row| r.name.clone().into());
        assert_eq!(plain.badge_variant(&off), None);
    }

    #[test]
    fn test_sort_aria_label() {
        let column = ColumnDescriptor::new("name", "Name", |r: &Row| r.name.clone().into());
        assert_eq!(column.sort_aria_label(None), "Sort by Name ascending");
        assert_eq!(
            column.sort_aria_label(Some(SortDirection::Ascending)),
            "Sort by Name descending"
        );
    }
}
