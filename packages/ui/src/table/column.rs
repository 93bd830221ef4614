use std::fmt;
use std::rc::Rc;

use api::{Agent, AgentReport, Manager, Notification};
use dioxus::prelude::*;

/// A record that can be shown in a [`DataTable`](super::DataTable).
pub trait TableRow: Clone + PartialEq + 'static {
    /// Unique key of the row, used for selection and list diffing.
    fn row_key(&self) -> String;
}

impl TableRow for Agent {
    fn row_key(&self) -> String {
        self.id.clone()
    }
}

impl TableRow for Manager {
    fn row_key(&self) -> String {
        self.id.clone()
    }
}

impl TableRow for AgentReport {
    fn row_key(&self) -> String {
        self.agent_id.clone()
    }
}

impl TableRow for Notification {
    fn row_key(&self) -> String {
        self.id.to_string()
    }
}

/// How a column produces its cell.
pub enum Cell<T> {
    /// Plain text derived from the row.
    Accessor(Rc<dyn Fn(&T) -> String>),
    /// Arbitrary markup derived from the row.
    Render(Rc<dyn Fn(&T) -> Element>),
}

impl<T> Clone for Cell<T> {
    fn clone(&self) -> Self {
        match self {
            Cell::Accessor(f) => Cell::Accessor(f.clone()),
            Cell::Render(f) => Cell::Render(f.clone()),
        }
    }
}

impl<T> PartialEq for Cell<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Cell::Accessor(a), Cell::Accessor(b)) => Rc::ptr_eq(a, b),
            (Cell::Render(a), Cell::Render(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Column descriptor.
pub struct Column<T> {
    pub key: String,
    pub header: String,
    /// `None` renders an empty cell.
    pub cell: Option<Cell<T>>,
    pub hide_on_mobile: bool,
}

impl<T> Column<T> {
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            cell: None,
            hide_on_mobile: false,
        }
    }

    pub fn accessor(mut self, f: impl Fn(&T) -> String + 'static) -> Self {
        self.cell = Some(Cell::Accessor(Rc::new(f)));
        self
    }

    pub fn render(mut self, f: impl Fn(&T) -> Element + 'static) -> Self {
        self.cell = Some(Cell::Render(Rc::new(f)));
        self
    }

    pub fn hide_on_mobile(mut self) -> Self {
        self.hide_on_mobile = true;
        self
    }

    /// Text of the cell, for accessor columns.
    pub fn text(&self, row: &T) -> Option<String> {
        match &self.cell {
            Some(Cell::Accessor(f)) => Some(f(row)),
            _ => None,
        }
    }

    pub fn render_cell(&self, row: &T) -> Element {
        match &self.cell {
            Some(Cell::Accessor(f)) => {
                let text = f(row);
                rsx! { "{text}" }
            }
            Some(Cell::Render(f)) => f(row),
            None => rsx! {},
        }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            header: self.header.clone(),
            cell: self.cell.clone(),
            hide_on_mobile: self.hide_on_mobile,
        }
    }
}

impl<T> PartialEq for Column<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.header == other.header
            && self.hide_on_mobile == other.hide_on_mobile
            && self.cell == other.cell
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("hide_on_mobile", &self.hide_on_mobile)
            .finish_non_exhaustive()
    }
}

/// Per-table override of [`TableRow::row_key`].
pub struct RowKey<T>(pub Rc<dyn Fn(&T) -> String>);

impl<T> RowKey<T> {
    pub fn new(f: impl Fn(&T) -> String + 'static) -> Self {
        Self(Rc::new(f))
    }
}

impl<T> Clone for RowKey<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> PartialEq for RowKey<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent(id: &str, name: &str) -> Agent {
        Agent {
            id: id.into(),
            name: name.into(),
            email: format!("{id}@insure.rw"),
            phone_number: String::new(),
            national_id: String::new(),
            work_id: format!("AG{id}"),
            leader: false,
        }
    }

    #[test]
    fn test_accessor_text() {
        let column = Column::<Agent>::new("name", "Name").accessor(|a| a.name.to_uppercase());
        assert_eq!(column.text(&agent("1", "Kim")).as_deref(), Some("KIM"));
        assert_eq!(Column::<Agent>::new("x", "X").text(&agent("1", "Kim")), None);
    }

    #[test]
    fn test_clones_compare_equal() {
        let column = Column::<Agent>::new("name", "Name")
            .accessor(|a| a.name.clone())
            .hide_on_mobile();
        assert_eq!(column.clone(), column);
        let other = Column::<Agent>::new("name", "Name")
            .accessor(|a| a.name.clone())
            .hide_on_mobile();
        assert_ne!(column, other);
    }

    #[test]
    fn test_column_list_is_stable_only_when_built_once() {
        let build = || {
            vec![
                Column::<Agent>::new("name", "Name").accessor(|a| a.name.clone()),
                Column::<Agent>::new("id", "ID").accessor(|a| a.id.clone()),
            ]
        };
        let built = build();
        assert_eq!(built.clone(), built);
        assert_ne!(build(), build());
    }

    #[test]
    fn test_row_keys() {
        assert_eq!(agent("7", "Kim").row_key(), "7");
        let by_work_id = RowKey::new(|a: &Agent| a.work_id.clone());
        assert_eq!((by_work_id.0)(&agent("7", "Kim")), "AG7");
    }
}
