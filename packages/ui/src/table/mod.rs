//! # Generic data table
//!
//! [`DataTable`] renders any [`TableRow`] through a list of [`Column`]
//! descriptors. A column's cell is a [`Cell`]: either an accessor returning
//! text or a render function returning markup.
//!
//! Pagination is local by default (page size from `[table]` config, changeable
//! by the user). Passing [`ControlledPage`] hands paging to the caller instead.
//! Selection and page bookkeeping live in [`TableState`].

mod column;
mod component;
mod state;

pub use column::{Cell, Column, RowKey, TableRow};
pub use component::{ControlledPage, DataTable, DataTableProps};
pub use state::{mobile_columns, total_pages, PageInfo, TableState};
