//! Searchable, sortable, paginated tables over in-memory records.
//!
//! The crate is split into a pure data pipeline and a small coordinator:
//!
//! - [`pipeline`]: the filter, sort and paginate stages. Each stage takes a
//!   [`RowSet`] (shared record indices) and produces a new one without ever
//!   touching the records themselves.
//! - [`TableView`]: owns the records and the [`TableState`], applies
//!   [`TableEvent`]s, and memoizes the stage results.
//! - [`Debouncer`]: collapses bursts of calls into one trailing call, used to
//!   throttle search input.
//!
//! # Example
//!
//! ```
//! use tablekit_lib::{Record, TableConfig, TableEvent, TableView};
//!
//! let records = vec![
//!     Record::new().set("id", 1).set("name", "Alice").set("age", 25),
//!     Record::new().set("id", 2).set("name", "bob").set("age", 30),
//! ];
//!
//! let mut view = TableView::new(records, &TableConfig::default());
//! view.apply(TableEvent::Query("bo".into())).unwrap();
//!
//! let page = view.page();
//! assert_eq!(page.indices(), &[1]);
//! assert_eq!(page.label(), "1 of 1");
//! ```

pub mod config;
pub mod debounce;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod state;
pub mod view;

mod memo;

pub use config::TableConfig;
pub use debounce::Debouncer;
pub use error::{LoadError, TableError};
pub use model::{Column, Record, Row, Value, load_records};
pub use pipeline::{RowSet, all_rows};
pub use state::{SortDirection, SortState, TableState};
pub use view::{Page, TableEvent, TableView};
