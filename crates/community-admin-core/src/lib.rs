//! Community Admin Core
//!
//! UI-independent state for the admin dashboard:
//! - hierarchy: organizational tree with per-node expand state
//! - list_view: filter, sort and paginate pipeline behind every table
//! - collection: id-keyed records with copy-on-write updates
//! - models / provider: dashboard records and the sample data source

pub mod collection;
pub mod config;
pub mod entity;
pub mod error;
pub mod hierarchy;
pub mod list_view;
pub mod models;
pub mod provider;
pub mod record;

pub use collection::IndexedCollection;
pub use config::DashboardConfig;
pub use entity::Entity;
pub use error::{CoreError, Result};
pub use hierarchy::{
    ExpandState, HierarchyNode, HierarchyTree, NodeIcon, NodeKind, VisibleRow, DEFAULT_EXPAND_DEPTH,
};
pub use list_view::{ListView, Page, SortDirection, SortSpec};
pub use provider::{DataProvider, SampleData};
pub use record::{FieldType, FieldValue, ListConfig, Record};
