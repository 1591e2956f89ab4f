//! Generic paginated listing
//!
//! Shared by every listable entity:
//!
//! - `request`: normalizes raw page/size/sort input into a [`ListRequest`]
//! - `sort`: resolves sort expressions against a per-entity allow-list
//! - `filter`: turns typed filter slots into equality predicates
//! - `page`: assembles the [`Page`] envelope from a [`PageSlice`]
//!
//! Executing the page + count read is the store's job; see
//! `infrastructure::database::paging`.

pub mod filter;
pub mod page;
pub mod request;
pub mod sort;

pub use filter::{non_empty, FilterSet};
pub use page::{total_pages, Page, PageSlice};
pub use request::{ListDefaults, ListRequest, PageParams, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use sort::{SortDirection, SortField, SortSpec};
