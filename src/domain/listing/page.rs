//! Page envelope assembly

use super::filter::FilterSet;
use super::request::ListRequest;
use super::sort::{SortField, SortSpec};

/// What the pagination executor reads in one snapshot: one page of items and
/// the total number of matching records.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlice<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> PageSlice<T> {
    pub fn new(items: Vec<T>, total: u64) -> Self {
        Self { items, total }
    }
}

/// One page of results plus paging, sort and filter metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T, F, S> {
    pub content: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
    pub sort: SortSpec<F>,
    pub filters: S,
}

impl<T, F: SortField, S: FilterSet> Page<T, F, S> {
    pub fn assemble(request: ListRequest<F, S>, slice: PageSlice<T>) -> Self {
        Self {
            content: slice.items,
            page: request.page,
            size: request.size,
            total_elements: slice.total,
            total_pages: total_pages(slice.total, request.size),
            sort: request.sort,
            filters: request.filters,
        }
    }
}

/// `ceil(total / size)`; zero when there is nothing to page through.
pub fn total_pages(total: u64, size: u64) -> u64 {
    if size == 0 {
        return 0;
    }
    total.div_ceil(size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::listing::request::{ListDefaults, PageParams};
    use crate::domain::listing::sort::SortDirection;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Field {
        Name,
    }

    impl SortField for Field {
        const ALLOWED: &'static [Self] = &[Self::Name];
        const PRIMARY: Self = Self::Name;

        fn as_str(self) -> &'static str {
            "name"
        }
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Region(Option<String>);

    impl FilterSet for Region {
        type Predicate = String;

        fn predicates(&self) -> Vec<String> {
            self.0.clone().into_iter().collect()
        }
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(99, 1), 99);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn assemble_copies_request_metadata() {
        let request = ListRequest::normalize(
            PageParams {
                page: Some(1),
                size: Some(2),
                sort: Some("name,DESC".into()),
            },
            Region(Some("UK-GB-L".into())),
            &ListDefaults::<Field>::default(),
        )
        .unwrap();

        let page = Page::assemble(request, PageSlice::new(vec!["c", "d"], 5));

        assert_eq!(page.content, vec!["c", "d"]);
        assert_eq!(page.page, 1);
        assert_eq!(page.size, 2);
        assert_eq!(page.total_elements, 5);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.sort, SortSpec::new(Field::Name, SortDirection::Desc));
        assert_eq!(page.filters, Region(Some("UK-GB-L".into())));
    }

    #[test]
    fn empty_store_yields_zero_pages() {
        let request = ListRequest::normalize(
            PageParams::default(),
            Region::default(),
            &ListDefaults::<Field>::default(),
        )
        .unwrap();
        let page: Page<u8, _, _> = Page::assemble(request, PageSlice::new(vec![], 0));
        assert!(page.content.is_empty());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.filters, Region(None));
    }
}
