pub const DEFAULT_ITEMS_PER_PAGE: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    total_items: usize,
    items_per_page: usize,
    current_page: usize,
}

impl Paginator {
    pub fn new(total_items: usize, items_per_page: usize) -> Self {
        Self {
            total_items,
            items_per_page: items_per_page.max(1),
            current_page: 1,
        }
    }

    pub fn with_default_page_size(total_items: usize) -> Self {
        Self::new(total_items, DEFAULT_ITEMS_PER_PAGE)
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.items_per_page)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Clamps `page` into `1..=total_pages`; with zero pages the result is 1.
    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page.min(self.total_pages()).max(1);
    }

    pub fn next_page(&mut self) {
        if self.has_next_page() {
            self.current_page += 1;
        }
    }

    pub fn previous_page(&mut self) {
        if self.has_previous_page() {
            self.current_page -= 1;
        }
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    pub fn start_index(&self) -> usize {
        (self.current_page - 1) * self.items_per_page
    }

    pub fn end_index(&self) -> usize {
        self.start_index() + self.items_per_page
    }

    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.start_index().min(items.len());
        let end = self.end_index().min(items.len());
        &items[start..end]
    }
}
