use crate::view_model::AppViewModel;

/// Monotonic counter incremented on every index change. Viewport completion
/// signals carry the generation they were issued for; stale ones are dropped.
pub type Generation = u64;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    links: Vec<String>,
    current: Option<usize>,
    generation: Generation,
    loading: bool,
    copied: bool,
    copy_epoch: u64,
    input_text: String,
    notice: Option<String>,
    page_title: Option<String>,
    dirty: bool,
}

impl AppState {
    /// Builds the state from the immutable link list and the index restored
    /// from the client-local store. The restored value is clamped to the
    /// list bounds; an empty list leaves the index unset.
    pub fn new(links: Vec<String>, restored_index: usize) -> Self {
        let current = if links.is_empty() {
            None
        } else {
            Some(restored_index.min(links.len() - 1))
        };
        let input_text = match current {
            Some(index) => (index + 1).to_string(),
            None => String::new(),
        };
        Self {
            links,
            current,
            input_text,
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            total: self.links.len(),
            current_index: self.current,
            current_url: self.current_url().map(ToOwned::to_owned),
            page_title: self.page_title.clone(),
            input_text: self.input_text.clone(),
            loading: self.loading,
            copied: self.copied,
            notice: self.notice.clone(),
            can_step_back: self.current.is_some_and(|index| index > 0),
            can_step_forward: self
                .current
                .is_some_and(|index| index + 1 < self.links.len()),
            controls_enabled: self.current.is_some(),
            dirty: self.dirty,
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_url(&self) -> Option<&str> {
        self.current.and_then(|index| self.links.get(index)).map(String::as_str)
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.loading
    }

    pub(crate) fn copied(&self) -> bool {
        self.copied
    }

    pub(crate) fn copy_epoch(&self) -> u64 {
        self.copy_epoch
    }

    pub(crate) fn input_text(&self) -> &str {
        &self.input_text
    }

    pub(crate) fn set_input_text(&mut self, text: String) {
        self.input_text = text;
    }

    /// Resets the input box to mirror the current index (1-based).
    pub(crate) fn sync_input_text(&mut self) {
        self.input_text = match self.current {
            Some(index) => (index + 1).to_string(),
            None => String::new(),
        };
    }

    /// Moves to `index` and begins a new load generation.
    ///
    /// Caller has already validated the bounds.
    pub(crate) fn begin_load_at(&mut self, index: usize) {
        debug_assert!(index < self.links.len());
        self.current = Some(index);
        self.generation += 1;
        self.loading = true;
        self.page_title = None;
        self.sync_input_text();
    }

    pub(crate) fn finish_load(&mut self, title: Option<String>) {
        self.loading = false;
        self.page_title = title;
    }

    pub(crate) fn set_copied(&mut self, copied: bool) {
        self.copied = copied;
    }

    pub(crate) fn bump_copy_epoch(&mut self) -> u64 {
        self.copy_epoch += 1;
        self.copy_epoch
    }

    pub(crate) fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub(crate) fn set_notice(&mut self, notice: Option<String>) {
        self.notice = notice;
    }
}
