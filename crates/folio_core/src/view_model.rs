#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    /// Length of the portfolio list.
    pub total: usize,
    /// Zero-based position, `None` when the list is empty.
    pub current_index: Option<usize>,
    pub current_url: Option<String>,
    /// Title extracted by the viewport for the current page, if observed.
    pub page_title: Option<String>,
    /// Text shown in the index box (1-based, may hold an unconfirmed draft).
    pub input_text: String,
    pub loading: bool,
    /// Copy button shows a checkmark while true.
    pub copied: bool,
    /// Non-blocking dismissable message, e.g. a failed clipboard write.
    pub notice: Option<String>,
    pub can_step_back: bool,
    pub can_step_forward: bool,
    /// False when the list is empty; the shell disables every control.
    pub controls_enabled: bool,
    pub dirty: bool,
}
