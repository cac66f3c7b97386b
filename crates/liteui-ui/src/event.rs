/// Callback shape for every element and for the tab-switch slot.
///
/// The payload is always the raw string the document sent; a slider handler
/// parses its own number.
pub type Handler = Box<dyn FnMut(&str)>;

/// Result returned by [`UiModel::dispatch`](crate::model::UiModel::dispatch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// A handler ran or the model acted on the event.
    Consumed,
    /// Nothing was registered for the id; the event was dropped.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
