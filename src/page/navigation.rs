#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationIntent {
    To(String),
    Back,
}

/// Receives router intents emitted by pages.
pub trait Navigator: Send + Sync {
    fn navigate(&self, intent: NavigationIntent);
}
