use cn_core::clipboard::ClipboardEntry;

/// Push notifications for the presentation layer.
///
/// Delivered over a broadcast channel; subscribers that lag or disconnect
/// are ignored, the core never blocks on them.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A new clipboard entry was recorded, at most once per accepted change.
    ClipboardEntryRecorded { entry: ClipboardEntry },
}
