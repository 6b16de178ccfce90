//! Bridge into the host note-taking application.

/// Navigation and link-opening services provided by the host application.
///
/// The canvas never navigates on its own; portal and link widgets delegate
/// through this trait so the host decides how pages and URLs open.
pub trait HostBridge {
    /// Navigate the host to a page.
    fn open_page(&self, name: &str);

    /// Open a page in the host's sidebar.
    fn open_page_in_sidebar(&self, name: &str);

    /// Open an external URL.
    fn open_external(&self, url: &str);
}
