pub mod autosave;
pub mod board;
pub mod form;
pub mod progress;
pub mod tabs;

pub use autosave::AutosaveIndicator;
pub use board::BoardSection;
pub use form::ProfileFormView;
pub use progress::ProgressBar;
pub use tabs::SectionTabs;
