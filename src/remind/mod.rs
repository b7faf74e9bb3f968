pub mod command;
pub mod editor;
pub mod provider;
pub mod types;

pub use command::{DEFAULT_REMIND_BINARY, RemindCommand};
pub use editor::{DEFAULT_EDITOR, Editor, ExternalEditor};
pub use provider::{CollaboratorError, ReminderSource};
pub use types::{OutputFormat, RawEvent, SourceLocator};
