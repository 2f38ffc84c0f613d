//! Local Code - a minimal source-code editor core
//!
//! The editor is split into a rule-table syntax highlighter ([`syntax`]) and
//! the plain pieces around it: a document store, literal find, file
//! operations, a process runner and the session tying them together.

pub mod buffer;
pub mod config;
pub mod error;
pub mod files;
pub mod render;
pub mod runner;
pub mod search;
pub mod session;
pub mod syntax;

pub use buffer::Document;
pub use config::Config;
pub use error::{EditorError, Result};
pub use search::{find, FindState};
pub use session::Session;
pub use syntax::{Category, Span, SyntaxManager};
