//! Plain data types: the declarative table of contents, the notebook document, and the
//! roles a generated document can play.

pub mod notebook;
pub mod role;
pub mod toc;
