pub mod build;
pub mod toc;
