//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `init`: Create a new repository
//! - `log`: Render the commit graph as Graphviz
//! - `checkout`: Write the tree of a commit into an empty directory

pub mod checkout;
pub mod init;
pub mod log;
