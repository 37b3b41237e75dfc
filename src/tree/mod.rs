/// Directory tree domain layer: listing, text rendering, building, flattening.
pub mod build;
pub mod entry;
pub mod errors;
pub mod flatten;
pub mod options;
pub mod printer;

pub use build::{Node, build_tree};
pub use entry::{EntryKind, trim_path, validate_root};
pub use errors::TreeError;
pub use flatten::{FlatEntry, flatten};
pub use options::{ErrorPolicy, WalkOptions};
pub use printer::write_tree;
