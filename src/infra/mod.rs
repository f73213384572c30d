//! File emission, snapshot loading, frontmatter rendering

mod dry_run;
mod emitter;
mod format;
mod frontmatter;
mod fs;
mod source;

pub use dry_run::{DryRunEmitter, Operation};
pub use emitter::{EmitError, Emitter, Scoped};
pub use format::{DataFormat, FormatError};
pub use frontmatter::render_document;
pub use fs::FsEmitter;
pub use source::{ContentSource, SnapshotError, SnapshotFile};
