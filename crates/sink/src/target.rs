//! crates/sink/src/target.rs
//! Classification of the destination behind an [`Output`](crate::Output).

use std::fmt;

/// Describes which kind of destination an [`Output`](crate::Output) writes to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum OutputTarget {
    /// The process standard output stream.
    Stdout,
    /// The process standard error stream.
    Stderr,
    /// A caller-supplied writer.
    Writer,
}

impl OutputTarget {
    /// Returns a short lowercase label for the target.
    ///
    /// ```
    /// use sink::OutputTarget;
    ///
    /// assert_eq!(OutputTarget::Stdout.as_str(), "stdout");
    /// assert_eq!(OutputTarget::Writer.as_str(), "writer");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
            Self::Writer => "writer",
        }
    }

    /// Reports whether the target is one of the process standard streams.
    #[must_use]
    pub const fn is_standard_stream(self) -> bool {
        matches!(self, Self::Stdout | Self::Stderr)
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
