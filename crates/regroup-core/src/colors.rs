//! Terminal palette for pattern dumps.

/// ANSI escape codes, one per kind of dumped item.
///
/// The default palette is all empty strings, so uncolored output needs no
/// branching at the call site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Colors {
    /// Section headers such as `[names]`.
    pub section: &'static str,
    /// Pattern text, source or native.
    pub text: &'static str,
    /// Group occurrences.
    pub occurrence: &'static str,
    pub reset: &'static str,
}

impl Colors {
    pub const ON: Self = Self {
        section: "\x1b[34m",
        text: "\x1b[32m",
        occurrence: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        section: "",
        text: "",
        occurrence: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }
}
