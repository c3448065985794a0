/// A byte offset range into a loaded text file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// For diagnostics that point at no particular location
    /// (I/O failures, whole-file problems).
    pub fn dummy() -> Self {
        Self { start: 0, end: 0 }
    }
}
