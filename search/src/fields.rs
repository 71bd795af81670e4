use std::fmt;

/// Maps a strongly-typed entity field to the backend's wire name.
///
/// Entity crates derive one enum per entity and implement this trait; the
/// compiler itself only ever sees the wire names.
pub trait SearchField: Copy {
    fn wire_name(self) -> &'static str;

    fn asc(self) -> SortKey {
        SortKey {
            field: self.wire_name(),
            dir: SortDir::Asc,
        }
    }

    fn desc(self) -> SortKey {
        SortKey {
            field: self.wire_name(),
            dir: SortDir::Desc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

/// One element of a sort expression; renders as `CODE` or `-CODE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: &'static str,
    pub dir: SortDir,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.dir {
            SortDir::Asc => write!(f, "{}", self.field),
            SortDir::Desc => write!(f, "-{}", self.field),
        }
    }
}
