use core::str::Utf8Error;

/// A specialized `Result` type for piece table operations.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// The errors returned by the operations on a
/// [`PieceTable`](crate::PieceTable) and its [`PieceList`](crate::PieceList).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A rune offset past the end of the document.
    #[error(
        "Rune offset out of bounds: the offset is {offset} but the length is \
         {len}"
    )]
    OffsetOutOfBounds { offset: usize, len: usize },

    /// A rune range whose end is past the end of the document.
    #[error(
        "Rune range out of bounds: the end is {end} but the length is {len}"
    )]
    RangeOutOfBounds { end: usize, len: usize },

    /// An index past the end of a [`PieceList`](crate::PieceList).
    #[error(
        "Index out of bounds: the index is {index} but the length is {len}"
    )]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Cannot insert an empty string")]
    EmptyInsert,

    #[error("Cannot delete an empty range")]
    EmptyDelete,

    #[error("Invalid UTF-8: {0}")]
    InvalidUtf8(#[from] Utf8Error),

    /// The piece bookkeeping disagrees with itself. This is never caused by
    /// the caller's input.
    #[error("Internal inconsistency: {0}")]
    Inconsistency(&'static str),
}

/// The broad category an [`Error`] falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A position, range or index outside of the valid bounds.
    OutOfRange,

    /// An argument that's rejected regardless of the table's state.
    InvalidArgument,

    /// A bug in the piece bookkeeping.
    InternalInconsistency,
}

impl Error {
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::OffsetOutOfBounds { .. }
            | Self::RangeOutOfBounds { .. }
            | Self::IndexOutOfBounds { .. } => ErrorKind::OutOfRange,

            Self::EmptyInsert | Self::EmptyDelete | Self::InvalidUtf8(_) => {
                ErrorKind::InvalidArgument
            },

            Self::Inconsistency(_) => ErrorKind::InternalInconsistency,
        }
    }

    /// Builds an [`Error::Inconsistency`], logging it on the way out.
    #[inline]
    pub(crate) fn inconsistency(what: &'static str) -> Self {
        tracing::error!(what, "piece table bookkeeping is inconsistent");
        Self::Inconsistency(what)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        let out_of_range = [
            Error::OffsetOutOfBounds { offset: 3, len: 2 },
            Error::RangeOutOfBounds { end: 3, len: 2 },
            Error::IndexOutOfBounds { index: 3, len: 2 },
        ];
        for err in out_of_range {
            assert_eq!(ErrorKind::OutOfRange, err.kind());
        }

        assert_eq!(ErrorKind::InvalidArgument, Error::EmptyInsert.kind());
        assert_eq!(ErrorKind::InvalidArgument, Error::EmptyDelete.kind());

        assert_eq!(
            ErrorKind::InternalInconsistency,
            Error::Inconsistency("oops").kind()
        );
    }

    #[test]
    fn display() {
        let err = Error::OffsetOutOfBounds { offset: 10, len: 4 };
        assert_eq!(
            "Rune offset out of bounds: the offset is 10 but the length is 4",
            err.to_string()
        );

        let err = Error::RangeOutOfBounds { end: 7, len: 5 };
        assert_eq!(
            "Rune range out of bounds: the end is 7 but the length is 5",
            err.to_string()
        );
    }

    #[test]
    fn from_utf8_error() {
        let bytes = vec![b'a', 0xff];
        let utf8_err = core::str::from_utf8(&bytes).unwrap_err();
        let err = Error::from(utf8_err);
        assert!(matches!(err, Error::InvalidUtf8(_)));
        assert_eq!(ErrorKind::InvalidArgument, err.kind());
    }
}
