//! The [`Marker`] type — the content of a single grid cell.

use std::fmt;

/// What occupies a grid cell.
///
/// The integer codes are the ones used by the text and JSON grid formats.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "i32", into = "i32")
)]
#[repr(u8)]
pub enum Marker {
    #[default]
    Free = 0,
    Obstacle = 1,
    /// Annotates a solution path on an output grid.
    Path = 3,
}

/// An integer that is not a known [`Marker`] code.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown cell marker {0}")]
pub struct UnknownMarker(pub i32);

impl Marker {
    /// Integer code of this marker.
    #[inline]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Only free cells can be walked on.
    #[inline]
    pub const fn is_passable(self) -> bool {
        matches!(self, Self::Free)
    }
}

impl TryFrom<i32> for Marker {
    type Error = UnknownMarker;

    fn try_from(v: i32) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Self::Free),
            1 => Ok(Self::Obstacle),
            3 => Ok(Self::Path),
            other => Err(UnknownMarker(other)),
        }
    }
}

impl From<Marker> for i32 {
    fn from(m: Marker) -> Self {
        m.code()
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for m in [Marker::Free, Marker::Obstacle, Marker::Path] {
            assert_eq!(Marker::try_from(m.code()), Ok(m));
        }
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert_eq!(Marker::try_from(2), Err(UnknownMarker(2)));
        assert_eq!(Marker::try_from(-1), Err(UnknownMarker(-1)));
    }

    #[test]
    fn only_free_is_passable() {
        assert!(Marker::Free.is_passable());
        assert!(!Marker::Obstacle.is_passable());
        assert!(!Marker::Path.is_passable());
    }
}
