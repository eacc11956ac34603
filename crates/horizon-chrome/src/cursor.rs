//! Cursor hints reported to the host while hovering the chrome.

use cursor_icon::CursorIcon;

use crate::resize::ResizeDirection;

/// The cursor the host should display for the current pointer position.
///
/// The chrome only ever asks for the default cursor or one of the four
/// resize cursors; everything else is up to the host's widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CursorHint {
    /// The platform default arrow.
    #[default]
    Default,
    /// North/south resize.
    ResizeVertical,
    /// East/west resize.
    ResizeHorizontal,
    /// Northwest/southeast diagonal resize.
    ResizeNwSe,
    /// Northeast/southwest diagonal resize.
    ResizeNeSw,
}

impl CursorHint {
    /// The cursor for a resize direction (`None` meaning no resize).
    pub fn for_direction(direction: Option<ResizeDirection>) -> Self {
        match direction {
            None => Self::Default,
            Some(ResizeDirection::North | ResizeDirection::South) => Self::ResizeVertical,
            Some(ResizeDirection::East | ResizeDirection::West) => Self::ResizeHorizontal,
            Some(ResizeDirection::NorthWest | ResizeDirection::SouthEast) => Self::ResizeNwSe,
            Some(ResizeDirection::NorthEast | ResizeDirection::SouthWest) => Self::ResizeNeSw,
        }
    }

    /// Convert to the standard cursor icon understood by winit.
    pub fn to_cursor_icon(self) -> CursorIcon {
        match self {
            Self::Default => CursorIcon::Default,
            Self::ResizeVertical => CursorIcon::NsResize,
            Self::ResizeHorizontal => CursorIcon::EwResize,
            Self::ResizeNwSe => CursorIcon::NwseResize,
            Self::ResizeNeSw => CursorIcon::NeswResize,
        }
    }

    /// Check if this is a resize cursor.
    pub fn is_resize_cursor(self) -> bool {
        self != Self::Default
    }
}

impl From<CursorHint> for CursorIcon {
    fn from(hint: CursorHint) -> Self {
        hint.to_cursor_icon()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_for_direction() {
        assert_eq!(CursorHint::for_direction(None), CursorHint::Default);
        assert_eq!(
            CursorHint::for_direction(Some(ResizeDirection::North)),
            CursorHint::ResizeVertical
        );
        assert_eq!(
            CursorHint::for_direction(Some(ResizeDirection::South)),
            CursorHint::ResizeVertical
        );
        assert_eq!(
            CursorHint::for_direction(Some(ResizeDirection::East)),
            CursorHint::ResizeHorizontal
        );
        assert_eq!(
            CursorHint::for_direction(Some(ResizeDirection::West)),
            CursorHint::ResizeHorizontal
        );
        assert_eq!(
            CursorHint::for_direction(Some(ResizeDirection::NorthWest)),
            CursorHint::ResizeNwSe
        );
        assert_eq!(
            CursorHint::for_direction(Some(ResizeDirection::SouthEast)),
            CursorHint::ResizeNwSe
        );
        assert_eq!(
            CursorHint::for_direction(Some(ResizeDirection::NorthEast)),
            CursorHint::ResizeNeSw
        );
        assert_eq!(
            CursorHint::for_direction(Some(ResizeDirection::SouthWest)),
            CursorHint::ResizeNeSw
        );
    }

    #[test]
    fn test_cursor_icon_mapping() {
        assert_eq!(CursorHint::Default.to_cursor_icon(), CursorIcon::Default);
        assert_eq!(CursorHint::ResizeVertical.to_cursor_icon(), CursorIcon::NsResize);
        assert_eq!(CursorHint::ResizeHorizontal.to_cursor_icon(), CursorIcon::EwResize);
        assert_eq!(CursorIcon::from(CursorHint::ResizeNwSe), CursorIcon::NwseResize);
        assert_eq!(CursorIcon::from(CursorHint::ResizeNeSw), CursorIcon::NeswResize);
    }

    #[test]
    fn test_is_resize_cursor() {
        assert!(!CursorHint::Default.is_resize_cursor());
        assert!(CursorHint::ResizeNeSw.is_resize_cursor());
    }
}
