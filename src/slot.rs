//! The icon area next to the text.
//!
//! A field shows either a single decorative/actionable icon (text fields) or a
//! password visibility toggle (password fields), never both. [`IconSlot`]
//! resolves which one applies for the current configuration.

use crate::config::{FieldType, IconAction, IconAlign, InputConfig};

#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    pub src: String,
    pub width: f64,
    pub height: f64,
}

impl Icon {
    pub fn new(src: impl Into<String>, width: f64, height: f64) -> Self {
        Self { src: src.into(), width, height }
    }
}

/// Icons for the password visibility toggle.
#[derive(Debug, Clone, PartialEq)]
pub enum ToggleIcons {
    /// Shown in both states.
    One(Icon),
    Two { masked: Icon, revealed: Icon },
}

impl ToggleIcons {
    /// The icon that sizes the slot.
    pub fn first(&self) -> &Icon {
        match self {
            Self::One(icon) | Self::Two { masked: icon, .. } => icon,
        }
    }

    pub fn current(&self, password_is_readable: bool) -> &Icon {
        match self {
            Self::One(icon) => icon,
            Self::Two { masked, .. } if !password_is_readable => masked,
            Self::Two { revealed, .. } => revealed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IconSlot<'a> {
    None,
    Single { icon: &'a Icon, align: IconAlign, action: IconAction },
    PasswordToggle(&'a ToggleIcons),
}

/// Horizontal spacing of the text inside the field, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Geometry {
    pub text_indent: f64,
    pub padding_left: f64,
    pub padding_right: f64,
}

impl<'a> IconSlot<'a> {
    pub fn resolve(config: &'a InputConfig) -> Self {
        match config.r#type {
            FieldType::Password => {
                config.toggle_icons.as_ref().map_or(Self::None, Self::PasswordToggle)
            }
            FieldType::Text => config.icon.as_ref().map_or(Self::None, |icon| Self::Single {
                icon,
                align: config.icon_align,
                action: config.icon_action,
            }),
        }
    }

    /// Which edge of the field the slot sits on.
    pub fn side(self) -> Option<IconAlign> {
        match self {
            Self::None => None,
            Self::Single { align, .. } => Some(align),
            Self::PasswordToggle(_) => Some(IconAlign::Right),
        }
    }

    /// The icon to draw, given the current toggle state.
    pub fn icon(self, password_is_readable: bool) -> Option<&'a Icon> {
        match self {
            Self::None => None,
            Self::Single { icon, .. } => Some(icon),
            Self::PasswordToggle(icons) => Some(icons.current(password_is_readable)),
        }
    }

    /// Text spacing that keeps the text clear of the slot.
    pub fn geometry(self, h_padding: f64, icon_margin: f64) -> Geometry {
        let reserved = |icon: &Icon| h_padding + icon.width + icon_margin;

        match self {
            Self::None => Geometry { text_indent: h_padding, padding_left: 0.0, padding_right: h_padding },
            Self::Single { icon, align: IconAlign::Left, .. } => {
                Geometry { text_indent: 0.0, padding_left: reserved(icon), padding_right: h_padding }
            }
            Self::Single { icon, align: IconAlign::Right, .. } => {
                Geometry { text_indent: h_padding, padding_left: 0.0, padding_right: reserved(icon) }
            }
            Self::PasswordToggle(icons) => Geometry {
                text_indent: h_padding,
                padding_left: 0.0,
                padding_right: reserved(icons.first()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eye_icons() -> ToggleIcons {
        ToggleIcons::Two {
            masked: Icon::new("eye-off.svg", 24.0, 24.0),
            revealed: Icon::new("eye.svg", 20.0, 20.0),
        }
    }

    #[test]
    fn text_field_with_icon_uses_single_slot() {
        let config = InputConfig {
            icon: Some(Icon::new("search.svg", 16.0, 16.0)),
            icon_align: IconAlign::Right,
            icon_action: IconAction::Clear,
            toggle_icons: Some(eye_icons()),
            ..Default::default()
        };

        match IconSlot::resolve(&config) {
            IconSlot::Single { icon, align, action } => {
                assert_eq!(icon.src, "search.svg");
                assert_eq!(align, IconAlign::Right);
                assert_eq!(action, IconAction::Clear);
            }
            other => panic!("unexpected slot: {other:?}"),
        }
    }

    #[test]
    fn password_field_ignores_single_icon() {
        let config = InputConfig {
            r#type: FieldType::Password,
            icon: Some(Icon::new("search.svg", 16.0, 16.0)),
            ..Default::default()
        };
        assert_eq!(IconSlot::resolve(&config), IconSlot::None);
    }

    #[test]
    fn password_field_with_toggle_icons() {
        let config = InputConfig {
            r#type: FieldType::Password,
            toggle_icons: Some(eye_icons()),
            ..Default::default()
        };
        let slot = IconSlot::resolve(&config);
        assert!(matches!(slot, IconSlot::PasswordToggle(_)));
        assert_eq!(slot.side(), Some(IconAlign::Right));
    }

    #[test]
    fn two_toggle_icons_follow_state() {
        let icons = eye_icons();
        assert_eq!(icons.current(false).src, "eye-off.svg");
        assert_eq!(icons.current(true).src, "eye.svg");

        let one = ToggleIcons::One(Icon::new("eye.svg", 20.0, 20.0));
        assert_eq!(one.current(false), one.current(true));
    }

    #[test]
    fn geometry_without_icon() {
        let geometry = IconSlot::None.geometry(12.0, 8.0);
        assert_eq!(geometry, Geometry { text_indent: 12.0, padding_left: 0.0, padding_right: 12.0 });
    }

    #[test]
    fn geometry_reserves_space_on_icon_side() {
        let icon = Icon::new("search.svg", 16.0, 16.0);

        let left = IconSlot::Single { icon: &icon, align: IconAlign::Left, action: IconAction::None };
        assert_eq!(
            left.geometry(12.0, 8.0),
            Geometry { text_indent: 0.0, padding_left: 36.0, padding_right: 12.0 }
        );

        let right = IconSlot::Single { icon: &icon, align: IconAlign::Right, action: IconAction::None };
        assert_eq!(
            right.geometry(12.0, 8.0),
            Geometry { text_indent: 12.0, padding_left: 0.0, padding_right: 36.0 }
        );
    }

    #[test]
    fn toggle_geometry_uses_first_icon_width() {
        let icons = eye_icons();
        let geometry = IconSlot::PasswordToggle(&icons).geometry(10.0, 4.0);
        assert_eq!(geometry.padding_right, 38.0);
        assert_eq!(geometry.text_indent, 10.0);
    }
}
