//! Widget configuration.
//!
//! [`InputConfig`] replaces the property controls a design tool would normally
//! expose for the widget. Every option has a default, and [`InputConfig::load`]
//! can read overrides from an INI file with an `[Input]` section:
//!
//! ```ini
//! [Input]
//! type = password
//! placeholder = Password
//! border_color_focus = #09F
//! toggle_icons = "eye off.svg" eye.svg
//! ```

use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

use clap::ValueEnum;
use ini::{Ini, ParseOption, Properties};
use thiserror::Error;

use crate::slot::{Icon, ToggleIcons};

static SECTION: &str = "Input";

static DEFAULT_ICON_SIZE: f64 = 20.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config file")]
    Load(#[from] ini::Error),

    #[error("failed to parse config")]
    Parse(#[from] ini::ParseError),

    #[error("missing [Input] section in config")]
    MissingSection,

    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("failed to parse icon list {0:?}")]
    InvalidIconList(String),

    #[error("at most two password toggle icons are supported, got {0}")]
    TooManyToggleIcons(usize),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum)]
pub enum FieldType {
    #[default]
    Text,
    Password,
}

impl Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Password => write!(f, "password"),
        }
    }
}

impl FromStr for FieldType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "password" => Ok(Self::Password),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum IconAlign {
    #[default]
    Left,
    Right,
}

impl FromStr for IconAlign {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(()),
        }
    }
}

/// What clicking the single icon does.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum IconAction {
    #[default]
    None,
    Clear,
    Copy,
    Select,
}

impl IconAction {
    pub fn is_none(self) -> bool {
        self == Self::None
    }
}

impl From<&str> for IconAction {
    /// Unknown actions become [`IconAction::None`].
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "none" | "" => Self::None,
            "clear" => Self::Clear,
            "copy" => Self::Copy,
            "select" => Self::Select,
            other => {
                tracing::warn!(action = other, "unknown icon action, treating as none");
                Self::None
            }
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct CornerRadii {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_right: f64,
    pub bottom_left: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputConfig {
    pub width: f64,
    pub height: f64,
    pub h_padding: f64,
    pub font_size: f64,
    pub color: String,

    pub radius: f64,
    pub is_mixed: bool,
    pub corners: CornerRadii,

    pub border_width: f64,
    pub border_width_hover: Option<f64>,
    pub border_width_focus: Option<f64>,
    pub border_color: String,
    pub border_color_hover: Option<String>,
    pub border_color_focus: Option<String>,

    pub background_color: String,
    pub background_color_hover: Option<String>,
    pub background_color_focus: Option<String>,

    pub placeholder: String,
    pub placeholder_color: String,
    pub placeholder_color_hover: Option<String>,
    pub placeholder_color_focus: Option<String>,

    pub selection_color: Option<String>,
    pub selection_background_color: Option<String>,

    pub r#type: FieldType,
    pub tab_index: i32,
    pub default_value: Option<String>,
    /// Empty the field after Enter.
    pub clear: bool,
    /// Drop focus after Enter.
    pub blur: bool,
    /// Select the existing value when the field gains focus.
    pub select: bool,

    pub icon: Option<Icon>,
    pub toggle_icons: Option<ToggleIcons>,
    pub icon_align: IconAlign,
    pub icon_margin: f64,
    pub icon_action: IconAction,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            width: 315.0,
            height: 60.0,
            h_padding: 12.0,
            font_size: 14.0,
            color: "#000".to_owned(),

            radius: 8.0,
            is_mixed: false,
            corners: CornerRadii::default(),

            border_width: 2.0,
            border_width_hover: None,
            border_width_focus: None,
            border_color: "#CCC".to_owned(),
            border_color_hover: None,
            border_color_focus: None,

            background_color: "#FFF".to_owned(),
            background_color_hover: None,
            background_color_focus: None,

            placeholder: "Type here...".to_owned(),
            placeholder_color: "#222".to_owned(),
            placeholder_color_hover: None,
            placeholder_color_focus: None,

            selection_color: None,
            selection_background_color: None,

            r#type: FieldType::Text,
            tab_index: 0,
            default_value: None,
            clear: true,
            blur: false,
            select: true,

            icon: None,
            toggle_icons: None,
            icon_align: IconAlign::Left,
            icon_margin: 8.0,
            icon_action: IconAction::None,
        }
    }
}

impl InputConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_file_opt(path, parse_option())?;
        Self::from_ini(&ini)
    }

    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_str_opt(source, parse_option())?;
        Self::from_ini(&ini)
    }

    pub fn from_ini(ini: &Ini) -> Result<Self, ConfigError> {
        let section = ini.section(Some(SECTION)).ok_or(ConfigError::MissingSection)?;
        let mut config = Self::default();

        read(section, "width", &mut config.width)?;
        read(section, "height", &mut config.height)?;
        read(section, "h_padding", &mut config.h_padding)?;
        read(section, "font_size", &mut config.font_size)?;
        read(section, "color", &mut config.color)?;

        read(section, "radius", &mut config.radius)?;
        read(section, "is_mixed", &mut config.is_mixed)?;
        read(section, "top_left_radius", &mut config.corners.top_left)?;
        read(section, "top_right_radius", &mut config.corners.top_right)?;
        read(section, "bottom_right_radius", &mut config.corners.bottom_right)?;
        read(section, "bottom_left_radius", &mut config.corners.bottom_left)?;

        read(section, "border_width", &mut config.border_width)?;
        read_opt(section, "border_width_hover", &mut config.border_width_hover)?;
        read_opt(section, "border_width_focus", &mut config.border_width_focus)?;
        read(section, "border_color", &mut config.border_color)?;
        read_opt(section, "border_color_hover", &mut config.border_color_hover)?;
        read_opt(section, "border_color_focus", &mut config.border_color_focus)?;

        read(section, "background_color", &mut config.background_color)?;
        read_opt(section, "background_color_hover", &mut config.background_color_hover)?;
        read_opt(section, "background_color_focus", &mut config.background_color_focus)?;

        // An empty placeholder is meaningful, so it is read verbatim.
        if let Some(placeholder) = section.get("placeholder") {
            config.placeholder = placeholder.to_owned();
        }
        read(section, "placeholder_color", &mut config.placeholder_color)?;
        read_opt(section, "placeholder_color_hover", &mut config.placeholder_color_hover)?;
        read_opt(section, "placeholder_color_focus", &mut config.placeholder_color_focus)?;

        read_opt(section, "selection_color", &mut config.selection_color)?;
        read_opt(section, "selection_background_color", &mut config.selection_background_color)?;

        read(section, "type", &mut config.r#type)?;
        read(section, "tab_index", &mut config.tab_index)?;
        read_opt(section, "default_value", &mut config.default_value)?;
        read(section, "clear", &mut config.clear)?;
        read(section, "blur", &mut config.blur)?;
        read(section, "select", &mut config.select)?;

        read(section, "icon_align", &mut config.icon_align)?;
        read(section, "icon_margin", &mut config.icon_margin)?;
        if let Some(action) = section.get("icon_action") {
            config.icon_action = IconAction::from(action);
        }

        config.icon = read_icon(section)?;
        config.toggle_icons = read_toggle_icons(section)?;

        Ok(config)
    }
}

/// Quotes are left in place so `toggle_icons` can be split shell-style.
fn parse_option() -> ParseOption {
    ParseOption { enabled_quote: false, ..ParseOption::default() }
}

fn non_blank<'a>(section: &'a Properties, key: &str) -> Option<&'a str> {
    section.get(key).map(str::trim).filter(|value| !value.is_empty())
}

fn parse<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue { key, value: value.to_owned() })
}

/// Overwrites `target` when `key` is present and non-blank.
fn read<T: FromStr>(
    section: &Properties,
    key: &'static str,
    target: &mut T,
) -> Result<(), ConfigError> {
    if let Some(value) = non_blank(section, key) {
        *target = parse(key, value)?;
    }
    Ok(())
}

/// Like [`read`], but a blank value leaves the override unset.
fn read_opt<T: FromStr>(
    section: &Properties,
    key: &'static str,
    target: &mut Option<T>,
) -> Result<(), ConfigError> {
    if let Some(value) = non_blank(section, key) {
        *target = Some(parse(key, value)?);
    }
    Ok(())
}

fn icon_size(
    section: &Properties,
    width_key: &'static str,
    height_key: &'static str,
) -> Result<(f64, f64), ConfigError> {
    let mut width = DEFAULT_ICON_SIZE;
    let mut height = DEFAULT_ICON_SIZE;
    read(section, width_key, &mut width)?;
    read(section, height_key, &mut height)?;
    Ok((width, height))
}

fn read_icon(section: &Properties) -> Result<Option<Icon>, ConfigError> {
    let Some(src) = non_blank(section, "icon") else {
        return Ok(None);
    };
    let (width, height) = icon_size(section, "icon_width", "icon_height")?;
    Ok(Some(Icon::new(src, width, height)))
}

fn read_toggle_icons(section: &Properties) -> Result<Option<ToggleIcons>, ConfigError> {
    let Some(list) = non_blank(section, "toggle_icons") else {
        return Ok(None);
    };
    let paths = shlex::split(list).ok_or_else(|| ConfigError::InvalidIconList(list.to_owned()))?;
    let (width, height) = icon_size(section, "toggle_icon_width", "toggle_icon_height")?;
    let mut icons = paths.into_iter().map(|src| Icon::new(src, width, height));

    Ok(match (icons.next(), icons.next(), icons.len()) {
        (None, _, _) => None,
        (Some(only), None, _) => Some(ToggleIcons::One(only)),
        (Some(masked), Some(revealed), 0) => Some(ToggleIcons::Two { masked, revealed }),
        (Some(_), Some(_), rest) => return Err(ConfigError::TooManyToggleIcons(rest + 2)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = InputConfig::default();
        assert_eq!(config.width, 315.0);
        assert_eq!(config.height, 60.0);
        assert_eq!(config.border_width, 2.0);
        assert_eq!(config.border_color, "#CCC");
        assert_eq!(config.color, "#000");
        assert_eq!(config.placeholder, "Type here...");
        assert_eq!(config.placeholder_color, "#222");
        assert_eq!(config.font_size, 14.0);
        assert_eq!(config.h_padding, 12.0);
        assert_eq!(config.radius, 8.0);
        assert_eq!(config.background_color, "#FFF");
        assert!(config.clear);
        assert!(config.select);
        assert!(!config.blur);
        assert_eq!(config.r#type, FieldType::Text);
        assert_eq!(config.icon_margin, 8.0);
        assert_eq!(config.icon_action, IconAction::None);
        assert!(config.icon.is_none());
        assert!(config.toggle_icons.is_none());
    }

    #[test]
    fn parse_overrides_defaults() {
        let config = InputConfig::parse(
            "[Input]\n\
             type = Password\n\
             width = 200\n\
             is_mixed = true\n\
             top_left_radius = 4\n\
             border_color_focus = #09F\n\
             background_color_hover =\n\
             clear = false\n\
             tab_index = 3\n",
        )
        .unwrap();

        assert_eq!(config.r#type, FieldType::Password);
        assert_eq!(config.width, 200.0);
        assert!(config.is_mixed);
        assert_eq!(config.corners.top_left, 4.0);
        assert_eq!(config.border_color_focus.as_deref(), Some("#09F"));
        assert_eq!(config.background_color_hover, None);
        assert!(!config.clear);
        assert_eq!(config.tab_index, 3);
        assert_eq!(config.height, 60.0);
    }

    #[test]
    fn empty_placeholder_is_kept() {
        let config = InputConfig::parse("[Input]\nplaceholder =\n").unwrap();
        assert_eq!(config.placeholder, "");
    }

    #[test]
    fn missing_section_is_an_error() {
        let error = InputConfig::parse("[Other]\nwidth = 1\n").unwrap_err();
        assert!(matches!(error, ConfigError::MissingSection));
    }

    #[test]
    fn invalid_number_names_the_key() {
        let error = InputConfig::parse("[Input]\nheight = tall\n").unwrap_err();
        match error {
            ConfigError::InvalidValue { key, value } => {
                assert_eq!(key, "height");
                assert_eq!(value, "tall");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unknown_icon_action_is_none() {
        let config = InputConfig::parse("[Input]\nicon_action = launch\n").unwrap();
        assert_eq!(config.icon_action, IconAction::None);
        assert_eq!(IconAction::from("Copy"), IconAction::Copy);
    }

    #[test]
    fn icons_are_read_with_sizes() {
        let config = InputConfig::parse(
            "[Input]\n\
             icon = search.svg\n\
             icon_width = 16\n\
             toggle_icons = \"eye off.svg\" eye.svg\n\
             toggle_icon_height = 18\n",
        )
        .unwrap();

        assert_eq!(config.icon, Some(Icon::new("search.svg", 16.0, 20.0)));
        assert_eq!(
            config.toggle_icons,
            Some(ToggleIcons::Two {
                masked: Icon::new("eye off.svg", 20.0, 18.0),
                revealed: Icon::new("eye.svg", 20.0, 18.0),
            })
        );
    }

    #[test]
    fn single_toggle_icon() {
        let config = InputConfig::parse("[Input]\ntoggle_icons = eye.svg\n").unwrap();
        assert_eq!(config.toggle_icons, Some(ToggleIcons::One(Icon::new("eye.svg", 20.0, 20.0))));
    }

    #[test]
    fn three_toggle_icons_are_rejected() {
        let error = InputConfig::parse("[Input]\ntoggle_icons = a.svg b.svg c.svg\n").unwrap_err();
        assert!(matches!(error, ConfigError::TooManyToggleIcons(3)));
    }

    #[test]
    fn unbalanced_quotes_in_icon_list() {
        let error = InputConfig::parse("[Input]\ntoggle_icons = \"a.svg\n").unwrap_err();
        assert!(matches!(error, ConfigError::InvalidIconList(_)));
    }
}
