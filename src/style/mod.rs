//! Inline and pseudo-class styles for the input.
//!
//! Inline styles cover the resting state. Hover, focus, placeholder and
//! selection colors need selectors, so they go into a per-instance stylesheet
//! that is handed to the [`registry::StyleRegistry`].

pub mod registry;

use std::fmt::Display;

use itertools::Itertools;

use crate::config::{IconAlign, InputConfig};
use crate::slot::{Geometry, Icon, IconSlot};

/// DOM id of the input element for an instance id.
///
/// Characters outside `[A-Za-z0-9_-]` are replaced so the id can be used in a
/// CSS selector or a script string without escaping.
pub fn element_id(instance_id: &str) -> String {
    let sanitized: String = instance_id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '-' })
        .collect();
    format!("input-{sanitized}")
}

pub fn icon_id(element_id: &str) -> String {
    format!("{element_id}-icon")
}

pub fn sheet_title(element_id: &str) -> String {
    format!("{element_id}-styles")
}

fn px(value: f64) -> String {
    format!("{value}px")
}

fn inset_border(width: f64, color: &str) -> String {
    format!("inset 0 0 0 {} {color}", px(width))
}

pub fn border_radius(config: &InputConfig) -> String {
    if config.is_mixed {
        let corners = &config.corners;
        [corners.top_left, corners.top_right, corners.bottom_right, corners.bottom_left]
            .into_iter()
            .map(px)
            .join(" ")
    } else {
        px(config.radius)
    }
}

/// Resting-state style of the `<input>`, rendered as a `style` attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct InputStyle {
    pub border_radius: String,
    pub box_shadow: String,
    pub geometry: Geometry,
    pub color: String,
    pub font_size: f64,
    pub background: String,
}

impl InputStyle {
    pub fn new(config: &InputConfig, slot: IconSlot<'_>) -> Self {
        Self {
            border_radius: border_radius(config),
            box_shadow: inset_border(config.border_width, &config.border_color),
            geometry: slot.geometry(config.h_padding, config.icon_margin),
            color: config.color.clone(),
            font_size: config.font_size,
            background: config.background_color.clone(),
        }
    }
}

impl Display for InputStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "position: absolute; width: 100%; height: 100%; box-sizing: border-box; \
             border-radius: {}; border: none; outline: none; box-shadow: {}; \
             text-indent: {}; padding-left: {}; padding-right: {}; \
             color: {}; font-size: {}; background: {};",
            self.border_radius,
            self.box_shadow,
            px(self.geometry.text_indent),
            px(self.geometry.padding_left),
            px(self.geometry.padding_right),
            self.color,
            px(self.font_size),
            self.background,
        )
    }
}

/// Style of the icon slot: vertically centered, `h_padding` away from `side`.
pub fn slot_style(icon: &Icon, side: IconAlign, h_padding: f64) -> String {
    let side = match side {
        IconAlign::Left => "left",
        IconAlign::Right => "right",
    };
    format!(
        "position: absolute; top: 50%; transform: translateY(-50%); {side}: {}; \
         width: {}; height: {}; display: flex; background: none;",
        px(h_padding),
        px(icon.width),
        px(icon.height),
    )
}

/// A single CSS rule.
#[derive(Debug, Clone, PartialEq)]
struct Rule {
    selectors: Vec<String>,
    declarations: Vec<(&'static str, String)>,
}

impl Rule {
    fn new(selector: impl Into<String>) -> Self {
        Self { selectors: vec![selector.into()], declarations: Vec::new() }
    }

    fn or(mut self, selector: impl Into<String>) -> Self {
        self.selectors.push(selector.into());
        self
    }

    fn set(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.declarations.push((property, value.into()));
        self
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} {{", self.selectors.iter().join(",\n"))?;
        for (property, value) in &self.declarations {
            writeln!(f, "  {property}: {value};")?;
        }
        write!(f, "}}")
    }
}

/// Stylesheet for everything inline styles cannot express.
///
/// Hover and focus overrides that are not configured fall back to the resting
/// values.
pub fn pseudo_styles(element_id: &str, config: &InputConfig) -> String {
    let id = format!("#{element_id}");
    let or_base = |value: &Option<String>, base: &String| value.as_ref().unwrap_or(base).clone();

    let hover_shadow = inset_border(
        config.border_width_hover.unwrap_or(config.border_width),
        config.border_color_hover.as_ref().unwrap_or(&config.border_color),
    );
    let focus_shadow = inset_border(
        config.border_width_focus.unwrap_or(config.border_width),
        config.border_color_focus.as_ref().unwrap_or(&config.border_color),
    );

    let mut rules = vec![
        Rule::new(format!("{id}::placeholder")).set("color", config.placeholder_color.clone()),
        Rule::new(format!("{id}:hover::placeholder"))
            .set("color", or_base(&config.placeholder_color_hover, &config.placeholder_color)),
        Rule::new(format!("{id}:focus::placeholder"))
            .set("color", or_base(&config.placeholder_color_focus, &config.placeholder_color)),
        Rule::new(format!("{id}:hover"))
            .set("box-shadow", format!("{hover_shadow} !important"))
            .set(
                "background",
                format!(
                    "{} !important",
                    or_base(&config.background_color_hover, &config.background_color)
                ),
            ),
        Rule::new(format!("{id}:focus"))
            .or(format!("{id}:focus:hover"))
            .set("box-shadow", format!("{focus_shadow} !important"))
            .set(
                "background",
                format!(
                    "{} !important",
                    or_base(&config.background_color_focus, &config.background_color)
                ),
            ),
        Rule::new(format!("#{}:hover", icon_id(element_id))).set(
            "cursor",
            if config.icon_action.is_none() { "default" } else { "pointer !important" },
        ),
    ];

    if config.selection_color.is_some() || config.selection_background_color.is_some() {
        let mut selection = Rule::new(format!("{id}::selection"));
        if let Some(color) = &config.selection_color {
            selection = selection.set("color", color.clone());
        }
        if let Some(background) = &config.selection_background_color {
            selection = selection.set("background-color", background.clone());
        }
        rules.push(selection);
    }

    rules.iter().join("\n")
}
