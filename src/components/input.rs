use dioxus::prelude::*;
use futures_timer::Delay;

use crate::config::InputConfig;
use crate::field::{self, DomField, FieldHandle, SelectTimer, SELECT_DELAY};
use crate::slot::IconSlot;
use crate::style::registry::StyleRegistry;
use crate::style::{self, InputStyle};

#[derive(PartialEq, Props, Clone)]
pub struct InputProps {
    /// Tags the element and its stylesheet. Inputs sharing an id share one sheet.
    #[props(into)]
    id: String,
    #[props(default)]
    config: InputConfig,
    /// Whether a password field starts out revealed.
    #[props(default)]
    revealed: bool,
    on_press_enter: Option<EventHandler<String>>,
    on_value_change: Option<EventHandler<String>>,
}

#[component]
pub fn Input(props: InputProps) -> Element {
    let element_id = style::element_id(&props.id);

    let value = use_signal(|| props.config.default_value.clone().unwrap_or_default());
    let mut password_is_readable = use_signal(|| props.revealed);
    let mut timer = use_signal(SelectTimer::default);
    let mut pending = use_signal(|| None::<Task>);

    let title = style::sheet_title(&element_id);
    // Inputs outside a `StyleHost` share the registry at the root of the app.
    let root_registry = use_root_context(|| {
        Signal::new_in_scope(StyleRegistry::default(), ScopeId::ROOT)
    });
    let mut registry = try_use_context::<Signal<StyleRegistry>>().unwrap_or(root_registry);

    // Pseudo-class rules are computed once, when the input mounts.
    let holder = use_hook(|| {
        let sheet = style::pseudo_styles(&element_id, &props.config);
        registry.write().register(title.clone(), sheet).holder
    });

    use_drop({
        let title = title.clone();
        move || {
            if let Ok(mut registry) = registry.try_write() {
                registry.release(&title, holder);
            }
        }
    });

    let onkeydown = {
        let config = props.config.clone();
        let on_press_enter = props.on_press_enter;
        let mut dom = DomField::new(element_id.clone(), value);
        move |event: KeyboardEvent| {
            field::press_key(&mut dom, &event.key(), event.is_composing(), &config, |text| {
                if let Some(handler) = on_press_enter {
                    handler.call(text);
                }
            });
        }
    };

    let oninput = {
        let on_value_change = props.on_value_change;
        let mut dom = DomField::new(element_id.clone(), value);
        move |event: FormEvent| {
            field::change(&mut dom, event.value(), |text| {
                if let Some(handler) = on_value_change {
                    handler.call(text);
                }
            });
        }
    };

    let onfocus = {
        let config = props.config.clone();
        let dom = DomField::new(element_id.clone(), value);
        move |_: FocusEvent| {
            if !field::selects_on_focus(&dom, &config) {
                return;
            }

            let ticket = timer.write().arm();
            let mut dom = dom.clone();
            let task = spawn(async move {
                Delay::new(SELECT_DELAY).await;
                if timer.write().fire(ticket) {
                    dom.select_all();
                }
            });

            if let Some(previous) = pending.write().replace(task) {
                previous.cancel();
            }
        }
    };

    let onblur = move |_: FocusEvent| {
        timer.write().disarm();
        if let Some(task) = pending.write().take() {
            task.cancel();
        }
    };

    let onclick_icon = {
        let config = props.config.clone();
        let mut dom = DomField::new(element_id.clone(), value);
        move |_: MouseEvent| {
            let mut readable = password_is_readable();
            field::click_slot(&mut dom, IconSlot::resolve(&config), &mut readable);
            if readable != password_is_readable() {
                password_is_readable.set(readable);
            }
        }
    };

    let config = &props.config;
    let slot = IconSlot::resolve(config);
    let input_style = InputStyle::new(config, slot).to_string();
    let input_type = field::effective_type(config.r#type, password_is_readable()).to_string();
    let width = format!("{}px", config.width);
    let height = format!("{}px", config.height);
    let tab_index = config.tab_index.to_string();
    let owned_css = registry.read().owned_css(&title, holder).map(str::to_owned);
    let sheet = owned_css.map(|css| {
        rsx! {
            style { title: title, {css} }
        }
    });

    let icon = match (slot.icon(password_is_readable()), slot.side()) {
        (Some(icon), Some(side)) => {
            let slot_style = style::slot_style(icon, side, config.h_padding);
            Some(rsx! {
                div {
                    id: style::icon_id(&element_id),
                    style: slot_style,
                    onclick: onclick_icon,
                    img {
                        src: icon.src.as_str(),
                        width: icon.width.to_string(),
                        height: icon.height.to_string(),
                        draggable: "false",
                    }
                }
            })
        }
        _ => None,
    };

    rsx! {
        div {
            position: "relative",
            width: width,
            height: height,
            background: "none",
            {sheet}
            input {
                id: element_id.as_str(),
                type: input_type,
                placeholder: config.placeholder.as_str(),
                tabindex: tab_index,
                value: value.cloned(),
                style: input_style,
                onkeydown: onkeydown,
                oninput: oninput,
                onfocus: onfocus,
                onblur: onblur
            }
            {icon}
        }
    }
}
