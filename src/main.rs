mod args;

use std::sync::OnceLock;

use canvas_input::components::{Input, StyleHost};
use canvas_input::config::{FieldType, InputConfig};
use color_eyre::eyre::Result;
use dioxus::prelude::*;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static CONFIG: OnceLock<InputConfig> = OnceLock::new();

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = args::get_args();
    let config = args.input_config()?;
    let config = CONFIG.get_or_init(|| config);
    tracing::info!(id = %args.id, field_type = %config.r#type, "starting input demo");

    launch();
    Ok(())
}

#[cfg(feature = "desktop")]
fn launch() {
    use dioxus::desktop::{Config, WindowBuilder};

    dioxus::LaunchBuilder::new()
        .with_cfg(
            Config::default()
                .with_menu(None)
                .with_window(WindowBuilder::new().with_title("Canvas input")),
        )
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn launch() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = CONFIG.get().cloned().unwrap_or_default();
    let secure = config.r#type == FieldType::Password;
    let mut submitted = use_signal(|| None::<String>);

    let on_press_enter = move |value: String| {
        tracing::info!(chars = value.chars().count(), "value submitted");
        submitted.set(Some(value));
    };

    let on_value_change = move |value: String| {
        tracing::debug!(chars = value.chars().count(), "value changed");
    };

    let submitted_message = submitted().map(|value| {
        let shown = if secure { "•".repeat(value.chars().count()) } else { value };
        rsx!(p {
            text_align: "center",
            "Submitted: {shown}"
        })
    });

    rsx! {
        StyleHost {
            div {
                display: "flex",
                flex_direction: "column",
                align_items: "center",
                gap: "16px",
                padding: "32px",
                font_family: "sans-serif",
                Input {
                    id: args::get_args().id.as_str(),
                    config: config,
                    on_press_enter: on_press_enter,
                    on_value_change: on_value_change
                }
                {submitted_message}
            }
        }
    }
}
