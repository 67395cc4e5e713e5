use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;

use canvas_input::config::{ConfigError, FieldType, InputConfig};

/// Demo window for the canvas input widget
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// INI file with an [Input] section overriding the defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Instance id of the input, used for its element id and stylesheet
    #[arg(long, default_value = "demo")]
    pub id: String,

    /// Field type, overriding the config file
    #[arg(long, value_enum)]
    pub r#type: Option<FieldType>,

    /// Initial value of the field
    #[arg(long)]
    pub default_value: Option<String>,

    /// Placeholder text, overriding the config file
    #[arg(long)]
    pub placeholder: Option<String>,
}

impl Args {
    /// Builds the widget configuration: defaults, then the config file, then flags.
    pub fn input_config(&self) -> Result<InputConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => InputConfig::load(path)?,
            None => InputConfig::default(),
        };

        if let Some(r#type) = self.r#type {
            config.r#type = r#type;
        }
        if let Some(default_value) = &self.default_value {
            config.default_value = Some(default_value.clone());
        }
        if let Some(placeholder) = &self.placeholder {
            config.placeholder = placeholder.clone();
        }

        Ok(config)
    }
}

static ARGS: OnceLock<Args> = OnceLock::new();

pub fn get_args() -> &'static Args {
    ARGS.get_or_init(Args::parse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "canvas-input",
            "--type",
            "password",
            "--placeholder",
            "Password",
            "--default-value",
            "hunter2",
        ]);
        let config = args.input_config().unwrap();

        assert_eq!(args.id, "demo");
        assert_eq!(config.r#type, FieldType::Password);
        assert_eq!(config.placeholder, "Password");
        assert_eq!(config.default_value.as_deref(), Some("hunter2"));
        assert_eq!(config.width, 315.0);
    }

    #[test]
    fn flags_override_config_file() {
        let path = std::env::temp_dir().join(format!("canvas-input-{}.ini", std::process::id()));
        std::fs::write(&path, "[Input]\ntype = text\nplaceholder = Search\nwidth = 240\n").unwrap();

        let args = Args::parse_from([
            "canvas-input",
            "--config",
            path.to_str().unwrap(),
            "--type",
            "password",
        ]);
        let config = args.input_config();
        std::fs::remove_file(&path).unwrap();
        let config = config.unwrap();

        assert_eq!(config.r#type, FieldType::Password);
        assert_eq!(config.placeholder, "Search");
        assert_eq!(config.width, 240.0);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let args = Args::parse_from(["canvas-input", "--config", "/nonexistent/canvas-input.ini"]);
        assert!(matches!(args.input_config(), Err(ConfigError::Load(_))));
    }
}
