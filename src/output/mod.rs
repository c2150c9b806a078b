pub mod human;
pub mod json;

use serde::Serialize;

use json::JsonEnvelope;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

/// A command result that can be shown to a person or emitted as JSON.
pub trait CommandOutput: Serialize {
    fn human_display(&self) -> String;
}

/// Render a command output in the requested format.
pub fn format_output<T: CommandOutput>(output: &T, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => output.human_display(),
        OutputFormat::Json => match serde_json::to_string_pretty(&JsonEnvelope::success(output)) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("failed to serialize output: {e}");
                serde_json::to_string_pretty(&JsonEnvelope::<()>::error(e.to_string()))
                    .unwrap_or_default()
            }
        },
    }
}

/// Print a command output in the requested format.
pub fn print_output<T: CommandOutput>(output: &T, format: OutputFormat) {
    println!("{}", format_output(output, format));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Count {
        live: usize,
    }

    impl CommandOutput for Count {
        fn human_display(&self) -> String {
            format!("{} live recipes", self.live)
        }
    }

    #[test]
    fn test_human_format() {
        assert_eq!(
            format_output(&Count { live: 3 }, OutputFormat::Human),
            "3 live recipes"
        );
    }

    #[test]
    fn test_json_format_is_enveloped() {
        let text = format_output(&Count { live: 3 }, OutputFormat::Json);
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["ok"], true);
        assert_eq!(json["data"]["live"], 3);
        assert!(json.get("error").is_none());
    }
}
