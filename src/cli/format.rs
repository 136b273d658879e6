//! Output formatting for CLI display.

use crate::config::OutputFormat;
use crate::model::{InfoMessage, Modality};

/// Render one workout summary in the requested format.
pub(super) fn format_info(info: &InfoMessage, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Text => Ok(info.get_message()),
        OutputFormat::Json => serde_json::to_string(info)
            .map_err(|e| format!("failed to serialize training info: {e}")),
    }
}

/// One line per workout type: code, label, and field order.
pub(super) fn format_codes() -> String {
    Modality::ALL
        .iter()
        .map(|m| format!("{}  {:<13}  {}", m.code(), m.label(), m.fields().join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info() -> InfoMessage {
        InfoMessage {
            training_type: "Running".to_string(),
            duration: 1.0,
            distance: 9.75,
            speed: 9.75,
            calories: 699.75,
        }
    }

    #[test]
    fn text_is_the_summary_line() {
        let text = format_info(&info(), OutputFormat::Text).unwrap();
        assert!(text.starts_with("Тип тренировки: Running;"));
    }

    #[test]
    fn json_is_a_single_object() {
        let json = format_info(&info(), OutputFormat::Json).unwrap();
        assert!(!json.contains('\n'));
        let back: InfoMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, info());
    }

    #[test]
    fn codes_list_every_workout_type() {
        let codes = format_codes();
        let lines: Vec<&str> = codes.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "SWM  Swimming       action, duration, weight, length_pool, count_pool"
        );
        assert_eq!(lines[1], "RUN  Running        action, duration, weight");
        assert_eq!(lines[2], "WLK  SportsWalking  action, duration, weight, height");
    }
}
