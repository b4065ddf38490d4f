use axum::Json;
use chrono::{DateTime, Local, SecondsFormat};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TimeResponse {
    pub time: String,
}

/// Current server-local wall-clock time, read fresh on every request.
pub async fn current_time() -> Json<TimeResponse> {
    Json(TimeResponse {
        time: render(Local::now()),
    })
}

fn render(instant: DateTime<Local>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Micros, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    #[test]
    fn renders_rfc3339_with_micros_and_offset() {
        let instant = FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2026, 10, 16, 9, 30, 12)
            .unwrap()
            .with_timezone(&Local);

        let rendered = render(instant);
        let parsed = DateTime::parse_from_rfc3339(&rendered).unwrap();

        assert_eq!(parsed.timestamp_micros(), instant.timestamp_micros());
        assert!(rendered.contains(".000000"));
    }
}
