use crate::{REASON_TOKEN, RestartReason, TIME_TOKEN};

/// Human-readable countdown text, e.g. "10 seconds", "5 minutes",
/// "1 hour 30 minutes".
pub fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        return plural(seconds, "second");
    }

    if seconds < 3600 {
        return plural(seconds / 60, "minute");
    }

    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    if minutes > 0 {
        format!("{} {}", plural(hours, "hour"), plural(minutes, "minute"))
    } else {
        plural(hours, "hour")
    }
}

/// Substitute `{time}` and `{reason}` in a message template.
pub fn render_template(template: &str, seconds: Option<u64>, reason: RestartReason) -> String {
    let rendered = template.replace(REASON_TOKEN, reason.display_name());
    match seconds {
        Some(secs) => rendered.replace(TIME_TOKEN, &format_duration(secs)),
        None => rendered,
    }
}

fn plural(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}
