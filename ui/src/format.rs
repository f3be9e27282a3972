//! pt-BR display formatting for wire values.
//!
//! Projections carry dates as ISO-8601 strings (`YYYY-MM-DD`, optionally with
//! a time suffix); the views show them as `dd/mm/yyyy`. Missing or unparsable
//! values render as `-`, matching every detail field in the app.

/// Format an ISO date (or RFC 3339 timestamp) as `dd/mm/yyyy`.
pub fn format_date_br(iso: &str) -> String {
    let date_part = iso.split('T').next().unwrap_or_default();
    let mut parts = date_part.splitn(3, '-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(y), Some(m), Some(d))
            if y.len() == 4
                && m.len() == 2
                && d.len() == 2
                && [y, m, d].iter().all(|p| p.chars().all(|c| c.is_ascii_digit())) =>
        {
            format!("{d}/{m}/{y}")
        }
        _ => "-".to_string(),
    }
}

/// Like [`format_date_br`], for optional fields.
pub fn format_opt_date_br(iso: Option<&str>) -> String {
    iso.map(format_date_br).unwrap_or_else(|| "-".to_string())
}

/// Display placeholder for optional text fields.
pub fn or_dash(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => "-",
    }
}

/// CSS class for a member status badge, keyed by the status value.
pub fn status_class(status: &str) -> &'static str {
    match status {
        "Ativo" | "Aprovada(o)" => "status-badge status-active",
        "Inativo" => "status-badge status-inactive",
        _ => "status-badge status-other",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_dates_format_as_br() {
        assert_eq!(format_date_br("2024-03-05"), "05/03/2024");
    }

    #[test]
    fn timestamps_keep_only_the_date() {
        assert_eq!(format_date_br("2024-12-31T22:15:00+00:00"), "31/12/2024");
    }

    #[test]
    fn garbage_renders_as_dash() {
        assert_eq!(format_date_br(""), "-");
        assert_eq!(format_date_br("ontem"), "-");
        assert_eq!(format_date_br("2024-3-5"), "-");
    }

    #[test]
    fn optional_fields_fall_back_to_dash() {
        assert_eq!(format_opt_date_br(None), "-");
        assert_eq!(or_dash(None), "-");
        assert_eq!(or_dash(Some("  ")), "-");
        assert_eq!(or_dash(Some("Professor")), "Professor");
    }

    #[test]
    fn status_badges_map_by_value() {
        assert_eq!(status_class("Ativo"), "status-badge status-active");
        assert_eq!(status_class("Aprovada(o)"), "status-badge status-active");
        assert_eq!(status_class("Inativo"), "status-badge status-inactive");
        assert_eq!(status_class("Pendente"), "status-badge status-other");
    }
}
