//! ==============================================================================
//! calendar.rs - "schedule a conversation" deep link
//! ==============================================================================
//!
//! builds a google calendar event template for a one hour diagnostic session
//! tomorrow at 14:00 local time. pure string construction, nothing is sent
//! anywhere until the browser opens the link.
//!
//! ==============================================================================

use chrono::{DateTime, Duration, TimeZone, Utc};
use url::form_urlencoded;

pub const CONTACT_NAME: &str = "Anderson Garcia";
pub const CONTACT_EMAIL: &str = "angarciabr@gmail.com";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/angarciabr/";

const CALENDAR_BASE: &str = "https://calendar.google.com/calendar/render";
const MEETING_LOCATION: &str = "Online (Google Meet)";
const MEETING_HOUR: u32 = 14;

/// google calendar template link, optionally focused on one service
pub fn meeting_link<Tz: TimeZone>(service: Option<&str>, now: &DateTime<Tz>) -> String {
    let (start, end) = meeting_window(now);
    let dates = format!("{}/{}", calendar_stamp(start), calendar_stamp(end));

    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("action", "TEMPLATE")
        .append_pair("text", &meeting_title(service))
        .append_pair("dates", &dates)
        .append_pair("details", &meeting_description(service))
        .append_pair("location", MEETING_LOCATION)
        .append_pair("add", CONTACT_EMAIL)
        .finish();

    format!("{CALENDAR_BASE}?{query}")
}

/// tomorrow 14:00 to 15:00 in the caller's timezone, expressed in utc
fn meeting_window<Tz: TimeZone>(now: &DateTime<Tz>) -> (DateTime<Utc>, DateTime<Utc>) {
    let tomorrow = now.date_naive() + Duration::days(1);
    let start = tomorrow
        .and_hms_opt(MEETING_HOUR, 0, 0)
        .and_then(|local| now.timezone().from_local_datetime(&local).earliest())
        .map(|start| start.with_timezone(&Utc))
        // 14:00 falls in a dst gap; a day from now is close enough
        .unwrap_or_else(|| now.with_timezone(&Utc) + Duration::days(1));

    (start, start + Duration::hours(1))
}

fn calendar_stamp(at: DateTime<Utc>) -> String {
    at.format("%Y%m%dT%H%M%SZ").to_string()
}

fn meeting_title(service: Option<&str>) -> String {
    match service {
        Some(service) => format!("{service} - Diagnóstico Estratégico - {CONTACT_NAME}"),
        None => format!("Diagnóstico Estratégico - {CONTACT_NAME}"),
    }
}

fn meeting_description(service: Option<&str>) -> String {
    match service {
        Some(service) => format!(
            "Sessão de diagnóstico estratégico focada em {service}. Análise da estrutura \
             empresarial e identificação de oportunidades de melhoria. Duração: 1 hora. \
             Inclui: análise inicial da empresa, identificação de pontos críticos e \
             recomendações estratégicas específicas para {service}."
        ),
        None => "Sessão de diagnóstico estratégico para análise da estrutura empresarial e \
                 identificação de oportunidades de melhoria. Duração: 1 hora. Inclui: análise \
                 inicial da empresa, identificação de pontos críticos e recomendações \
                 estratégicas."
            .to_string(),
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn query_value(link: &str, key: &str) -> Option<String> {
        let (_, query) = link.split_once('?')?;
        form_urlencoded::parse(query.as_bytes())
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    #[test]
    fn test_window_is_tomorrow_afternoon_local() {
        let sao_paulo = FixedOffset::west_opt(3 * 3600).unwrap();
        let now = sao_paulo.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap();
        let link = meeting_link(None, &now);

        assert!(link.starts_with(CALENDAR_BASE));
        assert_eq!(
            query_value(&link, "dates").as_deref(),
            Some("20261019T170000Z/20261019T180000Z")
        );
        assert_eq!(query_value(&link, "add").as_deref(), Some(CONTACT_EMAIL));
        assert_eq!(query_value(&link, "location").as_deref(), Some(MEETING_LOCATION));
    }

    #[test]
    fn test_late_evening_still_books_next_day() {
        let now = Utc.with_ymd_and_hms(2026, 12, 31, 23, 59, 0).unwrap();
        let link = meeting_link(None, &now);
        assert_eq!(
            query_value(&link, "dates").as_deref(),
            Some("20270101T140000Z/20270101T150000Z")
        );
    }

    #[test]
    fn test_service_label_shapes_title_and_details() {
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap();
        let link = meeting_link(Some("Mentoria Executiva"), &now);

        assert_eq!(
            query_value(&link, "text").as_deref(),
            Some("Mentoria Executiva - Diagnóstico Estratégico - Anderson Garcia")
        );
        let details = query_value(&link, "details").unwrap();
        assert!(details.contains("focada em Mentoria Executiva"));

        let generic = meeting_link(None, &now);
        assert_eq!(
            query_value(&generic, "text").as_deref(),
            Some("Diagnóstico Estratégico - Anderson Garcia")
        );
    }
}
