use crate::domain::events::EventKind;

/// Primary announcement text; None for event kinds that carry no message,
/// which callers must treat as "abandon this delivery".
pub fn announcement(kind: &EventKind, first_name: &str, last_name: &str) -> Option<String> {
    match kind {
        EventKind::Invite => Some(format!(
            "Встречаем нового сотрудника {first_name} {last_name} 🙌"
        )),
        EventKind::Suspend => Some(format!("Прощаемся с {first_name} {last_name} 😥")),
        _ => None,
    }
}

/// Follow-up mention text posted into the thread under the announcement.
pub fn thread_text(kind: &EventKind, tags: &[String]) -> Option<String> {
    let mentions = match kind {
        EventKind::Suspend => "@lgmspb\n@lpaspb",
        EventKind::Invite => "@lpaspb",
        _ => return None,
    };

    if tags.is_empty() {
        Some(mentions.to_string())
    } else {
        Some(format!("{mentions}\nТеги: {}", tags.join(", ")))
    }
}
