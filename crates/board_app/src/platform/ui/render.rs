use board_core::{Notice, PageViewModel, ReloadReason, TriggerRowView};

pub fn render(view: &PageViewModel) -> Vec<String> {
    let mut lines = Vec::with_capacity(
        view.messages.len() + view.elements.len() + view.notices.len() + 1,
    );

    let token = if view.has_token { "present" } else { "missing" };
    let mut status = format!(
        "Page #{} | token: {} | buttons: {} | in flight: {}",
        view.generation,
        token,
        view.elements.len(),
        view.in_flight
    );
    if let Some(reason) = view.reload_pending {
        status.push_str(&format!(" | reloading ({})", reload_label(reason)));
    }
    lines.push(status);

    lines.extend(view.messages.iter().map(|message| format!("  > {message}")));
    lines.extend(view.elements.iter().map(format_row));
    lines.extend(view.notices.iter().map(format_notice));
    lines
}

fn format_row(row: &TriggerRowView) -> String {
    let mut line = format!("  [{}] {} {}", row.element, row.kind.label(), row.value);
    if let Some(label) = row.label {
        line.push_str(&format!(" | {}", label.to_html()));
    }
    if row.pending > 0 {
        line.push_str(&format!(" ({} pending)", row.pending));
    }
    line
}

fn format_notice(notice: &Notice) -> String {
    match (notice.kind, notice.identifier.as_deref()) {
        (Some(kind), Some(identifier)) => {
            format!("  ! {} {}: {}", kind.label(), identifier, notice.message)
        }
        _ => format!("  ! {}", notice.message),
    }
}

fn reload_label(reason: ReloadReason) -> &'static str {
    match reason {
        ReloadReason::Unauthorized => "session rejected",
        ReloadReason::StageChanged => "stage changed",
        ReloadReason::Requested => "requested",
    }
}
