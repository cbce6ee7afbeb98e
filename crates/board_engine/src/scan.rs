use board_core::{ActionKind, BookmarkLabel, PageSnapshot, TriggerElement, CSRF_FIELD};
use scraper::{ElementRef, Html, Selector};

/// Flash message containers as rendered by the board's templates.
const MESSAGE_SELECTOR: &str = ".alert, .messages li";

/// Reads the anti-forgery token, every trigger element in document order and
/// the server's flash messages from one rendering of the page.
pub fn scan_page(html: &str) -> PageSnapshot {
    let doc = Html::parse_document(html);

    let token_sel = Selector::parse(&format!(r#"input[name="{CSRF_FIELD}"]"#)).ok();
    let csrf_token = token_sel
        .as_ref()
        .and_then(|sel| doc.select(sel).next())
        .and_then(|input| input.value().attr("value"))
        .map(ToOwned::to_owned);

    let trigger_sel = Selector::parse(&trigger_selector()).ok();
    let elements = trigger_sel
        .as_ref()
        .map(|sel| doc.select(sel).filter_map(trigger_element).collect())
        .unwrap_or_default();

    let message_sel = Selector::parse(MESSAGE_SELECTOR).ok();
    let messages = message_sel
        .as_ref()
        .map(|sel| {
            doc.select(sel)
                .filter(|element| !inside_match(element, sel))
                .filter_map(message_text)
                .collect()
        })
        .unwrap_or_default();

    PageSnapshot {
        csrf_token,
        elements,
        messages,
    }
}

/// A message nested in another message container is part of that one.
fn inside_match(element: &ElementRef, sel: &Selector) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| sel.matches(&ancestor))
}

fn message_text(element: ElementRef) -> Option<String> {
    let text = element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ");
    (!text.is_empty()).then_some(text)
}

fn trigger_selector() -> String {
    ActionKind::ALL
        .iter()
        .map(|kind| format!(".{}", kind.spec().trigger_class))
        .collect::<Vec<_>>()
        .join(", ")
}

fn trigger_element(element: ElementRef) -> Option<TriggerElement> {
    let kind = element
        .value()
        .classes()
        .find_map(ActionKind::from_trigger_class)?;
    // A control without a value attribute reads as empty.
    let value = element.value().attr("value").unwrap_or_default();
    let trigger = TriggerElement::new(kind, value);
    if kind != ActionKind::ToggleSave {
        return Some(trigger);
    }

    let text = element.text().collect::<String>();
    let label = if text.trim().eq_ignore_ascii_case("unsave") {
        BookmarkLabel::Unsave
    } else {
        BookmarkLabel::Save
    };
    Some(trigger.with_label(label))
}
