use std::collections::BTreeMap;

use crate::view_model::{Notice, PageViewModel, TriggerRowView};
use crate::{
    ActionKind, ActionRequest, BookmarkLabel, ElementId, PageSnapshot, ReloadReason, RequestId,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct InFlight {
    pub(crate) element: ElementId,
    pub(crate) kind: ActionKind,
    pub(crate) identifier: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageState {
    page: PageSnapshot,
    generation: u64,
    next_request_id: RequestId,
    in_flight: BTreeMap<RequestId, InFlight>,
    notices: Vec<Notice>,
    reload_pending: Option<ReloadReason>,
    dirty: bool,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn reload_pending(&self) -> Option<ReloadReason> {
        self.reload_pending
    }

    pub fn view(&self) -> PageViewModel {
        let elements = self
            .page
            .elements
            .iter()
            .enumerate()
            .map(|(element, trigger)| TriggerRowView {
                element,
                kind: trigger.kind,
                value: trigger.value.clone(),
                label: trigger.label,
                pending: self
                    .in_flight
                    .values()
                    .filter(|pending| pending.element == element)
                    .count(),
            })
            .collect();

        PageViewModel {
            generation: self.generation,
            has_token: self.page.csrf_token.is_some(),
            elements,
            messages: self.page.messages.clone(),
            notices: self.notices.clone(),
            in_flight: self.in_flight.len(),
            reload_pending: self.reload_pending,
            dirty: self.dirty,
        }
    }

    /// Returns whether the view changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn replace_page(&mut self, page: PageSnapshot) {
        self.page = page;
        self.generation += 1;
        self.in_flight.clear();
        self.notices.clear();
        self.reload_pending = None;
        self.dirty = true;
    }

    /// Reads the element's identifier and builds the request for it.
    pub(crate) fn begin_request(&mut self, element: ElementId) -> Option<ActionRequest> {
        let trigger = self.page.elements.get(element)?;
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        let token = self.page.csrf_token.clone().unwrap_or_default();
        let request = ActionRequest::new(request_id, trigger.kind, trigger.value.clone(), token);
        self.in_flight.insert(
            request_id,
            InFlight {
                element,
                kind: trigger.kind,
                identifier: trigger.value.clone(),
            },
        );
        self.dirty = true;
        Some(request)
    }

    pub(crate) fn finish_request(&mut self, request_id: RequestId) -> Option<InFlight> {
        let finished = self.in_flight.remove(&request_id)?;
        self.dirty = true;
        Some(finished)
    }

    /// Applies `label` to every toggle-save element whose value equals `job_id`.
    pub(crate) fn set_bookmark_label(&mut self, job_id: &str, label: BookmarkLabel) -> usize {
        let mut updated = 0;
        for trigger in self
            .page
            .elements
            .iter_mut()
            .filter(|trigger| trigger.kind == ActionKind::ToggleSave && trigger.value == job_id)
        {
            if trigger.label != Some(label) {
                trigger.label = Some(label);
                self.dirty = true;
            }
            updated += 1;
        }
        updated
    }

    /// Marks a reload as underway. Returns false when one already is.
    pub(crate) fn begin_reload(&mut self, reason: ReloadReason) -> bool {
        if self.reload_pending.is_some() {
            return false;
        }
        self.reload_pending = Some(reason);
        self.dirty = true;
        true
    }

    pub(crate) fn abort_reload(&mut self, message: String) {
        self.reload_pending = None;
        self.push_notice(Notice {
            request_id: None,
            kind: None,
            identifier: None,
            message,
        });
    }

    pub(crate) fn push_request_notice(
        &mut self,
        request_id: RequestId,
        finished: InFlight,
        message: String,
    ) {
        self.push_notice(Notice {
            request_id: Some(request_id),
            kind: Some(finished.kind),
            identifier: Some(finished.identifier),
            message,
        });
    }

    fn push_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
        self.dirty = true;
    }

    pub(crate) fn clear_notices(&mut self) {
        if !self.notices.is_empty() {
            self.notices.clear();
            self.dirty = true;
        }
    }
}
