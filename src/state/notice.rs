#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// A transient user-visible notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub text: String,
}

/// Queue of transient error notices.
///
/// Failures are surfaced here and nowhere else: no durable log, no retry.
/// Notices are removed by id, either by the auto-dismiss timer or by a
/// click on the notice itself.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub notices: Vec<Notice>,
    next_id: u64,
}

impl NoticeState {
    /// Queue an error notice and return its id.
    pub fn push_error(&mut self, text: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.notices.push(Notice { id, text: text.into() });
        id
    }

    /// Remove a notice by id. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.notices.retain(|n| n.id != id);
    }
}
