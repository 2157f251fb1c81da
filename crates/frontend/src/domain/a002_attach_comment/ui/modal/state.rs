/// Transient state of one attach attempt, reset every time the modal opens or closes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// True while the create request is in flight.
    pub submitting: bool,
    pub issue_key: Option<String>,
    /// Text typed into the selector's search box; never submitted.
    pub text_search_terms: String,
    /// Message of the last failed submit.
    pub error: Option<String>,
}

impl FormState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Mark a submit as started. Returns false if one is already in flight.
    pub fn start_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    pub fn fail_submit(&mut self, message: String) {
        self.error = Some(message);
        self.submitting = false;
    }
}

pub fn submit_label(submitting: bool) -> &'static str {
    if submitting {
        "Attaching"
    } else {
        "Attach"
    }
}
