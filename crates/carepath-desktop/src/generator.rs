/// Identifies one generation request; only the newest may deliver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// State of the wellness-plan generator panel.
///
/// Answers that arrive after the panel closed, or after a newer request
/// was made, are dropped.
#[derive(Debug, Default)]
pub struct GeneratorView {
    open: bool,
    latest: u64,
    pending: bool,
    result: Option<String>,
}

impl GeneratorView {
    pub fn open(&mut self) {
        self.open = true;
        self.result = None;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.pending = false;
        self.latest += 1;
    }

    /// Start a request. `None` while the panel is closed.
    pub fn request(&mut self) -> Option<Ticket> {
        if !self.open {
            return None;
        }
        self.latest += 1;
        self.pending = true;
        self.result = None;
        Some(Ticket(self.latest))
    }

    /// Store an answer if its request is still current.
    pub fn deliver(&mut self, ticket: Ticket, text: String) -> bool {
        if !self.open || ticket.0 != self.latest {
            tracing::debug!("stale plan discarded");
            return false;
        }
        self.pending = false;
        self.result = Some(text);
        true
    }

    /// Back to the input form.
    pub fn clear_result(&mut self) {
        self.result = None;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }
}
