//! Inventory table state and its transitions.
//!
//! Every transition borrows the current [`InventoryState`] and returns the next one, so the
//! front ends own exactly one value and swap it on each event. Network work is modelled as a
//! [`Mutation`] handed out by [`InventoryState::submit`] or [`InventoryState::delete`]; the
//! front end performs it and feeds the resulting [`Completion`] back through
//! [`InventoryState::reconcile`].

use crate::filter::filter_records;
use crate::paging::PageSize;
use crate::{DraftField, RequestFailed, SwitchDraft, SwitchId, SwitchRecord};

/// Lifecycle of the table as a whole
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    /// Initial read-all request outstanding
    #[default]
    Loading,
    Ready,
    /// A request failed; the error replaces the whole table and is never cleared
    Failed(RequestFailed),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit(SwitchId),
}

/// What to do with a completion issued from a form session that has since been replaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StalePolicy {
    /// Apply the collection change and reset the form anyway
    #[default]
    Apply,
    /// Apply the collection change, leave the newer form session alone
    PreserveForm,
}

/// Draft plus mode of the create/edit form
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub draft: SwitchDraft,
    pub mode: FormMode,
    /// Bumped whenever the form is re-targeted or reset
    pub session: u64,
}

impl FormState {
    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    fn reset(&self) -> FormState {
        FormState {
            draft: SwitchDraft::default(),
            mode: FormMode::Create,
            session: self.session + 1,
        }
    }
}

/// User or loader events that never touch the network
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Loaded(Result<Vec<SwitchRecord>, RequestFailed>),
    SearchChanged(String),
    PageSizeChanged(PageSize),
    PageChanged(usize),
    FieldChanged(DraftField, String),
    EditRequested(SwitchId),
}

/// Identifies an issued mutation and the form session it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub seq: u64,
    pub form_session: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MutationRequest {
    Create(SwitchDraft),
    Update(SwitchId, SwitchDraft),
    Delete(SwitchId),
}

/// Server acknowledgement of a [`MutationRequest`]
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    Created(SwitchRecord),
    Updated { id: SwitchId, record: SwitchRecord },
    Deleted(SwitchId),
}

/// A request the front end must send
#[derive(Debug, Clone, PartialEq)]
pub struct Mutation {
    pub ticket: Ticket,
    pub request: MutationRequest,
}

impl Mutation {
    pub fn complete(&self, outcome: Result<MutationOutcome, RequestFailed>) -> Completion {
        Completion {
            ticket: self.ticket,
            outcome,
        }
    }
}

/// A finished mutation, success or failure
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub ticket: Ticket,
    pub outcome: Result<MutationOutcome, RequestFailed>,
}

/// One rendered row; `ordinal` is the 1-based position across all pages
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableRow<'a> {
    pub ordinal: usize,
    pub record: &'a SwitchRecord,
}

/// Everything the presentation layer derives from the state
#[derive(Debug, Clone, PartialEq)]
pub struct TableView<'a> {
    pub rows: Vec<TableRow<'a>>,
    /// Size of the filtered view
    pub matched: usize,
    pub page: usize,
    /// `None` in "all" mode, where the page control is hidden
    pub page_count: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryState {
    phase: Phase,
    records: Vec<SwitchRecord>,
    query: String,
    page_size: PageSize,
    page: usize,
    form: FormState,
    stale_policy: StalePolicy,
    next_seq: u64,
}

impl Default for InventoryState {
    fn default() -> Self {
        Self::new(StalePolicy::default())
    }
}

impl InventoryState {
    pub fn new(stale_policy: StalePolicy) -> Self {
        Self {
            phase: Phase::Loading,
            records: Vec::new(),
            query: String::new(),
            page_size: PageSize::default(),
            page: 1,
            form: FormState::default(),
            stale_policy,
            next_seq: 0,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn records(&self) -> &[SwitchRecord] {
        &self.records
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn failure(&self) -> Option<&RequestFailed> {
        match &self.phase {
            Phase::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn reduce(&self, action: Action) -> InventoryState {
        let mut next = self.clone();
        match action {
            Action::Loaded(Ok(records)) => {
                next.records = records;
                if next.phase == Phase::Loading {
                    next.phase = Phase::Ready;
                }
            }
            Action::Loaded(Err(err)) => {
                next.phase = Phase::Failed(err);
            }
            Action::SearchChanged(query) => {
                next.query = query;
                next.page = 1;
            }
            Action::PageSizeChanged(size) => {
                next.page_size = size;
                next.page = 1;
            }
            Action::PageChanged(page) => {
                next.page = page.max(1);
            }
            Action::FieldChanged(field, value) => {
                next.form.draft.set(field, value);
            }
            Action::EditRequested(id) => {
                if let Some(record) = self.records.iter().find(|r| r.id == id) {
                    next.form = FormState {
                        draft: record.draft(),
                        mode: FormMode::Edit(id),
                        session: self.form.session + 1,
                    };
                }
            }
        }
        next
    }

    /// Issue a create or update for the current draft depending on the form mode
    pub fn submit(&self) -> (InventoryState, Mutation) {
        let request = match &self.form.mode {
            FormMode::Create => MutationRequest::Create(self.form.draft.clone()),
            FormMode::Edit(id) => MutationRequest::Update(id.clone(), self.form.draft.clone()),
        };
        self.issue(request)
    }

    pub fn delete(&self, id: SwitchId) -> (InventoryState, Mutation) {
        self.issue(MutationRequest::Delete(id))
    }

    fn issue(&self, request: MutationRequest) -> (InventoryState, Mutation) {
        let mut next = self.clone();
        let ticket = Ticket {
            seq: self.next_seq,
            form_session: self.form.session,
        };
        next.next_seq += 1;
        (next, Mutation { ticket, request })
    }

    /// True when the form has been re-targeted or reset since `ticket` was issued
    pub fn is_stale(&self, ticket: &Ticket) -> bool {
        ticket.form_session != self.form.session
    }

    /// Fold a finished mutation into the state.
    ///
    /// Failures only flip the phase; the collection and draft stay as they were.
    pub fn reconcile(&self, completion: Completion) -> InventoryState {
        let mut next = self.clone();
        let outcome = match completion.outcome {
            Ok(outcome) => outcome,
            Err(err) => {
                next.phase = Phase::Failed(err);
                return next;
            }
        };

        match outcome {
            MutationOutcome::Created(record) => next.records.push(record),
            MutationOutcome::Updated { id, record } => {
                if let Some(slot) = next.records.iter_mut().find(|r| r.id == id) {
                    *slot = record;
                }
            }
            MutationOutcome::Deleted(id) => next.records.retain(|r| r.id != id),
        }

        let stale = self.is_stale(&completion.ticket);
        if !stale || self.stale_policy == StalePolicy::Apply {
            next.form = self.form.reset();
        }
        next
    }

    /// Filter, then page, the collection
    pub fn view(&self) -> TableView<'_> {
        let filtered = filter_records(&self.records, &self.query);
        let bounds = self.page_size.bounds(filtered.len(), self.page);
        let start = bounds.start;

        let rows = filtered[bounds]
            .iter()
            .enumerate()
            .map(|(index, &record)| TableRow {
                ordinal: start + index + 1,
                record,
            })
            .collect();

        TableView {
            rows,
            matched: filtered.len(),
            page: self.page,
            page_count: self.page_size.page_count(filtered.len()),
        }
    }
}
