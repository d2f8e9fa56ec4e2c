//! Filtered list view kept in sync with its server.
//!
//! A [`ListView`] is owned by a single task and driven cooperatively: local
//! edits are applied synchronously, [`ListView::step`] waits for the next
//! timer or response and applies it. The view is `Idle` when no debounce
//! timer is armed and no request is in flight, `Pending` otherwise.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::task::{JoinError, JoinSet};

use crate::filters::{FilterError, FilterSet};
use crate::pagination::{PagePayload, PaginatedResult};
use crate::render::{Control, PaginationControls};
use crate::store::FilterStore;

pub mod adapter;
pub mod debounce;
pub mod history;

use adapter::{RoundTrip, RoundTripError};
use debounce::Debouncer;
use history::AddressBar;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// How responses arriving out of dispatch order are treated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderingPolicy {
    /// Responses older than the last applied one are dropped.
    #[default]
    Sequenced,
    /// Every response is applied as it arrives, even a stale one.
    LastArrival,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewOptions {
    pub debounce: Duration,
    pub request_timeout: Duration,
    pub ordering: OrderingPolicy,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            ordering: OrderingPolicy::default(),
        }
    }
}

/// [`ViewOptions`] as they appear in configuration files, durations in
/// milliseconds. Missing keys take the defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    pub debounce_ms: u64,
    pub request_timeout_ms: u64,
    pub ordering: OrderingPolicy,
}

impl Default for ViewSettings {
    fn default() -> Self {
        let options = ViewOptions::default();
        Self {
            debounce_ms: u64::try_from(options.debounce.as_millis()).unwrap_or(u64::MAX),
            request_timeout_ms: u64::try_from(options.request_timeout.as_millis())
                .unwrap_or(u64::MAX),
            ordering: options.ordering,
        }
    }
}

impl From<ViewSettings> for ViewOptions {
    fn from(settings: ViewSettings) -> Self {
        Self {
            debounce: Duration::from_millis(settings.debounce_ms),
            request_timeout: Duration::from_millis(settings.request_timeout_ms),
            ordering: settings.ordering,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Pending,
}

/// Outcome of one [`ListView::step`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewEvent {
    Dispatched { seq: u64, query: String },
    Applied { seq: u64 },
    Discarded { seq: u64 },
    Failed { seq: u64, error: RoundTripError },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Origin {
    /// The user changed a filter: a successful response adds a history entry.
    Edit,
    /// Back/forward navigation: the history entry already exists.
    History,
}

struct Completion<F, T> {
    seq: u64,
    revision: u64,
    origin: Origin,
    outcome: Result<PagePayload<F, T>, RoundTripError>,
}

enum Wake<F, T> {
    Timer,
    Joined(Result<Completion<F, T>, JoinError>),
}

pub struct ListView<F, T, A, H>
where
    F: FilterSet,
    T: Send + 'static,
    A: RoundTrip<F, T> + 'static,
    H: AddressBar,
{
    store: FilterStore<F>,
    debouncer: Debouncer,
    adapter: Arc<A>,
    address: H,
    options: ViewOptions,
    in_flight: JoinSet<Completion<F, T>>,
    result: PaginatedResult<T>,
    last_error: Option<RoundTripError>,
    next_seq: u64,
    last_applied: u64,
}

impl<F, T, A, H> ListView<F, T, A, H>
where
    F: FilterSet,
    T: Send + 'static,
    A: RoundTrip<F, T> + 'static,
    H: AddressBar,
{
    /// Mounts the view on the payload delivered with the initial page load.
    pub fn mount(
        options: ViewOptions,
        adapter: Arc<A>,
        mut address: H,
        defaults: F,
        initial: PagePayload<F, T>,
    ) -> Self {
        let mut store = FilterStore::new(defaults.clone());
        store.initialize(defaults, &initial.filters);

        match initial.filters.to_query() {
            Ok(query) => address.replace(query),
            Err(err) => log::warn!("Failed to encode initial filters: {err}"),
        }

        Self {
            store,
            debouncer: Debouncer::new(options.debounce),
            adapter,
            address,
            options,
            in_flight: JoinSet::new(),
            result: initial.page,
            last_error: None,
            next_seq: 0,
            last_applied: 0,
        }
    }

    pub fn filters(&self) -> &F {
        self.store.current()
    }

    pub fn result(&self) -> &PaginatedResult<T> {
        &self.result
    }

    /// Error of the most recent failed round trip, cleared by the next success.
    pub fn last_error(&self) -> Option<&RoundTripError> {
        self.last_error.as_ref()
    }

    pub fn address(&self) -> &H {
        &self.address
    }

    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    pub fn phase(&self) -> Phase {
        if self.debouncer.is_armed() || !self.in_flight.is_empty() {
            Phase::Pending
        } else {
            Phase::Idle
        }
    }

    pub fn controls(&self) -> Option<PaginationControls> {
        PaginationControls::from_result(&self.result)
    }

    /// Updates one filter and (re)starts the quiet period.
    pub fn set(&mut self, field: F::Field) {
        self.store.set(field);
        self.debouncer.arm();
    }

    pub fn clear(&mut self) {
        self.store.clear();
        self.debouncer.arm();
    }

    /// Follows a pagination control. Returns `false` for inert controls.
    pub fn activate(&mut self, control: &Control) -> bool {
        match control.page {
            Some(page) => {
                self.store.set_page(page);
                self.debouncer.arm();
                true
            }
            None => false,
        }
    }

    pub fn next_page(&mut self) -> bool {
        match self.controls() {
            Some(controls) => self.activate(&controls.next),
            None => false,
        }
    }

    pub fn previous_page(&mut self) -> bool {
        match self.controls() {
            Some(controls) => self.activate(&controls.previous),
            None => false,
        }
    }

    /// Re-queries the current filters right away.
    pub fn refresh(&mut self) -> Option<ViewEvent> {
        self.debouncer.cancel();
        self.dispatch(Origin::Edit)
    }

    /// Restores the previous history entry and queries it.
    pub fn back(&mut self) -> Result<Option<ViewEvent>, FilterError> {
        match self.address.back() {
            Some(query) => self.restore(&query),
            None => Ok(None),
        }
    }

    /// Restores the next history entry and queries it.
    pub fn forward(&mut self) -> Result<Option<ViewEvent>, FilterError> {
        match self.address.forward() {
            Some(query) => self.restore(&query),
            None => Ok(None),
        }
    }

    fn restore(&mut self, query: &str) -> Result<Option<ViewEvent>, FilterError> {
        let filters = F::from_query(query)?;
        let mut restored = self.store.defaults().clone();
        restored.overlay(&filters);
        self.store.replace(restored);
        self.debouncer.cancel();
        Ok(self.dispatch(Origin::History))
    }

    /// Waits for the timer or the next response and handles it.
    ///
    /// Returns `None` right away when the view is idle.
    pub async fn step(&mut self) -> Option<ViewEvent> {
        if self.phase() == Phase::Idle {
            return None;
        }

        let armed = self.debouncer.is_armed();
        let wake = tokio::select! {
            () = self.debouncer.fired(), if armed => Wake::Timer,
            Some(joined) = self.in_flight.join_next() => Wake::Joined(joined),
            else => return None,
        };

        match wake {
            Wake::Timer => self.dispatch(Origin::Edit),
            Wake::Joined(Ok(completion)) => Some(self.complete(completion)),
            Wake::Joined(Err(err)) => {
                log::error!("List request task failed: {err}");
                let error = RoundTripError::Aborted(err.to_string());
                self.last_error = Some(error.clone());
                Some(ViewEvent::Failed { seq: 0, error })
            }
        }
    }

    /// Steps until the view is idle, returning everything that happened.
    pub async fn settle(&mut self) -> Vec<ViewEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.step().await {
            events.push(event);
        }
        events
    }

    /// Drops the view, aborting requests still in flight.
    pub fn unmount(mut self) {
        self.debouncer.cancel();
        self.in_flight.abort_all();
    }

    fn dispatch(&mut self, origin: Origin) -> Option<ViewEvent> {
        let query = match self.store.current().to_query() {
            Ok(query) => query,
            Err(err) => {
                log::error!("Failed to encode filters: {err}");
                self.last_error = Some(err.into());
                return None;
            }
        };

        self.next_seq += 1;
        let seq = self.next_seq;
        let revision = self.store.revision();
        let adapter = Arc::clone(&self.adapter);
        let timeout = self.options.request_timeout;
        let request = query.clone();

        self.in_flight.spawn(async move {
            let outcome = match tokio::time::timeout(timeout, adapter.fetch(request)).await {
                Ok(outcome) => outcome,
                Err(_) => Err(RoundTripError::Timeout(timeout)),
            };
            Completion {
                seq,
                revision,
                origin,
                outcome,
            }
        });

        Some(ViewEvent::Dispatched { seq, query })
    }

    fn complete(&mut self, completion: Completion<F, T>) -> ViewEvent {
        let Completion {
            seq,
            revision,
            origin,
            outcome,
        } = completion;

        if self.options.ordering == OrderingPolicy::Sequenced && seq < self.last_applied {
            log::debug!(
                "Discarding response #{seq}, #{} is already shown",
                self.last_applied
            );
            return ViewEvent::Discarded { seq };
        }

        match outcome {
            Ok(payload) => {
                self.last_applied = seq;
                self.result = payload.page;
                self.last_error = None;

                // Newer local edits win over the echo of an older request.
                if self.store.revision() == revision {
                    self.store.rehydrate(&payload.filters);
                }

                if origin == Origin::Edit {
                    match payload.filters.to_query() {
                        Ok(query) => self.address.push(query),
                        Err(err) => log::warn!("Failed to encode echoed filters: {err}"),
                    }
                }

                ViewEvent::Applied { seq }
            }
            Err(error) => {
                log::warn!("List request #{seq} failed: {error}");
                self.last_error = Some(error.clone());
                ViewEvent::Failed { seq, error }
            }
        }
    }
}
