//! Screen session
//!
//! A single event loop that owns the map screen, the search coordinator and
//! the directions launcher. Everything that changes state arrives as a
//! `ScreenEvent` on one channel and is handled in order on one task. The
//! only work done elsewhere is waiting on the search and location services.
//! Those requests are spawned and post their completion back as events.

use crate::directions::{DirectionsLauncher, Navigator};
use crate::error::{Error, Result};
use crate::location::{AuthorizationStatus, LocationFix, LocationService};
use crate::map::MapScreen;
use crate::place::Place;
use crate::search::{SearchCoordinator, SearchRequest, SearchService};
use crate::surface::{MapSurface, ResultsSurface};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Something that happened on or to the screen
#[derive(Debug)]
pub enum ScreenEvent {
    AuthorizationChanged(AuthorizationStatus),
    LocationFixed(LocationFix),
    LocationFailed(Error),
    InputChanged(String),
    SearchCompleted { seq: u64, outcome: Result<Vec<Place>> },
    /// Zero-based row index
    RowSelected(usize),
    CalloutTapped,
    Shutdown,
}

/// Cloneable handle for posting events into a running session
#[derive(Debug, Clone)]
pub struct SessionHandle {
    tx: mpsc::UnboundedSender<ScreenEvent>,
}

impl SessionHandle {
    /// Post an event. Returns false if the session is gone.
    pub fn send(&self, event: ScreenEvent) -> bool {
        self.tx.send(event).is_ok()
    }
}

/// Posts a completion event exactly once, even if the task holding it
/// panics or is cancelled before producing a result
struct CompletionGuard {
    tx: mpsc::UnboundedSender<ScreenEvent>,
    fallback: Option<ScreenEvent>,
}

impl CompletionGuard {
    fn new(tx: mpsc::UnboundedSender<ScreenEvent>, fallback: ScreenEvent) -> Self {
        Self {
            tx,
            fallback: Some(fallback),
        }
    }

    fn complete(mut self, event: ScreenEvent) {
        self.fallback = None;
        let _ = self.tx.send(event);
    }
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        if let Some(event) = self.fallback.take() {
            warn!("Request task ended without a result");
            let _ = self.tx.send(event);
        }
    }
}

pub struct Session<S, L, M, R, N>
where
    S: SearchService + 'static,
    L: LocationService + 'static,
    M: MapSurface,
    R: ResultsSurface,
    N: Navigator,
{
    screen: MapScreen<M>,
    search: SearchCoordinator<R>,
    launcher: DirectionsLauncher<N>,
    search_service: Arc<S>,
    location_service: Arc<L>,
    tx: mpsc::UnboundedSender<ScreenEvent>,
    rx: mpsc::UnboundedReceiver<ScreenEvent>,
    searches_in_flight: HashSet<u64>,
    locating: bool,
}

impl<S, L, M, R, N> Session<S, L, M, R, N>
where
    S: SearchService + 'static,
    L: LocationService + 'static,
    M: MapSurface,
    R: ResultsSurface,
    N: Navigator,
{
    pub fn new(
        screen: MapScreen<M>,
        search: SearchCoordinator<R>,
        launcher: DirectionsLauncher<N>,
        search_service: S,
        location_service: L,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            screen,
            search,
            launcher,
            search_service: Arc::new(search_service),
            location_service: Arc::new(location_service),
            tx,
            rx,
            searches_in_flight: HashSet::new(),
            locating: false,
        }
    }

    pub fn handle(&self) -> SessionHandle {
        SessionHandle { tx: self.tx.clone() }
    }

    /// Report the current authorization state, which kicks off the first fix
    pub fn start(&self) {
        let status = self.location_service.authorization_status();
        let _ = self.tx.send(ScreenEvent::AuthorizationChanged(status));
    }

    /// Process events until `Shutdown`
    pub async fn run(&mut self) {
        while let Some(event) = self.rx.recv().await {
            if !self.dispatch(event) {
                break;
            }
        }
    }

    /// Process events until nothing is queued or in flight
    ///
    /// Returns false if a `Shutdown` was handled along the way.
    pub async fn settle(&mut self) -> bool {
        loop {
            let event = match self.rx.try_recv() {
                Ok(event) => event,
                Err(_) if self.is_busy() => match self.rx.recv().await {
                    Some(event) => event,
                    None => return true,
                },
                Err(_) => return true,
            };

            if !self.dispatch(event) {
                return false;
            }
        }
    }

    /// Whether a location or search request is outstanding
    pub fn is_busy(&self) -> bool {
        self.locating || !self.searches_in_flight.is_empty()
    }

    /// Handle one event. Returns false on shutdown.
    fn dispatch(&mut self, event: ScreenEvent) -> bool {
        match event {
            ScreenEvent::AuthorizationChanged(status) => {
                if self.screen.on_authorization_changed(status) {
                    self.request_location();
                }
            }
            ScreenEvent::LocationFixed(fix) => {
                self.locating = false;
                self.screen.on_location_fix(fix);
            }
            ScreenEvent::LocationFailed(err) => {
                self.locating = false;
                self.screen.on_location_error(&err);
            }
            ScreenEvent::InputChanged(text) => {
                if let Some(request) = self.search.on_input_changed(&text, self.screen.region()) {
                    self.dispatch_search(request);
                }
            }
            ScreenEvent::SearchCompleted { seq, outcome } => {
                self.searches_in_flight.remove(&seq);
                self.search.on_response(seq, outcome);
            }
            ScreenEvent::RowSelected(index) => {
                if self.search.select_row(index, &mut self.screen).is_none() {
                    debug!(index, "No result row at index");
                }
            }
            ScreenEvent::CalloutTapped => {
                self.screen.on_callout_tapped(&self.launcher);
            }
            ScreenEvent::Shutdown => return false,
        }
        true
    }

    fn request_location(&mut self) {
        self.locating = true;
        let service = Arc::clone(&self.location_service);
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let guard = CompletionGuard::new(
                tx,
                ScreenEvent::LocationFailed(Error::Location("location request aborted".to_string())),
            );
            let event = match service.request_location().await {
                Ok(fix) => ScreenEvent::LocationFixed(fix),
                Err(e) => ScreenEvent::LocationFailed(e),
            };
            guard.complete(event);
        });
    }

    fn dispatch_search(&mut self, request: SearchRequest) {
        self.searches_in_flight.insert(request.seq);
        let service = Arc::clone(&self.search_service);
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let seq = request.seq;
            let guard = CompletionGuard::new(
                tx,
                ScreenEvent::SearchCompleted {
                    seq,
                    outcome: Err(Error::Search("search request aborted".to_string())),
                },
            );
            let outcome = service.search(&request.query).await;
            guard.complete(ScreenEvent::SearchCompleted { seq, outcome });
        });
    }

    pub fn screen(&self) -> &MapScreen<M> {
        &self.screen
    }

    pub fn search(&self) -> &SearchCoordinator<R> {
        &self.search
    }

    pub fn launcher(&self) -> &DirectionsLauncher<N> {
        &self.launcher
    }
}
