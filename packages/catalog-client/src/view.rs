//! Catalog View Orchestrator
//!
//! Owns the fetch lifecycle of a catalog screen. Inputs are the filter
//! selection and the page parameters (both watch channels); output is a
//! [`ViewState`] watch channel for rendering.
//!
//! Each trigger bumps a sequence number and aborts the request still in
//! flight, and only a response carrying the latest sequence is applied.
//! The topic list is fetched once per mount.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::client::{CatalogApi, CatalogQuery, ClientError};
use crate::types::{CatalogPage, Topic};

/// Page parameters from the navigation context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogParams {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// Last successfully fetched page. Kept when a later fetch fails.
    pub envelope: Option<CatalogPage>,
    pub topics: Vec<Topic>,
    /// Message of the latest failed fetch, cleared by the next success.
    pub error: Option<String>,
    pub loading: bool,
}

type FetchResult = (u64, Result<CatalogPage, ClientError>);

pub struct CatalogView {
    api: Arc<dyn CatalogApi>,
    selection: watch::Receiver<Arc<[String]>>,
    params: watch::Receiver<CatalogParams>,
    state: watch::Sender<ViewState>,
    seq: u64,
    in_flight: Option<JoinHandle<()>>,
}

impl CatalogView {
    pub fn new(
        api: Arc<dyn CatalogApi>,
        selection: watch::Receiver<Arc<[String]>>,
        params: watch::Receiver<CatalogParams>,
    ) -> (Self, watch::Receiver<ViewState>) {
        let (state, state_rx) = watch::channel(ViewState::default());
        let view = Self {
            api,
            selection,
            params,
            state,
            seq: 0,
            in_flight: None,
        };
        (view, state_rx)
    }

    /// Drive the view until the selection or the params sender is dropped.
    pub async fn run(mut self) {
        let (results_tx, mut results_rx) = mpsc::unbounded_channel::<FetchResult>();

        let api = Arc::clone(&self.api);
        let mut topics = api.list_topics();
        let mut topics_loaded = false;

        self.fetch(&results_tx);

        loop {
            tokio::select! {
                result = &mut topics, if !topics_loaded => {
                    topics_loaded = true;
                    match result {
                        Ok(list) => self.state.send_modify(|s| s.topics = list),
                        Err(e) => warn!(error = %e, "Failed to load topics"),
                    }
                }
                changed = self.selection.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    self.fetch(&results_tx);
                }
                changed = self.params.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    self.fetch(&results_tx);
                }
                Some((seq, result)) = results_rx.recv() => {
                    self.apply(seq, result);
                }
            }
        }

        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
        debug!("Catalog view stopped");
    }

    fn current_query(&mut self) -> CatalogQuery {
        let topics = self.selection.borrow_and_update().to_vec();
        let params = *self.params.borrow_and_update();
        CatalogQuery {
            topics,
            page: params.page,
            per_page: params.per_page,
        }
    }

    fn fetch(&mut self, results: &mpsc::UnboundedSender<FetchResult>) {
        if let Some(previous) = self.in_flight.take() {
            previous.abort();
        }
        self.seq += 1;
        let seq = self.seq;
        let query = self.current_query();
        debug!(seq, topics = ?query.topics, page = ?query.page, "Fetching catalog");

        self.state.send_modify(|s| s.loading = true);

        let api = Arc::clone(&self.api);
        let results = results.clone();
        self.in_flight = Some(tokio::spawn(async move {
            let result = api.list_resources(&query).await;
            let _ = results.send((seq, result));
        }));
    }

    fn apply(&mut self, seq: u64, result: Result<CatalogPage, ClientError>) {
        if seq != self.seq {
            debug!(seq, latest = self.seq, "Dropping stale catalog response");
            return;
        }
        self.in_flight = None;

        match result {
            Ok(envelope) => self.state.send_modify(|s| {
                s.envelope = Some(envelope);
                s.error = None;
                s.loading = false;
            }),
            Err(e) => {
                warn!(seq, error = %e, "Catalog fetch failed");
                self.state.send_modify(|s| {
                    s.error = Some(e.to_string());
                    s.loading = false;
                });
            }
        }
    }
}
