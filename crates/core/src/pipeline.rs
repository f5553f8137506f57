//! Search requests flowing from a keyword to the display surface.
//!
//! [`SearchPipeline::search`] flips the surface to its loading state and asks
//! the provider for data. Responses come back over a channel and are applied
//! by [`SearchPipeline::pump`] on the thread that owns the pipeline, so the
//! surface is only ever written from one place.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::time::{Duration, Instant};

use crate::error::FetchError;
use crate::provider::{CancelToken, MockProvider};
use crate::query::{MatchMode, SearchQuery, filter};
use crate::record::FileRecord;
use crate::surface::DisplaySurface;

/// Identifies one call to [`SearchPipeline::search`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchTicket(u64);

struct FetchResponse {
	ticket: SearchTicket,
	files: Vec<FileRecord>,
}

struct InFlight {
	ticket: SearchTicket,
	query: SearchQuery,
	token: CancelToken,
}

pub struct SearchPipeline {
	provider: MockProvider,
	surface: DisplaySurface,
	tx: Sender<FetchResponse>,
	rx: Receiver<FetchResponse>,
	next_ticket: u64,
	in_flight: Option<InFlight>,
	last_query: Option<SearchQuery>,
}

impl SearchPipeline {
	#[must_use]
	pub fn new(provider: MockProvider) -> Self {
		let (tx, rx) = mpsc::channel();
		Self {
			provider,
			surface: DisplaySurface::new(),
			tx,
			rx,
			next_ticket: 0,
			in_flight: None,
			last_query: None,
		}
	}

	#[must_use]
	pub fn surface(&self) -> &DisplaySurface {
		&self.surface
	}

	pub fn surface_mut(&mut self) -> &mut DisplaySurface {
		&mut self.surface
	}

	#[must_use]
	pub fn provider(&self) -> &MockProvider {
		&self.provider
	}

	#[must_use]
	pub fn is_in_flight(&self) -> bool {
		self.in_flight.is_some()
	}

	/// The query behind the current surface content or pending request.
	#[must_use]
	pub fn last_query(&self) -> Option<&SearchQuery> {
		self.in_flight
			.as_ref()
			.map(|pending| &pending.query)
			.or(self.last_query.as_ref())
	}

	/// Start a search. The keyword is trimmed and the mode captured now.
	///
	/// Any request still in flight is cancelled; only the newest ticket may
	/// write to the surface.
	pub fn search(&mut self, keyword: &str, exact: bool) -> SearchTicket {
		let query = SearchQuery::new(keyword, MatchMode::from_exact(exact));
		self.next_ticket = self.next_ticket.saturating_add(1);
		let ticket = SearchTicket(self.next_ticket);

		if let Some(previous) = self.in_flight.take() {
			log::debug!("superseding search {:?}", previous.ticket);
			previous.token.cancel();
		}

		self.surface.begin_loading();

		let token = CancelToken::new();
		let tx = self.tx.clone();
		self.provider.fetch_with_token(token.clone(), move |files| {
			let _ = tx.send(FetchResponse { ticket, files });
		});
		self.in_flight = Some(InFlight {
			ticket,
			query,
			token,
		});
		ticket
	}

	/// Apply every response that has arrived. Returns `true` when the surface
	/// changed.
	pub fn pump(&mut self) -> bool {
		let mut changed = false;
		loop {
			match self.rx.try_recv() {
				Ok(response) => changed |= self.apply(response),
				Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
			}
		}
		changed
	}

	/// Block until the newest search has been applied.
	pub fn wait(&mut self, timeout: Duration) -> Result<(), FetchError> {
		let deadline = Instant::now() + timeout;
		while self.in_flight.is_some() {
			let remaining = deadline.saturating_duration_since(Instant::now());
			match self.rx.recv_timeout(remaining) {
				Ok(response) => {
					self.apply(response);
				}
				Err(RecvTimeoutError::Timeout) => return Err(FetchError::Timeout(timeout)),
				Err(RecvTimeoutError::Disconnected) => return Err(FetchError::Disconnected),
			}
		}
		Ok(())
	}

	fn apply(&mut self, response: FetchResponse) -> bool {
		let is_latest = self
			.in_flight
			.as_ref()
			.is_some_and(|pending| pending.ticket == response.ticket);
		if !is_latest {
			log::debug!("discarding stale response for {:?}", response.ticket);
			return false;
		}
		let Some(pending) = self.in_flight.take() else {
			return false;
		};
		let results = filter(&response.files, &pending.query);
		self.surface.show_results(results);
		self.last_query = Some(pending.query);
		true
	}
}
