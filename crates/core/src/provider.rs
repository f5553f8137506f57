//! A mock backend that hands out the catalog after an artificial delay.
//!
//! Each request runs on its own short-lived thread which sleeps for the
//! configured delay and then delivers the full catalog. There is no failure
//! path: a request always completes unless its [`CancelToken`] fires first.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::thread;
use std::time::Duration;

use crate::catalog::Catalog;
use crate::error::FetchError;
use crate::record::FileRecord;

/// Simulated network latency of the mock backend.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

/// Shared flag used to abandon a request before its handler runs.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	pub fn cancel(&self) {
		self.0.store(true, Ordering::Release);
	}

	#[must_use]
	pub fn is_cancelled(&self) -> bool {
		self.0.load(Ordering::Acquire)
	}
}

#[derive(Clone, Debug)]
pub struct MockProvider {
	catalog: Catalog,
	delay: Duration,
}

impl Default for MockProvider {
	fn default() -> Self {
		Self::new(Catalog::default(), DEFAULT_DELAY)
	}
}

impl MockProvider {
	#[must_use]
	pub fn new(catalog: Catalog, delay: Duration) -> Self {
		Self { catalog, delay }
	}

	#[must_use]
	pub fn catalog(&self) -> &Catalog {
		&self.catalog
	}

	#[must_use]
	pub fn delay(&self) -> Duration {
		self.delay
	}

	/// Invoke `handler` exactly once with the whole catalog after the delay.
	pub fn fetch<F>(&self, handler: F)
	where
		F: FnOnce(Vec<FileRecord>) + Send + 'static,
	{
		self.fetch_with_token(CancelToken::new(), handler);
	}

	/// Like [`fetch`](Self::fetch), but the handler is skipped when `token`
	/// is cancelled before the delay elapses.
	pub fn fetch_with_token<F>(&self, token: CancelToken, handler: F)
	where
		F: FnOnce(Vec<FileRecord>) + Send + 'static,
	{
		log::info!("requesting file list from the mock backend, please wait...");
		let catalog = self.catalog.clone();
		let delay = self.delay;
		thread::spawn(move || {
			thread::sleep(delay);
			if token.is_cancelled() {
				log::debug!("mock request cancelled before delivery");
				return;
			}
			log::info!("mock backend responded with {} files", catalog.len());
			handler(catalog.snapshot());
		});
	}

	/// Start a request and return a handle that can be polled or waited on.
	#[must_use]
	pub fn request(&self) -> PendingFetch {
		let (tx, rx) = mpsc::channel();
		let token = CancelToken::new();
		self.fetch_with_token(token.clone(), move |files| {
			let _ = tx.send(files);
		});
		PendingFetch { rx, token }
	}
}

/// Handle for a request started with [`MockProvider::request`].
#[derive(Debug)]
pub struct PendingFetch {
	rx: Receiver<Vec<FileRecord>>,
	token: CancelToken,
}

impl PendingFetch {
	/// Return the files if they have arrived, without blocking.
	pub fn try_take(&self) -> Result<Option<Vec<FileRecord>>, FetchError> {
		match self.rx.try_recv() {
			Ok(files) => Ok(Some(files)),
			Err(TryRecvError::Empty) => Ok(None),
			Err(TryRecvError::Disconnected) => Err(FetchError::Disconnected),
		}
	}

	/// Block until the files arrive or `timeout` passes.
	pub fn wait(self, timeout: Duration) -> Result<Vec<FileRecord>, FetchError> {
		self.rx.recv_timeout(timeout).map_err(|err| match err {
			RecvTimeoutError::Timeout => FetchError::Timeout(timeout),
			RecvTimeoutError::Disconnected => FetchError::Disconnected,
		})
	}

	/// Abandon the request; the pending handle then reports a disconnect.
	pub fn cancel(&self) {
		self.token.cancel();
	}
}
