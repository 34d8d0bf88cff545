//! Quote fetch & presentation coordinator.
//!
//! Owns the company directory and the `ViewState` slot, and is the only writer
//! of both. The flow is:
//!
//! - `start()` loads the directory and auto-selects the first company.
//! - `select(index)` starts a new selection generation and spawns the quote and
//!   logo fetches as two independent Tokio tasks. Selections are refused while
//!   a directory load is in flight.
//! - Each task applies its result to the slot only if the slot still belongs
//!   to the generation the task was started for; otherwise the result is
//!   dropped.
//!
//! The slot lives in a `tokio::sync::watch` channel, so every update is applied
//! under the channel's lock and renderers never observe a half-written state.
//! Renderers either poll `snapshot()` or `subscribe()` for change
//! notifications.
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use log::{debug, error, info, warn};
use stocks_common::{
    ApiConfig, CompanyDirectory, HttpFetch, Phase, Result, StocksError, ViewState,
};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::directory_client::DirectoryClient;
use crate::logo_client::LogoClient;
use crate::quote_client::QuoteClient;

/// Handle to the fetches launched by one selection.
#[must_use = "dropping a Selection detaches its fetches"]
pub struct Selection {
    symbol: String,
    generation: u64,
    quote_task: JoinHandle<()>,
    logo_task: JoinHandle<()>,
}

impl Selection {
    /// Symbol that was selected.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Generation assigned to this selection.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Waits until both the quote and the logo fetch have completed, whether
    /// or not their results were applied.
    pub async fn settled(self) {
        for (kind, task) in [("quote", self.quote_task), ("logo", self.logo_task)] {
            if let Err(e) = task.await {
                error!("{} fetch task for {} failed: {}", kind, self.symbol, e);
            }
        }
    }
}

/// Coordinates directory loading, selection and the per-selection fetches.
pub struct QuoteCoordinator<H> {
    directory_client: DirectoryClient<H>,
    quote_client: QuoteClient<H>,
    logo_client: LogoClient<H>,
    directory: RwLock<CompanyDirectory>,
    /// Number of `start()` calls; the latest one owns the directory slot.
    directory_loads: AtomicU64,
    state: Arc<watch::Sender<ViewState>>,
}

impl<H: HttpFetch + 'static> QuoteCoordinator<H> {
    /// Creates an idle coordinator. Nothing is fetched until `start()`.
    pub fn new(http: Arc<H>, config: ApiConfig) -> Self {
        let config = Arc::new(config);
        let (state, _) = watch::channel(ViewState::default());
        Self {
            directory_client: DirectoryClient::new(Arc::clone(&http), Arc::clone(&config)),
            quote_client: QuoteClient::new(Arc::clone(&http), Arc::clone(&config)),
            logo_client: LogoClient::new(http, config),
            directory: RwLock::new(CompanyDirectory::new()),
            directory_loads: AtomicU64::new(0),
            state: Arc::new(state),
        }
    }

    /// Loads (or reloads) the directory and selects its first company.
    ///
    /// Returns the auto-selection, or `None` when the directory is empty. A
    /// failed load leaves the coordinator in `Phase::Error` with no selection
    /// and is returned to the caller; calling `start()` again retries. If
    /// another `start()` begins before this one completes, this one fails
    /// with `Superseded` and the newer load decides the directory.
    pub async fn start(&self) -> Result<Option<Selection>> {
        let mut load = 0;
        self.state.send_modify(|s| {
            load = self.directory_loads.fetch_add(1, Ordering::SeqCst) + 1;
            s.begin_directory_load();
        });
        info!("Loading company directory (load {})", load);

        let companies = match self.directory_client.fetch_all().await {
            Ok(companies) => companies,
            Err(e) => {
                error!("Company directory load failed: {}", e);
                self.state.send_if_modified(|s| {
                    if self.directory_loads.load(Ordering::SeqCst) != load {
                        return false;
                    }
                    s.fail_directory(e.to_string());
                    true
                });
                return Err(e);
            }
        };

        // The supersede check, the directory swap and the auto-selection all
        // happen under the state lock, so no selection can interleave.
        let mut outcome: Result<Option<(String, u64)>> = Ok(None);
        self.state.send_if_modified(|s| {
            if self.directory_loads.load(Ordering::SeqCst) != load {
                outcome = Err(StocksError::Superseded(format!(
                    "directory load {} replaced by a newer load",
                    load
                )));
                return false;
            }
            let mut directory = match self.directory.write() {
                Ok(directory) => directory,
                Err(e) => {
                    outcome = Err(e.into());
                    return false;
                }
            };
            directory.load(companies);
            outcome = Ok(match directory.symbol_at(0) {
                Some(symbol) => {
                    let symbol = symbol.to_string();
                    let generation = s.begin_selection(&symbol);
                    Some((symbol, generation))
                }
                None => {
                    s.finish_empty_directory();
                    None
                }
            });
            true
        });

        match outcome {
            Ok(Some((symbol, generation))) => Ok(Some(self.spawn_fetches(symbol, generation))),
            Ok(None) => {
                warn!("Company directory is empty, nothing to select");
                Ok(None)
            }
            Err(e) => {
                debug!("Directory load {} not applied: {}", load, e);
                Err(e)
            }
        }
    }

    /// Selects the company at picker row `index`.
    ///
    /// Must be called from within a Tokio runtime. Fails with
    /// `InvalidSelection` when the directory is empty or `index` is out of
    /// range, and with `DirectoryLoading` while `start()` is in flight.
    pub fn select(&self, index: usize) -> Result<Selection> {
        self.select_where(|directory| {
            if index < directory.count() {
                Ok(index)
            } else {
                Err(StocksError::InvalidSelection {
                    index,
                    len: directory.count(),
                })
            }
        })
    }

    /// Selects the company registered under `symbol`.
    pub fn select_symbol(&self, symbol: &str) -> Result<Selection> {
        self.select_where(|directory| {
            directory
                .position_of(symbol)
                .ok_or_else(|| StocksError::NotFound(format!("symbol '{}'", symbol)))
        })
    }

    /// Selects the company with display name `name`.
    pub fn select_name(&self, name: &str) -> Result<Selection> {
        self.select_where(|directory| {
            let symbol = directory.symbol_of(name)?;
            directory
                .position_of(symbol)
                .ok_or_else(|| StocksError::NotFound(format!("symbol '{}'", symbol)))
        })
    }

    /// Current state.
    pub fn snapshot(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Receiver notified after every state transition.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    /// Copy of the loaded directory.
    pub fn directory(&self) -> Result<CompanyDirectory> {
        Ok(self.directory.read()?.clone())
    }

    /// Resolves a row with `resolve` and starts the selection, both under the
    /// state lock so a directory swap cannot slip in between.
    fn select_where<F>(&self, resolve: F) -> Result<Selection>
    where
        F: FnOnce(&CompanyDirectory) -> Result<usize>,
    {
        let mut outcome: Result<(String, u64)> = Err(StocksError::DirectoryLoading);
        self.state.send_if_modified(|s| {
            if s.phase == Phase::DirectoryLoading {
                return false;
            }
            outcome = self
                .directory
                .read()
                .map_err(StocksError::from)
                .and_then(|directory| {
                    let index = resolve(&*directory)?;
                    let symbol = directory
                        .symbol_at(index)
                        .ok_or(StocksError::InvalidSelection {
                            index,
                            len: directory.count(),
                        })?
                        .to_string();
                    let generation = s.begin_selection(&symbol);
                    Ok((symbol, generation))
                });
            outcome.is_ok()
        });

        let (symbol, generation) = outcome?;
        Ok(self.spawn_fetches(symbol, generation))
    }

    fn spawn_fetches(&self, symbol: String, generation: u64) -> Selection {
        info!("Selected {} (generation {})", symbol, generation);

        let quote_task = {
            let client = self.quote_client.clone();
            let state = Arc::clone(&self.state);
            let symbol = symbol.clone();
            tokio::spawn(async move {
                let result = client.fetch_quote(&symbol).await;
                if let Err(e) = &result {
                    warn!("Quote for {} failed: {}", symbol, e);
                }
                state.send_if_modified(|s| s.apply_quote(generation, result));
            })
        };

        let logo_task = {
            let client = self.logo_client.clone();
            let state = Arc::clone(&self.state);
            let symbol = symbol.clone();
            tokio::spawn(async move {
                let logo = client.fetch_logo(&symbol).await;
                state.send_if_modified(|s| s.apply_logo(generation, logo));
            })
        };

        Selection {
            symbol,
            generation,
            quote_task,
            logo_task,
        }
    }
}
