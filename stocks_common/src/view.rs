//! Renderer-facing state snapshot and the transitions that rewrite it.
//!
//! `ViewState` is the single slot the coordinator writes. Every fetch result
//! carries the selection generation it was started for; results whose
//! generation no longer matches the slot are rejected, so a slow response for
//! an old selection can never overwrite a newer one.

use log::debug;
use strum_macros::Display;

use crate::logo::LogoImage;
use crate::quote::Quote;
use crate::result::Result;

/// What the renderer should show for the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ViewStatus {
    /// Something is being fetched.
    Loading,
    /// The quote for the current selection is available.
    Loaded,
    /// The directory or the quote could not be fetched.
    Error,
}

/// Coordinator lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Phase {
    /// `start()` has not been called yet.
    Idle,
    /// The company list request is in flight.
    DirectoryLoading,
    /// The selection is settled (or the directory is empty).
    Ready,
    /// Quote and logo requests for the selection are in flight.
    Refreshing,
    /// The last directory load or quote fetch failed.
    Error,
}

/// Snapshot consumed by renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Coordinator lifecycle phase.
    pub phase: Phase,
    /// Loading / loaded / error.
    pub status: ViewStatus,
    /// Symbol of the current selection.
    pub selected_symbol: Option<String>,
    /// Quote of the current selection, once received.
    pub quote: Option<Quote>,
    /// Logo of the current selection, once received (possibly the fallback).
    pub logo: Option<LogoImage>,
    /// Message to display when `status` is `Error`.
    pub error_message: Option<String>,
    /// Selection generation this snapshot belongs to.
    pub generation: u64,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            phase: Phase::Idle,
            status: ViewStatus::Loading,
            selected_symbol: None,
            quote: None,
            logo: None,
            error_message: None,
            generation: 0,
        }
    }
}

impl ViewState {
    /// Enters `DirectoryLoading`, dropping the selection and invalidating any
    /// fetch still in flight.
    pub fn begin_directory_load(&mut self) {
        self.generation += 1;
        self.phase = Phase::DirectoryLoading;
        self.status = ViewStatus::Loading;
        self.selected_symbol = None;
        self.quote = None;
        self.logo = None;
        self.error_message = None;
    }

    /// Records a failed directory load. There is no selection afterwards.
    pub fn fail_directory(&mut self, message: String) {
        self.phase = Phase::Error;
        self.status = ViewStatus::Error;
        self.selected_symbol = None;
        self.error_message = Some(message);
    }

    /// Records a directory that loaded with no companies in it.
    pub fn finish_empty_directory(&mut self) {
        self.phase = Phase::Ready;
        self.status = ViewStatus::Loaded;
        self.selected_symbol = None;
    }

    /// Starts a new selection and returns its generation.
    pub fn begin_selection(&mut self, symbol: &str) -> u64 {
        self.generation += 1;
        self.phase = Phase::Refreshing;
        self.status = ViewStatus::Loading;
        self.selected_symbol = Some(symbol.to_string());
        self.quote = None;
        self.logo = None;
        self.error_message = None;
        self.generation
    }

    /// Applies a quote result. Returns `false` when `generation` is stale and
    /// nothing changed.
    pub fn apply_quote(&mut self, generation: u64, result: Result<Quote>) -> bool {
        if generation != self.generation {
            debug!(
                "Discarding stale quote (generation {}, current {})",
                generation, self.generation
            );
            return false;
        }
        match result {
            Ok(quote) => {
                self.quote = Some(quote);
                self.status = ViewStatus::Loaded;
                self.phase = Phase::Ready;
                self.error_message = None;
            }
            Err(e) => {
                self.quote = None;
                self.status = ViewStatus::Error;
                self.phase = Phase::Error;
                self.error_message = Some(e.to_string());
            }
        }
        true
    }

    /// Applies a logo. The status is left untouched. Returns `false` when
    /// `generation` is stale.
    pub fn apply_logo(&mut self, generation: u64, logo: LogoImage) -> bool {
        if generation != self.generation {
            debug!(
                "Discarding stale logo for {} (generation {}, current {})",
                logo.symbol, generation, self.generation
            );
            return false;
        }
        self.logo = Some(logo);
        true
    }
}
