//! Terminal rendering of `ViewState` snapshots.
//!
//! This is where the sign of the price change turns into a presentation hint.
use stocks_common::{LogoImage, Phase, Quote, ViewState, ViewStatus};

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Direction of the last price move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    /// Unchanged or higher than the previous close.
    Up,
    /// Lower than the previous close.
    Down,
}

impl Trend {
    /// Trend of `quote`, from the sign of its price change.
    pub fn of(quote: &Quote) -> Trend {
        if quote.is_decline() { Trend::Down } else { Trend::Up }
    }

    fn arrow(self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Trend::Up => GREEN,
            Trend::Down => RED,
        }
    }
}

/// One-line summary used for transition logs.
pub fn status_line(state: &ViewState) -> String {
    format!(
        "[{}] {} {}",
        state.phase,
        state.status,
        state.selected_symbol.as_deref().unwrap_or("-")
    )
}

/// Full card for the current selection.
pub fn render(state: &ViewState, color: bool) -> String {
    match (state.status, &state.quote) {
        (ViewStatus::Error, _) => format!(
            "Error: {}",
            state.error_message.as_deref().unwrap_or("unknown error")
        ),
        (ViewStatus::Loaded, Some(quote)) => render_quote(quote, state.logo.as_ref(), color),
        (ViewStatus::Loaded, None) if state.phase == Phase::Ready => {
            "No companies available".to_string()
        }
        _ => format!(
            "Loading {}...",
            state.selected_symbol.as_deref().unwrap_or("companies")
        ),
    }
}

fn render_quote(quote: &Quote, logo: Option<&LogoImage>, color: bool) -> String {
    let trend = Trend::of(quote);
    let change = format!("{} {:+.2}", trend.arrow(), quote.price_change);
    let change = if color {
        format!("{}{}{}", trend.color(), change, RESET)
    } else {
        change
    };
    let logo = match logo {
        Some(logo) => match logo.format {
            Some(format) => format!("{} ({} bytes)", format, logo.bytes.len()),
            None => "placeholder".to_string(),
        },
        None => "loading".to_string(),
    };

    format!(
        "{} ({})\nPrice:  {:.2}\nChange: {}\nLogo:   {}\nAs of:  {}",
        quote.company_name,
        quote.symbol,
        quote.price,
        change,
        logo,
        quote.fetched_at.format("%Y-%m-%d %H:%M:%S UTC"),
    )
}
