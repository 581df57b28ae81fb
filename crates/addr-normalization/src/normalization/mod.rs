//! Per-field address normalizers.
//!
//! Every normalizer maps a raw cell to `Some(canonical)` or `None`. `None`
//! covers missing, blank, and unrecognized input; it is never an error.

mod city;
mod state;
mod street;
mod text;
mod zip;

pub use city::normalize_city;
pub use state::normalize_state;
pub use street::normalize_street;
pub use text::title_case;
pub use zip::normalize_zip;

/// Trimmed, non-blank value or `None`.
fn present(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}
