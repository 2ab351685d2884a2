//! Human-readable size labels.
//!
//! `du` reports sizes in kibibytes, so the label ladder starts at `KiB` and
//! climbs in steps of 1024 up to `TiB`.

/// Unit labels, one per power of 1024 above the input unit.
pub const UNITS: [&str; 4] = ["KiB", "MiB", "GiB", "TiB"];

/// Format a size in kibibytes as a short label with one decimal place.
///
/// The value is divided by 1024 while it is at least 1024 and a larger unit
/// is left. Values past the last unit stay in `TiB`, so the number can grow
/// beyond 1024 there.
///
/// # Examples
///
/// ```
/// # use du2treemap::utils::format_size;
/// assert_eq!(format_size(0), "0.0 KiB");
/// assert_eq!(format_size(1500), "1.5 MiB");
/// assert_eq!(format_size(1024 * 1024 * 1024), "1.0 TiB");
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_size(size: u64) -> String {
    let mut value = size as f64;
    let mut unit = UNITS[0];

    for &next in &UNITS[1..] {
        if value < 1024.0 {
            break;
        }
        value /= 1024.0;
        unit = next;
    }

    format!("{value:.1} {unit}")
}
