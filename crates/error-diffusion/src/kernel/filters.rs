//! Named filters and the shipped kernel tables.
//!
//! Each table is laid out with the current pixel in the center column of
//! row 0. Weights are stored pre-divided, so a kernel propagates
//! `weight_sum()` of every residual.
//!
//! [`FLOYD_STEINBERG`] is the classic 4-neighbor /16 table. The 12-neighbor
//! /48 table that some tools ship under the Floyd-Steinberg name is
//! [`JARVIS_JUDICE_NINKE`], so `floyd-steinberg` output differs from theirs.

use std::borrow::Cow;

use super::Kernel;

/// A kernel paired with a human-readable name.
///
/// The name is used for reporting and output naming only; it has no
/// effect on diffusion.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    name: Cow<'static, str>,
    kernel: Kernel,
}

impl Filter {
    /// Pair a name with a kernel.
    pub fn new(name: impl Into<Cow<'static, str>>, kernel: Kernel) -> Self {
        Self {
            name: name.into(),
            kernel,
        }
    }

    const fn shipped(name: &'static str, kernel: Kernel) -> Self {
        Self {
            name: Cow::Borrowed(name),
            kernel,
        }
    }

    /// Display name, e.g. `"Floyd-Steinberg"`.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The diffusion kernel.
    #[inline]
    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }
}

/// Floyd-Steinberg: 4 neighbors, 100% propagation.
///
/// ```text
///        X   7
///    3   5   1      (/16)
/// ```
pub static FLOYD_STEINBERG: Filter = Filter::shipped(
    "Floyd-Steinberg",
    Kernel::from_static(
        3,
        2,
        &[
            0.0, 0.0, 7.0 / 16.0, //
            3.0 / 16.0, 5.0 / 16.0, 1.0 / 16.0,
        ],
    ),
);

/// Jarvis-Judice-Ninke: 12 neighbors over 3 rows, 100% propagation.
///
/// ```text
///            X   7   5
///    3   5   7   5   3
///    1   3   5   3   1      (/48)
/// ```
pub static JARVIS_JUDICE_NINKE: Filter = Filter::shipped(
    "Jarvis-Judice-Ninke",
    Kernel::from_static(
        5,
        3,
        &[
            0.0, 0.0, 0.0, 7.0 / 48.0, 5.0 / 48.0, //
            3.0 / 48.0, 5.0 / 48.0, 7.0 / 48.0, 5.0 / 48.0, 3.0 / 48.0, //
            1.0 / 48.0, 3.0 / 48.0, 5.0 / 48.0, 3.0 / 48.0, 1.0 / 48.0,
        ],
    ),
);

/// Stucki: JJN layout with heavier center weights, 100% propagation.
///
/// ```text
///            X   8   4
///    2   4   8   4   2
///    1   2   4   2   1      (/42)
/// ```
pub static STUCKI: Filter = Filter::shipped(
    "Stucki",
    Kernel::from_static(
        5,
        3,
        &[
            0.0, 0.0, 0.0, 8.0 / 42.0, 4.0 / 42.0, //
            2.0 / 42.0, 4.0 / 42.0, 8.0 / 42.0, 4.0 / 42.0, 2.0 / 42.0, //
            1.0 / 42.0, 2.0 / 42.0, 4.0 / 42.0, 2.0 / 42.0, 1.0 / 42.0,
        ],
    ),
);

/// Atkinson: 6 neighbors, 75% propagation.
///
/// The dropped quarter of the residual gives the characteristic lighter,
/// higher-contrast look.
///
/// ```text
///        X   1   1
///    1   1   1
///        1              (/8)
/// ```
pub static ATKINSON: Filter = Filter::shipped(
    "Atkinson",
    Kernel::from_static(
        5,
        3,
        &[
            0.0, 0.0, 0.0, 1.0 / 8.0, 1.0 / 8.0, //
            0.0, 1.0 / 8.0, 1.0 / 8.0, 1.0 / 8.0, 0.0, //
            0.0, 0.0, 1.0 / 8.0, 0.0, 0.0,
        ],
    ),
);

/// Burkes: two-row Stucki, 100% propagation.
///
/// ```text
///            X   8   4
///    2   4   8   4   2      (/32)
/// ```
pub static BURKES: Filter = Filter::shipped(
    "Burkes",
    Kernel::from_static(
        5,
        2,
        &[
            0.0, 0.0, 0.0, 8.0 / 32.0, 4.0 / 32.0, //
            2.0 / 32.0, 4.0 / 32.0, 8.0 / 32.0, 4.0 / 32.0, 2.0 / 32.0,
        ],
    ),
);

/// Sierra-3 (full Sierra): 10 neighbors over 3 rows, 100% propagation.
///
/// ```text
///            X   5   3
///    2   4   5   4   2
///        2   3   2          (/32)
/// ```
pub static SIERRA_3: Filter = Filter::shipped(
    "Sierra-3",
    Kernel::from_static(
        5,
        3,
        &[
            0.0, 0.0, 0.0, 5.0 / 32.0, 3.0 / 32.0, //
            2.0 / 32.0, 4.0 / 32.0, 5.0 / 32.0, 4.0 / 32.0, 2.0 / 32.0, //
            0.0, 2.0 / 32.0, 3.0 / 32.0, 2.0 / 32.0, 0.0,
        ],
    ),
);

/// Sierra-2 (two-row Sierra): 7 neighbors, 100% propagation.
///
/// ```text
///            X   4   3
///    1   2   3   2   1      (/16)
/// ```
pub static SIERRA_2: Filter = Filter::shipped(
    "Sierra-2",
    Kernel::from_static(
        5,
        2,
        &[
            0.0, 0.0, 0.0, 4.0 / 16.0, 3.0 / 16.0, //
            1.0 / 16.0, 2.0 / 16.0, 3.0 / 16.0, 2.0 / 16.0, 1.0 / 16.0,
        ],
    ),
);

/// Sierra-Lite: 3 neighbors, 100% propagation.
///
/// ```text
///        X   2
///    1   1              (/4)
/// ```
pub static SIERRA_LITE: Filter = Filter::shipped(
    "Sierra-Lite",
    Kernel::from_static(
        3,
        2,
        &[
            0.0, 0.0, 2.0 / 4.0, //
            1.0 / 4.0, 1.0 / 4.0, 0.0,
        ],
    ),
);

/// Every shipped filter, in the order `all` expands to.
pub static ALL_FILTERS: [&Filter; 8] = [
    &ATKINSON,
    &BURKES,
    &FLOYD_STEINBERG,
    &STUCKI,
    &SIERRA_2,
    &SIERRA_3,
    &SIERRA_LITE,
    &JARVIS_JUDICE_NINKE,
];

/// Find a shipped filter by selection name.
///
/// Accepts the short selection names (`atkinson`, `burkes`,
/// `floyd-steinberg`, `stucki`, `sierra2`, `sierra3`, `sierra-lite`,
/// `jarvis-judice-ninke`, `jjn`) as well as display names. Matching is
/// case-insensitive and ignores surrounding whitespace.
///
/// ```
/// use error_diffusion::kernel::lookup;
///
/// assert_eq!(lookup("sierra2").unwrap().name(), "Sierra-2");
/// assert_eq!(lookup(" Floyd-Steinberg ").unwrap().name(), "Floyd-Steinberg");
/// assert!(lookup("bayer").is_none());
/// ```
pub fn lookup(name: &str) -> Option<&'static Filter> {
    let name = name.trim().to_ascii_lowercase();
    let filter: &'static Filter = match name.as_str() {
        "atkinson" => &ATKINSON,
        "burkes" => &BURKES,
        "floyd-steinberg" | "floydsteinberg" => &FLOYD_STEINBERG,
        "stucki" => &STUCKI,
        "sierra2" | "sierra-2" => &SIERRA_2,
        "sierra3" | "sierra-3" => &SIERRA_3,
        "sierra-lite" | "sierralite" => &SIERRA_LITE,
        "jarvis-judice-ninke" | "jjn" => &JARVIS_JUDICE_NINKE,
        _ => return None,
    };
    Some(filter)
}
