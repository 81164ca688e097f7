//! Diverging palettes (signed deviation from a center).
//!
//! Suitable for data that diverges from a central value. Stop lists
//! approximate the cmocean diverging colormaps.

use once_cell::sync::Lazy;

use super::{ramp, Palette};

static BALANCE: Lazy<Palette> = Lazy::new(|| {
    ramp(
        "balance",
        &[
            [18, 29, 96],
            [56, 94, 169],
            [133, 152, 210],
            [214, 218, 235],
            [241, 237, 236],
            [235, 202, 185],
            [216, 141, 113],
            [180, 72, 67],
            [124, 20, 41],
        ],
    )
});

static DIFF: Lazy<Palette> = Lazy::new(|| {
    ramp(
        "diff",
        &[
            [11, 52, 60],
            [60, 112, 101],
            [144, 169, 142],
            [230, 230, 218],
            [170, 160, 117],
            [102, 87, 53],
            [41, 29, 19],
        ],
    )
});

static DELTA: Lazy<Palette> = Lazy::new(|| {
    ramp(
        "delta",
        &[
            [16, 31, 63],
            [41, 93, 153],
            [93, 157, 161],
            [254, 252, 196],
            [123, 167, 73],
            [38, 107, 52],
            [23, 35, 19],
        ],
    )
});

static CURL: Lazy<Palette> = Lazy::new(|| {
    ramp(
        "curl",
        &[
            [20, 45, 48],
            [27, 107, 101],
            [102, 163, 148],
            [222, 231, 226],
            [235, 180, 165],
            [195, 98, 100],
            [135, 37, 82],
            [52, 13, 53],
        ],
    )
});

static TOPO: Lazy<Palette> = Lazy::new(|| {
    ramp(
        "topo",
        &[
            [26, 22, 82],
            [51, 80, 145],
            [105, 156, 184],
            [182, 215, 213],
            [76, 120, 70],
            [146, 140, 90],
            [200, 185, 153],
            [250, 250, 250],
        ],
    )
});

static TARN: Lazy<Palette> = Lazy::new(|| {
    ramp(
        "tarn",
        &[
            [50, 25, 14],
            [140, 80, 38],
            [210, 165, 110],
            [245, 245, 240],
            [132, 166, 170],
            [49, 104, 123],
            [15, 50, 60],
        ],
    )
});

/// Balance palette - signed anomalies; the diverging fallback when a
/// variable's category is unknown
pub fn balance() -> Palette {
    BALANCE.clone()
}

/// Diff palette - differences of like quantities
pub fn diff() -> Palette {
    DIFF.clone()
}

/// Delta palette - signed velocity and energy
pub fn delta() -> Palette {
    DELTA.clone()
}

/// Curl palette - vorticity and rotation
pub fn curl() -> Palette {
    CURL.clone()
}

/// Topo palette - elevation about a datum
pub fn topo() -> Palette {
    TOPO.clone()
}

/// Tarn palette - signed accelerations
pub fn tarn() -> Palette {
    TARN.clone()
}
