//! Sequential palettes (one-directional magnitude).
//!
//! Suitable for data that progresses from low to high. Stop lists
//! approximate the cmocean sequential colormaps.

use once_cell::sync::Lazy;

use super::{ramp, Palette};

static THERMAL: Lazy<Palette> = Lazy::new(|| {
    ramp(
        "thermal",
        &[
            [4, 35, 51],
            [38, 48, 118],
            [110, 58, 139],
            [183, 73, 114],
            [235, 106, 68],
            [251, 176, 61],
            [232, 250, 91],
        ],
    )
});

static HALINE: Lazy<Palette> = Lazy::new(|| {
    ramp(
        "haline",
        &[
            [42, 24, 108],
            [27, 69, 136],
            [40, 107, 120],
            [59, 140, 110],
            [97, 171, 92],
            [166, 196, 84],
            [253, 238, 154],
        ],
    )
});

static SPEED: Lazy<Palette> = Lazy::new(|| {
    ramp(
        "speed",
        &[
            [255, 253, 205],
            [190, 214, 130],
            [114, 183, 96],
            [48, 143, 89],
            [20, 98, 73],
            [23, 35, 19],
        ],
    )
});

static TEMPO: Lazy<Palette> = Lazy::new(|| {
    ramp(
        "tempo",
        &[
            [255, 246, 244],
            [200, 220, 206],
            [128, 185, 169],
            [62, 142, 143],
            [36, 98, 122],
            [32, 53, 93],
            [20, 29, 67],
        ],
    )
});

static AMP: Lazy<Palette> = Lazy::new(|| {
    ramp(
        "amp",
        &[
            [241, 237, 236],
            [230, 193, 172],
            [219, 146, 119],
            [202, 97, 82],
            [169, 48, 57],
            [120, 13, 45],
            [60, 9, 18],
        ],
    )
});

static DENSE: Lazy<Palette> = Lazy::new(|| {
    ramp(
        "dense",
        &[
            [230, 240, 241],
            [168, 200, 218],
            [114, 152, 198],
            [93, 102, 177],
            [81, 59, 135],
            [54, 24, 83],
            [35, 13, 53],
        ],
    )
});

static DEEP: Lazy<Palette> = Lazy::new(|| {
    ramp(
        "deep",
        &[
            [253, 253, 204],
            [185, 212, 173],
            [116, 175, 160],
            [74, 135, 146],
            [53, 93, 121],
            [42, 53, 92],
            [39, 26, 57],
        ],
    )
});

static RAIN: Lazy<Palette> = Lazy::new(|| {
    ramp(
        "rain",
        &[
            [238, 237, 237],
            [197, 211, 184],
            [140, 184, 164],
            [86, 150, 154],
            [49, 110, 139],
            [29, 69, 115],
            [26, 30, 66],
        ],
    )
});

static MATTER: Lazy<Palette> = Lazy::new(|| {
    ramp(
        "matter",
        &[
            [254, 237, 176],
            [243, 191, 123],
            [233, 144, 97],
            [213, 96, 91],
            [172, 56, 104],
            [120, 30, 105],
            [47, 15, 61],
        ],
    )
});

static VIRIDIS: Lazy<Palette> = Lazy::new(|| Palette::new("viridis", colorgrad::viridis()));

/// Thermal palette - temperature
pub fn thermal() -> Palette {
    THERMAL.clone()
}

/// Haline palette - salinity
pub fn haline() -> Palette {
    HALINE.clone()
}

/// Speed palette - velocity magnitude and kinetic energy
pub fn speed() -> Palette {
    SPEED.clone()
}

/// Tempo palette - rates and frequencies
pub fn tempo() -> Palette {
    TEMPO.clone()
}

/// Amp palette - nonnegative amplitudes such as sea-surface height anomaly
pub fn amp() -> Palette {
    AMP.clone()
}

/// Dense palette - density
pub fn dense() -> Palette {
    DENSE.clone()
}

/// Deep palette - bathymetry and depth
pub fn deep() -> Palette {
    DEEP.clone()
}

/// Rain palette - accelerations and squared frequencies
pub fn rain() -> Palette {
    RAIN.clone()
}

/// Matter palette - tracer and dye concentration
pub fn matter() -> Palette {
    MATTER.clone()
}

/// Viridis palette - perceptually uniform, colorblind-friendly; the
/// sequential fallback when a variable's category is unknown
pub fn viridis() -> Palette {
    VIRIDIS.clone()
}
