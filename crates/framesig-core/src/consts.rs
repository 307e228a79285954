/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.114;

/// Number of bins in the intensity histogram (one per 8-bit level).
pub const HISTOGRAM_BINS: usize = 256;

/// Frame rate assumed when neither the source nor the config provides one.
pub const DEFAULT_FRAME_RATE: f64 = 25.0;

/// SER timestamp resolution: ticks per second (100 ns units).
pub const SER_TICKS_PER_SECOND: f64 = 10_000_000.0;

/// Entropy chart dimensions in pixels.
pub const CHART_WIDTH: u32 = 1000;
pub const CHART_HEIGHT: u32 = 600;

/// Fixed vertical axis range of the entropy chart.
pub const ENTROPY_PLOT_Y_MAX: f64 = 8.0;

/// Render size of the spectrum panel before it is resized onto the frame.
pub const SPECTRUM_PANEL_WIDTH: u32 = 640;
pub const SPECTRUM_PANEL_HEIGHT: u32 = 480;

/// Number of tick labels per axis on the spectrum panel.
pub const SPECTRUM_AXIS_TICKS: usize = 5;
