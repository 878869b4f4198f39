//! Options for fitting a decoded image to requested bounds

/// How a decoded image is fitted before it is handed to its consumer.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleOptions {
    /// Maximum width; `<= 0` leaves width unconstrained
    pub max_width: i32,
    /// Maximum height; `<= 0` leaves height unconstrained
    pub max_height: i32,
    /// Keep the source aspect ratio when only one side is constrained,
    /// or fit inside both constraints when both are
    pub preserve_aspect_ratio: bool,
    /// Box-filter when minifying (magnification is always sampled)
    pub smooth: bool,
    /// Device pixel scale the consumer will apply to the result
    pub pixel_scale: f64,
}

impl Default for ScaleOptions {
    fn default() -> Self {
        Self {
            max_width: 0,
            max_height: 0,
            preserve_aspect_ratio: false,
            smooth: true,
            pixel_scale: 1.0,
        }
    }
}

impl ScaleOptions {
    /// Create options constraining the result to `max_width` x `max_height`
    pub fn fit(max_width: i32, max_height: i32) -> Self {
        Self {
            max_width,
            max_height,
            ..Default::default()
        }
    }

    /// Set whether the aspect ratio is preserved
    pub fn preserve_aspect_ratio(mut self, preserve: bool) -> Self {
        self.preserve_aspect_ratio = preserve;
        self
    }

    /// Set whether minification is smoothed
    pub fn smooth(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self
    }

    /// Set the device pixel scale
    pub fn pixel_scale(mut self, scale: f64) -> Self {
        self.pixel_scale = scale;
        self
    }
}
