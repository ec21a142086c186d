use std::path::PathBuf;

const DEFAULT_WINDOW_SIZE: (u32, u32) = (1920, 1080);

#[derive(Debug, Clone)]
pub struct LaunchConfig {
    pub(crate) headless: bool,
    pub(crate) zoom_percent: u32,
    pub(crate) window_size: (u32, u32),
    pub(crate) executable: Option<PathBuf>,
}

pub struct LaunchConfigBuilder {
    config: LaunchConfig,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            headless: true,
            zoom_percent: 100,
            window_size: DEFAULT_WINDOW_SIZE,
            executable: None,
        }
    }
}

impl LaunchConfig {
    pub fn builder() -> LaunchConfigBuilder {
        LaunchConfigBuilder::new()
    }

    pub fn is_headless(&self) -> bool {
        self.headless
    }

    pub fn zoom_percent(&self) -> u32 {
        self.zoom_percent
    }

    /// Extra Chrome switches on top of the ones `headless_chrome` always passes.
    pub(crate) fn extra_args(&self) -> Vec<String> {
        let mut args = vec![
            "--disable-dev-shm-usage".to_string(),
            "--disable-gpu".to_string(),
            "--disable-extensions".to_string(),
            "--disable-plugins".to_string(),
            "--disable-background-timer-throttling".to_string(),
            "--disable-backgrounding-occluded-windows".to_string(),
            "--disable-renderer-backgrounding".to_string(),
        ];

        if self.zoom_percent != 100 {
            let factor = self.zoom_percent as f64 / 100.0;
            args.push(format!("--force-device-scale-factor={factor}"));
        }

        args
    }
}

impl Default for LaunchConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LaunchConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: LaunchConfig::default(),
        }
    }

    pub fn set_headless(mut self, headless: bool) -> Self {
        self.config.headless = headless;

        self
    }

    pub fn set_zoom_percent(mut self, zoom_percent: u32) -> Self {
        self.config.zoom_percent = zoom_percent.max(1);

        self
    }

    pub fn set_window_size(mut self, width: u32, height: u32) -> Self {
        self.config.window_size = (width, height);

        self
    }

    pub fn set_executable(mut self, executable: Option<PathBuf>) -> Self {
        self.config.executable = executable;

        self
    }

    pub fn build(self) -> LaunchConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_zoom_adds_no_scale_factor() {
        let config = LaunchConfig::builder().build();

        assert!(config.is_headless());
        assert!(
            !config
                .extra_args()
                .iter()
                .any(|arg| arg.starts_with("--force-device-scale-factor"))
        );
    }

    #[test]
    fn zoom_becomes_device_scale_factor() {
        let config = LaunchConfig::builder().set_zoom_percent(25).build();

        assert!(
            config
                .extra_args()
                .contains(&"--force-device-scale-factor=0.25".to_string())
        );
    }

    #[test]
    fn zero_zoom_is_clamped() {
        let config = LaunchConfig::builder().set_zoom_percent(0).build();

        assert_eq!(config.zoom_percent(), 1);
    }
}
