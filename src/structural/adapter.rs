// Pattern: Adapter
// A third-party weather API speaks Kelvin; the app wants Celsius.

const KELVIN_OFFSET: f64 = 273.15;

/// Interface of the external API.
pub trait KelvinSource {
    fn temperature(&self) -> f64;
}

/// Interface the app expects.
pub trait CelsiusSource {
    fn temperature_celsius(&self) -> f64;
}

/// Stand-in for the external service.
#[derive(Debug, Clone, Copy)]
pub struct WeatherApi {
    kelvin: f64,
}

impl WeatherApi {
    pub fn new() -> Self {
        Self { kelvin: 300.0 }
    }

    pub fn with_reading(kelvin: f64) -> Self {
        Self { kelvin }
    }
}

impl Default for WeatherApi {
    fn default() -> Self {
        Self::new()
    }
}

impl KelvinSource for WeatherApi {
    fn temperature(&self) -> f64 {
        self.kelvin
    }
}

fn format_celsius(celsius: f64) -> String {
    format!("A temperatura atual é {:.2}°C.", celsius)
}

// ============================================================================
// With the pattern
// ============================================================================

pub struct WeatherAdapter<K> {
    api: K,
}

impl<K: KelvinSource> WeatherAdapter<K> {
    pub fn new(api: K) -> Self {
        Self { api }
    }
}

impl<K: KelvinSource> CelsiusSource for WeatherAdapter<K> {
    fn temperature_celsius(&self) -> f64 {
        self.api.temperature() - KELVIN_OFFSET
    }
}

pub struct WeatherApp<S> {
    source: S,
}

impl<S: CelsiusSource> WeatherApp<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn show_temperature(&self) -> String {
        format_celsius(self.source.temperature_celsius())
    }
}

// ============================================================================
// Without the pattern: the app knows about Kelvin
// ============================================================================

pub struct WeatherAppWithoutAdapter {
    api: WeatherApi,
}

impl WeatherAppWithoutAdapter {
    pub fn new(api: WeatherApi) -> Self {
        Self { api }
    }

    pub fn show_temperature(&self) -> String {
        let kelvin = self.api.temperature();
        format_celsius(kelvin - KELVIN_OFFSET)
    }
}
