//! Temperature updates fanned out to registered observers

/// Receives temperature readings from a station
pub trait TemperatureObserver: Send {
    /// Stable label used for unsubscription
    fn label(&self) -> &str;

    /// Render this observer's update line for a reading
    fn on_reading(&self, celsius: f32) -> String;
}

/// Phone display observer
#[derive(Debug, Default)]
pub struct PhoneDisplay;

impl TemperatureObserver for PhoneDisplay {
    fn label(&self) -> &str {
        "phone"
    }

    fn on_reading(&self, celsius: f32) -> String {
        format!("Phone Display: Current temperature is {celsius}\u{b0}C")
    }
}

/// Web dashboard observer
#[derive(Debug, Default)]
pub struct WebDashboard;

impl TemperatureObserver for WebDashboard {
    fn label(&self) -> &str {
        "web"
    }

    fn on_reading(&self, celsius: f32) -> String {
        format!("Web Dashboard: Current temperature is {celsius}\u{b0}C")
    }
}

/// Subject: owns the reading and the observer list
#[derive(Default)]
pub struct WeatherStation {
    observers: Vec<Box<dyn TemperatureObserver>>,
    temperature: f32,
}

impl WeatherStation {
    /// Station with no observers and a zero reading
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer; it is notified on every subsequent update
    pub fn subscribe(&mut self, observer: Box<dyn TemperatureObserver>) {
        self.observers.push(observer);
    }

    /// Drop the observer with the given label; `true` if one was removed
    pub fn unsubscribe(&mut self, label: &str) -> bool {
        let before = self.observers.len();
        self.observers.retain(|o| o.label() != label);
        self.observers.len() < before
    }

    /// Update the reading and notify every observer in subscription order
    pub fn set_temperature(&mut self, celsius: f32) -> Vec<String> {
        self.temperature = celsius;
        self.observers
            .iter()
            .map(|o| o.on_reading(celsius))
            .collect()
    }

    /// Current reading
    #[inline]
    #[must_use]
    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    /// Number of registered observers
    #[inline]
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}
