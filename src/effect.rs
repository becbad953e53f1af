//! Effects - side effects declared by the reducer

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Request current conditions for the city, exactly as typed
    FetchWeather { city: String },
}
