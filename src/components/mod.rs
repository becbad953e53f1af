pub mod headline;
pub mod info_tile;
pub mod query_bar;
pub mod title_banner;
pub mod weather_app;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use headline::{Headline, HeadlineProps};
pub use info_tile::{InfoTile, InfoTileProps};
pub use query_bar::{QueryBar, QueryBarProps};
pub use title_banner::{TitleBanner, TitleBannerProps};
pub use weather_app::{WeatherApp, WeatherAppProps};
