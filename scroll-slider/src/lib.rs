pub mod buffer;
pub mod config;
pub mod element;
pub mod error;
pub mod event;
pub mod hit;
pub mod layout;
pub mod render;
pub mod scroll;
pub mod slider;
pub mod state;
pub mod terminal;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use config::SliderConfig;
pub use element::{Button, Container, Elements, NavButton, ScrollContainer};
pub use error::SliderError;
pub use event::{Event, Key, MouseButton};
pub use hit::hit_test;
pub use layout::{layout_slider, Rect, SliderLayout};
pub use render::render_slider;
pub use scroll::{Easing, ScrollAnimation, ScrollRequest};
pub use slider::ScrollSlider;
pub use state::{compute_state, Measurements, Presentation, SliderState};
pub use terminal::Terminal;
pub use types::*;
