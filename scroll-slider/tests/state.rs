use scroll_slider::{
    compute_state, Display, Justify, Measurements, NavButton, ScrollBehavior, ScrollContainer,
    ScrollSlider, SliderConfig,
};
use scroll_slider::scroll::ScrollRequest;

/// Container with fixed measurements that records scroll requests.
#[derive(Debug, Default)]
struct FakeContainer {
    measurements: Measurements,
    justify: Option<Justify>,
    requests: Vec<ScrollRequest>,
}

impl ScrollContainer for FakeContainer {
    fn id(&self) -> &str {
        "scrollContainer"
    }

    fn measurements(&self) -> Measurements {
        self.measurements
    }

    fn set_justify(&mut self, justify: Justify) {
        self.justify = Some(justify);
    }

    fn scroll_by(&mut self, request: ScrollRequest) -> bool {
        self.requests.push(request);
        false
    }
}

#[derive(Debug, Clone, PartialEq)]
struct FakeButton {
    id: &'static str,
    display: Option<Display>,
    disabled: Option<bool>,
}

impl FakeButton {
    fn new(id: &'static str) -> Self {
        Self {
            id,
            display: None,
            disabled: None,
        }
    }
}

impl NavButton for FakeButton {
    fn id(&self) -> &str {
        self.id
    }

    fn set_display(&mut self, display: Display) {
        self.display = Some(display);
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = Some(disabled);
    }

    fn is_active(&self) -> bool {
        self.display == Some(Display::Block) && self.disabled != Some(true)
    }
}

fn slider(scroll_left: u16, scroll_width: u16, client_width: u16) -> ScrollSlider<FakeContainer, FakeButton> {
    let container = FakeContainer {
        measurements: Measurements::new(scroll_left, scroll_width, client_width),
        ..Default::default()
    };
    ScrollSlider::new(
        container,
        FakeButton::new("leftButton"),
        FakeButton::new("rightButton"),
        SliderConfig::default(),
    )
}

// ============================================================================
// Pure State
// ============================================================================

#[test]
fn test_no_overflow_hides_buttons_regardless_of_offset() {
    for scroll_left in [0, 10, 500] {
        let state = compute_state(Measurements::new(scroll_left, 500, 500), 1);
        assert!(!state.overflowing);
        assert_eq!(state.presentation().buttons, Display::None);
        assert_eq!(state.presentation().justify, Justify::Center);
    }
}

#[test]
fn test_overflow_shows_buttons_left_aligned() {
    let state = compute_state(Measurements::new(0, 501, 500), 1);
    assert!(state.overflowing);
    assert_eq!(state.presentation().buttons, Display::Block);
    assert_eq!(state.presentation().justify, Justify::Start);
}

#[test]
fn test_at_start() {
    let state = compute_state(Measurements::new(0, 1500, 500), 1);
    assert!(state.left_disabled);
    assert!(!state.right_disabled);
}

#[test]
fn test_at_end() {
    let state = compute_state(Measurements::new(1000, 1500, 500), 1);
    assert!(!state.left_disabled);
    assert!(state.right_disabled);
}

#[test]
fn test_in_middle() {
    let state = compute_state(Measurements::new(500, 1500, 500), 1);
    assert!(!state.left_disabled);
    assert!(!state.right_disabled);
}

// ============================================================================
// Refresh
// ============================================================================

#[test]
fn test_refresh_without_overflow() {
    let mut slider = slider(0, 500, 500);
    slider.refresh();

    assert_eq!(slider.container().justify, Some(Justify::Center));
    assert_eq!(slider.left().display, Some(Display::None));
    assert_eq!(slider.right().display, Some(Display::None));
    // Disabled flags are not touched while hidden
    assert_eq!(slider.left().disabled, None);
    assert_eq!(slider.right().disabled, None);
}

#[test]
fn test_refresh_with_overflow() {
    let mut slider = slider(0, 1500, 500);
    slider.refresh();

    assert_eq!(slider.container().justify, Some(Justify::Start));
    assert_eq!(slider.left().display, Some(Display::Block));
    assert_eq!(slider.left().disabled, Some(true));
    assert_eq!(slider.right().display, Some(Display::Block));
    assert_eq!(slider.right().disabled, Some(false));
}

#[test]
fn test_refresh_is_idempotent() {
    let mut slider = slider(500, 1500, 500);
    let first = slider.refresh();
    let buttons = (slider.left().clone(), slider.right().clone());

    let second = slider.refresh();
    assert_eq!(first, second);
    assert_eq!((slider.left().clone(), slider.right().clone()), buttons);
}

#[test]
fn test_edge_tolerance_is_configurable() {
    let container = FakeContainer {
        measurements: Measurements::new(995, 1500, 500),
        ..Default::default()
    };
    let mut slider = ScrollSlider::new(
        container,
        FakeButton::new("leftButton"),
        FakeButton::new("rightButton"),
        SliderConfig::default().with_edge_tolerance(5),
    );

    slider.refresh();
    assert_eq!(slider.right().disabled, Some(true));
}

// ============================================================================
// Scroll Requests
// ============================================================================

#[test]
fn test_scroll_forward_requests_one_viewport() {
    let mut slider = slider(0, 1500, 500);
    let request = slider.scroll(1);

    assert_eq!(request, ScrollRequest::new(500, ScrollBehavior::Smooth));
    assert_eq!(slider.container().requests, vec![request]);
}

#[test]
fn test_scroll_back_requests_negative_viewport() {
    let mut slider = slider(500, 1500, 500);
    assert_eq!(slider.scroll(-1).left, -500);
}

#[test]
fn test_scroll_magnitude_scales_distance() {
    let mut slider = slider(0, 1500, 500);
    assert_eq!(slider.scroll(2).left, 1000);
}
