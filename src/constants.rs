/// Static panel configuration: labels, example assets, slider range and the
/// inline style set used by the DOM adapter.
///
/// Keeping these in one place keeps string literals out of the binding code
/// and lets host tests check their relationships.
// Header row
pub const LABEL_SHOW_HIDE: &str = "show or hide";
pub const LABEL_DEBUG_GUI: &str = "enable debug gui";

// Text row
pub const LABEL_SUBMIT: &str = "submit";
pub const LABEL_DISABLE: &str = "disable";
pub const LABEL_CLEAR: &str = "clear";
pub const LABEL_EXAMPLE: &str = "toggle example";

// Cleared text field content; never empty so the engine always sees input
pub const CLEARED_TEXT: &str = " ";

// Slider rows
pub const LABEL_TIME: &str = "time";
pub const LABEL_IMG_SENS: &str = "img sens.";
pub const LABEL_IMG_MIX: &str = "img mix";

pub const SLIDER_MIN: i32 = 0;
pub const SLIDER_MAX: i32 = 100;
pub const SLIDER_DEFAULT: i32 = 50;

// Toggle row
pub const LABEL_COLOR: &str = "color";
pub const LABEL_BW: &str = "b&w";
pub const LABEL_PAUSE: &str = "pause";
pub const LABEL_PLAY: &str = "play";

pub const COLOR_INITIAL: bool = true;
pub const ENABLED_INITIAL: bool = true;

// Panel visibility
pub const PANEL_OPEN_INITIAL: bool = true;
pub const DEBUG_GUI_INITIAL: bool = false;

// Built-in example set, paired by index
pub const EXAMPLE_TEXTS: [&str; 3] = [
    "Warping, or warped; tugging bits of self by lines, anchors set down shallow.",
    "Approaching the sea, the self curves",
    "into a shell's ear, to sing something vague like a memory.",
];
pub const EXAMPLE_IMAGE_PATHS: [&str; 3] = [
    "images/337AA033.jpeg",
    "images/336AA021.jpeg",
    "images/336AA030.jpeg",
];

// Engine-side mapping of the normalized time slider
pub const TIME_SCALE_MIN: f32 = 0.01;
pub const TIME_SCALE_MAX: f32 = 8.0;

// DOM
pub const PANEL_ELEMENT_ID: &str = "gui";
pub const PANEL_STYLE: &str = "position:absolute;right:0;top:0;width:368px;\
background-color:gray;opacity:0.5;display:flex;flex-direction:column";
pub const BODY_STYLE: &str = "display:flex;flex-direction:column;width:100%";
pub const ROW_STYLE: &str = "display:flex;width:100%";
pub const SLIDER_LABEL_STYLE: &str = "width:20%";
pub const SLIDER_INPUT_STYLE: &str = "width:80%;height:32px";
pub const DISPLAY_VISIBLE: &str = "flex";
pub const DISPLAY_HIDDEN: &str = "none";
