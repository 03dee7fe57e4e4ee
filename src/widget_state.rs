//! Color input widget state.
//!
//! The active color is mirrored by four redundant inputs: the native color
//! picker, the hex text field and one slider per RGB channel. `ColorInputs`
//! owns their values so that a single call to [`ColorInputs::set_active_color`]
//! leaves every input showing the same color.
//!
//! Widget edits come back in through the `edit_*` methods. An edit that only
//! echoes the value already shown (what a UI toolkit reports after a
//! programmatic update) is ignored, so syncing never feeds on itself.

use crate::color_utils::clamp_channel;
use crate::constants::DEFAULT_COLOR;
use crate::error::ColorError;
use crate::model::{Channel, Color};

/// The native `<input type="color">` style picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerState {
    /// Current value, always `#rrggbb`
    pub value: String,
}

/// Free-text hex field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexInputState {
    /// Text as shown, may be a partial entry while the user types
    pub text: String,
}

/// One RGB slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelSliderState {
    /// Slider position, 0-255
    pub value: u8,
}

/// Which widget produced an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    /// Palette swatch click
    Swatch,
    /// Native picker
    Picker,
    /// Hex text field
    HexField,
    /// One of the RGB sliders
    Slider(Channel),
    /// Segment (re)selection or clear
    Segment,
}

/// Active color plus the widgets mirroring it.
#[derive(Debug, Clone)]
pub struct ColorInputs {
    active: Color,
    picker: PickerState,
    hex: HexInputState,
    red: ChannelSliderState,
    green: ChannelSliderState,
    blue: ChannelSliderState,
}

impl Default for ColorInputs {
    fn default() -> Self {
        Self::new(DEFAULT_COLOR)
    }
}

impl ColorInputs {
    /// Create inputs all showing `color`.
    pub fn new(color: Color) -> Self {
        let mut inputs = Self {
            active: color,
            picker: PickerState {
                value: String::new(),
            },
            hex: HexInputState {
                text: String::new(),
            },
            red: ChannelSliderState { value: 0 },
            green: ChannelSliderState { value: 0 },
            blue: ChannelSliderState { value: 0 },
        };
        inputs.set_active_color(color, InputSource::Segment);
        inputs
    }

    /// The color every input reflects.
    pub fn active(&self) -> Color {
        self.active
    }

    /// Push `color` into every input.
    pub fn set_active_color(&mut self, color: Color, source: InputSource) {
        let hex = color.to_hex();
        self.active = color;
        self.picker.value = hex.clone();
        self.hex.text = hex;
        self.red.value = color.r;
        self.green.value = color.g;
        self.blue.value = color.b;
        log::debug!("🎨 Active color {} (from {:?})", color, source);
    }

    /// Reset to the default color.
    pub fn reset(&mut self) {
        self.set_active_color(DEFAULT_COLOR, InputSource::Segment);
    }

    /// Current picker value.
    pub fn picker(&self) -> &PickerState {
        &self.picker
    }

    /// Current hex field text.
    pub fn hex_text(&self) -> &str {
        &self.hex.text
    }

    /// Current value of one slider.
    pub fn slider(&self, channel: Channel) -> u8 {
        self.slider_state(channel).value
    }

    fn slider_state(&self, channel: Channel) -> &ChannelSliderState {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }

    fn slider_state_mut(&mut self, channel: Channel) -> &mut ChannelSliderState {
        match channel {
            Channel::Red => &mut self.red,
            Channel::Green => &mut self.green,
            Channel::Blue => &mut self.blue,
        }
    }

    /// Color spelled out by the three sliders.
    pub fn slider_color(&self) -> Color {
        Color::new(self.red.value, self.green.value, self.blue.value)
    }

    /// Whether the hex field shows the active color (false while a partial entry is pending).
    pub fn hex_in_sync(&self) -> bool {
        self.hex.text == self.active.to_hex()
    }

    /// The hex field was edited.
    ///
    /// The typed text is kept as-is. When it is a valid color the active color
    /// follows it; otherwise the active color and the other inputs are left
    /// untouched and `InvalidFormat` is returned.
    pub fn edit_hex(&mut self, text: &str) -> Result<Color, ColorError> {
        if text == self.hex.text && self.hex_in_sync() {
            return Ok(self.active);
        }
        self.hex.text = text.to_string();
        let color = Color::from_hex(text)?;
        self.set_active_color(color, InputSource::HexField);
        Ok(color)
    }

    /// The native picker changed.
    pub fn edit_picker(&mut self, value: &str) -> Result<Color, ColorError> {
        if value == self.picker.value {
            return Ok(self.active);
        }
        let color = Color::from_hex(value)?;
        self.set_active_color(color, InputSource::Picker);
        Ok(color)
    }

    /// A slider moved. Raw readings outside 0-255 are clamped.
    pub fn edit_slider(&mut self, channel: Channel, raw: i64) -> Color {
        let value = clamp_channel(raw);
        if value == self.slider(channel) && self.slider_color() == self.active {
            return self.active;
        }
        self.slider_state_mut(channel).value = value;
        let color = self.slider_color();
        self.set_active_color(color, InputSource::Slider(channel));
        color
    }
}
