//! Widget event types.
//!
//! Pointer events carry both a widget-local and a window position. The Scale
//! hit-tests against window coordinates, the same space its allocation is
//! expressed in.

use trellis_render::Point;

/// Wheel delta reported for one notch of a conventional mouse wheel.
pub const WHEEL_DELTA_PER_NOTCH: f32 = 120.0;

/// Modifier keys held during an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyboardModifiers {
    pub shift: bool,
    /// Control, or Command on macOS.
    pub control: bool,
    pub alt: bool,
}

impl KeyboardModifiers {
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
    };

    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt
    }
}

/// Mouse buttons. Only `Left` drives a Scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    /// This button's bit in [`MouseMoveEvent::buttons`].
    pub const fn bit(self) -> u8 {
        match self {
            Self::Left => 0b001,
            Self::Right => 0b010,
            Self::Middle => 0b100,
        }
    }
}

/// The accepted flag every event carries.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    accepted: bool,
}

impl EventBase {
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    pub fn accept(&mut self) {
        self.accepted = true;
    }

    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// A mouse button going down or up.
#[derive(Debug, Clone, Copy)]
pub struct ButtonEvent {
    pub base: EventBase,
    pub button: MouseButton,
    pub local_pos: Point,
    pub window_pos: Point,
    pub modifiers: KeyboardModifiers,
}

impl ButtonEvent {
    pub fn new(
        button: MouseButton,
        local_pos: Point,
        window_pos: Point,
        modifiers: KeyboardModifiers,
    ) -> Self {
        Self {
            base: EventBase::default(),
            button,
            local_pos,
            window_pos,
            modifiers,
        }
    }
}

/// A button press; see [`ButtonEvent`].
pub type MousePressEvent = ButtonEvent;

/// A button release; see [`ButtonEvent`].
pub type MouseReleaseEvent = ButtonEvent;

/// The pointer moved.
#[derive(Debug, Clone, Copy)]
pub struct MouseMoveEvent {
    pub base: EventBase,
    pub local_pos: Point,
    pub window_pos: Point,
    /// Buttons held during the move, as [`MouseButton::bit`] flags.
    pub buttons: u8,
    pub modifiers: KeyboardModifiers,
}

impl MouseMoveEvent {
    pub fn new(local_pos: Point, window_pos: Point, buttons: u8, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::default(),
            local_pos,
            window_pos,
            buttons,
            modifiers,
        }
    }

    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons & button.bit() != 0
    }
}

/// The wheel turned.
#[derive(Debug, Clone, Copy)]
pub struct WheelEvent {
    pub base: EventBase,
    pub local_pos: Point,
    pub window_pos: Point,
    /// Positive to the right.
    pub delta_x: f32,
    /// Positive away from the user; [`WHEEL_DELTA_PER_NOTCH`] per notch.
    pub delta_y: f32,
    pub modifiers: KeyboardModifiers,
}

impl WheelEvent {
    pub fn new(
        local_pos: Point,
        window_pos: Point,
        delta_x: f32,
        delta_y: f32,
        modifiers: KeyboardModifiers,
    ) -> Self {
        Self {
            base: EventBase::default(),
            local_pos,
            window_pos,
            delta_x,
            delta_y,
            modifiers,
        }
    }

    /// Whole vertical notches, signed. A partial turn counts as one notch in
    /// its direction; zero only when `delta_y` is zero.
    pub fn vertical_notches(&self) -> i32 {
        let notches = (self.delta_y / WHEEL_DELTA_PER_NOTCH).round();
        if notches == 0.0 && self.delta_y != 0.0 {
            self.delta_y.signum() as i32
        } else {
            notches as i32
        }
    }
}

/// The pointer entered the allocation.
#[derive(Debug, Clone, Copy)]
pub struct EnterEvent {
    pub base: EventBase,
    pub local_pos: Point,
}

impl EnterEvent {
    pub fn new(local_pos: Point) -> Self {
        Self {
            base: EventBase::default(),
            local_pos,
        }
    }
}

/// The pointer left the allocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeaveEvent {
    pub base: EventBase,
}

impl LeaveEvent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Keys a Scale responds to. Everything else arrives as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    PageUp,
    PageDown,
    /// Platform key code.
    Other(u16),
}

#[derive(Debug, Clone, Copy)]
pub struct KeyPressEvent {
    pub base: EventBase,
    pub key: Key,
    pub modifiers: KeyboardModifiers,
    /// Auto-repeat from a held key.
    pub is_repeat: bool,
}

impl KeyPressEvent {
    pub fn new(key: Key, modifiers: KeyboardModifiers, is_repeat: bool) -> Self {
        Self {
            base: EventBase::default(),
            key,
            modifiers,
            is_repeat,
        }
    }
}

/// Any event a widget can receive.
#[derive(Debug, Clone, Copy)]
pub enum WidgetEvent {
    MousePress(MousePressEvent),
    MouseRelease(MouseReleaseEvent),
    MouseMove(MouseMoveEvent),
    Wheel(WheelEvent),
    KeyPress(KeyPressEvent),
    Enter(EnterEvent),
    Leave(LeaveEvent),
}

impl WidgetEvent {
    fn base_mut(&mut self) -> &mut EventBase {
        match self {
            Self::MousePress(e) | Self::MouseRelease(e) => &mut e.base,
            Self::MouseMove(e) => &mut e.base,
            Self::Wheel(e) => &mut e.base,
            Self::KeyPress(e) => &mut e.base,
            Self::Enter(e) => &mut e.base,
            Self::Leave(e) => &mut e.base,
        }
    }

    pub fn is_accepted(&self) -> bool {
        let base = match self {
            Self::MousePress(e) | Self::MouseRelease(e) => e.base,
            Self::MouseMove(e) => e.base,
            Self::Wheel(e) => e.base,
            Self::KeyPress(e) => e.base,
            Self::Enter(e) => e.base,
            Self::Leave(e) => e.base,
        };
        base.is_accepted()
    }

    pub fn accept(&mut self) {
        self.base_mut().accept();
    }

    pub fn ignore(&mut self) {
        self.base_mut().ignore();
    }

    /// Window position for pointer events, `None` otherwise.
    pub fn window_pos(&self) -> Option<Point> {
        match self {
            Self::MousePress(e) | Self::MouseRelease(e) => Some(e.window_pos),
            Self::MouseMove(e) => Some(e.window_pos),
            Self::Wheel(e) => Some(e.window_pos),
            Self::KeyPress(_) | Self::Enter(_) | Self::Leave(_) => None,
        }
    }

    /// Whether every listed widget should see the event, not only the first
    /// one that accepts it. Moves and releases are broadcast so a drag keeps
    /// tracking after the pointer leaves the handle.
    pub fn is_broadcast(&self) -> bool {
        matches!(self, Self::MouseMove(_) | Self::MouseRelease(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wheel(delta_y: f32) -> WheelEvent {
        WheelEvent::new(Point::ZERO, Point::ZERO, 0.0, delta_y, KeyboardModifiers::NONE)
    }

    #[test]
    fn accept_and_ignore() {
        let mut event = WidgetEvent::Leave(LeaveEvent::new());
        assert!(!event.is_accepted());
        event.accept();
        assert!(event.is_accepted());
        event.ignore();
        assert!(!event.is_accepted());
    }

    #[test]
    fn move_reports_held_buttons() {
        let held = MouseButton::Left.bit() | MouseButton::Middle.bit();
        let event = MouseMoveEvent::new(Point::ZERO, Point::ZERO, held, KeyboardModifiers::NONE);
        assert!(event.is_button_pressed(MouseButton::Left));
        assert!(event.is_button_pressed(MouseButton::Middle));
        assert!(!event.is_button_pressed(MouseButton::Right));
    }

    #[test]
    fn partial_wheel_turns_count_as_one_notch() {
        assert_eq!(wheel(240.0).vertical_notches(), 2);
        assert_eq!(wheel(-30.0).vertical_notches(), -1);
        assert_eq!(wheel(15.0).vertical_notches(), 1);
        assert_eq!(wheel(0.0).vertical_notches(), 0);
    }

    #[test]
    fn only_moves_and_releases_broadcast() {
        let pos = Point::new(4.0, 2.0);
        let button = ButtonEvent::new(MouseButton::Left, pos, pos, KeyboardModifiers::NONE);
        let press = WidgetEvent::MousePress(button);
        let release = WidgetEvent::MouseRelease(button);
        assert!(!press.is_broadcast());
        assert!(release.is_broadcast());
        assert_eq!(press.window_pos(), Some(pos));
        assert_eq!(WidgetEvent::Leave(LeaveEvent::new()).window_pos(), None);
    }
}
