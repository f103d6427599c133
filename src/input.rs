/// Controls currently held down, sampled once per tick by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub shoot: bool,
}

/// Everything the session consumes from the keyboard for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Input {
    pub held: HeldKeys,
    /// A shoot press arrived since the previous tick. Fires exactly one
    /// projectile no matter how long the key stays held.
    pub shoot_pressed: bool,
}

impl Input {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn holding(held: HeldKeys) -> Self {
        Self {
            held,
            shoot_pressed: false,
        }
    }

    pub fn shoot() -> Self {
        Self {
            held: HeldKeys::default(),
            shoot_pressed: true,
        }
    }
}
