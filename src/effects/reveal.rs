/// Scroll-triggered reveal of a single element. Once shown, it stays shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Reveal {
    #[default]
    Hidden,
    Shown,
}

impl Reveal {
    pub fn is_shown(self) -> bool {
        self == Reveal::Shown
    }

    /// Feed one visibility observation; returns `true` only on the
    /// transition from hidden to shown.
    pub fn observe(&mut self, visible: bool) -> bool {
        match (*self, visible) {
            (Reveal::Hidden, true) => {
                *self = Reveal::Shown;
                true
            }
            _ => false,
        }
    }
}
