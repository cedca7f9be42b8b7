//! Text attribute bitflags.

bitflags::bitflags! {
    /// Text rendering modifiers, combined with bitwise OR.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifier: u16 {
        const BOLD            = 1 << 0;
        const DIM             = 1 << 1;
        const ITALIC          = 1 << 2;
        const UNDERLINED      = 1 << 3;
        const SLOW_BLINK      = 1 << 4;
        const RAPID_BLINK     = 1 << 5;
        const REVERSED        = 1 << 6;
        const HIDDEN          = 1 << 7;
        const CROSSED_OUT     = 1 << 8;
    }
}
