/// Local-context classification used by the sleep tracker and the metrics
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Region {
    /// Falling or isolated
    #[default]
    Air = 0,
    /// Touching the floor, a wall, or the open surface of the pile
    Boundary = 1,
    /// Covered on every side by same-plane contacts
    Interior = 2,
}

impl Region {
    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}
