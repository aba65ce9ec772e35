/// One of the three orthogonal coordinate axes of a [`crate::Vector3`].
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis
{
    X,
    Y,
    Z,
}

impl Axis
{
    /// Every axis, in component order.
    ///
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Maps a component index onto its axis, wrapping around so that 3 is X again, 4 is Y, etc.
    ///
    pub const fn from_index(index: usize) -> Self {
        match index % 3 {
            0 => Axis::X,
            1 => Axis::Y,
            _ => Axis::Z,
        }
    }

    /// Position of the axis' component in a vector, the inverse of [`Axis::from_index`] on 0..3.
    ///
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}
