use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError
{
    /// Component lookup with an index below zero. Non-negative indices wrap modulo 3, negative
    /// ones are rejected rather than mapped onto some component.
    ///
    #[error("negative component index {0}")]
    NegativeIndex(isize),

    /// The operation divides by the norm of a vector whose norm is zero.
    ///
    #[error("vector has zero norm")]
    ZeroNorm,
}
