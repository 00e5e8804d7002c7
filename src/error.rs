use thiserror::Error;

/// Input validation failures reported by the vector kernels.
///
/// Kernels check their buffers before touching any output, so an `Err`
/// means nothing was written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KernelError {
    #[error("{buffer} has {actual} elements, expected {expected}")]
    LengthMismatch {
        buffer: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("length {len} is not a multiple of the vector width {width}")]
    UnalignedLength { len: usize, width: usize },
}

pub type KernelResult<T> = Result<T, KernelError>;

/// `Err(LengthMismatch)` unless `actual == expected`.
pub(crate) fn check_len(buffer: &'static str, expected: usize, actual: usize) -> KernelResult<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(KernelError::LengthMismatch { buffer, expected, actual })
    }
}
