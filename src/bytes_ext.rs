/// Two slices whose lengths must match did not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("length mismatch: {left} != {right}")]
pub struct LengthMismatch {
    pub left: usize,
    pub right: usize,
}

pub trait BytesExt {
    /// Xor self with another slice of bytes of equal length.
    ///
    /// # Errors
    ///
    /// [`LengthMismatch`] when the operands differ in length. No partial
    /// result is produced.
    fn xor<B: AsRef<[u8]>>(&self, other: B) -> Result<Vec<u8>, LengthMismatch>;
}

impl BytesExt for [u8] {
    fn xor<B: AsRef<[u8]>>(&self, other: B) -> Result<Vec<u8>, LengthMismatch> {
        let other = other.as_ref();
        if self.len() != other.len() {
            return Err(LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }

        Ok(self.iter().zip(other).map(|(a, b)| a ^ b).collect())
    }
}
