use bit_vec::BitVec;

use crate::error::BitArrayError;

/// Fixed-length packed bits, all cleared on creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitArray {
    storage: BitVec,
}

impl BitArray {
    pub fn new(len: u64) -> Result<Self, BitArrayError> {
        if len == 0 {
            return Err(BitArrayError::InvalidSize { len });
        }
        let bits = usize::try_from(len).map_err(|_| BitArrayError::InvalidSize { len })?;
        Ok(Self { storage: BitVec::from_elem(bits, false) })
    }

    pub fn set(&mut self, index: u64) -> Result<(), BitArrayError> {
        let len = self.len();
        match usize::try_from(index) {
            Ok(idx) if index < len => {
                self.storage.set(idx, true);
                Ok(())
            }
            _ => Err(BitArrayError::IndexOutOfRange { index, len }),
        }
    }

    /// # Panics
    ///
    /// Panics if `index` is not below [`BitArray::len`]. Filters only ever
    /// read indices reduced modulo the length.
    pub fn get(&self, index: u64) -> bool {
        let len = self.len();
        usize::try_from(index)
            .ok()
            .and_then(|idx| self.storage.get(idx))
            .unwrap_or_else(|| panic!("bit index {index} out of range for {len} bits"))
    }

    pub fn len(&self) -> u64 {
        self.storage.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Number of bits currently set.
    pub fn count_ones(&self) -> u64 {
        self.storage.blocks().map(|block| u64::from(block.count_ones())).sum()
    }
}
