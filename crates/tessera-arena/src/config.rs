// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Arena configuration.

use crate::block::{align_up, ARENA_ALIGN};
use crate::ArenaError;

/// Block size used when none is configured (64 KiB).
pub const DEFAULT_BLOCK_SIZE: usize = 64 * 1024;

/// Tunables for an [`crate::Arena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArenaConfig {
    /// Size of each fresh block in bytes. Requests larger than this get a
    /// dedicated block of their own size.
    pub block_size: usize,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}

impl ArenaConfig {
    /// Config with the given block size.
    pub const fn new(block_size: usize) -> Self {
        Self { block_size }
    }

    /// Checks that the block size is non-zero and representable once rounded
    /// to the arena alignment.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.block_size == 0 {
            return Err(ArenaError::ZeroBlockSize);
        }
        match align_up(self.block_size, ARENA_ALIGN) {
            Some(rounded) if isize::try_from(rounded).is_ok() => Ok(()),
            _ => Err(ArenaError::SizeOverflow {
                requested: self.block_size,
            }),
        }
    }

    /// Parses and validates a JSON config, e.g. `{"block_size": 4096}`.
    #[cfg(feature = "serde")]
    pub fn from_json(text: &str) -> Result<Self, ArenaError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the config as JSON.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, ArenaError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_block_size_is_64k() {
        assert_eq!(ArenaConfig::default().block_size, 65536);
        assert!(ArenaConfig::default().validate().is_ok());
    }

    #[test]
    fn validation_rejects_degenerate_sizes() {
        assert!(matches!(
            ArenaConfig::new(0).validate(),
            Err(ArenaError::ZeroBlockSize)
        ));
        assert!(matches!(
            ArenaConfig::new(usize::MAX).validate(),
            Err(ArenaError::SizeOverflow { .. })
        ));
        assert!(ArenaConfig::new(600).validate().is_ok());
    }
}
