//! Ordered pair of distinct assets.

use super::AssetId;
use crate::error::PoolError;

/// An ordered pair of distinct assets, canonically sorted by identifier.
///
/// The canonical ordering guarantees `first() < second()`, so `(A, B)`
/// and `(B, A)` construct the same pair and every pool has exactly one
/// identity for its market.
///
/// # Examples
///
/// ```
/// use xyk_pool::domain::{AssetId, AssetPair};
///
/// let a = AssetId::from_bytes([1u8; 32]);
/// let b = AssetId::from_bytes([2u8; 32]);
///
/// // Order is enforced automatically:
/// let pair = AssetPair::new(b, a).expect("distinct assets");
/// assert_eq!(pair.first(), a);
/// assert_eq!(pair.second(), b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetPair {
    asset_a: AssetId,
    asset_b: AssetId,
}

impl AssetPair {
    /// Creates a new canonically-ordered `AssetPair`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidAsset`] if both identifiers are equal.
    pub fn new(one: AssetId, two: AssetId) -> crate::error::Result<Self> {
        if one == two {
            return Err(PoolError::InvalidAsset(
                "asset pair requires two distinct identifiers",
            ));
        }

        let (asset_a, asset_b) = if one < two { (one, two) } else { (two, one) };

        Ok(Self { asset_a, asset_b })
    }

    /// Returns the first asset (lower identifier).
    #[must_use]
    pub const fn first(&self) -> AssetId {
        self.asset_a
    }

    /// Returns the second asset (higher identifier).
    #[must_use]
    pub const fn second(&self) -> AssetId {
        self.asset_b
    }

    /// Returns `true` if the given asset is part of this pair.
    #[must_use]
    pub fn contains(&self, asset: &AssetId) -> bool {
        self.asset_a == *asset || self.asset_b == *asset
    }

    /// Returns the counterpart of `asset` in this pair.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidAsset`] if `asset` is not in the pair.
    pub fn other(&self, asset: &AssetId) -> crate::error::Result<AssetId> {
        if *asset == self.asset_a {
            Ok(self.asset_b)
        } else if *asset == self.asset_b {
            Ok(self.asset_a)
        } else {
            Err(PoolError::InvalidAsset("asset is not part of this pair"))
        }
    }
}
