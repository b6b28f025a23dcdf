//! Optional protocol features
//!
//! Each feature governs exactly one height field in [`ConsensusParams`].
//! The accessor pair on [`Feature`] is the single place that mapping lives,
//! shared by activation, deactivation and queries.

use crate::Error;
use overlay_params::ConsensusParams;
use serde::{Deserialize, Serialize};

/// An optional protocol feature subject to activation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    /// Cross-property send-to-owners (v1)
    CrossPropertySto,
    /// Waiting period before freezing of managed property tokens
    FreezeNotice,
    /// Trading of any token on the distributed exchange
    FreeDex,
    /// Non-fungible token support
    NonFungible,
    /// NFT issuer data updates restricted to the issuer
    NonFungibleIssuer,
}

impl Feature {
    /// All features known to this client
    pub const ALL: [Feature; 5] = [
        Feature::CrossPropertySto,
        Feature::FreezeNotice,
        Feature::FreeDex,
        Feature::NonFungible,
        Feature::NonFungibleIssuer,
    ];

    /// Wire identifier of the feature
    pub const fn id(&self) -> u16 {
        match self {
            Feature::CrossPropertySto => 10,
            Feature::FreezeNotice => 14,
            Feature::FreeDex => 15,
            Feature::NonFungible => 16,
            Feature::NonFungibleIssuer => 18,
        }
    }

    /// Resolve a feature from its wire identifier
    pub fn from_id(id: u16) -> Option<Self> {
        Feature::ALL.into_iter().find(|f| f.id() == id)
    }

    /// Human-readable feature name
    pub const fn name(&self) -> &'static str {
        match self {
            Feature::CrossPropertySto => "Cross-property Send To Owners",
            Feature::FreezeNotice => "Waiting period for enabling freezing",
            Feature::FreeDex => "Trading of any token on the distributed exchange",
            Feature::NonFungible => "Uniquely identifiable tokens",
            Feature::NonFungibleIssuer => "NFT issuer data update by issuers only",
        }
    }

    /// The height field governing this feature
    pub const fn activation_block(&self, params: &ConsensusParams) -> u32 {
        match self {
            Feature::CrossPropertySto => params.cross_property_sto_block,
            Feature::FreezeNotice => params.freeze_notice_block,
            Feature::FreeDex => params.free_dex_block,
            Feature::NonFungible => params.nonfungible_block,
            Feature::NonFungibleIssuer => params.nonfungible_issuer_block,
        }
    }

    /// Write the height field governing this feature
    pub fn set_activation_block(&self, params: &mut ConsensusParams, height: u32) {
        let field = match self {
            Feature::CrossPropertySto => &mut params.cross_property_sto_block,
            Feature::FreezeNotice => &mut params.freeze_notice_block,
            Feature::FreeDex => &mut params.free_dex_block,
            Feature::NonFungible => &mut params.nonfungible_block,
            Feature::NonFungibleIssuer => &mut params.nonfungible_issuer_block,
        };
        *field = height;
    }
}

impl TryFrom<u16> for Feature {
    type Error = Error;

    fn try_from(id: u16) -> Result<Self, Error> {
        Feature::from_id(id).ok_or(Error::UnknownFeature(id))
    }
}

/// Display name for a feature identifier
///
/// Unrecognized identifiers map to a generic label rather than failing, so
/// log lines about foreign features stay readable.
pub fn feature_name(feature_id: u16) -> &'static str {
    match Feature::from_id(feature_id) {
        Some(feature) => feature.name(),
        None => "Unknown feature",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trip() {
        for feature in Feature::ALL {
            assert_eq!(Feature::from_id(feature.id()), Some(feature));
        }
        assert_eq!(Feature::from_id(0), None);
        assert_eq!(Feature::from_id(9999), None);
    }

    #[test]
    fn test_try_from_unknown() {
        assert!(matches!(
            Feature::try_from(11),
            Err(Error::UnknownFeature(11))
        ));
        assert_eq!(Feature::try_from(15).unwrap(), Feature::FreeDex);
    }

    #[test]
    fn test_feature_names() {
        assert_eq!(feature_name(10), "Cross-property Send To Owners");
        assert_eq!(feature_name(12345), "Unknown feature");
    }

    #[test]
    fn test_accessor_pair() {
        let mut params = ConsensusParams::regtest();
        for feature in Feature::ALL {
            feature.set_activation_block(&mut params, 1234);
            assert_eq!(feature.activation_block(&params), 1234);
        }
    }
}
