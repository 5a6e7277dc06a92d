//! Typed views over the feed's numeric code tables.
//!
//! Records keep the raw codes so unknown values survive decoding; these
//! enums interpret them. Codes outside the published tables map to
//! `Other`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Marketing status of a property (`web_status`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WebStatus {
    /// For sale / to let.
    ForSale,
    /// Under offer / let.
    UnderOffer,
    /// Sold / under offer.
    Sold,
    /// Sold subject to contract / reserved.
    SoldSubjectToContract,
    /// For sale by auction / let agreed.
    ForSaleByAuction,
    /// Reserved.
    Reserved,
    /// New instruction.
    NewInstruction,
    /// Just on the market.
    JustOnMarket,
    /// Price reduction.
    PriceReduction,
    /// Keen to sell.
    KeenToSell,
    /// No onward chain.
    NoChain,
    /// Vendor will pay stamp duty.
    VendorWillPayStampDuty,
    /// Offers in the region of.
    OffersInRegionOf,
    /// Guide price.
    GuidePrice,
    /// Lettings: to let.
    ToLet,
    /// Lettings: let.
    Let,
    /// Lettings: under offer.
    LetUnderOffer,
    /// Lettings: reserved.
    LetReserved,
    /// Lettings: let agreed.
    LetAgreed,
    /// Hidden: not marketed.
    NotMarketed,
    /// Hidden: under offer.
    NotMarketedUnderOffer,
    /// Hidden: sold.
    NotMarketedSold,
    /// Hidden: sold subject to contract.
    NotMarketedSoldSubjectToContract,
    /// Any other code.
    Other(i64),
}

impl WebStatus {
    /// Interprets a raw `web_status` code.
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            0 => Self::ForSale,
            1 => Self::UnderOffer,
            2 => Self::Sold,
            3 => Self::SoldSubjectToContract,
            4 => Self::ForSaleByAuction,
            5 => Self::Reserved,
            6 => Self::NewInstruction,
            7 => Self::JustOnMarket,
            8 => Self::PriceReduction,
            9 => Self::KeenToSell,
            10 => Self::NoChain,
            11 => Self::VendorWillPayStampDuty,
            12 => Self::OffersInRegionOf,
            13 => Self::GuidePrice,
            100 => Self::ToLet,
            101 => Self::Let,
            102 => Self::LetUnderOffer,
            103 => Self::LetReserved,
            104 => Self::LetAgreed,
            200 => Self::NotMarketed,
            201 => Self::NotMarketedUnderOffer,
            202 => Self::NotMarketedSold,
            203 => Self::NotMarketedSoldSubjectToContract,
            other => Self::Other(other),
        }
    }

    /// Returns true for the lettings range (100-199).
    #[must_use]
    pub const fn is_lettings(&self) -> bool {
        matches!(
            self,
            Self::ToLet | Self::Let | Self::LetUnderOffer | Self::LetReserved | Self::LetAgreed
        )
    }

    /// Returns true for the hidden range (200 and above).
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        match self {
            Self::NotMarketed
            | Self::NotMarketedUnderOffer
            | Self::NotMarketedSold
            | Self::NotMarketedSoldSubjectToContract => true,
            Self::Other(code) => *code >= 200,
            _ => false,
        }
    }
}

/// Furnishing of a rental property (`furnished`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Furnished {
    /// Furnished.
    Furnished,
    /// Part furnished.
    PartFurnished,
    /// Unfurnished.
    Unfurnished,
    /// Not specified.
    NotSpecified,
    /// Furnished or unfurnished, at the tenant's choice.
    Either,
    /// Any other code.
    Other(i64),
}

impl Furnished {
    /// Interprets a raw `furnished` code.
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Furnished,
            1 => Self::PartFurnished,
            2 => Self::Unfurnished,
            3 => Self::NotSpecified,
            4 => Self::Either,
            other => Self::Other(other),
        }
    }
}

/// Let type of a rental property (`rm_let_type_id`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetType {
    /// Not specified.
    NotSpecified,
    /// Long term.
    LongTerm,
    /// Short term.
    ShortTerm,
    /// Student let.
    Student,
    /// Commercial let.
    Commercial,
    /// Any other code.
    Other(i64),
}

impl LetType {
    /// Interprets a raw `rm_let_type_id` code.
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            0 => Self::NotSpecified,
            1 => Self::LongTerm,
            2 => Self::ShortTerm,
            3 => Self::Student,
            4 => Self::Commercial,
            other => Self::Other(other),
        }
    }
}

/// Price qualifier (`rm_qualifier`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceQualifier {
    /// No qualifier.
    Default,
    /// Price on application.
    PriceOnApplication,
    /// Guide price.
    GuidePrice,
    /// Fixed price.
    FixedPrice,
    /// Offers in excess of.
    OffersInExcessOf,
    /// Offers in the region of.
    OffersInRegionOf,
    /// Sale by tender.
    SaleByTender,
    /// From.
    From,
    /// Shared ownership.
    SharedOwnership,
    /// Offers over.
    OffersOver,
    /// Part buy, part rent.
    PartBuyPartRent,
    /// Shared equity.
    SharedEquity,
    /// Coming soon.
    ComingSoon,
    /// Any other code.
    Other(i64),
}

impl PriceQualifier {
    /// Interprets a raw `rm_qualifier` code.
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Default,
            1 => Self::PriceOnApplication,
            2 => Self::GuidePrice,
            3 => Self::FixedPrice,
            4 => Self::OffersInExcessOf,
            5 => Self::OffersInRegionOf,
            6 => Self::SaleByTender,
            7 => Self::From,
            9 => Self::SharedOwnership,
            10 => Self::OffersOver,
            11 => Self::PartBuyPartRent,
            12 => Self::SharedEquity,
            16 => Self::ComingSoon,
            other => Self::Other(other),
        }
    }
}

/// Kind of file attached to a property (`type` attribute).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// Photograph.
    Image,
    /// Map.
    Map,
    /// Floor plan.
    FloorPlan,
    /// 360 degree tour.
    Tour360,
    /// eHouse.
    EHouse,
    /// iPix.
    IPix,
    /// Full details document.
    FullDetails,
    /// PDF details document.
    PdfDetails,
    /// External URL.
    ExternalUrl,
    /// Energy performance certificate.
    EnergyPerformanceCertificate,
    /// Home information pack.
    HomeInformationPack,
    /// Virtual tour.
    VirtualTour,
    /// Any other code.
    Other(i64),
}

impl FileKind {
    /// Interprets a raw file `type` code.
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Image,
            1 => Self::Map,
            2 => Self::FloorPlan,
            3 => Self::Tour360,
            4 => Self::EHouse,
            5 => Self::IPix,
            6 => Self::FullDetails,
            7 => Self::PdfDetails,
            8 => Self::ExternalUrl,
            9 => Self::EnergyPerformanceCertificate,
            10 => Self::HomeInformationPack,
            11 => Self::VirtualTour,
            other => Self::Other(other),
        }
    }

    /// Returns true for images and floor plans.
    #[must_use]
    pub const fn is_image(&self) -> bool {
        matches!(self, Self::Image | Self::FloorPlan)
    }
}

/// Kind of descriptive paragraph (`type` attribute).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParagraphKind {
    /// Standard text, usually a room.
    Standard,
    /// Energy efficiency ratings.
    EnergyEfficiencyRatings,
    /// Disclaimer text.
    Disclaimer,
    /// Any other code.
    Other(i64),
}

impl ParagraphKind {
    /// Interprets a raw paragraph `type` code.
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Standard,
            1 => Self::EnergyEfficiencyRatings,
            2 => Self::Disclaimer,
            other => Self::Other(other),
        }
    }
}

/// Rental period of a price (`rent` attribute).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RentPeriod {
    /// Per week.
    Weekly,
    /// Per calendar month.
    Monthly,
    /// Per quarter.
    Quarterly,
    /// Per annum.
    Annually,
}

impl RentPeriod {
    /// Parses a `rent` attribute (`pw`, `pcm`, `pq`, `pa`, any case).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pw" => Some(Self::Weekly),
            "pcm" => Some(Self::Monthly),
            "pq" => Some(Self::Quarterly),
            "pa" => Some(Self::Annually),
            _ => None,
        }
    }
}

/// What happened to a property in a change listing (`action`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum PropertyAction {
    /// The property was added or changed.
    #[default]
    Updated,
    /// The property was withdrawn.
    Deleted,
    /// Any other action string.
    Other(String),
}

impl PropertyAction {
    /// Parses an `action` value.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "updated" => Self::Updated,
            "deleted" => Self::Deleted,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the wire spelling.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Updated => "updated",
            Self::Deleted => "deleted",
            Self::Other(other) => other,
        }
    }
}

impl fmt::Display for PropertyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PropertyAction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PropertyAction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_status_ranges() {
        assert_eq!(WebStatus::from_code(3), WebStatus::SoldSubjectToContract);
        assert!(WebStatus::from_code(100).is_lettings());
        assert!(!WebStatus::from_code(0).is_lettings());
        assert!(WebStatus::from_code(202).is_hidden());
        assert!(WebStatus::from_code(255).is_hidden());
        assert_eq!(WebStatus::from_code(57), WebStatus::Other(57));
    }

    #[test]
    fn test_price_qualifier_gap() {
        assert_eq!(PriceQualifier::from_code(1), PriceQualifier::PriceOnApplication);
        assert_eq!(PriceQualifier::from_code(8), PriceQualifier::Other(8));
        assert_eq!(PriceQualifier::from_code(16), PriceQualifier::ComingSoon);
    }

    #[test]
    fn test_rent_period() {
        assert_eq!(RentPeriod::parse("PCM"), Some(RentPeriod::Monthly));
        assert_eq!(RentPeriod::parse("pw"), Some(RentPeriod::Weekly));
        assert_eq!(RentPeriod::parse(""), None);
    }

    #[test]
    fn test_property_action() {
        assert_eq!(PropertyAction::parse("deleted"), PropertyAction::Deleted);
        assert_eq!(PropertyAction::parse(" updated "), PropertyAction::Updated);
        assert_eq!(
            PropertyAction::parse("archived"),
            PropertyAction::Other("archived".to_string())
        );
        assert_eq!(PropertyAction::Deleted.to_string(), "deleted");
    }
}
