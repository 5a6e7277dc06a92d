//! Full property record (`GET /branch/{clientid}/property/{propertyid}`).

use serde::{Deserialize, Deserializer};

use crate::{
    FeedDate, FileKind, Furnished, LetType, ParagraphKind, PriceQualifier, RentPeriod,
    SanitizedBool, SanitizedFloat, SanitizedInt, WebStatus,
};

/// A property with its address, price, descriptive text and attached files.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Property {
    /// Feed-wide identifier.
    #[serde(rename = "@id")]
    pub id: SanitizedInt,
    /// Agent system identifier.
    #[serde(rename = "@propertyid")]
    pub property_id: SanitizedInt,
    /// Originating system code.
    #[serde(rename = "@system")]
    pub system: String,
    /// Firm identifier.
    #[serde(rename = "@firmid")]
    pub firm_id: SanitizedInt,
    /// Branch identifier within the firm.
    #[serde(rename = "@branchid")]
    pub branch_id: SanitizedInt,
    /// Database the property belongs to (sales or lettings).
    #[serde(rename = "@database")]
    pub database: SanitizedInt,
    /// Featured flag.
    #[serde(rename = "@featured")]
    pub featured: SanitizedInt,

    /// Agent and software references.
    pub reference: Reference,
    /// Postal address.
    pub address: Address,
    /// Asking price or rent.
    pub price: Price,
    /// Free-text rental fees.
    #[serde(rename = "rentalfees")]
    pub rental_fees: String,
    /// Free-text lettings fee.
    #[serde(rename = "lettingsfee")]
    pub lettings_fee: String,
    /// Raw price qualifier code, see [`Self::price_qualifier`].
    pub rm_qualifier: SanitizedInt,
    /// Date the property becomes available.
    pub available: FeedDate,
    /// Date the property was uploaded.
    pub uploaded: FeedDate,
    /// Longitude.
    pub longitude: SanitizedFloat,
    /// Latitude.
    pub latitude: SanitizedFloat,
    /// OS grid easting.
    pub easting: SanitizedInt,
    /// OS grid northing.
    pub northing: SanitizedInt,
    /// Street view camera settings.
    #[serde(rename = "streetview")]
    pub street_view: StreetView,
    /// Raw marketing status code, see [`Self::web_status`].
    #[serde(rename = "web_status")]
    pub web_status_code: SanitizedInt,
    /// Agent-defined status text.
    pub custom_status: String,
    /// Commercial rent.
    pub comm_rent: String,
    /// Commercial premium.
    pub premium: String,
    /// Service charge.
    pub service_charge: String,
    /// Rateable value.
    pub rateable_value: String,
    /// Property type descriptions, in feed order. Other elements may sit
    /// between the `<type>` entries.
    #[serde(rename = "type")]
    pub property_types: Vec<String>,
    /// Raw furnishing code, see [`Self::furnished`].
    #[serde(rename = "furnished")]
    pub furnished_code: SanitizedInt,
    /// Raw property type code.
    pub rm_type: SanitizedInt,
    /// Deposit.
    pub let_bond: SanitizedInt,
    /// Raw let type code, see [`Self::let_type`].
    pub rm_let_type_id: SanitizedInt,
    /// Number of bedrooms.
    pub bedrooms: SanitizedInt,
    /// Number of reception rooms.
    pub receptions: SanitizedInt,
    /// Number of bathrooms.
    pub bathrooms: SanitizedInt,
    /// Agent-defined text field.
    #[serde(rename = "userfield1")]
    pub user_field1: String,
    /// Agent-defined numeric field.
    #[serde(rename = "userfield2")]
    pub user_field2: SanitizedInt,
    /// Date the property sold.
    #[serde(rename = "solddate")]
    pub sold_date: FeedDate,
    /// Date the lease ends.
    #[serde(rename = "leaseend")]
    pub lease_end: FeedDate,
    /// Date the agent was instructed.
    pub instructed: FeedDate,
    /// Price achieved.
    #[serde(rename = "soldprice")]
    pub sold_price: SanitizedInt,
    /// Has a garden.
    pub garden: SanitizedBool,
    /// Has parking.
    pub parking: SanitizedBool,
    /// Is a new build.
    #[serde(rename = "newbuild")]
    pub new_build: SanitizedBool,
    /// Ground rent.
    #[serde(rename = "groundrent")]
    pub ground_rent: String,
    /// Commission.
    pub commission: String,
    /// Internal areas, possibly in several units.
    #[serde(rename = "area")]
    pub areas: Vec<Area>,
    /// Land area.
    #[serde(rename = "landarea")]
    pub land_area: Area,
    /// Summary description.
    pub description: String,
    /// Energy performance ratings.
    #[serde(rename = "hip", deserialize_with = "energy_performance")]
    pub energy: EnergyPerformance,
    /// Room-by-room paragraphs.
    #[serde(deserialize_with = "paragraph_list")]
    pub paragraphs: Vec<Paragraph>,
    /// Bullet points.
    #[serde(deserialize_with = "bullet_list")]
    pub bullets: Vec<Bullet>,
    /// Attached images, plans and documents.
    #[serde(deserialize_with = "file_list")]
    pub files: Vec<PropertyFile>,
}

impl Property {
    /// Interprets [`Self::web_status_code`].
    #[must_use]
    pub const fn web_status(&self) -> WebStatus {
        WebStatus::from_code(self.web_status_code.get())
    }

    /// Interprets [`Self::furnished_code`].
    #[must_use]
    pub const fn furnished(&self) -> Furnished {
        Furnished::from_code(self.furnished_code.get())
    }

    /// Interprets [`Self::rm_let_type_id`].
    #[must_use]
    pub const fn let_type(&self) -> LetType {
        LetType::from_code(self.rm_let_type_id.get())
    }

    /// Interprets [`Self::rm_qualifier`].
    #[must_use]
    pub const fn price_qualifier(&self) -> PriceQualifier {
        PriceQualifier::from_code(self.rm_qualifier.get())
    }

    /// Returns true if the agent marked the property as featured.
    #[must_use]
    pub const fn is_featured(&self) -> bool {
        self.featured.get() != 0
    }

    /// Returns the first property type description, if any.
    #[must_use]
    pub fn property_type(&self) -> Option<&str> {
        self.property_types.first().map(String::as_str)
    }

    /// Returns the file a paragraph refers to, if it refers to one.
    #[must_use]
    pub fn paragraph_file(&self, paragraph: &Paragraph) -> Option<&PropertyFile> {
        let index = paragraph.file_index()?;
        self.files.iter().find(|file| file.id.get() == i64::from(index))
    }

    /// Returns the attached images and floor plans.
    pub fn images(&self) -> impl Iterator<Item = &PropertyFile> {
        self.files.iter().filter(|file| file.kind().is_image())
    }
}

/// Agent and software references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Reference {
    /// The agent's own reference.
    pub agents: String,
    /// The agent software's reference.
    pub software: String,
}

/// Postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Address {
    /// House number or name.
    pub name: String,
    /// Street, without the house number or name.
    pub street: String,
    /// Locality.
    pub locality: String,
    /// Town.
    pub town: String,
    /// County.
    pub county: String,
    /// Full or partial postcode.
    pub postcode: String,
    /// Agent-defined location.
    // The feed misspells this element.
    #[serde(rename = "custom_locatiom", alias = "custom_location")]
    pub custom_location: String,
    /// Address to display, when the agent supplies one.
    pub display: String,
}

impl Address {
    /// Returns the display address, or `street, town, county` when none is
    /// supplied.
    #[must_use]
    pub fn display_line(&self) -> String {
        if !self.display.trim().is_empty() {
            return self.display.trim().to_string();
        }
        [&self.street, &self.town, &self.county]
            .iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Asking price or rent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Price {
    /// Free-text qualifier.
    #[serde(rename = "@qualifier")]
    pub qualifier: String,
    /// ISO currency code.
    #[serde(rename = "@currency")]
    pub currency: String,
    /// `no` when the price must not be shown.
    #[serde(rename = "@display")]
    pub display: String,
    /// Rental period (`pw`, `pcm`, `pq`, `pa`) for lettings.
    #[serde(rename = "@rent")]
    pub rent: String,
    /// Amount in [`Self::currency`].
    #[serde(rename = "$text")]
    pub value: SanitizedInt,
}

impl Price {
    /// Returns false when the agent asked for the price to be hidden.
    #[must_use]
    pub fn is_displayed(&self) -> bool {
        !self.display.trim().eq_ignore_ascii_case("no")
    }

    /// Returns the rental period, if this is a rent.
    #[must_use]
    pub fn rent_period(&self) -> Option<RentPeriod> {
        RentPeriod::parse(&self.rent)
    }
}

/// Street view camera settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StreetView {
    /// Camera latitude.
    #[serde(alias = "PovLatitude")]
    pub pov_latitude: SanitizedFloat,
    /// Camera longitude.
    #[serde(alias = "PovLongitude")]
    pub pov_longitude: SanitizedFloat,
    /// Camera pitch.
    #[serde(alias = "PovPitch")]
    pub pov_pitch: SanitizedFloat,
    /// Camera heading.
    #[serde(alias = "PovHeading")]
    pub pov_heading: SanitizedFloat,
    /// Camera zoom level.
    #[serde(alias = "PovZoom")]
    pub pov_zoom: SanitizedInt,
}

/// Minimum and maximum area in one unit.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Area {
    /// `sqft`, `sqm`, `acre` or `hectare`.
    #[serde(rename = "@unit")]
    pub unit: String,
    /// Minimum.
    pub min: SanitizedFloat,
    /// Maximum.
    pub max: SanitizedFloat,
}

/// Current and potential rating, each 1-100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EnergyRating {
    /// Current rating.
    pub current: SanitizedInt,
    /// Potential rating.
    pub potential: SanitizedInt,
}

/// Energy performance section of a property.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EnergyPerformance {
    /// Energy efficiency rating.
    pub energy_efficiency: EnergyRating,
    /// Environmental impact rating.
    pub environmental_impact: EnergyRating,
}

/// A descriptive paragraph, usually one room.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Paragraph {
    /// Position within the property.
    #[serde(rename = "@id")]
    pub id: SanitizedInt,
    /// Raw paragraph type code, see [`Self::kind`].
    #[serde(rename = "@type")]
    pub kind_code: SanitizedInt,
    /// Heading, such as a room name.
    pub name: String,
    /// Reference to an attached file.
    pub file: Option<FileRef>,
    /// Room dimensions.
    pub dimensions: Dimensions,
    /// Body text.
    pub text: String,
}

impl Paragraph {
    /// Interprets [`Self::kind_code`].
    #[must_use]
    pub const fn kind(&self) -> ParagraphKind {
        ParagraphKind::from_code(self.kind_code.get())
    }

    /// Returns the id of the referenced file, if any.
    #[must_use]
    pub fn file_index(&self) -> Option<u32> {
        self.file.as_ref().and_then(FileRef::index)
    }
}

/// `<file ref="n"/>` inside a paragraph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileRef {
    /// Raw `ref` attribute; empty when the paragraph has no file.
    #[serde(rename = "@ref")]
    pub reference: String,
}

impl FileRef {
    /// Parses the reference.
    #[must_use]
    pub fn index(&self) -> Option<u32> {
        self.reference.trim().parse().ok()
    }
}

/// Room dimensions in the notations the agent supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Dimensions {
    /// Metric.
    pub metric: String,
    /// Imperial.
    pub imperial: String,
    /// Mixed.
    pub mixed: String,
}

/// A bullet point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Bullet {
    /// Position within the property.
    #[serde(rename = "@id")]
    pub id: SanitizedInt,
    /// Text.
    #[serde(rename = "$text")]
    pub value: String,
}

/// A file attached to a property.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PropertyFile {
    /// Position within the property, referenced by paragraphs.
    #[serde(rename = "@id")]
    pub id: SanitizedInt,
    /// Raw file type code, see [`Self::kind`].
    #[serde(rename = "@type")]
    pub kind_code: SanitizedInt,
    /// Caption.
    pub name: String,
    /// Download link.
    pub url: String,
    /// When the file last changed.
    pub updated: FeedDate,
}

impl PropertyFile {
    /// Interprets [`Self::kind_code`].
    #[must_use]
    pub const fn kind(&self) -> FileKind {
        FileKind::from_code(self.kind_code.get())
    }
}

#[derive(Deserialize, Default)]
struct Hip {
    #[serde(default)]
    energy_performance: EnergyPerformance,
}

fn energy_performance<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<EnergyPerformance, D::Error> {
    Ok(Hip::deserialize(deserializer)?.energy_performance)
}

#[derive(Deserialize, Default)]
struct Paragraphs {
    #[serde(default)]
    paragraph: Vec<Paragraph>,
}

fn paragraph_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Paragraph>, D::Error> {
    Ok(Paragraphs::deserialize(deserializer)?.paragraph)
}

#[derive(Deserialize, Default)]
struct Bullets {
    #[serde(default)]
    bullet: Vec<Bullet>,
}

fn bullet_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Bullet>, D::Error> {
    Ok(Bullets::deserialize(deserializer)?.bullet)
}

#[derive(Deserialize, Default)]
struct Files {
    #[serde(default)]
    file: Vec<PropertyFile>,
}

fn file_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<PropertyFile>, D::Error> {
    Ok(Files::deserialize(deserializer)?.file)
}
