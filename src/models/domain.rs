use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

/// A stored location in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Finite coordinates inside the valid latitude/longitude ranges
    pub fn is_usable(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Clinical presentation of cerebral palsy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CpSubtype {
    Spastic,
    Dyskinetic,
    Ataxic,
    Mixed,
    Unknown,
}

impl CpSubtype {
    /// `None` for `Unknown`, so callers can treat it like an absent value
    pub fn specified(self) -> Option<Self> {
        match self {
            CpSubtype::Unknown => None,
            other => Some(other),
        }
    }
}

/// Gross Motor Function Classification System level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GmfcsLevel {
    I,
    II,
    III,
    IV,
    V,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl GmfcsLevel {
    /// Numeric level 1..=5, `None` for `Unknown`
    pub fn ordinal(self) -> Option<u8> {
        match self {
            GmfcsLevel::I => Some(1),
            GmfcsLevel::II => Some(2),
            GmfcsLevel::III => Some(3),
            GmfcsLevel::IV => Some(4),
            GmfcsLevel::V => Some(5),
            GmfcsLevel::Unknown => None,
        }
    }
}

/// Clinical attributes used for similarity scoring.
///
/// Absent and `Unknown` values are interchangeable: both score neutrally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicalProfile {
    #[serde(rename = "cpSubtype", default)]
    pub cp_subtype: Option<CpSubtype>,
    #[serde(rename = "gmfcsLevel", default)]
    pub gmfcs_level: Option<GmfcsLevel>,
}

impl ClinicalProfile {
    pub fn new(cp_subtype: Option<CpSubtype>, gmfcs_level: Option<GmfcsLevel>) -> Self {
        Self { cp_subtype, gmfcs_level }
    }

    pub fn known_subtype(&self) -> Option<CpSubtype> {
        self.cp_subtype.and_then(CpSubtype::specified)
    }

    pub fn known_gmfcs(&self) -> Option<u8> {
        self.gmfcs_level.and_then(GmfcsLevel::ordinal)
    }
}

/// A located user ready to be scored
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchSubject {
    pub location: GeoPoint,
    pub clinical: ClinicalProfile,
}

impl MatchSubject {
    pub fn new(location: GeoPoint, clinical: ClinicalProfile) -> Self {
        Self { location, clinical }
    }
}

/// A user supplied by the profile data layer for ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchCandidate {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    #[serde(default)]
    pub clinical: ClinicalProfile,
}

impl MatchCandidate {
    pub fn new(user_id: impl Into<String>, location: Option<GeoPoint>, clinical: ClinicalProfile) -> Self {
        Self {
            user_id: user_id.into(),
            location,
            clinical,
        }
    }

    /// The scorable view of this user, if it has a usable location
    pub fn subject(&self) -> Option<MatchSubject> {
        self.location
            .filter(GeoPoint::is_usable)
            .map(|location| MatchSubject::new(location, self.clinical))
    }
}

/// Ranked suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "distanceLabel")]
    pub distance_label: String,
    pub score: u8,
}

/// Per-component match score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub distance: u8,
    pub subtype: u8,
    pub gmfcs: u8,
}

impl ScoreBreakdown {
    pub const MAX_TOTAL: u8 = 100;

    pub fn total(&self) -> u8 {
        let sum = u16::from(self.distance) + u16::from(self.subtype) + u16::from(self.gmfcs);
        sum.min(u16::from(Self::MAX_TOTAL)) as u8
    }
}

/// Who may see a profile field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisibilityTier {
    /// Owner only
    Private,
    /// Owner and followers
    Followers,
    /// Anyone
    Public,
}

impl Default for VisibilityTier {
    fn default() -> Self {
        VisibilityTier::Public
    }
}

/// The closed set of profile fields a visibility policy can address
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    DisplayName,
    Pronouns,
    Bio,
    Photos,
    Badges,
    Region,
    CpSubtype,
    Gmfcs,
    MobilityAids,
    AssistiveTech,
    CommModes,
    ExerciseTolerance,
    BestTimes,
    Transport,
    A11yPrefs,
}

impl ProfileField {
    pub const ALL: [ProfileField; 15] = [
        ProfileField::DisplayName,
        ProfileField::Pronouns,
        ProfileField::Bio,
        ProfileField::Photos,
        ProfileField::Badges,
        ProfileField::Region,
        ProfileField::CpSubtype,
        ProfileField::Gmfcs,
        ProfileField::MobilityAids,
        ProfileField::AssistiveTech,
        ProfileField::CommModes,
        ProfileField::ExerciseTolerance,
        ProfileField::BestTimes,
        ProfileField::Transport,
        ProfileField::A11yPrefs,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProfileField::DisplayName => "displayName",
            ProfileField::Pronouns => "pronouns",
            ProfileField::Bio => "bio",
            ProfileField::Photos => "photos",
            ProfileField::Badges => "badges",
            ProfileField::Region => "region",
            ProfileField::CpSubtype => "cpSubtype",
            ProfileField::Gmfcs => "gmfcs",
            ProfileField::MobilityAids => "mobilityAids",
            ProfileField::AssistiveTech => "assistiveTech",
            ProfileField::CommModes => "commModes",
            ProfileField::ExerciseTolerance => "exerciseTolerance",
            ProfileField::BestTimes => "bestTimes",
            ProfileField::Transport => "transport",
            ProfileField::A11yPrefs => "a11yPrefs",
        }
    }

    /// Tier a freshly created profile exposes this field at
    pub fn default_tier(self) -> VisibilityTier {
        match self {
            ProfileField::DisplayName
            | ProfileField::Pronouns
            | ProfileField::Bio
            | ProfileField::Photos
            | ProfileField::Badges => VisibilityTier::Public,
            ProfileField::Region
            | ProfileField::CpSubtype
            | ProfileField::Gmfcs
            | ProfileField::MobilityAids
            | ProfileField::AssistiveTech
            | ProfileField::CommModes
            | ProfileField::ExerciseTolerance
            | ProfileField::BestTimes
            | ProfileField::Transport => VisibilityTier::Followers,
            ProfileField::A11yPrefs => VisibilityTier::Private,
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a [`ProfileField`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown profile field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for ProfileField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProfileField::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Field-level visibility settings owned by a profile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityPolicy {
    tiers: BTreeMap<ProfileField, VisibilityTier>,
}

impl VisibilityPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// The tier table applied to newly created profiles
    pub fn profile_defaults() -> Self {
        ProfileField::ALL
            .iter()
            .map(|&field| (field, field.default_tier()))
            .collect()
    }

    /// Build from stored string keys, dropping keys that are not profile fields
    pub fn from_entries<K, I>(entries: I) -> Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, VisibilityTier)>,
    {
        let mut tiers = BTreeMap::new();
        for (key, tier) in entries {
            match key.as_ref().parse::<ProfileField>() {
                Ok(field) => {
                    tiers.insert(field, tier);
                }
                Err(err) => tracing::warn!("Ignoring visibility entry: {}", err),
            }
        }
        Self { tiers }
    }

    pub fn with(mut self, field: ProfileField, tier: VisibilityTier) -> Self {
        self.tiers.insert(field, tier);
        self
    }

    pub fn set(&mut self, field: ProfileField, tier: VisibilityTier) {
        self.tiers.insert(field, tier);
    }

    pub fn get(&self, field: ProfileField) -> Option<VisibilityTier> {
        self.tiers.get(&field).copied()
    }

    /// Look up a raw record key; keys outside the closed field set have no entry
    pub fn tier_for_key(&self, key: &str) -> Option<VisibilityTier> {
        key.parse::<ProfileField>().ok().and_then(|field| self.get(field))
    }

    /// Policy entry, else the default entry, else `fallback`
    pub fn effective_tier(&self, key: &str, defaults: &VisibilityPolicy, fallback: VisibilityTier) -> VisibilityTier {
        self.tier_for_key(key)
            .or_else(|| defaults.tier_for_key(key))
            .unwrap_or(fallback)
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// String-keyed form for persistence by the profile store
    pub fn to_entries(&self) -> HashMap<String, VisibilityTier> {
        self.tiers
            .iter()
            .map(|(field, tier)| (field.as_str().to_string(), *tier))
            .collect()
    }
}

impl FromIterator<(ProfileField, VisibilityTier)> for VisibilityPolicy {
    fn from_iter<I: IntoIterator<Item = (ProfileField, VisibilityTier)>>(iter: I) -> Self {
        Self {
            tiers: iter.into_iter().collect(),
        }
    }
}

/// How the viewer relates to the profile owner
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    #[serde(rename = "isOwner", default)]
    pub is_owner: bool,
    #[serde(rename = "isFollower", default)]
    pub is_follower: bool,
}

impl Relationship {
    pub fn owner() -> Self {
        Self { is_owner: true, is_follower: false }
    }

    pub fn follower() -> Self {
        Self { is_owner: false, is_follower: true }
    }

    pub fn stranger() -> Self {
        Self::default()
    }

    /// Combine a viewer/owner pair with the result of a follow-graph lookup
    pub fn between(viewer_id: &str, owner_id: &str, is_follower: bool) -> Self {
        Self {
            is_owner: viewer_id == owner_id,
            is_follower,
        }
    }
}

/// Interface adjustments a member asked for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityPrefs {
    #[serde(default)]
    pub high_contrast: bool,
    #[serde(default)]
    pub large_text: bool,
    #[serde(default)]
    pub reduced_motion: bool,
    #[serde(default)]
    pub captions: bool,
}

/// Typed profile record, one member per [`ProfileField`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronouns: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cp_subtype: Option<CpSubtype>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gmfcs: Option<GmfcsLevel>,
    #[serde(default)]
    pub mobility_aids: Vec<String>,
    #[serde(default)]
    pub assistive_tech: Vec<String>,
    #[serde(default)]
    pub comm_modes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_tolerance: Option<String>,
    #[serde(default)]
    pub best_times: Vec<String>,
    #[serde(default)]
    pub transport: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a11y_prefs: Option<AccessibilityPrefs>,
}

impl ProfileFields {
    /// Flatten into the key/value record consumed by the visibility filter
    pub fn to_record(&self) -> serde_json::Map<String, serde_json::Value> {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => serde_json::Map::new(),
        }
    }
}
