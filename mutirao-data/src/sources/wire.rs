//! Wire types for the upstream profile and impacts feeds.
//!
//! Both feeds are JSON arrays. Field names follow the upstream API;
//! list fields default to empty when absent, matching the feed's
//! loose schema. Ids arrive as strings or numbers depending on the
//! upstream database, so both are accepted.

use serde::{Deserialize, Deserializer};

use mutirao_core::{ImpactRecord, UserRecord};

/// One element of the profile feed.
#[derive(Debug, Deserialize)]
pub(crate) struct UserPayload {
    /// Upstream identifier, string or numeric.
    #[serde(default, deserialize_with = "id_from_scalar")]
    pub id: Option<String>,
    /// Contact address.
    #[serde(default)]
    pub email: Option<String>,
    /// Biome labels the user follows.
    #[serde(default, rename = "themesBiomes")]
    pub themes_biomes: Vec<String>,
    /// Community labels the user follows.
    #[serde(default, rename = "themesCommunities")]
    pub themes_communities: Vec<String>,
}

impl From<UserPayload> for UserRecord {
    fn from(payload: UserPayload) -> Self {
        Self {
            id: payload.id,
            email: payload.email,
            biome_themes: payload.themes_biomes,
            community_themes: payload.themes_communities,
        }
    }
}

/// One element of the impacts feed.
///
/// The feed is ordered newest first; its head element is "the latest
/// impact".
#[derive(Debug, Deserialize)]
pub(crate) struct ImpactPayload {
    /// Upstream identifier, string or numeric.
    #[serde(default, deserialize_with = "id_from_scalar")]
    pub id: Option<String>,
    /// Biomes touched by the impact.
    #[serde(default)]
    pub biomes: Vec<String>,
    /// Community types affected by the impact.
    #[serde(default, rename = "affectedCommunity")]
    pub affected_community: Vec<String>,
}

impl From<ImpactPayload> for ImpactRecord {
    fn from(payload: ImpactPayload) -> Self {
        Self {
            id: payload.id,
            biomes: payload.biomes,
            affected_communities: payload.affected_community,
        }
    }
}

/// Accept ids sent either as JSON strings or numbers.
fn id_from_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(value.map(|scalar| match scalar {
        Scalar::Text(text) => text,
        Scalar::Integer(number) => number.to_string(),
        Scalar::Float(number) => number.to_string(),
    }))
}
