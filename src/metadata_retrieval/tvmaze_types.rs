/// TVMaze API response types for deserialization.
///
/// These structures mirror the JSON response format of the TVMaze
/// `singlesearch/shows` endpoint with `cast`, `episodes` and `seasons`
/// embedded. Nearly everything is optional: TVMaze sends `null` for unknown
/// values, and the renderer substitutes a fallback for each of them.
use serde::{Deserialize, Deserializer};

/// Treats an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The top-level response from the TVMaze singlesearch endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Show {
    pub id: u64,
    /// The name of the TV show
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Show type such as "Scripted", "Reality" or "Animation"
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub language: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<String>,
    pub status: Option<String>,
    /// Runtime of a regular episode in minutes
    pub runtime: Option<u32>,
    /// Premiere date as `YYYY-MM-DD`
    pub premiered: Option<String>,
    /// End date as `YYYY-MM-DD`
    pub ended: Option<String>,
    pub official_site: Option<String>,
    pub schedule: Option<Schedule>,
    pub rating: Option<Rating>,
    pub network: Option<Network>,
    pub web_channel: Option<WebChannel>,
    pub externals: Option<Externals>,
    pub image: Option<Image>,
    /// Summary in HTML format
    pub summary: Option<String>,
    /// Embedded resources requested with `embed[]=`
    ///
    /// A show without embedded data decodes to empty collections.
    #[serde(rename = "_embedded", default, deserialize_with = "null_as_default")]
    pub embedded: Embedded,
}

/// Embedded resources in a TVMaze show response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Embedded {
    #[serde(default, deserialize_with = "null_as_default")]
    pub cast: Vec<CastMember>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub episodes: Vec<Episode>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub seasons: Vec<Season>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Image {
    pub medium: Option<String>,
    pub original: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Rating {
    pub average: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Network {
    pub name: Option<String>,
    pub country: Option<Country>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Country {
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WebChannel {
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Schedule {
    /// Air time as `HH:MM`, empty when unknown
    #[serde(default, deserialize_with = "null_as_default")]
    pub time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub days: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Externals {
    pub imdb: Option<String>,
    pub thetvdb: Option<u64>,
    pub tvrage: Option<u64>,
}

/// A single entry of the embedded cast list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CastMember {
    pub person: Person,
    pub character: Character,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Person {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    pub image: Option<Image>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Character {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// A single episode from the TVMaze API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Episode {
    pub id: u64,
    /// Season number (0 for specials)
    pub season: u32,
    /// Episode number within the season (null for specials)
    pub number: Option<u32>,
    /// Episode title (may be null for episodes without a title)
    pub name: Option<String>,
    /// Air date as `YYYY-MM-DD` (empty or null when unknown)
    pub airdate: Option<String>,
    pub runtime: Option<u32>,
    /// Episode summary in HTML format (may be null)
    pub summary: Option<String>,
}

/// A single season from the TVMaze API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    pub id: u64,
    pub number: u32,
    pub premiere_date: Option<String>,
    pub end_date: Option<String>,
    /// Number of episodes ordered for this season
    pub episode_order: Option<u32>,
    pub network: Option<Network>,
    pub summary: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRANGER_THINGS: &str = include_str!("../../tests/fixtures/stranger_things.json");

    #[test]
    fn test_decode_full_payload() {
        let show: Show = serde_json::from_str(STRANGER_THINGS).unwrap();

        assert_eq!(show.name, "Stranger Things");
        assert_eq!(show.kind.as_deref(), Some("Scripted"));
        assert_eq!(show.genres, vec!["Drama", "Fantasy", "Science-Fiction"]);
        assert_eq!(show.rating.unwrap().average, Some(8.6));
        assert_eq!(show.embedded.cast.len(), 3);
        assert_eq!(show.embedded.episodes.len(), 4);
        assert_eq!(show.embedded.seasons.len(), 2);
        assert_eq!(show.embedded.seasons[0].episode_order, Some(8));
    }

    #[test]
    fn test_decode_without_embedded_data() {
        let show: Show = serde_json::from_str(r#"{"id": 1, "name": "Lonely Show"}"#).unwrap();

        assert_eq!(show.name, "Lonely Show");
        assert!(show.genres.is_empty());
        assert!(show.embedded.cast.is_empty());
        assert!(show.embedded.episodes.is_empty());
        assert!(show.embedded.seasons.is_empty());
    }

    #[test]
    fn test_decode_null_collections() {
        let show: Show = serde_json::from_str(
            r#"{"id": 1, "name": "X", "genres": null, "_embedded": {"cast": null}}"#,
        )
        .unwrap();

        assert!(show.genres.is_empty());
        assert!(show.embedded.cast.is_empty());
    }

    #[test]
    fn test_decode_null_names() {
        let show: Show = serde_json::from_str(
            r#"{"id": 1, "name": null, "_embedded": {"cast": [
                {"person": {"id": 2, "name": "A B", "image": null},
                 "character": {"id": 3, "name": null}},
                {"person": {"id": 4, "name": null, "image": null},
                 "character": {"id": 5, "name": "Nobody"}}
            ]}}"#,
        )
        .unwrap();

        assert_eq!(show.name, "");
        assert_eq!(show.embedded.cast[0].character.name, "");
        assert_eq!(show.embedded.cast[1].person.name, "");

        let page = crate::view::render_page(
            "x",
            &crate::fetch::FetchState::Success(show),
            crate::view::Tab::Cast,
            &crate::view::RenderOptions::default(),
        );
        assert!(page.contains("(AB) A B as N/A\n"));
        assert!(page.contains("()  as Nobody\n"));
    }

    #[test]
    fn test_decode_special_episode_without_number() {
        let episode: Episode = serde_json::from_str(
            r#"{"id": 7, "season": 2, "number": null, "name": "Behind the Scenes", "airdate": ""}"#,
        )
        .unwrap();

        assert_eq!(episode.number, None);
        assert_eq!(episode.airdate.as_deref(), Some(""));
        assert_eq!(episode.summary, None);
    }
}
