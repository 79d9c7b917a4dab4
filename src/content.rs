use rust_embed::Embed;
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

const PROFILE_FILE: &str = "profile.json";
const EXPERIENCES_FILE: &str = "experiences.json";

pub static GLOBAL_PROFILE: LazyLock<Result<Profile, ContentError>> = LazyLock::new(load_profile);

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    Missing(String),
    #[error("Couldn't parse {file}: {reason}")]
    Parse { file: String, reason: String },
    #[error("Duplicate experience id: {0}")]
    DuplicateId(String),
    #[error("Experience {id} has an empty {field}")]
    EmptyField { id: String, field: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Category {
    Leadership,
    Creative,
    Programming,
    #[serde(rename = "Public Speaking")]
    PublicSpeaking,
}

impl Category {
    /// Button order in the gallery.
    pub const ALL: [Category; 4] = [
        Category::Leadership,
        Category::Creative,
        Category::Programming,
        Category::PublicSpeaking,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Leadership => "Leadership",
            Category::Creative => "Creative",
            Category::Programming => "Programming",
            Category::PublicSpeaking => "Public Speaking",
        }
    }

    pub fn button_image(self) -> &'static str {
        match self {
            Category::Leadership => "/images/cat-leadership.jpg",
            Category::Creative => "/images/cat-creative.jpg",
            Category::Programming => "/images/cat-programming.jpg",
            Category::PublicSpeaking => "/images/cat-publicspeaking.jpg",
        }
    }

    pub fn card_image(self) -> &'static str {
        match self {
            Category::Leadership => "/images/leadership.jpg",
            Category::Creative => "/images/creative.jpg",
            Category::Programming => "/images/programming.jpg",
            Category::PublicSpeaking => "/images/publicspeaking.jpg",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Documentation {
    pub image: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExperienceRecord {
    pub id: String,
    pub category: Category,
    pub title: String,
    pub role: String,
    pub date: String,
    pub location: String,
    pub description: String,
    pub responsibilities: Vec<String>,
    pub results: String,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    pub documentation: Vec<Documentation>,
}

impl ExperienceRecord {
    /// Header image, falling back to the category artwork.
    pub fn image(&self) -> &str {
        self.image
            .as_deref()
            .unwrap_or_else(|| self.category.card_image())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Owner {
    pub name: String,
    pub initials: String,
    pub headline: String,
    pub tagline: String,
    pub email: String,
    pub location: String,
}

impl Owner {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub handle: String,
    pub url: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub image: String,
    pub items: Vec<String>,
}

/// Accent applied to a piece of bio text or a skill pill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Plain,
    Strong,
    Blue,
    Purple,
    Amber,
    Rose,
}

impl Tone {
    pub fn text_class(self) -> &'static str {
        match self {
            Tone::Plain => "",
            Tone::Strong => "text-charcoal font-medium",
            Tone::Blue => "text-blue-600 font-medium",
            Tone::Purple => "text-purple-600 font-medium",
            Tone::Amber => "text-amber-600 font-medium",
            Tone::Rose => "text-rose-600 font-medium",
        }
    }

    pub fn pill_class(self) -> &'static str {
        match self {
            Tone::Plain | Tone::Strong => "bg-charcoal/5 text-charcoal",
            Tone::Blue => "bg-blue-500/10 text-blue-600",
            Tone::Purple => "bg-purple-500/10 text-purple-600",
            Tone::Amber => "bg-amber-500/10 text-amber-600",
            Tone::Rose => "bg-rose-500/10 text-rose-600",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Fragment {
    pub text: String,
    #[serde(default)]
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SkillPill {
    pub icon: String,
    pub label: String,
    #[serde(default)]
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// Bio paragraphs, highlighted skills and headline numbers of the about section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct About {
    pub paragraphs: Vec<Vec<Fragment>>,
    pub pills: Vec<SkillPill>,
    pub stats: Vec<Stat>,
}

#[derive(Deserialize)]
struct ProfileFile {
    owner: Owner,
    about: About,
    socials: Vec<SocialLink>,
    skills: Vec<SkillCategory>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub owner: Owner,
    pub about: About,
    pub socials: Vec<SocialLink>,
    pub skills: Vec<SkillCategory>,
    pub experiences: Vec<ExperienceRecord>,
}

/// Returns the embedded profile, parsed and validated once per process.
pub fn profile() -> Result<&'static Profile, ContentError> {
    GLOBAL_PROFILE.as_ref().map_err(Clone::clone)
}

fn load_profile() -> Result<Profile, ContentError> {
    let profile = read_file(PROFILE_FILE)?;
    let experiences = read_file(EXPERIENCES_FILE)?;
    parse_profile(&profile, &experiences)
}

fn read_file(name: &str) -> Result<String, ContentError> {
    let file = Content::get(name).ok_or_else(|| ContentError::Missing(name.to_string()))?;
    String::from_utf8(file.data.into()).map_err(|e| ContentError::Parse {
        file: name.to_string(),
        reason: e.to_string(),
    })
}

pub fn parse_profile(profile: &str, experiences: &str) -> Result<Profile, ContentError> {
    let ProfileFile {
        owner,
        about,
        socials,
        skills,
    } = serde_json::from_str(profile).map_err(|e| ContentError::Parse {
        file: PROFILE_FILE.to_string(),
        reason: e.to_string(),
    })?;
    let experiences = parse_experiences(experiences)?;
    Ok(Profile {
        owner,
        about,
        socials,
        skills,
        experiences,
    })
}

pub fn parse_experiences(content: &str) -> Result<Vec<ExperienceRecord>, ContentError> {
    let records: Vec<ExperienceRecord> =
        serde_json::from_str(content).map_err(|e| ContentError::Parse {
            file: EXPERIENCES_FILE.to_string(),
            reason: e.to_string(),
        })?;
    validate(&records)?;
    Ok(records)
}

/// Rejects records with a blank id, a duplicate id, or any blank text field
/// shown on the card or in the detail view.
fn validate(records: &[ExperienceRecord]) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for record in records {
        if record.id.trim().is_empty() {
            return Err(ContentError::EmptyField {
                id: record.id.clone(),
                field: "id",
            });
        }
        if !seen.insert(record.id.as_str()) {
            return Err(ContentError::DuplicateId(record.id.clone()));
        }
        let fields = [
            ("title", &record.title),
            ("role", &record.role),
            ("date", &record.date),
            ("location", &record.location),
            ("description", &record.description),
            ("results", &record.results),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ContentError::EmptyField {
                id: record.id.clone(),
                field: *field,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_json(id: &str, category: &str) -> String {
        format!(
            r#"{{
                "id": "{id}",
                "category": "{category}",
                "title": "Event {id}",
                "role": "Role",
                "date": "2024",
                "location": "Bandung",
                "description": "Description",
                "responsibilities": ["First", "Second"],
                "results": "Results"
            }}"#
        )
    }

    #[test]
    fn test_embedded_content_loads() {
        let profile = profile().expect("embedded content should be valid");
        assert!(!profile.experiences.is_empty());
        assert!(!profile.owner.email.is_empty());
        assert_eq!(profile.owner.mailto(), format!("mailto:{}", profile.owner.email));
        assert!(!profile.socials.is_empty());
        assert!(!profile.skills.is_empty());
        assert!(!profile.about.paragraphs.is_empty());
        assert!(!profile.about.stats.is_empty());
    }

    #[test]
    fn test_embedded_ids_are_unique() {
        let profile = profile().expect("embedded content should be valid");
        let ids = profile
            .experiences
            .iter()
            .map(|r| r.id.as_str())
            .collect::<HashSet<_>>();
        assert_eq!(ids.len(), profile.experiences.len());
    }

    #[test]
    fn test_category_labels_round_trip_through_serde() {
        for category in Category::ALL {
            let parsed: Category =
                serde_json::from_str(&format!("\"{}\"", category.label())).unwrap();
            assert_eq!(parsed, category);
            assert_eq!(category.to_string(), category.label());
        }
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let json = format!("[{}]", record_json("1", "Cooking"));
        let err = parse_experiences(&json).unwrap_err();
        assert!(matches!(err, ContentError::Parse { ref file, .. } if file == EXPERIENCES_FILE));
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let json = format!(
            "[{}, {}]",
            record_json("7", "Leadership"),
            record_json("7", "Creative")
        );
        assert_eq!(
            parse_experiences(&json).unwrap_err(),
            ContentError::DuplicateId("7".to_string())
        );
    }

    #[test]
    fn test_empty_id_is_rejected() {
        let json = format!("[{}]", record_json(" ", "Leadership"));
        assert!(matches!(
            parse_experiences(&json).unwrap_err(),
            ContentError::EmptyField { field: "id", .. }
        ));
    }

    #[test]
    fn test_blank_text_fields_are_rejected() {
        for field in ["title", "role", "date", "location", "description", "results"] {
            let mut record: serde_json::Value =
                serde_json::from_str(&record_json("3", "Programming")).unwrap();
            record[field] = serde_json::Value::String("  ".to_string());
            let json = serde_json::to_string(&[record]).unwrap();
            assert_eq!(
                parse_experiences(&json).unwrap_err(),
                ContentError::EmptyField {
                    id: "3".to_string(),
                    field,
                },
                "{field} should be required"
            );
        }
    }

    #[test]
    fn test_about_fragments_default_to_plain() {
        let about: About = serde_json::from_str(
            r#"{
                "paragraphs": [[{"text": "I build "}, {"text": "pipelines", "tone": "blue"}]],
                "pills": [{"icon": "*", "label": "SQL"}],
                "stats": [{"value": "3", "label": "Medals"}]
            }"#,
        )
        .unwrap();
        assert_eq!(about.paragraphs[0][0].tone, Tone::Plain);
        assert_eq!(about.paragraphs[0][1].tone, Tone::Blue);
        assert_eq!(about.pills[0].tone, Tone::Plain);
        assert_eq!(about.stats[0].value, "3");
    }

    #[test]
    fn test_unknown_tone_is_rejected() {
        assert!(serde_json::from_str::<Tone>("\"neon\"").is_err());
    }

    #[test]
    fn test_image_falls_back_to_category_artwork() {
        let json = format!("[{}]", record_json("1", "Public Speaking"));
        let records = parse_experiences(&json).unwrap();
        assert_eq!(records[0].category, Category::PublicSpeaking);
        assert_eq!(records[0].image(), "/images/publicspeaking.jpg");
        assert!(records[0].documentation.is_empty());
    }

    #[test]
    fn test_explicit_image_and_documentation() {
        let json = r#"[{
            "id": "1",
            "category": "Creative",
            "title": "Gig",
            "role": "Photographer",
            "date": "2025",
            "location": "ITB",
            "description": "d",
            "responsibilities": [],
            "results": "r",
            "image": "/images/custom.jpg",
            "documentation": [
                {"image": "/images/a.jpg"},
                {"image": "/images/b.jpg", "caption": "B", "link": "https://example.com"}
            ]
        }]"#;
        let records = parse_experiences(json).unwrap();
        let record = &records[0];
        assert_eq!(record.image(), "/images/custom.jpg");
        assert_eq!(record.documentation.len(), 2);
        assert_eq!(record.documentation[0].caption, None);
        assert_eq!(record.documentation[1].caption.as_deref(), Some("B"));
        assert_eq!(
            record.documentation[1].link.as_deref(),
            Some("https://example.com")
        );
    }

    #[test]
    fn test_malformed_profile_names_the_file() {
        let err = parse_profile("{", "[]").unwrap_err();
        assert!(matches!(err, ContentError::Parse { ref file, .. } if file == PROFILE_FILE));
    }
}
