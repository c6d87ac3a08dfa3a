use crate::theme::Theme;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Reading speed used for the reading-time estimate
pub const WORDS_PER_MINUTE: usize = 200;

/// Complete portfolio configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub social: Social,
    pub site: SiteConfig,
    pub integrations: Integrations,
    pub blog: BlogSettings,
    pub skills: Vec<Skill>,
    pub timeline: Vec<TimelineEntry>,
    pub testimonials: Vec<Testimonial>,
    pub projects: Vec<Project>,
}

impl Portfolio {
    /// Author name used for posts that do not declare one
    pub fn default_author(&self) -> &str {
        self.blog
            .default_author
            .as_deref()
            .unwrap_or(&self.profile.name)
    }
}

/// The person the site is about
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub bio: Vec<String>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
}

/// Outbound profile links
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Social {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub devto: Option<String>,
}

impl Social {
    /// (label, url) pairs for every configured link, in display order
    pub fn links(&self) -> Vec<(&'static str, String)> {
        [
            ("GitHub", &self.github),
            ("LinkedIn", &self.linkedin),
            ("Twitter", &self.twitter),
            ("DEV", &self.devto),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.clone().map(|u| (label, u)))
        .collect()
    }
}

/// Site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub domain: String,
    pub base_url: String,
    pub default_theme: Theme,
    pub accent_color: String,
}

/// Third-party services the site talks to
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Integrations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leetcode_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_endpoint: Option<String>,
    /// Override for the statistics API base URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats_api_base: Option<String>,
    /// Override for the events API base URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_api_base: Option<String>,
}

/// Blog content location and defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogSettings {
    pub dir: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_author: Option<String>,
}

impl Default for BlogSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("content/blog"),
            default_author: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Expert,
    Advanced,
    Intermediate,
    Beginner,
}

impl SkillLevel {
    /// Number of filled dots shown next to the skill
    pub fn dots(self) -> u8 {
        match self {
            SkillLevel::Expert => 4,
            SkillLevel::Advanced => 3,
            SkillLevel::Intermediate => 2,
            SkillLevel::Beginner => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SkillLevel::Expert => "expert",
            SkillLevel::Advanced => "advanced",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Beginner => "beginner",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: String,
    pub level: SkillLevel,
}

/// Skills grouped by category, categories in first-appearance order
pub fn group_skills(skills: &[Skill]) -> Vec<(String, Vec<Skill>)> {
    let mut groups: Vec<(String, Vec<Skill>)> = Vec::new();
    for skill in skills {
        match groups.iter_mut().find(|(c, _)| *c == skill.category) {
            Some((_, members)) => members.push(skill.clone()),
            None => groups.push((skill.category.clone(), vec![skill.clone()])),
        }
    }
    groups
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineKind {
    Work,
    Education,
    Certification,
}

impl TimelineKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TimelineKind::Work => "work",
            TimelineKind::Education => "education",
            TimelineKind::Certification => "certification",
        }
    }
}

/// Work, education or certification entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub id: String,
    pub title: String,
    pub organization: String,
    pub start_date: NaiveDate,
    /// `None` means ongoing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub description: String,
    pub kind: TimelineKind,
}

impl TimelineEntry {
    /// "Jan 2021 - Present"
    pub fn period(&self) -> String {
        let end = self
            .end_date
            .map(|d| d.format("%b %Y").to_string())
            .unwrap_or_else(|| "Present".to_string());
        format!("{} - {}", self.start_date.format("%b %Y"), end)
    }
}

/// Timeline entries, most recent start first
pub fn sorted_timeline(entries: &[TimelineEntry]) -> Vec<TimelineEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| b.start_date.cmp(&a.start_date));
    sorted
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub role: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<PathBuf>,
    pub content: String,
    pub rating: u8,
}

/// Portfolio work sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub short_description: String,
    pub full_description: String,
    pub thumbnail: PathBuf,
    pub images: Vec<PathBuf>,
    pub tech_stack: Vec<String>,
    pub challenges: Vec<String>,
    pub solutions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    pub featured: bool,
}

impl Project {
    /// Case-insensitive tag match
    pub fn uses(&self, tech: &str) -> bool {
        let needle = tech.to_lowercase();
        self.tech_stack.iter().any(|t| t.to_lowercase() == needle)
    }
}

/// Blog article with rendered body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content_html: String,
    pub author: String,
    pub publish_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<NaiveDate>,
    pub tags: Vec<String>,
    pub category: String,
    pub cover_image: String,
    /// Minutes
    pub reading_time: u32,
}

impl BlogPost {
    /// "March 4, 2025"
    pub fn display_date(&self) -> String {
        self.publish_date.format("%B %-d, %Y").to_string()
    }
}

/// Estimated minutes to read `text`: ceil(words / 200)
pub fn reading_time(text: &str) -> u32 {
    let words = text.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE) as u32
}

/// One entry of the public activity feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityItem {
    pub id: String,
    pub kind: String,
    pub repo: String,
    pub description: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl ActivityItem {
    /// "Today", "Yesterday", "3 days ago" or the calendar date
    pub fn relative_date(&self, now: DateTime<Utc>) -> String {
        let days = (now - self.created_at).num_days();
        match days {
            d if d <= 0 => "Today".to_string(),
            1 => "Yesterday".to_string(),
            d if d < 7 => format!("{} days ago", d),
            _ => self.created_at.format("%b %-d, %Y").to_string(),
        }
    }
}

/// Solved-problem statistics from the coding-practice profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodingStats {
    pub total_solved: u32,
    pub total_questions: u32,
    pub easy_solved: u32,
    pub medium_solved: u32,
    pub hard_solved: u32,
    pub ranking: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_reading_time_rounds_up() {
        let four_hundred = vec!["word"; 400].join(" ");
        let four_hundred_one = vec!["word"; 401].join(" ");
        assert_eq!(reading_time(&four_hundred), 2);
        assert_eq!(reading_time(&four_hundred_one), 3);
    }

    #[test]
    fn test_reading_time_small_and_empty() {
        assert_eq!(reading_time(""), 0);
        assert_eq!(reading_time("   \n\t "), 0);
        assert_eq!(reading_time("one"), 1);
        assert_eq!(reading_time("lines\nand   tabs\there"), 1);
    }

    #[test]
    fn test_skill_level_dots() {
        assert_eq!(SkillLevel::Expert.dots(), 4);
        assert_eq!(SkillLevel::Advanced.dots(), 3);
        assert_eq!(SkillLevel::Intermediate.dots(), 2);
        assert_eq!(SkillLevel::Beginner.dots(), 1);
    }

    #[test]
    fn test_group_skills_keeps_first_appearance_order() {
        let skill = |name: &str, category: &str| Skill {
            name: name.to_string(),
            category: category.to_string(),
            level: SkillLevel::Advanced,
        };
        let skills = vec![
            skill("Rust", "Languages"),
            skill("Postgres", "Data"),
            skill("Go", "Languages"),
        ];

        let groups = group_skills(&skills);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Languages");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[0].1[1].name, "Go");
        assert_eq!(groups[1].0, "Data");
    }

    #[test]
    fn test_timeline_period_and_sort() {
        let entry = |id: &str, start: NaiveDate, end: Option<NaiveDate>| TimelineEntry {
            id: id.to_string(),
            title: "Engineer".to_string(),
            organization: "Acme".to_string(),
            start_date: start,
            end_date: end,
            description: String::new(),
            kind: TimelineKind::Work,
        };
        let old = entry(
            "old",
            NaiveDate::from_ymd_opt(2018, 9, 1).unwrap(),
            NaiveDate::from_ymd_opt(2021, 6, 30),
        );
        let current = entry("current", NaiveDate::from_ymd_opt(2021, 7, 1).unwrap(), None);

        assert_eq!(old.period(), "Sep 2018 - Jun 2021");
        assert_eq!(current.period(), "Jul 2021 - Present");

        let sorted = sorted_timeline(&[old, current]);
        assert_eq!(sorted[0].id, "current");
        assert_eq!(sorted[1].id, "old");
    }

    #[test]
    fn test_activity_relative_date() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
        let item = |created_at| ActivityItem {
            id: "1".to_string(),
            kind: "PushEvent".to_string(),
            repo: "me/repo".to_string(),
            description: String::new(),
            url: String::new(),
            created_at,
        };

        assert_eq!(item(now).relative_date(now), "Today");
        assert_eq!(
            item(Utc.with_ymd_and_hms(2025, 3, 9, 8, 0, 0).unwrap()).relative_date(now),
            "Yesterday"
        );
        assert_eq!(
            item(Utc.with_ymd_and_hms(2025, 3, 6, 12, 0, 0).unwrap()).relative_date(now),
            "4 days ago"
        );
        assert_eq!(
            item(Utc.with_ymd_and_hms(2025, 2, 1, 12, 0, 0).unwrap()).relative_date(now),
            "Feb 1, 2025"
        );
    }

    #[test]
    fn test_social_links_skip_missing() {
        let social = Social {
            github: Some("https://github.com/me".to_string()),
            linkedin: None,
            twitter: None,
            devto: Some("https://dev.to/me".to_string()),
        };
        let links = social.links();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].0, "GitHub");
        assert_eq!(links[1].0, "DEV");
    }
}
