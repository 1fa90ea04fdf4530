use pn_core::ScoringProfile;

pub mod profiles;

pub use profiles::{simple_profile, subreddit_category, weighted_profile};

/// Label returned when no category scores above the profile threshold.
pub const DEFAULT_CATEGORY: &str = "General";

/// One category with its keyword list and optional URL patterns.
///
/// A keyword carries its own weight so the simple and weighted tables run
/// through the same scoring loop.
#[derive(Debug, Clone)]
pub struct CategoryRule {
    pub name: &'static str,
    pub keywords: Vec<(&'static str, f32)>,
    pub url_patterns: Vec<&'static str>,
}

#[derive(Debug, Clone)]
pub struct ClassifierProfile {
    pub rules: Vec<CategoryRule>,
    /// Extra +1 per keyword that also appears in the title.
    pub title_bonus: bool,
    /// The winning score must be strictly above this, else "General".
    pub min_score: f32,
}

pub struct Classifier {
    profile: ClassifierProfile,
}

impl Classifier {
    pub fn new(profile: ClassifierProfile) -> Self {
        Self { profile }
    }

    pub fn for_profile(profile: ScoringProfile) -> Self {
        match profile {
            ScoringProfile::Simple => Self::new(simple_profile()),
            ScoringProfile::Weighted => Self::new(weighted_profile()),
        }
    }

    /// Category names in table order.
    pub fn categories(&self) -> Vec<&'static str> {
        self.profile.rules.iter().map(|r| r.name).collect()
    }

    /// Score title+content against every category's keywords, plus URL
    /// patterns against the link. Ties resolve to table order.
    pub fn classify(&self, title: &str, content: &str, url: &str) -> String {
        let title_lower = title.to_lowercase();
        let text = format!("{} {}", title_lower, content.to_lowercase());
        let url_lower = url.to_lowercase();

        let mut best_name = DEFAULT_CATEGORY;
        let mut best_score = 0.0f32;

        for rule in &self.profile.rules {
            let mut score = 0.0f32;
            for (keyword, weight) in &rule.keywords {
                if text.contains(keyword) {
                    score += weight;
                    if self.profile.title_bonus && title_lower.contains(keyword) {
                        score += 1.0;
                    }
                }
            }
            for pattern in &rule.url_patterns {
                if url_lower.contains(pattern) {
                    score += 2.0;
                }
            }
            if score > best_score {
                best_score = score;
                best_name = rule.name;
            }
        }

        if best_score <= self.profile.min_score {
            DEFAULT_CATEGORY.to_string()
        } else {
            best_name.to_string()
        }
    }

    /// Reddit posts consult the community lookup table before falling back
    /// to keyword scoring.
    pub fn classify_submission(
        &self,
        subreddit: &str,
        title: &str,
        content: &str,
        url: &str,
    ) -> String {
        match subreddit_category(subreddit) {
            Some(category) => category.to_string(),
            None => self.classify(title, content, url),
        }
    }
}
