//! Content record types.

use serde::{Deserialize, Serialize};

use crate::loader::ContentError;

/// Everything the landing page displays.
///
/// List fields keep their declaration order; the renderer emits them as-is.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SiteContent {
    /// Brand name, also used in the inquiry subject line
    pub company_name: String,

    /// One-line brand description shown under the logo
    #[serde(default)]
    pub tagline: String,

    /// Short monogram shown in the footer badge
    #[serde(default)]
    pub logo_text: String,

    /// Logo image, relative to the public directory
    #[serde(default)]
    pub logo: Option<String>,

    /// Year printed in the footer copyright line
    #[serde(default)]
    pub copyright_year: Option<u16>,

    #[serde(default)]
    pub brand: Brand,

    pub contact: Contact,

    #[serde(default)]
    pub images: Images,

    #[serde(default)]
    pub hero: Hero,

    /// Small trust markers under the hero buttons
    #[serde(default)]
    pub badges: Vec<Badge>,

    #[serde(default)]
    pub features: Vec<Feature>,

    #[serde(default)]
    pub product: Product,

    #[serde(default)]
    pub testimonials: Vec<Testimonial>,

    #[serde(default)]
    pub docs: Docs,
}

/// Brand color tokens.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Brand {
    #[serde(default = "default_primary")]
    pub primary: String,
    #[serde(default = "default_accent")]
    pub accent: String,
}

fn default_primary() -> String {
    "#16a34a".to_string()
}
fn default_accent() -> String {
    "#22c55e".to_string()
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            primary: default_primary(),
            accent: default_accent(),
        }
    }
}

/// Support contact channels.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Contact {
    /// Recipient of inquiry emails
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
}

/// Image references. Any URL the browser can load.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Images {
    #[serde(default)]
    pub hero: String,
    #[serde(default)]
    pub product: String,
}

/// Hero headline copy.
///
/// The headline renders as `headline <emphasis> tail`, with the emphasis in
/// the brand color.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Hero {
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub emphasis: String,
    #[serde(default)]
    pub tail: String,
    #[serde(default)]
    pub lede: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Badge {
    pub icon: String,
    pub label: String,
}

/// A feature card.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Feature {
    /// Icon name, resolved by the stylesheet
    pub icon: String,
    pub title: String,
    #[serde(alias = "desc")]
    pub description: String,
}

/// Product section copy.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Product {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

/// A customer quote.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub quote: String,
}

/// Documentation call-to-action.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Docs {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub lede: String,
    #[serde(default)]
    pub links: Vec<DocLink>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DocLink {
    pub label: String,
    #[serde(default = "default_href")]
    pub href: String,
}

fn default_href() -> String {
    "#".to_string()
}

impl SiteContent {
    /// Check the fields the page cannot do without.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.company_name.trim().is_empty() {
            return Err(ContentError::Invalid("company_name is empty".to_string()));
        }

        if self.contact.email.trim().is_empty() {
            return Err(ContentError::Invalid("contact.email is empty".to_string()));
        }

        if let Some(pos) = self.features.iter().position(|f| f.title.trim().is_empty()) {
            return Err(ContentError::Invalid(format!(
                "features[{}] has an empty title",
                pos
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> SiteContent {
        SiteContent {
            company_name: "Acme".to_string(),
            tagline: String::new(),
            logo_text: String::new(),
            logo: None,
            copyright_year: None,
            brand: Brand::default(),
            contact: Contact {
                email: "hi@acme.test".to_string(),
                ..Default::default()
            },
            images: Images::default(),
            hero: Hero::default(),
            badges: vec![],
            features: vec![],
            product: Product::default(),
            testimonials: vec![],
            docs: Docs::default(),
        }
    }

    #[test]
    fn accepts_minimal_content() {
        assert!(minimal().validate().is_ok());
    }

    #[test]
    fn rejects_blank_company_name() {
        let mut content = minimal();
        content.company_name = "   ".to_string();

        assert!(matches!(content.validate(), Err(ContentError::Invalid(_))));
    }

    #[test]
    fn rejects_missing_support_email() {
        let mut content = minimal();
        content.contact.email.clear();

        let err = content.validate().unwrap_err();
        assert!(err.to_string().contains("contact.email"));
    }

    #[test]
    fn rejects_untitled_feature() {
        let mut content = minimal();
        content.features.push(Feature {
            icon: "leaf".to_string(),
            title: String::new(),
            description: "x".to_string(),
        });

        let err = content.validate().unwrap_err();
        assert!(err.to_string().contains("features[0]"));
    }
}
