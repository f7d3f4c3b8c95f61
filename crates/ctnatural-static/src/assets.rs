//! Asset pipeline for CSS and JavaScript processing.

use ctnatural_content::Brand;

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Generate the main CSS file with the brand colors as custom properties.
    pub fn generate_css(brand: &Brand) -> String {
        format!(
            ":root {{\n  --brand: {};\n  --accent: {};\n}}\n\n{}",
            brand.primary, brand.accent, DEFAULT_CSS
        )
    }

    /// Generate the main JavaScript file.
    pub fn generate_js() -> String {
        DEFAULT_JS.to_string()
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }

    /// Generate CSS, minified when asked. Falls back to the readable
    /// stylesheet if minification fails.
    pub fn stylesheet(brand: &Brand, minify: bool) -> String {
        let css = Self::generate_css(brand);
        if !minify {
            return css;
        }

        match Self::minify_css(&css) {
            Ok(min) => min,
            Err(e) => {
                tracing::warn!("Serving unminified CSS: {}", e);
                css
            }
        }
    }
}

const DEFAULT_CSS: &str = r#"/* CT Natural landing page */

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: system-ui, -apple-system, sans-serif;
  color: #0f172a;
  background: linear-gradient(to bottom, #ffffff, #ecfdf5);
  line-height: 1.6;
  min-height: 100vh;
}

img {
  display: block;
  max-width: 100%;
}

a {
  color: inherit;
  text-decoration: none;
}

.container {
  max-width: 80rem;
  margin: 0 auto;
  padding: 0 1.5rem;
}

.two-col,
.three-col {
  display: grid;
  gap: 2.5rem;
  align-items: center;
}

/* Header */
.site-header {
  position: sticky;
  top: 0;
  z-index: 40;
  border-bottom: 1px solid #a7f3d0;
  background: rgba(255, 255, 255, 0.8);
  backdrop-filter: blur(8px);
}

.header-row {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding-top: 0.75rem;
  padding-bottom: 0.75rem;
}

.brand {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.logo {
  height: 5rem;
  width: auto;
}

.tagline {
  font-size: 0.875rem;
  color: #64748b;
}

.site-nav {
  display: none;
  align-items: center;
  gap: 1.5rem;
  font-size: 0.875rem;
  color: #475569;
}

/* Buttons */
.btn {
  display: inline-block;
  padding: 0.5rem 1rem;
  border-radius: 0.75rem;
  border: 1px solid transparent;
  font-weight: 600;
  background: var(--brand);
  color: #ffffff;
  cursor: pointer;
  transition: opacity 0.15s;
}

.btn:hover {
  opacity: 0.9;
}

.btn-outline {
  background: #ffffff;
  color: #0f172a;
  border-color: #6ee7b7;
}

.btn-light {
  background: #f1f5f9;
  color: #0f172a;
}

.actions {
  display: flex;
  flex-wrap: wrap;
  gap: 0.75rem;
  margin-top: 1.5rem;
}

/* Hero */
.hero .two-col {
  padding-top: 3.5rem;
  padding-bottom: 3.5rem;
}

.hero h1 {
  font-size: 1.875rem;
  font-weight: 600;
  line-height: 1.2;
}

.emphasis {
  color: var(--brand);
}

.lede {
  margin-top: 1rem;
  color: #475569;
}

.badges {
  list-style: none;
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
  margin-top: 1rem;
  font-size: 0.875rem;
  color: #475569;
}

.frame {
  overflow: hidden;
  border-radius: 1.5rem;
  box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
  outline: 1px solid #a7f3d0;
}

/* Social proof */
.social-proof {
  border-top: 1px solid #a7f3d0;
  border-bottom: 1px solid #a7f3d0;
  background: rgba(255, 255, 255, 0.6);
}

.logo-strip {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 1.5rem;
  padding-top: 2rem;
  padding-bottom: 2rem;
}

.logo-slot {
  height: 2rem;
  border-radius: 0.25rem;
  background: #d1fae5;
}

/* Sections */
.features,
.testimonials,
.contact {
  padding: 4rem 0;
}

.product {
  background: rgba(255, 255, 255, 0.7);
  padding: 4rem 0;
}

.section-head {
  text-align: center;
  margin-bottom: 2.5rem;
}

h2,
h3 {
  font-size: 1.5rem;
  font-weight: 600;
}

.grid {
  display: grid;
  gap: 1rem;
}

.card {
  background: #ffffff;
  border: 1px solid #a7f3d0;
  border-radius: 1rem;
  box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
  padding: 1.5rem;
}

.feature-title {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  margin-bottom: 0.75rem;
  padding: 0.5rem 0.75rem;
  border-radius: 0.75rem;
  color: var(--brand);
  font-size: 0.875rem;
  font-weight: 600;
}

.feature p {
  font-size: 0.875rem;
  color: #475569;
}

.highlights {
  list-style: none;
  margin-top: 1.5rem;
}

.highlight {
  display: flex;
  align-items: flex-start;
  gap: 0.5rem;
  margin-bottom: 0.75rem;
  color: #334155;
}

.stars {
  display: flex;
  gap: 0.25rem;
  margin-bottom: 0.75rem;
  color: #f59e0b;
}

.testimonial figcaption {
  margin-top: 1rem;
  font-size: 0.875rem;
  color: #64748b;
}

.who {
  font-weight: 500;
  color: #334155;
}

/* Docs banner */
.docs-banner {
  display: grid;
  gap: 1.5rem;
  align-items: center;
  padding: 2rem;
  border-radius: 1.5rem;
  color: #ffffff;
  background: linear-gradient(to right, var(--brand), var(--accent));
}

/* Contact */
.channels {
  list-style: none;
  margin-top: 1.5rem;
  font-size: 0.875rem;
  color: #334155;
}

.fields {
  display: grid;
  gap: 1rem;
}

.fields label {
  display: block;
  font-size: 0.875rem;
  font-weight: 500;
}

.fields input,
.fields textarea {
  display: block;
  width: 100%;
  margin-top: 0.25rem;
  padding: 0.5rem 0.75rem;
  border: 1px solid #6ee7b7;
  border-radius: 0.75rem;
  font: inherit;
}

.fields [aria-invalid="true"] {
  border-color: #dc2626;
}

.form-actions {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-top: 1rem;
}

.form-status {
  font-size: 0.875rem;
  color: #047857;
}

.form-error {
  font-size: 0.875rem;
  color: #dc2626;
}

/* Footer */
.site-footer {
  border-top: 1px solid #a7f3d0;
  background: rgba(255, 255, 255, 0.7);
  padding: 2.5rem 0;
}

.monogram {
  display: grid;
  place-items: center;
  width: 2.25rem;
  height: 2.25rem;
  border-radius: 0.75rem;
  background: var(--brand);
  color: #ffffff;
  font-weight: 700;
}

.footer-name {
  font-size: 0.875rem;
  font-weight: 600;
}

.copyright,
.footer-nav {
  font-size: 0.875rem;
  color: #475569;
}

.footer-nav {
  display: flex;
  gap: 1rem;
}

/* Responsive */
@media (min-width: 768px) {
  .site-nav {
    display: flex;
  }

  .two-col {
    grid-template-columns: 1fr 1fr;
  }

  .three-col {
    grid-template-columns: repeat(3, 1fr);
  }

  .logo-strip {
    grid-template-columns: repeat(6, 1fr);
  }

  .grid-3 {
    grid-template-columns: repeat(3, 1fr);
  }

  .hero h1 {
    font-size: 3rem;
  }

  .fields {
    grid-template-columns: 1fr 1fr;
  }

  .fields .wide {
    grid-column: span 2;
  }
}

@media (min-width: 1024px) {
  .grid {
    grid-template-columns: repeat(3, 1fr);
  }
}
"#;

// Mirrors the server's /inquiry handler for statically hosted pages.
const DEFAULT_JS: &str = r#"// CT Natural - inquiry form
(function() {
  'use strict';

  const form = document.getElementById('inquiry');
  if (!form) return;

  const status = form.querySelector('.form-status');

  form.addEventListener('submit', function(event) {
    // Native required/email checks have already passed at this point
    event.preventDefault();

    const value = function(name) {
      return form.elements[name] ? form.elements[name].value : '';
    };

    const subject = encodeURIComponent(form.dataset.subject);
    const body = encodeURIComponent(
      'Name: ' + value('name') + '\n' +
      'Email: ' + value('email') + '\n' +
      'Company: ' + value('company') + '\n\n' +
      value('message')
    );

    window.location.href = 'mailto:' + form.dataset.recipient +
      '?subject=' + subject + '&body=' + body;

    if (status) status.hidden = false;
  });
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn brand() -> Brand {
        Brand {
            primary: "#0ea5e9".to_string(),
            accent: "#38bdf8".to_string(),
        }
    }

    #[test]
    fn generates_css_with_brand_tokens() {
        let css = AssetPipeline::generate_css(&brand());

        assert!(css.starts_with(":root"));
        assert!(css.contains("--brand: #0ea5e9;"));
        assert!(css.contains("--accent: #38bdf8;"));
        assert!(css.contains("var(--brand)"));
    }

    #[test]
    fn generates_js() {
        let js = AssetPipeline::generate_js();

        assert!(js.contains("encodeURIComponent"));
        assert!(js.contains("'mailto:'"));
        assert!(js.contains("'Company: '"));
    }

    #[test]
    fn minifies_css() {
        let css = r#"
.button {
    background-color: blue;
    padding: 10px;
}
        "#;

        let minified = AssetPipeline::minify_css(css).unwrap();

        assert!(!minified.contains('\n'));
        assert!(minified.contains(".button"));
    }

    #[test]
    fn minifies_full_stylesheet() {
        let css = AssetPipeline::stylesheet(&brand(), true);

        assert!(!css.contains("/* CT Natural"));
        assert!(css.contains("--brand"));
    }

    #[test]
    fn leaves_stylesheet_readable_without_minify() {
        let css = AssetPipeline::stylesheet(&brand(), false);

        assert!(css.contains("/* CT Natural landing page */"));
    }
}
