//! Template engine for rendering the landing page.

use minijinja::{context, Environment};
use serde::Serialize;

use ctnatural_content::SiteContent;
use ctnatural_inquiry::{InquiryForm, InquiryState, MailTarget, ValidationError};

/// What the inquiry form shows.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InquiryView {
    /// Values to pre-fill the form with
    pub form: InquiryForm,
    /// Show the confirmation message
    pub submitted: bool,
    /// Validation message, if the last post was rejected
    pub error: Option<String>,
    /// Field the validation message refers to
    pub error_field: Option<String>,
    /// `mailto:` URL to navigate to on load
    pub redirect: Option<String>,
}

impl InquiryView {
    /// View of the current controller state.
    pub fn from_state(state: &InquiryState) -> Self {
        Self {
            form: state.form.clone(),
            submitted: state.is_submitted(),
            ..Default::default()
        }
    }

    /// Attach a rejected-submission message.
    pub fn with_error(mut self, error: &ValidationError) -> Self {
        self.error = Some(error.to_string());
        self.error_field = Some(error.field().to_string());
        self
    }

    /// Navigate to `url` once the page loads.
    pub fn with_redirect(mut self, url: impl Into<String>) -> Self {
        self.redirect = Some(url.into());
        self
    }
}

/// Context for rendering the landing page.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    /// Site content
    pub site: &'a SiteContent,
    /// Base URL, ending in `/`
    pub base_url: &'a str,
    /// Inquiry form state
    pub inquiry: &'a InquiryView,
    /// Include the live reload client
    pub live_reload: bool,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the landing page templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        for (name, source) in [
            ("base.html", BASE_TEMPLATE),
            ("landing.html", LANDING_TEMPLATE),
            ("features.html", FEATURES_TEMPLATE),
            ("testimonials.html", TESTIMONIALS_TEMPLATE),
            ("contact.html", CONTACT_TEMPLATE),
        ] {
            env.add_template_owned(name.to_string(), source.to_string())
                .expect("Failed to add built-in template");
        }

        Self { env }
    }

    /// Render the landing page.
    pub fn render_landing(&self, ctx: &PageContext<'_>) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("landing.html")?;
        let target = MailTarget::new(&ctx.site.contact.email, &ctx.site.company_name);

        tmpl.render(context! {
            site => ctx.site,
            base_url => ctx.base_url,
            inquiry => ctx.inquiry,
            live_reload => ctx.live_reload,
            mail_recipient => &target.recipient,
            mail_subject => target.subject(),
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ site.company_name }}{% if site.tagline %} - {{ site.tagline }}{% endif %}</title>
  {% if inquiry.redirect %}<meta http-equiv="refresh" content="0;url={{ inquiry.redirect }}">
  {% endif %}<link rel="stylesheet" href="{{ base_url }}assets/main.css">
</head>
<body>
  {% block body %}{% endblock %}
  <script src="{{ base_url }}assets/main.js"></script>
  {% if live_reload %}<script src="{{ base_url }}__reload.js"></script>{% endif %}
</body>
</html>"##;

const LANDING_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block body %}
<header class="site-header">
  <div class="container header-row">
    <a href="{{ base_url }}" class="brand">
      {% if site.logo %}<img src="{{ base_url }}{{ site.logo }}" alt="{{ site.company_name }} logo" class="logo">{% endif %}
      <p class="tagline">{{ site.tagline }}</p>
    </a>
    <nav class="site-nav">
      <a href="#features">Features</a>
      <a href="#product">Product</a>
      <a href="#docs">Docs</a>
      <a href="#contact">Contact</a>
      <a href="#contact" class="btn">Get a Quote</a>
    </nav>
  </div>
</header>

<section class="hero">
  <div class="container two-col">
    <div class="hero-copy">
      <h1>{{ site.hero.headline }} <span class="emphasis">{{ site.hero.emphasis }}</span> {{ site.hero.tail }}</h1>
      <p class="lede">{{ site.hero.lede }}</p>
      <div class="actions">
        <a href="#contact" class="btn">Talk to Sales</a>
        {% for link in site.docs.links %}<a href="{{ link.href }}" class="btn btn-outline">{{ link.label }}</a>
        {% endfor %}
      </div>
      <ul class="badges">
      {% for badge in site.badges %}
        <li class="badge"><span class="icon icon-{{ badge.icon }}" aria-hidden="true"></span> {{ badge.label }}</li>
      {% endfor %}
      </ul>
    </div>
    <div class="frame">
      <img src="{{ site.images.hero }}" alt="Imaging suite">
    </div>
  </div>
</section>

<section class="social-proof">
  <div class="container logo-strip">
    {% for i in range(6) %}<div class="logo-slot"></div>{% endfor %}
  </div>
</section>

{% include "features.html" %}

<section id="product" class="product">
  <div class="container two-col">
    <div>
      <h3>{{ site.product.heading }}</h3>
      <ul class="highlights">
      {% for item in site.product.highlights %}
        <li class="highlight"><span class="icon icon-check-circle" aria-hidden="true"></span><span>{{ item }}</span></li>
      {% endfor %}
      </ul>
      <div class="actions">
        <a href="#contact" class="btn">Request Pricing</a>
        <a href="#contact" class="btn btn-outline">Book a Demo</a>
      </div>
    </div>
    <div class="frame">
      <img src="{{ site.images.product }}" alt="{{ site.company_name }} product">
    </div>
  </div>
</section>

{% include "testimonials.html" %}

<section id="docs" class="docs">
  <div class="container">
    <div class="docs-banner">
      <div>
        <h3>{{ site.docs.heading }}</h3>
        <p>{{ site.docs.lede }}</p>
      </div>
      <div class="actions">
      {% for link in site.docs.links %}
        <a href="{{ link.href }}" class="btn btn-light">{{ link.label }}</a>
      {% endfor %}
      </div>
    </div>
  </div>
</section>

{% include "contact.html" %}

<footer class="site-footer">
  <div class="container three-col">
    <div class="brand">
      <div class="monogram">{{ site.logo_text }}</div>
      <div>
        <p class="footer-name">{{ site.company_name }}</p>
        <p class="tagline">{{ site.tagline }}</p>
      </div>
    </div>
    <p class="copyright">&copy; {% if site.copyright_year %}{{ site.copyright_year }} {% endif %}{{ site.company_name }}. All rights reserved.</p>
    <nav class="footer-nav">
      <a href="#">Privacy</a>
      <a href="#docs">SDS</a>
      <a href="#contact">Contact</a>
    </nav>
  </div>
</footer>
{% endblock %}"##;

const FEATURES_TEMPLATE: &str = r##"<section id="features" class="features">
  <div class="container">
    <div class="section-head">
      <h2>Why imaging teams choose {{ site.company_name }}</h2>
    </div>
    <div class="grid">
    {% for feature in site.features %}
      <article class="card feature">
        <div class="feature-title"><span class="icon icon-{{ feature.icon }}" aria-hidden="true"></span><span>{{ feature.title }}</span></div>
        <p>{{ feature.description }}</p>
      </article>
    {% endfor %}
    </div>
  </div>
</section>"##;

const TESTIMONIALS_TEMPLATE: &str = r##"<section class="testimonials">
  <div class="container">
    <div class="section-head">
      <h3>Teams love the simplicity</h3>
    </div>
    <div class="grid grid-3">
    {% for t in site.testimonials %}
      <figure class="card testimonial">
        <div class="stars" aria-label="5 out of 5">{% for i in range(5) %}<span class="icon icon-star" aria-hidden="true"></span>{% endfor %}</div>
        <blockquote>&ldquo;{{ t.quote }}&rdquo;</blockquote>
        <figcaption><span class="who">{{ t.name }}</span> &middot; {{ t.role }}</figcaption>
      </figure>
    {% endfor %}
    </div>
  </div>
</section>"##;

const CONTACT_TEMPLATE: &str = r##"<section id="contact" class="contact">
  <div class="container two-col">
    <div>
      <h3>Talk to our team</h3>
      <p class="lede">Tell us about your imaging suite and needs. We'll follow up with product details and next steps.</p>
      <ul class="channels">
        <li><span class="icon icon-mail" aria-hidden="true"></span> {{ site.contact.email }}</li>
        {% if site.contact.phone %}<li><span class="icon icon-phone" aria-hidden="true"></span> {{ site.contact.phone }}</li>{% endif %}
        {% if site.contact.address %}<li><span class="icon icon-map-pin" aria-hidden="true"></span> {{ site.contact.address }}</li>{% endif %}
      </ul>
    </div>

    <form id="inquiry" class="card inquiry" method="post" action="{{ base_url }}inquiry"
          data-recipient="{{ mail_recipient }}" data-subject="{{ mail_subject }}">
      <div class="fields">
        <label>Name
          <input name="name" required value="{{ inquiry.form.name }}"{% if inquiry.error_field == "name" %} aria-invalid="true"{% endif %}>
        </label>
        <label>Email
          <input name="email" type="email" required value="{{ inquiry.form.email }}"{% if inquiry.error_field == "email" %} aria-invalid="true"{% endif %}>
        </label>
        <label class="wide">Organization
          <input name="company" value="{{ inquiry.form.company }}">
        </label>
        <label class="wide">Message
          <textarea name="message" rows="4" required{% if inquiry.error_field == "message" %} aria-invalid="true"{% endif %}>{{ inquiry.form.message }}</textarea>
        </label>
      </div>
      <div class="form-actions">
        <button type="submit" class="btn">Send Inquiry</button>
        {% if inquiry.error %}<span class="form-error" role="alert">{{ inquiry.error }}</span>{% endif %}
        <span class="form-status"{% if not inquiry.submitted %} hidden{% endif %}>Thanks! Your email client should open&hellip;</span>
      </div>
    </form>
  </div>
</section>"##;
