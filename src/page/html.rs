//! Static HTML backend.
//!
//! Produces a complete HTML5 document from a [`Page`]. Every piece of
//! profile text goes through [`escape_html`]; asset links are prefixed with
//! the configured base path so the page works when served from a sub-path.

use super::model::{
    CardAction, ContactCard, Footer, Hero, Link, Nav, Page, Section, SectionBody,
};
use super::state::EmailState;

const NAV_TOGGLE_ID: &str = "nav-toggle";

/// Closes the nav menu on link activation, swaps the email placeholder for
/// the address once, and opens the mail composer from the footer.
const PAGE_SCRIPT: &str = r"(function () {
  var toggle = document.getElementById('nav-toggle');
  document.querySelectorAll('[data-nav-link]').forEach(function (link) {
    link.addEventListener('click', function () {
      if (toggle) { toggle.checked = false; }
    });
  });
  document.querySelectorAll('[data-reveal-email]').forEach(function (card) {
    card.addEventListener('click', function () {
      var value = card.querySelector('.contact-value');
      if (value) { value.textContent = card.getAttribute('data-reveal-email'); }
      card.setAttribute('aria-expanded', 'true');
      card.disabled = true;
    }, { once: true });
  });
  document.querySelectorAll('[data-mailto]').forEach(function (button) {
    button.addEventListener('click', function () {
      window.location.href = button.getAttribute('data-mailto');
    });
  });
})();";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Prefix for asset links. Normalised to end with `/`.
    pub base_path: String,
    /// Stylesheet path relative to the base path.
    pub stylesheet: String,
    pub lang: String,
    /// Document title; `None` uses `<name> · <title>`.
    pub title: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            base_path: "./".to_string(),
            stylesheet: "assets/portfolio.css".to_string(),
            lang: "en".to_string(),
            title: None,
        }
    }
}

impl RenderOptions {
    /// Stylesheet href under the base path. Absolute URLs are used as given.
    #[must_use]
    pub fn stylesheet_href(&self) -> String {
        if self.stylesheet.contains("://") || self.stylesheet.starts_with("//") {
            return self.stylesheet.clone();
        }
        format!(
            "{}{}",
            normalize_base_path(&self.base_path),
            self.stylesheet.trim_start_matches('/')
        )
    }
}

/// `""` becomes `./`; anything else gains a trailing `/`.
#[must_use]
pub fn normalize_base_path(base: &str) -> String {
    let base = base.trim();
    if base.is_empty() {
        "./".to_string()
    } else if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{base}/")
    }
}

#[must_use]
pub fn escape_html(input: &str) -> String {
    input
        .chars()
        .map(|ch| match ch {
            '<' => "&lt;".into(),
            '>' => "&gt;".into(),
            '&' => "&amp;".into(),
            '"' => "&quot;".into(),
            '\'' => "&#39;".into(),
            _ => ch.to_string(),
        })
        .collect::<String>()
}

/// Render the whole document.
#[must_use]
pub fn render_html(page: &Page, options: &RenderOptions) -> String {
    let title = options
        .title
        .clone()
        .unwrap_or_else(|| format!("{} · {}", page.hero.name, page.hero.title));

    let mut html = String::new();
    html.push_str("<!doctype html>\n");
    html.push_str(&format!("<html lang=\"{}\">\n", escape_html(&options.lang)));
    html.push_str("<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_html(&title)));
    html.push_str(&format!(
        "<link rel=\"stylesheet\" href=\"{}\">\n",
        escape_html(&options.stylesheet_href())
    ));
    html.push_str("</head>\n");
    html.push_str("<body>\n");
    html.push_str("<div class=\"app\">\n");
    render_nav(&mut html, &page.nav);
    render_hero(&mut html, &page.hero);
    html.push_str("<main class=\"main\">\n");
    for section in &page.sections {
        render_section(&mut html, section);
    }
    html.push_str("</main>\n");
    render_footer(&mut html, &page.footer);
    html.push_str("</div>\n");
    html.push_str(&format!("<script>\n{PAGE_SCRIPT}\n</script>\n"));
    html.push_str("</body>\n");
    html.push_str("</html>\n");
    html
}

fn link_attrs(link: &Link) -> String {
    let mut attrs = format!("href=\"{}\"", escape_html(&link.href));
    if let Some(rel) = link.target.rel() {
        attrs.push_str(&format!(" target=\"_blank\" rel=\"{rel}\""));
    }
    attrs
}

fn render_link(html: &mut String, link: &Link, class: Option<&str>) {
    let class_attr = class.map(|c| format!(" class=\"{c}\"")).unwrap_or_default();
    html.push_str(&format!(
        "<a {}{class_attr}>{}</a>\n",
        link_attrs(link),
        escape_html(&link.label)
    ));
}

fn render_nav(html: &mut String, nav: &Nav) {
    html.push_str("<nav class=\"nav\" aria-label=\"Main\">\n");
    let checked = if nav.menu.is_open() { " checked" } else { "" };
    html.push_str(&format!(
        "<input type=\"checkbox\" id=\"{NAV_TOGGLE_ID}\" class=\"nav-checkbox\" \
         aria-hidden=\"true\"{checked}>\n"
    ));
    html.push_str("<div class=\"nav-inner\">\n");
    html.push_str(&format!(
        "<a href=\"#\" class=\"nav-logo\">{}</a>\n",
        escape_html(&nav.logo)
    ));
    html.push_str("<ul class=\"nav-links\">\n");
    for item in &nav.items {
        html.push_str(&format!(
            "<li><a href=\"{}\" class=\"nav-link\" data-nav-link>{}</a></li>\n",
            escape_html(&item.href),
            escape_html(item.label)
        ));
    }
    html.push_str("</ul>\n");
    html.push_str(&format!(
        "<label for=\"{NAV_TOGGLE_ID}\" class=\"nav-toggle\" aria-label=\"Toggle menu\">\n"
    ));
    for _ in 0..3 {
        html.push_str("<span class=\"nav-toggle-bar\"></span>\n");
    }
    html.push_str("</label>\n");
    html.push_str("</div>\n");
    html.push_str("</nav>\n");
}

fn render_hero(html: &mut String, hero: &Hero) {
    html.push_str("<header class=\"hero\">\n");
    html.push_str(&format!("<h1 class=\"hero-name\">{}</h1>\n", escape_html(&hero.name)));
    html.push_str(&format!("<p class=\"hero-title\">{}</p>\n", escape_html(&hero.title)));
    html.push_str(&format!(
        "<p class=\"hero-location\">{}</p>\n",
        escape_html(&hero.location)
    ));
    html.push_str("<div class=\"hero-actions\">\n");
    for (i, action) in hero.actions.iter().enumerate() {
        let class = if i == 0 { "btn btn-primary" } else { "btn btn-secondary" };
        render_link(html, action, Some(class));
    }
    html.push_str("</div>\n");
    html.push_str("</header>\n");
}

fn render_section(html: &mut String, section: &Section) {
    html.push_str(&format!(
        "<section id=\"{}\" class=\"section\">\n",
        section.anchor()
    ));
    html.push_str(&format!(
        "<h2 class=\"section-title\">{}</h2>\n",
        escape_html(&section.title)
    ));
    match &section.body {
        SectionBody::Contact(cards) => {
            html.push_str("<div class=\"contact-grid\">\n");
            for card in cards {
                render_contact_card(html, card);
            }
            html.push_str("</div>\n");
        }
        SectionBody::Paragraph(text) => {
            html.push_str(&format!("<p class=\"about-text\">{}</p>\n", escape_html(text)));
        }
        SectionBody::Skills(groups) => {
            html.push_str("<div class=\"skills-grid\">\n");
            for group in groups {
                html.push_str("<div class=\"skill-category\">\n");
                html.push_str(&format!(
                    "<h3 class=\"skill-category-title\">{}</h3>\n",
                    escape_html(&group.category)
                ));
                render_list(html, "skill-list", &group.items);
                html.push_str("</div>\n");
            }
            html.push_str("</div>\n");
        }
        SectionBody::Experience(jobs) => {
            html.push_str("<div class=\"experience-list\">\n");
            for job in jobs {
                html.push_str("<article class=\"experience-item\">\n");
                html.push_str("<div class=\"experience-header\">\n");
                html.push_str(&format!(
                    "<h3 class=\"experience-role\">{}</h3>\n",
                    escape_html(&job.role)
                ));
                html.push_str(&format!(
                    "<p class=\"experience-company\">{}</p>\n",
                    escape_html(&job.company_line())
                ));
                html.push_str(&format!(
                    "<p class=\"experience-period\">{}</p>\n",
                    escape_html(&job.period)
                ));
                html.push_str("</div>\n");
                render_list(html, "experience-bullets", &job.bullets);
                html.push_str("</article>\n");
            }
            html.push_str("</div>\n");
        }
        SectionBody::Education {
            degree,
            school,
            year,
        } => {
            html.push_str("<div class=\"education-block\">\n");
            html.push_str(&format!(
                "<h3 class=\"education-degree\">{}</h3>\n",
                escape_html(degree)
            ));
            html.push_str(&format!(
                "<p class=\"education-school\">{}</p>\n",
                escape_html(school)
            ));
            html.push_str(&format!("<p class=\"education-year\">{}</p>\n", escape_html(year)));
            html.push_str("</div>\n");
        }
        SectionBody::List(items) => {
            render_list(html, &format!("{}-list", section.anchor()), items);
        }
    }
    html.push_str("</section>\n");
}

fn render_list(html: &mut String, class: &str, items: &[String]) {
    html.push_str(&format!("<ul class=\"{class}\">\n"));
    for item in items {
        html.push_str(&format!("<li>{}</li>\n", escape_html(item)));
    }
    html.push_str("</ul>\n");
}

fn card_inner(card: &ContactCard) -> String {
    format!(
        "<span class=\"contact-icon\" aria-hidden=\"true\">{}</span>\
         <span class=\"contact-label\">{}</span>\
         <span class=\"contact-value\">{}</span>",
        escape_html(card.icon),
        escape_html(&card.label),
        escape_html(&card.value)
    )
}

fn render_contact_card(html: &mut String, card: &ContactCard) {
    match &card.action {
        CardAction::Link(link) => {
            html.push_str(&format!(
                "<a {} class=\"contact-card\">{}</a>\n",
                link_attrs(link),
                card_inner(card)
            ));
        }
        CardAction::RevealEmail {
            address,
            state: EmailState::Masked,
        } => {
            html.push_str(&format!(
                "<button type=\"button\" class=\"contact-card contact-card-reveal\" \
                 data-reveal-email=\"{}\" aria-expanded=\"false\">{}</button>\n",
                escape_html(address),
                card_inner(card)
            ));
        }
        CardAction::RevealEmail {
            state: EmailState::Revealed,
            ..
        } => {
            html.push_str(&format!(
                "<div class=\"contact-card contact-card-revealed\">{}</div>\n",
                card_inner(card)
            ));
        }
    }
}

fn render_footer(html: &mut String, footer: &Footer) {
    html.push_str("<footer class=\"footer\">\n");
    html.push_str("<p>\n");
    html.push_str(&format!(
        "<button type=\"button\" class=\"footer-email\" data-mailto=\"{}\">{}</button>\n",
        escape_html(&footer.mailto),
        escape_html(&footer.email)
    ));
    html.push_str(&format!(
        "<noscript><a href=\"{}\">{}</a></noscript>\n",
        escape_html(&footer.mailto),
        escape_html(&footer.email)
    ));
    for link in &footer.links {
        html.push_str("<span class=\"footer-dot\">·</span>\n");
        render_link(html, link, None);
    }
    html.push_str("</p>\n");
    html.push_str("</footer>\n");
}
