//! Server-side rendering of the site shell.
//!
//! Every string comes from the active language via the manager; direction is
//! read on each render, never cached. Placeholder substitution (`{year}`,
//! `{name}`) happens here, not in the i18n layer.

use crate::i18n::{DocumentAttributes, LanguageManager, PreferenceStore};
use chrono::{Datelike, Utc};
use std::fmt::Write;

/// Escape text for use in HTML content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Replace `{name}` placeholders. Unknown placeholders are left as-is.
pub fn fill_placeholders(template: &str, values: &[(&str, &str)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |text, (name, value)| {
            text.replace(&format!("{{{}}}", name), value)
        })
}

/// Footer copyright line for a given year.
pub fn copyright_line<S: PreferenceStore>(
    i18n: &LanguageManager<S, DocumentAttributes>,
    year: i32,
) -> String {
    let year = year.to_string();
    fill_placeholders(&i18n.t("footer.copyright"), &[("year", year.as_str())])
}

/// Forward-pointing arrow for call-to-action buttons; mirrors under RTL.
fn forward_arrow<S: PreferenceStore>(i18n: &LanguageManager<S, DocumentAttributes>) -> &'static str {
    if i18n.is_rtl() {
        "←"
    } else {
        "→"
    }
}

/// Render the full page for the active language.
pub fn render_home<S: PreferenceStore>(i18n: &LanguageManager<S, DocumentAttributes>) -> String {
    let mut html = String::from("<!DOCTYPE html>\n");
    html.push_str(&i18n.document().html_open_tag());
    let _ = write!(
        html,
        "\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body class=\"{}\">\n",
        escape_html(&i18n.t("hero.title")),
        i18n.direction()
    );

    html.push_str(&render_nav(i18n));
    html.push_str(&render_hero(i18n));
    html.push_str(&render_about(i18n));
    html.push_str(&render_categories(i18n));
    html.push_str(&render_nomination_form(i18n));
    html.push_str(&render_partner_form(i18n));
    html.push_str(&render_footer(i18n, Utc::now().year()));
    html.push_str("</body>\n</html>\n");
    html
}

pub fn render_nav<S: PreferenceStore>(i18n: &LanguageManager<S, DocumentAttributes>) -> String {
    let links = [
        ("/", "nav.home"),
        ("#about", "nav.about"),
        ("#categories", "nav.categories"),
        ("#nominate", "nav.nominate"),
        ("#partner", "nav.partner"),
        ("#gallery", "nav.gallery"),
        ("#contact", "nav.contact"),
    ];

    let mut html = String::from("<nav><ul>");
    for (href, key) in links {
        let _ = write!(
            html,
            "<li><a href=\"{}\">{}</a></li>",
            href,
            escape_html(&i18n.t(key))
        );
    }
    let _ = write!(
        html,
        "</ul><form method=\"post\" action=\"/toggle-language\">\
         <button type=\"submit\" lang=\"{}\">{}</button></form></nav>\n",
        i18n.language().other(),
        escape_html(&i18n.t("nav.switchLanguage"))
    );
    html
}

pub fn render_hero<S: PreferenceStore>(i18n: &LanguageManager<S, DocumentAttributes>) -> String {
    let arrow = forward_arrow(i18n);
    format!(
        "<header id=\"hero\"><h1>{}</h1><p>{}</p>\
         <a class=\"cta\" href=\"#nominate\">{} {}</a>\
         <a class=\"cta secondary\" href=\"#partner\">{} {}</a></header>\n",
        escape_html(&i18n.t("hero.title")),
        escape_html(&i18n.t("hero.subtitle")),
        escape_html(&i18n.t("hero.cta")),
        arrow,
        escape_html(&i18n.t("hero.secondaryCta")),
        arrow
    )
}

fn render_list(items: &[String]) -> String {
    let mut html = String::from("<ul>");
    for item in items {
        let _ = write!(html, "<li>{}</li>", escape_html(item));
    }
    html.push_str("</ul>");
    html
}

pub fn render_about<S: PreferenceStore>(i18n: &LanguageManager<S, DocumentAttributes>) -> String {
    let mut html = format!(
        "<section id=\"about\"><h2>{}</h2>",
        escape_html(&i18n.t("about.title"))
    );
    for paragraph in i18n.translate_list("about.paragraphs") {
        let _ = write!(html, "<p>{}</p>", escape_html(&paragraph));
    }
    html.push_str(&render_list(&i18n.translate_list("about.highlights")));
    html.push_str("</section>\n");
    html
}

pub fn render_categories<S: PreferenceStore>(
    i18n: &LanguageManager<S, DocumentAttributes>,
) -> String {
    format!(
        "<section id=\"categories\"><h2>{}</h2><p>{}</p>{}</section>\n",
        escape_html(&i18n.t("categories.title")),
        escape_html(&i18n.t("categories.subtitle")),
        render_list(&i18n.translate_list("categories.items"))
    )
}

fn input_field(name: &str, label: &str, kind: &str, required: &str) -> String {
    format!(
        "<label>{} <input type=\"{}\" name=\"{}\" required title=\"{}\"></label>",
        escape_html(label),
        kind,
        name,
        escape_html(required)
    )
}

fn select_field(name: &str, label: &str, placeholder: Option<&str>, options: &[String]) -> String {
    let mut html = format!("<label>{} <select name=\"{}\">", escape_html(label), name);
    if let Some(placeholder) = placeholder {
        let _ = write!(html, "<option value=\"\">{}</option>", escape_html(placeholder));
    }
    for option in options {
        let escaped = escape_html(option);
        let _ = write!(html, "<option value=\"{}\">{}</option>", escaped, escaped);
    }
    html.push_str("</select></label>");
    html
}

/// Nomination form. Labels only; submission is handled by the external form backend.
pub fn render_nomination_form<S: PreferenceStore>(
    i18n: &LanguageManager<S, DocumentAttributes>,
) -> String {
    let required = i18n.t("forms.required");
    let select_prompt = i18n.t("forms.selectCategory");
    let mut html = format!(
        "<section id=\"nominate\"><form><fieldset><legend>{}</legend>",
        escape_html(&i18n.t("forms.nomineeInfo"))
    );
    for (name, key, kind) in [
        ("nominee_name", "forms.fullName", "text"),
        ("nominee_company", "forms.company", "text"),
        ("nominee_position", "forms.position", "text"),
    ] {
        html.push_str(&input_field(name, &i18n.t(key), kind, &required));
    }
    html.push_str(&select_field(
        "category",
        &i18n.t("forms.category"),
        Some(select_prompt.as_str()),
        &i18n.translate_list("categories.items"),
    ));
    let _ = write!(
        html,
        "<label>{} <textarea name=\"reason\"></textarea></label></fieldset>",
        escape_html(&i18n.t("forms.reason"))
    );

    let _ = write!(
        html,
        "<fieldset><legend>{}</legend>",
        escape_html(&i18n.t("forms.nominatorInfo"))
    );
    for (name, key, kind) in [
        ("nominator_name", "forms.fullName", "text"),
        ("nominator_email", "forms.email", "email"),
        ("nominator_phone", "forms.phone", "tel"),
    ] {
        html.push_str(&input_field(name, &i18n.t(key), kind, &required));
    }
    let _ = write!(
        html,
        "</fieldset><button type=\"submit\" data-busy-label=\"{}\">{}</button></form></section>\n",
        escape_html(&i18n.t("forms.submitting")),
        escape_html(&i18n.t("forms.submit"))
    );
    html
}

/// Partnership enquiry form.
pub fn render_partner_form<S: PreferenceStore>(
    i18n: &LanguageManager<S, DocumentAttributes>,
) -> String {
    let required = i18n.t("forms.required");
    let mut html = format!(
        "<section id=\"partner\"><h2>{}</h2><p>{}</p><form>",
        escape_html(&i18n.t("partner.title")),
        escape_html(&i18n.t("partner.subtitle"))
    );
    for (name, key, kind) in [
        ("company", "partner.companyName", "text"),
        ("contact", "partner.contactPerson", "text"),
        ("email", "forms.email", "email"),
        ("phone", "forms.phone", "tel"),
    ] {
        html.push_str(&input_field(name, &i18n.t(key), kind, &required));
    }
    html.push_str(&select_field(
        "tier",
        &i18n.t("partner.tier"),
        None,
        &i18n.translate_list("partner.tiers"),
    ));
    let _ = write!(
        html,
        "<label>{} <textarea name=\"message\"></textarea></label>\
         <button type=\"submit\">{}</button></form></section>\n",
        escape_html(&i18n.t("partner.message")),
        escape_html(&i18n.t("partner.submit"))
    );
    html
}

pub fn render_footer<S: PreferenceStore>(
    i18n: &LanguageManager<S, DocumentAttributes>,
    year: i32,
) -> String {
    format!(
        "<footer id=\"contact\"><h3>{}</h3><p>{}</p>\
         <p><a href=\"/privacy\">{}</a> | <a href=\"/terms\">{}</a></p>\
         <p>{} {}</p></footer>\n",
        escape_html(&i18n.t("footer.quickLinks")),
        escape_html(&i18n.t("footer.followUs")),
        escape_html(&i18n.t("footer.privacy")),
        escape_html(&i18n.t("footer.terms")),
        escape_html(&copyright_line(i18n, year)),
        escape_html(&i18n.t("footer.rights"))
    )
}
