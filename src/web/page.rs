/*!
 * HTML rendering for the translator form.
 *
 * Every piece of user or upstream text goes through `html_escape` before it
 * reaches the page.
 */

use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write;

use crate::app_controller::{NoticeLevel, RunReport};
use crate::language_utils::Language;

/// Values echoed back into the form
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub url: String,
    pub source_language: Language,
    pub target_language: Language,
}

impl FormState {
    pub fn new(source_language: Language, target_language: Language) -> Self {
        Self {
            url: String::new(),
            source_language,
            target_language,
        }
    }
}

const STYLE: &str = "body{font-family:sans-serif;max-width:52rem;margin:2rem auto;padding:0 1rem}\
label{display:block;margin-top:1rem;font-weight:bold}\
input[type=text],select,textarea{width:100%;box-sizing:border-box}\
textarea{height:10rem}\
.banner{padding:.75rem;margin-top:1rem;border-radius:.25rem}\
.error{background:#fde2e1;color:#8a1c17}\
.success{background:#e1f5e4;color:#1d6b2c}\
.downloads form{display:inline-block;margin-right:.5rem}";

/// Render the full page, with results when a run has completed
pub fn render_page(form: &FormState, report: Option<&RunReport>) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>YouTube Subtitle Translator</title>\n");
    let _ = writeln!(html, "<style>{}</style>", STYLE);
    html.push_str("</head>\n<body>\n<h1>YouTube Subtitle Translator</h1>\n");

    render_form(&mut html, form);
    if let Some(report) = report {
        render_report(&mut html, report);
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_form(html: &mut String, form: &FormState) {
    html.push_str("<form method=\"post\" action=\"/translate\">\n");
    html.push_str("<label for=\"url\">YouTube Link</label>\n");
    let _ = writeln!(
        html,
        "<input type=\"text\" id=\"url\" name=\"url\" value=\"{}\">",
        encode_double_quoted_attribute(&form.url)
    );
    render_select(html, "source_language", "Select Source Language", form.source_language);
    render_select(html, "target_language", "Select Target Language", form.target_language);
    html.push_str("<p><button type=\"submit\">Translate Subtitles</button></p>\n</form>\n");
}

fn render_select(html: &mut String, name: &str, label: &str, selected: Language) {
    let _ = writeln!(html, "<label for=\"{name}\">{label}</label>\n<select id=\"{name}\" name=\"{name}\">");
    for language in Language::ALL {
        let _ = writeln!(
            html,
            "<option value=\"{}\"{}>{}</option>",
            language.code(),
            if language == selected { " selected" } else { "" },
            encode_text(&language.label())
        );
    }
    html.push_str("</select>\n");
}

fn render_report(html: &mut String, report: &RunReport) {
    if let Some(duration) = report.duration {
        let _ = writeln!(html, "<p class=\"duration\">Video Duration: {}</p>", duration);
    }
    if let Some(original) = &report.original_text {
        render_text_area(html, "original", "Original Subtitles", original);
    }
    if let Some(translated) = &report.translated_text {
        render_text_area(html, "translated", "Translated Subtitles", translated);
    }

    let downloads = report.downloads();
    if !downloads.is_empty() {
        html.push_str("<div class=\"downloads\">\n");
        for item in downloads {
            html.push_str("<form method=\"post\" action=\"/download\">\n");
            let _ = writeln!(
                html,
                "<input type=\"hidden\" name=\"file_name\" value=\"{}\">",
                encode_double_quoted_attribute(&item.file_name)
            );
            let _ = writeln!(
                html,
                "<input type=\"hidden\" name=\"content\" value=\"{}\">",
                encode_double_quoted_attribute(&item.content)
            );
            let _ = writeln!(html, "<button type=\"submit\">{}</button>\n</form>", item.label);
        }
        html.push_str("</div>\n");
    }

    for notice in &report.notices {
        let class = match notice.level {
            NoticeLevel::Error => "error",
            NoticeLevel::Success => "success",
        };
        let _ = writeln!(html, "<div class=\"banner {}\">{}</div>", class, encode_text(&notice.message));
    }
}

fn render_text_area(html: &mut String, id: &str, label: &str, text: &str) {
    let _ = writeln!(
        html,
        "<label for=\"{id}\">{label}</label>\n<textarea id=\"{id}\" readonly>{}</textarea>",
        encode_text(text)
    );
}
