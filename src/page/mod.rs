//! HTML rendering of the re-invite page.

use crate::config::Organization;
use crate::form::ReinviteForm;
use crate::reinvite::ReinviteResult;
use std::fmt::Write;

pub const TITLE: &str = "GitHub Re-invite Tool";
pub const SUBTITLE: &str =
    "Select an assignment and enter your GitHub username to re-invite yourself";
pub const REPO_NAME_PLACEHOLDER: &str = "Enter username to see generated repo name";

const STYLE: &str = r#"
body { margin: 0; }
.backdrop { min-height: 100vh; background: linear-gradient(135deg, #8B0000 0%, #000000 100%); padding: 0.75rem; box-sizing: border-box; }
main { max-width: 680px; margin: 0 auto; background: white; border-radius: 16px; box-shadow: 0 20px 40px rgba(0,0,0,0.1); padding: 1rem; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; }
header { text-align: center; margin-bottom: 1rem; }
h1 { font-size: 2.5rem; font-weight: 700; margin: 0 0 0.5rem 0; background: linear-gradient(135deg, #8B0000 0%, #000000 100%); -webkit-background-clip: text; -webkit-text-fill-color: transparent; background-clip: text; }
header p { font-size: 1.1rem; color: #6b7280; margin: 0; line-height: 1.6; }
form { display: grid; gap: 0.75rem; }
.field { display: grid; gap: 0.5rem; }
label { font-size: 0.875rem; font-weight: 600; color: #374151; text-transform: uppercase; letter-spacing: 0.05em; }
select, input { padding: 0.875rem 1rem; border: 2px solid #e5e7eb; border-radius: 8px; font-size: 1rem; transition: all 0.2s ease; outline: none; background: white; }
select:focus, input:focus { border-color: #8B0000; }
.generated { padding: 1rem; background: #f8fafc; border-radius: 8px; border: 1px solid #e2e8f0; }
.repo-name { padding: 0.875rem 1rem; background: white; border: 2px solid #e5e7eb; border-radius: 8px; font-size: 1rem; font-family: monospace; color: #374151; }
.repo-name.empty { color: #9ca3af; }
button { padding: 1rem 2rem; background: linear-gradient(135deg, #8B0000 0%, #000000 100%); color: white; border: none; border-radius: 8px; font-size: 1.1rem; font-weight: 600; cursor: pointer; transition: all 0.2s ease; box-shadow: 0 4px 12px rgba(139, 0, 0, 0.4); margin-top: 0.5rem; }
button:hover:enabled { transform: translateY(-2px); box-shadow: 0 6px 16px rgba(139, 0, 0, 0.5); }
button:disabled { background: #9ca3af; cursor: not-allowed; box-shadow: none; }
.result { margin-top: 1rem; }
.result h2 { font-size: 1.5rem; font-weight: 600; color: #1a1a1a; margin-bottom: 1rem; }
.error { background: #fef2f2; border: 1px solid #fecaca; border-radius: 8px; padding: 1rem; color: #dc2626; }
.error pre { white-space: pre-wrap; margin: 0; font-family: inherit; }
.success { background: #f0f9ff; border: 1px solid #bae6fd; border-radius: 8px; padding: 1.5rem; overflow: hidden; }
.link { background: #dcfce7; border: 1px solid #bbf7d0; border-radius: 6px; padding: 1rem; margin-bottom: 1rem; }
.link h3 { margin: 0 0 0.5rem 0; font-size: 1rem; font-weight: 600; color: #166534; }
.link a { color: #1d4ed8; text-decoration: none; font-size: 0.9rem; font-family: monospace; background: white; padding: 0.5rem 0.75rem; border-radius: 4px; border: 1px solid #d1d5db; display: inline-block; word-break: break-all; }
.link a:hover { text-decoration: underline; }
.success pre { background: white; padding: 1rem; border-radius: 6px; overflow-x: auto; font-size: 0.875rem; line-height: 1.5; color: #374151; border: 1px solid #e5e7eb; margin: 0; }
"#;

// Keeps the generated name in sync while typing; the server computes the
// same value on submit.
const SCRIPT: &str = r#"
(function () {
  var select = document.getElementById("assignment");
  var input = document.getElementById("username");
  var out = document.getElementById("repo-name");
  var form = document.getElementById("reinvite-form");
  function update() {
    var prefix = select.options[select.selectedIndex].getAttribute("data-prefix") || "";
    var user = input.value.trim();
    if (prefix && user) {
      out.textContent = prefix + "-" + user;
      out.classList.remove("empty");
    } else {
      out.textContent = out.getAttribute("data-placeholder");
      out.classList.add("empty");
    }
  }
  select.addEventListener("change", update);
  input.addEventListener("input", update);
  form.addEventListener("submit", function () {
    var button = form.querySelector("button");
    button.disabled = true;
    button.textContent = "⏳ Working...";
  });
})();
"#;

/// Everything the page needs to render.
#[derive(Debug, Clone)]
pub struct PageView<'a> {
    pub organization: &'a Organization,
    pub assignment: &'a str,
    pub username: &'a str,
    pub repo_name: String,
    pub loading: bool,
    pub result: Option<&'a ReinviteResult>,
    pub repository_link: Option<String>,
}

impl<'a> PageView<'a> {
    #[must_use]
    pub fn from_form(form: &'a ReinviteForm) -> Self {
        Self {
            organization: form.organization(),
            assignment: form.assignment(),
            username: form.username(),
            repo_name: form.repo_name(),
            loading: form.is_loading(),
            result: form.result(),
            repository_link: form.repository_link(),
        }
    }
}

/// Escape text for use in HTML content and attribute values.
#[must_use]
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Render the full page.
#[must_use]
pub fn render_page(view: &PageView<'_>) -> String {
    let mut html = String::with_capacity(8 * 1024);

    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <div class=\"backdrop\">\n<main>\n\
         <header>\n<h1>{title}</h1>\n<p>{subtitle}</p>\n</header>\n",
        title = html_escape(TITLE),
        subtitle = html_escape(SUBTITLE),
    );

    render_form(&mut html, view);
    if let Some(result) = view.result {
        render_result(&mut html, result, view.repository_link.as_deref());
    }

    let _ = write!(
        html,
        "</main>\n</div>\n<script>{SCRIPT}</script>\n</body>\n</html>\n"
    );
    html
}

fn render_form(html: &mut String, view: &PageView<'_>) {
    html.push_str(
        "<form id=\"reinvite-form\" method=\"post\" action=\"/\">\n\
         <div class=\"field\">\n<label for=\"assignment\">Assignment</label>\n\
         <select id=\"assignment\" name=\"assignment\">\n",
    );

    for assignment in &view.organization.assignments {
        let selected = if assignment.title == view.assignment {
            " selected"
        } else {
            ""
        };
        let _ = writeln!(
            html,
            "<option value=\"{value}\" data-prefix=\"{prefix}\"{selected}>📝 {label}</option>",
            value = html_escape(&assignment.title),
            prefix = html_escape(&assignment.repo_prefix),
            label = html_escape(&assignment.title),
        );
    }
    if view.organization.assignments.is_empty() {
        let _ = writeln!(
            html,
            "<option value=\"{0}\" data-prefix=\"\" selected>📝 {0}</option>",
            html_escape(view.assignment)
        );
    }

    let _ = write!(
        html,
        "</select>\n</div>\n\
         <div class=\"field\">\n<label for=\"username\">Username</label>\n\
         <input id=\"username\" name=\"username\" value=\"{username}\" \
         placeholder=\"e.g. octocat\" required autocomplete=\"off\">\n</div>\n",
        username = html_escape(view.username),
    );

    let (repo_text, repo_class) = if view.repo_name.is_empty() {
        (REPO_NAME_PLACEHOLDER, "repo-name empty")
    } else {
        (view.repo_name.as_str(), "repo-name")
    };
    let _ = write!(
        html,
        "<div class=\"field generated\">\n<label>Generated Repository Name</label>\n\
         <div id=\"repo-name\" class=\"{repo_class}\" data-placeholder=\"{placeholder}\">{repo}</div>\n\
         </div>\n",
        placeholder = html_escape(REPO_NAME_PLACEHOLDER),
        repo = html_escape(repo_text),
    );

    if view.loading {
        html.push_str("<button type=\"submit\" disabled>⏳ Working...</button>\n</form>\n");
    } else {
        html.push_str("<button type=\"submit\">🚀 Re-invite</button>\n</form>\n");
    }
}

fn render_result(html: &mut String, result: &ReinviteResult, link: Option<&str>) {
    html.push_str("<section class=\"result\">\n");

    if !result.ok() {
        let _ = write!(
            html,
            "<h2>❌ Error</h2>\n<div class=\"error\">\n<pre>{}</pre>\n</div>\n",
            html_escape(result.error().unwrap_or_default())
        );
        html.push_str("</section>\n");
        return;
    }

    html.push_str("<h2>✅ Result</h2>\n<div class=\"success\">\n");
    if let Some(url) = link {
        let url = html_escape(url);
        let _ = write!(
            html,
            "<div class=\"link\">\n<h3>🎉 Repository Link</h3>\n\
             <a href=\"{url}\" target=\"_blank\" rel=\"noopener noreferrer\">{url}</a>\n</div>\n"
        );
    }
    let _ = write!(
        html,
        "<pre>{}</pre>\n</div>\n</section>\n",
        html_escape(&result.to_pretty_json())
    );
}
