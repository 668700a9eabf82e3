//! Standalone HTML page around the rendered graph

use std::fmt::{self, Write};

use graphview::{GraphView, SubmitAction, SubmitButton};
use htmlize::{escape_attribute, escape_text};

/// Route the history forms post their query to
pub const SEARCH_ROUTE: &str = "/search";

const STYLE: &str = "\
body { display: flex; font-family: sans-serif; margin: 0; }
#graph { flex: 1; }
#sidebar { width: 320px; padding: 1rem; }
.link { stroke: #999; stroke-opacity: 0.6; }
.node { stroke: #fff; stroke-width: 1.5px; cursor: pointer; }
.label { font-size: 12px; pointer-events: none; }
.submit-btn { display: block; width: 100%; margin: 0.25rem 0; }
";

/// Render the whole page: graph, detail panel and history slots
pub fn render_page(view: &GraphView) -> Result<String, fmt::Error> {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n<title>ScholarNet</title>\n");
    writeln!(html, "<style>\n{STYLE}</style>")?;
    html.push_str("</head>\n<body>\n");

    writeln!(html, "<div id=\"graph\">\n{}\n</div>", view.render_svg())?;

    html.push_str("<aside id=\"sidebar\">\n");
    detail_panel(&mut html, view)?;
    history_forms(&mut html, view)?;
    html.push_str("</aside>\n</body>\n</html>\n");
    Ok(html)
}

fn detail_panel(html: &mut String, view: &GraphView) -> fmt::Result {
    let panel = view.panel();
    let visibility = if panel.toggle_visible { "visible" } else { "hidden" };

    html.push_str("<section id=\"detail\">\n");
    writeln!(html, "<h2 id=\"paper-title\">{}</h2>", escape_text(panel.title.as_str()))?;
    writeln!(html, "<p id=\"paper-author\">{}</p>", escape_text(panel.author.as_str()))?;
    writeln!(
        html,
        "<button id=\"abstract-toggle\" type=\"button\" style=\"visibility: {visibility}\">{}</button>",
        panel.toggle.label()
    )?;
    writeln!(
        html,
        "<p id=\"paper-abstract\">{}</p>",
        escape_text(panel.abstract_text.as_str())
    )?;
    html.push_str("</section>\n");
    Ok(())
}

fn history_forms(html: &mut String, view: &GraphView) -> fmt::Result {
    html.push_str("<section id=\"history\">\n");
    for (i, slot) in view.history().slots().iter().enumerate() {
        let n = i + 1;
        // Empty slots stay in place but do not submit
        let disabled = match SubmitButton::new(&slot.text).click() {
            SubmitAction::Submit => "",
            SubmitAction::Prevent => " disabled",
        };
        writeln!(
            html,
            "<form action=\"{SEARCH_ROUTE}\" method=\"post\">\
<input type=\"hidden\" id=\"query{n}\" name=\"query\" value=\"{}\">\
<button id=\"hist{n}\" class=\"submit-btn\" type=\"submit\"{disabled}>{}</button></form>",
            escape_attribute(slot.query.as_str()),
            escape_text(slot.text.as_str())
        )?;
    }
    html.push_str("</section>\n");
    Ok(())
}
