use crate::core::format::format_currency;
use crate::core::models::Project;

const INVOICE_STYLE: &str = "\
body { font-family: 'Inter', sans-serif; margin: 40px; }
.header { text-align: center; margin-bottom: 40px; }
.client-info { margin-bottom: 30px; }
.line-items { width: 100%; border-collapse: collapse; margin-bottom: 20px; }
.line-items th, .line-items td { padding: 12px; text-align: left; border-bottom: 1px solid #ddd; }
.total { font-size: 18px; font-weight: bold; text-align: right; }
.company-info { margin-bottom: 30px; }";

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Standalone printable invoice for a project. Every user-entered field is
/// escaped before it reaches the markup.
pub fn render_invoice_html(project: &Project) -> String {
    let title = escape_html(&project.title);

    let rows: String = project.line_items.iter()
        .map(|item| format!(
            "<tr><td>{}</td><td>{}</td></tr>",
            escape_html(&item.description),
            format_currency(item.cost)
        ))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <title>Invoice - {title}</title>
    <style>{style}</style>
  </head>
  <body>
    <div class="header">
      <h1>Invoice</h1>
      <h2>{title}</h2>
    </div>
    <div class="company-info">
      <h3>From:</h3>
      <p><strong>Company:</strong> {company}</p>
    </div>
    <div class="client-info">
      <h3>To:</h3>
      <p><strong>Client:</strong> {client}</p>
      <p><strong>Mobile:</strong> {mobile}</p>
    </div>
    <table class="line-items">
      <thead>
        <tr><th>Description</th><th>Amount</th></tr>
      </thead>
      <tbody>{rows}</tbody>
    </table>
    <div class="total">Total: {total}</div>
  </body>
</html>"#,
        title = title,
        style = INVOICE_STYLE,
        company = escape_html(&project.company),
        client = escape_html(&project.client_name),
        mobile = escape_html(&project.client_mobile),
        rows = rows,
        total = format_currency(project.invoice_total()),
    )
}
